//! 依赖注入器
//!
//! 两阶段装配：先按层顺序扫描并实例化全部组件，再为每个实例填充依赖。
//! 拆成两个阶段后，任何实例都能引用任意层注册的依赖，装配结果与层顺序无关。

use crate::introspector::ComponentIntrospector;
use crate::registry::DependencyRegistry;
use crate::scanner::StaticComponentScanner;
use crate::serializer::QualifiedNameSerializer;
use di_abstractions::{
    AppModule, ComponentScanner, DependencyContainer, DependencyIntrospector, KeySerializer,
};
use infrastructure_common::{
    ComponentInstance, ComponentPattern, DependencyError, DependencyKey, DependencyResult,
    InjectorState, Layer, SerializedKey,
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info};

/// 注入器使用的外部协作者
#[derive(Clone)]
pub struct InjectorCollaborators {
    /// 组件扫描器
    pub scanner: Arc<dyn ComponentScanner>,
    /// 依赖内省器
    pub introspector: Arc<dyn DependencyIntrospector>,
    /// 依赖键序列化器
    pub serializer: Arc<dyn KeySerializer>,
}

impl Default for InjectorCollaborators {
    fn default() -> Self {
        Self {
            scanner: Arc::new(StaticComponentScanner),
            introspector: Arc::new(ComponentIntrospector),
            serializer: Arc::new(QualifiedNameSerializer),
        }
    }
}

/// 依赖注入器
///
/// 状态按 `Created → Registering → Injecting → Ready` 推进，`inject` 只能执行一次。
/// 进入 `Ready` 后注册表冻结，查找只需要共享引用，可以在多个线程间共享。
pub struct DependencyInjector {
    modules: Vec<Arc<dyn AppModule>>,
    layers: Vec<Layer>,
    scanner: Arc<dyn ComponentScanner>,
    introspector: Arc<dyn DependencyIntrospector>,
    registry: DependencyRegistry,
    state: InjectorState,
}

impl DependencyInjector {
    /// 使用默认协作者创建注入器
    pub fn new(modules: Vec<Arc<dyn AppModule>>, layers: Vec<Layer>) -> Self {
        Self::with_collaborators(modules, layers, InjectorCollaborators::default())
    }

    /// 使用指定协作者创建注入器
    pub fn with_collaborators(
        modules: Vec<Arc<dyn AppModule>>,
        layers: Vec<Layer>,
        collaborators: InjectorCollaborators,
    ) -> Self {
        Self {
            modules,
            layers,
            scanner: collaborators.scanner,
            introspector: collaborators.introspector,
            registry: DependencyRegistry::with_serializer(collaborators.serializer),
            state: InjectorState::Created,
        }
    }

    /// 在装配前手动注册实例
    ///
    /// `nested_injection_allowed` 为 `false` 时，注入阶段不会为该实例填充依赖。
    pub fn register_instance(
        &mut self,
        key: &DependencyKey,
        instance: ComponentInstance,
        nested_injection_allowed: bool,
    ) -> DependencyResult<()> {
        self.ensure_state(InjectorState::Created, "register_instance")?;
        self.registry.register(key, instance, nested_injection_allowed)
    }

    /// 在装配前以已序列化的键手动注册实例
    pub fn register_serialized(
        &mut self,
        key: SerializedKey,
        instance: ComponentInstance,
        nested_injection_allowed: bool,
    ) -> DependencyResult<()> {
        self.ensure_state(InjectorState::Created, "register_serialized")?;
        self.registry.register_serialized(key, instance, nested_injection_allowed)
    }

    /// 执行注册与注入
    pub fn inject(&mut self) -> DependencyResult<()> {
        self.transition(InjectorState::Registering, "inject")?;
        info!(
            modules = self.modules.len(),
            layers = self.layers.len(),
            "开始依赖注入"
        );

        if let Err(e) = self.register_layers() {
            return Err(self.fail(e));
        }

        self.transition(InjectorState::Injecting, "inject")?;
        if let Err(e) = self.inject_registered() {
            return Err(self.fail(e));
        }

        self.transition(InjectorState::Ready, "inject")?;
        info!(dependencies = self.registry.len(), "依赖注入完成");
        Ok(())
    }

    /// 按依赖键取出实例，仅在 `Ready` 状态可用
    pub fn get_dependency(&self, key: &DependencyKey) -> DependencyResult<ComponentInstance> {
        self.ensure_state(InjectorState::Ready, "get_dependency")?;
        self.registry.lookup(key).cloned()
    }

    /// 当前状态
    pub fn state(&self) -> InjectorState {
        self.state
    }

    /// 按注册顺序返回已注册的键
    pub fn registered_keys(&self) -> Vec<SerializedKey> {
        self.registry.keys().cloned().collect()
    }

    /// 已注册数量
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// 是否没有任何注册
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// 注入器管理的层
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// 只读访问注册表，用于装配失败后的诊断
    pub fn registry(&self) -> &DependencyRegistry {
        &self.registry
    }

    /// 注册阶段：逐层、逐模式扫描模块并实例化组件
    fn register_layers(&mut self) -> DependencyResult<()> {
        for layer in &self.layers {
            info!(layer = layer.name(), patterns = layer.component_groups().len(), "注册层组件");

            for pattern in layer.component_groups() {
                let modules = exclude_ignored_modules(&self.modules, pattern);
                let discovered =
                    self.scanner
                        .scan(&modules, pattern.name_regex(), pattern.superclass());
                debug!(
                    layer = layer.name(),
                    pattern = %pattern,
                    modules = modules.len(),
                    discovered = discovered.len(),
                    "扫描组件模式"
                );

                for declaration in discovered {
                    let instance = declaration.instantiate();
                    self.registry.register(declaration.key(), instance, true)?;
                }
            }
        }
        Ok(())
    }

    /// 注入阶段：按注册顺序为每个允许注入的实例填充依赖，遇错即止
    fn inject_registered(&self) -> DependencyResult<()> {
        for entry in self.registry.entries() {
            if !self.registry.is_nested_injection_allowed(entry.key()) {
                debug!(key = %entry.key(), "跳过不接收注入的实例");
                continue;
            }

            let instance = entry.instance();
            for request in self.introspector.requests(instance) {
                let dependency = self.registry.lookup(&request.requested)?;
                instance.component().inject(&request.attribute, dependency)?;
                debug!(
                    component = instance.name(),
                    attribute = %request.attribute,
                    dependency = %request.requested,
                    "注入依赖"
                );
            }
        }
        Ok(())
    }

    fn ensure_state(&self, expected: InjectorState, operation: &'static str) -> DependencyResult<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(DependencyError::InvalidState {
                operation,
                state: self.state,
            })
        }
    }

    fn transition(&mut self, next: InjectorState, operation: &'static str) -> DependencyResult<()> {
        if !self.state.can_transition_to(next) {
            return Err(DependencyError::InvalidState {
                operation,
                state: self.state,
            });
        }
        debug!(from = %self.state, to = %next, "注入器状态变更");
        self.state = next;
        Ok(())
    }

    fn fail(&mut self, e: DependencyError) -> DependencyError {
        error!(state = %self.state, error = %e, "依赖注入失败");
        self.state = InjectorState::Failed;
        e
    }
}

/// 过滤掉排除了指定模式的模块
///
/// 排除按模式而非按层生效：同一模块可以参与一个模式的扫描而退出另一个。
fn exclude_ignored_modules<'a>(
    modules: &'a [Arc<dyn AppModule>],
    pattern: &ComponentPattern,
) -> Vec<&'a dyn AppModule> {
    modules
        .iter()
        .filter(|module| !module.ignores(pattern))
        .map(|module| module.as_ref())
        .collect()
}

impl DependencyContainer for DependencyInjector {
    fn inject(&mut self) -> DependencyResult<()> {
        Self::inject(self)
    }

    fn get_dependency(&self, key: &DependencyKey) -> DependencyResult<ComponentInstance> {
        Self::get_dependency(self, key)
    }

    fn state(&self) -> InjectorState {
        self.state
    }

    fn serialize_key(&self, key: &DependencyKey) -> SerializedKey {
        self.registry.serialize(key)
    }
}

impl fmt::Debug for DependencyInjector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependencyInjector")
            .field("modules", &self.modules)
            .field("layers", &self.layers)
            .field("state", &self.state)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
