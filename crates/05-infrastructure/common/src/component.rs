//! 组件基础接口定义
//!
//! 组件在注册阶段由零参数工厂创建，在注入阶段通过类型化槽位接收依赖。

use crate::errors::{DependencyError, DependencyResult};
use crate::metadata::{DependencyKey, TypeInfo};
use once_cell::sync::OnceCell;
use std::any::Any;
use std::fmt::{self, Debug};
use std::sync::Arc;

/// 组件基础 trait
///
/// 所有可被容器管理的组件都必须实现此 trait。
pub trait Component: Any + Send + Sync + Debug {
    /// 组件名称
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// 组件需要注入的依赖列表
    fn dependency_requests(&self) -> Vec<DependencyRequest> {
        Vec::new()
    }

    /// 将已解析的依赖写入指定属性
    ///
    /// 实现通常按属性名分派到对应的 [`Injected`] 槽位。
    fn inject(&self, attribute: &str, dependency: &ComponentInstance) -> DependencyResult<()> {
        let _ = dependency;
        Err(DependencyError::unknown_attribute(self.name(), attribute))
    }
}

/// 依赖请求：把 `requested` 对应的实例注入到名为 `attribute` 的属性
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRequest {
    /// 属性名称
    pub attribute: String,
    /// 请求的依赖键
    pub requested: DependencyKey,
}

impl DependencyRequest {
    /// 创建依赖请求
    pub fn new(attribute: impl Into<String>, requested: impl Into<DependencyKey>) -> Self {
        Self {
            attribute: attribute.into(),
            requested: requested.into(),
        }
    }

    /// 以接口类型 `I` 作为依赖键创建请求
    pub fn of<I: ?Sized + 'static>(attribute: impl Into<String>) -> Self {
        Self::new(attribute, DependencyKey::of::<I>())
    }
}

/// 已实例化组件的句柄
///
/// 同时持有组件本身（用于注入）与按接口类型保存的句柄（用于类型化查找）。
/// 克隆只增加引用计数，始终指向同一个单例。
#[derive(Clone)]
pub struct ComponentInstance {
    component: Arc<dyn Component>,
    handle: Arc<dyn Any + Send + Sync>,
    interface: &'static str,
}

impl ComponentInstance {
    /// 创建实例，`upcast` 将具体类型转换为对外提供的接口
    pub fn new<T, I>(component: T, upcast: impl FnOnce(Arc<T>) -> Arc<I>) -> Self
    where
        T: Component,
        I: ?Sized + Send + Sync + 'static,
    {
        let component = Arc::new(component);
        let handle: Arc<I> = upcast(Arc::clone(&component));
        Self {
            component,
            handle: Arc::new(handle),
            interface: std::any::type_name::<I>(),
        }
    }

    /// 以具体类型本身作为接口创建实例
    pub fn concrete<T: Component>(component: T) -> Self {
        Self::new(component, |component| component)
    }

    /// 组件本身
    pub fn component(&self) -> &Arc<dyn Component> {
        &self.component
    }

    /// 组件名称
    pub fn name(&self) -> &'static str {
        self.component.name()
    }

    /// 对外提供的接口类型名称
    pub fn interface_name(&self) -> &'static str {
        self.interface
    }

    /// 按接口类型取出句柄，类型不符时返回 `None`
    pub fn downcast<I: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<I>> {
        self.handle.downcast_ref::<Arc<I>>().cloned()
    }

    /// 是否为同一个实例
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handle, &other.handle)
    }
}

impl Debug for ComponentInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentInstance")
            .field("component", &self.component)
            .field("interface", &self.interface)
            .finish()
    }
}

/// 类型化注入槽位
///
/// 只能被填充一次；填充时校验依赖是否提供了接口 `T`。
pub struct Injected<T: ?Sized> {
    slot: OnceCell<Arc<T>>,
}

impl<T: ?Sized + Send + Sync + 'static> Injected<T> {
    /// 创建空槽位
    pub const fn new() -> Self {
        Self {
            slot: OnceCell::new(),
        }
    }

    /// 用依赖实例填充槽位
    pub fn fill(
        &self,
        owner: &str,
        attribute: &str,
        dependency: &ComponentInstance,
    ) -> DependencyResult<()> {
        let instance = dependency.downcast::<T>().ok_or_else(|| {
            DependencyError::injection_failed(
                owner,
                attribute,
                format!(
                    "期望接口 {}, 实际提供 {}",
                    TypeInfo::of::<T>(),
                    TypeInfo::from_name(dependency.interface_name())
                ),
            )
        })?;
        self.slot
            .set(instance)
            .map_err(|_| DependencyError::injection_failed(owner, attribute, "属性已被注入"))
    }

    /// 取出已注入的依赖
    pub fn get(&self) -> Option<&Arc<T>> {
        self.slot.get()
    }

    /// 是否已注入
    pub fn is_filled(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl<T: ?Sized + Send + Sync + 'static> Default for Injected<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Debug for Injected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.slot.get().is_some() { "filled" } else { "empty" };
        f.debug_tuple("Injected").field(&state).finish()
    }
}

/// 组件工厂函数类型
pub type ComponentFactoryFn = Arc<dyn Fn() -> ComponentInstance + Send + Sync>;

/// 组件声明
///
/// 模块注册表中的一条记录：哪个依赖键由哪个实现提供、实现属于哪类组件、
/// 声明在哪个子模块中，以及如何无参构造它。
#[derive(Clone)]
pub struct ComponentDeclaration {
    key: DependencyKey,
    superclass: TypeInfo,
    submodule: String,
    factory: ComponentFactoryFn,
}

impl ComponentDeclaration {
    /// 创建组件声明
    pub fn new(
        key: DependencyKey,
        superclass: TypeInfo,
        submodule: impl Into<String>,
        factory: impl Fn() -> ComponentInstance + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            superclass,
            submodule: submodule.into(),
            factory: Arc::new(factory),
        }
    }

    /// 以接口 `I` 为依赖键、`S` 为父类型创建声明
    pub fn of<I: ?Sized + 'static, S: ?Sized + 'static>(
        submodule: impl Into<String>,
        factory: impl Fn() -> ComponentInstance + Send + Sync + 'static,
    ) -> Self {
        Self::new(DependencyKey::of::<I>(), TypeInfo::of::<S>(), submodule, factory)
    }

    /// 依赖键
    pub fn key(&self) -> &DependencyKey {
        &self.key
    }

    /// 父类型
    pub fn superclass(&self) -> &TypeInfo {
        &self.superclass
    }

    /// 所在子模块名称
    pub fn submodule(&self) -> &str {
        &self.submodule
    }

    /// 无参构造一个新实例
    pub fn instantiate(&self) -> ComponentInstance {
        (self.factory)()
    }
}

impl Debug for ComponentDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDeclaration")
            .field("key", &self.key)
            .field("superclass", &self.superclass)
            .field("submodule", &self.submodule)
            .field("factory", &"<function>")
            .finish()
    }
}
