//! 注入器构建器

use crate::layers::default_layers;
use crate::logging::{init_logging, LoggingConfig};
use crate::settings::InjectorSettings;
use di_abstractions::{AppModule, ComponentScanner, DependencyIntrospector, KeySerializer};
use di_impl::{DependencyInjector, InjectorCollaborators};
use infrastructure_common::{InfrastructureResult, Layer};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// 注入器构建器
///
/// 使用建造者模式组装模块、层与协作者。层的来源优先级：
/// 显式添加的层 > 配置中的层 > 默认层集合。
pub struct InjectorBuilder {
    /// 应用模块列表
    modules: Vec<Arc<dyn AppModule>>,
    /// 显式添加的层
    layers: Vec<Layer>,
    /// 加载的配置
    settings: Option<InjectorSettings>,
    /// 外部协作者
    collaborators: InjectorCollaborators,
    /// 是否启用日志初始化
    logging_enabled: bool,
    /// 日志配置
    logging_config: LoggingConfig,
}

impl InjectorBuilder {
    /// 创建新的注入器构建器
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
            layers: Vec::new(),
            settings: None,
            collaborators: InjectorCollaborators::default(),
            logging_enabled: false, // 默认不启用日志初始化
            logging_config: LoggingConfig::default(),
        }
    }

    /// 添加应用模块
    pub fn add_module<M: AppModule + 'static>(mut self, module: M) -> Self {
        debug!("添加应用模块: {}", module.name());
        self.modules.push(Arc::new(module));
        self
    }

    /// 添加已共享的应用模块
    pub fn add_shared_module(mut self, module: Arc<dyn AppModule>) -> Self {
        debug!("添加应用模块: {}", module.name());
        self.modules.push(module);
        self
    }

    /// 添加层，按添加顺序注册
    pub fn add_layer(mut self, layer: Layer) -> Self {
        debug!("添加层: {}", layer);
        self.layers.push(layer);
        self
    }

    /// 批量添加层
    pub fn with_layers(mut self, layers: impl IntoIterator<Item = Layer>) -> Self {
        self.layers.extend(layers);
        self
    }

    /// 使用已加载的配置
    ///
    /// 配置中的日志设置会启用日志初始化。
    pub fn with_settings(mut self, settings: InjectorSettings) -> Self {
        self.logging_config = settings.logging.clone();
        self.logging_enabled = true;
        self.settings = Some(settings);
        self
    }

    /// 从 TOML 文件与环境变量加载配置
    pub fn load_settings<P: AsRef<Path>>(self, path: P) -> InfrastructureResult<Self> {
        let settings = InjectorSettings::load(Some(path.as_ref()))?;
        Ok(self.with_settings(settings))
    }

    /// 替换组件扫描器
    pub fn with_scanner<S: ComponentScanner + 'static>(mut self, scanner: S) -> Self {
        debug!("使用组件扫描器: {}", scanner.name());
        self.collaborators.scanner = Arc::new(scanner);
        self
    }

    /// 替换依赖内省器
    pub fn with_introspector<I: DependencyIntrospector + 'static>(mut self, introspector: I) -> Self {
        self.collaborators.introspector = Arc::new(introspector);
        self
    }

    /// 替换依赖键序列化器
    pub fn with_key_serializer<K: KeySerializer + 'static>(mut self, serializer: K) -> Self {
        self.collaborators.serializer = Arc::new(serializer);
        self
    }

    /// 配置并启用日志初始化
    pub fn with_logging(mut self, config: LoggingConfig) -> Self {
        self.logging_config = config;
        self.logging_enabled = true;
        self
    }

    /// 构建尚未装配的注入器
    pub fn build(self) -> InfrastructureResult<DependencyInjector> {
        // 只有在明确配置了日志时才初始化日志
        if self.logging_enabled {
            init_logging(&self.logging_config)?;
        }

        let layers = if !self.layers.is_empty() {
            self.layers
        } else if let Some(settings) = &self.settings {
            settings.to_layers()?
        } else {
            default_layers()?
        };

        info!(
            modules = self.modules.len(),
            layers = layers.len(),
            "构建依赖注入器"
        );
        Ok(DependencyInjector::with_collaborators(
            self.modules,
            layers,
            self.collaborators,
        ))
    }

    /// 构建注入器并立即执行装配
    pub fn build_and_inject(self) -> InfrastructureResult<DependencyInjector> {
        let mut injector = self.build()?;
        injector.inject()?;
        Ok(injector)
    }
}

impl Default for InjectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
