//! # 注入器组合层
//!
//! 负责把应用模块、层定义、配置与日志组合成一个可运行的依赖注入器。
//!
//! ## 主要功能
//!
//! - **注入器构建器**: 使用构建者模式组装模块与层
//! - **默认层集合**: 领域、基础设施、应用、表示四层
//! - **配置加载**: 从 TOML 文件与环境变量读取层定义和日志配置
//! - **日志初始化**: 显式、可重复调用的 tracing 订阅者安装
//!
//! ## 基本使用
//!
//! ```rust,no_run
//! use di_abstractions::ModuleDescriptor;
//! use infrastructure_composition::{InjectorBuilder, LoggingConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let injector = InjectorBuilder::new()
//!         .with_logging(LoggingConfig::development())
//!         .add_module(ModuleDescriptor::new("users"))
//!         .build_and_inject()?;
//!
//!     println!("已注册依赖: {:?}", injector.registered_keys());
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod layers;
pub mod logging;
pub mod settings;


// 重新导出主要类型
pub use builder::InjectorBuilder;
pub use layers::{
    application_layer, default_layers, domain_layer, infrastructure_layer, presentation_layer,
};
pub use logging::{init_logging, LoggingConfig};
pub use settings::{InjectorSettings, LayerSettings, PatternSettings};

// 重新导出错误类型
pub use infrastructure_common::InfrastructureError;
