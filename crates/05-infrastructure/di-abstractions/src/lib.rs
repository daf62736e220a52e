//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义注入器与其协作者之间的接口。
//!
//! ## 核心接口
//!
//! - [`AppModule`] - 应用模块描述（组件注册表 + 排除规则）
//! - [`ComponentScanner`] - 按组件模式扫描模块中的实现
//! - [`DependencyIntrospector`] - 获取实例的依赖请求
//! - [`KeySerializer`] - 依赖键序列化
//! - [`DependencyContainer`] - 面向应用代码的装配与查找接口

pub mod container;
pub mod introspector;
pub mod module;
pub mod scanner;
pub mod serializer;

pub use container::*;
pub use introspector::*;
pub use module::*;
pub use scanner::*;
pub use serializer::*;
