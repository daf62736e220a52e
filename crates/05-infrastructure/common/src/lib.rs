//! # Infrastructure Common
//!
//! 这个 crate 提供了分层依赖注入容器的公共数据模型。
//!
//! ## 核心类型
//!
//! - [`DependencyKey`] / [`SerializedKey`] - 依赖键及其序列化形式
//! - [`ComponentPattern`] - 组件模式（父类型 + 名称规则）
//! - [`Layer`] - 按顺序排列的组件模式集合，代表一个架构层
//! - [`Component`] - 组件基础 trait，声明依赖请求并接收注入
//! - [`ComponentInstance`] - 已实例化组件的类型擦除句柄
//! - [`ComponentDeclaration`] - 模块注册表中的一条组件声明
//!
//! ## 设计原则
//!
//! - 以显式注册表代替运行时反射
//! - 通过类型化的注入槽位（[`Injected`]）完成属性注入
//! - 所有注册都是进程级单例

pub mod component;
pub mod conventions;
pub mod errors;
pub mod layers;
pub mod lifecycle;
pub mod metadata;

pub use component::*;
pub use conventions::*;
pub use errors::*;
pub use layers::*;
pub use lifecycle::*;
pub use metadata::*;
