//! 依赖请求内省接口

use infrastructure_common::{ComponentInstance, DependencyRequest};

/// 依赖内省器 trait
///
/// 给定一个已实例化的组件，返回它希望注入的 (属性, 依赖键) 列表。
pub trait DependencyIntrospector: Send + Sync {
    /// 获取实例的依赖请求
    fn requests(&self, instance: &ComponentInstance) -> Vec<DependencyRequest>;
}
