//! 默认依赖内省

use di_abstractions::DependencyIntrospector;
use infrastructure_common::{ComponentInstance, DependencyRequest};

/// 组件内省器
///
/// 直接读取组件通过 [`Component::dependency_requests`](infrastructure_common::Component::dependency_requests)
/// 声明的依赖请求。
#[derive(Debug, Default, Clone, Copy)]
pub struct ComponentIntrospector;

impl DependencyIntrospector for ComponentIntrospector {
    fn requests(&self, instance: &ComponentInstance) -> Vec<DependencyRequest> {
        instance.component().dependency_requests()
    }
}
