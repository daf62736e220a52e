//! 内置层的组件父类型
//!
//! 组件声明通过这些 trait 的 [`TypeInfo`](crate::TypeInfo) 表明自己属于哪一类组件，
//! 默认层集合按它们进行匹配。

use crate::component::Component;

/// 领域服务
pub trait DomainService: Component {}

/// 仓储
pub trait Repository: Component {}

/// 应用服务
pub trait ApplicationService: Component {}

/// 控制器（表示层）
pub trait Controller: Component {}
