//! 依赖注入容器抽象接口
//!
//! 应用代码只通过这个接口触发装配并取出依赖

use infrastructure_common::{
    ComponentInstance, DependencyError, DependencyKey, DependencyResult, InjectorState, SerializedKey,
    TypeInfo,
};
use std::sync::Arc;

/// 依赖注入容器 trait
pub trait DependencyContainer {
    /// 执行完整的注册与注入流程，只能调用一次
    fn inject(&mut self) -> DependencyResult<()>;

    /// 按依赖键取出已注册的实例
    fn get_dependency(&self, key: &DependencyKey) -> DependencyResult<ComponentInstance>;

    /// 当前状态
    fn state(&self) -> InjectorState;

    /// 序列化依赖键
    fn serialize_key(&self, key: &DependencyKey) -> SerializedKey;

    /// 按依赖键取出实例并转换为接口 `I`
    fn get<I>(&self, key: &DependencyKey) -> DependencyResult<Arc<I>>
    where
        I: ?Sized + Send + Sync + 'static,
    {
        let instance = self.get_dependency(key)?;
        instance
            .downcast::<I>()
            .ok_or_else(|| DependencyError::TypeMismatch {
                key: self.serialize_key(key),
                expected: TypeInfo::of::<I>().to_string(),
                actual: TypeInfo::from_name(instance.interface_name()).to_string(),
            })
    }

    /// 以接口类型 `I` 本身作为依赖键取出实例
    fn resolve<I>(&self) -> DependencyResult<Arc<I>>
    where
        I: ?Sized + Send + Sync + 'static,
    {
        self.get::<I>(&DependencyKey::of::<I>())
    }
}
