//! 依赖键序列化接口

use infrastructure_common::{DependencyKey, SerializedKey};

/// 依赖键序列化器 trait
///
/// 必须是确定性的纯函数：语义相同的键总是得到相同的序列化结果。
pub trait KeySerializer: Send + Sync {
    /// 序列化依赖键
    fn serialize(&self, key: &DependencyKey) -> SerializedKey;
}
