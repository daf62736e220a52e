//! 依赖注册表
//!
//! 记录"以什么键装配了什么实例"的唯一来源，由注入器独占。

use crate::serializer::QualifiedNameSerializer;
use di_abstractions::KeySerializer;
use infrastructure_common::{
    ComponentInstance, DependencyError, DependencyKey, DependencyResult, SerializedKey,
};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// 注册表条目
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    key: SerializedKey,
    instance: ComponentInstance,
    nested_injection_allowed: bool,
}

impl RegistryEntry {
    /// 序列化后的键
    pub fn key(&self) -> &SerializedKey {
        &self.key
    }

    /// 注册的实例
    pub fn instance(&self) -> &ComponentInstance {
        &self.instance
    }
}

/// 依赖注册表
///
/// 键在注册表生命周期内唯一，重复注册是硬错误而不是覆盖；条目只增不删，
/// 并保持注册顺序。
pub struct DependencyRegistry {
    serializer: Arc<dyn KeySerializer>,
    entries: Vec<RegistryEntry>,
    index: HashMap<SerializedKey, usize>,
}

impl DependencyRegistry {
    /// 使用默认序列化器创建注册表
    pub fn new() -> Self {
        Self::with_serializer(Arc::new(QualifiedNameSerializer))
    }

    /// 使用指定序列化器创建注册表
    pub fn with_serializer(serializer: Arc<dyn KeySerializer>) -> Self {
        Self {
            serializer,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// 序列化依赖键
    pub fn serialize(&self, key: &DependencyKey) -> SerializedKey {
        self.serializer.serialize(key)
    }

    /// 注册实例
    pub fn register(
        &mut self,
        key: &DependencyKey,
        instance: ComponentInstance,
        nested_injection_allowed: bool,
    ) -> DependencyResult<()> {
        let serialized = self.serialize(key);
        self.register_serialized(serialized, instance, nested_injection_allowed)
    }

    /// 以已序列化的键注册实例，不经过序列化器
    pub fn register_serialized(
        &mut self,
        key: SerializedKey,
        instance: ComponentInstance,
        nested_injection_allowed: bool,
    ) -> DependencyResult<()> {
        if let Some(&position) = self.index.get(&key) {
            return Err(DependencyError::DuplicateDependency {
                key,
                existing: self.entries[position].instance.name().to_string(),
                incoming: instance.name().to_string(),
            });
        }

        debug!(key = %key, component = instance.name(), nested_injection_allowed, "注册依赖");
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(RegistryEntry {
            key,
            instance,
            nested_injection_allowed,
        });
        Ok(())
    }

    /// 查找实例
    pub fn lookup(&self, key: &DependencyKey) -> DependencyResult<&ComponentInstance> {
        self.lookup_serialized(&self.serialize(key))
    }

    /// 以已序列化的键查找实例
    pub fn lookup_serialized(&self, key: &SerializedKey) -> DependencyResult<&ComponentInstance> {
        self.index
            .get(key)
            .map(|&position| &self.entries[position].instance)
            .ok_or_else(|| DependencyError::DependencyNotRegistered {
                key: key.clone(),
                registered: self.keys().cloned().collect(),
            })
    }

    /// 实例注册时记录的注入资格，未注册的键返回 `false`
    pub fn is_nested_injection_allowed(&self, key: &SerializedKey) -> bool {
        self.index
            .get(key)
            .is_some_and(|&position| self.entries[position].nested_injection_allowed)
    }

    /// 是否已注册
    pub fn contains(&self, key: &DependencyKey) -> bool {
        self.index.contains_key(&self.serialize(key))
    }

    /// 按注册顺序遍历条目
    pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }

    /// 按注册顺序遍历键
    pub fn keys(&self) -> impl Iterator<Item = &SerializedKey> {
        self.entries.iter().map(|entry| &entry.key)
    }

    /// 已注册数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DependencyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DependencyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependencyRegistry")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}
