//! 元数据定义
//!
//! 提供类型标识和依赖键

use serde::{Deserialize, Serialize};
use std::fmt;

/// 类型信息
///
/// 以限定名称标识一个类型。trait object 的 `dyn ` 前缀会被去掉，
/// 因此 `TypeInfo::of::<dyn app::Repo>()` 与 `TypeInfo::from_name("app::Repo")` 相等。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TypeInfo {
    name: String,
}

impl TypeInfo {
    /// 从类型获取类型信息
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::from_name(std::any::type_name::<T>())
    }

    /// 从类型名称创建类型信息（用于配置）
    pub fn from_name(name: impl AsRef<str>) -> Self {
        let name = name.as_ref().trim();
        Self {
            name: name.strip_prefix("dyn ").unwrap_or(name).trim().to_string(),
        }
    }

    /// 限定名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 获取简短的类型名称（不包含模块路径）
    pub fn short_name(&self) -> &str {
        self.name.rsplit("::").next().unwrap_or(&self.name)
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<String> for TypeInfo {
    fn from(name: String) -> Self {
        Self::from_name(name)
    }
}

impl From<TypeInfo> for String {
    fn from(info: TypeInfo) -> Self {
        info.name
    }
}

/// 依赖键
///
/// 标识一个依赖槽位。注册表只以序列化后的形式（[`SerializedKey`]）区分依赖，
/// 两个序列化结果相同的键指向同一个注册目标。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DependencyKey {
    /// 以类型标识的键，通常是组件实现的接口 trait
    Type(TypeInfo),
    /// 以名称标识的键
    Named(String),
}

impl DependencyKey {
    /// 由类型（通常为 `dyn Trait`）构造依赖键
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::Type(TypeInfo::of::<T>())
    }

    /// 由名称构造依赖键
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

impl fmt::Display for DependencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(info) => write!(f, "{info}"),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}

impl From<TypeInfo> for DependencyKey {
    fn from(info: TypeInfo) -> Self {
        Self::Type(info)
    }
}

impl From<&str> for DependencyKey {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for DependencyKey {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

/// 序列化后的依赖键，注册表中唯一的身份标识
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SerializedKey(String);

impl SerializedKey {
    /// 创建序列化键
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// 字符串形式
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SerializedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SerializedKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Marker {}

    #[test]
    fn test_type_info_strips_dyn_prefix() {
        let info = TypeInfo::of::<dyn Marker>();
        assert!(!info.name().starts_with("dyn "));
        assert_eq!(info.short_name(), "Marker");
        assert_eq!(info, TypeInfo::from_name(format!("dyn {}", info.name())));
    }

    #[test]
    fn test_type_info_serde_uses_plain_name() {
        let info = TypeInfo::from_name("app::domain::Policy");
        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(json, "\"app::domain::Policy\"");

        let parsed: TypeInfo = serde_json::from_str("\"dyn app::domain::Policy\"").unwrap();
        assert_eq!(parsed, info);
    }

    #[test]
    fn test_dependency_key_display() {
        assert_eq!(DependencyKey::named("IFoo").to_string(), "IFoo");
        assert_eq!(
            DependencyKey::of::<dyn Marker>().to_string(),
            TypeInfo::of::<dyn Marker>().to_string()
        );
    }
}
