//! 默认依赖键序列化

use di_abstractions::KeySerializer;
use infrastructure_common::{DependencyKey, SerializedKey, TypeInfo};

/// 限定名称序列化器
///
/// 类型键序列化为去掉 `dyn ` 前缀的限定类型名；名称键按同样规则规范化，
/// 因此 `DependencyKey::named("app::IFoo")` 与 `DependencyKey::of::<dyn app::IFoo>()`
/// 是同一个注册目标。
#[derive(Debug, Default, Clone, Copy)]
pub struct QualifiedNameSerializer;

impl KeySerializer for QualifiedNameSerializer {
    fn serialize(&self, key: &DependencyKey) -> SerializedKey {
        match key {
            DependencyKey::Type(info) => SerializedKey::new(info.name()),
            DependencyKey::Named(name) => SerializedKey::new(TypeInfo::from_name(name).name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Mailer {}

    #[test]
    fn test_type_and_name_keys_converge() {
        let serializer = QualifiedNameSerializer;
        let by_type = serializer.serialize(&DependencyKey::of::<dyn Mailer>());
        let by_name = serializer.serialize(&DependencyKey::named(by_type.as_str()));
        let by_dyn_name =
            serializer.serialize(&DependencyKey::named(format!("dyn {}", by_type.as_str())));

        assert_eq!(by_type, by_name);
        assert_eq!(by_type, by_dyn_name);
        assert!(by_type.as_str().ends_with("Mailer"));
    }

    #[test]
    fn test_plain_names_are_kept() {
        let serializer = QualifiedNameSerializer;
        assert_eq!(serializer.serialize(&"  IFoo ".into()).as_str(), "IFoo");
    }
}
