//! 可替换协作者的集成测试
//!
//! 扫描器按模式调用、只看到未排除该模式的模块；键序列化器决定键的同一性。

use di_abstractions::{AppModule, ComponentScanner, KeySerializer, ModuleDescriptor};
use di_impl::{DependencyInjector, InjectorCollaborators, StaticComponentScanner};
use infrastructure_common::{
    Component, ComponentDeclaration, ComponentInstance, ComponentPattern, DependencyError,
    DependencyKey, InjectorState, Layer, SerializedKey, TypeInfo,
};
use regex::Regex;
use std::sync::{Arc, Mutex};

type ScanLog = Arc<Mutex<Vec<(String, Vec<String>)>>>;

trait Kind: Component {}

#[derive(Debug, Default)]
struct Widget;

impl Component for Widget {}
impl Kind for Widget {}

/// 记录每次扫描的名称规则与模块集合，查找本身交给静态扫描器
#[derive(Default)]
struct RecordingScanner {
    log: ScanLog,
}

impl ComponentScanner for RecordingScanner {
    fn scan(
        &self,
        modules: &[&dyn AppModule],
        name_pattern: &Regex,
        superclass: &TypeInfo,
    ) -> Vec<ComponentDeclaration> {
        let names = modules.iter().map(|m| m.name().to_string()).collect();
        self.log
            .lock()
            .unwrap()
            .push((name_pattern.as_str().to_string(), names));
        StaticComponentScanner.scan(modules, name_pattern, superclass)
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// 忽略大小写的键序列化器
#[derive(Debug, Default)]
struct UpperCaseSerializer;

impl KeySerializer for UpperCaseSerializer {
    fn serialize(&self, key: &DependencyKey) -> SerializedKey {
        let raw = match key {
            DependencyKey::Type(info) => info.name().to_string(),
            DependencyKey::Named(name) => name.clone(),
        };
        SerializedKey::new(raw.to_uppercase())
    }
}

fn pattern(regex: &str) -> ComponentPattern {
    ComponentPattern::of::<dyn Kind>(regex).unwrap()
}

fn widget(key: &str, submodule: &str) -> ComponentDeclaration {
    ComponentDeclaration::new(
        DependencyKey::named(key),
        TypeInfo::of::<dyn Kind>(),
        submodule,
        || ComponentInstance::concrete(Widget),
    )
}

fn collaborators(scanner: RecordingScanner) -> InjectorCollaborators {
    InjectorCollaborators {
        scanner: Arc::new(scanner),
        serializer: Arc::new(UpperCaseSerializer),
        ..InjectorCollaborators::default()
    }
}

#[test]
fn test_scanner_sees_filtered_modules_per_pattern() {
    let m1 = ModuleDescriptor::new("m1")
        .ignoring(pattern("^a$"))
        .with_components([widget("alpha.m1", "a"), widget("beta.m1", "b")]);
    let m2 = ModuleDescriptor::new("m2")
        .with_components([widget("alpha.m2", "a"), widget("beta.m2", "b")]);
    let layer = Layer::new("core").with_patterns([pattern("^a$"), pattern("^b$")]);

    let scanner = RecordingScanner::default();
    let log = Arc::clone(&scanner.log);
    let mut injector = DependencyInjector::with_collaborators(
        vec![Arc::new(m1), Arc::new(m2)],
        vec![layer],
        collaborators(scanner),
    );
    injector.inject().unwrap();

    let calls = log.lock().unwrap().clone();
    assert_eq!(
        calls,
        vec![
            ("^a$".to_string(), vec!["m2".to_string()]),
            ("^b$".to_string(), vec!["m1".to_string(), "m2".to_string()]),
        ]
    );

    let keys: Vec<_> = injector
        .registered_keys()
        .iter()
        .map(|key| key.as_str().to_string())
        .collect();
    assert_eq!(keys, vec!["ALPHA.M2", "BETA.M1", "BETA.M2"]);
}

#[test]
fn test_key_serializer_decides_key_identity() {
    let mut injector = DependencyInjector::with_collaborators(
        Vec::new(),
        Vec::new(),
        collaborators(RecordingScanner::default()),
    );

    let first = ComponentInstance::concrete(Widget);
    injector
        .register_instance(&DependencyKey::named("ifoo"), first.clone(), true)
        .unwrap();

    // 序列化后与已注册的键相同，视为重复
    let error = injector
        .register_instance(
            &DependencyKey::named("IFOO"),
            ComponentInstance::concrete(Widget),
            true,
        )
        .unwrap_err();
    match error {
        DependencyError::DuplicateDependency { key, .. } => assert_eq!(key.as_str(), "IFOO"),
        other => panic!("期望重复依赖错误, 实际: {other}"),
    }

    injector.inject().unwrap();
    assert_eq!(injector.state(), InjectorState::Ready);

    let found = injector
        .get_dependency(&DependencyKey::named("iFoO"))
        .unwrap();
    assert!(found.ptr_eq(&first));
}
