//! # 依赖注入具体实现
//!
//! 提供依赖注册表、两阶段注入器，以及默认的扫描、内省与键序列化实现。
//!
//! ```rust
//! use std::sync::Arc;
//! use di_abstractions::ModuleDescriptor;
//! use di_impl::DependencyInjector;
//! use infrastructure_common::{
//!     Component, ComponentDeclaration, ComponentInstance, ComponentPattern, DependencyKey, Layer,
//! };
//!
//! trait Clock: Component {}
//!
//! #[derive(Debug, Default)]
//! struct SystemClock;
//!
//! impl Component for SystemClock {}
//! impl Clock for SystemClock {}
//!
//! let module = ModuleDescriptor::new("time").with_component(
//!     ComponentDeclaration::of::<dyn Clock, dyn Clock>("services", || {
//!         ComponentInstance::new(SystemClock, |clock| clock as Arc<dyn Clock>)
//!     }),
//! );
//! let layer = Layer::new("domain")
//!     .with_pattern(ComponentPattern::of::<dyn Clock>("^services$").unwrap());
//!
//! let mut injector = DependencyInjector::new(vec![Arc::new(module)], vec![layer]);
//! injector.inject().unwrap();
//!
//! let clock = injector.get_dependency(&DependencyKey::of::<dyn Clock>()).unwrap();
//! assert!(clock.downcast::<dyn Clock>().is_some());
//! ```

pub mod injector;
pub mod introspector;
pub mod registry;
pub mod scanner;
pub mod serializer;

pub use injector::{DependencyInjector, InjectorCollaborators};
pub use introspector::ComponentIntrospector;
pub use registry::{DependencyRegistry, RegistryEntry};
pub use scanner::StaticComponentScanner;
pub use serializer::QualifiedNameSerializer;
