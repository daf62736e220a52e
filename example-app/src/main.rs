//! Lorn ADSP 分层依赖注入示例应用
//!
//! 演示图书馆应用的两个模块如何按层注册并相互注入：
//! `catalog` 提供书目领域服务、仓储与控制器，`lending` 提供借阅应用服务，
//! 并忽略表示层的控制器模式，因此它声明的控制器不会被注册。

use anyhow::{Context, Result};
use clap::Parser;
use di_abstractions::{DependencyContainer, ModuleDescriptor};
use infrastructure_common::{
    ApplicationService, Component, ComponentDeclaration, ComponentInstance, ComponentPattern,
    Controller, DependencyError, DependencyRequest, DependencyResult, DomainService, Injected,
    Repository,
};
use infrastructure_composition::{InjectorBuilder, LoggingConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// 命令行参数
#[derive(Debug, Parser)]
#[command(name = "example-app", about = "分层依赖注入示例")]
struct Args {
    /// 注入器配置文件 (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 日志级别，未提供配置文件时生效
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

// ---- catalog 模块 ----

trait BookPolicy: Component {
    fn max_loans(&self) -> usize;
}

trait BookRepository: Component {
    fn titles(&self) -> Vec<String>;
}

trait LendingService: Component {
    fn describe(&self) -> String;
}

#[derive(Debug, Default)]
struct StandardBookPolicy;

impl Component for StandardBookPolicy {}
impl DomainService for StandardBookPolicy {}

impl BookPolicy for StandardBookPolicy {
    fn max_loans(&self) -> usize {
        5
    }
}

#[derive(Debug, Default)]
struct InMemoryBooks;

impl Component for InMemoryBooks {}
impl Repository for InMemoryBooks {}

impl BookRepository for InMemoryBooks {
    fn titles(&self) -> Vec<String> {
        vec!["三体".to_string(), "活着".to_string(), "围城".to_string()]
    }
}

#[derive(Debug, Default)]
struct CatalogController {
    lending: Injected<dyn LendingService>,
}

impl Component for CatalogController {
    fn dependency_requests(&self) -> Vec<DependencyRequest> {
        vec![DependencyRequest::of::<dyn LendingService>("lending")]
    }

    fn inject(&self, attribute: &str, dependency: &ComponentInstance) -> DependencyResult<()> {
        match attribute {
            "lending" => self.lending.fill(self.name(), attribute, dependency),
            _ => Err(DependencyError::unknown_attribute(self.name(), attribute)),
        }
    }
}

impl Controller for CatalogController {}

impl CatalogController {
    fn index(&self) -> String {
        match self.lending.get() {
            Some(lending) => format!("GET /catalog -> {}", lending.describe()),
            None => "GET /catalog -> 借阅服务未注入".to_string(),
        }
    }
}

fn catalog_module() -> ModuleDescriptor {
    ModuleDescriptor::new("catalog").with_components([
        ComponentDeclaration::of::<dyn BookPolicy, dyn DomainService>("services", || {
            ComponentInstance::new(StandardBookPolicy, |p| p as Arc<dyn BookPolicy>)
        }),
        ComponentDeclaration::of::<dyn BookRepository, dyn Repository>("repos", || {
            ComponentInstance::new(InMemoryBooks, |r| r as Arc<dyn BookRepository>)
        }),
        ComponentDeclaration::of::<CatalogController, dyn Controller>("controllers", || {
            ComponentInstance::concrete(CatalogController::default())
        }),
    ])
}

// ---- lending 模块 ----

#[derive(Debug, Default)]
struct DefaultLendingService {
    policy: Injected<dyn BookPolicy>,
    books: Injected<dyn BookRepository>,
}

impl Component for DefaultLendingService {
    fn dependency_requests(&self) -> Vec<DependencyRequest> {
        vec![
            DependencyRequest::of::<dyn BookPolicy>("policy"),
            DependencyRequest::of::<dyn BookRepository>("books"),
        ]
    }

    fn inject(&self, attribute: &str, dependency: &ComponentInstance) -> DependencyResult<()> {
        match attribute {
            "policy" => self.policy.fill(self.name(), attribute, dependency),
            "books" => self.books.fill(self.name(), attribute, dependency),
            _ => Err(DependencyError::unknown_attribute(self.name(), attribute)),
        }
    }
}

impl ApplicationService for DefaultLendingService {}

impl LendingService for DefaultLendingService {
    fn describe(&self) -> String {
        let titles = self.books.get().map(|b| b.titles()).unwrap_or_default();
        let max_loans = self.policy.get().map(|p| p.max_loans()).unwrap_or_default();
        format!("{} 本可借, 每人最多 {} 本: {}", titles.len(), max_loans, titles.join("、"))
    }
}

/// 借阅模块自带的管理控制器，模块忽略了表示层控制器模式
#[derive(Debug, Default)]
struct LendingAdminController;

impl Component for LendingAdminController {}
impl Controller for LendingAdminController {}

fn lending_module() -> Result<ModuleDescriptor> {
    let controllers = ComponentPattern::of::<dyn Controller>("^(controllers|views)$")
        .context("无法创建控制器模式")?;
    Ok(ModuleDescriptor::new("lending")
        .ignoring(controllers)
        .with_components([
            ComponentDeclaration::of::<dyn LendingService, dyn ApplicationService>(
                "services",
                || {
                    ComponentInstance::new(DefaultLendingService::default(), |s| {
                        s as Arc<dyn LendingService>
                    })
                },
            ),
            ComponentDeclaration::of::<LendingAdminController, dyn Controller>(
                "controllers",
                || ComponentInstance::concrete(LendingAdminController),
            ),
        ]))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let builder = match &args.config {
        Some(path) => InjectorBuilder::new()
            .load_settings(path)
            .with_context(|| format!("无法加载配置文件: {}", path.display()))?,
        None => InjectorBuilder::new().with_logging(LoggingConfig {
            level: args.log_level.clone(),
            ..LoggingConfig::default()
        }),
    };

    let injector = builder
        .add_module(catalog_module())
        .add_module(lending_module()?)
        .build_and_inject()
        .context("依赖注入失败")?;

    info!(state = %injector.state(), "注入器已就绪");

    println!("已注册依赖:");
    for key in injector.registered_keys() {
        println!("  - {}", key);
    }

    let controller = injector
        .resolve::<CatalogController>()
        .context("无法解析书目控制器")?;
    println!("{}", controller.index());

    let admin = injector.resolve::<LendingAdminController>();
    println!("借阅管理控制器已注册: {}", admin.is_ok());

    Ok(())
}
