//! 应用模块描述

use infrastructure_common::{ComponentDeclaration, ComponentPattern};
use std::collections::HashSet;
use std::fmt::Debug;

/// 应用模块 trait
///
/// 一个应用模块对外暴露它的组件注册表，以及它选择退出的组件模式集合。
/// 注入器只读取模块，不会修改它。
pub trait AppModule: Send + Sync + Debug {
    /// 模块名称
    fn name(&self) -> &str;

    /// 本模块不参与扫描的组件模式
    fn ignore(&self) -> &HashSet<ComponentPattern>;

    /// 本模块声明的组件
    fn components(&self) -> &[ComponentDeclaration];

    /// 检查是否排除了指定模式
    fn ignores(&self, pattern: &ComponentPattern) -> bool {
        self.ignore().contains(pattern)
    }
}

/// 模块描述符
///
/// [`AppModule`] 的默认实现，在启动时构造一次。
#[derive(Debug, Clone)]
pub struct ModuleDescriptor {
    name: String,
    ignore: HashSet<ComponentPattern>,
    components: Vec<ComponentDeclaration>,
}

impl ModuleDescriptor {
    /// 创建新的模块描述符
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ignore: HashSet::new(),
            components: Vec::new(),
        }
    }

    /// 排除指定组件模式
    pub fn ignoring(mut self, pattern: ComponentPattern) -> Self {
        self.ignore.insert(pattern);
        self
    }

    /// 声明组件
    pub fn with_component(mut self, declaration: ComponentDeclaration) -> Self {
        self.components.push(declaration);
        self
    }

    /// 批量声明组件
    pub fn with_components(
        mut self,
        declarations: impl IntoIterator<Item = ComponentDeclaration>,
    ) -> Self {
        self.components.extend(declarations);
        self
    }
}

impl AppModule for ModuleDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn ignore(&self) -> &HashSet<ComponentPattern> {
        &self.ignore
    }

    fn components(&self) -> &[ComponentDeclaration] {
        &self.components
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Service {}

    #[test]
    fn test_module_reports_ignored_patterns() {
        let services = ComponentPattern::of::<dyn Service>("^services$").unwrap();
        let handlers = ComponentPattern::of::<dyn Service>("^handlers$").unwrap();

        let module = ModuleDescriptor::new("billing").ignoring(services.clone());

        assert_eq!(module.name(), "billing");
        assert!(module.ignores(&services));
        assert!(!module.ignores(&handlers));
        assert!(module.components().is_empty());
    }
}
