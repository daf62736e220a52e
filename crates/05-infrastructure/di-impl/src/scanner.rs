//! 基于模块注册表的组件扫描

use di_abstractions::{AppModule, ComponentScanner};
use infrastructure_common::{ComponentDeclaration, TypeInfo};
use regex::Regex;
use tracing::debug;

/// 静态组件扫描器
///
/// 不做运行时反射，只读取各模块在编译期写好的组件声明：
/// 声明的父类型与 `superclass` 相同且子模块名称匹配 `name_pattern` 即为命中。
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticComponentScanner;

impl ComponentScanner for StaticComponentScanner {
    fn scan(
        &self,
        modules: &[&dyn AppModule],
        name_pattern: &Regex,
        superclass: &TypeInfo,
    ) -> Vec<ComponentDeclaration> {
        let mut discovered = Vec::new();
        for module in modules {
            for declaration in module.components() {
                if declaration.superclass() == superclass
                    && name_pattern.is_match(declaration.submodule())
                {
                    debug!(
                        module = module.name(),
                        submodule = declaration.submodule(),
                        key = %declaration.key(),
                        "发现组件"
                    );
                    discovered.push(declaration.clone());
                }
            }
        }
        discovered
    }

    fn name(&self) -> &str {
        "static"
    }
}
