//! 组件扫描器抽象接口
//!
//! 在给定模块集合中查找属于某类组件的实现

use crate::module::AppModule;
use infrastructure_common::{ComponentDeclaration, TypeInfo};
use regex::Regex;

/// 组件扫描器 trait
///
/// 给定模块集合、名称规则与父类型，返回依赖键到实现的映射。
/// 扫描必须是纯函数：相同输入总是得到相同顺序的结果。
pub trait ComponentScanner: Send + Sync {
    /// 扫描模块中匹配的组件声明，按模块顺序、声明顺序返回
    fn scan(
        &self,
        modules: &[&dyn AppModule],
        name_pattern: &Regex,
        superclass: &TypeInfo,
    ) -> Vec<ComponentDeclaration>;

    /// 获取扫描器名称
    fn name(&self) -> &str;
}
