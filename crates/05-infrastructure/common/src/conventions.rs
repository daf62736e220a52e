//! 组件约定规范
//!
//! 组件模式（父类型 + 名称规则）与由模式组成的架构层

use crate::errors::{DependencyError, DependencyResult};
use crate::metadata::TypeInfo;
use regex::Regex;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 组件模式
///
/// 描述"哪些实现属于这一类组件"：实现必须声明为 `superclass` 的子类型，
/// 并且其所在子模块名称匹配 `name_regex`。
/// 同一个模式也是模块排除规则的最小单位。
#[derive(Debug, Clone)]
pub struct ComponentPattern {
    superclass: TypeInfo,
    name_regex: Regex,
}

impl ComponentPattern {
    /// 创建新的组件模式
    pub fn new(superclass: TypeInfo, name_regex: &str) -> DependencyResult<Self> {
        let name_regex = Regex::new(name_regex).map_err(|e| DependencyError::InvalidPattern {
            pattern: name_regex.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            superclass,
            name_regex,
        })
    }

    /// 以类型 `S`（通常为 `dyn Trait`）作为父类型创建模式
    pub fn of<S: ?Sized + 'static>(name_regex: &str) -> DependencyResult<Self> {
        Self::new(TypeInfo::of::<S>(), name_regex)
    }

    /// 父类型
    pub fn superclass(&self) -> &TypeInfo {
        &self.superclass
    }

    /// 名称规则
    pub fn name_regex(&self) -> &Regex {
        &self.name_regex
    }
}

// Regex 本身不可比较，以源表达式作为身份
impl PartialEq for ComponentPattern {
    fn eq(&self, other: &Self) -> bool {
        self.superclass == other.superclass && self.name_regex.as_str() == other.name_regex.as_str()
    }
}

impl Eq for ComponentPattern {}

impl Hash for ComponentPattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.superclass.hash(state);
        self.name_regex.as_str().hash(state);
    }
}

impl fmt::Display for ComponentPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} /{}/", self.superclass.short_name(), self.name_regex.as_str())
    }
}

/// 架构层
///
/// 按声明顺序排列的组件模式集合。层的顺序决定注册顺序，
/// 也决定重复检测与日志的先后；装配结果本身与顺序无关。
#[derive(Debug, Clone)]
pub struct Layer {
    name: String,
    component_groups: Vec<ComponentPattern>,
}

impl Layer {
    /// 创建新的空层
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            component_groups: Vec::new(),
        }
    }

    /// 追加组件模式
    pub fn with_pattern(mut self, pattern: ComponentPattern) -> Self {
        self.component_groups.push(pattern);
        self
    }

    /// 批量追加组件模式
    pub fn with_patterns(mut self, patterns: impl IntoIterator<Item = ComponentPattern>) -> Self {
        self.component_groups.extend(patterns);
        self
    }

    /// 层名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 按声明顺序返回组件模式
    pub fn component_groups(&self) -> &[ComponentPattern] {
        &self.component_groups
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", self.name)?;
        for (index, pattern) in self.component_groups.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{pattern}")?;
        }
        f.write_str("]")
    }
}
