//! 错误类型定义

use crate::lifecycle::InjectorState;
use crate::metadata::SerializedKey;
use thiserror::Error;

/// 依赖注入错误类型
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("依赖键必须唯一: {key} 已注册为 {existing}，无法再注册 {incoming}")]
    DuplicateDependency {
        key: SerializedKey,
        existing: String,
        incoming: String,
    },

    #[error("依赖未注册: {key}\n已注册的依赖:{}", format_keys(.registered))]
    DependencyNotRegistered {
        key: SerializedKey,
        registered: Vec<SerializedKey>,
    },

    #[error("注入器状态不允许执行 {operation}: 当前状态 {state}")]
    InvalidState {
        operation: &'static str,
        state: InjectorState,
    },

    #[error("属性注入失败: {component}.{attribute}, 原因: {reason}")]
    InjectionFailed {
        component: String,
        attribute: String,
        reason: String,
    },

    #[error("依赖类型不匹配: {key}, 期望 {expected}, 实际 {actual}")]
    TypeMismatch {
        key: SerializedKey,
        expected: String,
        actual: String,
    },

    #[error("组件名称模式无效: {pattern}, 原因: {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl DependencyError {
    /// 创建属性注入失败错误
    pub fn injection_failed(
        component: impl Into<String>,
        attribute: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InjectionFailed {
            component: component.into(),
            attribute: attribute.into(),
            reason: reason.into(),
        }
    }

    /// 创建未知属性错误
    pub fn unknown_attribute(component: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::injection_failed(component, attribute, "组件没有该可注入属性")
    }
}

fn format_keys(keys: &[SerializedKey]) -> String {
    if keys.is_empty() {
        return " (空)".to_string();
    }
    keys.iter().map(|key| format!("\n\t{key}")).collect()
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("配置解析失败: {source}")]
    ParseError {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("配置验证失败: {message}")]
    ValidationError { message: String },
}

impl ConfigError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }
}

/// 基础设施错误类型
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("配置错误: {source}")]
    ConfigError {
        #[from]
        source: ConfigError,
    },

    #[error("依赖注入错误: {source}")]
    DependencyError {
        #[from]
        source: DependencyError,
    },

    #[error("基础设施启动失败: {message}")]
    BootstrapFailed { message: String },
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type DependencyResult<T> = Result<T, DependencyError>;
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
