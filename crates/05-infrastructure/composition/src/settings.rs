//! 注入器配置
//!
//! 从 TOML 文件与 `DI__` 前缀的环境变量加载层定义和日志配置

use crate::layers::default_layers;
use crate::logging::LoggingConfig;
use config::{Config, Environment, File, FileFormat};
use infrastructure_common::{
    ComponentPattern, ConfigError, ConfigResult, DependencyResult, Layer, TypeInfo,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// 环境变量前缀
pub const ENV_PREFIX: &str = "DI";

/// 组件模式配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSettings {
    /// 父类型的限定名称
    pub superclass: String,
    /// 子模块名称规则
    pub name_regex: String,
}

/// 层配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSettings {
    /// 层名称
    pub name: String,
    /// 组件模式，按声明顺序
    #[serde(default)]
    pub patterns: Vec<PatternSettings>,
}

/// 注入器配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjectorSettings {
    /// 日志配置
    pub logging: LoggingConfig,
    /// 层定义，为空时使用默认层集合
    pub layers: Vec<LayerSettings>,
}

impl InjectorSettings {
    /// 从可选的 TOML 文件与环境变量加载配置
    ///
    /// `DI__` 前缀的环境变量后加入，覆盖文件中的同名项，
    /// 例如 `DI__LOGGING__LEVEL=debug` 覆盖 `[logging] level`。
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        Self::load_with_environment(path, Some(Self::environment()))
    }

    /// 只从 TOML 文件加载配置，不读取环境变量
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        Self::load_with_environment(Some(path), None)
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX).separator("__")
    }

    fn load_with_environment(
        path: Option<&Path>,
        environment: Option<Environment>,
    ) -> ConfigResult<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            info!("加载注入器配置文件: {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }
        if let Some(environment) = environment {
            builder = builder.add_source(environment);
        }
        Self::finish(builder)
    }

    /// 从 TOML 字符串加载配置，不读取环境变量
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Self::finish(Config::builder().add_source(File::from_str(content, FileFormat::Toml)))
    }

    fn finish(builder: config::ConfigBuilder<config::builder::DefaultState>) -> ConfigResult<Self> {
        let settings: Self = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| ConfigError::ParseError {
                source: Box::new(e),
            })?;
        settings.validate()?;
        debug!(layers = settings.layers.len(), "注入器配置加载完成");
        Ok(settings)
    }

    /// 验证配置：层名称非空且唯一，名称规则可以编译
    pub fn validate(&self) -> ConfigResult<()> {
        let mut seen = HashSet::new();
        for layer in &self.layers {
            if layer.name.trim().is_empty() {
                return Err(ConfigError::validation("层名称不能为空"));
            }
            if !seen.insert(layer.name.as_str()) {
                return Err(ConfigError::validation(format!("层名称重复: {}", layer.name)));
            }
            for pattern in &layer.patterns {
                if pattern.superclass.trim().is_empty() {
                    return Err(ConfigError::validation(format!(
                        "层 {} 中存在未指定父类型的组件模式",
                        layer.name
                    )));
                }
                pattern
                    .to_pattern()
                    .map_err(|e| ConfigError::validation(format!("层 {}: {}", layer.name, e)))?;
            }
        }
        Ok(())
    }

    /// 转换为注入器使用的层；未配置任何层时返回默认层集合
    pub fn to_layers(&self) -> DependencyResult<Vec<Layer>> {
        if self.layers.is_empty() {
            return default_layers();
        }
        self.layers.iter().map(LayerSettings::to_layer).collect()
    }
}

impl LayerSettings {
    /// 转换为层
    pub fn to_layer(&self) -> DependencyResult<Layer> {
        let patterns = self
            .patterns
            .iter()
            .map(PatternSettings::to_pattern)
            .collect::<DependencyResult<Vec<_>>>()?;
        Ok(Layer::new(&self.name).with_patterns(patterns))
    }
}

impl PatternSettings {
    /// 转换为组件模式
    pub fn to_pattern(&self) -> DependencyResult<ComponentPattern> {
        ComponentPattern::new(TypeInfo::from_name(&self.superclass), &self.name_regex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SETTINGS: &str = r#"
[logging]
level = "debug"
json_format = true

[[layers]]
name = "domain"

[[layers.patterns]]
superclass = "app::domain::Policy"
name_regex = "^policies$"

[[layers]]
name = "presentation"

[[layers.patterns]]
superclass = "dyn app::web::Controller"
name_regex = "^controllers$"

[[layers.patterns]]
superclass = "app::web::View"
name_regex = "^views$"
"#;

    #[test]
    fn test_toml_settings_to_layers() {
        let settings = InjectorSettings::from_toml_str(SETTINGS).unwrap();
        assert_eq!(settings.logging.level, "debug");
        assert!(settings.logging.json_format);
        assert!(settings.logging.show_target);

        let layers = settings.to_layers().unwrap();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].name(), "domain");
        assert_eq!(layers[1].component_groups().len(), 2);
        assert_eq!(
            layers[1].component_groups()[0].superclass(),
            &TypeInfo::from_name("app::web::Controller")
        );
    }

    #[test]
    fn test_empty_settings_use_default_layers() {
        let settings = InjectorSettings::from_toml_str("").unwrap();
        assert_eq!(settings, InjectorSettings::default());

        let names: Vec<_> = settings
            .to_layers()
            .unwrap()
            .iter()
            .map(|layer| layer.name().to_string())
            .collect();
        assert_eq!(names, vec!["domain", "infrastructure", "application", "presentation"]);
    }

    #[test]
    fn test_duplicate_layer_names_are_rejected() {
        let content = r#"
[[layers]]
name = "domain"

[[layers]]
name = "domain"
"#;
        let error = InjectorSettings::from_toml_str(content).unwrap_err();
        assert!(matches!(error, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn test_invalid_regex_is_rejected() {
        let content = r#"
[[layers]]
name = "domain"

[[layers.patterns]]
superclass = "app::domain::Policy"
name_regex = "(unclosed"
"#;
        let error = InjectorSettings::from_toml_str(content).unwrap_err();
        assert!(error.to_string().contains("(unclosed"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SETTINGS.as_bytes()).unwrap();

        let settings = InjectorSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.layers.len(), 2);
        assert_eq!(settings.logging.level, "debug");
    }

    #[test]
    fn test_environment_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SETTINGS.as_bytes()).unwrap();

        // 使用显式的变量表，不读取进程环境
        let mut variables = config::Map::new();
        variables.insert("DI__LOGGING__LEVEL".to_string(), "trace".to_string());
        let environment = InjectorSettings::environment().source(Some(variables));

        let settings =
            InjectorSettings::load_with_environment(Some(file.path()), Some(environment)).unwrap();
        assert_eq!(settings.logging.level, "trace");
        assert!(settings.logging.json_format);
        assert_eq!(settings.layers.len(), 2);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let error = InjectorSettings::load(Some(Path::new("/nonexistent/di.toml"))).unwrap_err();
        assert!(matches!(error, ConfigError::FileNotFound { .. }));
    }
}
