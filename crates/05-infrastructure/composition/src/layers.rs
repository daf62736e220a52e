//! 默认层集合

use infrastructure_common::{
    ApplicationService, ComponentPattern, Controller, DependencyResult, DomainService, Layer,
    Repository,
};

/// 领域层：`services` 子模块中的领域服务
pub fn domain_layer() -> DependencyResult<Layer> {
    Ok(Layer::new("domain").with_pattern(ComponentPattern::of::<dyn DomainService>("^services$")?))
}

/// 基础设施层：`repos` 子模块中的仓储
pub fn infrastructure_layer() -> DependencyResult<Layer> {
    Ok(Layer::new("infrastructure").with_pattern(ComponentPattern::of::<dyn Repository>("^repos$")?))
}

/// 应用层：`services` 子模块中的应用服务
pub fn application_layer() -> DependencyResult<Layer> {
    Ok(Layer::new("application")
        .with_pattern(ComponentPattern::of::<dyn ApplicationService>("^services$")?))
}

/// 表示层：`controllers` 或 `views` 子模块中的控制器
pub fn presentation_layer() -> DependencyResult<Layer> {
    Ok(Layer::new("presentation")
        .with_pattern(ComponentPattern::of::<dyn Controller>("^(controllers|views)$")?))
}

/// 默认层集合，按 领域 → 基础设施 → 应用 → 表示 的顺序
pub fn default_layers() -> DependencyResult<Vec<Layer>> {
    Ok(vec![
        domain_layer()?,
        infrastructure_layer()?,
        application_layer()?,
        presentation_layer()?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layer_order() {
        let layers = default_layers().unwrap();
        let names: Vec<_> = layers.iter().map(Layer::name).collect();
        assert_eq!(names, vec!["domain", "infrastructure", "application", "presentation"]);
    }

    #[test]
    fn test_presentation_matches_controllers_and_views() {
        let layer = presentation_layer().unwrap();
        let regex = layer.component_groups()[0].name_regex();
        assert!(regex.is_match("controllers"));
        assert!(regex.is_match("views"));
        assert!(!regex.is_match("services"));
    }
}
