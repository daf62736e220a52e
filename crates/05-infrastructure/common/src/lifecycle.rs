//! 注入器生命周期

use std::fmt;

/// 注入器状态
///
/// 严格按 `Created → Registering → Injecting → Ready` 推进，不可重入。
/// 注册或注入阶段出错时进入 `Failed`，之后不再接受任何操作。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InjectorState {
    /// 已创建，尚未开始注入
    #[default]
    Created,
    /// 注册阶段：扫描各层并实例化组件
    Registering,
    /// 注入阶段：为已注册实例填充依赖
    Injecting,
    /// 装配完成，注册表只读
    Ready,
    /// 装配失败
    Failed,
}

impl InjectorState {
    /// 检查状态转换是否合法
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Created, Self::Registering)
                | (Self::Registering, Self::Injecting)
                | (Self::Injecting, Self::Ready)
                | (Self::Registering, Self::Failed)
                | (Self::Injecting, Self::Failed)
        )
    }
}

impl fmt::Display for InjectorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Created => "created",
            Self::Registering => "registering",
            Self::Injecting => "injecting",
            Self::Ready => "ready",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}
