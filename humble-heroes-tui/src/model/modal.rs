//! 弹窗状态

/// 弹窗类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// 快捷键帮助
    Help,
}
