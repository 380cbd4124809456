//! 列表消息

/// 列表子消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
}
