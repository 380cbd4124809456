//! 应用主消息枚举

use humble_heroes_core::ViewEvent;

use super::{FormMessage, ListMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用（同时卸载视图）
    Quit,

    /// 重新拉取列表
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 关闭弹窗
    CloseModal,

    /// 表单相关消息
    Form(FormMessage),

    /// 列表相关消息
    List(ListMessage),

    /// 后台网络任务完成
    Completed(ViewEvent),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
