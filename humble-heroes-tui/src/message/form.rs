//! 表单消息

/// 表单子消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// 切换到下一个控件
    NextField,
    /// 切换到上一个控件
    PrevField,
    /// 输入字符
    Input(char),
    /// 删除字符
    Backspace,
    /// 提交草稿（Add Superhero）
    Submit,
}
