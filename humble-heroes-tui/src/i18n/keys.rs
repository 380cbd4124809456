//! 翻译键定义
//!
//! 按 UI 组件位置分类：标题栏、表单、列表、状态栏、帮助弹窗。

/// 所有翻译文本的根结构
pub struct Translations {
    pub app: AppTexts,
    pub form: FormTexts,
    pub list: ListTexts,
    pub hints: HintTexts,
    pub help: HelpTexts,
}

/// 标题栏
pub struct AppTexts {
    pub title: &'static str,
    pub api: &'static str,
}

/// 添加表单
pub struct FormTexts {
    pub title: &'static str,
    pub name_label: &'static str,
    pub superpower_label: &'static str,
    pub humility_label: &'static str,
    pub add_button: &'static str,
    /// 请求进行中时按钮上的文字
    pub adding: &'static str,
}

/// 英雄列表
pub struct ListTexts {
    pub title: &'static str,
    pub loading: &'static str,
    pub empty: &'static str,
    pub power: &'static str,
    pub humility: &'static str,
}

/// 状态栏快捷键提示
pub struct HintTexts {
    pub switch_field: &'static str,
    pub submit: &'static str,
    pub select: &'static str,
    pub refresh: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub close: &'static str,
}

/// 帮助弹窗
pub struct HelpTexts {
    pub title: &'static str,
    pub form_section: &'static str,
    pub global_section: &'static str,
    pub next_field: &'static str,
    pub prev_field: &'static str,
    pub submit: &'static str,
    pub delete_char: &'static str,
    pub select: &'static str,
    pub jump: &'static str,
    pub refresh: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub close_hint: &'static str,
}
