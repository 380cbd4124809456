//! 表单焦点

/// 当前获得焦点的表单控件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Superpower,
    Humility,
    AddButton,
}

impl FormField {
    /// 所有控件，按 Tab 顺序
    pub fn all() -> &'static [FormField] {
        &[
            FormField::Name,
            FormField::Superpower,
            FormField::Humility,
            FormField::AddButton,
        ]
    }

    /// 下一个控件（循环）
    #[must_use]
    pub fn next(self) -> FormField {
        match self {
            FormField::Name => FormField::Superpower,
            FormField::Superpower => FormField::Humility,
            FormField::Humility => FormField::AddButton,
            FormField::AddButton => FormField::Name,
        }
    }

    /// 上一个控件（循环）
    #[must_use]
    pub fn prev(self) -> FormField {
        match self {
            FormField::Name => FormField::AddButton,
            FormField::Superpower => FormField::Name,
            FormField::Humility => FormField::Superpower,
            FormField::AddButton => FormField::Humility,
        }
    }

    /// 是否为文本输入框
    pub fn is_text_input(self) -> bool {
        !matches!(self, FormField::AddButton)
    }
}
