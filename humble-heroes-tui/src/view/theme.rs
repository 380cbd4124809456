//! 主题和样式定义

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use std::sync::atomic::{AtomicU8, Ordering};

// 默认为 0 (Dark)，相应地，1 为 Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// 主题枚举
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// 设置当前主题
pub fn set_theme(theme: Theme) {
    let index = match theme {
        Theme::Dark => 0,
        Theme::Light => 1,
    };
    CURRENT_THEME.store(index, Ordering::SeqCst);
}

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => ThemeColors::dark(),
        _ => ThemeColors::light(),
    }
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(30, 30, 30),
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(0, 122, 204),
            highlight: Color::Rgb(0, 122, 204),
            selected_bg: Color::Rgb(38, 79, 120),
            selected_fg: Color::White,
            error: Color::Rgb(244, 135, 113),
            muted: Color::Rgb(128, 128, 128),
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(250, 250, 250),
            fg: Color::Rgb(51, 51, 51),
            border: Color::Rgb(204, 204, 204),
            border_focused: Color::Rgb(0, 102, 204),
            highlight: Color::Rgb(0, 102, 204),
            selected_bg: Color::Rgb(204, 232, 255),
            selected_fg: Color::Black,
            error: Color::Rgb(215, 58, 73),
            muted: Color::Rgb(128, 128, 128),
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 边框样式
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    /// 选中项样式
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 错误提示样式（红色粗体）
    pub fn error() -> Style {
        Style::default()
            .fg(colors().error)
            .add_modifier(Modifier::BOLD)
    }

    /// 次要文字
    pub fn muted() -> Style {
        Style::default().fg(colors().muted)
    }

    /// 标题栏样式
    pub fn title_bar() -> Style {
        let c = colors();
        Style::default()
            .bg(c.highlight)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        Style::default().bg(colors().highlight).fg(Color::White)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }
}
