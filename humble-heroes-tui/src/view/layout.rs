//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::theme::{colors, Styles};

/// 表单区域高度：三个输入框 + 按钮 + 上下边框
const FORM_HEIGHT: u16 = 6;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let c = colors();
    frame.render_widget(
        Paragraph::new("").style(Style::default().bg(c.bg).fg(c.fg)),
        size,
    );

    let error_rows = if app.view.has_error() {
        wrapped_rows(&app.view.error_message, size.width.saturating_sub(1))
    } else {
        1
    };

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // 标题栏
            Constraint::Length(error_rows),  // 错误行（按宽度折行）
            Constraint::Length(FORM_HEIGHT), // 表单
            Constraint::Length(1),           // 加载提示
            Constraint::Min(3),              // 列表
            Constraint::Length(1),           // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    render_error_line(app, frame, main_layout[1]);
    components::form::render(app, frame, main_layout[2]);
    render_loading_line(app, frame, main_layout[3]);
    components::hero_list::render(app, frame, main_layout[4]);
    components::statusbar::render(app, frame, main_layout[5]);

    // 弹窗在最上层
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let line = Line::from(vec![
        Span::raw(format!(" {}", texts.app.title)),
        Span::raw("  "),
        Span::raw(format!("{}: {}", texts.app.api, app.endpoint)),
    ]);
    frame.render_widget(Paragraph::new(line).style(Styles::title_bar()), area);
}

/// 按单词贪心折行后需要的行数，与 `Wrap { trim: true }` 一致
fn wrapped_rows(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut rows = 1usize;
    let mut used = 0usize;
    for word in text.split_whitespace() {
        let mut w = word.width();
        if used > 0 && used + 1 + w <= width {
            used += 1 + w;
            continue;
        }
        if used > 0 {
            rows += 1;
        }
        // 超长单词按字符切断
        while w > width {
            rows += 1;
            w -= width;
        }
        used = w;
    }
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// 渲染错误行（无错误时留空）
fn render_error_line(app: &App, frame: &mut Frame, area: Rect) {
    if !app.view.has_error() {
        return;
    }
    // 左侧留一格缩进，与其它行对齐
    let area = Rect {
        x: area.x.saturating_add(1),
        width: area.width.saturating_sub(1),
        ..area
    };
    let paragraph = Paragraph::new(app.view.error_message.as_str())
        .style(Styles::error())
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// 渲染加载提示
fn render_loading_line(app: &App, frame: &mut Frame, area: Rect) {
    if !app.view.loading {
        return;
    }
    let paragraph = Paragraph::new(format!(" {}", t().list.loading)).style(Styles::muted());
    frame.render_widget(paragraph, area);
}
