//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(modal) = app.modal else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_help(frame: &mut Frame) {
    let texts = t();
    let c = colors();
    let area = centered_rect(50, 18, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(texts.help.title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let section = Style::default().fg(c.highlight).add_modifier(Modifier::BOLD);
    let key = Style::default().fg(ratatui::style::Color::Yellow);
    let desc = Style::default().fg(c.fg);
    let row = |k: &'static str, d: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {k:<10}"), key),
            Span::styled(d, desc),
        ])
    };

    let lines = vec![
        Line::styled(texts.help.form_section, section),
        row("Tab", texts.help.next_field),
        row("Shift+Tab", texts.help.prev_field),
        row("Enter", texts.help.submit),
        row("Backspace", texts.help.delete_char),
        Line::from(""),
        Line::styled(texts.help.global_section, section),
        row("↑↓", texts.help.select),
        row("PgUp/PgDn", texts.help.jump),
        row("Alt+r", texts.help.refresh),
        row("Alt+h / ?", texts.help.help),
        row("Ctrl+C", texts.help.quit),
        row("Alt+q", texts.help.quit),
        Line::from(""),
        Line::styled(texts.help.close_hint, Style::default().fg(c.muted)),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
