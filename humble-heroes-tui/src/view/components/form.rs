//! 添加超级英雄表单

use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::{App, FormField};
use crate::view::theme::{colors, Styles};

/// 标签列宽度（基于显示宽度，兼容中文）
const LABEL_WIDTH: usize = 16;

/// 渲染表单
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let block = Block::default()
        .title(format!(" {} ", texts.form.title))
        .borders(Borders::ALL)
        .border_style(Styles::border(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = FormField::all()
        .iter()
        .map(|field| render_field(app, *field))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    // 光标放在当前输入框文本末尾
    if app.modal.is_none() && app.focus.is_text_input() {
        if let Some(row) = FormField::all().iter().position(|f| *f == app.focus) {
            let value_width = field_value(app, app.focus).width();
            let offset = u16::try_from(LABEL_WIDTH + 1 + value_width).unwrap_or(u16::MAX);
            let x = inner.x.saturating_add(offset);
            let y = inner.y.saturating_add(u16::try_from(row).unwrap_or(u16::MAX));
            if x < inner.right() && y < inner.bottom() {
                frame.set_cursor_position(Position::new(x, y));
            }
        }
    }
}

/// 字段当前显示的文本
fn field_value(app: &App, field: FormField) -> String {
    match field {
        FormField::Name => app.view.draft.name.clone(),
        FormField::Superpower => app.view.draft.superpower.clone(),
        FormField::Humility => app.humility_text(),
        FormField::AddButton => String::new(),
    }
}

fn render_field(app: &App, field: FormField) -> Line<'static> {
    let texts = t();
    let c = colors();
    let focused = app.focus == field;

    let label = match field {
        FormField::Name => texts.form.name_label,
        FormField::Superpower => texts.form.superpower_label,
        FormField::Humility => texts.form.humility_label,
        FormField::AddButton => return render_button(app, focused),
    };

    let label_style = if focused {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };
    let padding = LABEL_WIDTH.saturating_sub(label.width());

    Line::from(vec![
        Span::styled(label.to_string(), label_style),
        Span::raw(" ".repeat(padding + 1)),
        Span::styled(field_value(app, field), Style::default().fg(c.fg)),
    ])
}

/// 请求进行中时按钮显示 "Adding..." 并置灰
fn render_button(app: &App, focused: bool) -> Line<'static> {
    let texts = t();
    let enabled = app.view.can_submit();
    let label = if app.view.loading {
        texts.form.adding
    } else {
        texts.form.add_button
    };

    let style = if !enabled {
        Styles::muted()
    } else if focused {
        Styles::selected()
    } else {
        Style::default().fg(colors().highlight)
    };

    Line::from(Span::styled(format!("[ {label} ]"), style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use humble_heroes_core::ViewEvent;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn button_label_follows_loading() {
        let mut app = App::new("http://localhost/api");
        app.mount(1);
        assert_eq!(text_of(&render_button(&app, false)), "[ Adding... ]");

        app.apply(ViewEvent::FetchSucceeded {
            session: 1,
            records: Vec::new(),
        });
        assert_eq!(text_of(&render_button(&app, false)), "[ Add Superhero ]");
    }

    #[test]
    fn field_shows_draft_value() {
        let mut app = App::new("http://localhost/api");
        app.mount(1);
        app.apply(ViewEvent::NameEdited("Modesto".to_string()));
        app.apply(ViewEvent::HumilityEdited("7".to_string()));

        assert!(text_of(&render_field(&app, FormField::Name)).ends_with("Modesto"));
        assert!(text_of(&render_field(&app, FormField::Humility)).ends_with('7'));
    }
}
