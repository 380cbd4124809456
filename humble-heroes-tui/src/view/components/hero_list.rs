//! 超级英雄列表

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use humble_heroes_client::Superhero;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染列表（按服务器返回的顺序）
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let block = Block::default()
        .title(format!(" {} ({}) ", texts.list.title, app.view.records.len()))
        .borders(Borders::ALL)
        .border_style(Styles::border(false));

    if app.view.records.is_empty() {
        let placeholder = if app.view.loading {
            ""
        } else {
            texts.list.empty
        };
        frame.render_widget(
            Paragraph::new(placeholder).style(Styles::muted()).block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = app.view.records.iter().map(hero_item).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// 每条记录两行：名字 + 能力与谦逊分数
fn hero_item(hero: &Superhero) -> ListItem<'static> {
    let texts = t();
    let c = colors();
    ListItem::new(vec![
        Line::from(Span::styled(
            hero.name.clone(),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("  {}: {}", texts.list.power, hero.superpower),
                Style::default().fg(c.fg),
            ),
            Span::raw("   "),
            Span::styled(
                format!("{}: {}", texts.list.humility, hero.humility_score),
                Styles::muted(),
            ),
        ]),
    ])
}
