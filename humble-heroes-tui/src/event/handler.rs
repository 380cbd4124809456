//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, ListMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat（Windows 终端）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if app.modal.is_some() {
        return handle_modal_keys(key);
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) || DefaultKeymap::HELP_F1.matches(&key) {
        return AppMessage::ShowHelp;
    }

    // `?` 在输入框中是普通字符
    if !app.focus.is_text_input()
        && matches!(key.modifiers, KeyModifiers::NONE | KeyModifiers::SHIFT)
        && key.code == KeyCode::Char('?')
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    handle_form_keys(key)
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key)
        || DefaultKeymap::SUBMIT.matches(&key)
        || DefaultKeymap::FORCE_QUIT.matches(&key)
    {
        AppMessage::CloseModal
    } else {
        AppMessage::Noop
    }
}

/// 处理表单与列表的按键
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::NEXT_FIELD.matches(&key) {
        return AppMessage::Form(FormMessage::NextField);
    }
    // 部分终端上 BackTab 不带 SHIFT
    if DefaultKeymap::PREV_FIELD.matches(&key) || key.code == KeyCode::BackTab {
        return AppMessage::Form(FormMessage::PrevField);
    }
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Form(FormMessage::Submit);
    }

    match (key.modifiers, key.code) {
        (_, KeyCode::Up) => AppMessage::List(ListMessage::SelectPrevious),
        (_, KeyCode::Down) => AppMessage::List(ListMessage::SelectNext),
        (_, KeyCode::PageUp) => AppMessage::List(ListMessage::SelectFirst),
        (_, KeyCode::PageDown) => AppMessage::List(ListMessage::SelectLast),
        (_, KeyCode::Backspace) => AppMessage::Form(FormMessage::Backspace),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(ch)) => {
            AppMessage::Form(FormMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FormField, Modal};

    fn press(modifiers: KeyModifiers, code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn app() -> App {
        App::new("http://localhost/api")
    }

    #[test]
    fn ctrl_c_quits() {
        let msg = handle_event(press(KeyModifiers::CONTROL, KeyCode::Char('c')), &app());
        assert!(matches!(msg, AppMessage::Quit));
    }

    #[test]
    fn plain_q_is_typed_not_quit() {
        let msg = handle_event(press(KeyModifiers::NONE, KeyCode::Char('q')), &app());
        assert!(matches!(msg, AppMessage::Form(FormMessage::Input('q'))));
    }

    #[test]
    fn shift_letters_are_typed() {
        let msg = handle_event(press(KeyModifiers::SHIFT, KeyCode::Char('M')), &app());
        assert!(matches!(msg, AppMessage::Form(FormMessage::Input('M'))));
    }

    #[test]
    fn question_mark_opens_help_only_on_button() {
        let mut app = app();
        let key = press(KeyModifiers::NONE, KeyCode::Char('?'));
        assert!(matches!(
            handle_event(key.clone(), &app),
            AppMessage::Form(FormMessage::Input('?'))
        ));
        app.focus = FormField::AddButton;
        assert!(matches!(handle_event(key, &app), AppMessage::ShowHelp));
    }

    #[test]
    fn alt_r_refreshes() {
        let msg = handle_event(press(KeyModifiers::ALT, KeyCode::Char('r')), &app());
        assert!(matches!(msg, AppMessage::Refresh));
    }

    #[test]
    fn enter_submits() {
        let msg = handle_event(press(KeyModifiers::NONE, KeyCode::Enter), &app());
        assert!(matches!(msg, AppMessage::Form(FormMessage::Submit)));
    }

    #[test]
    fn modal_swallows_typing_and_closes_on_esc() {
        let mut app = app();
        app.modal = Some(Modal::Help);
        assert!(matches!(
            handle_event(press(KeyModifiers::NONE, KeyCode::Char('x')), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyModifiers::NONE, KeyCode::Esc), &app),
            AppMessage::CloseModal
        ));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(matches!(
            handle_event(Event::Key(key), &app()),
            AppMessage::Noop
        ));
    }
}
