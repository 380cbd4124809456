//! 表单更新逻辑
//!
//! 每次按键都把字段的新文本交给 reducer；校验推迟到提交时进行。

use humble_heroes_core::{Command, ViewEvent};

use crate::message::FormMessage;
use crate::model::{App, FormField};

/// 谦逊分数输入框最多接受的数字个数（i64 不会溢出）
const MAX_HUMILITY_DIGITS: usize = 18;

/// 处理表单消息
pub fn update(app: &mut App, msg: FormMessage) -> Option<Command> {
    match msg {
        FormMessage::NextField => {
            app.focus = app.focus.next();
            None
        }

        FormMessage::PrevField => {
            app.focus = app.focus.prev();
            None
        }

        FormMessage::Input(ch) => handle_input(app, ch),

        FormMessage::Backspace => handle_backspace(app),

        FormMessage::Submit => app.apply(ViewEvent::SubmitRequested),
    }
}

fn handle_input(app: &mut App, ch: char) -> Option<Command> {
    match app.focus {
        FormField::Name => {
            let mut name = app.view.draft.name.clone();
            name.push(ch);
            app.apply(ViewEvent::NameEdited(name))
        }
        FormField::Superpower => {
            let mut superpower = app.view.draft.superpower.clone();
            superpower.push(ch);
            app.apply(ViewEvent::SuperpowerEdited(superpower))
        }
        FormField::Humility => {
            if !ch.is_ascii_digit() {
                return None;
            }
            // "0" is the empty value; typing replaces it
            let mut text = app.humility_text();
            if text == "0" {
                text.clear();
            }
            if text.len() >= MAX_HUMILITY_DIGITS {
                return None;
            }
            text.push(ch);
            app.apply(ViewEvent::HumilityEdited(text))
        }
        FormField::AddButton => None,
    }
}

fn handle_backspace(app: &mut App) -> Option<Command> {
    match app.focus {
        FormField::Name => {
            let mut name = app.view.draft.name.clone();
            name.pop();
            app.apply(ViewEvent::NameEdited(name))
        }
        FormField::Superpower => {
            let mut superpower = app.view.draft.superpower.clone();
            superpower.pop();
            app.apply(ViewEvent::SuperpowerEdited(superpower))
        }
        FormField::Humility => {
            let mut text = app.humility_text();
            text.pop();
            app.apply(ViewEvent::HumilityEdited(text))
        }
        FormField::AddButton => None,
    }
}
