//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//! 需要联网时不直接发请求，而是返回一个 `Command`，
//! 由主循环交给 Backend 层在后台执行；执行结果以
//! `AppMessage::Completed` 的形式回到这里。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod form;           // 表单子消息处理
//!         mod list;           // 列表子消息处理
//!

mod form;
mod list;

use humble_heroes_core::{Command, ViewEvent};

use crate::message::AppMessage;
use crate::model::{App, Modal};

/// 处理应用消息，更新状态，返回需要执行的网络命令
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            app.apply(ViewEvent::Unmounted)
        }

        AppMessage::Refresh => app.apply(ViewEvent::RefreshRequested),

        AppMessage::ShowHelp => {
            app.modal = Some(Modal::Help);
            None
        }

        AppMessage::CloseModal => {
            app.modal = None;
            None
        }

        AppMessage::Form(form_msg) => form::update(app, form_msg),

        AppMessage::List(list_msg) => {
            list::update(app, list_msg);
            None
        }

        AppMessage::Completed(event) => app.apply(event),

        AppMessage::Noop => None,
    }
}
