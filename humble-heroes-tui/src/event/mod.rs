//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入转换为 Message。
//!
//!     · poll_event      事件轮询，受 ~/app.rs 调用
//!     · handle_event    事件分发：
//!         - 有弹窗打开时，只处理关闭弹窗的按键
//!         - 全局快捷键（退出、刷新、帮助）就地处理
//!         - 其余按键交给表单 / 列表
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
