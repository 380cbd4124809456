//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event ──▶ Update 之间的桥梁。
//! 键盘事件与后台网络任务的完成结果都被翻译成 `AppMessage`，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;        // 主消息
//!         mod form;       // 表单子消息
//!         mod list;       // 列表子消息
//!

mod app;
mod form;
mod list;

pub use app::AppMessage;
pub use form::FormMessage;
pub use list::ListMessage;
