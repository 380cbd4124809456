//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的基础设施代码：
//!
//!     · terminal      终端的初始化和恢复
//!         - Raw Mode：关闭行缓冲与回显，每个按键立即生效
//!         - Alternate Screen：退出后恢复主屏幕内容
//!       无论 app::run 成功与否，main.rs 都必须先恢复终端再返回结果；
//!       panic hook 保证 panic 时同样恢复。
//!
//!     · logging       文件日志（tracing + tracing-appender）
//!       终端被 TUI 占用，日志不能写到 stdout / stderr。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, install_panic_hook, restore_terminal, Term};
