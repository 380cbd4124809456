//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 超级英雄列表、草稿、加载标志与错误信息都保存在
//! `humble_heroes_core::ViewState` 中，只能经由 reducer 改变；
//! 这里只额外保存纯界面状态（焦点、列表选中项、弹窗）。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 表单焦点（Name / Superpower / Humility / Add 按钮）
//!         mod modal;          // 弹窗状态
//!

mod app;
mod focus;
mod modal;

pub use app::App;
pub use focus::FormField;
pub use modal::Modal;
