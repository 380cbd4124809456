//! 可复用的 UI 组件

pub mod form;
pub mod hero_list;
pub mod modal;
pub mod statusbar;
