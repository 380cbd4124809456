//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!     ┌──────────────────────────────────────┐
//!     │ 🦸 Humble Superheroes                │  标题栏
//!     │ <error message>                      │  错误行（红色）
//!     │ ┌ New Superhero ───────────────────┐ │
//!     │ │ Name            ...              │ │  表单
//!     │ │ Superpower      ...              │ │
//!     │ │ Humility Score  0                │ │
//!     │ │ [ Add Superhero ]                │ │
//!     │ └──────────────────────────────────┘ │
//!     │ Loading superheroes...               │  加载提示
//!     │ ┌ Superheroes ─────────────────────┐ │
//!     │ │ Zeta                             │ │  列表
//!     │ │   Power: flight  Humility: 9     │ │
//!     │ └──────────────────────────────────┘ │
//!     │ Tab Switch Field │ Enter Add │ ...   │  状态栏
//!     └──────────────────────────────────────┘
//!
//! 帮助弹窗渲染在最上层。
//!

mod components;
mod layout;
pub mod theme;

pub use layout::render;
