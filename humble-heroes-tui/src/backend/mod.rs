//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦。
//! 状态转换在 humble-heroes-core 的 reducer 中完成，这里只负责：
//!
//!     · config_service        配置加载（JSON 文件 + 环境变量）
//!     · superhero_service     在 tokio 运行时上执行网络命令
//!
//!
//! 一次网络操作的流程：
//!
//!     Update 层 ── Command ──▶ SuperheroService::run()
//!                                     │ tokio::spawn
//!                                     ▼
//!                              Synchronizer::execute()
//!                                     │ mpsc channel
//!                                     ▼
//!     主循环 ◀── ViewEvent ── SuperheroService::drain()
//!
//! 过期的完成事件（已卸载或属于旧会话）由 reducer 丢弃。
//!

mod config_service;
mod superhero_service;

pub use config_service::JsonConfigService;
pub use superhero_service::SuperheroService;
