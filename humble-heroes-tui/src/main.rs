//! Humble Heroes TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与网络请求 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 日志写入文件，终端留给 TUI
//!     load config             // config.json + HUMBLE_HEROES_API_URL
//!     tokio Runtime           // 网络请求在运行时上执行，主循环保持同步
//!     init_terminal()
//!     App::new() + mount()    // 挂载即拉取一次列表
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};

use backend::{JsonConfigService, SuperheroService};
use util::{init_logging, init_terminal, install_panic_hook, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 初始化日志（guard 必须存活到程序结束）
    let _log_guard = init_logging()?;
    tracing::info!("Starting Humble Heroes TUI");

    // 2. 加载配置
    let config = JsonConfigService::new().load_or_default();
    view::theme::set_theme(config.theme);
    i18n::set_language(config.language());

    // 3. 创建异步运行时与后台服务
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;
    let mut service = SuperheroService::from_config(&config.client_config(), runtime.handle().clone())
        .context("invalid API configuration")?;

    // 4. 初始化终端
    install_panic_hook();
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例并挂载（首次拉取列表）
    let mut app = model::App::new(config.api_url.clone());
    let session = service.next_session();
    if let Some(command) = app.mount(session) {
        service.run(command);
    }

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app, &mut service);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 进行中的请求随运行时一起取消
    runtime.shutdown_background();
    tracing::info!("Humble Heroes TUI exited");

    // 8. 返回结果
    result
}
