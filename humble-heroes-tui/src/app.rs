//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     for event in service.drain() {                  // 取出后台完成的网络请求
//!         update(AppMessage::Completed(event))            // 交给 reducer，可能产生新的命令
//!     }                                               //   （添加成功后会接着刷新列表）
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新状态
//!     }
//! }
//!
//! `update` 返回的 `Command` 一律交给 `SuperheroService::run()` 在后台执行，
//! UI 永远不会等待网络。

use std::time::Duration;

use anyhow::Result;

use crate::backend::SuperheroService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, service: &mut SuperheroService) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 处理后台完成的请求
        for completion in service.drain() {
            dispatch(app, service, AppMessage::Completed(completion));
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息并更新状态
            let msg = event::handle_event(event, app);
            dispatch(app, service, msg);
        }
    }

    Ok(())
}

/// 更新状态，并在后台执行产生的命令
fn dispatch(app: &mut App, service: &SuperheroService, msg: AppMessage) {
    if let Some(command) = update::update(app, msg) {
        service.run(command);
    }
}
