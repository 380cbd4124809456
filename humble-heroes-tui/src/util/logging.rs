//! 日志初始化
//!
//! TUI 占用了整个终端，日志只能写到文件里：
//!     <data_dir>/humble-heroes-tui/logs/humble-heroes-tui.log
//!
//! 库 crate 通过 `log` 门面输出，由 tracing-subscriber 桥接。

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_NAME: &str = "humble-heroes-tui.log";

/// 日志目录
fn log_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("humble-heroes-tui")
        .join("logs")
}

/// 安装全局 subscriber
///
/// 返回的 guard 必须存活到程序结束，否则缓冲中的日志会丢失。
/// 级别默认 `info`，可通过 `RUST_LOG` 覆盖。
pub fn init_logging() -> Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}
