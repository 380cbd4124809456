//! 超级英雄服务
//!
//! 把 reducer 产生的 `Command` 放到 tokio 运行时上执行，
//! 完成事件经由 channel 回到主循环，由主循环在下一帧取出。

use std::sync::Arc;

use humble_heroes_client::{ClientConfig, RestSuperheroApi, SuperheroApi};
use humble_heroes_core::{Command, Synchronizer, ViewEvent};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// 后台执行网络命令的服务
pub struct SuperheroService {
    synchronizer: Synchronizer,
    runtime: Handle,
    tx: UnboundedSender<ViewEvent>,
    rx: UnboundedReceiver<ViewEvent>,
    last_session: u64,
}

impl SuperheroService {
    pub fn new(api: Arc<dyn SuperheroApi>, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            synchronizer: Synchronizer::new(api),
            runtime,
            tx,
            rx,
            last_session: 0,
        }
    }

    /// 使用 REST 客户端创建服务
    pub fn from_config(
        config: &ClientConfig,
        runtime: Handle,
    ) -> humble_heroes_client::Result<Self> {
        let api = RestSuperheroApi::new(config)?;
        log::info!("Using superhero API at {}", api.endpoint());
        Ok(Self::new(Arc::new(api), runtime))
    }

    /// 分配新的挂载会话 ID
    pub fn next_session(&mut self) -> u64 {
        self.last_session += 1;
        self.last_session
    }

    /// 在后台执行命令，不阻塞 UI
    pub fn run(&self, command: Command) {
        log::debug!("Running {command:?}");
        let _guard = self.runtime.enter();
        // 完成事件通过 channel 送回，不需要等待 JoinHandle
        drop(self.synchronizer.spawn(command, self.tx.clone()));
    }

    /// 取出所有已完成的事件
    pub fn drain(&mut self) -> Vec<ViewEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }
}
