//! Synchronizer: runs reducer commands against the remote API

use std::sync::Arc;

use humble_heroes_client::{ClientError, SuperheroApi};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::error::CoreError;
use crate::reducer::{Command, ViewEvent};

/// Executes [`Command`]s and turns their outcome into completion events.
#[derive(Clone)]
pub struct Synchronizer {
    api: Arc<dyn SuperheroApi>,
}

impl Synchronizer {
    #[must_use]
    pub fn new(api: Arc<dyn SuperheroApi>) -> Self {
        Self { api }
    }

    /// Run one command to completion.
    ///
    /// Never fails: every error is reported as the matching `*Failed` event.
    pub async fn execute(&self, command: Command) -> ViewEvent {
        match command {
            Command::FetchList { session } => match self.api.list_superheroes().await {
                Ok(records) => ViewEvent::FetchSucceeded { session, records },
                Err(error) => {
                    log_failure("fetch superheroes", &error);
                    ViewEvent::FetchFailed { session, error }
                }
            },
            Command::CreateSuperhero { session, hero } => {
                match self.api.create_superhero(&hero).await {
                    Ok(()) => ViewEvent::CreateSucceeded { session },
                    Err(error) => {
                        log_failure("add superhero", &error);
                        ViewEvent::CreateFailed { session, error }
                    }
                }
            }
        }
    }

    /// Run `command` on the current tokio runtime and send the completion to `events`.
    ///
    /// If the receiving side is gone the completion is dropped.
    pub fn spawn(&self, command: Command, events: UnboundedSender<ViewEvent>) -> JoinHandle<()> {
        let synchronizer = self.clone();
        tokio::spawn(async move {
            let event = synchronizer.execute(command).await;
            if events.send(event).is_err() {
                log::debug!("View is gone, dropping completion");
            }
        })
    }
}

fn log_failure(action: &str, error: &ClientError) {
    let error = CoreError::from(error.clone());
    if error.is_expected() {
        log::warn!("Failed to {action}: {error}");
    } else {
        log::error!("Failed to {action}: {error}");
    }
}
