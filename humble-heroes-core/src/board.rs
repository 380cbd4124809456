//! Superhero board: a view-state driven to completion
//!
//! Owns one [`ViewState`] and a [`Synchronizer`]. Each public operation feeds
//! an event to the reducer and keeps executing the resulting commands until
//! none remain, so when it returns the state is settled.

use std::sync::Arc;

use humble_heroes_client::SuperheroApi;

use crate::reducer::{update, Command, ViewEvent};
use crate::state::ViewState;
use crate::synchronizer::Synchronizer;

/// 超级英雄面板
pub struct SuperheroBoard {
    state: ViewState,
    synchronizer: Synchronizer,
    last_session: u64,
}

impl SuperheroBoard {
    /// 创建面板实例（未挂载）
    #[must_use]
    pub fn new(api: Arc<dyn SuperheroApi>) -> Self {
        Self {
            state: ViewState::default(),
            synchronizer: Synchronizer::new(api),
            last_session: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Activate under a fresh session and load the list once.
    pub async fn mount(&mut self) {
        self.last_session += 1;
        let session = self.last_session;
        log::info!("Mounting superhero board (session {session})");
        self.dispatch(ViewEvent::Mounted { session }).await;
    }

    /// Reset to the initial state. Pending completions for the old session are ignored.
    pub fn unmount(&mut self) {
        log::info!("Unmounting superhero board (session {})", self.state.session);
        self.apply(ViewEvent::Unmounted);
    }

    /// Re-fetch the whole list.
    pub async fn refresh_list(&mut self) {
        self.dispatch(ViewEvent::RefreshRequested).await;
    }

    /// Validate and submit the current draft; on success the list is re-fetched.
    pub async fn submit_draft(&mut self) {
        self.dispatch(ViewEvent::SubmitRequested).await;
    }

    /// Fill the draft with the given values and submit it.
    pub async fn submit(&mut self, name: &str, superpower: &str, humility_score: i64) {
        self.set_name(name);
        self.set_superpower(superpower);
        self.set_humility_input(humility_score.to_string());
        self.submit_draft().await;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.apply(ViewEvent::NameEdited(name.into()));
    }

    pub fn set_superpower(&mut self, superpower: impl Into<String>) {
        self.apply(ViewEvent::SuperpowerEdited(superpower.into()));
    }

    /// Humility editor input; non-numeric text becomes 0.
    pub fn set_humility_input(&mut self, text: impl Into<String>) {
        self.apply(ViewEvent::HumilityEdited(text.into()));
    }

    /// Apply one event without running the command it produces.
    pub fn apply(&mut self, event: ViewEvent) -> Option<Command> {
        let (next, command) = update(std::mem::take(&mut self.state), event);
        self.state = next;
        command
    }

    /// Apply `event` and run commands until the state settles.
    pub async fn dispatch(&mut self, event: ViewEvent) {
        let mut pending = self.apply(event);
        while let Some(command) = pending {
            let completion = self.synchronizer.execute(command).await;
            pending = self.apply(completion);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages;
    use crate::state::Draft;
    use crate::test_utils::{sample_hero, MockSuperheroApi};

    fn board_with(api: &Arc<MockSuperheroApi>) -> SuperheroBoard {
        SuperheroBoard::new(api.clone())
    }

    #[tokio::test]
    async fn scenario_a_mount_renders_fetched_list() {
        let api = Arc::new(MockSuperheroApi::with_records(vec![sample_hero("1", "Zeta")]));
        let mut board = board_with(&api);

        board.mount().await;

        let state = board.state();
        assert_eq!(state.records.len(), 1);
        let hero = &state.records[0];
        assert_eq!(
            format!("{} / {} / {}", hero.name, hero.superpower, hero.humility_score),
            "Zeta / flight / 9"
        );
        assert!(!state.loading);
        assert_eq!(state.error_message, "");
        assert_eq!(api.list_calls(), 1);
    }

    #[tokio::test]
    async fn scenario_b_successful_create_resets_draft_and_refetches() {
        let api = Arc::new(MockSuperheroApi::new());
        let mut board = board_with(&api);
        board.mount().await;

        board.set_name("Modesto");
        board.set_superpower("invisibility");
        board.set_humility_input("7");
        board.submit_draft().await;

        let state = board.state();
        assert_eq!(state.draft, Draft::default());
        assert!(!state.loading);
        assert_eq!(state.error_message, "");
        assert_eq!(api.create_calls(), 1);
        assert_eq!(api.list_calls(), 2);
        assert_eq!(state.records.len(), 1);
        assert_eq!(state.records[0].name, "Modesto");
    }

    #[tokio::test]
    async fn scenario_c_fetch_failure_on_mount() {
        let api = Arc::new(MockSuperheroApi::new());
        api.fail_list(true).await;
        let mut board = board_with(&api);

        board.mount().await;

        let state = board.state();
        assert_eq!(state.error_message, messages::FETCH_FAILED);
        assert!(state.records.is_empty());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn refresh_is_idempotent() {
        let api = Arc::new(MockSuperheroApi::with_records(vec![
            sample_hero("1", "Zeta"),
            sample_hero("2", "Alpha"),
        ]));
        let mut board = board_with(&api);
        board.mount().await;

        board.refresh_list().await;
        let first = board.state().records.clone();
        board.refresh_list().await;

        assert_eq!(board.state().records, first);
        assert_eq!(api.list_calls(), 3);
    }

    #[tokio::test]
    async fn missing_fields_make_no_network_call() {
        let api = Arc::new(MockSuperheroApi::new());
        let mut board = board_with(&api);
        board.mount().await;
        let calls = api.calls();

        board.submit("", "x", 5).await;
        assert_eq!(board.state().error_message, messages::REQUIRED_FIELDS);
        board.submit("x", "", 5).await;
        assert_eq!(board.state().error_message, messages::REQUIRED_FIELDS);

        assert_eq!(api.calls(), calls);
    }

    #[tokio::test]
    async fn range_rule_is_inclusive() {
        let api = Arc::new(MockSuperheroApi::new());
        let mut board = board_with(&api);
        board.mount().await;

        board.submit("x", "y", 0).await;
        assert_eq!(board.state().error_message, messages::HUMILITY_OUT_OF_RANGE);
        board.submit("x", "y", 11).await;
        assert_eq!(board.state().error_message, messages::HUMILITY_OUT_OF_RANGE);
        assert_eq!(api.create_calls(), 0);

        board.submit("x", "y", 1).await;
        board.submit("x", "y", 10).await;
        assert_eq!(api.create_calls(), 2);
        assert_eq!(board.state().error_message, "");
    }

    #[tokio::test]
    async fn failed_create_preserves_draft() {
        let api = Arc::new(MockSuperheroApi::new());
        api.fail_create(true).await;
        let mut board = board_with(&api);
        board.mount().await;

        board.submit("Modesto", "invisibility", 7).await;

        let state = board.state();
        assert_eq!(state.error_message, messages::CREATE_FAILED);
        assert_eq!(
            state.draft,
            Draft {
                name: "Modesto".to_string(),
                superpower: "invisibility".to_string(),
                humility_score: 7,
            }
        );
        assert!(!state.loading);
        // No refresh after a failed create
        assert_eq!(api.list_calls(), 1);
    }

    #[tokio::test]
    async fn retry_after_failed_create_succeeds_without_retyping() {
        let api = Arc::new(MockSuperheroApi::new());
        api.fail_create(true).await;
        let mut board = board_with(&api);
        board.mount().await;
        board.submit("Modesto", "invisibility", 7).await;

        api.fail_create(false).await;
        board.submit_draft().await;

        assert_eq!(board.state().draft, Draft::default());
        assert_eq!(board.state().records.len(), 1);
    }

    #[tokio::test]
    async fn loading_stays_raised_until_every_step_completes() {
        let api = Arc::new(MockSuperheroApi::new());
        let mut board = board_with(&api);
        let sync = Synchronizer::new(api.clone());

        let mut pending = board.apply(ViewEvent::Mounted { session: 1 });
        assert!(board.state().loading);
        while let Some(command) = pending {
            assert!(board.state().loading);
            let completion = sync.execute(command).await;
            pending = board.apply(completion);
        }
        assert!(!board.state().loading);

        board.set_name("a");
        board.set_superpower("b");
        board.set_humility_input("3");
        let mut pending = board.apply(ViewEvent::SubmitRequested);
        let mut steps = 0;
        while let Some(command) = pending {
            // Create, then the chained refresh
            assert!(board.state().loading);
            steps += 1;
            let completion = sync.execute(command).await;
            pending = board.apply(completion);
        }
        assert_eq!(steps, 2);
        assert!(!board.state().loading);
    }

    #[tokio::test]
    async fn unmount_resets_state_and_ignores_late_completion() {
        let api = Arc::new(MockSuperheroApi::with_records(vec![sample_hero("1", "Zeta")]));
        let mut board = board_with(&api);
        board.mount().await;
        board.set_name("half typed");

        let pending = board.apply(ViewEvent::RefreshRequested);
        board.unmount();
        assert_eq!(board.state(), &ViewState::default());

        if let Some(command) = pending {
            let late = Synchronizer::new(api.clone()).execute(command).await;
            board.apply(late);
        }
        assert_eq!(board.state(), &ViewState::default());
    }

    #[tokio::test]
    async fn remount_fetches_again_under_new_session() {
        let api = Arc::new(MockSuperheroApi::with_records(vec![sample_hero("1", "Zeta")]));
        let mut board = board_with(&api);
        board.mount().await;
        let first_session = board.state().session;
        board.unmount();

        board.mount().await;

        assert_ne!(board.state().session, first_session);
        assert_eq!(board.state().records.len(), 1);
        assert_eq!(api.list_calls(), 2);
    }

    #[tokio::test]
    async fn duplicates_are_allowed() {
        let api = Arc::new(MockSuperheroApi::new());
        let mut board = board_with(&api);
        board.mount().await;

        board.submit("Twin", "mirroring", 5).await;
        board.submit("Twin", "mirroring", 5).await;

        assert_eq!(board.state().records.len(), 2);
        assert_eq!(board.state().error_message, "");
    }
}
