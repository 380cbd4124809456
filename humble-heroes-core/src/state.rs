//! View-state types

use humble_heroes_client::Superhero;
use serde::Serialize;

/// In-progress form values, not yet submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Draft {
    pub name: String,
    pub superpower: String,
    pub humility_score: i64,
}

impl Draft {
    /// Whether the draft is at its initial `("", "", 0)` value.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.superpower.is_empty() && self.humility_score == 0
    }
}

/// Everything one mounted view owns.
///
/// Values are replaced, never patched in place, by [`update`](crate::update).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    /// Snapshot from the last successful fetch, in server order.
    pub records: Vec<Superhero>,
    pub draft: Draft,
    /// True exactly while a network operation is outstanding.
    pub loading: bool,
    /// Empty when no error is active.
    pub error_message: String,
    /// Identity of the current mount. Completions from other sessions are dropped.
    pub session: u64,
    pub mounted: bool,
}

impl ViewState {
    /// Initial state of a fresh mount.
    pub fn mounted(session: u64) -> Self {
        Self {
            session,
            mounted: true,
            ..Self::default()
        }
    }

    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }

    /// Whether the add action is available.
    pub fn can_submit(&self) -> bool {
        self.mounted && !self.loading
    }
}
