//! Pure state transitions
//!
//! `update` takes the current [`ViewState`] and one [`ViewEvent`] and returns
//! the next state plus at most one [`Command`] to run. It performs no I/O;
//! running commands and feeding their completions back in is the job of
//! [`Synchronizer`](crate::Synchronizer) and its callers.
//!
//! ```text
//!   Mounted / RefreshRequested ──▶ loading, FetchList
//!   FetchSucceeded ──▶ records replaced, idle
//!   FetchFailed    ──▶ FETCH_FAILED, idle
//!
//!   SubmitRequested ──▶ invalid: error, no command
//!                   ──▶ valid:   loading, CreateSuperhero
//!   CreateSucceeded ──▶ draft reset, still loading, FetchList
//!   CreateFailed    ──▶ CREATE_FAILED, draft kept, idle
//! ```

use humble_heroes_client::{ClientError, NewSuperhero, Superhero};

use crate::messages;
use crate::state::{Draft, ViewState};
use crate::validation::{parse_humility_input, validate_draft};

/// Everything that can happen to a view.
#[derive(Debug, Clone)]
pub enum ViewEvent {
    /// The view became active under a new session id
    Mounted { session: u64 },
    /// The view went away; state resets and late completions are ignored
    Unmounted,
    /// User asked to reload the list
    RefreshRequested,

    // === Draft editors ===
    NameEdited(String),
    SuperpowerEdited(String),
    /// Raw editor text; converted with [`parse_humility_input`]
    HumilityEdited(String),

    /// User pressed "Add Superhero"
    SubmitRequested,

    // === Completions ===
    FetchSucceeded {
        session: u64,
        records: Vec<Superhero>,
    },
    FetchFailed {
        session: u64,
        error: ClientError,
    },
    CreateSucceeded {
        session: u64,
    },
    CreateFailed {
        session: u64,
        error: ClientError,
    },
}

/// A network operation requested by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchList { session: u64 },
    CreateSuperhero { session: u64, hero: NewSuperhero },
}

/// Apply one event.
pub fn update(state: ViewState, event: ViewEvent) -> (ViewState, Option<Command>) {
    match event {
        ViewEvent::Mounted { session } => start_fetch(ViewState::mounted(session)),

        ViewEvent::Unmounted => (ViewState::default(), None),

        ViewEvent::RefreshRequested => {
            if state.can_submit() {
                start_fetch(state)
            } else {
                (state, None)
            }
        }

        ViewEvent::NameEdited(name) => edit(state, |draft| draft.name = name),
        ViewEvent::SuperpowerEdited(superpower) => {
            edit(state, |draft| draft.superpower = superpower)
        }
        ViewEvent::HumilityEdited(text) => edit(state, |draft| {
            draft.humility_score = parse_humility_input(&text);
        }),

        ViewEvent::SubmitRequested => submit(state),

        ViewEvent::FetchSucceeded { session, records } => {
            if !is_current(&state, session) {
                return (state, None);
            }
            let next = ViewState {
                records,
                loading: false,
                ..state
            };
            (next, None)
        }

        ViewEvent::FetchFailed { session, .. } => {
            if !is_current(&state, session) {
                return (state, None);
            }
            let next = ViewState {
                error_message: messages::FETCH_FAILED.to_string(),
                loading: false,
                ..state
            };
            (next, None)
        }

        ViewEvent::CreateSucceeded { session } => {
            if !is_current(&state, session) {
                return (state, None);
            }
            // The refresh keeps `loading` raised until the list arrives
            start_fetch(ViewState {
                draft: Draft::default(),
                ..state
            })
        }

        ViewEvent::CreateFailed { session, .. } => {
            if !is_current(&state, session) {
                return (state, None);
            }
            let next = ViewState {
                error_message: messages::CREATE_FAILED.to_string(),
                loading: false,
                ..state
            };
            (next, None)
        }
    }
}

fn is_current(state: &ViewState, session: u64) -> bool {
    state.mounted && state.session == session
}

fn start_fetch(state: ViewState) -> (ViewState, Option<Command>) {
    let command = Command::FetchList {
        session: state.session,
    };
    let next = ViewState {
        loading: true,
        error_message: String::new(),
        ..state
    };
    (next, Some(command))
}

fn edit(mut state: ViewState, apply: impl FnOnce(&mut Draft)) -> (ViewState, Option<Command>) {
    if state.mounted {
        apply(&mut state.draft);
    }
    (state, None)
}

fn submit(state: ViewState) -> (ViewState, Option<Command>) {
    if !state.can_submit() {
        return (state, None);
    }

    match validate_draft(&state.draft) {
        Err(rule) => {
            let next = ViewState {
                error_message: rule.to_string(),
                ..state
            };
            (next, None)
        }
        Ok(hero) => {
            let command = Command::CreateSuperhero {
                session: state.session,
                hero,
            };
            let next = ViewState {
                loading: true,
                error_message: String::new(),
                ..state
            };
            (next, Some(command))
        }
    }
}
