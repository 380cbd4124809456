//! Humble Heroes Core Library
//!
//! UI-independent logic of the superhero board:
//! - View-state (`ViewState`, `Draft`)
//! - Pure reducer (`update`) producing network `Command`s
//! - Draft validation and humility input parsing
//! - `Synchronizer` running commands against a `SuperheroApi`
//! - `SuperheroBoard` driving the reducer to completion
//!
//! Front ends own the event loop; this crate never touches a terminal.

pub mod board;
pub mod error;
pub mod messages;
pub mod reducer;
pub mod state;
pub mod synchronizer;
pub mod validation;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use board::SuperheroBoard;
pub use error::{ClientError, CoreError, ValidationError};
pub use reducer::{update, Command, ViewEvent};
pub use state::{Draft, ViewState};
pub use synchronizer::Synchronizer;
pub use validation::{parse_humility_input, validate_draft};
