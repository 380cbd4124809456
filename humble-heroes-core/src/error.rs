//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

pub use humble_heroes_client::ClientError;

use crate::messages;

/// A draft rejected before any network call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule")]
pub enum ValidationError {
    /// Name or superpower is empty
    #[error("{}", messages::REQUIRED_FIELDS)]
    MissingRequiredField,

    /// Humility score outside the accepted range
    #[error("{}", messages::HUMILITY_OUT_OF_RANGE)]
    HumilityOutOfRange { score: i64 },
}

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Draft failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// API error (converting from client)
    #[error("{0}")]
    Client(#[from] ClientError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, client errors), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Client(e) => e.is_expected(),
        }
    }
}
