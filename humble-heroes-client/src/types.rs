//! Wire types of the superhero API.

use serde::{Deserialize, Serialize};

/// Lowest accepted humility score.
pub const MIN_HUMILITY_SCORE: i64 = 1;
/// Highest accepted humility score.
pub const MAX_HUMILITY_SCORE: i64 = 10;

/// A superhero as stored and returned by the remote API.
///
/// The `id` is assigned by the server and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Superhero {
    /// Server-assigned identifier (`_id` on the wire).
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display superpower.
    pub superpower: String,
    /// Humility score, 1 to 10.
    #[serde(rename = "humilityScore")]
    pub humility_score: i64,
}

/// Body of a create request. Carries no identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSuperhero {
    pub name: String,
    pub superpower: String,
    pub humility_score: i64,
}

impl NewSuperhero {
    pub fn new(
        name: impl Into<String>,
        superpower: impl Into<String>,
        humility_score: i64,
    ) -> Self {
        Self {
            name: name.into(),
            superpower: superpower.into(),
            humility_score,
        }
    }
}
