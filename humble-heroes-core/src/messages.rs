//! User-facing error strings
//!
//! These are shown verbatim in the error line and are not translated.

/// List retrieval failed (network, non-2xx or malformed body).
pub const FETCH_FAILED: &str = "Failed to fetch superheroes. Try again later.";

/// Name or superpower left empty.
pub const REQUIRED_FIELDS: &str =
    "Name, superpower, and humility score are required. Don't forget to fill in all the fields! :)";

/// Humility score outside 1..=10.
pub const HUMILITY_OUT_OF_RANGE: &str = "Humility score must be between 1 and 10.";

/// Create request failed.
pub const CREATE_FAILED: &str = "Failed to add superhero.";
