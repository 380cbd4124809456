//! Draft validation and humility-score input parsing

use humble_heroes_client::{MAX_HUMILITY_SCORE, MIN_HUMILITY_SCORE, NewSuperhero};

use crate::error::ValidationError;
use crate::state::Draft;

/// Check a draft before submitting it. The first failing rule wins:
/// required fields, then the humility range (inclusive).
pub fn validate_draft(draft: &Draft) -> Result<NewSuperhero, ValidationError> {
    if draft.name.is_empty() || draft.superpower.is_empty() {
        return Err(ValidationError::MissingRequiredField);
    }

    let score = draft.humility_score;
    if !(MIN_HUMILITY_SCORE..=MAX_HUMILITY_SCORE).contains(&score) {
        return Err(ValidationError::HumilityOutOfRange { score });
    }

    Ok(NewSuperhero::new(
        draft.name.clone(),
        draft.superpower.clone(),
        score,
    ))
}

/// Convert humility editor text to a score.
///
/// Empty or non-numeric text yields 0. Values are not clamped here; range
/// checking happens at submit time.
pub fn parse_humility_input(text: &str) -> i64 {
    text.trim().parse::<i64>().unwrap_or(0)
}
