//! Length section - rewards longer passwords.

use super::SectionOutcome;
use crate::types::{PasswordTraits, Suggestion};

/// Each threshold reached is worth one point.
const LENGTH_THRESHOLDS: [usize; 3] = [8, 12, 16];

/// Below this length the user is told to add characters.
pub const RECOMMENDED_LENGTH: usize = 12;

/// Scores password length.
///
/// # Returns
/// One point per threshold in `8, 12, 16` reached, plus a suggestion when the
/// password is shorter than [`RECOMMENDED_LENGTH`].
pub fn length_section(traits: &PasswordTraits) -> SectionOutcome {
    let mut outcome = SectionOutcome::default();

    let reached = LENGTH_THRESHOLDS
        .iter()
        .filter(|&&min| traits.length >= min)
        .count();
    outcome.award(reached as u8);

    if traits.length < RECOMMENDED_LENGTH {
        outcome.suggest(Suggestion::UseMoreCharacters);
    }
    outcome
}
