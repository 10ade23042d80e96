//! Pattern analysis section - detects repetitive and sequential patterns.

use super::SectionOutcome;
use crate::types::{PasswordTraits, Suggestion};

const RUN_LENGTH: usize = 3;

/// True if any character appears 3 or more times in a row.
pub fn has_consecutive_run(password: &str) -> bool {
    let mut previous = None;
    let mut repeated_count = 0;
    for c in password.chars() {
        if previous == Some(c) {
            repeated_count += 1;
            if repeated_count >= RUN_LENGTH {
                return true;
            }
        } else {
            previous = Some(c);
            repeated_count = 1;
        }
    }
    false
}

/// True if the password contains three consecutive ascending letters
/// (case-insensitive) or digits, e.g. `abc`, `XyZ` or `789`.
///
/// Sequences do not wrap: `yza` and `890` are not runs.
pub fn has_sequential_run(password: &str) -> bool {
    let chars: Vec<char> = password.chars().map(|c| c.to_ascii_lowercase()).collect();
    chars.windows(RUN_LENGTH).any(|window| {
        let same_class = window.iter().all(char::is_ascii_lowercase)
            || window.iter().all(char::is_ascii_digit);
        same_class && window.windows(2).all(|w| w[1] as u32 == w[0] as u32 + 1)
    })
}

/// Scores the absence of repetitive and sequential patterns.
///
/// # Returns
/// One point for each pattern absent, and a suggestion for each one present.
/// An empty password earns nothing here.
pub fn pattern_analysis_section(traits: &PasswordTraits) -> SectionOutcome {
    let mut outcome = SectionOutcome::default();
    let has_content = traits.length > 0;

    if traits.consecutive_chars {
        outcome.suggest(Suggestion::AvoidRepeating);
    } else if has_content {
        outcome.award(1);
    }

    if traits.sequential_chars {
        outcome.suggest(Suggestion::AvoidSequential);
    } else if has_content {
        outcome.award(1);
    }
    outcome
}
