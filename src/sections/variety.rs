//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

use super::SectionOutcome;
use crate::types::{PasswordTraits, Suggestion};

/// Symbols counted as special characters. Anything else outside ASCII
/// letters and digits (spaces, backticks, non-ASCII) earns nothing.
const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

pub fn is_special_char(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}

/// Scores the character classes present in the password.
///
/// # Returns
/// One point each for uppercase, lowercase and digits, two for special
/// characters, and a suggestion for every missing class in that order.
pub fn character_variety_section(traits: &PasswordTraits) -> SectionOutcome {
    let mut outcome = SectionOutcome::default();

    let classes = [
        (traits.has_uppercase, 1, Suggestion::AddUppercase),
        (traits.has_lowercase, 1, Suggestion::AddLowercase),
        (traits.has_numbers, 1, Suggestion::AddNumbers),
        (traits.has_special_chars, 2, Suggestion::AddSpecialChars),
    ];

    for (present, points, suggestion) in classes {
        if present {
            outcome.award(points);
        } else {
            outcome.suggest(suggestion);
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::detect_traits;

    #[test]
    fn test_special_char_set() {
        for c in "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?".chars() {
            assert!(is_special_char(c), "{:?} should be special", c);
        }
        for c in [' ', '`', '~', 'a', 'Z', '5', '€'] {
            assert!(!is_special_char(c), "{:?} should not be special", c);
        }
    }

    #[test]
    fn test_variety_section_missing_uppercase() {
        let outcome = character_variety_section(&detect_traits("lowercase123!"));
        assert_eq!(outcome.points, 4);
        assert_eq!(outcome.suggestions, vec![Suggestion::AddUppercase]);
    }

    #[test]
    fn test_variety_section_missing_lowercase() {
        let outcome = character_variety_section(&detect_traits("UPPERCASE123!"));
        assert_eq!(outcome.suggestions, vec![Suggestion::AddLowercase]);
    }

    #[test]
    fn test_variety_section_missing_numbers_and_special() {
        let outcome = character_variety_section(&detect_traits("NoNumbers"));
        assert_eq!(outcome.points, 2);
        assert_eq!(
            outcome.suggestions,
            vec![Suggestion::AddNumbers, Suggestion::AddSpecialChars]
        );
    }

    #[test]
    fn test_variety_section_all_categories() {
        let outcome = character_variety_section(&detect_traits("HasAll123!@#"));
        assert_eq!(outcome.points, 5);
        assert!(outcome.suggestions.is_empty());
    }

    #[test]
    fn test_variety_section_nothing_present() {
        let outcome = character_variety_section(&PasswordTraits::default());
        assert_eq!(outcome.points, 0);
        assert_eq!(outcome.suggestions.len(), 4);
    }
}
