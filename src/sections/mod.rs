//! Password evaluation sections
//!
//! Each section scores one aspect of password strength from the detected
//! [`PasswordTraits`]. Sections run in a fixed order, which is also the order
//! their suggestions appear in.

mod length;
mod pattern;
mod variety;

pub use length::length_section;
pub use pattern::{has_consecutive_run, has_sequential_run, pattern_analysis_section};
pub use variety::{character_variety_section, is_special_char};

use crate::types::{PasswordTraits, Suggestion};

/// Points awarded by a section and the suggestions it raised.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionOutcome {
    pub points: u8,
    pub suggestions: Vec<Suggestion>,
}

impl SectionOutcome {
    pub(crate) fn award(&mut self, points: u8) {
        self.points += points;
    }

    pub(crate) fn suggest(&mut self, suggestion: Suggestion) {
        self.suggestions.push(suggestion);
    }
}

/// Signature shared by every section.
pub type Section = fn(&PasswordTraits) -> SectionOutcome;

/// Sections in evaluation order.
pub const SECTIONS: [Section; 3] = [
    length_section,
    character_variety_section,
    pattern_analysis_section,
];

/// Scans the password once per check and collects every fact the sections need.
pub fn detect_traits(password: &str) -> PasswordTraits {
    PasswordTraits {
        length: password.chars().count(),
        has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        has_numbers: password.chars().any(|c| c.is_ascii_digit()),
        has_special_chars: password.chars().any(is_special_char),
        consecutive_chars: has_consecutive_run(password),
        sequential_chars: has_sequential_run(password),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_traits_empty() {
        assert_eq!(detect_traits(""), PasswordTraits::default());
    }

    #[test]
    fn test_detect_traits_counts_chars_not_bytes() {
        let traits = detect_traits("ñandú");
        assert_eq!(traits.length, 5);
        assert!(traits.has_lowercase);
        assert!(!traits.has_uppercase);
    }

    #[test]
    fn test_detect_traits_non_ascii_classes() {
        let traits = detect_traits("ÄÖÜ€");
        assert!(!traits.has_uppercase);
        assert!(!traits.has_lowercase);
        assert!(!traits.has_numbers);
        assert!(!traits.has_special_chars);
    }

    #[test]
    fn test_detect_traits_mixed() {
        let traits = detect_traits("Tr0ub4dor&9xyz");
        assert_eq!(traits.length, 14);
        assert!(traits.has_uppercase);
        assert!(traits.has_lowercase);
        assert!(traits.has_numbers);
        assert!(traits.has_special_chars);
        assert!(!traits.consecutive_chars);
        assert!(traits.sequential_chars);
    }
}
