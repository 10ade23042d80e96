//! Value types produced by the analyzer.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// Numeric strength score, always within `0..=PasswordScore::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct PasswordScore(u8);

impl PasswordScore {
    /// Highest attainable score.
    pub const MAX: u8 = 9;

    /// Builds a score, clamping anything above [`PasswordScore::MAX`].
    pub fn new(points: u8) -> Self {
        Self(points.min(Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Presentation hint attached to each strength level.
///
/// Only the token is fixed here; the concrete RGB value belongs to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthColor {
    Red,
    Orange,
    Blue,
    Green,
}

impl StrengthColor {
    pub fn as_str(self) -> &'static str {
        match self {
            StrengthColor::Red => "red",
            StrengthColor::Orange => "orange",
            StrengthColor::Blue => "blue",
            StrengthColor::Green => "green",
        }
    }
}

impl fmt::Display for StrengthColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl Serialize for StrengthColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Qualitative strength label derived from a [`PasswordScore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    Weak,
    Moderate,
    Strong,
    Excellent,
}

impl PasswordStrength {
    /// Maps a score to its label: 0-2 weak, 3-4 moderate, 5-6 strong, 7-9 excellent.
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            0..=2 => PasswordStrength::Weak,
            3..=4 => PasswordStrength::Moderate,
            5..=6 => PasswordStrength::Strong,
            _ => PasswordStrength::Excellent,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Moderate => "Moderate",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::Excellent => "Excellent",
        }
    }

    pub fn color(self) -> StrengthColor {
        match self {
            PasswordStrength::Weak => StrengthColor::Red,
            PasswordStrength::Moderate => StrengthColor::Orange,
            PasswordStrength::Strong => StrengthColor::Blue,
            PasswordStrength::Excellent => StrengthColor::Green,
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(feature = "serde")]
impl Serialize for PasswordStrength {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// An actionable improvement, listed in the order the analyzer emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suggestion {
    UseMoreCharacters,
    AddUppercase,
    AddLowercase,
    AddNumbers,
    AddSpecialChars,
    AvoidRepeating,
    AvoidSequential,
}

impl Suggestion {
    pub fn message(self) -> &'static str {
        match self {
            Suggestion::UseMoreCharacters => "Use at least 12 characters.",
            Suggestion::AddUppercase => "Add uppercase letters.",
            Suggestion::AddLowercase => "Add lowercase letters.",
            Suggestion::AddNumbers => "Add numbers.",
            Suggestion::AddSpecialChars => "Add special characters.",
            Suggestion::AvoidRepeating => "Avoid repeating characters.",
            Suggestion::AvoidSequential => "Avoid sequential characters.",
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(feature = "serde")]
impl Serialize for Suggestion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Raw facts detected in a password, before any points are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "camelCase"))]
pub struct PasswordTraits {
    pub length: usize,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_numbers: bool,
    pub has_special_chars: bool,
    pub consecutive_chars: bool,
    pub sequential_chars: bool,
}

/// Result of a single analysis.
///
/// Built only by the evaluator, so score, strength and suggestions always
/// agree with the detected traits.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "camelCase"))]
pub struct PasswordAnalysis {
    #[cfg_attr(feature = "serde", serde(flatten))]
    traits: PasswordTraits,
    score: PasswordScore,
    strength: PasswordStrength,
    suggestions: Vec<Suggestion>,
}

impl PasswordAnalysis {
    pub(crate) fn new(traits: PasswordTraits, points: u8, suggestions: Vec<Suggestion>) -> Self {
        let score = PasswordScore::new(points);
        Self {
            traits,
            score,
            strength: PasswordStrength::from_score(score),
            suggestions,
        }
    }

    pub fn traits(&self) -> &PasswordTraits {
        &self.traits
    }

    /// Number of characters (Unicode scalar values) in the input.
    pub fn length(&self) -> usize {
        self.traits.length
    }

    pub fn has_uppercase(&self) -> bool {
        self.traits.has_uppercase
    }

    pub fn has_lowercase(&self) -> bool {
        self.traits.has_lowercase
    }

    pub fn has_numbers(&self) -> bool {
        self.traits.has_numbers
    }

    pub fn has_special_chars(&self) -> bool {
        self.traits.has_special_chars
    }

    pub fn consecutive_chars(&self) -> bool {
        self.traits.consecutive_chars
    }

    pub fn sequential_chars(&self) -> bool {
        self.traits.sequential_chars
    }

    pub fn score(&self) -> PasswordScore {
        self.score
    }

    pub fn strength(&self) -> PasswordStrength {
        self.strength
    }

    pub fn color(&self) -> StrengthColor {
        self.strength.color()
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Suggestion texts in emission order.
    pub fn suggestion_messages(&self) -> Vec<&'static str> {
        self.suggestions.iter().map(|s| s.message()).collect()
    }
}
