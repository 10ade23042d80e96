use std::fmt::{self, Write};

use colored::Colorize;

use crate::types::{PasswordAnalysis, StrengthColor};

fn rgb(color: StrengthColor) -> (u8, u8, u8) {
    match color {
        StrengthColor::Red => (0xef, 0x44, 0x44),
        StrengthColor::Orange => (0xf9, 0x73, 0x16),
        StrengthColor::Blue => (0x3b, 0x82, 0xf6),
        StrengthColor::Green => (0x22, 0xc5, 0x5e),
    }
}

fn paint(text: &str, color: StrengthColor, colorize: bool) -> String {
    if !colorize {
        return text.to_string();
    }
    let (r, g, b) = rgb(color);
    text.truecolor(r, g, b).bold().to_string()
}

/// Writes a human-readable report for one analysis into `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    analysis: &PasswordAnalysis,
    colorize: bool,
) -> fmt::Result {
    let color = analysis.color();

    writeln!(out, "=== REPORT ===")?;
    writeln!(
        out,
        "Strength Score: {}",
        paint(&analysis.score().to_string(), color, colorize)
    )?;
    writeln!(
        out,
        "Strength Level: {}",
        paint(analysis.strength().label(), color, colorize)
    )?;
    writeln!(out, "Length: {}", analysis.length())?;

    writeln!(out, "\nSecurity checks:")?;
    let checks = [
        ("Length >= 12", analysis.length() >= 12),
        ("Uppercase", analysis.has_uppercase()),
        ("Lowercase", analysis.has_lowercase()),
        ("Numbers", analysis.has_numbers()),
        ("Special chars", analysis.has_special_chars()),
        (
            "No patterns",
            !analysis.consecutive_chars() && !analysis.sequential_chars(),
        ),
    ];
    for (label, passed) in checks {
        let mark = if passed { "[x]" } else { "[ ]" };
        writeln!(out, "  {} {}", mark, label)?;
    }

    if !analysis.suggestions().is_empty() {
        writeln!(out, "\nSuggestions:")?;
        for suggestion in analysis.suggestions() {
            writeln!(out, "  - {}", suggestion)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::analyze;

    fn render(password: &str) -> String {
        let mut report = String::new();
        write_report(&mut report, &analyze(password), false).expect("writing to a String");
        report
    }

    #[test]
    fn test_report_lists_score_and_suggestions() {
        let report = render("Tr0ub4dor&9xyz");

        assert!(report.contains("Strength Score: 8/9"));
        assert!(report.contains("Strength Level: Excellent"));
        assert!(report.contains("Length: 14"));
        assert!(report.contains("[x] Special chars"));
        assert!(report.contains("[ ] No patterns"));
        assert!(report.contains("  - Avoid sequential characters."));
    }

    #[test]
    fn test_report_without_suggestions() {
        let report = render("Tr0ub4dor&9Qwe!k");

        assert!(report.contains("Strength Score: 9/9"));
        assert!(!report.contains("Suggestions:"));
    }

    #[test]
    fn test_rgb_matches_palette() {
        assert_eq!(rgb(StrengthColor::Green), (34, 197, 94));
        assert_eq!(rgb(StrengthColor::Red), (239, 68, 68));
    }
}
