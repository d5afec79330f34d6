// Listing risk scoring.
//
// Three independent analyzers (content, performance, compliance) each produce
// a capped partial score plus violations. `risk` combines them into the final
// weighted score and tier; `shop` rolls many analyses up into one shop score.

pub mod compliance;
pub mod content;
pub mod performance;
pub mod risk;
pub mod shop;

use crate::models::Violation;

/// The capped output of a single analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialScore {
    pub score: u8,
    pub violations: Vec<Violation>,
}

impl PartialScore {
    /// Cap an accumulated score at the analyzer's ceiling.
    fn capped(raw: u32, ceiling: u8, violations: Vec<Violation>) -> Self {
        Self {
            score: raw.min(u32::from(ceiling)) as u8,
            violations,
        }
    }
}

/// Format a value with one decimal place the way the dashboard does.
///
/// `{:.1}` expands the binary value exactly, so 3.15 (stored just below the
/// tie) prints "3.1". Only exact binary ties like 3.25 need care: `{:.1}`
/// rounds those to even, the dashboard rounds them away from zero.
pub fn format_one_decimal(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0.0".to_string();
    }
    // A tie at one decimal is k + 0.05 * odd, i.e. an odd number of quarters.
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        let rounded = (value * 10.0).round() / 10.0;
        return format!("{rounded:.1}");
    }
    format!("{value:.1}")
}

/// Format a 0-1 fraction as a percentage with one decimal place.
pub fn format_percent(fraction: f64) -> String {
    format_one_decimal(fraction * 100.0)
}
