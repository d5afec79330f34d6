// Content analyzer: forbidden keywords, claim patterns, and title hygiene.
//
// Works on title + description joined with a space. Keyword and pattern
// checks are case-insensitive; the punctuation count uses the text as
// written. Each check fires at most once per listing.

use crate::models::{ListingData, Severity, Violation};
use crate::rules::Ruleset;

use super::PartialScore;

/// Ceiling for the summed content score.
pub const CONTENT_CEILING: u8 = 60;

pub const KEYWORD_POINTS: u32 = 15;
pub const PATTERN_POINTS: u32 = 10;
pub const TITLE_LENGTH_POINTS: u32 = 5;
pub const CAPS_POINTS: u32 = 8;
pub const PUNCTUATION_POINTS: u32 = 5;
pub const CATEGORY_POINTS: u32 = 12;

/// Titles shorter than this (in characters) look spammy.
pub const TITLE_MIN_CHARS: usize = 20;
/// Titles longer than this get truncated.
pub const TITLE_MAX_CHARS: usize = 100;
/// Fraction of uppercase letters in the title above which it reads as shouting.
pub const CAPS_RATIO_MAX: f64 = 0.5;
/// More than this many `!` in title + description is flagged.
pub const EXCLAMATION_MAX: usize = 3;

/// Score a listing's text content.
pub fn analyze_content(listing: &ListingData, rules: &Ruleset) -> PartialScore {
    let mut violations = Vec::new();
    let mut score = 0u32;

    let full_text = format!("{} {}", listing.title, listing.description);
    let lowered = full_text.to_lowercase();

    for keyword in rules.forbidden_keywords() {
        if lowered.contains(&keyword.to_lowercase()) {
            score += KEYWORD_POINTS;
            violations.push(Violation::new(
                "keyword",
                Severity::Critical,
                format!("Forbidden keyword detected: \"{keyword}\""),
                format!(
                    "Your listing contains \"{keyword}\" which violates TikTok Shop policies. \
                     This can lead to immediate suspension."
                ),
                format!(
                    "Remove \"{keyword}\" and rephrase using compliant language. \
                     Avoid making absolute claims."
                ),
            ));
        }
    }

    // regex-lite's `\s` is ASCII-only; fold NBSP and other Unicode spaces.
    let spaced: String = lowered
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();

    for pattern in rules.risk_patterns() {
        if pattern.is_match(&spaced) {
            score += PATTERN_POINTS;
            violations.push(Violation::new(
                "pattern",
                Severity::Warning,
                "Suspicious claim detected",
                "Your listing contains language that may be flagged as misleading or making \
                 unverified claims.",
                "Rewrite this section using factual, measurable descriptions without guarantees.",
            ));
        }
    }

    let title_chars = listing.title.chars().count();

    if title_chars < TITLE_MIN_CHARS {
        score += TITLE_LENGTH_POINTS;
        violations.push(Violation::new(
            "title_length",
            Severity::Info,
            "Title too short",
            "Titles under 20 characters may perform poorly and look spammy.",
            "Expand your title to 20-60 characters with descriptive keywords.",
        ));
    }

    if title_chars > TITLE_MAX_CHARS {
        score += TITLE_LENGTH_POINTS;
        violations.push(Violation::new(
            "title_length",
            Severity::Info,
            "Title too long",
            "Very long titles may be truncated and look unprofessional.",
            "Shorten your title to 60-80 characters focusing on key features.",
        ));
    }

    if caps_ratio(&listing.title) > CAPS_RATIO_MAX {
        score += CAPS_POINTS;
        violations.push(Violation::new(
            "caps",
            Severity::Warning,
            "Excessive capitalization",
            "Too many capital letters can be flagged as spammy or shouting.",
            "Use normal sentence case with capitals only for proper nouns.",
        ));
    }

    let exclamations = full_text.chars().filter(|&c| c == '!').count();
    if exclamations > EXCLAMATION_MAX {
        score += PUNCTUATION_POINTS;
        violations.push(Violation::new(
            "punctuation",
            Severity::Info,
            "Too many exclamation marks",
            "Excessive exclamation marks look unprofessional and may trigger spam filters.",
            "Limit exclamation marks to 1-2 per listing.",
        ));
    }

    if let Some(category) = &listing.category {
        if is_suspicious_category(category, rules) {
            score += CATEGORY_POINTS;
            violations.push(Violation::new(
                "category",
                Severity::Warning,
                "High-risk category detected",
                "This product category is heavily regulated and frequently flagged for violations.",
                "Ensure all claims are factual, avoid health/medical language, and include \
                 required warnings.",
            ));
        }
    }

    PartialScore::capped(score, CONTENT_CEILING, violations)
}

/// Fraction of the title's characters that are ASCII uppercase letters.
/// An empty title has ratio 0.0.
pub fn caps_ratio(title: &str) -> f64 {
    let total = title.chars().count();
    if total == 0 {
        return 0.0;
    }
    let upper = title.chars().filter(|c| c.is_ascii_uppercase()).count();
    upper as f64 / total as f64
}

fn is_suspicious_category(category: &str, rules: &Ruleset) -> bool {
    let category = category.to_lowercase();
    rules
        .suspicious_categories()
        .iter()
        .any(|suspicious| category.contains(&suspicious.to_lowercase()))
}
