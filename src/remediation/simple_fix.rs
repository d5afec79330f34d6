// Rule-based listing rewrite.
//
// A deterministic fallback rewrite: swaps the most common forbidden phrases
// for compliant ones, tames an all-caps title, and collapses runs of `!`
// and `?`. It does not guarantee a clean re-scan; callers should score the
// rewritten listing again.

use std::sync::LazyLock;

use regex_lite::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::models::ListingData;

/// Forbidden phrase -> compliant replacement, applied in this order.
pub const REPLACEMENTS: &[(&str, &str)] = &[
    ("miracle", "effective"),
    ("guaranteed", "designed to"),
    ("cure", "help with"),
    ("FDA approved", "quality"),
    ("instant", "quick"),
    ("100%", "highly"),
    ("risk-free", "quality"),
    ("treatment", "support"),
    ("clinically proven", "tested"),
    ("doctor", "professional"),
];

/// All-caps titles longer than this are rewritten in title case.
pub const CAPS_REWRITE_MIN_CHARS: usize = 10;

pub const PUNCTUATION_NOTE: &str = "Cleaned up punctuation";
pub const DEFAULT_NOTE: &str = "Applied standard compliance improvements";

struct Replacement {
    pattern: Regex,
    bad: &'static str,
    good: &'static str,
}

static COMPILED: LazyLock<Vec<Replacement>> = LazyLock::new(|| {
    REPLACEMENTS
        .iter()
        .map(|&(bad, good)| Replacement {
            pattern: RegexBuilder::new(&regex_lite::escape(bad))
                .case_insensitive(true)
                .build()
                .expect("escaped literal compiles"),
            bad,
            good,
        })
        .collect()
});

static REPEATED_BANGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!{2,}").expect("valid punctuation pattern"));
static REPEATED_QUESTIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\?{2,}").expect("valid punctuation pattern"));

/// Title and description text of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingText {
    pub title: String,
    pub description: String,
}

/// Result of a rule-based rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleFix {
    pub original: ListingText,
    pub fixed: ListingText,
    /// Human-readable notes, one per change made
    pub changes: Vec<String>,
}

impl SimpleFix {
    /// A copy of `listing` carrying the rewritten text.
    pub fn apply(&self, listing: &ListingData) -> ListingData {
        ListingData {
            title: self.fixed.title.clone(),
            description: self.fixed.description.clone(),
            ..listing.clone()
        }
    }
}

/// Rewrite a listing's title and description.
pub fn generate_simple_fix(title: &str, description: &str) -> SimpleFix {
    let mut fixed_title = title.to_string();
    let mut fixed_description = description.to_string();
    let mut changes = Vec::new();

    for replacement in COMPILED.iter() {
        if replacement.pattern.is_match(&fixed_title) {
            fixed_title = replacement
                .pattern
                .replace_all(&fixed_title, replacement.good)
                .into_owned();
            changes.push(format!(
                "Replaced \"{}\" with \"{}\" in title",
                replacement.bad, replacement.good
            ));
        }
        if replacement.pattern.is_match(&fixed_description) {
            fixed_description = replacement
                .pattern
                .replace_all(&fixed_description, replacement.good)
                .into_owned();
            changes.push(format!(
                "Replaced \"{}\" with \"{}\" in description",
                replacement.bad, replacement.good
            ));
        }
    }

    if fixed_title == fixed_title.to_uppercase()
        && fixed_title.chars().count() > CAPS_REWRITE_MIN_CHARS
    {
        fixed_title = title_case(&fixed_title);
        changes.push("Fixed excessive capitalization in title".to_string());
    }

    fixed_title = collapse_punctuation(&fixed_title);
    fixed_description = collapse_punctuation(&fixed_description);

    if changes.is_empty() {
        changes.push(DEFAULT_NOTE.to_string());
    } else {
        changes.push(PUNCTUATION_NOTE.to_string());
    }

    SimpleFix {
        original: ListingText {
            title: title.to_string(),
            description: description.to_string(),
        },
        fixed: ListingText {
            title: fixed_title,
            description: fixed_description,
        },
        changes,
    }
}

/// Lowercase everything, then capitalize each ASCII word character that
/// follows a non-word character (or starts the string).
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_word = false;
    for c in text.to_lowercase().chars() {
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word && !prev_is_word {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = is_word;
    }
    out
}

fn collapse_punctuation(text: &str) -> String {
    let text = REPEATED_BANGS.replace_all(text, "!");
    REPEATED_QUESTIONS.replace_all(&text, "?").into_owned()
}
