// Unit tests for the content analyzer.
//
// Keyword and pattern detection, title hygiene checks, category matching,
// and scoring against an injected ruleset.

use shieldseller::models::{ListingData, Severity};
use shieldseller::rules::{RuleFile, Ruleset};
use shieldseller::scoring::content::{analyze_content, CONTENT_CEILING};

fn listing(title: &str, description: &str) -> ListingData {
    ListingData {
        product_id: "content".to_string(),
        title: title.to_string(),
        description: description.to_string(),
        ..Default::default()
    }
}

fn kinds(listing: &ListingData) -> Vec<String> {
    analyze_content(listing, Ruleset::builtin())
        .violations
        .into_iter()
        .map(|v| v.kind)
        .collect()
}

// ============================================================
// Forbidden keywords
// ============================================================

#[test]
fn keyword_match_is_case_insensitive() {
    let result = analyze_content(
        &listing("Portable Bluetooth Speaker", "FDA APPROVED materials"),
        Ruleset::builtin(),
    );
    assert_eq!(result.score, 15);
    assert_eq!(result.violations[0].severity, Severity::Critical);
    assert_eq!(
        result.violations[0].title,
        "Forbidden keyword detected: \"fda approved\""
    );
}

#[test]
fn keyword_match_is_substring() {
    // "treat" inside "treatment"
    let result = analyze_content(
        &listing("Leather conditioner balm", "Leather treatment"),
        Ruleset::builtin(),
    );
    assert_eq!(result.score, 15);
    assert!(result.violations[0].title.contains("\"treat\""));
}

#[test]
fn each_distinct_keyword_counts() {
    let result = analyze_content(
        &listing("Replica vintage tobacco tin", "decorative only"),
        Ruleset::builtin(),
    );
    let keyword_titles: Vec<&str> = result
        .violations
        .iter()
        .filter(|v| v.kind == "keyword")
        .map(|v| v.title.as_str())
        .collect();
    // Built-in list order: tobacco before replica
    assert_eq!(
        keyword_titles,
        [
            "Forbidden keyword detected: \"tobacco\"",
            "Forbidden keyword detected: \"replica\"",
        ]
    );
    assert_eq!(result.score, 30);
}

#[test]
fn genuine_alone_is_not_a_keyword() {
    // Only the compound phrase "genuine brand name" is on the list.
    let k = kinds(&listing(
        "Genuine leather bifold wallet",
        "Full grain hide, six card slots",
    ));
    assert!(!k.contains(&"keyword".to_string()), "got {k:?}");
}

#[test]
fn genuine_brand_name_phrase_is_a_keyword() {
    let result = analyze_content(
        &listing(
            "Leather bifold wallet for men",
            "A genuine brand name wallet with six slots",
        ),
        Ruleset::builtin(),
    );
    let keyword_hits = result
        .violations
        .iter()
        .filter(|v| v.kind == "keyword")
        .count();
    assert_eq!(keyword_hits, 1);
}

// ============================================================
// Risk patterns
// ============================================================

#[test]
fn weight_loss_claim_is_a_pattern() {
    let result = analyze_content(
        &listing("Stainless steel jump rope", "Customers lose 10 lbs in a month"),
        Ruleset::builtin(),
    );
    assert_eq!(result.score, 10);
    assert_eq!(result.violations[0].kind, "pattern");
    assert_eq!(result.violations[0].severity, Severity::Warning);
    assert_eq!(result.violations[0].title, "Suspicious claim detected");
}

#[test]
fn several_patterns_fire_independently() {
    let k = kinds(&listing(
        "Passive income workbook set",
        "get rich with instant cash and see the before photo",
    ));
    let patterns = k.iter().filter(|k| *k == "pattern").count();
    assert_eq!(patterns, 3, "got {k:?}");
}

// ============================================================
// Title and punctuation checks
// ============================================================

#[test]
fn title_of_exactly_twenty_chars_is_fine() {
    let k = kinds(&listing("Twenty char title ok", "plain"));
    assert!(!k.contains(&"title_length".to_string()), "got {k:?}");
}

#[test]
fn title_over_one_hundred_chars_is_too_long() {
    let result = analyze_content(&listing(&"a".repeat(101), "plain"), Ruleset::builtin());
    assert_eq!(result.score, 5);
    assert_eq!(result.violations[0].title, "Title too long");
}

#[test]
fn shouting_title_is_flagged() {
    let result = analyze_content(&listing("SUPER SOFT COZY BLANKET", "plain"), Ruleset::builtin());
    assert_eq!(result.score, 8);
    assert_eq!(result.violations[0].kind, "caps");
}

#[test]
fn exactly_half_caps_is_fine() {
    // 10 uppercase of 20 characters
    let k = kinds(&listing("ABCDEFGHIJklmnopqrst", "plain"));
    assert!(!k.contains(&"caps".to_string()), "got {k:?}");
}

#[test]
fn exclamations_counted_across_title_and_description() {
    let three = kinds(&listing("Bright desk lamp! Wow!", "Great! "));
    assert!(!three.contains(&"punctuation".to_string()));

    let four = kinds(&listing("Bright desk lamp! Wow!", "Great! Buy!"));
    assert!(four.contains(&"punctuation".to_string()));
}

// ============================================================
// Category
// ============================================================

#[test]
fn suspicious_category_substring() {
    let mut l = listing("Daily multivitamin gummies", "Tasty gummies");
    l.category = Some("Health & Wellness".to_string());
    let result = analyze_content(&l, Ruleset::builtin());
    assert_eq!(result.score, 12);
    assert_eq!(result.violations[0].kind, "category");
}

#[test]
fn ordinary_category_is_fine() {
    let mut l = listing("Ceramic planter with saucer", "Glazed finish");
    l.category = Some("Home & Garden".to_string());
    assert_eq!(analyze_content(&l, Ruleset::builtin()).score, 0);
}

// ============================================================
// Ceiling and injected rules
// ============================================================

#[test]
fn ceiling_applies_to_sum_only() {
    let mut l = listing(
        "MIRACLE CURE!!!!",
        "guaranteed weapon drug vape alcohol, get rich",
    );
    l.category = Some("supplements".to_string());
    let result = analyze_content(&l, Ruleset::builtin());
    assert_eq!(result.score, CONTENT_CEILING);
    // Violations are never dropped by the ceiling
    assert!(result.violations.len() > 8);
}

#[test]
fn injected_ruleset_replaces_keywords() {
    let rules = Ruleset::from_rule_file(RuleFile {
        forbidden_keywords: Some(vec!["Plastic".to_string()]),
        ..Default::default()
    })
    .unwrap();

    let l = listing("Reusable plastic lunch box", "Miracle container");
    let result = analyze_content(&l, &rules);
    assert_eq!(result.score, 15);
    assert_eq!(
        result.violations[0].title,
        "Forbidden keyword detected: \"Plastic\""
    );
}
