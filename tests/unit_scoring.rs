// Unit tests for scoring functions.
//
// Tests isolated pure functions: RiskLevel::from_score boundary conditions,
// strict thresholds in the performance and compliance analyzers, weighting
// and clamping, and the shop rollups.

use shieldseller::models::{ListingData, RiskAnalysis, RiskFactors, RiskLevel, Severity};
use shieldseller::rules::RiskWeights;
use shieldseller::scoring::compliance::analyze_compliance;
use shieldseller::scoring::performance::analyze_performance;
use shieldseller::scoring::risk::compute_risk_score;
use shieldseller::scoring::shop::{average_risk_score, calculate_shop_risk, ShopSummary};

// ============================================================
// RiskLevel::from_score — boundary conditions
// ============================================================

#[test]
fn level_zero_is_safe() {
    assert_eq!(RiskLevel::from_score(0), RiskLevel::Safe);
}

#[test]
fn level_boundaries_are_inclusive_lower() {
    let cases = [
        (29, RiskLevel::Safe),
        (30, RiskLevel::Low),
        (49, RiskLevel::Low),
        (50, RiskLevel::Medium),
        (69, RiskLevel::Medium),
        (70, RiskLevel::High),
        (84, RiskLevel::High),
        (85, RiskLevel::Critical),
        (100, RiskLevel::Critical),
    ];
    for (score, expected) in cases {
        assert_eq!(
            RiskLevel::from_score(score),
            expected,
            "Score {score} should map to {expected}"
        );
    }
}

#[test]
fn level_display_matches_as_str() {
    for level in [
        RiskLevel::Safe,
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ] {
        assert_eq!(level.to_string(), level.as_str());
    }
}

#[test]
fn level_serializes_lowercase() {
    let json = serde_json::to_string(&RiskLevel::Medium).unwrap();
    assert_eq!(json, "\"medium\"");
}

// ============================================================
// Performance analyzer — strict thresholds
// ============================================================

fn metrics() -> ListingData {
    ListingData {
        product_id: "perf".to_string(),
        ..Default::default()
    }
}

#[test]
fn return_rate_at_critical_threshold_is_only_a_warning() {
    let listing = ListingData {
        return_rate: Some(0.15),
        ..metrics()
    };
    let result = analyze_performance(&listing);
    assert_eq!(result.score, 10);
    assert_eq!(result.violations[0].severity, Severity::Warning);
    assert_eq!(result.violations[0].title, "Elevated return rate: 15.0%");
}

#[test]
fn return_rate_at_warning_threshold_is_clean() {
    let listing = ListingData {
        return_rate: Some(0.08),
        ..metrics()
    };
    assert!(analyze_performance(&listing).violations.is_empty());
}

#[test]
fn return_rate_zero_is_clean() {
    let listing = ListingData {
        return_rate: Some(0.0),
        ..metrics()
    };
    assert_eq!(analyze_performance(&listing).score, 0);
}

#[test]
fn rating_bands() {
    let cases = [(3.4, 25, Severity::Critical), (3.5, 12, Severity::Warning)];
    for (rating, points, severity) in cases {
        let listing = ListingData {
            rating: Some(rating),
            review_count: Some(11),
            ..metrics()
        };
        let result = analyze_performance(&listing);
        assert_eq!(result.score, points, "rating {rating}");
        assert_eq!(result.violations[0].severity, severity, "rating {rating}");
    }
}

#[test]
fn rating_at_four_is_clean() {
    let listing = ListingData {
        rating: Some(4.0),
        review_count: Some(500),
        ..metrics()
    };
    assert!(analyze_performance(&listing).violations.is_empty());
}

#[test]
fn zero_rating_with_reviews_is_critical() {
    let listing = ListingData {
        rating: Some(0.0),
        review_count: Some(50),
        ..metrics()
    };
    let result = analyze_performance(&listing);
    assert_eq!(result.score, 25);
    assert_eq!(result.violations[0].title, "Low rating: 0.0/5.0");
}

#[test]
fn late_shipment_threshold_is_strict() {
    let at = ListingData {
        late_shipment_rate: Some(0.10),
        ..metrics()
    };
    assert_eq!(analyze_performance(&at).score, 0);

    let above = ListingData {
        late_shipment_rate: Some(0.12),
        ..metrics()
    };
    let result = analyze_performance(&above);
    assert_eq!(result.score, 15);
    assert_eq!(result.violations[0].kind, "shipping");
    assert_eq!(result.violations[0].title, "High late shipment rate: 12.0%");
}

#[test]
fn shipping_days_threshold_is_strict() {
    let week = ListingData {
        shipping_days: Some(7),
        ..metrics()
    };
    assert_eq!(analyze_performance(&week).score, 0);

    let slow = ListingData {
        shipping_days: Some(8),
        ..metrics()
    };
    let result = analyze_performance(&slow);
    assert_eq!(result.score, 8);
    assert_eq!(result.violations[0].title, "Slow shipping: 8 days");
}

#[test]
fn performance_violation_order_is_detection_order() {
    let listing = ListingData {
        return_rate: Some(0.1),
        rating: Some(3.8),
        review_count: Some(30),
        late_shipment_rate: Some(0.2),
        shipping_days: Some(9),
        ..metrics()
    };
    let kinds: Vec<String> = analyze_performance(&listing)
        .violations
        .into_iter()
        .map(|v| v.kind)
        .collect();
    assert_eq!(kinds, ["return_rate", "rating", "shipping", "shipping_time"]);
}

// ============================================================
// Compliance analyzer
// ============================================================

#[test]
fn description_length_counts_characters() {
    // 49 two-byte characters: under 50 chars even though over 50 bytes
    let listing = ListingData {
        description: "é".repeat(49),
        image_url: Some("https://cdn.example/x.jpg".to_string()),
        ..metrics()
    };
    let result = analyze_compliance(&listing);
    assert_eq!(result.score, 10);
    assert_eq!(result.violations[0].kind, "missing_info");
}

#[test]
fn very_high_price_is_a_warning() {
    let listing = ListingData {
        description: "d".repeat(50),
        price: Some(12_500.0),
        image_url: Some("https://cdn.example/x.jpg".to_string()),
        ..metrics()
    };
    let result = analyze_compliance(&listing);
    assert_eq!(result.score, 8);
    assert_eq!(result.violations[0].title, "Very high price");
    assert_eq!(result.violations[0].severity, Severity::Warning);
}

// ============================================================
// compute_risk_score — weighting and clamping
// ============================================================

fn factors(content: u8, performance: u8, compliance: u8) -> RiskFactors {
    RiskFactors {
        content_risk: content,
        performance_risk: performance,
        compliance_risk: compliance,
    }
}

#[test]
fn weighted_sum_rounds_half_up() {
    // 5 * 1.2 + 0 + 10 * 0.8 = 6 + 8 = 14
    assert_eq!(compute_risk_score(&factors(5, 0, 10), &RiskWeights::default()), 14);
    // 15 * 1.2 + 22 * 0.8 = 18 + 17.6 = 35.6 -> 36
    assert_eq!(compute_risk_score(&factors(15, 0, 22), &RiskWeights::default()), 36);
}

#[test]
fn performance_ceiling_alone_is_forty() {
    assert_eq!(compute_risk_score(&factors(0, 40, 0), &RiskWeights::default()), 40);
}

#[test]
fn heavy_weights_clamp_at_100() {
    let weights = RiskWeights {
        content: 10.0,
        performance: 10.0,
        compliance: 10.0,
    };
    assert_eq!(compute_risk_score(&factors(60, 40, 30), &weights), 100);
}

// ============================================================
// Shop rollups
// ============================================================

fn analysis(score: u8) -> RiskAnalysis {
    RiskAnalysis {
        risk_score: score,
        risk_level: RiskLevel::from_score(score),
        violations: vec![],
        factors: RiskFactors::default(),
    }
}

#[test]
fn shop_risk_all_safe_is_plain_mean() {
    let shop = [analysis(10), analysis(20), analysis(27)];
    // (10 + 20 + 27) / 3 = 19
    assert_eq!(calculate_shop_risk(&shop), 19);
    assert!((average_risk_score(&shop) - 19.0).abs() < 1e-9);
}

#[test]
fn shop_risk_mixed_tiers() {
    // weights: 1 (safe), 2 (high 72), 3 (critical 90)
    // (0 + 144 + 270) / 6 = 69
    let shop = [analysis(0), analysis(72), analysis(90)];
    assert_eq!(calculate_shop_risk(&shop), 69);
}

#[test]
fn shop_risk_single_listing_is_its_score() {
    assert_eq!(calculate_shop_risk(&[analysis(88)]), 88);
}

#[test]
fn summary_of_empty_shop() {
    let summary = ShopSummary::from_analyses(&[]);
    assert_eq!(summary.listings, 0);
    assert_eq!(summary.weighted_score, 0);
    assert_eq!(summary.average_score, 0.0);
}
