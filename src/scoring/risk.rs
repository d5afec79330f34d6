// Combined listing risk score.
//
// The three capped sub-scores are weighted (content 1.2, performance 1.0,
// compliance 0.8 by default), summed, capped at 100 and rounded. The tier
// is read off the rounded score, never the sub-scores.
//
// This is a pure function of the listing and the ruleset: no clock, no
// randomness, no shared state. Re-scanning unchanged data gives an
// identical result.

use tracing::debug;

use crate::models::{ListingData, RiskAnalysis, RiskFactors, RiskLevel};
use crate::rules::{RiskWeights, Ruleset};

use super::compliance::analyze_compliance;
use super::content::analyze_content;
use super::performance::analyze_performance;

/// Upper bound of the final risk score.
pub const MAX_RISK_SCORE: f64 = 100.0;

/// Score a listing against the built-in ruleset.
pub fn analyze_listing_risk(listing: &ListingData) -> RiskAnalysis {
    analyze_listing_risk_with(listing, Ruleset::builtin())
}

/// Score a listing against a specific ruleset.
pub fn analyze_listing_risk_with(listing: &ListingData, rules: &Ruleset) -> RiskAnalysis {
    let content = analyze_content(listing, rules);
    let performance = analyze_performance(listing);
    let compliance = analyze_compliance(listing);

    let factors = RiskFactors {
        content_risk: content.score,
        performance_risk: performance.score,
        compliance_risk: compliance.score,
    };
    let risk_score = compute_risk_score(&factors, rules.weights());
    let risk_level = RiskLevel::from_score(risk_score);

    let mut violations = content.violations;
    violations.extend(performance.violations);
    violations.extend(compliance.violations);

    debug!(
        product_id = listing.product_id.as_str(),
        score = risk_score,
        level = risk_level.as_str(),
        violations = violations.len(),
        "Scored listing"
    );

    RiskAnalysis {
        risk_score,
        risk_level,
        violations,
        factors,
    }
}

/// Weight, cap and round the sub-scores into the final 0-100 risk score.
pub fn compute_risk_score(factors: &RiskFactors, weights: &RiskWeights) -> u8 {
    let raw = f64::from(factors.content_risk) * weights.content
        + f64::from(factors.performance_risk) * weights.performance
        + f64::from(factors.compliance_risk) * weights.compliance;

    raw.clamp(0.0, MAX_RISK_SCORE).round() as u8
}
