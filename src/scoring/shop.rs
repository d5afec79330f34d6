// Shop-level rollups over already-computed listing analyses.
//
// Two views of the same data: a plain mean of listing scores, and a
// tier-weighted mean where critical listings count 3x and high listings 2x
// so a few dangerous listings are not diluted by a large clean catalog.

use serde::{Deserialize, Serialize};

use crate::models::{RiskAnalysis, RiskLevel};

/// Tier-weighted shop risk score. An empty shop scores 0.
pub fn calculate_shop_risk(analyses: &[RiskAnalysis]) -> u8 {
    if analyses.is_empty() {
        return 0;
    }

    let (weighted_sum, total_weight) =
        analyses
            .iter()
            .fold((0u64, 0u64), |(sum, total), analysis| {
                let weight = u64::from(analysis.risk_level.shop_weight());
                (
                    sum + u64::from(analysis.risk_score) * weight,
                    total + weight,
                )
            });

    (weighted_sum as f64 / total_weight as f64).round() as u8
}

/// Arithmetic mean of listing risk scores. An empty shop scores 0.0.
pub fn average_risk_score(analyses: &[RiskAnalysis]) -> f64 {
    if analyses.is_empty() {
        return 0.0;
    }
    let total: f64 = analyses.iter().map(|a| f64::from(a.risk_score)).sum();
    total / analyses.len() as f64
}

/// Per-shop numbers reported after a batch scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopSummary {
    pub listings: usize,
    pub violations: usize,
    /// Listings in the high or critical tier
    pub high_risk: usize,
    /// Listings carrying at least one critical violation (alert candidates)
    pub critical_alerts: usize,
    pub average_score: f64,
    pub weighted_score: u8,
}

impl ShopSummary {
    pub fn from_analyses(analyses: &[RiskAnalysis]) -> Self {
        Self {
            listings: analyses.len(),
            violations: analyses.iter().map(|a| a.violations.len()).sum(),
            high_risk: analyses
                .iter()
                .filter(|a| a.risk_level >= RiskLevel::High)
                .count(),
            critical_alerts: analyses.iter().filter(|a| a.has_critical()).count(),
            average_score: average_risk_score(analyses),
            weighted_score: calculate_shop_risk(analyses),
        }
    }
}
