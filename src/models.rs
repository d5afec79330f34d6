// Data models — the value objects that flow through the risk engine.
//
// A `ListingData` goes in, a `RiskAnalysis` comes out. Field names serialize
// in camelCase so listing exports from the dashboard deserialize directly.

use serde::{Deserialize, Serialize};

/// One product listing to be scored.
///
/// Every optional field means "do not evaluate this factor" when absent.
/// Absence is never treated as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingData {
    pub product_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Price in dollars
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orders: Option<u64>,
    /// Fraction of orders returned (0.0-1.0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_rate: Option<f64>,
    /// Average rating on a 0-5 scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_days: Option<u32>,
    /// Fraction of shipments that went out late (0.0-1.0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub late_shipment_rate: Option<f64>,
}

/// How urgent a violation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One detected issue with a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Stable category tag (`keyword`, `return_rate`, `missing_image`, ...)
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Violation {
    pub fn new(
        kind: &str,
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.to_string(),
            severity,
            title: title.into(),
            description: description.into(),
            suggestion: Some(suggestion.into()),
        }
    }
}

/// Risk tier derived from the final risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Safe,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Determine the tier from a final (weighted, rounded) risk score.
    ///
    /// Lower bounds are inclusive: 30 is Low, 50 Medium, 70 High, 85 Critical.
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s < 30 => RiskLevel::Safe,
            s if s < 50 => RiskLevel::Low,
            s if s < 70 => RiskLevel::Medium,
            s if s < 85 => RiskLevel::High,
            _ => RiskLevel::Critical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    /// Shop rollup weight: critical listings count 3x, high 2x, others 1x.
    pub fn shop_weight(&self) -> u32 {
        match self {
            RiskLevel::Critical => 3,
            RiskLevel::High => 2,
            _ => 1,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The capped sub-scores before weighting. They do not sum to the risk score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactors {
    pub content_risk: u8,
    pub performance_risk: u8,
    pub compliance_risk: u8,
}

/// Complete result of scoring one listing.
///
/// Callers treat each analysis as fully replacing any prior result for the
/// same listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysis {
    /// 0-100, rounded
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    /// Content, then performance, then compliance, each in detection order
    pub violations: Vec<Violation>,
    pub factors: RiskFactors,
}

impl RiskAnalysis {
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .count()
    }

    pub fn has_critical(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == Severity::Critical)
    }
}
