// ShieldSeller: policy risk scoring for TikTok Shop listings
//
// This is the library root. `scoring` is the engine: a pure function from
// `ListingData` to `RiskAnalysis`. The other modules feed it (rules,
// pipeline, config) or present its results (remediation, output).

pub mod config;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod remediation;
pub mod rules;
pub mod scoring;

pub use models::{ListingData, RiskAnalysis, RiskFactors, RiskLevel, Severity, Violation};
pub use rules::Ruleset;
pub use scoring::risk::{analyze_listing_risk, analyze_listing_risk_with};
pub use scoring::shop::calculate_shop_risk;
