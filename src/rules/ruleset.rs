// Ruleset: the injectable policy the analyzers score against.
//
// The built-in ruleset is compiled once per process. A rule file may
// override any subset of the lists or the weights; anything it leaves out
// keeps the built-in value.

use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex_lite::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::builtin::{FORBIDDEN_KEYWORDS, RISK_PATTERNS, SUSPICIOUS_CATEGORIES};

/// Weights applied to the three capped sub-scores.
///
/// `raw = content * content_weight + performance * performance_weight
///        + compliance * compliance_weight`, then capped at 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskWeights {
    /// Content is the strongest signal (default 1.2)
    pub content: f64,
    /// Seller performance (default 1.0)
    pub performance: f64,
    /// Listing completeness baseline (default 0.8)
    pub compliance: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            content: 1.2,
            performance: 1.0,
            compliance: 0.8,
        }
    }
}

impl RiskWeights {
    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("content", self.content),
            ("performance", self.performance),
            ("compliance", self.compliance),
        ] {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("Weight `{name}` must be a finite, non-negative number (got {value})");
            }
        }
        Ok(())
    }
}

/// On-disk rule file. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forbidden_keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_patterns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspicious_categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<RiskWeights>,
}

/// Compiled, immutable policy data.
#[derive(Debug, Clone)]
pub struct Ruleset {
    forbidden_keywords: Vec<String>,
    risk_patterns: Vec<Regex>,
    suspicious_categories: Vec<String>,
    weights: RiskWeights,
}

static BUILTIN: LazyLock<Ruleset> = LazyLock::new(|| {
    Ruleset::new(
        FORBIDDEN_KEYWORDS.iter().map(|s| s.to_string()).collect(),
        RISK_PATTERNS.iter().map(|s| s.to_string()).collect(),
        SUSPICIOUS_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        RiskWeights::default(),
    )
    .expect("built-in risk patterns compile")
});

impl Default for Ruleset {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl Ruleset {
    /// Build a ruleset, compiling every pattern case-insensitively.
    pub fn new(
        forbidden_keywords: Vec<String>,
        risk_patterns: Vec<String>,
        suspicious_categories: Vec<String>,
        weights: RiskWeights,
    ) -> Result<Self> {
        weights.validate()?;
        reject_blank("forbidden keyword", &forbidden_keywords)?;
        reject_blank("suspicious category", &suspicious_categories)?;

        let risk_patterns = risk_patterns
            .iter()
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .with_context(|| format!("Invalid risk pattern: {pattern}"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            forbidden_keywords,
            risk_patterns,
            suspicious_categories,
            weights,
        })
    }

    /// The shared built-in ruleset.
    pub fn builtin() -> &'static Ruleset {
        &BUILTIN
    }

    /// Overlay a rule file on the built-in ruleset.
    pub fn from_rule_file(file: RuleFile) -> Result<Self> {
        let builtin = Self::builtin();
        let patterns = match file.risk_patterns {
            Some(patterns) => patterns,
            None => builtin.pattern_sources(),
        };
        Self::new(
            file.forbidden_keywords
                .unwrap_or_else(|| builtin.forbidden_keywords.clone()),
            patterns,
            file.suspicious_categories
                .unwrap_or_else(|| builtin.suspicious_categories.clone()),
            file.weights.unwrap_or(builtin.weights),
        )
    }

    /// Load a JSON rule file from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rule file {}", path.display()))?;
        let file: RuleFile = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse rule file {}", path.display()))?;
        let rules = Self::from_rule_file(file)
            .with_context(|| format!("Invalid rule file {}", path.display()))?;

        info!(
            path = %path.display(),
            keywords = rules.forbidden_keywords.len(),
            patterns = rules.risk_patterns.len(),
            categories = rules.suspicious_categories.len(),
            "Loaded rule file"
        );
        Ok(rules)
    }

    /// Export the full ruleset in rule-file form.
    pub fn to_rule_file(&self) -> RuleFile {
        RuleFile {
            forbidden_keywords: Some(self.forbidden_keywords.clone()),
            risk_patterns: Some(self.pattern_sources()),
            suspicious_categories: Some(self.suspicious_categories.clone()),
            weights: Some(self.weights),
        }
    }

    pub fn forbidden_keywords(&self) -> &[String] {
        &self.forbidden_keywords
    }

    pub fn risk_patterns(&self) -> &[Regex] {
        &self.risk_patterns
    }

    pub fn suspicious_categories(&self) -> &[String] {
        &self.suspicious_categories
    }

    pub fn weights(&self) -> &RiskWeights {
        &self.weights
    }

    fn pattern_sources(&self) -> Vec<String> {
        self.risk_patterns
            .iter()
            .map(|r| r.as_str().to_string())
            .collect()
    }
}

/// Keywords and categories are substring matches; a blank one matches everything.
fn reject_blank(kind: &str, entries: &[String]) -> Result<()> {
    if let Some(index) = entries.iter().position(|e| e.trim().is_empty()) {
        anyhow::bail!("Blank {kind} at index {index}");
    }
    Ok(())
}
