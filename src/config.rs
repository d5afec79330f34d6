use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::rules::Ruleset;

/// Default directory for JSON scan exports.
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional JSON rule file overriding the built-in policy lists
    /// (SHIELDSELLER_RULES env var)
    pub rules_path: Option<PathBuf>,
    /// Where `scan --json` writes its export (SHIELDSELLER_OUTPUT_DIR env var)
    pub output_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Nothing is required: with no variables set the built-in ruleset is
    /// used and exports go to ./output.
    pub fn load() -> Result<Self> {
        let rules_path = env::var("SHIELDSELLER_RULES")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let output_dir = env::var("SHIELDSELLER_OUTPUT_DIR")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        Ok(Self {
            rules_path,
            output_dir,
        })
    }

    /// The ruleset to score with: the configured rule file, or the built-in one.
    pub fn ruleset(&self) -> Result<Ruleset> {
        match &self.rules_path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!(
                        "Rule file not found: {}\n\
                         Unset SHIELDSELLER_RULES to use the built-in rules, or run \
                         `shieldseller rules --export > rules.json` to start from them.",
                        path.display()
                    );
                }
                Ruleset::from_path(path)
            }
            None => Ok(Ruleset::builtin().clone()),
        }
    }

    /// Human-readable name of where the rules come from.
    pub fn ruleset_source(&self) -> String {
        match &self.rules_path {
            Some(path) => path.display().to_string(),
            None => "built-in".to_string(),
        }
    }
}
