// Policy rule data: keyword lists, risk patterns, category list, weights.
//
// Rules are plain data injected into the analyzers. The built-in ruleset
// can be replaced by a JSON rule file without touching analyzer logic.

pub mod builtin;
pub mod ruleset;

pub use ruleset::{RiskWeights, RuleFile, Ruleset};
