// Plain-text fix plan, grouped by severity.

use std::fmt::Write;

use crate::models::{RiskAnalysis, Severity, Violation};

pub const NO_FIXES_MESSAGE: &str = "Your listing looks great! No immediate fixes needed.";

/// Severity groups in the order they are presented.
const GROUPS: &[(Severity, &str)] = &[
    (Severity::Critical, "🚨 CRITICAL (Fix Immediately):"),
    (Severity::Warning, "⚠️  WARNINGS (Fix Soon):"),
    (Severity::Info, "ℹ️  IMPROVEMENTS (Optimize):"),
];

/// Build the fix plan for an analysis.
///
/// Critical issues come first, then warnings, then improvements. Numbering
/// restarts in each group; empty groups are omitted.
pub fn generate_fix_suggestions(analysis: &RiskAnalysis) -> String {
    if analysis.violations.is_empty() {
        return NO_FIXES_MESSAGE.to_string();
    }

    let mut plan = String::from("📋 Recommended Fixes:\n\n");

    for &(severity, heading) in GROUPS {
        let group: Vec<&Violation> = analysis
            .violations
            .iter()
            .filter(|v| v.severity == severity)
            .collect();
        if group.is_empty() {
            continue;
        }

        plan.push_str(heading);
        plan.push('\n');
        for (i, violation) in group.iter().enumerate() {
            let action = violation
                .suggestion
                .as_deref()
                .unwrap_or(&violation.description);
            // Writing to a String cannot fail
            let _ = write!(plan, "{}. {}\n   → {}\n\n", i + 1, violation.title, action);
        }
    }

    plan
}
