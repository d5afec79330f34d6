// Colored terminal output for scan results, listing reports and rules.
//
// main.rs delegates all display formatting here.

use colored::Colorize;

use crate::models::{ListingData, RiskAnalysis, RiskLevel, Severity};
use crate::pipeline::batch::ScanEntry;
use crate::remediation::simple_fix::SimpleFix;
use crate::remediation::suggestions::generate_fix_suggestions;
use crate::rules::Ruleset;
use crate::scoring::shop::ShopSummary;

/// Display a ranked table of scanned listings.
pub fn display_risk_table(entries: &[ScanEntry]) {
    if entries.is_empty() {
        println!("No listings to show.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Listing Risk ({} listings) ===", entries.len()).bold()
    );
    println!();

    println!(
        "  {:>4}  {:<20} {:<40} {:>5}  {:<8}  {:>4}",
        "Rank".dimmed(),
        "Product".dimmed(),
        "Title".dimmed(),
        "Score".dimmed(),
        "Level".dimmed(),
        "Viol".dimmed(),
    );
    println!("  {}", "-".repeat(90).dimmed());

    for (i, entry) in entries.iter().enumerate() {
        let analysis = &entry.analysis;
        println!(
            "  {:>4}. {:<20} {:<40} {:>5}  {:<8}  {:>4}",
            i + 1,
            super::truncate_chars(&entry.product_id, 17),
            super::truncate_chars(&entry.title, 37),
            analysis.risk_score,
            colorize_level(analysis.risk_level),
            analysis.violations.len(),
        );
    }
    println!();
}

/// Display the shop rollup for a batch.
pub fn display_shop_summary(summary: &ShopSummary) {
    println!("{}", "=== Shop Summary ===".bold());
    println!(
        "  Shop risk score: {}/100 (weighted)  {:.1} (mean)",
        summary.weighted_score, summary.average_score
    );
    println!("  Listings scanned: {}", summary.listings);
    println!("  Violations found: {}", summary.violations);

    if summary.high_risk > 0 {
        println!(
            "  {} {} high-risk listings",
            "!!".red().bold(),
            summary.high_risk
        );
    }
    if summary.critical_alerts > 0 {
        println!(
            "  {} {} listings with critical violations",
            "!".bright_red(),
            summary.critical_alerts
        );
    }
}

/// Display a single listing's full report and fix plan.
pub fn display_listing_detail(listing: &ListingData, analysis: &RiskAnalysis) {
    println!(
        "\n{}",
        format!("=== Risk report for {} ===", listing.product_id).bold()
    );
    println!("  Title: {}", super::truncate_chars(&listing.title, 80));
    println!("  Risk level: {}", colorize_level(analysis.risk_level));
    println!("  Risk score: {}/100", analysis.risk_score);
    println!(
        "  Factors: content {}  performance {}  compliance {}",
        analysis.factors.content_risk,
        analysis.factors.performance_risk,
        analysis.factors.compliance_risk,
    );

    if !analysis.violations.is_empty() {
        println!("\n  {} violations:", analysis.violations.len());
        for violation in &analysis.violations {
            println!(
                "    [{}] {}",
                colorize_severity(violation.severity),
                violation.title
            );
            println!("        {}", violation.description.dimmed());
        }
    }

    println!("\n{}", generate_fix_suggestions(analysis));
}

/// Display a rule-based rewrite and how it changes the score.
pub fn display_simple_fix(fix: &SimpleFix, before: &RiskAnalysis, after: &RiskAnalysis) {
    println!("\n{}", "=== Suggested rewrite ===".bold());
    println!("  Title:");
    println!("    - {}", fix.original.title.dimmed());
    println!("    + {}", fix.fixed.title);
    println!("  Description:");
    println!(
        "    - {}",
        super::truncate_chars(&fix.original.description, 120).dimmed()
    );
    println!("    + {}", super::truncate_chars(&fix.fixed.description, 120));

    println!("\n  Changes:");
    for change in &fix.changes {
        println!("    * {change}");
    }

    println!(
        "\n  Risk score: {} ({}) -> {} ({})",
        before.risk_score,
        colorize_level(before.risk_level),
        after.risk_score,
        colorize_level(after.risk_level),
    );
    if after.violations.len() < before.violations.len() {
        println!(
            "  Resolved {} of {} violations.",
            before.violations.len() - after.violations.len(),
            before.violations.len()
        );
    }
}

/// Display a short summary of the active ruleset.
pub fn display_ruleset(rules: &Ruleset, source: &str) {
    let weights = rules.weights();
    println!("\n{}", format!("=== Ruleset ({source}) ===").bold());
    println!(
        "  Forbidden keywords: {}",
        rules.forbidden_keywords().len()
    );
    println!("  Risk patterns: {}", rules.risk_patterns().len());
    println!(
        "  Suspicious categories: {}",
        rules.suspicious_categories().join(", ")
    );
    println!(
        "  Weights: content {:.1}  performance {:.1}  compliance {:.1}",
        weights.content, weights.performance, weights.compliance
    );
}

/// Colorize a risk level.
fn colorize_level(level: RiskLevel) -> colored::ColoredString {
    let label = level.as_str();
    match level {
        RiskLevel::Critical => label.red().bold(),
        RiskLevel::High => label.bright_red(),
        RiskLevel::Medium => label.yellow(),
        RiskLevel::Low => label.normal(),
        RiskLevel::Safe => label.green(),
    }
}

fn colorize_severity(severity: Severity) -> colored::ColoredString {
    let label = severity.as_str();
    match severity {
        Severity::Critical => label.red().bold(),
        Severity::Warning => label.yellow(),
        Severity::Info => label.dimmed(),
    }
}
