// Batch scan: the shop-wide rescan as a file-in, results-out pipeline.
//
// Listings come from a JSON array or JSON Lines file. Rows missing a product
// id, title or description are rejected with a row-numbered reason and the
// rest of the batch continues. Every accepted listing is scored on its own;
// no listing's result depends on any other.

use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::models::{ListingData, RiskAnalysis, RiskLevel};
use crate::rules::Ruleset;
use crate::scoring::risk::analyze_listing_risk_with;

/// Batches at least this large get a progress bar.
const PROGRESS_MIN_LISTINGS: usize = 500;

/// Listings parsed from a file, plus the rows that were rejected.
#[derive(Debug, Default)]
pub struct LoadedListings {
    pub listings: Vec<ListingData>,
    /// "Row N: reason" for every rejected row
    pub rejected: Vec<String>,
}

/// One scored listing in a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanEntry {
    pub product_id: String,
    pub title: String,
    /// Critical-tier listings are flagged for takedown review
    pub flagged: bool,
    pub analysis: RiskAnalysis,
}

impl ScanEntry {
    pub fn new(listing: &ListingData, analysis: RiskAnalysis) -> Self {
        Self {
            product_id: listing.product_id.clone(),
            title: listing.title.clone(),
            flagged: analysis.risk_level == RiskLevel::Critical,
            analysis,
        }
    }
}

/// Read listings from a file on disk.
pub fn load_listings(path: &Path) -> Result<LoadedListings> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read listings file {}", path.display()))?;
    let loaded = parse_listings(&text)
        .with_context(|| format!("Failed to parse listings file {}", path.display()))?;

    info!(
        path = %path.display(),
        accepted = loaded.listings.len(),
        rejected = loaded.rejected.len(),
        "Loaded listings"
    );
    Ok(loaded)
}

/// Parse a JSON array or JSON Lines document of listings.
///
/// A top-level array that fails to parse is an error. In JSON Lines mode a
/// malformed line is rejected and parsing continues.
pub fn parse_listings(text: &str) -> Result<LoadedListings> {
    let mut loaded = LoadedListings::default();

    if text.trim_start().starts_with('[') {
        let rows: Vec<ListingData> =
            serde_json::from_str(text).context("Listings file is not a valid JSON array")?;
        for (i, row) in rows.into_iter().enumerate() {
            accept_row(&mut loaded, i + 1, row);
        }
        return Ok(loaded);
    }

    for (i, line) in text.lines().enumerate() {
        let row_number = i + 1;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<ListingData>(line) {
            Ok(row) => accept_row(&mut loaded, row_number, row),
            Err(e) => {
                warn!(row = row_number, error = %e, "Skipping malformed listing row");
                loaded.rejected.push(format!("Row {row_number}: {e}"));
            }
        }
    }

    Ok(loaded)
}

fn accept_row(loaded: &mut LoadedListings, row_number: usize, row: ListingData) {
    let missing: Vec<&str> = [
        ("productId", row.product_id.trim().is_empty()),
        ("title", row.title.trim().is_empty()),
        ("description", row.description.trim().is_empty()),
    ]
    .into_iter()
    .filter_map(|(field, empty)| empty.then_some(field))
    .collect();

    if missing.is_empty() {
        loaded.listings.push(row);
    } else {
        warn!(row = row_number, missing = ?missing, "Skipping incomplete listing row");
        loaded.rejected.push(format!(
            "Row {row_number}: Missing required fields ({})",
            missing.join(", ")
        ));
    }
}

/// Score every listing, returning entries ranked by descending risk score.
///
/// Ties keep input order.
pub fn scan(listings: &[ListingData], rules: &Ruleset) -> Vec<ScanEntry> {
    let progress = if listings.len() >= PROGRESS_MIN_LISTINGS {
        let bar = ProgressBar::new(listings.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("  [{bar:40}] {pos}/{len} listings scored")
                .expect("valid template")
                .progress_chars("=> "),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut entries: Vec<ScanEntry> = listings
        .iter()
        .map(|listing| {
            let entry = ScanEntry::new(listing, analyze_listing_risk_with(listing, rules));
            progress.inc(1);
            entry
        })
        .collect();
    progress.finish_and_clear();

    entries.sort_by(|a, b| b.analysis.risk_score.cmp(&a.analysis.risk_score));

    info!(
        scanned = entries.len(),
        flagged = entries.iter().filter(|e| e.flagged).count(),
        "Batch scan complete"
    );
    entries
}
