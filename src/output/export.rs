// JSON scan export: the record a caller persists after a batch scan.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pipeline::batch::ScanEntry;
use crate::scoring::shop::ShopSummary;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanExport {
    pub scanned_at: DateTime<Utc>,
    /// Listings file the scan was run on
    pub source: String,
    pub shop: ShopSummary,
    pub listings: Vec<ScanEntry>,
    /// Rows skipped at load time
    pub rejected: Vec<String>,
}

impl ScanExport {
    pub fn new(source: &Path, entries: Vec<ScanEntry>, rejected: Vec<String>) -> Self {
        let analyses: Vec<_> = entries.iter().map(|e| e.analysis.clone()).collect();
        Self {
            scanned_at: Utc::now(),
            source: source.display().to_string(),
            shop: ShopSummary::from_analyses(&analyses),
            listings: entries,
            rejected,
        }
    }

    /// File name derived from the scan timestamp.
    pub fn file_name(&self) -> String {
        format!("scan-{}.json", self.scanned_at.format("%Y%m%dT%H%M%SZ"))
    }
}

/// Write the export into `output_dir`, creating the directory if needed.
/// Returns the path written.
pub fn write_export(export: &ScanExport, output_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let path = output_dir.join(export.file_name());
    let json = serde_json::to_string_pretty(export)?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write scan export {}", path.display()))?;

    Ok(path)
}
