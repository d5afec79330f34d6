use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use shieldseller::config::Config;
use shieldseller::models::ListingData;
use shieldseller::output::{export, terminal};
use shieldseller::pipeline::batch::{self, ScanEntry};
use shieldseller::remediation::simple_fix::generate_simple_fix;
use shieldseller::scoring::risk::analyze_listing_risk_with;
use shieldseller::scoring::shop::ShopSummary;

/// ShieldSeller: policy risk scoring for TikTok Shop listings.
///
/// Scores each listing's text, seller metrics and completeness against the
/// platform's policy rules, before the platform does.
#[derive(Parser)]
#[command(name = "shieldseller", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every listing in a file and show the shop rollup
    Scan {
        /// Listings file (JSON array or JSON Lines)
        file: PathBuf,

        /// Only show listings at or above this risk score
        #[arg(long, default_value = "0")]
        min_score: u8,

        /// Also write a JSON export to the output directory
        #[arg(long)]
        json: bool,
    },

    /// Show the full risk report and fix plan for one listing
    Check {
        /// Listings file (JSON array or JSON Lines)
        file: PathBuf,

        /// Product id to report on (default: first listing in the file)
        #[arg(long)]
        product_id: Option<String>,
    },

    /// Suggest a rule-based rewrite for one listing and re-score it
    Fix {
        /// Listings file (JSON array or JSON Lines)
        file: PathBuf,

        /// Product id to rewrite (default: first listing in the file)
        #[arg(long)]
        product_id: Option<String>,
    },

    /// Show the active ruleset
    Rules {
        /// Print the full ruleset as JSON (usable as SHIELDSELLER_RULES)
        #[arg(long)]
        export: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("shieldseller=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Scan {
            file,
            min_score,
            json,
        } => {
            let rules = config.ruleset()?;
            let loaded = batch::load_listings(&file)?;
            print_rejected(&loaded.rejected);

            if loaded.listings.is_empty() {
                println!("No valid listings found in {}.", file.display());
                return Ok(());
            }

            println!("Scanning {} listings...", loaded.listings.len());
            let entries = batch::scan(&loaded.listings, &rules);

            let analyses: Vec<_> = entries.iter().map(|e| e.analysis.clone()).collect();
            let summary = ShopSummary::from_analyses(&analyses);

            let shown: Vec<ScanEntry> = entries
                .iter()
                .filter(|e| e.analysis.risk_score >= min_score)
                .cloned()
                .collect();
            terminal::display_risk_table(&shown);
            terminal::display_shop_summary(&summary);

            if json {
                let scan_export = export::ScanExport::new(&file, entries, loaded.rejected);
                let path = export::write_export(&scan_export, &config.output_dir)?;
                info!(path = %path.display(), "Wrote scan export");
                println!(
                    "\n{}",
                    format!("Scan export saved to: {}", path.display()).bold()
                );
            }
        }

        Commands::Check { file, product_id } => {
            let rules = config.ruleset()?;
            let listing = select_listing(&file, product_id.as_deref())?;
            let analysis = analyze_listing_risk_with(&listing, &rules);
            terminal::display_listing_detail(&listing, &analysis);
        }

        Commands::Fix { file, product_id } => {
            let rules = config.ruleset()?;
            let listing = select_listing(&file, product_id.as_deref())?;

            let before = analyze_listing_risk_with(&listing, &rules);
            let fix = generate_simple_fix(&listing.title, &listing.description);
            let after = analyze_listing_risk_with(&fix.apply(&listing), &rules);

            terminal::display_simple_fix(&fix, &before, &after);
        }

        Commands::Rules { export: as_json } => {
            let rules = config.ruleset()?;
            if as_json {
                println!("{}", serde_json::to_string_pretty(&rules.to_rule_file())?);
            } else {
                terminal::display_ruleset(&rules, &config.ruleset_source());
            }
        }
    }

    Ok(())
}

/// Load a listings file and pick one listing by product id (or the first).
fn select_listing(file: &Path, product_id: Option<&str>) -> Result<ListingData> {
    let loaded = batch::load_listings(file)?;
    print_rejected(&loaded.rejected);

    let found = match product_id {
        Some(id) => loaded.listings.into_iter().find(|l| l.product_id == id),
        None => loaded.listings.into_iter().next(),
    };

    match (found, product_id) {
        (Some(listing), _) => Ok(listing),
        (None, Some(id)) => anyhow::bail!("No listing with product id {id} in {}", file.display()),
        (None, None) => anyhow::bail!("No valid listings found in {}", file.display()),
    }
}

fn print_rejected(rejected: &[String]) {
    if rejected.is_empty() {
        return;
    }
    println!(
        "{} {} rows skipped:",
        "Warning:".yellow(),
        rejected.len()
    );
    for reason in rejected {
        println!("  {}", reason.dimmed());
    }
}
