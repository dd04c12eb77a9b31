use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use setup_core::validation::BatchPolicy;
use setup_data::RosterLoader;
use tracing_subscriber::EnvFilter;

/// Check a shareholder roster CSV against the shareholder step rules.
///
/// The CSV file should have the following columns:
/// - name, email, phone: Personal details
/// - is_uae_resident: yes/no
/// - emirates_id: Required for residents (784-YYYY-NNNNNNN-N)
/// - passport_number, passport_expiry, country_code, passport_file:
///   Required for non-residents (expiry as YYYY-MM-DD)
/// - share_percentage: 0 to 100
#[derive(Parser, Debug)]
#[command(name = "roster-check")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing the shareholder roster
    #[arg(short, long)]
    file: PathBuf,

    /// Reject rosters whose shares do not add up to 100%
    #[arg(short, long, default_value_t = false)]
    require_full_ownership: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    println!("Checking roster: {}", args.file.display());

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let records = RosterLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;

    println!("Parsed {} rows from CSV", records.len());

    let policy = BatchPolicy {
        require_full_ownership: args.require_full_ownership,
    };
    let shareholders = RosterLoader::replay(&records, policy)
        .with_context(|| format!("Roster rejected: {}", args.file.display()))?;

    for shareholder in &shareholders {
        let residency = if shareholder.identity.is_uae_resident() {
            "resident"
        } else {
            "non-resident"
        };
        println!(
            "  #{} {:<24} {:>7}%  {}",
            shareholder.id, shareholder.personal.name, shareholder.share_percentage, residency
        );
    }

    let total: Decimal = shareholders.iter().map(|s| s.share_percentage).sum();
    println!(
        "Roster accepted: {} shareholders holding {}%.",
        shareholders.len(),
        total
    );

    Ok(())
}
