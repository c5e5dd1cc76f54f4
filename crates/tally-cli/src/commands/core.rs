//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `load_config` - Resolve the stats engine config
//! - `cmd_init` - Initialize the database

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tally_core::{Database, StatsConfig};

/// Open the database, creating and migrating it if needed
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path is not valid UTF-8")?;
    Database::new(path_str).context("Failed to open database")
}

/// Load stats config from `path`, or the default locations when not given
pub fn load_config(path: Option<&Path>) -> Result<StatsConfig> {
    match path {
        Some(p) => StatsConfig::load_from(p)
            .with_context(|| format!("Failed to load config from {}", p.display())),
        None => StatsConfig::load().context("Failed to load stats config"),
    }
}

/// Parse a `YYYY-MM-DD` argument
pub fn parse_date_arg(value: &str, flag: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Invalid {} date format (use YYYY-MM-DD)", flag))
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    open_db(db_path)?;

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Add a user: tally users add --name Ada --email ada@example.com");
    println!("  2. Record expenses: tally expenses add -u 1 -a 12.50 -d 2024-01-05");
    println!("  3. See statistics: tally stats all");

    Ok(())
}
