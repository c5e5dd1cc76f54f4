//! Tally Core Library
//!
//! Shared functionality for the Tally expense tracker:
//! - Expense store (users, categories, expenses) with migrations
//! - Stats engine: top spending days, month-over-month change, next-month forecast
//! - Engine configuration with data-dir overrides

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod stats;

pub use config::StatsConfig;
pub use db::{Database, ExpenseFilter};
pub use error::{Error, Result};
pub use stats::{MemorySource, ObservationSource, StatsEngine};
