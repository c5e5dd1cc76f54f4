//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Expense tracking with per-user spending statistics
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Personal expense tracker and statistics engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "tally.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Stats config file (defaults to ~/.local/share/tally/config/stats.toml,
    /// then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Manage users (list, add)
    Users {
        #[command(subcommand)]
        action: Option<UsersAction>,
    },

    /// Manage categories (list, add)
    Categories {
        #[command(subcommand)]
        action: Option<CategoriesAction>,
    },

    /// Manage expenses (list, add, update, delete)
    Expenses {
        #[command(subcommand)]
        action: Option<ExpensesAction>,
    },

    /// Spending statistics per user
    Stats {
        #[command(subcommand)]
        report: StatsReportType,

        /// Print JSON keyed by user id instead of tables
        #[arg(long, global = true)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum UsersAction {
    /// List users
    List,
    /// Add a user
    Add {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address (must be unique)
        #[arg(short, long)]
        email: String,

        /// Status: active or inactive
        #[arg(short, long, default_value = "active")]
        status: String,
    },
}

#[derive(Subcommand)]
pub enum CategoriesAction {
    /// List categories
    List,
    /// Add a category
    Add {
        /// Category name (must be unique)
        name: String,
    },
}

#[derive(Subcommand)]
pub enum ExpensesAction {
    /// List expenses
    List {
        /// Only this user's expenses
        #[arg(short, long)]
        user: Option<i64>,

        /// Only this category
        #[arg(short, long)]
        category: Option<i64>,

        /// Earliest date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Latest date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
    /// Add an expense
    Add {
        #[command(flatten)]
        fields: ExpenseFields,
    },
    /// Replace an existing expense
    Update {
        /// Expense ID
        id: i64,

        #[command(flatten)]
        fields: ExpenseFields,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        id: i64,
    },
}

/// Fields shared by expense add and update
#[derive(clap::Args, Debug, Clone)]
pub struct ExpenseFields {
    /// Owning user ID
    #[arg(short, long)]
    pub user: i64,

    /// Amount spent (decimal, e.g. 12.50)
    #[arg(short, long)]
    pub amount: String,

    /// Date of the expense (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: String,

    /// Category ID
    #[arg(short, long)]
    pub category: Option<i64>,

    /// Free-form note
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Subcommand)]
pub enum StatsReportType {
    /// Highest-spend days per user
    TopDays,
    /// Percentage change from the previous month per user
    MonthlyChange,
    /// Next month's predicted total per user
    Forecast,
    /// All three reports from one snapshot
    All,
}
