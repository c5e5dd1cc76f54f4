//! Tally CLI - Personal expense tracker
//!
//! Usage:
//!   tally init                          Initialize database
//!   tally expenses add -u 1 -a 12.50 -d 2024-01-05
//!   tally stats top-days                Highest-spend days per user
//!   tally stats all --json              Every report as JSON

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Users { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None | Some(UsersAction::List) => commands::cmd_users_list(&db),
                Some(UsersAction::Add {
                    name,
                    email,
                    status,
                }) => commands::cmd_users_add(&db, &name, &email, &status).map(|_| ()),
            }
        }
        Commands::Categories { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None | Some(CategoriesAction::List) => commands::cmd_categories_list(&db),
                Some(CategoriesAction::Add { name }) => {
                    commands::cmd_categories_add(&db, &name).map(|_| ())
                }
            }
        }
        Commands::Expenses { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None => commands::cmd_expenses_list(&db, None, None, None, None),
                Some(ExpensesAction::List {
                    user,
                    category,
                    from,
                    to,
                }) => commands::cmd_expenses_list(
                    &db,
                    user,
                    category,
                    from.as_deref(),
                    to.as_deref(),
                ),
                Some(ExpensesAction::Add { fields }) => {
                    commands::cmd_expenses_add(&db, &fields).map(|_| ())
                }
                Some(ExpensesAction::Update { id, fields }) => {
                    commands::cmd_expenses_update(&db, id, &fields)
                }
                Some(ExpensesAction::Delete { id }) => commands::cmd_expenses_delete(&db, id),
            }
        }
        Commands::Stats { report, json } => {
            let db = commands::open_db(&cli.db)?;
            let config = commands::load_config(cli.config.as_deref())?;
            let format = if json {
                commands::OutputFormat::Json
            } else {
                commands::OutputFormat::Table
            };
            commands::cmd_stats(db, config, &report, format).await
        }
    }
}
