//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use chrono::NaiveDate;
use tally_core::db::{Database, ExpenseFilter};
use tally_core::models::Observation;
use tally_core::{MemorySource, StatsConfig, StatsEngine};

use crate::cli::{ExpenseFields, StatsReportType};
use crate::commands::{self, truncate, OutputFormat};

fn setup_test_db() -> (Database, i64) {
    let db = Database::in_memory().unwrap();
    let user = commands::cmd_users_add(&db, "Test", "test@example.com", "active").unwrap();
    (db, user)
}

fn fields(user: i64, amount: &str, date: &str) -> ExpenseFields {
    ExpenseFields {
        user,
        amount: amount.to_string(),
        date: date.to_string(),
        category: None,
        description: None,
    }
}

fn obs(user_id: i64, date: &str, amount: i64) -> Observation {
    Observation::new(
        user_id,
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        amount.into(),
    )
}

// ========== Users / Categories Command Tests ==========

#[test]
fn test_cmd_users_add_and_list() {
    let (db, user) = setup_test_db();
    assert!(commands::cmd_users_list(&db).is_ok());

    let stored = db.get_user(user).unwrap().unwrap();
    assert_eq!(stored.email, "test@example.com");
}

#[test]
fn test_cmd_users_add_rejects_unknown_status() {
    let db = Database::in_memory().unwrap();
    let result = commands::cmd_users_add(&db, "X", "x@example.com", "suspended");
    assert!(result.is_err());
    assert!(db.list_users().unwrap().is_empty());
}

#[test]
fn test_cmd_categories_add_and_list() {
    let db = Database::in_memory().unwrap();
    assert!(commands::cmd_categories_list(&db).is_ok());

    let id = commands::cmd_categories_add(&db, "Groceries").unwrap();
    assert!(id > 0);
    assert!(commands::cmd_categories_add(&db, "Groceries").is_err());
    assert!(commands::cmd_categories_list(&db).is_ok());
}

// ========== Expense Command Tests ==========

#[test]
fn test_cmd_expenses_add_stores_exact_amount() {
    let (db, user) = setup_test_db();
    let id = commands::cmd_expenses_add(&db, &fields(user, "12.50", "2024-01-05")).unwrap();

    let conn = db.conn().unwrap();
    let stored: String = conn
        .query_row(
            "SELECT amount FROM expenses WHERE id = ?",
            rusqlite::params![id],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(stored, "12.50");
}

#[test]
fn test_cmd_expenses_add_rejects_bad_input() {
    let (db, user) = setup_test_db();

    assert!(commands::cmd_expenses_add(&db, &fields(user, "-5", "2024-01-05")).is_err());
    assert!(commands::cmd_expenses_add(&db, &fields(user, "0", "2024-01-05")).is_err());
    assert!(commands::cmd_expenses_add(&db, &fields(user, "ten", "2024-01-05")).is_err());
    assert!(commands::cmd_expenses_add(&db, &fields(user, "10", "05/01/2024")).is_err());
    assert!(commands::cmd_expenses_add(&db, &fields(user + 1, "10", "2024-01-05")).is_err());

    assert!(db.list_expenses(&ExpenseFilter::new()).unwrap().is_empty());
}

#[test]
fn test_cmd_expenses_update_and_delete() {
    let (db, user) = setup_test_db();
    let id = commands::cmd_expenses_add(&db, &fields(user, "10", "2024-01-05")).unwrap();

    commands::cmd_expenses_update(&db, id, &fields(user, "15", "2024-01-06")).unwrap();
    let expense = db.get_expense(id).unwrap().unwrap();
    assert_eq!(expense.amount.to_string(), "15");

    assert!(commands::cmd_expenses_update(&db, id + 1, &fields(user, "1", "2024-01-06")).is_err());

    commands::cmd_expenses_delete(&db, id).unwrap();
    assert!(commands::cmd_expenses_delete(&db, id).is_err());
}

#[test]
fn test_cmd_expenses_list_filters() {
    let (db, user) = setup_test_db();
    commands::cmd_expenses_add(&db, &fields(user, "10", "2024-01-05")).unwrap();

    assert!(commands::cmd_expenses_list(&db, None, None, None, None).is_ok());
    assert!(commands::cmd_expenses_list(
        &db,
        Some(user),
        None,
        Some("2024-01-01"),
        Some("2024-01-31")
    )
    .is_ok());
    assert!(commands::cmd_expenses_list(&db, None, None, Some("January"), None).is_err());
}

// ========== Stats Command Tests ==========

fn sample_engine() -> StatsEngine<MemorySource> {
    StatsEngine::new(MemorySource::new(vec![
        obs(1, "2024-01-05", 100),
        obs(1, "2024-01-05", 50),
        obs(1, "2024-01-06", 30),
        obs(2, "2024-03-10", 200),
        obs(2, "2024-02-10", 100),
    ]))
}

#[tokio::test]
async fn test_render_top_days_json() {
    let engine = sample_engine();
    let text = commands::render_stats(&engine, &StatsReportType::TopDays, OutputFormat::Json)
        .await
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["1"][0]["date"], "2024-01-05");
    assert_eq!(json["1"][0]["total"], 150.0);
    assert_eq!(json["1"][1]["date"], "2024-01-06");
    assert_eq!(json["1"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_render_monthly_change_json_uses_null() {
    let engine = sample_engine();
    let text = commands::render_stats(
        &engine,
        &StatsReportType::MonthlyChange,
        OutputFormat::Json,
    )
    .await
    .unwrap();

    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(json["1"].is_null());
    assert_eq!(json["2"], 100.0);
}

#[tokio::test]
async fn test_render_all_table() {
    let engine = sample_engine();
    let text = commands::render_stats(&engine, &StatsReportType::All, OutputFormat::Table)
        .await
        .unwrap();

    assert!(text.contains("Top 3 Spending Days"));
    assert!(text.contains("150.00"));
    assert!(text.contains("+100.0%"));
    assert!(text.contains("n/a (needs two months)"));
    assert!(text.contains("$150.00"));
}

#[tokio::test]
async fn test_render_empty_reports() {
    let engine = StatsEngine::new(MemorySource::default());
    let text = commands::render_stats(&engine, &StatsReportType::Forecast, OutputFormat::Table)
        .await
        .unwrap();
    assert!(text.contains("No expenses recorded."));

    let json = commands::render_stats(&engine, &StatsReportType::All, OutputFormat::Json)
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["top_days"].as_object().unwrap().is_empty());
}

#[tokio::test]
async fn test_cmd_stats_against_database() {
    let (db, user) = setup_test_db();
    commands::cmd_expenses_add(&db, &fields(user, "40", "2024-02-01")).unwrap();
    commands::cmd_expenses_add(&db, &fields(user, "20", "2024-01-01")).unwrap();

    let result = commands::cmd_stats(
        db,
        StatsConfig::default(),
        &StatsReportType::All,
        OutputFormat::Table,
    )
    .await;
    assert!(result.is_ok());
}

// ========== Utility Tests ==========

#[test]
fn test_load_config_missing_file_uses_defaults() {
    let config =
        commands::load_config(Some(std::path::Path::new("/nonexistent/tally/stats.toml")))
            .unwrap();
    assert_eq!(config, StatsConfig::default());
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a much longer description", 10), "a much ...");
}
