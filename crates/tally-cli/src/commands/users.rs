//! User command implementations

use anyhow::{Context, Result};
use tally_core::db::Database;
use tally_core::models::{NewUser, UserStatus};

use super::truncate;

pub fn cmd_users_list(db: &Database) -> Result<()> {
    let users = db.list_users()?;

    if users.is_empty() {
        println!("No users yet. Add one with: tally users add --name <NAME> --email <EMAIL>");
        return Ok(());
    }

    println!();
    println!("👤 Users");
    println!("   {:>4} │ {:20} │ {:28} │ {:8}", "ID", "Name", "Email", "Status");
    println!("   ─────┼──────────────────────┼──────────────────────────────┼─────────");
    for user in &users {
        println!(
            "   {:>4} │ {:20} │ {:28} │ {:8}",
            user.id,
            truncate(&user.name, 20),
            truncate(&user.email, 28),
            user.status.as_str()
        );
    }

    Ok(())
}

pub fn cmd_users_add(db: &Database, name: &str, email: &str, status: &str) -> Result<i64> {
    let status: UserStatus = status.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let id = db
        .add_user(&NewUser {
            name: name.to_string(),
            email: email.to_string(),
            status,
        })
        .with_context(|| format!("Failed to add user {}", email))?;

    println!("✅ Added user {} (ID: {})", name, id);
    Ok(id)
}
