//! Category command implementations

use anyhow::{Context, Result};
use tally_core::db::Database;

pub fn cmd_categories_list(db: &Database) -> Result<()> {
    let categories = db.list_categories()?;

    if categories.is_empty() {
        println!("No categories yet. Add one with: tally categories add <NAME>");
        return Ok(());
    }

    println!();
    println!("🏷️  Categories");
    for category in &categories {
        println!("   {:>4}  {}", category.id, category.name);
    }

    Ok(())
}

pub fn cmd_categories_add(db: &Database, name: &str) -> Result<i64> {
    let id = db
        .add_category(name)
        .with_context(|| format!("Failed to add category {}", name))?;

    println!("✅ Added category {} (ID: {})", name, id);
    Ok(id)
}
