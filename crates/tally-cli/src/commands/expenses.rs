//! Expense command implementations

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use tally_core::db::{Database, ExpenseFilter};
use tally_core::models::NewExpense;

use super::{parse_date_arg, truncate};
use crate::cli::ExpenseFields;

/// Turn CLI fields into an insertable expense
fn to_new_expense(fields: &ExpenseFields) -> Result<NewExpense> {
    let amount: Decimal = fields
        .amount
        .trim()
        .parse()
        .with_context(|| format!("Invalid amount: {}", fields.amount))?;
    if amount <= Decimal::ZERO {
        anyhow::bail!("Amount must be positive: {}", fields.amount);
    }

    Ok(NewExpense {
        user_id: fields.user,
        category_id: fields.category,
        amount,
        date: parse_date_arg(&fields.date, "--date")?,
        description: fields.description.clone(),
    })
}

pub fn cmd_expenses_list(
    db: &Database,
    user: Option<i64>,
    category: Option<i64>,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<()> {
    let filter = ExpenseFilter::new()
        .user_id(user)
        .category_id(category)
        .start_date(from.map(|s| parse_date_arg(s, "--from")).transpose()?)
        .end_date(to.map(|s| parse_date_arg(s, "--to")).transpose()?);

    let expenses = db.list_expenses(&filter)?;

    if expenses.is_empty() {
        println!("No expenses found.");
        return Ok(());
    }

    println!();
    println!("💸 Expenses ({})", expenses.len());
    println!(
        "   {:>5} │ {:>4} │ {:10} │ {:>10} │ {:30}",
        "ID", "User", "Date", "Amount", "Description"
    );
    println!("   ──────┼──────┼────────────┼────────────┼───────────────────────────────");
    for expense in &expenses {
        println!(
            "   {:>5} │ {:>4} │ {:10} │ {:>10.2} │ {:30}",
            expense.id,
            expense.user_id,
            expense.date,
            expense.amount,
            truncate(expense.description.as_deref().unwrap_or(""), 30)
        );
    }

    Ok(())
}

pub fn cmd_expenses_add(db: &Database, fields: &ExpenseFields) -> Result<i64> {
    let expense = to_new_expense(fields)?;
    let id = db
        .add_expense(&expense)
        .context("Failed to add expense (does the user exist?)")?;

    println!(
        "✅ Added expense {} ({} on {} for user {})",
        id, expense.amount, expense.date, expense.user_id
    );
    Ok(id)
}

pub fn cmd_expenses_update(db: &Database, id: i64, fields: &ExpenseFields) -> Result<()> {
    let expense = to_new_expense(fields)?;
    let affected = db
        .update_expense(id, &expense)
        .with_context(|| format!("Failed to update expense {}", id))?;

    if affected == 0 {
        anyhow::bail!("Expense {} not found", id);
    }

    println!("✅ Updated expense {}", id);
    Ok(())
}

pub fn cmd_expenses_delete(db: &Database, id: i64) -> Result<()> {
    let affected = db.delete_expense(id)?;

    if affected == 0 {
        anyhow::bail!("Expense {} not found", id);
    }

    println!("🗑️  Deleted expense {}", id);
    Ok(())
}
