//! Expense operations

use rusqlite::{params, OptionalExtension};
use tracing::info;

use super::expense_filter::ExpenseFilter;
use super::{parse_amount, parse_date, Database};
use crate::error::Result;
use crate::models::{Expense, NewExpense};

const EXPENSE_COLUMNS: &str = "e.id, e.user_id, e.category_id, e.amount, e.date, e.description";

/// Raw expense row before amount/date parsing
type RawExpense = (i64, i64, Option<i64>, String, String, Option<String>);

impl Database {
    /// Insert an expense, returning the new id
    pub fn add_expense(&self, expense: &NewExpense) -> Result<i64> {
        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO expenses (user_id, category_id, amount, date, description)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                expense.user_id,
                expense.category_id,
                expense.amount.to_string(),
                expense.date.to_string(),
                expense.description,
            ],
        )?;
        let id = conn.last_insert_rowid();
        info!(
            "Added expense {} for user {} ({} on {})",
            id, expense.user_id, expense.amount, expense.date
        );
        Ok(id)
    }

    /// Replace every field of an expense. Returns the number of rows changed.
    pub fn update_expense(&self, id: i64, expense: &NewExpense) -> Result<usize> {
        let conn = self.conn()?;
        let affected = conn.execute(
            r#"
            UPDATE expenses
            SET user_id = ?1, category_id = ?2, amount = ?3, date = ?4, description = ?5
            WHERE id = ?6
            "#,
            params![
                expense.user_id,
                expense.category_id,
                expense.amount.to_string(),
                expense.date.to_string(),
                expense.description,
                id,
            ],
        )?;
        info!("Updated expense {} ({} row(s))", id, affected);
        Ok(affected)
    }

    /// Delete an expense. Returns the number of rows removed.
    pub fn delete_expense(&self, id: i64) -> Result<usize> {
        let conn = self.conn()?;
        let affected = conn.execute("DELETE FROM expenses WHERE id = ?", params![id])?;
        info!("Deleted expense {} ({} row(s))", id, affected);
        Ok(affected)
    }

    /// Get an expense by id
    pub fn get_expense(&self, id: i64) -> Result<Option<Expense>> {
        let conn = self.conn()?;
        let raw = conn
            .query_row(
                &format!("SELECT {} FROM expenses e WHERE e.id = ?", EXPENSE_COLUMNS),
                params![id],
                row_to_raw,
            )
            .optional()?;
        raw.map(raw_to_expense).transpose()
    }

    /// List expenses matching `filter`, oldest first
    pub fn list_expenses(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>> {
        let conn = self.conn()?;
        let built = filter.build();
        let sql = format!(
            "SELECT {} FROM expenses e {} ORDER BY e.date ASC, e.id ASC",
            EXPENSE_COLUMNS, built.where_clause
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(built.params_refs().as_slice(), row_to_raw)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter().map(raw_to_expense).collect()
    }
}

fn row_to_raw(row: &rusqlite::Row) -> rusqlite::Result<RawExpense> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
    ))
}

fn raw_to_expense(raw: RawExpense) -> Result<Expense> {
    let (id, user_id, category_id, amount, date, description) = raw;
    Ok(Expense {
        id,
        user_id,
        category_id,
        amount: parse_amount(&amount)?,
        date: parse_date(&date)?,
        description,
    })
}
