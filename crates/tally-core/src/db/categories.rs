//! Category operations

use rusqlite::params;
use tracing::info;

use super::Database;
use crate::error::Result;
use crate::models::Category;

impl Database {
    /// Insert a category, returning the new id
    pub fn add_category(&self, name: &str) -> Result<i64> {
        let conn = self.conn()?;
        conn.execute("INSERT INTO categories (name) VALUES (?)", params![name])?;
        let id = conn.last_insert_rowid();
        info!("Added category {} ({})", id, name);
        Ok(id)
    }

    /// List all categories ordered by name
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT id, name FROM categories ORDER BY name")?;
        let categories = stmt
            .query_map([], |row| {
                Ok(Category {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(categories)
    }
}
