//! User operations

use rusqlite::{params, OptionalExtension};
use tracing::info;

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{NewUser, User, UserStatus};

/// Raw user row before status parsing
type RawUser = (i64, String, String, String, String);

impl Database {
    /// Insert a user, returning the new id
    pub fn add_user(&self, user: &NewUser) -> Result<i64> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO users (name, email, status) VALUES (?1, ?2, ?3)",
            params![user.name, user.email, user.status.as_str()],
        )?;
        let id = conn.last_insert_rowid();
        info!("Added user {} ({})", id, user.email);
        Ok(id)
    }

    /// Get a user by id
    pub fn get_user(&self, id: i64) -> Result<Option<User>> {
        let conn = self.conn()?;
        let raw = conn
            .query_row(
                "SELECT id, name, email, status, created_at FROM users WHERE id = ?",
                params![id],
                row_to_raw,
            )
            .optional()?;
        raw.map(raw_to_user).transpose()
    }

    /// List all users ordered by id
    pub fn list_users(&self) -> Result<Vec<User>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT id, name, email, status, created_at FROM users ORDER BY id")?;
        let rows = stmt
            .query_map([], row_to_raw)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        rows.into_iter().map(raw_to_user).collect()
    }
}

fn row_to_raw(row: &rusqlite::Row) -> rusqlite::Result<RawUser> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
    ))
}

fn raw_to_user(raw: RawUser) -> Result<User> {
    let (id, name, email, status, created_at) = raw;
    let status: UserStatus = status.parse().map_err(Error::InvalidData)?;
    Ok(User {
        id,
        name,
        email,
        status,
        created_at: parse_datetime(&created_at),
    })
}
