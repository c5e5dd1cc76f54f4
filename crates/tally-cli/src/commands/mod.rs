//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Core commands (init) and shared utilities (open_db, load_config)
//! - `users` - User commands (list, add)
//! - `categories` - Category commands (list, add)
//! - `expenses` - Expense commands (list, add, update, delete)
//! - `stats` - Stats report commands (top days, monthly change, forecast)

pub mod categories;
pub mod core;
pub mod expenses;
pub mod stats;
pub mod users;

// Re-export command functions for main.rs
pub use categories::*;
pub use self::core::*;
pub use expenses::*;
pub use stats::*;
pub use users::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
