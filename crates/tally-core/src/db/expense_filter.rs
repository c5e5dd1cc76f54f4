//! Expense filter builder for constructing dynamic SQL queries

use chrono::NaiveDate;

/// Builder for expense list filters
///
/// Every field is optional; unset fields do not constrain the query.
/// Date bounds are inclusive.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpenseFilter {
    pub user_id: Option<i64>,
    pub category_id: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Result of building a filter - contains SQL components and parameters
pub struct FilterResult {
    /// WHERE clause including "WHERE" keyword (empty if no conditions)
    pub where_clause: String,
    /// Parameters for the query (boxed for rusqlite compatibility)
    pub params: Vec<Box<dyn rusqlite::ToSql>>,
}

impl ExpenseFilter {
    /// Create a new filter builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set user filter
    pub fn user_id(mut self, id: Option<i64>) -> Self {
        self.user_id = id;
        self
    }

    /// Set category filter
    pub fn category_id(mut self, id: Option<i64>) -> Self {
        self.category_id = id;
        self
    }

    /// Set earliest date (inclusive)
    pub fn start_date(mut self, date: Option<NaiveDate>) -> Self {
        self.start_date = date;
        self
    }

    /// Set latest date (inclusive)
    pub fn end_date(mut self, date: Option<NaiveDate>) -> Self {
        self.end_date = date;
        self
    }

    /// Build the filter components
    pub fn build(&self) -> FilterResult {
        let mut conditions = Vec::new();
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(uid) = self.user_id {
            conditions.push("e.user_id = ?");
            params.push(Box::new(uid));
        }

        if let Some(cid) = self.category_id {
            conditions.push("e.category_id = ?");
            params.push(Box::new(cid));
        }

        // Dates are stored as YYYY-MM-DD, so string comparison is chronological
        if let Some(from) = self.start_date {
            conditions.push("e.date >= ?");
            params.push(Box::new(from.to_string()));
        }

        if let Some(to) = self.end_date {
            conditions.push("e.date <= ?");
            params.push(Box::new(to.to_string()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        FilterResult {
            where_clause,
            params,
        }
    }
}

impl FilterResult {
    /// Get parameter references for query execution
    pub fn params_refs(&self) -> Vec<&dyn rusqlite::ToSql> {
        self.params.iter().map(|p| p.as_ref()).collect()
    }
}
