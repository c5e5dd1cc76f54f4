//! Domain models for Tally

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ========== Collaborator records ==========

/// A person whose expenses are tracked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

/// New user for insertion
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub status: UserStatus,
}

/// Account status of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(format!("Unknown user status: {}", s)),
        }
    }
}

/// Expense category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A stored expense record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub user_id: i64,
    pub category_id: Option<i64>,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: Option<String>,
}

/// New expense for insertion or replacement
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub user_id: i64,
    pub category_id: Option<i64>,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: Option<String>,
}

// ========== Stats engine ==========

/// One expense reduced to the fields the stats engine needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub user_id: i64,
    pub date: NaiveDate,
    pub amount: Decimal,
}

impl Observation {
    pub fn new(user_id: i64, date: NaiveDate, amount: Decimal) -> Self {
        Self {
            user_id,
            date,
            amount,
        }
    }

    /// Calendar month this observation falls in
    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }
}

/// Calendar year-month, ordered chronologically and rendered as `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Returns `None` when `month` is outside 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || format!("Invalid month key (use YYYY-MM): {}", s);
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Sum of one user's expenses on a single day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayTotal {
    pub user_id: i64,
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Sum of one user's expenses in a calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthTotal {
    pub user_id: i64,
    pub month: MonthKey,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Highest-spend days per user, descending by total
pub type TopDaysReport = BTreeMap<i64, Vec<DayTotal>>;

/// Percentage change of the latest month against the previous one, per user.
/// `None` means there was not enough data.
pub type MonthlyChangeReport = BTreeMap<i64, Option<f64>>;

/// Predicted next-month total per user. `None` means there was no history.
pub type ForecastReport = BTreeMap<i64, Option<f64>>;

/// All three reports computed from a single observation snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    pub top_days: TopDaysReport,
    pub monthly_change: MonthlyChangeReport,
    pub forecast: ForecastReport,
}
