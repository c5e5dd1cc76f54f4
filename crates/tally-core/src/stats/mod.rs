//! Stats Engine - per-user spending statistics
//!
//! Turns a flat list of expense observations into three independent reports:
//!
//! - **Top days** - each user's highest-spend calendar days
//! - **Monthly change** - percentage change between the two most recent months
//! - **Forecast** - simple moving average of recent months as next month's prediction
//!
//! The engine owns no data. Observations come from an injected
//! [`ObservationSource`], fetched fresh for every report.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_core::stats::StatsEngine;
//!
//! let engine = StatsEngine::new(db.clone());
//! let report = engine.report().await?;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! ```

pub mod change;
pub mod forecast;
pub mod grouping;
pub mod ranking;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::config::StatsConfig;
use crate::error::Result;
use crate::models::{
    ForecastReport, MonthlyChangeReport, Observation, StatsReport, TopDaysReport,
};

pub use change::{monthly_change, percent_change};
pub use forecast::forecast_next_month;
pub use grouping::{group_by_user_and_day, group_by_user_and_month, DayGroups, MonthGroups};
pub use ranking::top_days;

/// Supplier of expense observations for the engine
///
/// Implementations return every expense row, in any order. Failures are
/// passed through to the caller untouched.
#[async_trait]
pub trait ObservationSource: Send + Sync {
    async fn fetch_all_observations(&self) -> Result<Vec<Observation>>;
}

#[async_trait]
impl<T: ObservationSource + ?Sized> ObservationSource for Arc<T> {
    async fn fetch_all_observations(&self) -> Result<Vec<Observation>> {
        (**self).fetch_all_observations().await
    }
}

/// Observation source backed by a fixed in-memory list
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    observations: Vec<Observation>,
}

impl MemorySource {
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }
}

#[async_trait]
impl ObservationSource for MemorySource {
    async fn fetch_all_observations(&self) -> Result<Vec<Observation>> {
        Ok(self.observations.clone())
    }
}

/// Computes stats reports over observations from `S`
pub struct StatsEngine<S> {
    source: S,
    config: StatsConfig,
}

impl<S: ObservationSource> StatsEngine<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, StatsConfig::default())
    }

    pub fn with_config(source: S, config: StatsConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    async fn snapshot(&self) -> Result<Vec<Observation>> {
        let observations = self.source.fetch_all_observations().await?;
        debug!("Fetched {} observations", observations.len());
        Ok(observations)
    }

    /// Top spending days per user
    pub async fn top_days(&self) -> Result<TopDaysReport> {
        let observations = self.snapshot().await?;
        Ok(compute_top_days(&observations, self.config.top_days_limit))
    }

    /// Month-over-month percentage change per user
    pub async fn monthly_change(&self) -> Result<MonthlyChangeReport> {
        let observations = self.snapshot().await?;
        Ok(compute_monthly_change(&observations))
    }

    /// Next-month prediction per user
    pub async fn forecast_next_month(&self) -> Result<ForecastReport> {
        let observations = self.snapshot().await?;
        Ok(compute_forecast(&observations, self.config.forecast_window))
    }

    /// All three reports from one fetch, reduced concurrently
    pub async fn report(&self) -> Result<StatsReport> {
        let observations = Arc::new(self.snapshot().await?);
        let StatsConfig {
            top_days_limit,
            forecast_window,
        } = self.config;

        let top = {
            let observations = Arc::clone(&observations);
            tokio::task::spawn_blocking(move || compute_top_days(&observations, top_days_limit))
        };
        let change = {
            let observations = Arc::clone(&observations);
            tokio::task::spawn_blocking(move || compute_monthly_change(&observations))
        };
        let forecast = tokio::task::spawn_blocking(move || {
            compute_forecast(&observations, forecast_window)
        });

        let (top_days, monthly_change, forecast) = tokio::try_join!(top, change, forecast)?;

        Ok(StatsReport {
            top_days,
            monthly_change,
            forecast,
        })
    }
}

fn compute_top_days(observations: &[Observation], limit: usize) -> TopDaysReport {
    let groups = group_by_user_and_day(observations);
    debug!("Ranking days for {} users", groups.len());
    top_days(&groups, limit)
}

fn compute_monthly_change(observations: &[Observation]) -> MonthlyChangeReport {
    let groups = group_by_user_and_month(observations);
    debug!("Computing monthly change for {} users", groups.len());
    monthly_change(&groups)
}

fn compute_forecast(observations: &[Observation], window: usize) -> ForecastReport {
    let groups = group_by_user_and_month(observations);
    debug!("Forecasting {} users over {} months", groups.len(), window);
    forecast_next_month(&groups, window)
}
