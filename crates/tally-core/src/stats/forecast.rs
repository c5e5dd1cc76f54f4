//! Naive next-month forecast

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::{ForecastReport, MonthTotal};

use super::grouping::MonthGroups;

/// Predict each user's next month as the unweighted mean of their most recent
/// `window` month totals (fewer if the history is shorter).
///
/// Users without any months map to `None`. A `window` of zero is treated as 1.
pub fn forecast_next_month(month_groups: &MonthGroups, window: usize) -> ForecastReport {
    let window = window.max(1);

    month_groups
        .iter()
        .map(|(&user_id, months)| (user_id, moving_average(months, window)))
        .collect()
}

fn moving_average(months: &[MonthTotal], window: usize) -> Option<f64> {
    let recent = &months[..months.len().min(window)];
    if recent.is_empty() {
        return None;
    }

    let exact = recent
        .iter()
        .try_fold(Decimal::ZERO, |acc, m| acc.checked_add(m.total))
        .and_then(|sum| sum.checked_div(Decimal::from(recent.len())));

    match exact {
        Some(avg) => avg.to_f64(),
        // Sum past Decimal's range; average in f64 instead
        None => {
            let sum: f64 = recent.iter().filter_map(|m| m.total.to_f64()).sum();
            Some(sum / recent.len() as f64)
        }
    }
}
