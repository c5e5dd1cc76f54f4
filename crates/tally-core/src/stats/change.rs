//! Month-over-month percentage change

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::{MonthTotal, MonthlyChangeReport};

use super::grouping::MonthGroups;

/// Percentage change from each user's previous month to their latest month.
///
/// Users with fewer than two months of data, or whose previous month totals
/// zero, map to `None`.
pub fn monthly_change(month_groups: &MonthGroups) -> MonthlyChangeReport {
    month_groups
        .iter()
        .map(|(&user_id, months)| (user_id, change_for(months)))
        .collect()
}

fn change_for(months: &[MonthTotal]) -> Option<f64> {
    let [latest, previous, ..] = months else {
        return None;
    };

    percent_change(latest.total, previous.total)
}

/// `((latest - previous) / previous) * 100`, or `None` when `previous` is zero
pub fn percent_change(latest: Decimal, previous: Decimal) -> Option<f64> {
    if previous.is_zero() {
        return None;
    }

    let exact = latest
        .checked_sub(previous)
        .and_then(|delta| delta.checked_div(previous))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED));

    match exact {
        Some(pct) => pct.to_f64(),
        // Past Decimal's range; f64 still has headroom
        None => {
            let (latest, previous) = (latest.to_f64()?, previous.to_f64()?);
            Some((latest - previous) / previous * 100.0)
        }
    }
}
