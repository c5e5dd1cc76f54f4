//! Partitioning observations by user and calendar key

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{MonthKey, MonthTotal, Observation};

/// Per-user day totals, days in ascending date order
pub type DayGroups = BTreeMap<i64, BTreeMap<NaiveDate, Decimal>>;

/// Per-user month totals, most recent month first
pub type MonthGroups = BTreeMap<i64, Vec<MonthTotal>>;

/// Sum amounts per (user, date)
pub fn group_by_user_and_day(observations: &[Observation]) -> DayGroups {
    let mut groups = DayGroups::new();

    for obs in observations {
        *groups
            .entry(obs.user_id)
            .or_default()
            .entry(obs.date)
            .or_insert(Decimal::ZERO) += obs.amount;
    }

    groups
}

/// Sum amounts per (user, month), each user's months sorted descending
pub fn group_by_user_and_month(observations: &[Observation]) -> MonthGroups {
    let mut sums: BTreeMap<i64, BTreeMap<MonthKey, Decimal>> = BTreeMap::new();

    for obs in observations {
        *sums
            .entry(obs.user_id)
            .or_default()
            .entry(obs.month())
            .or_insert(Decimal::ZERO) += obs.amount;
    }

    sums.into_iter()
        .map(|(user_id, months)| {
            let totals = months
                .into_iter()
                .rev()
                .map(|(month, total)| MonthTotal {
                    user_id,
                    month,
                    total,
                })
                .collect();
            (user_id, totals)
        })
        .collect()
}
