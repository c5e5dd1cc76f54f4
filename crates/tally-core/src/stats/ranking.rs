//! Top spending days per user

use crate::models::{DayTotal, TopDaysReport};

use super::grouping::DayGroups;

/// Rank each user's days by total, highest first, keeping at most `limit`.
///
/// Days with equal totals are ordered by ascending date, so repeated runs over
/// the same observations always produce the same sequence. A user with fewer
/// than `limit` days gets all of them.
pub fn top_days(day_groups: &DayGroups, limit: usize) -> TopDaysReport {
    day_groups
        .iter()
        .map(|(&user_id, days)| {
            let mut ranked: Vec<DayTotal> = days
                .iter()
                .map(|(&date, &total)| DayTotal {
                    user_id,
                    date,
                    total,
                })
                .collect();

            ranked.sort_by(|a, b| b.total.cmp(&a.total).then(a.date.cmp(&b.date)));
            ranked.truncate(limit);

            (user_id, ranked)
        })
        .collect()
}
