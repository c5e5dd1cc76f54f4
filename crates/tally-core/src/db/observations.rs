//! Expense rows reduced to stats engine observations

use async_trait::async_trait;
use tracing::debug;

use super::{parse_amount, parse_date, Database};
use crate::error::Result;
use crate::models::Observation;
use crate::stats::ObservationSource;

impl Database {
    /// Read every expense as an observation, in no particular order
    pub fn list_observations(&self) -> Result<Vec<Observation>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT user_id, date, amount FROM expenses")?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let observations = rows
            .into_iter()
            .map(|(user_id, date, amount)| {
                Ok(Observation::new(
                    user_id,
                    parse_date(&date)?,
                    parse_amount(&amount)?,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!("Loaded {} observations", observations.len());
        Ok(observations)
    }
}

#[async_trait]
impl ObservationSource for Database {
    async fn fetch_all_observations(&self) -> Result<Vec<Observation>> {
        let db = self.clone();
        tokio::task::spawn_blocking(move || db.list_observations()).await?
    }
}
