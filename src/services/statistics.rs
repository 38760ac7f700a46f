//! Statistics service: earnings and payouts.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use tracing::debug;

use crate::{
    calculation::calculate_earnings,
    error::MemorizerResult,
    models::{Earnings, PayoutSummary},
    store::{Db, SqliteShiftsRepository, SqliteSongsRepository},
};

/// Statistics service backed by SQLite.
#[derive(Debug, Clone)]
pub struct SqliteStatisticsService {
    db: Db,
    shifts: SqliteShiftsRepository,
    songs: SqliteSongsRepository,
}

impl SqliteStatisticsService {
    /// Creates a service over the given database.
    pub fn new(db: Db) -> Self {
        Self {
            db,
            shifts: SqliteShiftsRepository::new(),
            songs: SqliteSongsRepository::new(),
        }
    }
}

#[async_trait]
impl StatisticsService for SqliteStatisticsService {
    async fn get_earnings(&self) -> MemorizerResult<Earnings> {
        let mut tx = self.db.begin().await?;

        let shifts = self.shifts.list_shifts(&mut tx).await?;
        let songs = self.songs.list_songs(&mut tx).await?;

        tx.commit().await?;

        Ok(calculate_earnings(&shifts, &songs))
    }

    async fn payout(&self) -> MemorizerResult<PayoutSummary> {
        let mut tx = self.db.begin().await?;

        let shifts_paid = self.shifts.mark_all_paid(&mut tx).await?;
        let songs_paid = self.songs.mark_all_paid(&mut tx).await?;

        tx.commit().await?;

        debug!(shifts_paid, songs_paid, "Payout committed");

        Ok(PayoutSummary {
            shifts_paid,
            songs_paid,
        })
    }
}

/// Earnings reporting and payout over all shifts and songs.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StatisticsService: Send + Sync {
    /// Lifetime earnings over every record and the balance of unpaid records.
    async fn get_earnings(&self) -> MemorizerResult<Earnings>;

    /// Marks every unpaid shift and song as paid in a single transaction.
    ///
    /// Records that are already paid are left untouched. Afterwards the
    /// current balance is zero and lifetime earnings are unchanged.
    async fn payout(&self) -> MemorizerResult<PayoutSummary>;
}
