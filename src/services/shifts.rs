//! Shifts service.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use tracing::debug;

use crate::{
    calculation::classify_shift_date,
    error::MemorizerResult,
    models::{NewShift, Shift},
    store::{Db, SqliteShiftsRepository},
};

/// Shifts service backed by SQLite.
#[derive(Debug, Clone)]
pub struct SqliteShiftsService {
    db: Db,
    repository: SqliteShiftsRepository,
}

impl SqliteShiftsService {
    /// Creates a service over the given database.
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: SqliteShiftsRepository::new(),
        }
    }
}

#[async_trait]
impl ShiftsService for SqliteShiftsService {
    async fn list_shifts(&self) -> MemorizerResult<Vec<Shift>> {
        let mut tx = self.db.begin().await?;

        let shifts = self.repository.list_shifts(&mut tx).await?;

        tx.commit().await?;

        Ok(shifts)
    }

    async fn create_shift(&self, shift: NewShift) -> MemorizerResult<Shift> {
        let rate = classify_shift_date(shift.date);
        debug!(date = %shift.date, rate = %rate, cost = rate.cost(), "Priced shift");

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_shift(&mut tx, &shift, rate.cost())
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn delete_shift(&self, id: i64) -> MemorizerResult<()> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_shift(&mut tx, id).await?;

        tx.commit().await?;

        if rows_affected == 0 {
            debug!(shift_id = id, "Shift to delete did not exist");
        }

        Ok(())
    }
}

/// Recording, listing and removing worked shifts.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ShiftsService: Send + Sync {
    /// Retrieves all shifts in storage order.
    async fn list_shifts(&self) -> MemorizerResult<Vec<Shift>>;

    /// Prices and stores a new shift. The result carries the assigned id,
    /// the cost for its date and `paid = false`.
    async fn create_shift(&self, shift: NewShift) -> MemorizerResult<Shift>;

    /// Removes a shift permanently. Removing an unknown id succeeds.
    async fn delete_shift(&self, id: i64) -> MemorizerResult<()>;
}
