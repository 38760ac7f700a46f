//! Shifts repository

use sqlx::{FromRow, Row, Sqlite, Transaction, query, query_as, sqlite::SqliteRow};

use crate::models::{NewShift, Shift};

const CREATE_SHIFT_SQL: &str = include_str!("sql/create_shift.sql");
const LIST_SHIFTS_SQL: &str = include_str!("sql/list_shifts.sql");
const DELETE_SHIFT_SQL: &str = include_str!("sql/delete_shift.sql");
const MARK_SHIFTS_PAID_SQL: &str = include_str!("sql/mark_shifts_paid.sql");

/// Queries against the `shifts` table.
#[derive(Debug, Clone, Default)]
pub struct SqliteShiftsRepository;

impl SqliteShiftsRepository {
    /// Creates the repository.
    pub fn new() -> Self {
        Self
    }

    /// Insert a shift with the given cost. The store assigns the id and the
    /// record starts unpaid.
    pub async fn create_shift(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        shift: &NewShift,
        cost: i64,
    ) -> Result<Shift, sqlx::Error> {
        query_as::<Sqlite, Shift>(CREATE_SHIFT_SQL)
            .bind(shift.worker_name.as_deref())
            .bind(shift.date)
            .bind(shift.start_time)
            .bind(shift.end_time)
            .bind(cost)
            .fetch_one(&mut **tx)
            .await
    }

    /// All shifts in storage order.
    pub async fn list_shifts(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<Vec<Shift>, sqlx::Error> {
        query_as::<Sqlite, Shift>(LIST_SHIFTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    /// Remove a shift. Returns the number of rows removed (0 when absent).
    pub async fn delete_shift(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_SHIFT_SQL)
            .bind(id)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Flip every unpaid shift to paid. Already-paid rows are not written.
    pub async fn mark_all_paid(&self, tx: &mut Transaction<'_, Sqlite>) -> Result<u64, sqlx::Error> {
        let rows_affected = query(MARK_SHIFTS_PAID_SQL)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Shift {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            worker_name: row.try_get("worker_name")?,
            date: row.try_get("date")?,
            start_time: row.try_get("start_time")?,
            end_time: row.try_get("end_time")?,
            // NULL cost is a record nobody priced; it earns nothing.
            cost: row.try_get::<Option<i64>, _>("cost")?.unwrap_or(0),
            paid: row.try_get("paid")?,
        })
    }
}
