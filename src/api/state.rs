//! Application state for the Memorizer API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::services::{
    ShiftsService, SongsService, SqliteShiftsService, SqliteSongsService,
    SqliteStatisticsService, StatisticsService,
};
use crate::store::Db;

/// Shared application state.
///
/// Holds the services behind trait objects so the same router runs against
/// SQLite in production and against mocks in tests.
#[derive(Clone)]
pub struct AppState {
    shifts: Arc<dyn ShiftsService>,
    songs: Arc<dyn SongsService>,
    statistics: Arc<dyn StatisticsService>,
}

impl AppState {
    /// Creates application state from explicit service implementations.
    pub fn new(
        shifts: Arc<dyn ShiftsService>,
        songs: Arc<dyn SongsService>,
        statistics: Arc<dyn StatisticsService>,
    ) -> Self {
        Self {
            shifts,
            songs,
            statistics,
        }
    }

    /// Creates application state with SQLite-backed services sharing one pool.
    pub fn from_db(db: Db) -> Self {
        Self::new(
            Arc::new(SqliteShiftsService::new(db.clone())),
            Arc::new(SqliteSongsService::new(db.clone())),
            Arc::new(SqliteStatisticsService::new(db)),
        )
    }

    /// Returns the shifts service.
    pub fn shifts(&self) -> &dyn ShiftsService {
        self.shifts.as_ref()
    }

    /// Returns the songs service.
    pub fn songs(&self) -> &dyn SongsService {
        self.songs.as_ref()
    }

    /// Returns the statistics service.
    pub fn statistics(&self) -> &dyn StatisticsService {
        self.statistics.as_ref()
    }
}
