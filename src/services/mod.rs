//! Services between the HTTP layer and storage.
//!
//! Each service is a trait, so handlers can be exercised against mocks, with
//! a SQLite-backed implementation that runs every operation in its own
//! transaction.

mod shifts;
mod songs;
mod statistics;

pub use shifts::{ShiftsService, SqliteShiftsService};
pub use songs::{SongsService, SqliteSongsService};
pub use statistics::{SqliteStatisticsService, StatisticsService};

#[cfg(test)]
pub use shifts::MockShiftsService;
#[cfg(test)]
pub use songs::MockSongsService;
#[cfg(test)]
pub use statistics::MockStatisticsService;
