//! Relational storage for shifts and songs.
//!
//! [`Db`] owns the SQLite pool and the embedded migrations; the repositories
//! run their queries inside a transaction supplied by the caller, so a
//! service can group several statements into one unit of work.

mod database;
mod shifts;
mod songs;

pub use database::Db;
pub use shifts::SqliteShiftsRepository;
pub use songs::SqliteSongsRepository;
