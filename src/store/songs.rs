//! Songs repository

use sqlx::{FromRow, Row, Sqlite, Transaction, query, query_as, sqlite::SqliteRow};

use crate::models::{NewSong, Song};

const CREATE_SONG_SQL: &str = include_str!("sql/create_song.sql");
const LIST_SONGS_SQL: &str = include_str!("sql/list_songs.sql");
const DELETE_SONG_SQL: &str = include_str!("sql/delete_song.sql");
const MARK_SONGS_PAID_SQL: &str = include_str!("sql/mark_songs_paid.sql");

/// Queries against the `songs` table.
#[derive(Debug, Clone, Default)]
pub struct SqliteSongsRepository;

impl SqliteSongsRepository {
    /// Creates the repository.
    pub fn new() -> Self {
        Self
    }

    /// Insert a song request with the given cost, unpaid.
    pub async fn create_song(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        song: &NewSong,
        cost: i64,
    ) -> Result<Song, sqlx::Error> {
        query_as::<Sqlite, Song>(CREATE_SONG_SQL)
            .bind(song.title.as_deref())
            .bind(song.artist.as_deref())
            .bind(song.added_by.as_deref())
            .bind(cost)
            .fetch_one(&mut **tx)
            .await
    }

    /// All songs in storage order.
    pub async fn list_songs(&self, tx: &mut Transaction<'_, Sqlite>) -> Result<Vec<Song>, sqlx::Error> {
        query_as::<Sqlite, Song>(LIST_SONGS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    /// Remove a song. Returns the number of rows removed (0 when absent).
    pub async fn delete_song(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_SONG_SQL)
            .bind(id)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Flip every unpaid song to paid. Already-paid rows are not written.
    pub async fn mark_all_paid(&self, tx: &mut Transaction<'_, Sqlite>) -> Result<u64, sqlx::Error> {
        let rows_affected = query(MARK_SONGS_PAID_SQL)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Song {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            artist: row.try_get("artist")?,
            added_by: row.try_get("added_by")?,
            cost: row.try_get::<Option<i64>, _>("cost")?.unwrap_or(0),
            paid: row.try_get("paid")?,
        })
    }
}
