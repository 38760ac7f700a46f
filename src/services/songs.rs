//! Songs service.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use tracing::debug;

use crate::{
    calculation::song_cost,
    error::MemorizerResult,
    models::{NewSong, Song},
    store::{Db, SqliteSongsRepository},
};

/// Songs service backed by SQLite.
#[derive(Debug, Clone)]
pub struct SqliteSongsService {
    db: Db,
    repository: SqliteSongsRepository,
}

impl SqliteSongsService {
    /// Creates a service over the given database.
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: SqliteSongsRepository::new(),
        }
    }
}

#[async_trait]
impl SongsService for SqliteSongsService {
    async fn list_songs(&self) -> MemorizerResult<Vec<Song>> {
        let mut tx = self.db.begin().await?;

        let songs = self.repository.list_songs(&mut tx).await?;

        tx.commit().await?;

        Ok(songs)
    }

    async fn create_song(&self, song: NewSong) -> MemorizerResult<Song> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_song(&mut tx, &song, song_cost())
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn delete_song(&self, id: i64) -> MemorizerResult<()> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_song(&mut tx, id).await?;

        tx.commit().await?;

        if rows_affected == 0 {
            debug!(song_id = id, "Song to delete did not exist");
        }

        Ok(())
    }
}

/// Recording, listing and removing out-of-queue song requests.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SongsService: Send + Sync {
    /// Retrieves all songs in storage order.
    async fn list_songs(&self) -> MemorizerResult<Vec<Song>>;

    /// Stores a new song request at the fixed song price, unpaid.
    async fn create_song(&self, song: NewSong) -> MemorizerResult<Song>;

    /// Removes a song permanently. Removing an unknown id succeeds.
    async fn delete_song(&self, id: i64) -> MemorizerResult<()>;
}
