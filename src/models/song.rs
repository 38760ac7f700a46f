//! Song model.
//!
//! An out-of-queue song request, charged at a fixed price.

use serde::{Deserialize, Serialize};

/// An out-of-queue song request as stored in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Store-assigned identifier, unique among songs.
    pub id: i64,
    /// Song title.
    pub title: Option<String>,
    /// Performing artist.
    pub artist: Option<String>,
    /// Who asked for the song.
    pub added_by: Option<String>,
    /// Cost assigned by the song pricing rule at creation.
    pub cost: i64,
    /// Whether the song has been included in a payout.
    pub paid: bool,
}

/// The client-controlled fields of a song request to be recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewSong {
    /// Song title.
    pub title: Option<String>,
    /// Performing artist.
    pub artist: Option<String>,
    /// Who asked for the song.
    pub added_by: Option<String>,
}
