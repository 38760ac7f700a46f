//! Request types for the Memorizer API.
//!
//! Create bodies accept the full record shape, but only the client-owned
//! fields are read. `id`, `cost` and `paid` are silently ignored.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{NewShift, NewSong};

/// Request body for `POST /api/shifts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRequest {
    /// Name of the person who worked the shift.
    #[serde(default)]
    pub worker_name: Option<String>,
    /// The calendar date of the shift. Required.
    pub date: NaiveDate,
    /// When the shift started.
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    /// When the shift ended.
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
}

/// Request body for `POST /api/songs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongRequest {
    /// Song title.
    #[serde(default)]
    pub title: Option<String>,
    /// Performing artist.
    #[serde(default)]
    pub artist: Option<String>,
    /// Who asked for the song.
    #[serde(default)]
    pub added_by: Option<String>,
}

impl From<ShiftRequest> for NewShift {
    fn from(req: ShiftRequest) -> Self {
        NewShift {
            worker_name: req.worker_name,
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
        }
    }
}

impl From<SongRequest> for NewSong {
    fn from(req: SongRequest) -> Self {
        NewSong {
            title: req.title,
            artist: req.artist,
            added_by: req.added_by,
        }
    }
}
