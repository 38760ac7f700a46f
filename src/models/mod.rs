//! Core data models for the Memorizer service.
//!
//! This module contains the stored records and the earnings views built from them.

mod earnings;
mod shift;
mod song;

pub use earnings::{Earnings, PayoutSummary};
pub use shift::{NewShift, Shift};
pub use song::{NewSong, Song};
