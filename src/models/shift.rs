//! Shift model and related types.
//!
//! This module defines the stored [`Shift`] record and the [`NewShift`]
//! input used to create one.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// A worked shift as stored in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    /// Store-assigned identifier, unique among shifts.
    pub id: i64,
    /// Name of the person who worked the shift.
    pub worker_name: Option<String>,
    /// The calendar date of the shift (drives the cost).
    pub date: NaiveDate,
    /// When the shift started. Informational only.
    pub start_time: Option<NaiveTime>,
    /// When the shift ended. Informational only.
    pub end_time: Option<NaiveTime>,
    /// Cost assigned by the shift pricing rule at creation.
    pub cost: i64,
    /// Whether the shift has been included in a payout.
    pub paid: bool,
}

impl Shift {
    /// Returns the day of the week for the shift.
    ///
    /// # Examples
    ///
    /// ```
    /// use memorizer::models::Shift;
    /// use chrono::{NaiveDate, Weekday};
    ///
    /// let shift = Shift {
    ///     id: 1,
    ///     worker_name: None,
    ///     date: NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(), // Friday
    ///     start_time: None,
    ///     end_time: None,
    ///     cost: 4000,
    ///     paid: false,
    /// };
    /// assert_eq!(shift.day_of_week(), Weekday::Fri);
    /// ```
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }
}

/// The client-controlled fields of a shift to be recorded.
///
/// Identifier, cost and paid flag are never taken from the client; they are
/// assigned by the store and the pricing rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShift {
    /// Name of the person who worked the shift.
    pub worker_name: Option<String>,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// When the shift started.
    pub start_time: Option<NaiveTime>,
    /// When the shift ended.
    pub end_time: Option<NaiveTime>,
}
