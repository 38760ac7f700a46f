//! Earnings and payout views.

use serde::{Deserialize, Serialize};

/// Aggregate earnings across all shifts and songs.
///
/// # Example
///
/// ```
/// use memorizer::models::Earnings;
///
/// let earnings = Earnings::default();
/// assert_eq!(
///     serde_json::to_string(&earnings).unwrap(),
///     r#"{"lifetimeEarnings":0,"currentBalance":0}"#
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Earnings {
    /// Sum of the cost of every record, paid or not.
    pub lifetime_earnings: i64,
    /// Sum of the cost of records not yet paid out.
    pub current_balance: i64,
}

/// What a single payout run changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PayoutSummary {
    /// Shifts flipped from unpaid to paid.
    pub shifts_paid: u64,
    /// Songs flipped from unpaid to paid.
    pub songs_paid: u64,
}

impl PayoutSummary {
    /// Total number of records flipped to paid.
    pub fn total(&self) -> u64 {
        self.shifts_paid + self.songs_paid
    }
}
