//! Song pricing rule.

/// Fixed price of an out-of-queue song request.
pub const SONG_COST: i64 = 1000;

/// Returns the cost of a song request. Every song costs the same.
pub fn song_cost() -> i64 {
    SONG_COST
}
