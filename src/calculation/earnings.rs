//! Earnings aggregation.
//!
//! Sums record costs into lifetime earnings (everything ever recorded) and
//! the current balance (only what has not been paid out yet).

use crate::models::{Earnings, Shift, Song};

/// A ledger record that carries a cost and a paid flag.
pub trait Chargeable {
    /// The cost of the record. Never negative.
    fn cost(&self) -> i64;

    /// Whether the record has already been paid out.
    fn is_paid(&self) -> bool;
}

impl Chargeable for Shift {
    fn cost(&self) -> i64 {
        self.cost
    }

    fn is_paid(&self) -> bool {
        self.paid
    }
}

impl Chargeable for Song {
    fn cost(&self) -> i64 {
        self.cost
    }

    fn is_paid(&self) -> bool {
        self.paid
    }
}

/// Calculates lifetime earnings and the current unpaid balance.
///
/// Every shift and song contributes its cost to `lifetime_earnings`; only
/// unpaid records contribute to `current_balance`. Empty inputs yield zero
/// for both.
///
/// # Example
///
/// ```
/// use memorizer::calculation::calculate_earnings;
/// use memorizer::models::Song;
///
/// let songs = vec![
///     Song { id: 1, title: None, artist: None, added_by: None, cost: 1000, paid: true },
///     Song { id: 2, title: None, artist: None, added_by: None, cost: 1000, paid: false },
/// ];
///
/// let earnings = calculate_earnings(&[], &songs);
/// assert_eq!(earnings.lifetime_earnings, 2000);
/// assert_eq!(earnings.current_balance, 1000);
/// ```
pub fn calculate_earnings(shifts: &[Shift], songs: &[Song]) -> Earnings {
    let (shift_lifetime, shift_balance) = sum_costs(shifts);
    let (song_lifetime, song_balance) = sum_costs(songs);

    Earnings {
        lifetime_earnings: shift_lifetime + song_lifetime,
        current_balance: shift_balance + song_balance,
    }
}

fn sum_costs<T: Chargeable>(records: &[T]) -> (i64, i64) {
    records.iter().fold((0, 0), |(lifetime, balance), record| {
        let cost = record.cost();
        if record.is_paid() {
            (lifetime + cost, balance)
        } else {
            (lifetime + cost, balance + cost)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_shift(id: i64, cost: i64, paid: bool) -> Shift {
        Shift {
            id,
            worker_name: Some("Worker".to_string()),
            date: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
            start_time: None,
            end_time: None,
            cost,
            paid,
        }
    }

    fn make_song(id: i64, cost: i64, paid: bool) -> Song {
        Song {
            id,
            title: Some("Song".to_string()),
            artist: Some("Artist".to_string()),
            added_by: Some("Guest".to_string()),
            cost,
            paid,
        }
    }

    #[test]
    fn test_empty_ledger_has_zero_earnings() {
        let earnings = calculate_earnings(&[], &[]);
        assert_eq!(earnings, Earnings::default());
    }

    #[test]
    fn test_unpaid_records_count_towards_both_totals() {
        let earnings = calculate_earnings(&[make_shift(1, 3000, false)], &[make_song(1, 1000, false)]);
        assert_eq!(earnings.lifetime_earnings, 4000);
        assert_eq!(earnings.current_balance, 4000);
    }

    #[test]
    fn test_paid_records_only_count_towards_lifetime() {
        let shifts = vec![make_shift(1, 3000, false), make_shift(2, 3000, true)];
        let songs = vec![make_song(1, 1000, false)];

        let earnings = calculate_earnings(&shifts, &songs);
        assert_eq!(earnings.lifetime_earnings, 7000);
        assert_eq!(earnings.current_balance, 4000);
    }

    #[test]
    fn test_zero_cost_records_contribute_nothing() {
        let earnings = calculate_earnings(&[make_shift(1, 0, false)], &[make_song(1, 1000, false)]);
        assert_eq!(earnings.lifetime_earnings, 1000);
        assert_eq!(earnings.current_balance, 1000);
    }

    #[test]
    fn test_fully_paid_ledger_has_zero_balance() {
        let shifts = vec![make_shift(1, 4000, true), make_shift(2, 3000, true)];
        let songs = vec![make_song(1, 1000, true)];

        let earnings = calculate_earnings(&shifts, &songs);
        assert_eq!(earnings.lifetime_earnings, 8000);
        assert_eq!(earnings.current_balance, 0);
    }
}
