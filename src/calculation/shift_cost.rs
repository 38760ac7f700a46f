//! Shift pricing rule.
//!
//! A shift costs the standard rate, Friday and Saturday shifts cost the
//! weekend rate, and the New Year holiday window (1-12 January) always costs
//! the standard rate, whatever day of the week it falls on.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Cost of a standard shift (and of any shift in the holiday window).
pub const STANDARD_SHIFT_COST: i64 = 3000;

/// Cost of a Friday or Saturday shift outside the holiday window.
pub const WEEKEND_SHIFT_COST: i64 = 4000;

/// Last day of January that belongs to the holiday window.
pub const HOLIDAY_LAST_DAY: u32 = 12;

/// The rate that applies to a shift date.
///
/// # Example
///
/// ```
/// use memorizer::calculation::ShiftRate;
///
/// assert_eq!(ShiftRate::Weekend.cost(), 4000);
/// assert_eq!(ShiftRate::Holiday.to_string(), "Holiday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftRate {
    /// 1-12 January. Overrides the weekend rate.
    Holiday,
    /// Friday or Saturday.
    Weekend,
    /// Any other day.
    Standard,
}

impl ShiftRate {
    /// Returns the cost charged for a shift at this rate.
    pub fn cost(self) -> i64 {
        match self {
            ShiftRate::Holiday | ShiftRate::Standard => STANDARD_SHIFT_COST,
            ShiftRate::Weekend => WEEKEND_SHIFT_COST,
        }
    }
}

impl std::fmt::Display for ShiftRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftRate::Holiday => write!(f, "Holiday"),
            ShiftRate::Weekend => write!(f, "Weekend"),
            ShiftRate::Standard => write!(f, "Standard"),
        }
    }
}

/// Determines which rate applies to a shift on the given date.
///
/// Rules are checked in priority order: the holiday window first, then the
/// Friday/Saturday weekend rate, otherwise the standard rate.
///
/// # Example
///
/// ```
/// use memorizer::calculation::{classify_shift_date, ShiftRate};
/// use chrono::NaiveDate;
///
/// // 2025-01-10 is a Friday inside the holiday window
/// let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
/// assert_eq!(classify_shift_date(date), ShiftRate::Holiday);
///
/// // 2025-01-17 is a Friday
/// let date = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
/// assert_eq!(classify_shift_date(date), ShiftRate::Weekend);
/// ```
pub fn classify_shift_date(date: NaiveDate) -> ShiftRate {
    if is_holiday(date) {
        return ShiftRate::Holiday;
    }

    match date.weekday() {
        Weekday::Fri | Weekday::Sat => ShiftRate::Weekend,
        _ => ShiftRate::Standard,
    }
}

/// Returns the cost of a shift worked on the given date.
///
/// # Example
///
/// ```
/// use memorizer::calculation::shift_cost;
/// use chrono::NaiveDate;
///
/// // 2025-01-20 is a Monday
/// assert_eq!(shift_cost(NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()), 3000);
/// ```
pub fn shift_cost(date: NaiveDate) -> i64 {
    classify_shift_date(date).cost()
}

fn is_holiday(date: NaiveDate) -> bool {
    date.month() == 1 && date.day() <= HOLIDAY_LAST_DAY
}
