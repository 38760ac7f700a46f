//! Pricing and aggregation logic for the Memorizer service.
//!
//! This module contains the pure calculation functions: the date-driven
//! shift pricing rule, the fixed song price, and the earnings summation used
//! by the statistics service.

mod earnings;
mod shift_cost;
mod song_cost;

pub use earnings::{Chargeable, calculate_earnings};
pub use shift_cost::{
    HOLIDAY_LAST_DAY, STANDARD_SHIFT_COST, ShiftRate, WEEKEND_SHIFT_COST, classify_shift_date,
    shift_cost,
};
pub use song_cost::{SONG_COST, song_cost};
