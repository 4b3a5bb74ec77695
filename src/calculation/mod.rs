//! Calculation logic for the pay engine.
//!
//! This module contains the three stages of a pay calculation: time parsing
//! and day detection, splitting a shift into allowance segments, and
//! aggregating shifts into totals with tax applied.

mod allowance_segments;
mod date_format;
mod day_detection;
mod pay_calculator;
mod time_parsing;

pub use allowance_segments::{
    SUNDAY_LABEL, Segment, ShiftAllowance, calculate_shift_allowance, split_into_segments,
};
pub use date_format::format_shift_date;
pub use day_detection::{DayType, get_day_type};
pub use pay_calculator::{calculate_shift_detail, calculate_total_pay, calculate_total_pay_default};
pub use time_parsing::{HOURS_PER_DAY, parse_time, time_in_hours};
