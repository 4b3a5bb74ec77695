//! Wall-clock time parsing.
//!
//! Converts "HH:MM" strings into fractional hours since midnight, the unit
//! every segment bound is expressed in.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Number of hours in a day; "24:00" is the latest accepted time.
pub const HOURS_PER_DAY: u32 = 24;

const MINUTES_PER_HOUR: u32 = 60;

/// `NaiveTime` stops at 23:59:59, so the end-of-day bound is matched as text.
const END_OF_DAY: &str = "24:00";

const TIME_FORMAT: &str = "%H:%M";

/// Splits an "HH:MM" string into its hour and minute parts.
///
/// One- or two-digit hours are accepted ("9:30" and "09:30" are equal).
/// "24:00" is accepted as the end-of-day bound.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTime`] if the string is not an "HH:MM"
/// time between 00:00 and 24:00.
///
/// # Example
///
/// ```
/// use pay_engine::calculation::parse_time;
///
/// assert_eq!(parse_time("16:45").unwrap(), (16, 45));
/// assert!(parse_time("16.45").is_err());
/// ```
pub fn parse_time(value: &str) -> EngineResult<(u32, u32)> {
    let trimmed = value.trim();
    if trimmed == END_OF_DAY {
        return Ok((HOURS_PER_DAY, 0));
    }

    let time = NaiveTime::parse_from_str(trimmed, TIME_FORMAT).map_err(|err| {
        EngineError::InvalidTime {
            value: value.to_string(),
            message: format!("expected HH:MM between 00:00 and 24:00 ({})", err),
        }
    })?;

    Ok((time.hour(), time.minute()))
}

/// Converts an "HH:MM" string to fractional hours (hours + minutes / 60).
///
/// # Example
///
/// ```
/// use pay_engine::calculation::time_in_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(time_in_hours("16:30").unwrap(), Decimal::new(165, 1));
/// assert_eq!(time_in_hours("24:00").unwrap(), Decimal::from(24));
/// ```
pub fn time_in_hours(value: &str) -> EngineResult<Decimal> {
    let (hours, minutes) = parse_time(value)?;
    Ok(Decimal::from(hours) + Decimal::from(minutes) / Decimal::from(MINUTES_PER_HOUR))
}
