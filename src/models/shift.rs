//! Work shift model.
//!
//! This module defines the [`WorkShift`] struct the engine consumes. A shift
//! is a single wall-clock interval on one calendar date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::time_in_hours;
use crate::error::{EngineError, EngineResult};

/// Represents one work shift entered by the caller.
///
/// Start and end are "HH:MM" wall-clock times on `date`. Shifts crossing
/// midnight are not supported: the end must not be earlier than the start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkShift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The date of the shift (used for determining day type).
    pub date: NaiveDate,
    /// The start time of the shift, "HH:MM".
    pub start_time: String,
    /// The end time of the shift, "HH:MM".
    pub end_time: String,
}

impl WorkShift {
    /// Creates a new shift.
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// Returns the shift bounds as fractional hours since midnight.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidTime`] if either time is not a valid "HH:MM" value
    /// - [`EngineError::InvalidShift`] if the end is earlier than the start
    ///
    /// # Examples
    ///
    /// ```
    /// use pay_engine::models::WorkShift;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let shift = WorkShift::new(
    ///     "shift_001",
    ///     NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
    ///     "16:30",
    ///     "22:00",
    /// );
    /// let (start, end) = shift.hour_bounds().unwrap();
    /// assert_eq!(start, Decimal::new(165, 1));
    /// assert_eq!(end, Decimal::from(22));
    /// ```
    pub fn hour_bounds(&self) -> EngineResult<(Decimal, Decimal)> {
        let start = time_in_hours(&self.start_time)?;
        let end = time_in_hours(&self.end_time)?;

        if end < start {
            return Err(EngineError::InvalidShift {
                shift_id: self.id.clone(),
                message: format!(
                    "end time {} is before start time {} (shifts crossing midnight are not supported)",
                    self.end_time, self.start_time
                ),
            });
        }

        Ok((start, end))
    }
}
