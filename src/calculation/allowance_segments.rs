//! Allowance segment generation.
//!
//! A shift is partitioned into [`Segment`]s, each carrying exactly one
//! allowance rate. Which windows exist depends on the [`DayType`]:
//!
//! | Day      | Windows                                              |
//! |----------|------------------------------------------------------|
//! | Weekday  | before 18:00 (none), 18:00-21:00, after 21:00        |
//! | Saturday | before 13:00 (none), 13:00-15:00, 15:00-18:00, after 18:00 |
//! | Sunday   | the whole shift at the flat Sunday rate              |
//!
//! Segments are emitted in time order, cover `[start, end)` without gaps or
//! overlaps, and never have zero length (except the single Sunday segment of
//! a zero-length shift).

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AllowanceRates;
use crate::error::{EngineError, EngineResult};

use super::DayType;
use super::time_parsing::HOURS_PER_DAY;

/// Label used for the single Sunday segment.
pub const SUNDAY_LABEL: &str = "Sunday allowance";

/// A sub-interval of one shift paid at a single allowance rate.
///
/// # Example
///
/// ```
/// use pay_engine::calculation::Segment;
/// use rust_decimal::Decimal;
///
/// let segment = Segment {
///     start_hour: Decimal::from(18),
///     end_hour: Decimal::from(21),
///     rate: Decimal::from(22),
///     label: "Weekday (18:00-21:00)".to_string(),
/// };
/// assert_eq!(segment.hours(), Decimal::from(3));
/// assert_eq!(segment.allowance().unwrap(), Decimal::from(66));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Start of the segment in fractional hours since midnight.
    pub start_hour: Decimal,
    /// End of the segment in fractional hours since midnight.
    pub end_hour: Decimal,
    /// Allowance paid per hour inside the segment (zero for regular time).
    pub rate: Decimal,
    /// Human-readable name of the window.
    pub label: String,
}

impl Segment {
    /// Hours covered by the segment.
    pub fn hours(&self) -> Decimal {
        self.end_hour - self.start_hour
    }

    /// Allowance earned in the segment (hours × rate).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalculationError`] if the product overflows.
    pub fn allowance(&self) -> EngineResult<Decimal> {
        self.hours()
            .checked_mul(self.rate)
            .ok_or_else(|| EngineError::overflow("segment allowance"))
    }

    /// Renders the breakdown line for this segment.
    ///
    /// Format: `"<label>: <hours> hours × <rate> NOK = <amount> NOK"` with
    /// hours and amount shown to two decimals.
    ///
    /// # Errors
    ///
    /// Fails like [`Segment::allowance`].
    pub fn describe(&self) -> EngineResult<String> {
        Ok(self.line(self.allowance()?))
    }

    fn line(&self, amount: Decimal) -> String {
        format!(
            "{}: {} hours × {} NOK = {} NOK",
            self.label,
            two_decimals(self.hours()),
            self.rate.normalize(),
            two_decimals(amount)
        )
    }
}

/// Formats a value with exactly two decimals, rounding half away from zero.
pub(crate) fn two_decimals(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

/// A time window of the rate table: `[start, end)` in hours since midnight.
#[derive(Debug, Clone, Copy)]
struct RateWindow {
    start: u32,
    end: u32,
    rate: Decimal,
    label: &'static str,
}

impl RateWindow {
    fn new(start: u32, end: u32, rate: Decimal, label: &'static str) -> Self {
        Self {
            start,
            end,
            rate,
            label,
        }
    }

    /// Clamps the shift to this window and emits a segment when the overlap
    /// is non-empty.
    fn clamp(&self, start: Decimal, end: Decimal) -> Option<Segment> {
        let clamped_start = start.max(Decimal::from(self.start));
        let clamped_end = end.min(Decimal::from(self.end));

        (clamped_end > clamped_start).then(|| Segment {
            start_hour: clamped_start,
            end_hour: clamped_end,
            rate: self.rate,
            label: self.label.to_string(),
        })
    }
}

fn weekday_windows(rates: &AllowanceRates) -> [RateWindow; 3] {
    [
        RateWindow::new(0, 18, Decimal::ZERO, "Regular (before 18:00)"),
        RateWindow::new(18, 21, rates.weekday_after_18, "Weekday (18:00-21:00)"),
        RateWindow::new(21, HOURS_PER_DAY, rates.weekday_after_21, "Weekday (after 21:00)"),
    ]
}

fn saturday_windows(rates: &AllowanceRates) -> [RateWindow; 4] {
    [
        RateWindow::new(0, 13, Decimal::ZERO, "Regular (before 13:00)"),
        RateWindow::new(13, 15, rates.saturday_after_13, "Saturday (13:00-15:00)"),
        RateWindow::new(15, 18, rates.saturday_after_15, "Saturday (15:00-18:00)"),
        RateWindow::new(18, HOURS_PER_DAY, rates.saturday_after_18, "Saturday (after 18:00)"),
    ]
}

fn clamp_all(windows: &[RateWindow], start: Decimal, end: Decimal) -> Vec<Segment> {
    windows
        .iter()
        .filter_map(|window| window.clamp(start, end))
        .collect()
}

fn sunday_segments(start: Decimal, end: Decimal, rates: &AllowanceRates) -> Vec<Segment> {
    vec![Segment {
        start_hour: start,
        end_hour: end,
        rate: rates.sunday,
        label: SUNDAY_LABEL.to_string(),
    }]
}

/// Splits `[start, end)` into allowance segments for the given day type.
///
/// `start` and `end` are fractional hours since midnight with
/// `start <= end`.
///
/// # Example
///
/// ```
/// use pay_engine::calculation::{DayType, split_into_segments};
/// use pay_engine::config::AllowanceRates;
/// use rust_decimal::Decimal;
///
/// let segments = split_into_segments(
///     DayType::Weekday,
///     Decimal::from(17),
///     Decimal::from(22),
///     &AllowanceRates::default(),
/// );
/// let rates: Vec<_> = segments.iter().map(|s| s.rate).collect();
/// assert_eq!(rates, vec![Decimal::ZERO, Decimal::from(22), Decimal::from(45)]);
/// ```
pub fn split_into_segments(
    day_type: DayType,
    start: Decimal,
    end: Decimal,
    rates: &AllowanceRates,
) -> Vec<Segment> {
    match day_type {
        DayType::Sunday => sunday_segments(start, end, rates),
        DayType::Saturday => clamp_all(&saturday_windows(rates), start, end),
        DayType::Weekday => clamp_all(&weekday_windows(rates), start, end),
    }
}

/// The allowance outcome for one shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAllowance {
    /// Total hours across all segments.
    pub hours: Decimal,
    /// Total allowance across all segments.
    pub allowance: Decimal,
    /// The segments the shift was split into, in time order.
    pub segments: Vec<Segment>,
    /// Breakdown lines for allowance-bearing segments only.
    pub breakdown: Vec<String>,
}

/// Splits a shift into segments and sums hours and allowances.
///
/// Regular-time segments (rate zero) count towards hours but are left out
/// of the breakdown. The Sunday segment is always listed.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] if an allowance overflows.
///
/// # Example
///
/// ```
/// use pay_engine::calculation::{DayType, calculate_shift_allowance};
/// use pay_engine::config::AllowanceRates;
/// use rust_decimal::Decimal;
///
/// // Saturday 12:00-19:00
/// let result = calculate_shift_allowance(
///     DayType::Saturday,
///     Decimal::from(12),
///     Decimal::from(19),
///     &AllowanceRates::default(),
/// )
/// .unwrap();
/// assert_eq!(result.hours, Decimal::from(7));
/// assert_eq!(result.allowance, Decimal::from(365));
/// assert_eq!(result.breakdown.len(), 3);
/// ```
pub fn calculate_shift_allowance(
    day_type: DayType,
    start: Decimal,
    end: Decimal,
    rates: &AllowanceRates,
) -> EngineResult<ShiftAllowance> {
    let segments = split_into_segments(day_type, start, end, rates);

    let mut hours = Decimal::ZERO;
    let mut allowance = Decimal::ZERO;
    let mut breakdown = Vec::new();

    for segment in &segments {
        let amount = segment.allowance()?;
        hours += segment.hours();
        allowance = allowance
            .checked_add(amount)
            .ok_or_else(|| EngineError::overflow("shift allowance"))?;

        if day_type == DayType::Sunday || segment.rate > Decimal::ZERO {
            breakdown.push(segment.line(amount));
        }
    }

    debug!(
        day_type = %day_type,
        start = %start,
        end = %end,
        segments = segments.len(),
        allowance = %allowance,
        "Split shift into allowance segments"
    );

    Ok(ShiftAllowance {
        hours,
        allowance,
        segments,
        breakdown,
    })
}
