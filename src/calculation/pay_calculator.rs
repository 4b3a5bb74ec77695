//! Pay aggregation and tax.
//!
//! This module turns a list of shifts into a [`PayCalculation`]: each shift
//! is classified, split into allowance segments and priced, then the totals
//! are summed in input order and the flat tax rate is applied.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PayRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{PayCalculation, ShiftDetail, WorkShift};

use super::{calculate_shift_allowance, format_shift_date, get_day_type};

/// Prices a single shift.
///
/// # Errors
///
/// Fails if the shift times are malformed, if the shift crosses midnight,
/// or if the amounts overflow.
///
/// # Example
///
/// ```
/// use pay_engine::calculation::calculate_shift_detail;
/// use pay_engine::config::PayRates;
/// use pay_engine::models::WorkShift;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // Sunday 10:00-14:00
/// let shift = WorkShift::new(
///     "shift_001",
///     NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
///     "10:00",
///     "14:00",
/// );
/// let detail = calculate_shift_detail(&shift, &PayRates::default()).unwrap();
/// assert_eq!(detail.hours, Decimal::from(4));
/// assert_eq!(detail.allowances, Decimal::from(460));
/// ```
pub fn calculate_shift_detail(shift: &WorkShift, rates: &PayRates) -> EngineResult<ShiftDetail> {
    let (start, end) = shift.hour_bounds()?;
    let day_type = get_day_type(shift.date);

    let allowance = calculate_shift_allowance(day_type, start, end, &rates.allowances)?;

    let base_wage = allowance
        .hours
        .checked_mul(rates.base_hourly_wage)
        .ok_or_else(|| EngineError::overflow("base wage"))?;
    let total = base_wage
        .checked_add(allowance.allowance)
        .ok_or_else(|| EngineError::overflow("shift total"))?;

    Ok(ShiftDetail {
        shift_id: shift.id.clone(),
        date: format_shift_date(shift.date),
        hours: allowance.hours,
        base_wage,
        allowances: allowance.allowance,
        total,
        breakdown: allowance.breakdown,
    })
}

/// Calculates total pay for a list of shifts.
///
/// The tax percentage is applied to the total before tax and is not range
/// checked. An empty shift list yields an all-zero result.
///
/// # Errors
///
/// Returns the first error raised while pricing a shift (see
/// [`calculate_shift_detail`]), or [`EngineError::CalculationError`] if a
/// total overflows.
///
/// # Example
///
/// ```
/// use pay_engine::calculation::calculate_total_pay;
/// use pay_engine::config::PayRates;
/// use pay_engine::models::WorkShift;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // Wednesday 09:00-17:00, 8 hours of regular time
/// let shifts = vec![WorkShift::new(
///     "shift_001",
///     NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
///     "09:00",
///     "17:00",
/// )];
///
/// let result = calculate_total_pay(&shifts, Decimal::from(35), &PayRates::default()).unwrap();
/// assert_eq!(result.hours_worked, Decimal::from(8));
/// assert_eq!(result.base_wage, Decimal::new(142024, 2));
/// assert_eq!(result.net_pay + result.tax, result.total_before_tax);
/// ```
pub fn calculate_total_pay(
    shifts: &[WorkShift],
    tax_percentage: Decimal,
    rates: &PayRates,
) -> EngineResult<PayCalculation> {
    let mut total_base_wage = Decimal::ZERO;
    let mut total_allowances = Decimal::ZERO;
    let mut total_hours = Decimal::ZERO;
    let mut details = Vec::with_capacity(shifts.len());

    for shift in shifts {
        let detail = calculate_shift_detail(shift, rates)?;

        total_hours = total_hours
            .checked_add(detail.hours)
            .ok_or_else(|| EngineError::overflow("hours worked"))?;
        total_base_wage = total_base_wage
            .checked_add(detail.base_wage)
            .ok_or_else(|| EngineError::overflow("total base wage"))?;
        total_allowances = total_allowances
            .checked_add(detail.allowances)
            .ok_or_else(|| EngineError::overflow("total allowances"))?;

        details.push(detail);
    }

    let total_before_tax = total_base_wage
        .checked_add(total_allowances)
        .ok_or_else(|| EngineError::overflow("total before tax"))?;
    let tax = total_before_tax
        .checked_mul(tax_percentage)
        .ok_or_else(|| EngineError::overflow("tax"))?
        / Decimal::ONE_HUNDRED;
    let net_pay = total_before_tax
        .checked_sub(tax)
        .ok_or_else(|| EngineError::overflow("net pay"))?;

    debug!(
        shifts_count = shifts.len(),
        hours_worked = %total_hours,
        total_before_tax = %total_before_tax,
        tax_percentage = %tax_percentage,
        "Calculated total pay"
    );

    Ok(PayCalculation {
        base_wage: total_base_wage,
        allowances: total_allowances,
        total_before_tax,
        tax,
        net_pay,
        hours_worked: total_hours,
        details,
    })
}

/// Calculates total pay using the built-in agreement rates.
pub fn calculate_total_pay_default(
    shifts: &[WorkShift],
    tax_percentage: Decimal,
) -> EngineResult<PayCalculation> {
    calculate_total_pay(shifts, tax_percentage, &PayRates::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_shift(id: &str, date: &str, start: &str, end: &str) -> WorkShift {
        WorkShift::new(
            id,
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            start,
            end,
        )
    }

    fn rates() -> PayRates {
        PayRates::default()
    }

    #[test]
    fn test_empty_shift_list_yields_zero_result() {
        let result = calculate_total_pay(&[], dec("35"), &rates()).unwrap();
        assert_eq!(result, PayCalculation::default());
    }

    #[test]
    fn test_weekday_daytime_shift_pays_base_wage_only() {
        // Wednesday 08:00-16:00
        let shifts = vec![make_shift("s1", "2026-01-14", "08:00", "16:00")];
        let result = calculate_total_pay(&shifts, Decimal::ZERO, &rates()).unwrap();

        assert_eq!(result.hours_worked, dec("8"));
        assert_eq!(result.base_wage, dec("1420.24"));
        assert_eq!(result.allowances, Decimal::ZERO);
        assert_eq!(result.total_before_tax, dec("1420.24"));
        assert_eq!(result.tax, Decimal::ZERO);
        assert_eq!(result.net_pay, dec("1420.24"));
    }

    #[test]
    fn test_weekday_evening_shift_detail() {
        // Tuesday 17:00-22:00
        let shifts = vec![make_shift("s1", "2026-01-13", "17:00", "22:00")];
        let result = calculate_total_pay(&shifts, dec("35"), &rates()).unwrap();

        let detail = &result.details[0];
        assert_eq!(detail.shift_id, "s1");
        assert_eq!(detail.date, "tirsdag 13. januar 2026");
        assert_eq!(detail.hours, dec("5"));
        assert_eq!(detail.base_wage, dec("887.65"));
        assert_eq!(detail.allowances, dec("111"));
        assert_eq!(detail.total, dec("998.65"));
        assert_eq!(detail.breakdown.len(), 2);
    }

    #[test]
    fn test_saturday_shift_totals_and_tax() {
        // Saturday 12:00-19:00
        let shifts = vec![make_shift("s1", "2026-01-17", "12:00", "19:00")];
        let result = calculate_total_pay(&shifts, dec("35"), &rates()).unwrap();

        // 7 × 177.53 = 1242.71, allowances 365
        assert_eq!(result.base_wage, dec("1242.71"));
        assert_eq!(result.allowances, dec("365"));
        assert_eq!(result.total_before_tax, dec("1607.71"));
        assert_eq!(result.tax, dec("562.6985"));
        assert_eq!(result.net_pay, dec("1045.0115"));
    }

    #[test]
    fn test_sunday_allowance_is_hours_times_flat_rate() {
        for (start, end, expected) in [
            ("00:00", "06:00", "690"),
            ("09:30", "15:00", "632.5"),
            ("18:00", "23:45", "661.25"),
        ] {
            let shifts = vec![make_shift("s1", "2026-01-18", start, end)];
            let result = calculate_total_pay(&shifts, Decimal::ZERO, &rates()).unwrap();
            assert_eq!(result.allowances, dec(expected), "{}-{}", start, end);
        }
    }

    #[test]
    fn test_details_preserve_input_order_and_sum_to_totals() {
        let shifts = vec![
            make_shift("sun", "2026-01-18", "10:00", "14:00"),
            make_shift("mon", "2026-01-12", "16:00", "21:30"),
            make_shift("sat", "2026-01-17", "14:00", "18:30"),
        ];
        let result = calculate_total_pay(&shifts, dec("30"), &rates()).unwrap();

        let ids: Vec<&str> = result.details.iter().map(|d| d.shift_id.as_str()).collect();
        assert_eq!(ids, vec!["sun", "mon", "sat"]);

        let hours: Decimal = result.details.iter().map(|d| d.hours).sum();
        let base: Decimal = result.details.iter().map(|d| d.base_wage).sum();
        let allowances: Decimal = result.details.iter().map(|d| d.allowances).sum();
        assert_eq!(hours, result.hours_worked);
        assert_eq!(base, result.base_wage);
        assert_eq!(allowances, result.allowances);
        assert_eq!(result.hours_worked, dec("14"));
    }

    #[test]
    fn test_net_pay_plus_tax_equals_total_before_tax() {
        let shifts = vec![
            make_shift("s1", "2026-01-15", "15:15", "22:45"),
            make_shift("s2", "2026-01-17", "11:45", "20:30"),
        ];
        for pct in ["0", "12.5", "33.333", "50", "100"] {
            let result = calculate_total_pay(&shifts, dec(pct), &rates()).unwrap();
            assert_eq!(result.net_pay + result.tax, result.total_before_tax, "{}", pct);
        }
    }

    #[test]
    fn test_tax_percentage_is_not_range_checked() {
        let shifts = vec![make_shift("s1", "2026-01-14", "08:00", "16:00")];
        let result = calculate_total_pay(&shifts, dec("150"), &rates()).unwrap();
        assert_eq!(result.tax, dec("2130.36"));
        assert_eq!(result.net_pay, dec("-710.12"));
    }

    #[test]
    fn test_same_input_gives_identical_output() {
        let shifts = vec![
            make_shift("s1", "2026-01-16", "17:15", "23:00"),
            make_shift("s2", "2026-01-18", "08:00", "12:00"),
        ];
        let first = calculate_total_pay(&shifts, dec("35"), &rates()).unwrap();
        let second = calculate_total_pay(&shifts, dec("35"), &rates()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_time_aborts_calculation() {
        let shifts = vec![
            make_shift("s1", "2026-01-14", "08:00", "16:00"),
            make_shift("s2", "2026-01-14", "8am", "16:00"),
        ];
        let result = calculate_total_pay(&shifts, dec("35"), &rates());
        match result {
            Err(EngineError::InvalidTime { value, .. }) => assert_eq!(value, "8am"),
            other => panic!("Expected InvalidTime error, got {:?}", other),
        }
    }

    #[test]
    fn test_overnight_shift_aborts_calculation() {
        let shifts = vec![make_shift("night", "2026-01-14", "22:00", "02:00")];
        let result = calculate_total_pay(&shifts, dec("35"), &rates());
        assert!(matches!(
            result,
            Err(EngineError::InvalidShift { shift_id, .. }) if shift_id == "night"
        ));
    }

    #[test]
    fn test_tax_overflow_is_reported() {
        let shifts = vec![make_shift("s1", "2026-01-14", "08:00", "16:00")];
        let result = calculate_total_pay(&shifts, Decimal::MAX, &rates());
        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }

    #[test]
    fn test_oversized_sunday_rate_returns_calculation_error() {
        let mut custom = PayRates::default();
        custom.allowances.sunday = Decimal::MAX;
        let shifts = vec![make_shift("s1", "2026-01-18", "00:00", "02:00")];

        let result = calculate_total_pay(&shifts, dec("35"), &custom);
        match result {
            Err(EngineError::CalculationError { message }) => {
                assert!(message.contains("allowance"), "{}", message)
            }
            other => panic!("Expected CalculationError, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_base_wage_is_used() {
        let custom = PayRates {
            base_hourly_wage: dec("200"),
            ..PayRates::default()
        };
        let shifts = vec![make_shift("s1", "2026-01-14", "08:00", "10:00")];
        let result = calculate_total_pay(&shifts, Decimal::ZERO, &custom).unwrap();
        assert_eq!(result.base_wage, dec("400"));
    }

    #[test]
    fn test_default_rates_helper_matches_explicit_rates() {
        let shifts = vec![make_shift("s1", "2026-01-17", "12:00", "19:00")];
        assert_eq!(
            calculate_total_pay_default(&shifts, dec("35")).unwrap(),
            calculate_total_pay(&shifts, dec("35"), &rates()).unwrap()
        );
    }
}
