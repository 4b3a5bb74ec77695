//! Calculation result models for the pay engine.
//!
//! This module contains the [`PayCalculation`] type and the per-shift
//! [`ShiftDetail`] records it aggregates. Amounts are plain NOK values;
//! currency formatting belongs to the display layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The pay breakdown for a single shift.
///
/// # Example
///
/// ```
/// use pay_engine::models::ShiftDetail;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let detail = ShiftDetail {
///     shift_id: "shift_001".to_string(),
///     date: "onsdag 14. januar 2026".to_string(),
///     hours: Decimal::from(8),
///     base_wage: Decimal::from_str("1420.24").unwrap(),
///     allowances: Decimal::ZERO,
///     total: Decimal::from_str("1420.24").unwrap(),
///     breakdown: vec![],
/// };
/// assert_eq!(detail.total, detail.base_wage + detail.allowances);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftDetail {
    /// The ID of the shift this detail was computed from.
    pub shift_id: String,
    /// The shift date in long Norwegian form, e.g. "lørdag 17. januar 2026".
    pub date: String,
    /// Hours worked in the shift.
    pub hours: Decimal,
    /// Hours multiplied by the base hourly wage.
    pub base_wage: Decimal,
    /// Sum of all allowance surcharges for the shift.
    pub allowances: Decimal,
    /// Base wage plus allowances.
    pub total: Decimal,
    /// One line per allowance-bearing segment, in time order.
    pub breakdown: Vec<String>,
}

/// The aggregate result of a pay calculation.
///
/// `Default` is the result for an empty shift list: all totals zero and no
/// details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayCalculation {
    /// Total base wage across all shifts.
    pub base_wage: Decimal,
    /// Total allowances across all shifts.
    pub allowances: Decimal,
    /// Base wage plus allowances; the taxable amount.
    pub total_before_tax: Decimal,
    /// Tax withheld from the taxable amount.
    pub tax: Decimal,
    /// Total before tax minus tax.
    pub net_pay: Decimal,
    /// Total hours worked across all shifts.
    pub hours_worked: Decimal,
    /// One detail per input shift, in input order.
    pub details: Vec<ShiftDetail>,
}
