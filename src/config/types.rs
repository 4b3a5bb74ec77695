//! Configuration types for pay calculation.
//!
//! This module contains the strongly-typed rate structures that are either
//! built from the agreement constants or deserialized from a YAML file.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The fixed base hourly wage in NOK (177.53).
pub const BASE_HOURLY_WAGE: Decimal = Decimal::from_parts(17753, 0, 0, false, 2);

/// Weekday surcharge between 18:00 and 21:00, NOK per hour.
pub const WEEKDAY_AFTER_18: Decimal = Decimal::from_parts(22, 0, 0, false, 0);
/// Weekday surcharge after 21:00, NOK per hour.
pub const WEEKDAY_AFTER_21: Decimal = Decimal::from_parts(45, 0, 0, false, 0);
/// Saturday surcharge between 13:00 and 15:00, NOK per hour.
pub const SATURDAY_AFTER_13: Decimal = Decimal::from_parts(45, 0, 0, false, 0);
/// Saturday surcharge between 15:00 and 18:00, NOK per hour.
pub const SATURDAY_AFTER_15: Decimal = Decimal::from_parts(55, 0, 0, false, 0);
/// Saturday surcharge after 18:00, NOK per hour.
pub const SATURDAY_AFTER_18: Decimal = Decimal::from_parts(110, 0, 0, false, 0);
/// Flat Sunday surcharge for every hour worked, NOK per hour.
pub const SUNDAY: Decimal = Decimal::from_parts(115, 0, 0, false, 0);

/// Allowance surcharges keyed by time window.
///
/// Every rate is an amount in NOK added per hour worked inside the window.
///
/// # Example
///
/// ```
/// use pay_engine::config::AllowanceRates;
/// use rust_decimal::Decimal;
///
/// let rates = AllowanceRates::default();
/// assert_eq!(rates.sunday, Decimal::from(115));
/// assert_eq!(rates.weekday_after_18, Decimal::from(22));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceRates {
    /// Weekday 18:00-21:00.
    pub weekday_after_18: Decimal,
    /// Weekday after 21:00.
    pub weekday_after_21: Decimal,
    /// Saturday 13:00-15:00.
    pub saturday_after_13: Decimal,
    /// Saturday 15:00-18:00.
    pub saturday_after_15: Decimal,
    /// Saturday after 18:00.
    pub saturday_after_18: Decimal,
    /// Sunday, all day.
    pub sunday: Decimal,
}

impl Default for AllowanceRates {
    fn default() -> Self {
        Self {
            weekday_after_18: WEEKDAY_AFTER_18,
            weekday_after_21: WEEKDAY_AFTER_21,
            saturday_after_13: SATURDAY_AFTER_13,
            saturday_after_15: SATURDAY_AFTER_15,
            saturday_after_18: SATURDAY_AFTER_18,
            sunday: SUNDAY,
        }
    }
}

/// The complete rate table used by the engine.
///
/// Built once at start-up and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRates {
    /// The base wage paid for every hour worked.
    pub base_hourly_wage: Decimal,
    /// Time-window surcharges on top of the base wage.
    pub allowances: AllowanceRates,
}

impl Default for PayRates {
    fn default() -> Self {
        Self {
            base_hourly_wage: BASE_HOURLY_WAGE,
            allowances: AllowanceRates::default(),
        }
    }
}
