//! Request types for the pay engine API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::WorkShift;

/// Tax percentage used when the request does not specify one.
pub const DEFAULT_TAX_PERCENTAGE: Decimal = Decimal::from_parts(35, 0, 0, false, 0);

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The shifts to price, in display order.
    pub shifts: Vec<ShiftRequest>,
    /// Flat tax percentage applied to the total before tax.
    #[serde(default = "default_tax_percentage")]
    pub tax_percentage: Decimal,
}

fn default_tax_percentage() -> Decimal {
    DEFAULT_TAX_PERCENTAGE
}

/// Shift information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Unique identifier for the shift.
    pub id: String,
    /// The date of the shift.
    pub date: NaiveDate,
    /// The start time of the shift, "HH:MM".
    pub start_time: String,
    /// The end time of the shift, "HH:MM".
    pub end_time: String,
}

impl From<ShiftRequest> for WorkShift {
    fn from(req: ShiftRequest) -> Self {
        WorkShift {
            id: req.id,
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
        }
    }
}
