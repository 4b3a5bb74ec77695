//! Core data models for the pay engine.
//!
//! This module contains the input shift type and the calculation outputs.

mod calculation_result;
mod shift;

pub use calculation_result::{PayCalculation, ShiftDetail};
pub use shift::WorkShift;
