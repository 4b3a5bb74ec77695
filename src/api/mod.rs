//! HTTP API module for the pay engine.
//!
//! This module exposes the pay calculation as a stateless REST endpoint.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, DEFAULT_TAX_PERCENTAGE, ShiftRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
