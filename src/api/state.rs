//! Application state for the pay engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, PayRates};

/// Shared application state.
///
/// Holds the rate table, which is read-only for the lifetime of the server.
#[derive(Clone)]
pub struct AppState {
    rates: Arc<PayRates>,
}

impl AppState {
    /// Creates a new application state with the given rate table.
    pub fn new(rates: PayRates) -> Self {
        Self {
            rates: Arc::new(rates),
        }
    }

    /// Creates a new application state from a configuration loader.
    pub fn from_loader(loader: ConfigLoader) -> Self {
        Self::new(loader.into_rates())
    }

    /// Returns a reference to the rate table.
    pub fn rates(&self) -> &PayRates {
        &self.rates
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PayRates::default())
    }
}
