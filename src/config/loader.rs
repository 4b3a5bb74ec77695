//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a rate table
//! from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::PayRates;

/// Loads and provides access to the pay rate table.
///
/// # File Format
///
/// ```text
/// base_hourly_wage: "177.53"
/// allowances:
///   weekday_after_18: "22"
///   weekday_after_21: "45"
///   saturday_after_13: "45"
///   saturday_after_15: "55"
///   saturday_after_18: "110"
///   sunday: "115"
/// ```
///
/// # Example
///
/// ```no_run
/// use pay_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/coop_extra/rates.yaml").unwrap();
/// println!("Base wage: {} NOK/h", loader.rates().base_hourly_wage);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rates: PayRates,
}

impl ConfigLoader {
    /// Loads the rate table from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML or a required field is missing
    /// - Any rate is negative
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let rates = Self::parse(&content).map_err(|message| EngineError::ConfigParseError {
            path: path_str.clone(),
            message,
        })?;

        debug!(path = %path_str, base_hourly_wage = %rates.base_hourly_wage, "Loaded pay rates");
        Ok(Self { rates })
    }

    /// Returns a loader holding the built-in agreement rates.
    pub fn builtin() -> Self {
        Self {
            rates: PayRates::default(),
        }
    }

    fn parse(content: &str) -> Result<PayRates, String> {
        let rates: PayRates = serde_yaml::from_str(content).map_err(|e| e.to_string())?;

        let allowances = &rates.allowances;
        let named = [
            ("base_hourly_wage", rates.base_hourly_wage),
            ("weekday_after_18", allowances.weekday_after_18),
            ("weekday_after_21", allowances.weekday_after_21),
            ("saturday_after_13", allowances.saturday_after_13),
            ("saturday_after_15", allowances.saturday_after_15),
            ("saturday_after_18", allowances.saturday_after_18),
            ("sunday", allowances.sunday),
        ];
        if let Some((name, _)) = named.iter().find(|(_, rate)| rate.is_sign_negative()) {
            return Err(format!("rate '{}' must not be negative", name));
        }

        Ok(rates)
    }

    /// Returns the loaded rate table.
    pub fn rates(&self) -> &PayRates {
        &self.rates
    }

    /// Consumes the loader and returns the rate table.
    pub fn into_rates(self) -> PayRates {
        self.rates
    }
}
