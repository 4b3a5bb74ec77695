//! Rate configuration for the pay engine.
//!
//! The agreement rates are available as constants and through
//! [`PayRates::default`]; a YAML file can override them at start-up.
//!
//! # Example
//!
//! ```no_run
//! use pay_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/coop_extra/rates.yaml").unwrap();
//! println!("Sunday allowance: {} NOK/h", config.rates().allowances.sunday);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AllowanceRates, BASE_HOURLY_WAGE, PayRates, SATURDAY_AFTER_13, SATURDAY_AFTER_15,
    SATURDAY_AFTER_18, SUNDAY, WEEKDAY_AFTER_18, WEEKDAY_AFTER_21,
};
