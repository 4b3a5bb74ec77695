//! Shift Pay Engine
//!
//! This crate computes gross and net pay for hourly retail workers from a
//! list of shifts, applying time-of-day and day-of-week allowances and a
//! flat tax rate.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
