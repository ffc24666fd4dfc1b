//! Sensor sample histories
//!
//! Each of the three environmental sensors keeps the last
//! [`HISTORY_CAPACITY`] readings it produced. Readings are synthetic: every
//! sensor walks a fixed table of plausible values.

pub mod bank;
pub mod history;
pub mod samples;

pub use bank::SensorBank;
pub use history::{HistoryError, SensorHistory, HISTORY_CAPACITY};
