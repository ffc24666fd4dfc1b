//! Periodic I/O steps
//!
//! One call of each function is one period of the matching producer or
//! actuator task. Driver errors are logged here and never reach the
//! protocol engine.

pub mod adc;
pub mod gpio;

pub use adc::{sample_adc, AdcSample};
pub use gpio::{drive_leds, poll_buttons};
