//! Simulated peripherals implementing the HAL traits
//!
//! The serial link is the process's stdin/stdout, so the node can be driven
//! from a terminal or a pipe. LEDs log their state changes, buttons follow a
//! fixed press pattern and the ADC sweeps a triangle wave.

pub mod adc;
pub mod console;
pub mod gpio;

pub use adc::SimAdc;
pub use console::{spawn_stdin_reader, StdinUart, StdoutUart};
pub use gpio::{SimButton, SimLed};
