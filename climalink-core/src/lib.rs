//! Board-agnostic core logic for the Climalink sensor node
//!
//! This crate contains everything that does not depend on a specific board:
//!
//! - Sensor sample histories and their synthetic generators
//! - The real-time data store (RTDB) shared by producers and the protocol
//! - Command dispatch and the byte-driven protocol engine
//! - Periodic I/O steps (ADC sampling, button polling, LED actuation)
//! - Device configuration types

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod engine;
pub mod io;
pub mod rtdb;
pub mod sensors;

pub use config::DeviceConfig;
pub use engine::{DispatchError, Dispatcher, EngineStats, ProtocolEngine, ProtocolError, RxStatus};
pub use rtdb::{Rtdb, RtdbError};
pub use sensors::{HistoryError, SensorBank, SensorHistory, HISTORY_CAPACITY};
