//! Climalink Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the sensor node logic is
//! written against. The protocol engine and the periodic I/O steps only ever
//! see these traits, so the same core runs on a board or on the host-side
//! device simulation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  climalink-core (engine, RTDB, I/O)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  climalink-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ board drivers │       │   simulated   │
//! │   (nRF, ...)  │       │    drivers    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O (LEDs, buttons)
//! - [`adc::AdcChannel`] - Single-channel analog sampling
//! - [`uart::UartTx`], [`uart::UartRx`] - Serial communication

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use adc::AdcChannel;
pub use gpio::{InputPin, OutputPin};
pub use uart::{UartRx, UartTx};
