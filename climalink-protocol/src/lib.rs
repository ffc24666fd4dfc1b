//! Climalink serial command protocol
//!
//! This crate defines the ASCII protocol spoken between a host and the sensor
//! node over a byte-oriented serial link. The protocol is deliberately small:
//! one fixed dialect, one request per frame, at most one response per request,
//! and no retransmission.
//!
//! # Frame Format
//!
//! Requests and responses share the same framing:
//! ```text
//! ┌───────┬────────┬───────────┬───────────┬───────┬──────────┬─────┐
//! │ START │ OPCODE │ SENSOR    │ TARGET    │ DELIM │ CHECKSUM │ END │
//! │ '#'   │ 1B     │ 0-1B      │ 3 digits  │ '|'   │ 3 digits │ '!' │
//! └───────┴────────┴───────────┴───────────┴───────┴──────────┴─────┘
//! ```
//!
//! The checksum is the modulo-256 sum of every byte between START and DELIM,
//! rendered as three zero-padded decimal digits.
//!
//! # Requests
//!
//! | Frame          | Meaning                                |
//! |----------------|----------------------------------------|
//! | `#A<ttt>`      | read one new sample from every sensor  |
//! | `#P<X><ttt>`   | read one new sample from sensor X      |
//! | `#L<ttt>`      | list the last 20 samples of all sensors|
//! | `#L<X><ttt>`   | list the last 20 samples of sensor X   |
//! | `#R<ttt>`      | reset all sample histories             |
//! | `#R<X><ttt>`   | reset the history of sensor X          |
//!
//! `X` is one of `T` (temperature), `H` (humidity) or `C` (CO2).
//!
//! Nodes configured for [`Dialect::Hardware`] additionally accept `#B<ttt>`
//! (buttons), `#D<ttt>` (LEDs), `#O<n><ttt>` (set LED `n`) and `#V<ttt>`
//! (ADC).

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod frame;
pub mod sensor;

pub use command::{validate, validate_checksum, Command, Dialect, Request, ValidationError};
pub use frame::{
    checksum, FrameReceiver, FrameSender, RawFrame, CHECKSUM_DELIMITER, FRAME_END, FRAME_START,
    RX_BUFFER_SIZE, TX_BUFFER_SIZE, UART_BUFFER_SIZE, VALUE_SEPARATOR,
};
pub use sensor::{SensorId, UnknownSensor, ValueEncoding};
