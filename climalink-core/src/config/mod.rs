//! Configuration types
//!
//! Board-agnostic configuration structures. The device binary fills them
//! from a TOML file; everything has a default matching the reference board.

pub mod types;

pub use types::*;
