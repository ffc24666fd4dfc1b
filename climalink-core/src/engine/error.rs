//! Engine error types

use climalink_protocol::{UnknownSensor, ValidationError};

use crate::rtdb::RtdbError;

/// A validated request that could not be served
///
/// No response frame is sent and no sensor or RTDB state is changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatchError {
    /// Sensor letter outside `T`, `H`, `C`
    UnknownSensor(u8),
    /// A history listing was requested before the window was full
    InsufficientHistory,
    /// LED index outside the RTDB
    InvalidChannel,
}

impl core::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DispatchError::UnknownSensor(letter) => {
                write!(f, "no such sensor: {:?}", *letter as char)
            }
            DispatchError::InsufficientHistory => f.write_str("history not full yet"),
            DispatchError::InvalidChannel => f.write_str("invalid RTDB channel"),
        }
    }
}

impl From<UnknownSensor> for DispatchError {
    fn from(e: UnknownSensor) -> Self {
        DispatchError::UnknownSensor(e.0)
    }
}

impl From<RtdbError> for DispatchError {
    fn from(_: RtdbError) -> Self {
        DispatchError::InvalidChannel
    }
}

/// Why a completed frame produced no response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProtocolError {
    /// The frame does not match the command grammar
    GrammarInvalid,
    /// The frame is well-formed but its checksum is wrong
    ChecksumMismatch,
    UnknownSensor(u8),
    InsufficientHistory,
    InvalidChannel,
}

impl ProtocolError {
    /// True for errors raised before any command ran
    pub fn is_frame_error(&self) -> bool {
        matches!(
            self,
            ProtocolError::GrammarInvalid | ProtocolError::ChecksumMismatch
        )
    }
}

impl core::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ProtocolError::GrammarInvalid => f.write_str("frame does not match command grammar"),
            ProtocolError::ChecksumMismatch => f.write_str("frame checksum mismatch"),
            ProtocolError::UnknownSensor(letter) => {
                write!(f, "no such sensor: {:?}", *letter as char)
            }
            ProtocolError::InsufficientHistory => f.write_str("history not full yet"),
            ProtocolError::InvalidChannel => f.write_str("invalid RTDB channel"),
        }
    }
}

impl From<ValidationError> for ProtocolError {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::Grammar => ProtocolError::GrammarInvalid,
            ValidationError::Checksum => ProtocolError::ChecksumMismatch,
        }
    }
}

impl From<DispatchError> for ProtocolError {
    fn from(e: DispatchError) -> Self {
        match e {
            DispatchError::UnknownSensor(letter) => ProtocolError::UnknownSensor(letter),
            DispatchError::InsufficientHistory => ProtocolError::InsufficientHistory,
            DispatchError::InvalidChannel => ProtocolError::InvalidChannel,
        }
    }
}
