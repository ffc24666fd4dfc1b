//! Request grammar and frame validation
//!
//! A candidate frame is valid only if it matches the closed command grammar
//! *and* carries a correct checksum. The two failures are reported
//! separately so the link can be diagnosed, but the caller treats both the
//! same way: the frame is dropped and nothing is sent back.

use crate::frame::{
    checksum, parse_decimal, CHECKSUM_DELIMITER, CHECKSUM_DIGITS, FRAME_END, FRAME_START,
};
use crate::sensor::SensorId;

/// Number of LEDs addressable on the hardware dialect
pub const LED_COUNT: usize = 4;

/// Number of buttons reported on the hardware dialect
pub const BUTTON_COUNT: usize = 4;

/// Digits in the numeric target field
const TARGET_DIGITS: usize = 3;

/// Largest accepted target value
const TARGET_MAX: u16 = 255;

/// START + DELIM + CHECKSUM + END
const FRAMING_OVERHEAD: usize = 1 + 1 + CHECKSUM_DIGITS + 1;

/// Which opcode set the node accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Dialect {
    /// Sensor commands only: `A`, `P<X>`, `L`, `L<X>`, `R`, `R<X>`
    #[default]
    Standard,
    /// Standard set plus RTDB access: `B`, `D`, `O<n>`, `V`
    Hardware,
}

/// A decoded request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `A`: one new reading from every sensor
    ReadAll,
    /// `P<X>`: one new reading from a single sensor
    Read(SensorId),
    /// `L` / `L<X>`: the last 20 readings of all sensors or of one
    List(Option<SensorId>),
    /// `R` / `R<X>`: clear the history of all sensors or of one
    Reset(Option<SensorId>),
    /// `B`: the four button states
    ReadButtons,
    /// `D`: the four LED states
    ReadLeds,
    /// `O<n>`: switch LED `n` on (target != 0) or off
    SetLed { led: u8, on: bool },
    /// `V`: the latest ADC sample, raw and scaled
    ReadAdc,
}

/// A validated request frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Request {
    /// What to do
    pub command: Command,
    /// The 3-digit numeric target, 0..=255
    pub target: u8,
}

/// Why a candidate frame was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ValidationError {
    /// The frame does not match the command grammar
    Grammar,
    /// The grammar matches but the checksum does not
    Checksum,
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValidationError::Grammar => f.write_str("frame does not match command grammar"),
            ValidationError::Checksum => f.write_str("frame checksum mismatch"),
        }
    }
}

/// Validate a complete frame (START to END inclusive) and decode it
///
/// Grammar is checked first; the checksum is only compared for frames that
/// are well-formed.
pub fn validate(frame: &[u8], dialect: Dialect) -> Result<Request, ValidationError> {
    let body = frame_body(frame)?;
    let request = parse_body(body, dialect)?;
    validate_checksum(frame)?;
    Ok(request)
}

/// Compare the checksum field of `frame` with the sum of its body
///
/// The body runs from the byte after START up to the byte before the
/// delimiter; the checksum field is the three digits before END.
pub fn validate_checksum(frame: &[u8]) -> Result<(), ValidationError> {
    let body = frame_body(frame)?;
    let field_start = frame.len() - 1 - CHECKSUM_DIGITS;
    let expected =
        parse_decimal(&frame[field_start..frame.len() - 1]).ok_or(ValidationError::Grammar)?;

    if checksum(body) as u16 == expected {
        Ok(())
    } else {
        Err(ValidationError::Checksum)
    }
}

/// Check the framing bytes and return the body between START and DELIM
fn frame_body(frame: &[u8]) -> Result<&[u8], ValidationError> {
    if frame.len() < FRAMING_OVERHEAD
        || frame[0] != FRAME_START
        || frame[frame.len() - 1] != FRAME_END
    {
        return Err(ValidationError::Grammar);
    }

    let delimiter = frame.len() - 2 - CHECKSUM_DIGITS;
    if frame[delimiter] != CHECKSUM_DELIMITER {
        return Err(ValidationError::Grammar);
    }

    let digits = &frame[delimiter + 1..frame.len() - 1];
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(ValidationError::Grammar);
    }

    Ok(&frame[1..delimiter])
}

/// Decode `<opcode>[<argument>]<target>`
fn parse_body(body: &[u8], dialect: Dialect) -> Result<Request, ValidationError> {
    if body.len() < 1 + TARGET_DIGITS {
        return Err(ValidationError::Grammar);
    }

    let (head, digits) = body.split_at(body.len() - TARGET_DIGITS);
    let target = match parse_decimal(digits) {
        Some(value) if value <= TARGET_MAX => value as u8,
        _ => return Err(ValidationError::Grammar),
    };

    let command = match (dialect, head) {
        (_, [b'A']) => Command::ReadAll,
        (_, [b'P', letter]) => Command::Read(sensor(*letter)?),
        (_, [b'L']) => Command::List(None),
        (_, [b'L', letter]) => Command::List(Some(sensor(*letter)?)),
        (_, [b'R']) => Command::Reset(None),
        (_, [b'R', letter]) => Command::Reset(Some(sensor(*letter)?)),
        (Dialect::Hardware, [b'B']) => Command::ReadButtons,
        (Dialect::Hardware, [b'D']) => Command::ReadLeds,
        (Dialect::Hardware, [b'V']) => Command::ReadAdc,
        (Dialect::Hardware, [b'O', led @ b'0'..=b'3']) => Command::SetLed {
            led: led - b'0',
            on: target != 0,
        },
        _ => return Err(ValidationError::Grammar),
    };

    Ok(Request { command, target })
}

fn sensor(letter: u8) -> Result<SensorId, ValidationError> {
    SensorId::from_letter(letter).map_err(|_| ValidationError::Grammar)
}
