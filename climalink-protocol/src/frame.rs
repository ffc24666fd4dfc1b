//! Frame assembly for both directions of the link.
//!
//! Frame format:
//! - START (1 byte): `#`
//! - BODY (variable): opcode, arguments or encoded values
//! - DELIM (1 byte): `|`
//! - CHECKSUM (3 bytes): modulo-256 sum of BODY, zero-padded decimal
//! - END (1 byte): `!`
//!
//! [`FrameReceiver`] and [`FrameSender`] are mirror images: both accumulate
//! bytes in a bounded buffer, restart on START, hand out the whole buffer on
//! END, and recover from overflow by clearing the buffer and retrying the
//! byte that did not fit.

use heapless::Vec;

/// Start of frame symbol
pub const FRAME_START: u8 = b'#';

/// End of frame symbol
pub const FRAME_END: u8 = b'!';

/// Separates the frame body from its checksum
pub const CHECKSUM_DELIMITER: u8 = b'|';

/// Separates values in multi-value responses
pub const VALUE_SEPARATOR: u8 = b'>';

/// Number of decimal digits in the checksum field
pub const CHECKSUM_DIGITS: usize = 3;

/// Default receive buffer capacity
pub const RX_BUFFER_SIZE: usize = 512;

/// Default transmit buffer capacity
pub const TX_BUFFER_SIZE: usize = 512;

/// Buffer capacity on the constrained UART deployment
pub const UART_BUFFER_SIZE: usize = 60;

/// A complete frame, START to END inclusive
pub type RawFrame<const N: usize> = Vec<u8, N>;

/// Modulo-256 sum of `bytes`
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |sum, &byte| sum.wrapping_add(byte))
}

/// Render a checksum as three zero-padded ASCII digits
pub fn checksum_digits(sum: u8) -> [u8; CHECKSUM_DIGITS] {
    [b'0' + sum / 100, b'0' + (sum / 10) % 10, b'0' + sum % 10]
}

/// Parse a run of ASCII digits, weighting them most-significant first
///
/// Returns `None` if any byte is not a digit or the value does not fit.
pub fn parse_decimal(digits: &[u8]) -> Option<u16> {
    digits.iter().try_fold(0u16, |value, &byte| {
        if !byte.is_ascii_digit() {
            return None;
        }
        value.checked_mul(10)?.checked_add((byte - b'0') as u16)
    })
}

/// Incremental receiver for inbound frames
///
/// Bytes are fed one at a time. The receiver has no notion of validity; it
/// only delimits candidate frames and leaves judging them to
/// [`crate::command::validate`].
#[derive(Debug, Clone, Default)]
pub struct FrameReceiver<const N: usize = RX_BUFFER_SIZE> {
    buffer: Vec<u8, N>,
    overflows: u32,
}

impl<const N: usize> FrameReceiver<N> {
    /// Create an empty receiver
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            overflows: 0,
        }
    }

    /// Feed a single byte to the receiver
    ///
    /// Returns `Some(frame)` when `byte` is the END symbol. The buffer is
    /// empty again afterwards, whatever the caller decides about the frame.
    /// A START byte discards any partial frame without reporting it.
    pub fn receive_byte(&mut self, byte: u8) -> Option<RawFrame<N>> {
        if byte == FRAME_START {
            self.buffer.clear();
        }

        if self.buffer.push(byte).is_err() {
            // Overflow: start over from the byte that did not fit
            self.overflows = self.overflows.wrapping_add(1);
            self.buffer.clear();
            let _ = self.buffer.push(byte);
        }

        if byte == FRAME_END {
            Some(core::mem::take(&mut self.buffer))
        } else {
            None
        }
    }

    /// Bytes buffered so far for the frame in progress
    pub fn buffered(&self) -> &[u8] {
        &self.buffer
    }

    /// Drop the frame in progress
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Number of overflow recoveries since creation
    pub fn overflow_count(&self) -> u32 {
        self.overflows
    }
}

/// Incremental builder for outbound frames
///
/// Keeps a running checksum over every buffered byte after the first, so
/// [`FrameSender::finish`] can close the frame without rescanning it.
#[derive(Debug, Clone, Default)]
pub struct FrameSender<const N: usize = TX_BUFFER_SIZE> {
    buffer: Vec<u8, N>,
    sum: u8,
    overflows: u32,
}

impl<const N: usize> FrameSender<N> {
    /// Create an empty sender
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            sum: 0,
            overflows: 0,
        }
    }

    /// Append one byte to the outgoing frame
    ///
    /// Returns the finished frame when `byte` is the END symbol.
    pub fn send_byte(&mut self, byte: u8) -> Option<RawFrame<N>> {
        self.put(byte);

        if byte == FRAME_END {
            self.sum = 0;
            Some(core::mem::take(&mut self.buffer))
        } else {
            None
        }
    }

    /// Append several bytes; none of them may be the END symbol
    pub fn send_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            debug_assert_ne!(byte, FRAME_END);
            self.put(byte);
        }
    }

    /// Append an unsigned number in decimal, without leading zeros
    pub fn send_number(&mut self, mut number: u16) {
        if number == 0 {
            self.put(b'0');
            return;
        }

        let mut divisor: u16 = 10_000;
        while number / divisor == 0 {
            divisor /= 10;
        }

        while divisor > 0 {
            self.put(b'0' + (number / divisor) as u8);
            number %= divisor;
            divisor /= 10;
        }
    }

    /// Checksum of everything buffered after the START byte
    pub fn running_checksum(&self) -> u8 {
        self.sum
    }

    /// Close the frame: delimiter, three checksum digits, END
    pub fn finish(&mut self) -> Option<RawFrame<N>> {
        let digits = checksum_digits(self.sum);
        self.put(CHECKSUM_DELIMITER);
        self.send_bytes(&digits);
        self.send_byte(FRAME_END)
    }

    /// Bytes buffered so far for the frame in progress
    pub fn buffered(&self) -> &[u8] {
        &self.buffer
    }

    /// Drop the frame in progress
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.sum = 0;
    }

    /// Number of overflow recoveries since creation
    pub fn overflow_count(&self) -> u32 {
        self.overflows
    }

    fn put(&mut self, byte: u8) {
        if byte == FRAME_START {
            self.clear();
        }

        if self.buffer.push(byte).is_err() {
            self.overflows = self.overflows.wrapping_add(1);
            self.clear();
            let _ = self.buffer.push(byte);
        }

        // Position 0 is never part of the checksum
        if self.buffer.len() > 1 {
            self.sum = self.sum.wrapping_add(byte);
        }
    }
}
