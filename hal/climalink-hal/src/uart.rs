//! UART serial communication abstractions
//!
//! The protocol engine consumes bytes one at a time and emits complete frames,
//! so both directions are plain blocking byte interfaces.

/// UART transmitter
pub trait UartTx {
    /// Error type for transmit operations
    type Error: core::fmt::Debug;

    /// Write data to the UART
    ///
    /// Blocks until all data has been written or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// UART receiver
pub trait UartRx {
    /// Error type for receive operations
    type Error: core::fmt::Debug;

    /// Read data from the UART
    ///
    /// Blocks until at least one byte is available. Returns `Ok(0)` when the
    /// link has been closed.
    fn read_blocking(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Read a single byte from the UART, `None` once the link is closed
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        let mut buf = [0u8; 1];
        let n = self.read_blocking(&mut buf)?;
        Ok((n > 0).then_some(buf[0]))
    }
}
