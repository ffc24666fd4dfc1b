//! Byte-driven protocol engine
//!
//! The engine owns the receive buffer and the dispatcher. It is fed one byte
//! at a time from the serial link and is strictly single-threaded: one byte
//! stream, one frame in flight.

use climalink_hal::UartTx;
use climalink_protocol::{validate, Dialect, FrameReceiver, RX_BUFFER_SIZE, TX_BUFFER_SIZE};

use super::dispatcher::Dispatcher;
use super::error::ProtocolError;
use crate::rtdb::Rtdb;
use crate::sensors::SensorBank;

/// Outcome of a byte that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RxStatus {
    /// The byte was buffered; no frame is complete yet
    Buffered,
    /// The byte completed a valid frame and the command ran
    Dispatched,
}

/// Frame counters since the engine was created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EngineStats {
    /// Frames that ran a command
    pub dispatched: u32,
    /// Frames dropped for grammar or checksum
    pub rejected: u32,
    /// Valid frames whose command failed
    pub failed: u32,
    /// Receive buffer overflow recoveries
    pub rx_overflows: u32,
    /// Transmit buffer overflow recoveries
    pub tx_overflows: u32,
}

/// Receiver, validator and dispatcher wired together
pub struct ProtocolEngine<
    'a,
    T: UartTx,
    const RX: usize = RX_BUFFER_SIZE,
    const TX: usize = TX_BUFFER_SIZE,
> {
    receiver: FrameReceiver<RX>,
    dispatcher: Dispatcher<'a, T, TX>,
    dialect: Dialect,
    dispatched: u32,
    rejected: u32,
    failed: u32,
}

impl<'a, T: UartTx, const RX: usize, const TX: usize> ProtocolEngine<'a, T, RX, TX> {
    pub fn new(sensors: &'a SensorBank, rtdb: &'a Rtdb, tx: T, dialect: Dialect) -> Self {
        Self {
            receiver: FrameReceiver::new(),
            dispatcher: Dispatcher::new(sensors, rtdb, tx),
            dialect,
            dispatched: 0,
            rejected: 0,
            failed: 0,
        }
    }

    /// Feed one received byte
    ///
    /// On the END byte the buffered frame is validated and, if valid,
    /// dispatched. The receive buffer is empty afterwards whatever the
    /// outcome. Errors mean no response was sent.
    pub fn receive_byte(&mut self, byte: u8) -> Result<RxStatus, ProtocolError> {
        log::trace!("rx {:#04x}", byte);

        let Some(frame) = self.receiver.receive_byte(byte) else {
            return Ok(RxStatus::Buffered);
        };

        let request = match validate(&frame, self.dialect) {
            Ok(request) => request,
            Err(e) => {
                self.rejected = self.rejected.wrapping_add(1);
                log::warn!("frame rejected: {}", e);
                return Err(e.into());
            }
        };

        log::debug!("dispatch {:?} target {}", request.command, request.target);
        match self.dispatcher.dispatch(&request) {
            Ok(()) => {
                self.dispatched = self.dispatched.wrapping_add(1);
                Ok(RxStatus::Dispatched)
            }
            Err(e) => {
                self.failed = self.failed.wrapping_add(1);
                log::warn!("{:?} not served: {}", request.command, e);
                Err(e.into())
            }
        }
    }

    /// Feed a run of bytes, returning the outcome of the last completed frame
    ///
    /// `None` if `bytes` completed no frame.
    pub fn receive_bytes(&mut self, bytes: &[u8]) -> Option<Result<RxStatus, ProtocolError>> {
        let mut last = None;
        for &byte in bytes {
            match self.receive_byte(byte) {
                Ok(RxStatus::Buffered) => {}
                outcome => last = Some(outcome),
            }
        }
        last
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            dispatched: self.dispatched,
            rejected: self.rejected,
            failed: self.failed,
            rx_overflows: self.receiver.overflow_count(),
            tx_overflows: self.dispatcher.overflow_count(),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<'a, T, TX> {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher<'a, T, TX> {
        &mut self.dispatcher
    }
}
