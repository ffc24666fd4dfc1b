//! Shared state and inter-task channels
//!
//! Producers and the protocol task only meet in [`RTDB`] and [`SENSORS`].
//! The serial link reaches the executor through [`LINK_RX`].

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use climalink_core::{Rtdb, SensorBank};

/// Channel capacity for received link bytes
const LINK_CHANNEL_SIZE: usize = 64;

/// Something that happened on the receive side of the serial link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkEvent {
    Byte(u8),
    /// End of input; no more bytes will follow
    Closed,
}

/// LED, button and ADC state
pub static RTDB: Rtdb = Rtdb::new();

/// Temperature, humidity and CO2 histories
pub static SENSORS: SensorBank = SensorBank::new();

/// Bytes from the link reader thread to the protocol task
pub static LINK_RX: Channel<CriticalSectionRawMutex, LinkEvent, LINK_CHANNEL_SIZE> =
    Channel::new();
