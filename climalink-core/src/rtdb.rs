//! Real-time data store
//!
//! Process-wide state shared between the periodic producers and the protocol
//! engine. Every field sits behind its own lock and each accessor holds it for
//! exactly one field access, so reading several fields is not atomic.

use core::cell::Cell;

use climalink_protocol::command::{BUTTON_COUNT, LED_COUNT};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

type Field<T> = Mutex<CriticalSectionRawMutex, Cell<T>>;

/// RTDB access errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RtdbError {
    /// LED or button index outside `0..4`
    InvalidChannel,
}

impl core::fmt::Display for RtdbError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RtdbError::InvalidChannel => f.write_str("invalid RTDB channel"),
        }
    }
}

/// Guarded store of LED, button and ADC state
pub struct Rtdb {
    leds: [Field<bool>; LED_COUNT],
    buttons: [Field<bool>; BUTTON_COUNT],
    adc_raw: Field<u16>,
    adc_millivolts: Field<u16>,
}

impl Default for Rtdb {
    fn default() -> Self {
        Self::new()
    }
}

impl Rtdb {
    /// All LEDs off, all buttons released, ADC at zero
    pub const fn new() -> Self {
        Self {
            leds: [const { Mutex::new(Cell::new(false)) }; LED_COUNT],
            buttons: [const { Mutex::new(Cell::new(false)) }; BUTTON_COUNT],
            adc_raw: Mutex::new(Cell::new(0)),
            adc_millivolts: Mutex::new(Cell::new(0)),
        }
    }

    /// Requested state of LED `index`
    pub fn led(&self, index: usize) -> Result<bool, RtdbError> {
        let field = self.leds.get(index).ok_or(RtdbError::InvalidChannel)?;
        Ok(field.lock(Cell::get))
    }

    pub fn set_led(&self, index: usize, on: bool) -> Result<(), RtdbError> {
        let field = self.leds.get(index).ok_or(RtdbError::InvalidChannel)?;
        field.lock(|cell| cell.set(on));
        Ok(())
    }

    /// Last polled state of button `index`
    pub fn button(&self, index: usize) -> Result<bool, RtdbError> {
        let field = self.buttons.get(index).ok_or(RtdbError::InvalidChannel)?;
        Ok(field.lock(Cell::get))
    }

    pub fn set_button(&self, index: usize, pressed: bool) -> Result<(), RtdbError> {
        let field = self.buttons.get(index).ok_or(RtdbError::InvalidChannel)?;
        field.lock(|cell| cell.set(pressed));
        Ok(())
    }

    pub fn adc_raw(&self) -> u16 {
        self.adc_raw.lock(Cell::get)
    }

    pub fn set_adc_raw(&self, raw: u16) {
        self.adc_raw.lock(|cell| cell.set(raw));
    }

    pub fn adc_millivolts(&self) -> u16 {
        self.adc_millivolts.lock(Cell::get)
    }

    pub fn set_adc_millivolts(&self, millivolts: u16) {
        self.adc_millivolts.lock(|cell| cell.set(millivolts));
    }

    /// All LED states, read one field at a time
    pub fn leds(&self) -> [bool; LED_COUNT] {
        core::array::from_fn(|index| self.leds[index].lock(Cell::get))
    }

    /// All button states, read one field at a time
    pub fn buttons(&self) -> [bool; BUTTON_COUNT] {
        core::array::from_fn(|index| self.buttons[index].lock(Cell::get))
    }
}
