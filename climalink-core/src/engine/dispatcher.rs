//! Command dispatcher
//!
//! Turns validated requests into sensor/RTDB operations and response frames.
//!
//! | Request | Response |
//! |---------|----------|
//! | `A`     | `#AR<T>><H>><C>` |
//! | `P<X>`  | `#P<X><v>` |
//! | `L<X>`  | `#L<X><v1>...<v20>` |
//! | `L`     | `#LR<T1..T20>><H1..H20>><C1..C20>` |
//! | `R`, `R<X>` | none |
//! | `B`     | `#B<b0><b1><b2><b3>` |
//! | `D`     | `#D<l0><l1><l2><l3>` |
//! | `O<n>`  | `#O<n><0/1>` |
//! | `V`     | `#V+<raw>>+<mV>` |
//!
//! Every response is closed with `|`, the three checksum digits and `!`.
//! Values inside a history listing carry their own sign byte and need no
//! separator.

use climalink_hal::UartTx;
use climalink_protocol::{
    Command, FrameSender, Request, SensorId, FRAME_START, TX_BUFFER_SIZE, VALUE_SEPARATOR,
};
use heapless::Vec;

use super::error::DispatchError;
use crate::rtdb::Rtdb;
use crate::sensors::{SensorBank, HISTORY_CAPACITY};

/// Serves requests against the shared stores and writes responses to `tx`
pub struct Dispatcher<'a, T: UartTx, const N: usize = TX_BUFFER_SIZE> {
    sensors: &'a SensorBank,
    rtdb: &'a Rtdb,
    sender: FrameSender<N>,
    tx: T,
}

impl<'a, T: UartTx, const N: usize> Dispatcher<'a, T, N> {
    pub fn new(sensors: &'a SensorBank, rtdb: &'a Rtdb, tx: T) -> Self {
        Self {
            sensors,
            rtdb,
            sender: FrameSender::new(),
            tx,
        }
    }

    /// Execute a validated request
    pub fn dispatch(&mut self, request: &Request) -> Result<(), DispatchError> {
        match request.command {
            Command::ReadAll => self.read_all(),
            Command::Read(sensor) => self.read_one(sensor),
            Command::List(None) => self.list_all()?,
            Command::List(Some(sensor)) => self.list_one(sensor)?,
            Command::Reset(None) => self.reset_all(),
            Command::Reset(Some(sensor)) => self.reset_one(sensor),
            Command::ReadButtons => self.read_buttons(),
            Command::ReadLeds => self.read_leds(),
            Command::SetLed { led, on } => self.set_led(led, on)?,
            Command::ReadAdc => self.read_adc(),
        }
        Ok(())
    }

    /// One new reading from every sensor, in T, H, C order
    pub fn read_all(&mut self) {
        self.begin(b"AR");
        for (position, sensor) in SensorId::ALL.into_iter().enumerate() {
            if position > 0 {
                self.sender.send_bytes(&[VALUE_SEPARATOR]);
            }
            let value = self.sensors.generate(sensor);
            self.sender.send_reading(sensor, value);
        }
        self.finish();
    }

    /// One new reading from `sensor`
    pub fn read_one(&mut self, sensor: SensorId) {
        let value = self.sensors.generate(sensor);
        self.begin(&[b'P', sensor.letter()]);
        self.sender.send_reading(sensor, value);
        self.finish();
    }

    /// The full window of `sensor`, oldest first
    pub fn list_one(&mut self, sensor: SensorId) -> Result<(), DispatchError> {
        let window = self
            .sensors
            .snapshot(sensor)
            .ok_or(DispatchError::InsufficientHistory)?;

        self.begin(&[b'L', sensor.letter()]);
        self.send_window(sensor, &window);
        self.finish();
        Ok(())
    }

    /// The full windows of all three sensors
    ///
    /// Nothing is sent unless every history is full.
    pub fn list_all(&mut self) -> Result<(), DispatchError> {
        let mut windows: Vec<Vec<u16, HISTORY_CAPACITY>, 3> = Vec::new();
        for sensor in SensorId::ALL {
            let window = self
                .sensors
                .snapshot(sensor)
                .ok_or(DispatchError::InsufficientHistory)?;
            let _ = windows.push(window);
        }

        self.begin(b"LR");
        for (position, (sensor, window)) in SensorId::ALL.into_iter().zip(&windows).enumerate() {
            if position > 0 {
                self.sender.send_bytes(&[VALUE_SEPARATOR]);
            }
            self.send_window(sensor, window);
        }
        self.finish();
        Ok(())
    }

    /// Clear one history; nothing is sent
    pub fn reset_one(&mut self, sensor: SensorId) {
        self.sensors.reset(sensor);
        log::info!("history {} cleared", sensor.letter() as char);
    }

    /// Clear every history; nothing is sent
    pub fn reset_all(&mut self) {
        self.sensors.reset_all();
        log::info!("all histories cleared");
    }

    /// [`Self::read_one`] addressed by wire letter
    pub fn read_sensor(&mut self, letter: u8) -> Result<(), DispatchError> {
        let sensor = SensorId::from_letter(letter)?;
        self.read_one(sensor);
        Ok(())
    }

    /// [`Self::list_one`] addressed by wire letter
    pub fn list_sensor(&mut self, letter: u8) -> Result<(), DispatchError> {
        let sensor = SensorId::from_letter(letter)?;
        self.list_one(sensor)
    }

    /// [`Self::reset_one`] addressed by wire letter
    pub fn reset_sensor(&mut self, letter: u8) -> Result<(), DispatchError> {
        let sensor = SensorId::from_letter(letter)?;
        self.reset_one(sensor);
        Ok(())
    }

    pub fn read_buttons(&mut self) {
        let states = self.rtdb.buttons();
        self.begin(b"B");
        for pressed in states {
            self.sender.send_bytes(&[flag(pressed)]);
        }
        self.finish();
    }

    pub fn read_leds(&mut self) {
        let states = self.rtdb.leds();
        self.begin(b"D");
        for on in states {
            self.sender.send_bytes(&[flag(on)]);
        }
        self.finish();
    }

    /// Request LED `led` on or off; the actuator task applies it
    pub fn set_led(&mut self, led: u8, on: bool) -> Result<(), DispatchError> {
        self.rtdb.set_led(led as usize, on)?;
        self.begin(&[b'O', b'0' + led]);
        self.sender.send_bytes(&[flag(on)]);
        self.finish();
        Ok(())
    }

    /// Latest ADC sample, raw then millivolts
    pub fn read_adc(&mut self) {
        let raw = self.rtdb.adc_raw();
        let millivolts = self.rtdb.adc_millivolts();
        self.begin(b"V");
        self.sender.send_magnitude(raw);
        self.sender.send_bytes(&[VALUE_SEPARATOR]);
        self.sender.send_magnitude(millivolts);
        self.finish();
    }

    /// Transmit side, for inspection
    pub fn tx(&self) -> &T {
        &self.tx
    }

    pub fn tx_mut(&mut self) -> &mut T {
        &mut self.tx
    }

    /// Overflow recoveries of the response buffer
    pub fn overflow_count(&self) -> u32 {
        self.sender.overflow_count()
    }

    fn begin(&mut self, prefix: &[u8]) {
        self.sender.send_bytes(&[FRAME_START]);
        self.sender.send_bytes(prefix);
    }

    fn send_window(&mut self, sensor: SensorId, window: &[u16]) {
        for &value in window {
            self.sender.send_reading(sensor, value);
        }
    }

    fn finish(&mut self) {
        let Some(frame) = self.sender.finish() else {
            return;
        };

        log::trace!("tx {} bytes", frame.len());
        if let Err(e) = self.tx.write_blocking(&frame) {
            log::warn!("response dropped: {:?}", e);
            return;
        }
        if let Err(e) = self.tx.flush() {
            log::warn!("flush failed: {:?}", e);
        }
    }
}

fn flag(set: bool) -> u8 {
    if set {
        b'1'
    } else {
        b'0'
    }
}
