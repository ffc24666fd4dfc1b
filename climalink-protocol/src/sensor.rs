//! Sensor identifiers and their value encodings

use crate::frame::FrameSender;

/// Readings at or below this value are sent with a `-` sign
pub const TEMPERATURE_BASELINE: u16 = 50;

/// One of the three environmental sensors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorId {
    /// Temperature, `T`
    Temperature,
    /// Relative humidity, `H`
    Humidity,
    /// CO2 concentration, `C`
    Co2,
}

/// The sensor letter is not one of `T`, `H`, `C`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownSensor(pub u8);

impl core::fmt::Display for UnknownSensor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "no such sensor: {:?}", self.0 as char)
    }
}

/// How a reading is rendered on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ValueEncoding {
    /// Signed offset from [`TEMPERATURE_BASELINE`]
    BaselineOffset,
    /// `+` followed by the raw magnitude
    Magnitude,
}

impl SensorId {
    /// All sensors, in the order multi-sensor responses list them
    pub const ALL: [SensorId; 3] = [SensorId::Temperature, SensorId::Humidity, SensorId::Co2];

    /// Parse a sensor from its wire letter
    pub fn from_letter(letter: u8) -> Result<Self, UnknownSensor> {
        match letter {
            b'T' => Ok(SensorId::Temperature),
            b'H' => Ok(SensorId::Humidity),
            b'C' => Ok(SensorId::Co2),
            other => Err(UnknownSensor(other)),
        }
    }

    /// Wire letter for this sensor
    pub fn letter(self) -> u8 {
        match self {
            SensorId::Temperature => b'T',
            SensorId::Humidity => b'H',
            SensorId::Co2 => b'C',
        }
    }

    /// Position in [`SensorId::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Wire encoding of readings from this sensor
    pub fn encoding(self) -> ValueEncoding {
        match self {
            SensorId::Temperature => ValueEncoding::BaselineOffset,
            SensorId::Humidity | SensorId::Co2 => ValueEncoding::Magnitude,
        }
    }
}

impl TryFrom<u8> for SensorId {
    type Error = UnknownSensor;

    fn try_from(letter: u8) -> Result<Self, Self::Error> {
        Self::from_letter(letter)
    }
}

impl<const N: usize> FrameSender<N> {
    /// Append a reading using the sensor's wire encoding
    pub fn send_reading(&mut self, sensor: SensorId, value: u16) {
        match sensor.encoding() {
            ValueEncoding::BaselineOffset => self.send_baseline_offset(value),
            ValueEncoding::Magnitude => self.send_magnitude(value),
        }
    }

    /// `-(50 - v)` for `v <= 50`, `+(v - 50)` above
    pub fn send_baseline_offset(&mut self, value: u16) {
        if value <= TEMPERATURE_BASELINE {
            self.send_bytes(b"-");
            self.send_number(TEMPERATURE_BASELINE - value);
        } else {
            self.send_bytes(b"+");
            self.send_number(value - TEMPERATURE_BASELINE);
        }
    }

    /// `+` followed by the value
    pub fn send_magnitude(&mut self, value: u16) {
        self.send_bytes(b"+");
        self.send_number(value);
    }
}
