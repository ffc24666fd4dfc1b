//! Configuration type definitions

use climalink_protocol::Dialect;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest accepted producer period
pub const MIN_PERIOD_MS: u32 = 1;

/// Widest supported ADC sample
pub const MAX_RESOLUTION_BITS: u8 = 16;

/// Configuration rejected by [`DeviceConfig::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A mandatory producer period is zero
    ZeroPeriod,
    /// ADC resolution is 0 or wider than [`MAX_RESOLUTION_BITS`]
    InvalidResolution(u8),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroPeriod => f.write_str("producer period must be at least 1 ms"),
            ConfigError::InvalidResolution(bits) => {
                write!(f, "unsupported ADC resolution: {bits} bits")
            }
        }
    }
}

/// ADC sampling configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct AdcConfig {
    /// Sampling period
    pub period_ms: u32,
    /// Raw sample width; larger samples are rejected
    pub resolution_bits: u8,
    /// Millivolts at the largest raw sample
    pub full_scale_mv: u16,
}

impl Default for AdcConfig {
    fn default() -> Self {
        Self {
            period_ms: 1000,
            resolution_bits: 10,
            full_scale_mv: 3000,
        }
    }
}

impl AdcConfig {
    /// Largest raw sample at the configured resolution
    pub fn max_raw(&self) -> u16 {
        ((1u32 << self.resolution_bits.min(MAX_RESOLUTION_BITS)) - 1) as u16
    }

    /// Scale a raw sample to millivolts
    ///
    /// Returns `None` if `raw` exceeds the configured resolution.
    pub fn millivolts(&self, raw: u16) -> Option<u16> {
        let max = self.max_raw();
        if raw > max || max == 0 {
            return None;
        }
        Some((u32::from(self.full_scale_mv) * u32::from(raw) / u32::from(max)) as u16)
    }
}

/// Period of a polling producer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct PollConfig {
    pub period_ms: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self { period_ms: 100 }
    }
}

/// Synthetic sensor sampling; a zero period samples only on request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SensorConfig {
    pub period_ms: u32,
}

impl SensorConfig {
    /// Whether a periodic producer should run
    pub fn is_periodic(&self) -> bool {
        self.period_ms > 0
    }
}

/// Protocol options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ProtocolConfig {
    /// Accepted opcode set
    pub dialect: Dialect,
    /// Terminate every response with a newline on the console link
    pub echo_newline: bool,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::Standard,
            echo_newline: true,
        }
    }
}

/// Complete device configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct DeviceConfig {
    pub adc: AdcConfig,
    pub buttons: PollConfig,
    pub leds: PollConfig,
    pub sensors: SensorConfig,
    pub protocol: ProtocolConfig,
}

impl DeviceConfig {
    /// Check the values a task cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let periods = [self.adc.period_ms, self.buttons.period_ms, self.leds.period_ms];
        if periods.iter().any(|&period| period < MIN_PERIOD_MS) {
            return Err(ConfigError::ZeroPeriod);
        }

        let bits = self.adc.resolution_bits;
        if bits == 0 || bits > MAX_RESOLUTION_BITS {
            return Err(ConfigError::InvalidResolution(bits));
        }

        Ok(())
    }
}
