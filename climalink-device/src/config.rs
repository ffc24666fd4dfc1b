//! Configuration loading
//!
//! Reads a TOML file into [`DeviceConfig`]. Without a file the embedded
//! `device.toml` is used; missing keys keep their defaults.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use log::info;

use climalink_core::config::DeviceConfig;

/// Embedded default configuration (compiled into the binary)
pub const EMBEDDED_CONFIG: &str = include_str!("../device.toml");

/// Parse and check a TOML configuration
pub fn parse_config(text: &str) -> Result<DeviceConfig> {
    let config: DeviceConfig = toml::from_str(text).context("malformed configuration")?;
    config
        .validate()
        .map_err(|e| anyhow!("invalid configuration: {e}"))?;
    Ok(config)
}

/// Load the configuration from `path`, or the embedded default
pub fn load(path: Option<&Path>) -> Result<DeviceConfig> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            let config = parse_config(&text).with_context(|| format!("in {}", path.display()))?;
            info!("Loaded configuration from {}", path.display());
            Ok(config)
        }
        None => {
            info!("No configuration file given, using embedded defaults");
            parse_config(EMBEDDED_CONFIG)
        }
    }
}

/// Log what the tasks are about to run with
pub fn log_summary(config: &DeviceConfig) {
    info!(
        "ADC: every {} ms, {} bits, {} mV full scale",
        config.adc.period_ms, config.adc.resolution_bits, config.adc.full_scale_mv
    );
    info!(
        "Buttons every {} ms, LEDs every {} ms",
        config.buttons.period_ms, config.leds.period_ms
    );
    if config.sensors.is_periodic() {
        info!("Sensor sampling every {} ms", config.sensors.period_ms);
    } else {
        info!("Sensor sampling on request only");
    }
    info!(
        "Protocol: {:?} dialect, newline after responses: {}",
        config.protocol.dialect, config.protocol.echo_newline
    );
}
