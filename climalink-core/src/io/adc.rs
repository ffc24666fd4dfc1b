//! ADC sampling into the RTDB

use climalink_hal::AdcChannel;

use crate::config::AdcConfig;
use crate::rtdb::Rtdb;

/// Outcome of one sampling period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcSample {
    /// Stored in the RTDB
    Stored { raw: u16, millivolts: u16 },
    /// Raw value above the configured resolution; RTDB left untouched
    OutOfRange(u16),
    /// The driver failed; RTDB left untouched
    Failed,
}

/// Take one ADC sample and publish raw and scaled value
pub fn sample_adc<A: AdcChannel>(adc: &mut A, config: &AdcConfig, rtdb: &Rtdb) -> AdcSample {
    let raw = match adc.read_raw() {
        Ok(raw) => raw,
        Err(e) => {
            log::error!("adc read failed: {:?}", e);
            return AdcSample::Failed;
        }
    };

    let Some(millivolts) = config.millivolts(raw) else {
        log::warn!("adc sample out of range: {} > {}", raw, config.max_raw());
        return AdcSample::OutOfRange(raw);
    };

    rtdb.set_adc_raw(raw);
    rtdb.set_adc_millivolts(millivolts);
    log::trace!("adc: {} raw, {} mV", raw, millivolts);

    AdcSample::Stored { raw, millivolts }
}
