//! ADC sampling task

use embassy_time::{Duration, Ticker};
use log::info;

use climalink_core::config::AdcConfig;
use climalink_core::io::sample_adc;

use crate::channels::RTDB;
use crate::sim::SimAdc;

/// Sample the ADC into the RTDB once per period
#[embassy_executor::task]
pub async fn adc_task(mut adc: SimAdc, config: AdcConfig) {
    info!("ADC task started, period {} ms", config.period_ms);

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(config.period_ms)));

    loop {
        sample_adc(&mut adc, &config, &RTDB);
        ticker.next().await;
    }
}
