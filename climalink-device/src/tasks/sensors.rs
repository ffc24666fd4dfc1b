//! Periodic synthetic sampling
//!
//! Only spawned when `sensors.period_ms` is non-zero; otherwise readings are
//! produced on request by the protocol task alone.

use embassy_time::{Duration, Ticker};
use log::{info, trace};

use climalink_protocol::SensorId;

use crate::channels::SENSORS;

#[embassy_executor::task]
pub async fn sensor_task(period_ms: u32) {
    info!("Sensor task started, period {} ms", period_ms);

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(period_ms)));

    loop {
        ticker.next().await;
        for sensor in SensorId::ALL {
            let value = SENSORS.generate(sensor);
            trace!("sample {}: {}", sensor.letter() as char, value);
        }
    }
}
