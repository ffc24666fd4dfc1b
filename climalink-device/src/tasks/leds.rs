//! LED actuation task
//!
//! LED requests land in the RTDB; this task applies them to the pins.

use embassy_time::{Duration, Ticker};
use log::info;

use climalink_core::io::drive_leds;
use climalink_protocol::command::LED_COUNT;

use crate::channels::RTDB;
use crate::sim::SimLed;

#[embassy_executor::task]
pub async fn led_task(mut leds: [SimLed; LED_COUNT], period_ms: u32) {
    info!("LED task started, period {} ms", period_ms);

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(period_ms)));

    loop {
        drive_leds(&mut leds, &RTDB);
        ticker.next().await;
    }
}
