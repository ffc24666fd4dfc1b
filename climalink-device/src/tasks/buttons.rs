//! Button polling task

use embassy_time::{Duration, Ticker};
use log::info;

use climalink_core::io::poll_buttons;
use climalink_protocol::command::BUTTON_COUNT;

use crate::channels::RTDB;
use crate::sim::SimButton;

#[embassy_executor::task]
pub async fn button_task(buttons: [SimButton; BUTTON_COUNT], period_ms: u32) {
    info!("Button task started, period {} ms", period_ms);

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(period_ms)));

    loop {
        poll_buttons(&buttons, &RTDB);
        ticker.next().await;
    }
}
