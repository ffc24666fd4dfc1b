//! Protocol task
//!
//! Feeds link bytes to the engine. The engine logs every dropped frame with
//! its cause; this task only reports totals when the link closes.

use log::{debug, info};

use climalink_core::{ProtocolEngine, RxStatus};
use climalink_protocol::Dialect;

use crate::channels::{LinkEvent, LINK_RX, RTDB, SENSORS};
use crate::sim::StdoutUart;

#[embassy_executor::task]
pub async fn protocol_task(tx: StdoutUart, dialect: Dialect) {
    info!("Protocol task started, {:?} dialect", dialect);

    let mut engine: ProtocolEngine<'static, StdoutUart> =
        ProtocolEngine::new(&SENSORS, &RTDB, tx, dialect);

    loop {
        match LINK_RX.receive().await {
            LinkEvent::Byte(byte) => match engine.receive_byte(byte) {
                Ok(RxStatus::Buffered) => {}
                Ok(RxStatus::Dispatched) => debug!("frame served"),
                // Already logged by the engine; nothing goes back on the link
                Err(_) => {}
            },
            LinkEvent::Closed => break,
        }
    }

    let stats = engine.stats();
    info!(
        "Link closed: {} served, {} rejected, {} failed, {} rx / {} tx overflows",
        stats.dispatched, stats.rejected, stats.failed, stats.rx_overflows, stats.tx_overflows
    );
    std::process::exit(0);
}
