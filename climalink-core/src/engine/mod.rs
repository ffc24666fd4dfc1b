//! Command dispatch and the byte-driven protocol engine
//!
//! ```text
//! bytes -> FrameReceiver -> validate -> Dispatcher -> {SensorBank, Rtdb}
//!                                            |
//!                                            v
//!                                       FrameSender -> UartTx
//! ```

pub mod dispatcher;
pub mod error;
pub mod protocol;

pub use dispatcher::Dispatcher;
pub use error::{DispatchError, ProtocolError};
pub use protocol::{EngineStats, ProtocolEngine, RxStatus};
