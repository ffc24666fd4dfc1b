//! Embassy async tasks
//!
//! One periodic task per producer, one for LED actuation and the protocol
//! task. They share state only through the RTDB and the sensor histories.

pub mod adc;
pub mod buttons;
pub mod leds;
pub mod protocol;
pub mod sensors;

pub use adc::adc_task;
pub use buttons::button_task;
pub use leds::led_task;
pub use protocol::protocol_task;
pub use sensors::sensor_task;
