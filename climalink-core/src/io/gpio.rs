//! Button polling and LED actuation through the RTDB

use climalink_hal::{InputPin, OutputPin};

use crate::rtdb::Rtdb;

/// Publish the level of every button pin
///
/// Pin `i` maps to button `i`; pins beyond the RTDB's button count are
/// ignored.
pub fn poll_buttons<P: InputPin>(pins: &[P], rtdb: &Rtdb) {
    for (index, pin) in pins.iter().enumerate() {
        let pressed = pin.is_high();
        if rtdb.set_button(index, pressed).is_err() {
            log::warn!("button pin {} has no RTDB slot", index);
            break;
        }
    }
}

/// Drive every LED pin to its requested RTDB state
pub fn drive_leds<P: OutputPin>(pins: &mut [P], rtdb: &Rtdb) {
    for (index, pin) in pins.iter_mut().enumerate() {
        match rtdb.led(index) {
            Ok(on) => {
                if pin.is_set_high() != on {
                    log::debug!("led {} -> {}", index, on);
                    pin.set_state(on);
                }
            }
            Err(_) => {
                log::warn!("led pin {} has no RTDB slot", index);
                break;
            }
        }
    }
}
