//! GPIO pin abstractions
//!
//! The node drives four LEDs and reads four push buttons. Pins are addressed
//! by their position in a slice, which is the `id` used on the wire and in the
//! real-time data store.

/// Digital output pin (LED)
///
/// Setting a pin is assumed to be infallible at this layer; drivers that can
/// fail are expected to log and swallow the error.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin (button)
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}
