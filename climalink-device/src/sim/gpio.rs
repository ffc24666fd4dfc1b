//! Simulated LEDs and push buttons

use std::time::Instant;

use climalink_hal::{InputPin, OutputPin};

/// LED that logs every change of state
pub struct SimLed {
    index: usize,
    lit: bool,
}

impl SimLed {
    pub fn new(index: usize) -> Self {
        Self { index, lit: false }
    }
}

impl OutputPin for SimLed {
    fn set_high(&mut self) {
        if !self.lit {
            log::info!("LED{} on", self.index);
        }
        self.lit = true;
    }

    fn set_low(&mut self) {
        if self.lit {
            log::info!("LED{} off", self.index);
        }
        self.lit = false;
    }

    fn is_set_high(&self) -> bool {
        self.lit
    }
}

/// Button pressed and released on a fixed cycle
///
/// Button `n` is held for one half of a `(n + 1) * cycle_ms` period and
/// released for the other, so the four buttons toggle at different rates.
pub struct SimButton {
    half_period_ms: u128,
    started: Instant,
}

impl SimButton {
    pub fn new(index: usize, cycle_ms: u32) -> Self {
        let period = (index as u128 + 1) * u128::from(cycle_ms.max(2));
        Self {
            half_period_ms: period / 2,
            started: Instant::now(),
        }
    }

    fn pressed_at(&self, elapsed_ms: u128) -> bool {
        (elapsed_ms / self.half_period_ms) % 2 == 1
    }
}

impl InputPin for SimButton {
    fn is_high(&self) -> bool {
        self.pressed_at(self.started.elapsed().as_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn led_tracks_state() {
        let mut led = SimLed::new(0);
        assert!(!led.is_set_high());
        led.set_state(true);
        assert!(led.is_set_high());
        led.set_low();
        assert!(!led.is_set_high());
    }

    #[test]
    fn button_pattern() {
        let button = SimButton::new(1, 1000);
        // 2000 ms period: released for 1000 ms, then held for 1000 ms
        assert!(!button.pressed_at(0));
        assert!(!button.pressed_at(999));
        assert!(button.pressed_at(1000));
        assert!(button.pressed_at(1999));
        assert!(!button.pressed_at(2000));
    }
}
