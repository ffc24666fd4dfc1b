//! Triangle-wave ADC

use core::convert::Infallible;

use climalink_hal::AdcChannel;

/// ADC channel sweeping up and down its full range
pub struct SimAdc {
    resolution_bits: u8,
    value: u16,
    step: u16,
    rising: bool,
}

impl SimAdc {
    pub fn new(resolution_bits: u8, step: u16) -> Self {
        Self {
            resolution_bits,
            value: 0,
            step: step.max(1),
            rising: true,
        }
    }
}

impl AdcChannel for SimAdc {
    type Error = Infallible;

    fn read_raw(&mut self) -> Result<u16, Self::Error> {
        let sample = self.value;
        let max = self.max_raw();

        if self.rising {
            self.value = self.value.saturating_add(self.step).min(max);
            self.rising = self.value < max;
        } else {
            self.value = self.value.saturating_sub(self.step);
            self.rising = self.value == 0;
        }

        Ok(sample)
    }

    fn resolution_bits(&self) -> u8 {
        self.resolution_bits
    }
}
