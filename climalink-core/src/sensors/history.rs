//! Fixed-capacity ring of recent readings

use climalink_protocol::SensorId;

use super::samples::{CO2_SAMPLES, HUMIDITY_SAMPLES, SAMPLE_TABLE_LEN, TEMPERATURE_SAMPLES};

/// Readings kept per sensor
pub const HISTORY_CAPACITY: usize = 20;

/// History lookup errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HistoryError {
    /// Index is 0, beyond the capacity, or not written since the last reset
    ValueNotAvailable,
}

impl core::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HistoryError::ValueNotAvailable => f.write_str("history value not available"),
        }
    }
}

/// Recent readings of one sensor plus its synthetic value generator
///
/// The ring is addressed externally with 1-based chronological indices:
/// `get_history(1)` is the oldest reading still kept and
/// `get_history(len())` the newest.
#[derive(Debug, Clone)]
pub struct SensorHistory {
    samples: &'static [u16; SAMPLE_TABLE_LEN],
    sample_cursor: usize,
    readings: [u16; HISTORY_CAPACITY],
    /// Slot the next reading goes into; always < HISTORY_CAPACITY
    next: usize,
    full: bool,
}

impl SensorHistory {
    /// Create an empty history replaying `samples`
    pub const fn new(samples: &'static [u16; SAMPLE_TABLE_LEN]) -> Self {
        Self {
            samples,
            sample_cursor: 0,
            readings: [0; HISTORY_CAPACITY],
            next: 0,
            full: false,
        }
    }

    /// Empty history for the given sensor's synthetic table
    pub const fn for_sensor(sensor: SensorId) -> Self {
        match sensor {
            SensorId::Temperature => Self::new(&TEMPERATURE_SAMPLES),
            SensorId::Humidity => Self::new(&HUMIDITY_SAMPLES),
            SensorId::Co2 => Self::new(&CO2_SAMPLES),
        }
    }

    /// Produce the next synthetic reading and record it
    pub fn generate(&mut self) -> u16 {
        let value = self.samples[self.sample_cursor];
        self.sample_cursor = (self.sample_cursor + 1) % SAMPLE_TABLE_LEN;

        self.readings[self.next] = value;
        self.next = (self.next + 1) % HISTORY_CAPACITY;
        if self.next == 0 {
            self.full = true;
        }

        value
    }

    /// Reading at chronological position `index` (1 = oldest kept)
    pub fn get_history(&self, index: usize) -> Result<u16, HistoryError> {
        if index == 0 || index > self.len() {
            return Err(HistoryError::ValueNotAvailable);
        }

        let oldest = if self.full { self.next } else { 0 };
        Ok(self.readings[(oldest + index - 1) % HISTORY_CAPACITY])
    }

    /// Readings from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        (1..=self.len()).filter_map(move |index| self.get_history(index).ok())
    }

    /// True once [`HISTORY_CAPACITY`] readings were recorded since the last reset
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Number of readings available
    pub fn len(&self) -> usize {
        if self.full {
            HISTORY_CAPACITY
        } else {
            self.next
        }
    }

    /// True if nothing was recorded since the last reset
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget all readings
    ///
    /// The synthetic generator keeps its position, so the readings produced
    /// after a reset continue where the table left off.
    pub fn reset(&mut self) {
        self.next = 0;
        self.full = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_replays_table() {
        let mut history = SensorHistory::for_sensor(SensorId::Temperature);
        assert_eq!(history.generate(), 85);
        assert_eq!(history.generate(), 21);
        assert_eq!(history.generate(), 48);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_full_after_capacity() {
        let mut history = SensorHistory::for_sensor(SensorId::Humidity);
        for _ in 0..HISTORY_CAPACITY - 1 {
            history.generate();
        }
        assert!(!history.is_full());

        history.generate();
        assert!(history.is_full());

        // Stays full while wrapping
        for _ in 0..HISTORY_CAPACITY + 5 {
            history.generate();
            assert!(history.is_full());
        }
    }

    #[test]
    fn test_index_bounds() {
        let mut history = SensorHistory::for_sensor(SensorId::Co2);
        history.generate();

        assert_eq!(history.get_history(0), Err(HistoryError::ValueNotAvailable));
        assert_eq!(history.get_history(1), Ok(7524));
        assert_eq!(history.get_history(2), Err(HistoryError::ValueNotAvailable));
        assert_eq!(
            history.get_history(HISTORY_CAPACITY + 1),
            Err(HistoryError::ValueNotAvailable)
        );
    }

    #[test]
    fn test_chronological_order_after_wrap() {
        let mut history = SensorHistory::for_sensor(SensorId::Temperature);
        for _ in 0..HISTORY_CAPACITY + 3 {
            history.generate();
        }

        // Samples 3..23 of the table are kept, oldest first
        let expected = &TEMPERATURE_SAMPLES[3..3 + HISTORY_CAPACITY];
        let kept: heapless::Vec<u16, HISTORY_CAPACITY> = history.iter().collect();
        assert_eq!(&kept[..], expected);
        assert_eq!(history.get_history(1), Ok(104));
        assert_eq!(history.get_history(HISTORY_CAPACITY), Ok(TEMPERATURE_SAMPLES[22]));
    }

    #[test]
    fn test_reset_empties_but_keeps_generator_position() {
        let mut history = SensorHistory::for_sensor(SensorId::Temperature);
        for _ in 0..HISTORY_CAPACITY {
            history.generate();
        }
        assert!(history.is_full());

        history.reset();
        assert!(!history.is_full());
        assert!(history.is_empty());
        assert_eq!(history.get_history(1), Err(HistoryError::ValueNotAvailable));

        // Table position 20 comes next, not position 0
        assert_eq!(history.generate(), TEMPERATURE_SAMPLES[HISTORY_CAPACITY]);
    }

    #[test]
    fn test_reset_on_empty_history() {
        let mut history = SensorHistory::for_sensor(SensorId::Humidity);
        history.reset();
        history.reset();
        assert_eq!(history.get_history(1), Err(HistoryError::ValueNotAvailable));
    }

    #[test]
    fn test_generator_wraps_table() {
        let mut history = SensorHistory::for_sensor(SensorId::Humidity);
        for _ in 0..SAMPLE_TABLE_LEN {
            history.generate();
        }
        assert_eq!(history.generate(), HUMIDITY_SAMPLES[0]);
    }
}
