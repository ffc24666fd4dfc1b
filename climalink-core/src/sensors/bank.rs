//! The three sensor histories behind one lock each

use core::cell::RefCell;

use climalink_protocol::SensorId;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use heapless::Vec;

use super::history::{SensorHistory, HISTORY_CAPACITY};

type Guarded = Mutex<CriticalSectionRawMutex, RefCell<SensorHistory>>;

/// Shared histories for temperature, humidity and CO2
///
/// Suitable for a `static`. Every history has its own lock, so a producer
/// sampling one sensor never blocks a request for another.
pub struct SensorBank {
    histories: [Guarded; 3],
}

impl Default for SensorBank {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorBank {
    /// Create a bank of empty histories
    pub const fn new() -> Self {
        Self {
            histories: [
                Mutex::new(RefCell::new(SensorHistory::for_sensor(SensorId::Temperature))),
                Mutex::new(RefCell::new(SensorHistory::for_sensor(SensorId::Humidity))),
                Mutex::new(RefCell::new(SensorHistory::for_sensor(SensorId::Co2))),
            ],
        }
    }

    /// Run `f` with exclusive access to one history
    pub fn with<R>(&self, sensor: SensorId, f: impl FnOnce(&mut SensorHistory) -> R) -> R {
        self.histories[sensor.index()].lock(|cell| f(&mut *cell.borrow_mut()))
    }

    /// Produce and record the next reading of `sensor`
    pub fn generate(&self, sensor: SensorId) -> u16 {
        self.with(sensor, SensorHistory::generate)
    }

    /// True if `sensor` holds a full window of readings
    pub fn is_full(&self, sensor: SensorId) -> bool {
        self.with(sensor, |history| history.is_full())
    }

    /// Clear one history
    pub fn reset(&self, sensor: SensorId) {
        self.with(sensor, SensorHistory::reset);
    }

    /// Clear every history
    pub fn reset_all(&self) {
        for sensor in SensorId::ALL {
            self.reset(sensor);
        }
    }

    /// Copy of the full window of `sensor`, oldest first
    ///
    /// `None` while the history is not full.
    pub fn snapshot(&self, sensor: SensorId) -> Option<Vec<u16, HISTORY_CAPACITY>> {
        self.with(sensor, |history| {
            history.is_full().then(|| history.iter().collect())
        })
    }
}
