use chrono::Duration;
use pivot_core::Timestamp;
use pivot_ports::Clock;
use std::sync::RwLock;

/// Frozen clock for deterministic tests
///
/// Time only changes through [`FixedClock::set_time`] or [`FixedClock::advance`].
pub struct FixedClock {
    current_time: RwLock<Timestamp>,
}

impl FixedClock {
    pub fn new(time: Timestamp) -> Self {
        Self {
            current_time: RwLock::new(time),
        }
    }

    /// Move the frozen time forward (or backward, for a negative duration)
    pub fn advance(&self, duration: Duration) {
        let mut current = self
            .current_time
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *current += duration;
    }

    /// Jump to an explicit time
    pub fn set_time(&self, time: Timestamp) {
        let mut current = self
            .current_time
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = time;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self
            .current_time
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}
