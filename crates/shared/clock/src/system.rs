use chrono::Utc;
use pivot_core::Timestamp;
use pivot_ports::Clock;

/// Wall-clock time source
///
/// The only place in the workspace that reads ambient time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_tracks_wall_time() {
        let before = Utc::now();
        let reading = SystemClock::new().now();
        let after = Utc::now();

        assert!(before <= reading && reading <= after);
    }
}
