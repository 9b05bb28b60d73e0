#[cfg(test)]
#[path = "tracking_test.rs"]
mod tracking_test;

use crate::config::TIMINGS;

/// Minutes left until the tracked order arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EtaCountdown {
    minutes: u32,
}

impl Default for EtaCountdown {
    fn default() -> Self {
        Self::new(TIMINGS.initial_eta_minutes)
    }
}

impl EtaCountdown {
    pub fn new(minutes: u32) -> Self {
        Self { minutes }
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn is_due(&self) -> bool {
        self.minutes == 0
    }

    /// One minute passes. Stays at zero once reached.
    pub fn tick(&mut self) -> u32 {
        self.minutes = self.minutes.saturating_sub(1);
        self.minutes
    }
}
