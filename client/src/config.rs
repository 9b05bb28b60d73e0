use std::time::Duration;

const INITIAL_ETA_MINUTES: u32 = 25;

/// Latencies of the simulated flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub auth_delay: Duration,
    pub payment_delay: Duration,
    pub payment_redirect_delay: Duration,
    pub eta_tick: Duration,
    pub initial_eta_minutes: u32,
}

impl Timings {
    /// Same flows with no waiting, for tests.
    pub const fn instant() -> Self {
        Self {
            auth_delay: Duration::ZERO,
            payment_delay: Duration::ZERO,
            payment_redirect_delay: Duration::ZERO,
            eta_tick: Duration::ZERO,
            initial_eta_minutes: INITIAL_ETA_MINUTES,
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        TIMINGS
    }
}

pub static TIMINGS: Timings = Timings {
    auth_delay: Duration::from_millis(500),
    payment_delay: Duration::from_secs(2),
    payment_redirect_delay: Duration::from_secs(2),
    eta_tick: Duration::from_secs(60),
    initial_eta_minutes: INITIAL_ETA_MINUTES,
};
