#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

use dioxus::logger::tracing::info;

use crate::{
    Observer,
    clock::sleep,
    config::{TIMINGS, Timings},
    router::Screen,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaymentState {
    #[default]
    Idle,
    Processing,
    Succeeded,
}

/// Simulated checkout. Always succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentProcessor {
    pub timings: Timings,
}

impl Default for PaymentProcessor {
    fn default() -> Self {
        Self { timings: TIMINGS }
    }
}

impl PaymentProcessor {
    pub fn new(timings: Timings) -> Self {
        Self { timings }
    }

    /// Drives the payment to completion and returns the screen to show next.
    pub async fn run(&self, observer: &mut impl Observer<PaymentState>) -> Screen {
        info!("Payment started");
        observer.publish(PaymentState::Processing);
        sleep(self.timings.payment_delay).await;

        info!("Payment succeeded");
        observer.publish(PaymentState::Succeeded);
        sleep(self.timings.payment_redirect_delay).await;

        Screen::OrderTracking
    }
}
