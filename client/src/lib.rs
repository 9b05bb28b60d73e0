pub mod clock;
pub mod config;
pub mod payment;
pub mod router;
pub mod session;
pub mod tracking;

/// Receives state updates from a simulated flow. Screens pass their
/// signals; tests pass a recorder.
pub trait Observer<T> {
    fn publish(&mut self, value: T);
}

impl<T: 'static> Observer<T> for dioxus::prelude::Signal<T> {
    fn publish(&mut self, value: T) {
        use dioxus::prelude::Writable;

        self.set(value);
    }
}

impl<T> Observer<T> for Vec<T> {
    fn publish(&mut self, value: T) {
        self.push(value);
    }
}
