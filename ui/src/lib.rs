//! Screens and components shared by every platform launcher.

mod app;
mod components;
mod views;

pub use app::App;
