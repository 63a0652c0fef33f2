//! Windowed host for interactive fractal exploration.
//!
//! winit owns the window and event loop, pixels the framebuffer, and egui
//! draws the telemetry overlay on top.

mod app;
mod overlay;

pub use app::run_gui;
