//! Input adapters for the fractal explorer.
//!
//! `sidebar` turns pointer state into per-frame session input and is shared
//! by every host; `gui` is the windowed host itself.

pub mod sidebar;

#[cfg(feature = "gui")]
pub mod gui;
