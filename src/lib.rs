pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use controllers::cli::zoom_sequence::ZoomSequenceController;
pub use controllers::session::{ExplorerConfig, ExplorerSession, FrameTelemetry};
pub use core::data::screen_size::ScreenSize;
pub use core::fractals::escape::evaluate;
pub use core::fractals::fractal_kinds::FractalKind;
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::run_gui;
