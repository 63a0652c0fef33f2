use log::debug;

use crate::controllers::session::frame_snapshot::{FrameSnapshot, RenderFrameError};
use crate::controllers::session::telemetry::FrameTelemetry;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::screen_size::ScreenSize;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::viewport::{Viewport, ViewportLimits, ViewportUpdateReport, ZoomRateSlider};
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum ExplorerSessionError {
    ZeroMaxIterationsError,
    InvalidLimits(ViewportLimits),
    InvalidSlider(ZoomRateSlider),
}

impl fmt::Display for ExplorerSessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidLimits(limits) => write!(
                f,
                "invalid viewport limits: zoom [{}, {}], max zoom rate {}",
                limits.min_zoom, limits.max_zoom, limits.max_zoom_rate
            ),
            Self::InvalidSlider(slider) => write!(
                f,
                "invalid zoom slider: rows {}..={} must span at least two rows",
                slider.y0, slider.y1
            ),
        }
    }
}

impl Error for ExplorerSessionError {}

/// State of one interactive exploration.
///
/// The host calls [`update`](Self::update) once per frame, then renders
/// from [`snapshot`](Self::snapshot) (or the `render_*` shorthands), which
/// never observe a half-applied update.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerSession {
    viewport: Viewport,
    kind: FractalKind,
    slider: ZoomRateSlider,
    max_iterations: u32,
}

impl ExplorerSession {
    pub fn new(
        viewport: Viewport,
        slider: ZoomRateSlider,
        max_iterations: u32,
    ) -> Result<Self, ExplorerSessionError> {
        if max_iterations == 0 {
            return Err(ExplorerSessionError::ZeroMaxIterationsError);
        }

        if !viewport.limits().is_valid() {
            return Err(ExplorerSessionError::InvalidLimits(viewport.limits()));
        }

        if !slider.is_valid() {
            return Err(ExplorerSessionError::InvalidSlider(slider));
        }

        Ok(Self {
            viewport,
            kind: FractalKind::default(),
            slider,
            max_iterations,
        })
    }

    /// Applies one frame of input, then advances the zoom by `elapsed_seconds`.
    ///
    /// `zoom_rate_input` is a slider row; it is clamped to the slider before
    /// being mapped to a rate.
    pub fn update(
        &mut self,
        elapsed_seconds: f64,
        zoom_rate_input: Option<i32>,
        toggle_requested: bool,
    ) -> ViewportUpdateReport {
        if let Some(pixel_y) = zoom_rate_input {
            self.viewport
                .set_zoom_rate(self.slider.clamp(pixel_y), &self.slider);
        }

        if toggle_requested {
            self.toggle_fractal();
        }

        self.viewport.advance(elapsed_seconds)
    }

    pub fn toggle_fractal(&mut self) {
        self.kind = self.viewport.toggle_fractal(self.kind);
        debug!(
            "switched to {} at ({}, {})",
            self.kind.display_name(),
            self.viewport.center().real,
            self.viewport.center().imag
        );
    }

    #[must_use]
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            viewport: self.viewport,
            kind: self.kind,
            max_iterations: self.max_iterations,
        }
    }

    #[must_use]
    pub fn render_pixel(&self, pixel: Point, screen: ScreenSize) -> Colour {
        self.snapshot().render_pixel(pixel, screen)
    }

    pub fn render_frame(&self, screen: ScreenSize) -> Result<PixelBuffer, RenderFrameError> {
        self.snapshot().render_frame(screen)
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    #[must_use]
    pub fn slider(&self) -> ZoomRateSlider {
        self.slider
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    #[must_use]
    pub fn zoom_rate(&self) -> f64 {
        self.viewport.zoom_rate()
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.viewport.center()
    }

    #[must_use]
    pub fn fractal_kind(&self) -> FractalKind {
        self.kind
    }

    #[must_use]
    pub fn fractal_name(&self) -> &'static str {
        self.kind.display_name()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn telemetry(&self) -> FrameTelemetry {
        FrameTelemetry {
            zoom_rate: self.zoom_rate(),
            zoom: self.zoom(),
            center: self.center(),
            fractal_name: self.fractal_name(),
        }
    }
}
