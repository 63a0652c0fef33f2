use log::debug;

use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point::Point;
use crate::core::data::screen_size::ScreenSize;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use crate::core::viewport::limits::ViewportLimits;
use crate::core::viewport::slider::ZoomRateSlider;
use crate::core::viewport::status::{ViewportUpdateReport, ViewportWarning};

pub const DEFAULT_ZOOM_RATE: f64 = 0.01;

/// The region of the plane currently mapped onto the screen.
///
/// `base` is the unzoomed rectangle. The visible rectangle has the base
/// extent divided by `zoom` and is centred on `center`. `zoom` stays within
/// `limits` after every mutation. The type is `Copy` so a frame can take a
/// snapshot and render from it while the next update is prepared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    base: ComplexRect,
    center: Complex,
    zoom: f64,
    zoom_rate: f64,
    limits: ViewportLimits,
}

impl Viewport {
    #[must_use]
    pub fn new(base: ComplexRect, center: Complex) -> Self {
        Self::with_limits(base, center, ViewportLimits::default())
    }

    #[must_use]
    pub fn with_limits(base: ComplexRect, center: Complex, limits: ViewportLimits) -> Self {
        Self {
            base,
            center,
            zoom: limits.min_zoom,
            zoom_rate: DEFAULT_ZOOM_RATE,
            limits,
        }
    }

    #[must_use]
    pub fn base(&self) -> ComplexRect {
        self.base
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn zoom_rate(&self) -> f64 {
        self.zoom_rate
    }

    #[must_use]
    pub fn limits(&self) -> ViewportLimits {
        self.limits
    }

    pub fn set_center(&mut self, center: Complex) {
        self.center = center;
    }

    /// Sets the zoom directly, clamped to the limits.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = self.limits.clamp_zoom(zoom);
    }

    pub fn set_zoom_rate_value(&mut self, zoom_rate: f64) {
        self.zoom_rate = zoom_rate;
    }

    /// Sets the zoom rate from a slider row. `pixel_y` is expected inside the
    /// slider; the caller clamps it.
    pub fn set_zoom_rate(&mut self, pixel_y: i32, slider: &ZoomRateSlider) {
        self.zoom_rate = slider.zoom_rate(pixel_y, self.limits.max_zoom_rate);
    }

    /// Compounds the zoom by `(1 + zoom_rate)` per elapsed second, then
    /// clamps. The growth depends only on total elapsed time, not on how it
    /// is split across frames.
    pub fn advance(&mut self, elapsed_seconds: f64) -> ViewportUpdateReport {
        let mut report = ViewportUpdateReport::default();

        let elapsed = if elapsed_seconds.is_finite() {
            elapsed_seconds
        } else {
            report.warning = Some(ViewportWarning::NonFiniteElapsed);
            0.0
        };

        let zoomed = self.zoom * (1.0 + self.zoom_rate).powf(elapsed);
        let clamped = if zoomed.is_nan() {
            self.zoom
        } else {
            self.limits.clamp_zoom(zoomed)
        };

        if clamped != zoomed {
            debug!("zoom {} clamped to {}", zoomed, clamped);
            report.zoom_clamped = true;
            report.warning = report.warning.or(Some(ViewportWarning::ZoomClamped));
        }

        self.zoom = clamped;
        report
    }

    /// Cycles the fractal, freezing the current center as the Julia constant
    /// when Julia is entered.
    #[must_use]
    pub fn toggle_fractal(&self, current: FractalKind) -> FractalKind {
        current.toggled(self.center)
    }

    /// The currently visible rectangle.
    #[must_use]
    pub fn effective_rect(&self) -> ComplexRect {
        ComplexRect::around(
            self.center,
            self.base.width() / self.zoom,
            self.base.height() / self.zoom,
        )
    }

    #[must_use]
    pub fn pixel_to_plane(&self, pixel: Point, screen: ScreenSize) -> Complex {
        pixel_to_complex_coords(pixel, screen, self.effective_rect())
    }
}
