use crate::controllers::session::explorer_session::{ExplorerSession, ExplorerSessionError};
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::viewport::{Viewport, ViewportLimits, ZoomRateSlider};
use std::error::Error;
use std::fmt;

pub const DEFAULT_MAX_ITERATIONS: u32 = 200;

#[derive(Debug, PartialEq)]
pub enum ExplorerConfigError {
    InvalidBase(ComplexRectError),
    InvalidLimits(ViewportLimits),
    InvalidSlider(ZoomRateSlider),
    ZoomRateOutOfRange { zoom_rate: f64, max_zoom_rate: f64 },
    Session(ExplorerSessionError),
}

impl fmt::Display for ExplorerConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBase(err) => write!(f, "invalid base bounds: {}", err),
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
            Self::ZoomRateOutOfRange {
                zoom_rate,
                max_zoom_rate,
            } => write!(
                f,
                "zoom rate {} is outside [0, {}]",
                zoom_rate, max_zoom_rate
            ),
            Self::Session(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ExplorerConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidBase(err) => Some(err),
            Self::InvalidLimits(_) | Self::InvalidSlider(_) => None,
            Self::ZoomRateOutOfRange { .. } => None,
            Self::Session(err) => Some(err),
        }
    }
}

impl From<ComplexRectError> for ExplorerConfigError {
    fn from(err: ComplexRectError) -> Self {
        Self::InvalidBase(err)
    }
}

impl From<ExplorerSessionError> for ExplorerConfigError {
    fn from(err: ExplorerSessionError) -> Self {
        Self::Session(err)
    }
}

/// Start-up parameters of a session, before validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub center: Complex,
    pub zoom_rate: f64,
    pub max_iterations: u32,
    pub start_with_julia: bool,
    pub slider: ZoomRateSlider,
    pub limits: ViewportLimits,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            min_x: -2.5,
            max_x: 1.0,
            min_y: -1.5,
            max_y: 1.5,
            // Seahorse Valley
            center: Complex::new(0.42884, -0.231345),
            zoom_rate: 0.01,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            start_with_julia: false,
            slider: ZoomRateSlider::default(),
            limits: ViewportLimits::default(),
        }
    }
}

impl ExplorerConfig {
    pub fn build_session(&self) -> Result<ExplorerSession, ExplorerConfigError> {
        let base = ComplexRect::new(
            Complex::new(self.min_x, self.min_y),
            Complex::new(self.max_x, self.max_y),
        )?;

        if !self.limits.is_valid() {
            return Err(ExplorerConfigError::InvalidLimits(self.limits));
        }

        if !self.slider.is_valid() {
            return Err(ExplorerConfigError::InvalidSlider(self.slider));
        }

        if !(0.0..=self.limits.max_zoom_rate).contains(&self.zoom_rate) {
            return Err(ExplorerConfigError::ZoomRateOutOfRange {
                zoom_rate: self.zoom_rate,
                max_zoom_rate: self.limits.max_zoom_rate,
            });
        }

        let mut viewport = Viewport::with_limits(base, self.center, self.limits);
        viewport.set_zoom_rate_value(self.zoom_rate);

        let mut session = ExplorerSession::new(viewport, self.slider, self.max_iterations)?;
        if self.start_with_julia {
            session.toggle_fractal();
        }

        Ok(session)
    }
}
