use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::screen_size::ScreenSize;
use crate::core::fractals::colour_mapping::palette::{PaletteColourMap, map_colour};
use crate::core::fractals::escape::evaluate;
use crate::core::fractals::escape_time::{EscapeTimeAlgorithm, EscapeTimeError};
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum RenderFrameError {
    EscapeTime(EscapeTimeError),
    PixelBuffer(GeneratePixelBufferError),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EscapeTime(err) => write!(f, "escape time error: {}", err),
            Self::PixelBuffer(err) => write!(f, "{}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EscapeTime(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<EscapeTimeError> for RenderFrameError {
    fn from(err: EscapeTimeError) -> Self {
        Self::EscapeTime(err)
    }
}

impl From<GeneratePixelBufferError> for RenderFrameError {
    fn from(err: GeneratePixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Immutable copy of the session state taken after the frame's update.
/// Every pixel of a frame is rendered from the same snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    pub viewport: Viewport,
    pub kind: FractalKind,
    pub max_iterations: u32,
}

impl FrameSnapshot {
    #[must_use]
    pub fn escape_value(&self, pixel: Point, screen: ScreenSize) -> f64 {
        let point = self.viewport.pixel_to_plane(pixel, screen);
        evaluate(point, self.kind, self.max_iterations)
    }

    #[must_use]
    pub fn render_pixel(&self, pixel: Point, screen: ScreenSize) -> Colour {
        map_colour(self.escape_value(pixel, screen), self.max_iterations)
    }

    pub fn algorithm(&self, screen: ScreenSize) -> Result<EscapeTimeAlgorithm, EscapeTimeError> {
        EscapeTimeAlgorithm::new(
            self.viewport.effective_rect(),
            screen,
            self.kind,
            self.max_iterations,
        )
    }

    /// Renders the whole frame, rows distributed across the rayon pool.
    pub fn render_frame(&self, screen: ScreenSize) -> Result<PixelBuffer, RenderFrameError> {
        let algorithm = self.algorithm(screen)?;
        let escape_values = generate_fractal_parallel_rayon(&algorithm);
        let colour_map = PaletteColourMap::new(self.max_iterations);

        Ok(generate_pixel_buffer(escape_values, &colour_map, screen)?)
    }
}
