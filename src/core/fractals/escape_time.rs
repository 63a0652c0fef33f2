use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point::Point;
use crate::core::data::screen_size::ScreenSize;
use crate::core::fractals::escape::evaluate;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum EscapeTimeError {
    ZeroMaxIterationsError,
}

impl fmt::Display for EscapeTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for EscapeTimeError {}

/// Escape-time evaluation bound to one frame: the visible plane region, the
/// output resolution, the fractal and its iteration budget. Read-only, so a
/// single instance is shared by every worker of the pixel pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeTimeAlgorithm {
    plane: ComplexRect,
    screen: ScreenSize,
    kind: FractalKind,
    max_iterations: u32,
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = f64;

    fn compute(&self, pixel: Point) -> f64 {
        let point = pixel_to_complex_coords(pixel, self.screen, self.plane);
        evaluate(point, self.kind, self.max_iterations)
    }

    fn screen(&self) -> ScreenSize {
        self.screen
    }
}

impl EscapeTimeAlgorithm {
    pub fn new(
        plane: ComplexRect,
        screen: ScreenSize,
        kind: FractalKind,
        max_iterations: u32,
    ) -> Result<Self, EscapeTimeError> {
        if max_iterations == 0 {
            return Err(EscapeTimeError::ZeroMaxIterationsError);
        }

        Ok(Self {
            plane,
            screen,
            kind,
            max_iterations,
        })
    }

    #[must_use]
    pub fn plane(&self) -> ComplexRect {
        self.plane
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        self.kind
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    fn plane() -> ComplexRect {
        ComplexRect::new(Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0)).unwrap()
    }

    fn screen() -> ScreenSize {
        ScreenSize::new(4, 4).unwrap()
    }

    #[test]
    fn test_valid_constructor() {
        let algorithm = EscapeTimeAlgorithm::new(plane(), screen(), FractalKind::Mandelbrot, 256);

        assert!(algorithm.is_ok());
    }

    #[test]
    fn test_max_iterations_must_be_greater_than_zero() {
        let algorithm = EscapeTimeAlgorithm::new(plane(), screen(), FractalKind::Mandelbrot, 0);

        assert_eq!(algorithm, Err(EscapeTimeError::ZeroMaxIterationsError));
    }

    #[test]
    fn compute_maps_pixel_before_evaluating() {
        let algorithm =
            EscapeTimeAlgorithm::new(plane(), screen(), FractalKind::Mandelbrot, 100).unwrap();

        // pixel (2, 2) is the plane origin
        assert_eq!(algorithm.compute(Point { x: 2, y: 2 }), 100.0);
        // pixel (0, 0) is (-2, -2), outside the set
        assert!(algorithm.compute(Point { x: 0, y: 0 }) < 100.0);
    }

    #[test]
    fn compute_uses_julia_constant() {
        let kind = FractalKind::Julia {
            constant: Complex::ZERO,
        };
        let algorithm = EscapeTimeAlgorithm::new(plane(), screen(), kind, 100).unwrap();

        // (-1, -1) lies outside the unit disc and escapes for c = 0
        assert!(algorithm.compute(Point { x: 1, y: 1 }) < 100.0);
        assert_eq!(algorithm.compute(Point { x: 2, y: 2 }), 100.0);
    }
}
