use crate::core::data::complex::Complex;

/// The escape-time recurrence being rendered.
///
/// `Julia` carries the constant `c` of `z ← z² + c`. It is captured once,
/// when the variant is entered, and never follows the viewport afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia { constant: Complex },
}

impl FractalKind {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia { .. } => "Julia",
        }
    }

    /// Cycles Mandelbrot ↔ Julia. Entering Julia freezes `center` as the
    /// Julia constant.
    #[must_use]
    pub fn toggled(self, center: Complex) -> Self {
        match self {
            Self::Mandelbrot => Self::Julia { constant: center },
            Self::Julia { .. } => Self::Mandelbrot,
        }
    }

    #[must_use]
    pub fn julia_constant(self) -> Option<Complex> {
        match self {
            Self::Mandelbrot => None,
            Self::Julia { constant } => Some(constant),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_mandelbrot() {
        assert_eq!(FractalKind::default(), FractalKind::Mandelbrot);
    }

    #[test]
    fn display_names() {
        assert_eq!(FractalKind::Mandelbrot.display_name(), "Mandelbrot");
        assert_eq!(
            FractalKind::Julia { constant: Complex::ZERO }.display_name(),
            "Julia"
        );
    }

    #[test]
    fn entering_julia_captures_center() {
        let center = Complex::new(0.42884, -0.231345);
        let kind = FractalKind::Mandelbrot.toggled(center);

        assert_eq!(kind, FractalKind::Julia { constant: center });
        assert_eq!(kind.julia_constant(), Some(center));
    }

    #[test]
    fn toggling_twice_returns_to_mandelbrot() {
        let kind = FractalKind::Mandelbrot
            .toggled(Complex::new(1.0, 2.0))
            .toggled(Complex::new(3.0, 4.0));

        assert_eq!(kind, FractalKind::Mandelbrot);
        assert_eq!(kind.julia_constant(), None);
    }
}
