use crate::core::data::complex::Complex;
use std::fmt;

/// Read-only values shown by the on-screen overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTelemetry {
    pub zoom_rate: f64,
    pub zoom: f64,
    pub center: Complex,
    pub fractal_name: &'static str,
}

impl FrameTelemetry {
    #[must_use]
    pub fn lines(&self) -> [String; 4] {
        [
            format!("Zoom Speed: {:.3}", self.zoom_rate),
            format!("Zoom Level: {:.2}", self.zoom),
            format!("Center: ({:.6}, {:.6})", self.center.real, self.center.imag),
            format!("Fractal: {}", self.fractal_name),
        ]
    }
}

impl fmt::Display for FrameTelemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join(" | "))
    }
}
