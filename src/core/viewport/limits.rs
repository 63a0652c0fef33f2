#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportLimits {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub max_zoom_rate: f64,
}

impl ViewportLimits {
    /// `1 <= min_zoom <= max_zoom`, both finite, and a finite non-negative
    /// `max_zoom_rate`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min_zoom.is_finite()
            && self.max_zoom.is_finite()
            && self.max_zoom_rate.is_finite()
            && self.min_zoom >= 1.0
            && self.min_zoom <= self.max_zoom
            && self.max_zoom_rate >= 0.0
    }

    /// Clamps `zoom` into `[min_zoom, max_zoom]`. Never panics, even for
    /// limits that fail [`Self::is_valid`].
    #[must_use]
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.max(self.min_zoom).min(self.max_zoom)
    }
}

impl Default for ViewportLimits {
    fn default() -> Self {
        Self {
            min_zoom: 1.0,
            max_zoom: 1e15,
            max_zoom_rate: 0.5,
        }
    }
}
