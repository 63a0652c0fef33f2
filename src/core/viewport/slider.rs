/// Vertical zoom-rate slider: pixel rows `y0..=y1` map linearly onto
/// `0..=max_rate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomRateSlider {
    pub y0: i32,
    pub y1: i32,
}

impl ZoomRateSlider {
    /// Rate for `pixel_y`. Callers clamp `pixel_y` to the slider first;
    /// rows outside it extrapolate past the rate range.
    #[must_use]
    pub fn zoom_rate(&self, pixel_y: i32, max_rate: f64) -> f64 {
        let span = f64::from(self.y1) - f64::from(self.y0);

        (f64::from(pixel_y) - f64::from(self.y0)) / span * max_rate
    }

    /// Row of the slider marker for `zoom_rate`, the inverse of [`Self::zoom_rate`].
    #[must_use]
    pub fn marker_y(&self, zoom_rate: f64, max_rate: f64) -> i32 {
        let span = f64::from(self.y1) - f64::from(self.y0);

        self.y0 + (zoom_rate / max_rate * span) as i32
    }

    /// A slider needs at least two rows so the rate mapping is defined.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.y0 < self.y1
    }

    #[must_use]
    pub fn contains(&self, pixel_y: i32) -> bool {
        (self.y0..=self.y1).contains(&pixel_y)
    }

    #[must_use]
    pub fn clamp(&self, pixel_y: i32) -> i32 {
        pixel_y.max(self.y0).min(self.y1)
    }
}

impl Default for ZoomRateSlider {
    fn default() -> Self {
        Self { y0: 70, y1: 270 }
    }
}
