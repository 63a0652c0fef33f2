use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScreenSizeError {
    ZeroDimension { width: u32, height: u32 },
    TooLarge { width: u32, height: u32 },
}

impl fmt::Display for ScreenSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(f, "screen size must be non-zero: {}x{}", width, height)
            }
            Self::TooLarge { width, height } => {
                write!(
                    f,
                    "screen size {}x{} exceeds {} pixels per side",
                    width, height, MAX_DIMENSION
                )
            }
        }
    }
}

impl Error for ScreenSizeError {}

/// Pixels are addressed with `i32` coordinates, so neither side may exceed
/// `i32::MAX`.
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

/// Output resolution of a frame, in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScreenSize {
    width: u32,
    height: u32,
}

impl ScreenSize {
    pub fn new(width: u32, height: u32) -> Result<Self, ScreenSizeError> {
        if width == 0 || height == 0 {
            return Err(ScreenSizeError::ZeroDimension { width, height });
        }

        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(ScreenSizeError::TooLarge { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width as a pixel coordinate bound. Exact, since sides never exceed
    /// [`MAX_DIMENSION`].
    #[must_use]
    pub fn pixel_columns(&self) -> i32 {
        i32::try_from(self.width).unwrap_or(i32::MAX)
    }

    #[must_use]
    pub fn pixel_rows(&self) -> i32 {
        i32::try_from(self.height).unwrap_or(i32::MAX)
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// True for pixels that are drawn into a frame of this size. The far
    /// edges `x == width` and `y == height` are valid plane coordinates but
    /// not drawable pixels.
    #[must_use]
    pub fn contains_pixel(&self, pixel: Point) -> bool {
        pixel.x >= 0
            && pixel.y >= 0
            && (pixel.x as i64) < i64::from(self.width)
            && (pixel.y as i64) < i64::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_size_new_valid() {
        let screen = ScreenSize::new(640, 480).unwrap();

        assert_eq!(screen.width(), 640);
        assert_eq!(screen.height(), 480);
        assert_eq!(screen.size(), 307_200);
    }

    #[test]
    fn test_screen_size_rejects_zero() {
        assert_eq!(
            ScreenSize::new(0, 480),
            Err(ScreenSizeError::ZeroDimension { width: 0, height: 480 })
        );
        assert_eq!(
            ScreenSize::new(640, 0),
            Err(ScreenSizeError::ZeroDimension { width: 640, height: 0 })
        );
    }

    #[test]
    fn test_screen_size_rejects_sides_beyond_i32() {
        let too_wide = u32::MAX;

        assert_eq!(
            ScreenSize::new(too_wide, 480),
            Err(ScreenSizeError::TooLarge {
                width: too_wide,
                height: 480
            })
        );
        assert!(ScreenSize::new(640, MAX_DIMENSION + 1).is_err());
    }

    #[test]
    fn test_largest_side_keeps_exact_pixel_bounds() {
        let screen = ScreenSize::new(MAX_DIMENSION, 1).unwrap();

        assert_eq!(screen.pixel_columns(), i32::MAX);
        assert_eq!(screen.pixel_rows(), 1);
    }

    #[test]
    fn test_contains_pixel() {
        let screen = ScreenSize::new(10, 5).unwrap();

        assert!(screen.contains_pixel(Point { x: 0, y: 0 }));
        assert!(screen.contains_pixel(Point { x: 9, y: 4 }));
        assert!(!screen.contains_pixel(Point { x: 10, y: 4 }));
        assert!(!screen.contains_pixel(Point { x: 9, y: 5 }));
        assert!(!screen.contains_pixel(Point { x: -1, y: 0 }));
    }
}
