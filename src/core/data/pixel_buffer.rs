use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::screen_size::ScreenSize;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

fn screen_to_buffer_size(screen: ScreenSize) -> usize {
    screen.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        screen: ScreenSize,
    },
    BoundsMismatch {
        screen_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                screen_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "screen size {} does not match buffer size {}",
                    screen_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, screen } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} screen",
                    pixel.x,
                    pixel.y,
                    screen.width(),
                    screen.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA8 frame.
#[derive(Debug)]
pub struct PixelBuffer {
    screen: ScreenSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            screen,
            buffer: vec![0; screen_to_buffer_size(screen)],
        }
    }

    pub fn from_data(screen: ScreenSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected = screen_to_buffer_size(screen);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                screen_size: expected,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { screen, buffer })
    }

    #[must_use]
    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.screen.contains_pixel(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                screen: self.screen,
            });
        }

        let row_start = pixel.y as usize * self.screen.width() as usize;
        Ok((row_start + pixel.x as usize) * BYTES_PER_PIXEL)
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;
        let bytes = &self.buffer[index..index + BYTES_PER_PIXEL];

        Ok(Colour::rgba(bytes[0], bytes[1], bytes[2], bytes[3]))
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;
        self.buffer[index + 3] = colour.a;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(width: u32, height: u32) -> ScreenSize {
        ScreenSize::new(width, height).unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(screen(10, 10));

        assert_eq!(buffer.buffer_size(), 400); // 10 * 10 * 4
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, 255, // (0,0) red
            0, 255, 0, 255, // (1,0) green
        ];

        let buffer = PixelBuffer::from_data(screen(2, 1), data.clone()).unwrap();

        assert_eq!(buffer.buffer(), &data);
        assert_eq!(buffer.pixel(Point { x: 1, y: 0 }).unwrap(), Colour::rgb(0, 255, 0));
    }

    #[test]
    fn test_from_data_wrong_size() {
        let result = PixelBuffer::from_data(screen(2, 2), vec![0; 12]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                screen_size: 16,
                buffer_size: 12
            }
        );
    }

    #[test]
    fn test_set_pixel_row_major() {
        let mut buffer = PixelBuffer::new(screen(3, 3));
        let red = Colour::rgb(255, 0, 0);

        buffer.set_pixel(Point { x: 1, y: 1 }, red).unwrap();

        assert_eq!(&buffer.buffer()[16..20], &[255, 0, 0, 255]);
        assert_eq!(buffer.pixel(Point { x: 1, y: 1 }).unwrap(), red);
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let mut buffer = PixelBuffer::new(screen(3, 3));
        let result = buffer.set_pixel(Point { x: 3, y: 0 }, Colour::rgb(1, 2, 3));

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds {
                pixel: Point { x: 3, y: 0 },
                screen: screen(3, 3)
            })
        );
    }

    #[test]
    fn test_pixel_outside_bounds_negative() {
        let buffer = PixelBuffer::new(screen(3, 3));

        assert!(buffer.pixel(Point { x: -1, y: -1 }).is_err());
    }
}
