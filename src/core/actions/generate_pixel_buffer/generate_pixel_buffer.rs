use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
use crate::core::data::screen_size::ScreenSize;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum GeneratePixelBufferError {
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Maps row-major input values to colours and packs them into a buffer
/// for `screen`. Fails when `input` does not hold one value per pixel.
pub fn generate_pixel_buffer<T, CMap: ColourMap<T = T>>(
    input: Vec<T>,
    mapper: &CMap,
    screen: ScreenSize,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let mut buffer = Vec::with_capacity(input.len() * BYTES_PER_PIXEL);

    for value in input {
        let colour = mapper.map(value);

        buffer.extend_from_slice(&[colour.r, colour.g, colour.b, colour.a]);
    }

    Ok(PixelBuffer::from_data(screen, buffer)?)
}
