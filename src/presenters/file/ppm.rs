use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes frames as binary PPM. PPM has no alpha channel, so the reserved
/// transparent colour comes out black.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        let file = std::fs::File::create(filepath)?;
        let mut writer = BufWriter::new(file);

        write_ppm(buffer, &mut writer)?;
        writer.flush()
    }

    fn extension(&self) -> &str {
        "ppm"
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

pub fn write_ppm<W: Write>(buffer: &PixelBuffer, writer: &mut W) -> std::io::Result<()> {
    let width = buffer.screen().width();
    let height = buffer.screen().height();

    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", width, height)?;
    writeln!(writer, "255")?;

    for pixel in buffer.buffer().chunks_exact(BYTES_PER_PIXEL) {
        writer.write_all(&pixel[..3])?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use crate::core::data::screen_size::ScreenSize;

    fn buffer() -> PixelBuffer {
        let mut buffer = PixelBuffer::new(ScreenSize::new(2, 1).unwrap());
        buffer
            .set_pixel(Point { x: 0, y: 0 }, Colour::rgb(66, 30, 15))
            .unwrap();
        buffer
    }

    #[test]
    fn write_ppm_drops_alpha() {
        let mut bytes = Vec::new();

        write_ppm(&buffer(), &mut bytes).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[66, 30, 15, 0, 0, 0]);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn present_writes_file() {
        let path = std::env::temp_dir().join(format!("fractal_zoom_ppm_{}.ppm", std::process::id()));
        let presenter = PpmFilePresenter::new();

        presenter.present(&buffer(), &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(bytes.starts_with(b"P6\n2 1\n255\n"));
        assert_eq!(bytes.len(), 11 + 6);
        assert_eq!(presenter.extension(), "ppm");
    }

    #[test]
    fn present_fails_for_missing_directory() {
        let path = Path::new("/nonexistent-fractal-zoom-dir/frame.ppm");

        assert!(PpmFilePresenter::new().present(&buffer(), path).is_err());
    }
}
