use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point::Point;
use crate::core::data::screen_size::ScreenSize;

/// Linearly maps a pixel onto `complex_rect`.
///
/// Pixel `(0, 0)` lands on the rect's top-left corner and `(width, height)`
/// on its bottom-right corner, so the last drawable pixel sits one step
/// short of the far edge. Pixels outside the screen extrapolate linearly.
#[must_use]
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    screen: ScreenSize,
    complex_rect: ComplexRect,
) -> Complex {
    let fraction_x = f64::from(pixel_position.x) / f64::from(screen.width());
    let fraction_y = f64::from(pixel_position.y) / f64::from(screen.height());

    let real = complex_rect.top_left().real + fraction_x * complex_rect.width();
    let imag = complex_rect.top_left().imag + fraction_y * complex_rect.height();

    Complex { real, imag }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> ScreenSize {
        ScreenSize::new(100, 50).unwrap()
    }

    fn complex_rect() -> ComplexRect {
        ComplexRect::new(Complex::new(-2.0, -1.0), Complex::new(2.0, 1.0)).unwrap()
    }

    #[test]
    fn test_pixel_to_complex_top_left() {
        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, screen(), complex_rect());

        assert_eq!(result, Complex::new(-2.0, -1.0));
    }

    #[test]
    fn test_pixel_to_complex_far_corner() {
        let result = pixel_to_complex_coords(Point { x: 100, y: 50 }, screen(), complex_rect());

        assert_eq!(result, Complex::new(2.0, 1.0));
    }

    #[test]
    fn test_pixel_to_complex_center() {
        let result = pixel_to_complex_coords(Point { x: 50, y: 25 }, screen(), complex_rect());

        assert_eq!(result, Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_pixel_to_complex_last_drawable_pixel() {
        let result = pixel_to_complex_coords(Point { x: 99, y: 49 }, screen(), complex_rect());

        assert!((result.real - 1.96).abs() < 1e-12);
        assert!((result.imag - 0.96).abs() < 1e-12);
    }
}
