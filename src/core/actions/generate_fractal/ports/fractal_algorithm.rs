use crate::core::data::point::Point;
use crate::core::data::screen_size::ScreenSize;

/// Per-pixel computation over a fixed frame. Implementations must be pure:
/// `compute` for one pixel never observes another pixel's result.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;

    fn screen(&self) -> ScreenSize;
}
