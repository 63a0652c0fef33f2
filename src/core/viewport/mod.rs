pub mod limits;
pub mod slider;
pub mod status;
pub mod viewport;

pub use limits::ViewportLimits;
pub use slider::ZoomRateSlider;
pub use status::{ViewportUpdateReport, ViewportWarning};
pub use viewport::Viewport;
