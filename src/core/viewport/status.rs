#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportWarning {
    ZoomClamped,
    NonFiniteElapsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportUpdateReport {
    pub zoom_clamped: bool,
    pub warning: Option<ViewportWarning>,
}
