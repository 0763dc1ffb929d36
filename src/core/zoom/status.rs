#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomWarning {
    /// The next bounds were not distinguishable in f64; the axis was left as is.
    PrecisionExhausted,
    /// Zooming out pushed a bound past the f64 range; the axis was left as is.
    ExtentOverflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoomUpdateReport {
    pub x_updated: bool,
    pub y_updated: bool,
    pub depth_updated: bool,
    pub warning: Option<ZoomWarning>,
}

impl ZoomUpdateReport {
    #[must_use]
    pub fn changed(&self) -> bool {
        self.x_updated || self.y_updated || self.depth_updated
    }
}
