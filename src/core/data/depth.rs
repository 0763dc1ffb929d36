/// Iteration budget of the evaluator.
///
/// The budget grows with the zoom: `zoom_offset` is rescaled every frame and
/// shifts both the iteration cap and the colour bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthState {
    pub base_depth: u32,
    pub zoom_offset: f64,
}

impl DepthState {
    #[must_use]
    pub fn new(base_depth: u32, zoom_offset: f64) -> Self {
        Self {
            base_depth,
            zoom_offset,
        }
    }

    /// `floor(zoom_offset)` as a whole number of iterations.
    #[must_use]
    pub fn band_offset(&self) -> i64 {
        self.zoom_offset.floor() as i64
    }

    /// `max(0, base_depth + floor(zoom_offset))`, saturating at `u32::MAX`.
    #[must_use]
    pub fn effective_cap(&self) -> u32 {
        let cap = i64::from(self.base_depth).saturating_add(self.band_offset());
        cap.clamp(0, i64::from(u32::MAX)) as u32
    }

    /// Brightness step per iteration, `floor(255 / base_depth)`.
    #[must_use]
    pub fn colour_unit(&self) -> u32 {
        255u32.checked_div(self.base_depth).unwrap_or(0)
    }

    /// Rescales the offset around `-base_depth`. Zooming out divides instead.
    pub fn zoom(&mut self, factor: f64, reverse: bool) {
        let scale = if reverse { factor.recip() } else { factor };
        let base = f64::from(self.base_depth);
        self.zoom_offset = (self.zoom_offset + base) * scale - base;
    }
}

#[cfg(test)]
mod tests {
    use super::DepthState;

    const EPSILON: f64 = 1e-12;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    #[test]
    fn effective_cap_floors_negative_offset() {
        let depth = DepthState::new(30, -19.5);

        assert_eq!(depth.band_offset(), -20);
        assert_eq!(depth.effective_cap(), 10);
    }

    #[test]
    fn effective_cap_floors_positive_offset() {
        let depth = DepthState::new(30, 4.9);

        assert_eq!(depth.effective_cap(), 34);
    }

    #[test]
    fn effective_cap_never_goes_negative() {
        let depth = DepthState::new(30, -45.0);

        assert_eq!(depth.effective_cap(), 0);
    }

    #[test]
    fn effective_cap_saturates_for_huge_offsets() {
        let depth = DepthState::new(30, 1e30);

        assert_eq!(depth.effective_cap(), u32::MAX);
    }

    #[test]
    fn colour_unit_is_floor_of_255_over_base() {
        assert_eq!(DepthState::new(30, 0.0).colour_unit(), 8);
        assert_eq!(DepthState::new(1, 0.0).colour_unit(), 255);
        assert_eq!(DepthState::new(300, 0.0).colour_unit(), 0);
    }

    #[test]
    fn zoom_scales_offset_around_base() {
        let mut depth = DepthState::new(30, -20.0);

        depth.zoom(1.04785, false);

        assert_approx_eq(depth.zoom_offset, -19.5215);
    }

    #[test]
    fn reverse_zoom_undoes_forward_zoom() {
        let mut depth = DepthState::new(30, -20.0);

        depth.zoom(1.04785, false);
        depth.zoom(1.04785, true);

        assert_approx_eq(depth.zoom_offset, -20.0);
    }

    #[test]
    fn unit_factor_leaves_offset_unchanged() {
        let mut depth = DepthState::new(30, -7.25);

        depth.zoom(1.0, false);

        assert_eq!(depth.zoom_offset, -7.25);
    }
}
