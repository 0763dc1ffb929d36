use crate::core::data::complex::Complex;
use crate::core::data::depth::DepthState;
use crate::core::data::view_window::{ViewWindow, ViewWindowError};
use crate::core::zoom::config::ZoomFactors;
use crate::core::zoom::flags::AnimationFlags;
use crate::core::zoom::status::{ZoomUpdateReport, ZoomWarning};

/// Scales each moving axis of `window` about `aim`.
///
/// Forward zoom divides the distance from `aim` to each bound by the axis
/// factor; reverse zoom multiplies it. An axis whose next bounds would break
/// the window invariant keeps its current bounds and raises a warning.
pub fn zoom_to(
    window: &mut ViewWindow,
    aim: Complex,
    factors: &ZoomFactors,
    flags: &AnimationFlags,
) -> ZoomUpdateReport {
    let mut report = ZoomUpdateReport::default();

    if flags.x_axis_moving() {
        let scale = axis_scale(factors.x, flags.reverse_zoom);
        let (min, max) = scale_about(window.min_x(), window.max_x(), aim.re, scale);
        match window.set_x_range(min, max) {
            Ok(()) => report.x_updated = true,
            Err(error) => report.warning = Some(warning_for(error)),
        }
    }

    if flags.y_axis_moving() {
        let scale = axis_scale(factors.y, flags.reverse_zoom);
        let (min, max) = scale_about(window.min_y(), window.max_y(), aim.im, scale);
        match window.set_y_range(min, max) {
            Ok(()) => report.y_updated = true,
            Err(error) => report.warning = Some(warning_for(error)),
        }
    }

    report
}

/// Rescales the depth offset unless depth is paused. Returns whether it moved.
pub fn zoom_depth(depth: &mut DepthState, factor: f64, flags: &AnimationFlags) -> bool {
    if !flags.depth_moving() {
        return false;
    }

    depth.zoom(factor, flags.reverse_zoom);
    true
}

fn axis_scale(factor: f64, reverse: bool) -> f64 {
    if reverse { factor } else { factor.recip() }
}

fn scale_about(min: f64, max: f64, anchor: f64, scale: f64) -> (f64, f64) {
    (anchor - (anchor - min) * scale, anchor + (max - anchor) * scale)
}

fn warning_for(error: ViewWindowError) -> ZoomWarning {
    match error {
        ViewWindowError::NonFinite => ZoomWarning::ExtentOverflow,
        ViewWindowError::EmptyXRange { .. } | ViewWindowError::EmptyYRange { .. } => {
            ZoomWarning::PrecisionExhausted
        }
    }
}
