use crate::core::data::complex::Complex;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ViewWindowError {
    #[error("x range is empty: min {min} must be less than max {max}")]
    EmptyXRange { min: f64, max: f64 },

    #[error("y range is empty: min {min} must be less than max {max}")]
    EmptyYRange { min: f64, max: f64 },

    #[error("window bounds must be finite")]
    NonFinite,
}

/// Rectangle of the complex plane currently mapped onto the raster.
///
/// Always satisfies `min_x < max_x` and `min_y < max_y` with finite bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewWindow {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl ViewWindow {
    /// The square `[-2, 2] × [-2, 2]` that holds the whole set.
    pub const FULL_SET: Self = Self {
        min_x: -2.0,
        max_x: 2.0,
        min_y: -2.0,
        max_y: 2.0,
    };

    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<Self, ViewWindowError> {
        check_range(min_x, max_x, ViewWindowError::EmptyXRange { min: min_x, max: max_x })?;
        check_range(min_y, max_y, ViewWindowError::EmptyYRange { min: min_y, max: max_y })?;

        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn contains(&self, point: Complex) -> bool {
        point.re >= self.min_x
            && point.re <= self.max_x
            && point.im >= self.min_y
            && point.im <= self.max_y
    }

    /// Replaces the x range, leaving the window untouched on error.
    pub fn set_x_range(&mut self, min: f64, max: f64) -> Result<(), ViewWindowError> {
        check_range(min, max, ViewWindowError::EmptyXRange { min, max })?;
        self.min_x = min;
        self.max_x = max;
        Ok(())
    }

    /// Replaces the y range, leaving the window untouched on error.
    pub fn set_y_range(&mut self, min: f64, max: f64) -> Result<(), ViewWindowError> {
        check_range(min, max, ViewWindowError::EmptyYRange { min, max })?;
        self.min_y = min;
        self.max_y = max;
        Ok(())
    }
}

fn check_range(min: f64, max: f64, empty: ViewWindowError) -> Result<(), ViewWindowError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ViewWindowError::NonFinite);
    }
    if min >= max {
        return Err(empty);
    }
    Ok(())
}
