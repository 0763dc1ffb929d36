use crate::core::data::complex::Complex;
use crate::core::data::raster::{Pixel, RasterSpec};
use crate::core::data::view_window::ViewWindow;

/// Column holding plane coordinate `x`, clamped to `[0, width - 1]`.
#[must_use]
pub fn plane_to_pixel_x(x: f64, window: &ViewWindow, raster: RasterSpec) -> u32 {
    to_cell(x, window.min_x(), window.width(), raster.width())
}

/// Row holding plane coordinate `y`, clamped to `[0, height - 1]`.
#[must_use]
pub fn plane_to_pixel_y(y: f64, window: &ViewWindow, raster: RasterSpec) -> u32 {
    to_cell(y, window.min_y(), window.height(), raster.height())
}

#[must_use]
pub fn plane_to_pixel(point: Complex, window: &ViewWindow, raster: RasterSpec) -> Pixel {
    Pixel {
        x: plane_to_pixel_x(point.re, window, raster),
        y: plane_to_pixel_y(point.im, window, raster),
    }
}

/// Plane coordinate of the top-left corner of a raster cell.
///
/// Mapping the result back with [`plane_to_pixel`] returns the same cell.
#[must_use]
pub fn pixel_to_plane(pixel: Pixel, window: &ViewWindow, raster: RasterSpec) -> Complex {
    Complex {
        re: cell_corner(pixel.x, window.min_x(), window.width(), raster.width()),
        im: cell_corner(pixel.y, window.min_y(), window.height(), raster.height()),
    }
}

fn cell_corner(cell: u32, min: f64, extent: f64, cells: u32) -> f64 {
    min + (f64::from(cell) / f64::from(cells)) * extent
}

/// Cell `c` holds `[cell_corner(c), cell_corner(c + 1))`, measured with the
/// same rounding `pixel_to_plane` uses.
fn to_cell(value: f64, min: f64, extent: f64, cells: u32) -> u32 {
    let estimate = ((value - min) / extent * f64::from(cells)).floor();
    // NaN casts to 0, which is the low clamp anyway.
    let cell = estimate.clamp(0.0, f64::from(cells - 1)) as u32;

    // The estimate is at most one cell off a corner.
    if cell + 1 < cells && cell_corner(cell + 1, min, extent, cells) <= value {
        cell + 1
    } else if cell > 0 && cell_corner(cell, min, extent, cells) > value {
        cell - 1
    } else {
        cell
    }
}
