use crate::core::data::raster::Pixel;

/// User intent, already decoded from whatever input device produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomCommand {
    /// Move the zoom anchor to the plane point under this raster cell.
    Aim(Pixel),
    ToggleReverse,
    TogglePause,
    ToggleXAxis,
    ToggleYAxis,
    ToggleDepth,
}
