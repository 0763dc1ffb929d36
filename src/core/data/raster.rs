use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RasterError {
    #[error("raster must be at least 1x1, got {width}x{height}")]
    ZeroSize { width: u32, height: u32 },
}

/// Integer cell coordinates inside a raster. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub x: u32,
    pub y: u32,
}

/// Output raster dimensions, fixed for the lifetime of a zoom session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterSpec {
    width: u32,
    height: u32,
}

impl RasterSpec {
    pub const DEFAULT: Self = Self {
        width: 1000,
        height: 1000,
    };

    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::ZeroSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains(&self, pixel: Pixel) -> bool {
        pixel.x < self.width && pixel.y < self.height
    }

    /// Moves an arbitrary pixel onto the nearest cell of this raster.
    #[must_use]
    pub fn clamp(&self, pixel: Pixel) -> Pixel {
        Pixel {
            x: pixel.x.min(self.width - 1),
            y: pixel.y.min(self.height - 1),
        }
    }
}

impl Default for RasterSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}
