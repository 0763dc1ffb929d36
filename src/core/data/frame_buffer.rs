use crate::core::data::colour::Colour;
use crate::core::data::raster::{Pixel, RasterSpec};

pub const BYTES_PER_PIXEL: usize = 3;

/// Row-major RGB frame, three bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    raster: RasterSpec,
    data: Vec<u8>,
}

impl FrameBuffer {
    #[must_use]
    pub fn new(raster: RasterSpec) -> Self {
        Self {
            raster,
            data: vec![0; raster.pixel_count() * BYTES_PER_PIXEL],
        }
    }

    #[must_use]
    pub fn raster(&self) -> RasterSpec {
        self.raster
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn pixel(&self, pixel: Pixel) -> Option<Colour> {
        if !self.raster.contains(pixel) {
            return None;
        }

        let index = (pixel.y as usize * self.raster.width() as usize + pixel.x as usize)
            * BYTES_PER_PIXEL;

        Some(Colour {
            r: self.data[index],
            g: self.data[index + 1],
            b: self.data[index + 2],
        })
    }

    /// Mutable rows, top to bottom, each `width * 3` bytes long.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        let row_len = self.raster.width() as usize * BYTES_PER_PIXEL;
        self.data.chunks_exact_mut(row_len)
    }
}
