use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::raster::RasterSpec;

/// A front buffer that is shown and a back buffer that is drawn into.
#[derive(Debug)]
pub struct DoubleBuffer {
    front: FrameBuffer,
    back: FrameBuffer,
}

impl DoubleBuffer {
    #[must_use]
    pub fn new(raster: RasterSpec) -> Self {
        Self {
            front: FrameBuffer::new(raster),
            back: FrameBuffer::new(raster),
        }
    }

    #[must_use]
    pub fn front(&self) -> &FrameBuffer {
        &self.front
    }

    pub fn back_mut(&mut self) -> &mut FrameBuffer {
        &mut self.back
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
    }
}
