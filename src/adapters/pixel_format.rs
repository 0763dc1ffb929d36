//! Pixel format conversion between frame buffers and presentation surfaces.

use crate::core::data::frame_buffer::BYTES_PER_PIXEL;
use thiserror::Error;

const RGBA_BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PixelFormatError {
    #[error("rgb source length {0} is not a multiple of 3")]
    RaggedSource(usize),

    #[error("rgba target holds {actual} bytes, expected {expected}")]
    TargetSizeMismatch { expected: usize, actual: usize },
}

/// Expands packed RGB into opaque RGBA.
///
/// `dst` must hold exactly four bytes for every three in `src`. Nothing is
/// written when the sizes disagree.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % BYTES_PER_PIXEL != 0 {
        return Err(PixelFormatError::RaggedSource(src.len()));
    }

    let expected = src.len() / BYTES_PER_PIXEL * RGBA_BYTES_PER_PIXEL;
    if dst.len() != expected {
        return Err(PixelFormatError::TargetSizeMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (rgb, rgba) in src
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dst.chunks_exact_mut(RGBA_BYTES_PER_PIXEL))
    {
        rgba[..BYTES_PER_PIXEL].copy_from_slice(rgb);
        rgba[3] = 255;
    }

    Ok(())
}
