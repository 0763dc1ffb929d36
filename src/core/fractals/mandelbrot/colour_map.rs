use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::depth::DepthState;

/// Blue-dominant ramp whose bands follow the zoom depth.
///
/// An iteration count is shifted by `-floor(zoom_offset)` before scaling, so
/// a band keeps its colour as the iteration cap grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthBandGradient {
    band_offset: i64,
    unit: i64,
}

impl DepthBandGradient {
    #[must_use]
    pub fn for_depth(depth: &DepthState) -> Self {
        Self {
            band_offset: depth.band_offset(),
            unit: i64::from(depth.colour_unit()),
        }
    }
}

impl ColourMap<u32> for DepthBandGradient {
    fn map(&self, iterations: u32) -> Colour {
        let adjusted = i64::from(iterations).saturating_sub(self.band_offset).max(0);
        let level = adjusted.saturating_mul(self.unit);

        Colour {
            r: to_channel((level as f64 / 1.5).floor()),
            g: to_channel((level / 2) as f64),
            b: to_channel(level as f64),
        }
    }

    fn display_name(&self) -> &str {
        "Depth bands"
    }
}

fn to_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}
