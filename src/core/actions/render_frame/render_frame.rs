use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::colour::Colour;
use crate::core::data::frame_buffer::{BYTES_PER_PIXEL, FrameBuffer};
use crate::core::data::raster::Pixel;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::DepthBandGradient;
use crate::core::util::pixel_coords::pixel_to_plane;
use crate::core::zoom::state::ZoomState;

/// Draws the current view of `state` into every cell of `buffer`.
///
/// Each cell samples the plane at its top-left corner, the same point an
/// aim click on that cell selects.
///
/// While the animation is paused the aim row and column are drawn white
/// as a crosshair.
pub fn render_frame(state: &ZoomState, buffer: &mut FrameBuffer) {
    let algorithm = MandelbrotAlgorithm::new(state.effective_cap());
    let colour_map = DepthBandGradient::for_depth(&state.depth);
    let crosshair = state.flags.paused.then(|| state.aim_pixel());

    render_with(state, buffer, &algorithm, &colour_map, |x, y| {
        crosshair.is_some_and(|aim| aim.x == x || aim.y == y)
    });
}

fn render_with<A, C>(
    state: &ZoomState,
    buffer: &mut FrameBuffer,
    algorithm: &A,
    colour_map: &C,
    is_crosshair: impl Fn(u32, u32) -> bool,
) where
    A: FractalAlgorithm<Success = u32>,
    C: ColourMap<u32>,
{
    let raster = buffer.raster();
    let window = state.window;

    for (y, row) in (0u32..).zip(buffer.rows_mut()) {
        for (x, cell) in (0u32..).zip(row.chunks_exact_mut(BYTES_PER_PIXEL)) {
            let colour = if is_crosshair(x, y) {
                Colour::WHITE
            } else {
                let c = pixel_to_plane(Pixel { x, y }, &window, raster);
                colour_map.map(algorithm.compute(c))
            };

            cell[0] = colour.r;
            cell[1] = colour.g;
            cell[2] = colour.b;
        }
    }
}
