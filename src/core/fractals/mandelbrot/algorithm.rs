use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time evaluator for `z -> z² + c`, starting from `z = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    /// Iterations taken before `|z|²` reached 4, or `max_iterations` if it never did.
    fn compute(&self, c: Complex) -> u32 {
        let mut z = Complex::ZERO;
        let mut iterations = 0;

        while z.magnitude_squared() < ESCAPE_RADIUS_SQUARED && iterations < self.max_iterations {
            z = z * z + c;
            iterations += 1;
        }

        iterations
    }
}
