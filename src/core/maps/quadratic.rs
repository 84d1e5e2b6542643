use crate::core::actions::estimate_escape::ports::escape_map::EscapeMap;
use crate::core::data::complex::Complex;

/// The quadratic Julia map `z' = z² + seed`, the crate's built-in escape map.
#[derive(Debug, Default, Copy, Clone)]
pub struct QuadraticMap;

impl EscapeMap for QuadraticMap {
    fn apply(&self, z: Complex, seed: Complex) -> Complex {
        z * z + seed
    }
}
