use crate::core::data::complex::Complex;

/// One step of the iterated map driving the escape-time estimate.
///
/// Implementations must be pure and total over finite doubles; NaN and
/// infinity are allowed to propagate through the estimator unguarded.
pub trait EscapeMap {
    fn apply(&self, z: Complex, seed: Complex) -> Complex;
}
