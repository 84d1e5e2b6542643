use crate::core::actions::estimate_escape::ports::escape_map::EscapeMap;
use crate::core::data::complex::Complex;
use std::f64::consts::LN_2;

/// Escape threshold used by [`stability`].
pub const ESCAPE_RADIUS: f64 = 4.0;

/// Smoothed escape count for the orbit of `z0` under `map`.
///
/// Applies the map up to `max_iterations` times and, at the first iterate
/// whose magnitude exceeds `radius`, returns the zero-based iteration index
/// plus one, minus the normalized-iteration-count correction
/// `ln(ln|z|) / ln 2`. Orbits that never escape return `max_iterations`
/// exactly.
///
/// `radius` must be at least 1 so the nested logarithm is defined at the
/// escape point; this is a caller obligation, not a checked condition.
pub fn escape<M: EscapeMap>(
    z0: Complex,
    seed: Complex,
    map: &M,
    max_iterations: u32,
    radius: f64,
) -> f64 {
    let mut z = z0;

    for i in 0..max_iterations {
        z = map.apply(z, seed);

        if z.magnitude_squared() > radius * radius {
            return f64::from(i + 1) - z.magnitude().ln().ln() / LN_2;
        }
    }

    f64::from(max_iterations)
}

/// Normalized escape value in roughly `[0, 1]`: 0 means immediate escape,
/// 1 means the orbit stayed bounded for all `max_iterations` steps. The
/// smoothing correction is not clamped, so values can dip slightly below
/// the integer grid near the boundary.
pub fn stability<M: EscapeMap>(z0: Complex, seed: Complex, map: &M, max_iterations: u32) -> f64 {
    escape(z0, seed, map, max_iterations, ESCAPE_RADIUS) / f64::from(max_iterations)
}
