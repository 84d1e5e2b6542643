use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;

const ZOOM_FACTOR: f64 = 0.9;
const PAN_STEP: f64 = 0.05;

const DEFAULT_SEED: Complex = Complex {
    real: -0.8,
    imag: 0.156,
};
const DEFAULT_MAX_ITERATIONS: u32 = 32;
const DEFAULT_SAMPLES: u32 = 4;

fn default_viewport() -> Viewport {
    Viewport::new(
        Complex {
            real: 0.0,
            imag: 0.0,
        },
        4.0,
    )
    .expect("default view is valid")
}

/// The mutable state behind the explorer: where we are looking, which seed
/// drives the map, and how much work each frame spends.
///
/// `max_iterations` and `samples` never drop below 1; halving clamps and
/// doubling saturates, so the renderer's no-validation contract holds.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    viewport: Viewport,
    seed: Complex,
    max_iterations: u32,
    samples: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            seed: DEFAULT_SEED,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn seed(&self) -> Complex {
        self.seed
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Restores the default centre and width. Seed and fidelity settings
    /// are left alone.
    pub fn reset_view(&mut self) {
        self.viewport = default_viewport();
    }

    pub fn recentre(&mut self, centre: Complex) {
        self.viewport = self.viewport.recentred(centre);
    }

    pub fn reseed(&mut self, seed: Complex) {
        self.seed = seed;
    }

    pub fn zoom_in(&mut self) {
        self.viewport = self.viewport.scaled(ZOOM_FACTOR);
    }

    pub fn zoom_out(&mut self) {
        self.viewport = self.viewport.scaled(ZOOM_FACTOR.recip());
    }

    pub fn pan_left(&mut self) {
        self.translate(-self.pan_step(), 0.0);
    }

    pub fn pan_right(&mut self) {
        self.translate(self.pan_step(), 0.0);
    }

    /// Pans follow screen orientation: up moves towards smaller imaginary
    /// values.
    pub fn pan_up(&mut self) {
        self.translate(0.0, -self.pan_step());
    }

    pub fn pan_down(&mut self) {
        self.translate(0.0, self.pan_step());
    }

    pub fn halve_max_iterations(&mut self) {
        self.max_iterations = (self.max_iterations / 2).max(1);
    }

    pub fn double_max_iterations(&mut self) {
        self.max_iterations = self.max_iterations.saturating_mul(2);
    }

    pub fn halve_samples(&mut self) {
        self.samples = (self.samples / 2).max(1);
    }

    pub fn double_samples(&mut self) {
        self.samples = self.samples.saturating_mul(2);
    }

    fn pan_step(&self) -> f64 {
        self.viewport.width() * PAN_STEP
    }

    fn translate(&mut self, real: f64, imag: f64) {
        self.viewport = self.viewport.translated(Complex { real, imag });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = ViewState::default();

        assert_eq!(state.seed().real, -0.8);
        assert_eq!(state.seed().imag, 0.156);
        assert_eq!(state.viewport().centre().real, 0.0);
        assert_eq!(state.viewport().centre().imag, 0.0);
        assert_eq!(state.viewport().width(), 4.0);
        assert_eq!(state.max_iterations(), 32);
        assert_eq!(state.samples(), 4);
    }

    #[test]
    fn test_zoom_in_narrows_the_view() {
        let mut state = ViewState::default();

        state.zoom_in();

        assert_eq!(state.viewport().width(), 4.0 * 0.9);
    }

    #[test]
    fn test_zoom_out_widens_the_view() {
        let mut state = ViewState::default();

        state.zoom_out();

        assert!(state.viewport().width() > 4.0);
    }

    #[test]
    fn test_zoom_round_trip_is_close_to_identity() {
        let mut state = ViewState::default();

        state.zoom_in();
        state.zoom_out();

        assert!((state.viewport().width() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_pan_step_is_proportional_to_width() {
        let mut state = ViewState::default();

        state.pan_right();
        assert_eq!(state.viewport().centre().real, 4.0 * 0.05);

        state.pan_left();
        state.pan_left();
        assert!((state.viewport().centre().real - -(4.0 * 0.05)).abs() < 1e-12);
    }

    #[test]
    fn test_pan_up_decreases_imag() {
        let mut state = ViewState::default();

        state.pan_up();

        assert_eq!(state.viewport().centre().imag, -(4.0 * 0.05));
    }

    #[test]
    fn test_pan_down_increases_imag() {
        let mut state = ViewState::default();

        state.pan_down();

        assert_eq!(state.viewport().centre().imag, 4.0 * 0.05);
    }

    #[test]
    fn test_reset_view_restores_viewport_only() {
        let mut state = ViewState::default();

        state.zoom_in();
        state.pan_right();
        state.halve_samples();
        state.double_max_iterations();
        state.reseed(Complex {
            real: 0.3,
            imag: -0.4,
        });

        state.reset_view();

        assert_eq!(state.viewport().width(), 4.0);
        assert_eq!(state.viewport().centre().real, 0.0);
        assert_eq!(state.viewport().centre().imag, 0.0);
        assert_eq!(state.samples(), 2);
        assert_eq!(state.max_iterations(), 64);
        assert_eq!(state.seed().real, 0.3);
    }

    #[test]
    fn test_recentre_and_reseed() {
        let mut state = ViewState::default();
        let point = Complex {
            real: -1.25,
            imag: 0.5,
        };

        state.recentre(point);
        assert_eq!(state.viewport().centre(), point);

        state.reseed(point);
        assert_eq!(state.seed(), point);
    }

    #[test]
    fn test_halving_floors_at_one() {
        let mut state = ViewState::default();

        for _ in 0..10 {
            state.halve_max_iterations();
            state.halve_samples();
        }

        assert_eq!(state.max_iterations(), 1);
        assert_eq!(state.samples(), 1);

        state.halve_max_iterations();
        state.halve_samples();

        assert_eq!(state.max_iterations(), 1);
        assert_eq!(state.samples(), 1);
    }

    #[test]
    fn test_doubling_after_floor_recovers() {
        let mut state = ViewState::default();

        for _ in 0..10 {
            state.halve_samples();
        }
        state.double_samples();

        assert_eq!(state.samples(), 2);
    }

    #[test]
    fn test_doubling_saturates_instead_of_wrapping() {
        let mut state = ViewState::default();

        for _ in 0..40 {
            state.double_max_iterations();
        }

        assert_eq!(state.max_iterations(), u32::MAX);
    }
}
