use crate::core::actions::render_frame::ports::sample_source::SampleSource;
use rand::Rng;
use rand::rngs::ThreadRng;

/// Production jitter source backed by the thread-local generator.
pub struct ThreadRngSampler {
    rng: ThreadRng,
}

impl ThreadRngSampler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for ThreadRngSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleSource for ThreadRngSampler {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draws_stay_in_the_unit_interval() {
        let mut sampler = ThreadRngSampler::new();

        for _ in 0..1000 {
            let value = sampler.next_unit();
            assert!((0.0..1.0).contains(&value));
        }
    }
}
