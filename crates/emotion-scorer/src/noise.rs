//! Injectable noise sources for scoring jitter

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of bounded random jitter
///
/// Implementations return a value in `[0, max)`. Production wiring uses
/// [`RandomNoise`]; tests use [`SilentNoise`] or [`SeededNoise`] for
/// reproducible output.
pub trait NoiseSource: Send {
    /// Draw one jitter sample in `[0, max)`
    fn sample(&mut self, max: f64) -> f64;
}

/// OS-seeded random jitter for production wiring
pub struct RandomNoise {
    rng: StdRng,
}

impl RandomNoise {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomNoise {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseSource for RandomNoise {
    fn sample(&mut self, max: f64) -> f64 {
        if max <= 0.0 {
            return 0.0;
        }
        self.rng.random_range(0.0..max)
    }
}

/// Deterministic jitter from a fixed seed
pub struct SeededNoise {
    rng: StdRng,
}

impl SeededNoise {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl NoiseSource for SeededNoise {
    fn sample(&mut self, max: f64) -> f64 {
        if max <= 0.0 {
            return 0.0;
        }
        self.rng.random_range(0.0..max)
    }
}

/// Always-zero jitter, for exact-value tests
pub struct SilentNoise;

impl NoiseSource for SilentNoise {
    fn sample(&mut self, _max: f64) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_noise_is_reproducible() {
        let mut a = SeededNoise::new(7);
        let mut b = SeededNoise::new(7);
        for _ in 0..16 {
            assert_eq!(a.sample(10.0), b.sample(10.0));
        }
    }

    #[test]
    fn test_noise_stays_in_range() {
        let mut noise = RandomNoise::new();
        for _ in 0..128 {
            let v = noise.sample(5.0);
            assert!((0.0..5.0).contains(&v));
        }
    }

    #[test]
    fn test_zero_amplitude_yields_zero() {
        let mut noise = RandomNoise::new();
        assert_eq!(noise.sample(0.0), 0.0);
        let mut seeded = SeededNoise::new(1);
        assert_eq!(seeded.sample(-3.0), 0.0);
    }
}
