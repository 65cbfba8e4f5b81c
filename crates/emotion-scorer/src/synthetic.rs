//! Synthetic video scoring
//!
//! The video path carries no real facial inference. Frame scoring is a
//! pluggable capability: a real extractor can be dropped in behind
//! [`FrameScorer`], while the default [`SyntheticVideoScorer`] emits values
//! drawn uniformly from fixed per-dimension ranges.

use crate::noise::{NoiseSource, RandomNoise};
use emotion_types::EmotionVector;

/// Per-frame emotion scoring seam for the video path
pub trait FrameScorer: Send {
    /// Produce the emotion vector for the current frame
    fn score_frame(&mut self) -> EmotionVector;
}

/// Uniform range (base, span) per dimension for the synthetic generator
const JOY_RANGE: (f64, f64) = (20.0, 40.0); // 20-60
const LOVE_RANGE: (f64, f64) = (10.0, 30.0); // 10-40
const PEACE_RANGE: (f64, f64) = (15.0, 35.0); // 15-50
const CALM_RANGE: (f64, f64) = (20.0, 40.0); // 20-60
const SADNESS_RANGE: (f64, f64) = (5.0, 20.0); // 5-25
const FEAR_RANGE: (f64, f64) = (5.0, 15.0); // 5-20
const ANGER_RANGE: (f64, f64) = (5.0, 20.0); // 5-25
const EXCITEMENT_RANGE: (f64, f64) = (15.0, 35.0); // 15-50

/// Placeholder video scorer emitting bounded random vectors
pub struct SyntheticVideoScorer {
    noise: Box<dyn NoiseSource>,
}

impl SyntheticVideoScorer {
    /// Generator with OS-seeded randomness
    pub fn new() -> Self {
        Self::with_noise(Box::new(RandomNoise::new()))
    }

    /// Generator with an injected noise source
    pub fn with_noise(noise: Box<dyn NoiseSource>) -> Self {
        Self { noise }
    }

    fn draw(&mut self, range: (f64, f64)) -> f64 {
        range.0 + self.noise.sample(range.1)
    }
}

impl Default for SyntheticVideoScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScorer for SyntheticVideoScorer {
    fn score_frame(&mut self) -> EmotionVector {
        EmotionVector {
            joy: self.draw(JOY_RANGE),
            love: self.draw(LOVE_RANGE),
            peace: self.draw(PEACE_RANGE),
            calm: self.draw(CALM_RANGE),
            sadness: self.draw(SADNESS_RANGE),
            fear: self.draw(FEAR_RANGE),
            anger: self.draw(ANGER_RANGE),
            excitement: self.draw(EXCITEMENT_RANGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{SeededNoise, SilentNoise};

    #[test]
    fn test_synthetic_values_stay_in_range() {
        let mut scorer = SyntheticVideoScorer::with_noise(Box::new(SeededNoise::new(3)));
        for _ in 0..64 {
            let v = scorer.score_frame();
            assert!((20.0..60.0).contains(&v.joy));
            assert!((10.0..40.0).contains(&v.love));
            assert!((15.0..50.0).contains(&v.peace));
            assert!((20.0..60.0).contains(&v.calm));
            assert!((5.0..25.0).contains(&v.sadness));
            assert!((5.0..20.0).contains(&v.fear));
            assert!((5.0..25.0).contains(&v.anger));
            assert!((15.0..50.0).contains(&v.excitement));
        }
    }

    #[test]
    fn test_silent_noise_yields_range_floors() {
        let mut scorer = SyntheticVideoScorer::with_noise(Box::new(SilentNoise));
        let v = scorer.score_frame();
        assert_eq!(v.joy, 20.0);
        assert_eq!(v.fear, 5.0);
        assert_eq!(v.excitement, 15.0);
    }
}
