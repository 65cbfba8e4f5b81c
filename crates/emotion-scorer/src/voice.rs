//! Voice emotion scoring from acoustic features

use crate::noise::{NoiseSource, RandomNoise};
use acoustic_features::{FeatureSet, FrequencyBand};
use emotion_types::EmotionVector;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Amplitude that maps to full normalized volume
const VOLUME_FULL_SCALE: f64 = 50.0;

/// Per-dimension ceilings (empirically chosen design constants)
const JOY_CAP: f64 = 80.0;
const EXCITEMENT_CAP: f64 = 85.0;
const LOVE_CAP: f64 = 70.0;
const CALM_CAP: f64 = 75.0;
const PEACE_CAP: f64 = 70.0;
const SADNESS_CAP: f64 = 60.0;
const ANGER_CAP: f64 = 75.0;
const FEAR_CAP: f64 = 65.0;

/// Scorer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Scale factor for the jitter terms; 1.0 keeps the documented
    /// 0..10 (0..5 for calm/peace) ranges, 0.0 disables jitter entirely
    pub noise_amplitude: f64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            noise_amplitude: 1.0,
        }
    }
}

impl ScorerConfig {
    /// Configuration with jitter disabled (deterministic scoring)
    pub fn deterministic() -> Self {
        Self {
            noise_amplitude: 0.0,
        }
    }
}

/// Maps one [`FeatureSet`] to one [`EmotionVector`]
///
/// Stateless apart from the noise source: the weights and caps are fixed
/// design constants, not learned parameters. Every dimension is floored at
/// 0 (all terms are non-negative) and capped individually.
pub struct VoiceScorer {
    config: ScorerConfig,
    noise: Box<dyn NoiseSource>,
}

impl VoiceScorer {
    /// Scorer with OS-seeded jitter
    pub fn new(config: ScorerConfig) -> Self {
        Self::with_noise(config, Box::new(RandomNoise::new()))
    }

    /// Scorer with an injected noise source
    pub fn with_noise(config: ScorerConfig, noise: Box<dyn NoiseSource>) -> Self {
        Self { config, noise }
    }

    /// Score one feature set
    pub fn score(&mut self, features: &FeatureSet) -> EmotionVector {
        let volume = (features.amplitude / VOLUME_FULL_SCALE).clamp(0.0, 1.0);
        let quiet = 1.0 - volume;
        let stability = features.tonal_stability;
        let spread = features.energy_spread;

        let low = features.band == FrequencyBand::Low;
        let mid = features.band == FrequencyBand::Mid;
        let high = features.band == FrequencyBand::High;

        let vector = EmotionVector {
            joy: (volume * 50.0 + bonus(mid, 25.0) + stability * 15.0 + self.jitter(10.0))
                .min(JOY_CAP),
            excitement: (volume * 60.0
                + bonus(high, 30.0)
                + bonus(spread > 30.0, 20.0)
                + self.jitter(10.0))
            .min(EXCITEMENT_CAP),
            love: (volume * 35.0 + stability * 30.0 + bonus(mid, 20.0) + self.jitter(10.0))
                .min(LOVE_CAP),
            calm: (quiet * 40.0 + bonus(low, 35.0) + stability * 20.0 + self.jitter(5.0))
                .min(CALM_CAP),
            peace: (quiet * 35.0 + bonus(low, 30.0) + stability * 25.0 + self.jitter(5.0))
                .min(PEACE_CAP),
            sadness: (quiet * 30.0
                + bonus(low, 25.0)
                + bonus(stability < 0.5, 15.0)
                + self.jitter(10.0))
            .min(SADNESS_CAP),
            anger: (volume * 40.0
                + bonus(spread > 40.0, 30.0)
                + bonus(high, 20.0)
                + self.jitter(10.0))
            .min(ANGER_CAP),
            fear: (volume * 25.0
                + bonus(high && spread > 35.0, 25.0)
                + bonus(stability < 0.3, 20.0)
                + self.jitter(10.0))
            .min(FEAR_CAP),
        };

        trace!(volume, stability, spread, band = ?features.band, "scored features");
        vector
    }

    fn jitter(&mut self, range: f64) -> f64 {
        self.noise.sample(range * self.config.noise_amplitude)
    }
}

fn bonus(condition: bool, value: f64) -> f64 {
    if condition {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{SeededNoise, SilentNoise};
    use acoustic_features::FeatureExtractor;
    use emotion_types::AudioBlock;
    use proptest::prelude::*;

    fn silent_scorer() -> VoiceScorer {
        VoiceScorer::with_noise(ScorerConfig::default(), Box::new(SilentNoise))
    }

    #[test]
    fn test_silence_maximizes_calm_and_peace() {
        let extractor = FeatureExtractor::default();
        let features = extractor.extract(&AudioBlock::silent(44_100.0));
        let vector = silent_scorer().score(&features);

        // volume 0, low band, stability 1:
        // calm = 40 + 35 + 20 = 95 -> capped at 75
        // peace = 35 + 30 + 25 = 90 -> capped at 70
        assert_eq!(vector.calm, CALM_CAP);
        assert_eq!(vector.peace, PEACE_CAP);
        // joy = 0 + 0 + 15
        assert_eq!(vector.joy, 15.0);
    }

    #[test]
    fn test_loud_high_band_scoring() {
        let features = FeatureSet {
            amplitude: 60.0, // volume saturates at 1
            dominant_frequency: 1200.0,
            energy_variance: 2500.0,
            energy_spread: 50.0,
            spectral_centroid: 300.0,
            tonal_stability: 0.7,
            band: FrequencyBand::High,
        };
        let vector = silent_scorer().score(&features);

        // excitement = 60 + 30 + 20 = 110 -> capped at 85
        assert_eq!(vector.excitement, EXCITEMENT_CAP);
        // anger = 40 + 30 + 20 = 90 -> capped at 75
        assert_eq!(vector.anger, ANGER_CAP);
        // fear = 25 + 25 + 0 = 50
        assert_eq!(vector.fear, 50.0);
        // calm = 0 + 0 + 0.7*20 = 14
        assert!((vector.calm - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_unstable_quiet_signal_reads_sad() {
        let features = FeatureSet {
            amplitude: 5.0,
            dominant_frequency: 120.0,
            energy_variance: 3600.0,
            energy_spread: 60.0,
            tonal_stability: 0.4,
            spectral_centroid: 10.0,
            band: FrequencyBand::Low,
        };
        let vector = silent_scorer().score(&features);

        // sadness = 0.9*30 + 25 + 15 = 67 -> capped at 60
        assert_eq!(vector.sadness, SADNESS_CAP);
    }

    #[test]
    fn test_jitter_stays_within_documented_range() {
        let mut base = silent_scorer();
        let mut jittered = VoiceScorer::with_noise(
            ScorerConfig::default(),
            Box::new(SeededNoise::new(42)),
        );
        let features = FeatureSet {
            amplitude: 20.0,
            dominant_frequency: 400.0,
            band: FrequencyBand::Mid,
            tonal_stability: 0.9,
            energy_spread: 25.0,
            energy_variance: 625.0,
            spectral_centroid: 80.0,
        };
        let exact = base.score(&features);
        let noisy = jittered.score(&features);

        // Each dimension may exceed the exact value by at most its jitter
        // range (10, or 5 for calm/peace), never fall below it.
        assert!(noisy.joy >= exact.joy && noisy.joy <= exact.joy + 10.0);
        assert!(noisy.calm >= exact.calm && noisy.calm <= exact.calm + 5.0);
        assert!(noisy.peace >= exact.peace && noisy.peace <= exact.peace + 5.0);
    }

    proptest! {
        #[test]
        fn prop_scores_stay_within_caps(
            amplitude in 0.0f64..500.0,
            frequency in 0.0f64..20_000.0,
            spread in 0.0f64..200.0,
            stability in 0.0f64..1.0,
            seed in any::<u64>(),
        ) {
            let features = FeatureSet {
                amplitude,
                dominant_frequency: frequency,
                energy_variance: spread * spread,
                energy_spread: spread,
                spectral_centroid: 0.0,
                tonal_stability: stability,
                band: acoustic_features::FrequencyBand::classify(frequency),
            };
            let mut scorer = VoiceScorer::with_noise(
                ScorerConfig::default(),
                Box::new(SeededNoise::new(seed)),
            );
            let v = scorer.score(&features);

            for (value, cap) in [
                (v.joy, JOY_CAP),
                (v.excitement, EXCITEMENT_CAP),
                (v.love, LOVE_CAP),
                (v.calm, CALM_CAP),
                (v.peace, PEACE_CAP),
                (v.sadness, SADNESS_CAP),
                (v.anger, ANGER_CAP),
                (v.fear, FEAR_CAP),
            ] {
                prop_assert!(value >= 0.0);
                prop_assert!(value <= cap);
            }
        }
    }
}
