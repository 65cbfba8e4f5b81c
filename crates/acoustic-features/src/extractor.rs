//! Feature Set Assembly

use crate::spectrum::{FrequencyBand, SpectralSummary};
use emotion_types::{AudioBlock, SILENCE_MIDPOINT};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Spread below which a signal counts as fully tonal
const STABILITY_SPREAD_KNEE: f64 = 20.0;

/// Spread range over which stability decays linearly to 0
const STABILITY_SPREAD_RANGE: f64 = 100.0;

/// Scalar features derived from one tick of capture data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureSet {
    /// Mean absolute deviation of the waveform from the silence baseline
    pub amplitude: f64,
    /// Frequency of the strongest spectral bin (Hz)
    pub dominant_frequency: f64,
    /// Variance of the spectral bin magnitudes
    pub energy_variance: f64,
    /// Standard deviation of the spectral bin magnitudes
    pub energy_spread: f64,
    /// Energy-weighted mean bin index
    pub spectral_centroid: f64,
    /// Tonal stability index in [0, 1], inversely related to spread
    pub tonal_stability: f64,
    /// Band of the dominant frequency
    pub band: FrequencyBand,
}

impl Default for FeatureSet {
    fn default() -> Self {
        Self {
            amplitude: 0.0,
            dominant_frequency: 0.0,
            energy_variance: 0.0,
            energy_spread: 0.0,
            spectral_centroid: 0.0,
            tonal_stability: 1.0,
            band: FrequencyBand::Low,
        }
    }
}

impl FeatureSet {
    /// The feature set of a silent or malformed capture tick
    pub fn silent() -> Self {
        Self::default()
    }
}

/// Extractor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Center value of the time-domain sampling range (silence baseline)
    pub silence_midpoint: f64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            silence_midpoint: SILENCE_MIDPOINT,
        }
    }
}

/// Computes a [`FeatureSet`] from raw capture buffers
///
/// Extraction is synchronous, bounded-time and never fails: malformed or
/// empty buffers degrade to [`FeatureSet::silent`].
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor {
    config: ExtractorConfig,
}

impl FeatureExtractor {
    /// Create an extractor with the given configuration
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Extract features from one capture block
    pub fn extract(&self, block: &AudioBlock) -> FeatureSet {
        self.extract_parts(&block.time_samples, &block.freq_magnitudes, block.sample_rate)
    }

    /// Extract features from raw buffers
    ///
    /// `time_samples` is the waveform, `magnitudes` the spectrum (bins low
    /// to high), `sample_rate` in Hz.
    pub fn extract_parts(
        &self,
        time_samples: &[u8],
        magnitudes: &[u8],
        sample_rate: f64,
    ) -> FeatureSet {
        if time_samples.is_empty() || magnitudes.is_empty() || sample_rate <= 0.0 {
            return FeatureSet::silent();
        }

        let amplitude = self.mean_amplitude(time_samples);
        let summary = SpectralSummary::compute(magnitudes);

        // Bin index to Hz: the spectrum covers 0..sample_rate/2 over M bins
        let dominant_frequency =
            summary.dominant_bin as f64 * sample_rate / (2.0 * magnitudes.len() as f64);

        let tonal_stability = Self::tonal_stability(summary.energy_spread);
        let band = FrequencyBand::classify(dominant_frequency);

        debug!(
            amplitude,
            dominant_frequency,
            energy_spread = summary.energy_spread,
            ?band,
            "extracted features"
        );

        FeatureSet {
            amplitude,
            dominant_frequency,
            energy_variance: summary.energy_variance,
            energy_spread: summary.energy_spread,
            spectral_centroid: summary.centroid,
            tonal_stability,
            band,
        }
    }

    /// Mean absolute deviation from the silence baseline
    fn mean_amplitude(&self, time_samples: &[u8]) -> f64 {
        let sum: f64 = time_samples
            .iter()
            .map(|&s| (s as f64 - self.config.silence_midpoint).abs())
            .sum();
        sum / time_samples.len() as f64
    }

    /// 1.0 below the spread knee, then linear decay clamped at 0
    fn tonal_stability(energy_spread: f64) -> f64 {
        if energy_spread < STABILITY_SPREAD_KNEE {
            1.0
        } else {
            (1.0 - (energy_spread - STABILITY_SPREAD_KNEE) / STABILITY_SPREAD_RANGE).max(0.0)
        }
    }
}
