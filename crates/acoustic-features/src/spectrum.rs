//! Spectral statistics over the frequency-domain magnitude buffer

use serde::{Deserialize, Serialize};

/// Frequency band boundaries (Hz)
const MID_BAND_START_HZ: f64 = 200.0;
const HIGH_BAND_START_HZ: f64 = 800.0;

/// Coarse classification of the dominant frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyBand {
    /// Below 200 Hz: calm, low tones
    #[default]
    Low,
    /// 200 Hz to 800 Hz: normal speech range
    Mid,
    /// 800 Hz and above: excited, stressed tones
    High,
}

impl FrequencyBand {
    /// Classify a dominant frequency into its band
    ///
    /// Bands are mutually exclusive and exhaustive: low `< 200`,
    /// mid `[200, 800)`, high `>= 800`.
    pub fn classify(frequency_hz: f64) -> Self {
        if frequency_hz < MID_BAND_START_HZ {
            FrequencyBand::Low
        } else if frequency_hz < HIGH_BAND_START_HZ {
            FrequencyBand::Mid
        } else {
            FrequencyBand::High
        }
    }
}

/// Aggregate statistics over one magnitude buffer
#[derive(Debug, Clone, Default)]
pub struct SpectralSummary {
    /// Mean bin magnitude
    pub energy_mean: f64,
    /// Variance of bin magnitudes
    pub energy_variance: f64,
    /// Standard deviation of bin magnitudes
    pub energy_spread: f64,
    /// Energy-weighted mean bin index (0 when total energy is 0)
    pub centroid: f64,
    /// Index of the strongest bin (first index wins on ties)
    pub dominant_bin: usize,
}

impl SpectralSummary {
    /// Compute spectral statistics from a magnitude buffer
    ///
    /// An empty buffer yields the all-zero summary.
    pub fn compute(magnitudes: &[u8]) -> Self {
        if magnitudes.is_empty() {
            return Self::default();
        }

        let n = magnitudes.len() as f64;
        let mut total = 0.0;
        let mut weighted = 0.0;
        let mut dominant_bin = 0;
        let mut max_magnitude = 0u8;

        for (i, &m) in magnitudes.iter().enumerate() {
            total += m as f64;
            weighted += m as f64 * i as f64;
            if m > max_magnitude {
                max_magnitude = m;
                dominant_bin = i;
            }
        }

        let energy_mean = total / n;

        let mut m2 = 0.0;
        for &m in magnitudes {
            let d = m as f64 - energy_mean;
            m2 += d * d;
        }
        let energy_variance = m2 / n;
        let energy_spread = energy_variance.sqrt();

        // Zero-energy buffers have no meaningful centroid
        let centroid = if total > 0.0 { weighted / total } else { 0.0 };

        Self {
            energy_mean,
            energy_variance,
            energy_spread,
            centroid,
            dominant_bin,
        }
    }
}
