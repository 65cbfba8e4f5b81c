//! Raw capture payload exchanged with the capture collaborator

use serde::{Deserialize, Serialize};

/// Typical time-domain buffer length delivered per tick
pub const TIME_BUFFER_LEN: usize = 2048;

/// Typical frequency-domain bin count (half the time-domain length)
pub const FREQ_BIN_COUNT: usize = TIME_BUFFER_LEN / 2;

/// Silence baseline of the byte-range time-domain samples
///
/// Samples are unsigned bytes centered on 128; a flat buffer of 128s is
/// silence.
pub const SILENCE_MIDPOINT: f64 = 128.0;

/// One tick worth of raw audio capture data
///
/// `time_samples` are byte-range waveform samples around [`SILENCE_MIDPOINT`].
/// `freq_magnitudes` are non-negative per-bin magnitudes ordered low to high
/// frequency. Buffer lengths are not validated here; the feature extractor
/// degrades gracefully on empty or truncated buffers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AudioBlock {
    /// Time-domain waveform samples
    pub time_samples: Vec<u8>,
    /// Frequency-domain bin magnitudes (low to high)
    pub freq_magnitudes: Vec<u8>,
    /// Sampling rate in Hz
    pub sample_rate: f64,
}

impl AudioBlock {
    /// A silent block at the given sample rate (flat midpoint waveform,
    /// zero-magnitude spectrum)
    pub fn silent(sample_rate: f64) -> Self {
        Self {
            time_samples: vec![SILENCE_MIDPOINT as u8; TIME_BUFFER_LEN],
            freq_magnitudes: vec![0; FREQ_BIN_COUNT],
            sample_rate,
        }
    }
}
