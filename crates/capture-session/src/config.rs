//! Session configuration

use serde::{Deserialize, Serialize};

/// Which video-path extractor to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoExtractorKind {
    /// Placeholder generator emitting bounded random vectors
    #[default]
    Synthetic,
}

/// Capture session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Audio analysis cadence (ms); audio ticks faster than video
    pub audio_interval_ms: u64,

    /// Video analysis cadence (ms)
    pub video_interval_ms: u64,

    /// Jitter scale passed to the voice scorer (0.0 disables jitter)
    pub noise_amplitude: f64,

    /// Video extractor selection
    pub video_extractor: VideoExtractorKind,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            audio_interval_ms: 100,
            video_interval_ms: 1000,
            noise_amplitude: 1.0,
            video_extractor: VideoExtractorKind::Synthetic,
        }
    }
}

impl SessionConfig {
    /// Faster cadences for responsive displays
    pub fn responsive() -> Self {
        Self {
            audio_interval_ms: 50,
            video_interval_ms: 500,
            ..Default::default()
        }
    }

    /// Slower cadences for low-power operation
    pub fn relaxed() -> Self {
        Self {
            audio_interval_ms: 250,
            video_interval_ms: 2000,
            ..Default::default()
        }
    }
}
