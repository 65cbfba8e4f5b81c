//! Emotion Scoring
//!
//! Maps the scalar acoustic feature set to an 8-dimensional emotion vector
//! via fixed weighted formulas, each dimension clamped to its own ceiling.
//! The video path has no real feature extraction; it is a synthetic
//! generator behind the same [`FrameScorer`] seam.
//!
//! All nondeterminism flows through an injectable [`NoiseSource`] so scoring
//! is reproducible under test.

mod noise;
mod synthetic;
mod voice;

pub use noise::{NoiseSource, RandomNoise, SeededNoise, SilentNoise};
pub use synthetic::{FrameScorer, SyntheticVideoScorer};
pub use voice::{ScorerConfig, VoiceScorer};
