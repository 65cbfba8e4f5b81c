//! Acoustic Feature Extraction
//!
//! Turns raw per-tick capture buffers into the scalar feature set consumed
//! by the emotion scorer: mean amplitude, dominant frequency, spectral
//! energy dispersion, spectral centroid and a tonal stability index.

mod extractor;
mod spectrum;

pub use extractor::{ExtractorConfig, FeatureExtractor, FeatureSet};
pub use spectrum::{FrequencyBand, SpectralSummary};
