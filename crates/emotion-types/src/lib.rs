//! Shared Emotion Analysis Types
//!
//! Core data model used across the pipeline crates: the 8-dimensional
//! emotion vector, analysis provenance tags, and the raw capture payload
//! exchanged with the capture collaborator.

mod block;
mod vector;

pub use block::{AudioBlock, FREQ_BIN_COUNT, SILENCE_MIDPOINT, TIME_BUFFER_LEN};
pub use vector::{AnalysisSource, EmotionDimension, EmotionVector};
