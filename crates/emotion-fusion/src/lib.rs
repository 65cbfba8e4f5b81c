//! Multi-Source Emotion Fusion
//!
//! Combines emotion vectors from independently ticking sources (video,
//! audio) into a single displayed state with fixed blend ratios, tracks the
//! provenance of that state, and retains a bounded rolling history.
//!
//! [`EmotionAggregator`] is the synchronous state machine; the blend step
//! reads then writes the shared displayed vector, so concurrent sources
//! must not call it directly from separate tasks. [`AggregatorHandle`]
//! wraps it in a single owning task that serializes all mutations through
//! a channel.

mod actor;
mod aggregator;
mod history;

pub use actor::{AggregatorHandle, AggregatorSnapshot};
pub use aggregator::{EmotionAggregator, SourceKind};
pub use history::{EmotionHistory, HISTORY_CAPACITY};

use thiserror::Error;

/// Fusion error types
#[derive(Debug, Error)]
pub enum FusionError {
    /// The owning aggregator task has shut down
    #[error("aggregator task is no longer running")]
    Closed,
}
