//! Capture Session Management
//!
//! Owns the timer-driven analysis loops: one independent cadence per
//! source, each tick polling the capture collaborator, extracting features,
//! scoring, and delivering the result to the fusion actor. Sessions stop
//! idempotently and release their capture handles when the loop exits.

mod config;
mod feed;
mod manager;
mod session;

pub use config::{SessionConfig, VideoExtractorKind};
pub use feed::{AudioFeed, ScriptedFeed};
pub use manager::CaptureManager;
pub use session::SessionHandle;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Capture error types
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The collaborator reported the capture device as denied by the user
    #[error("capture permission denied")]
    PermissionDenied,

    /// No usable capture device
    #[error("capture device unavailable: {0}")]
    DeviceUnavailable(String),
}

/// Tri-state capture permission as reported by the collaborator
///
/// Surfaced as data to the UI layer, never raised across the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    Granted,
    Denied,
    /// Permission query unsupported or not yet answered
    #[default]
    Unknown,
}
