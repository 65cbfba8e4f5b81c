//! Combined lifecycle for both capture sources

use crate::config::{SessionConfig, VideoExtractorKind};
use crate::feed::AudioFeed;
use crate::session::{spawn_audio, spawn_video, SessionHandle};
use crate::{CaptureError, PermissionState};
use emotion_fusion::AggregatorHandle;
use emotion_scorer::{FrameScorer, SyntheticVideoScorer};
use tracing::{info, warn};

/// Owns the optional audio and video sessions and their aggregator wiring
///
/// Start and stop calls are idempotent; a stopped source can be started
/// again with a fresh feed.
pub struct CaptureManager {
    config: SessionConfig,
    aggregator: AggregatorHandle,
    audio: Option<SessionHandle>,
    video: Option<SessionHandle>,
}

impl CaptureManager {
    /// Manager wired to an existing aggregator task
    pub fn new(config: SessionConfig, aggregator: AggregatorHandle) -> Self {
        Self {
            config,
            aggregator,
            audio: None,
            video: None,
        }
    }

    /// Manager with its own freshly spawned aggregator task
    pub fn spawn(config: SessionConfig) -> Self {
        Self::new(config, AggregatorHandle::spawn())
    }

    /// Handle to the fusion actor, for renderers and manual edits
    pub fn aggregator(&self) -> &AggregatorHandle {
        &self.aggregator
    }

    /// Start the audio session from the given capture feed
    ///
    /// Denied permission is reported as an error without starting anything;
    /// the source simply stays inactive. Starting an already running
    /// session is a no-op.
    pub fn start_audio(&mut self, feed: Box<dyn AudioFeed>) -> Result<(), CaptureError> {
        if feed.permission() == PermissionState::Denied {
            warn!("audio capture permission denied, source stays inactive");
            return Err(CaptureError::PermissionDenied);
        }
        if self.audio.is_some() {
            return Ok(());
        }
        self.audio = Some(spawn_audio(&self.config, feed, self.aggregator.clone()));
        Ok(())
    }

    /// Start the video session with the configured extractor
    pub fn start_video(&mut self) -> Result<(), CaptureError> {
        let scorer: Box<dyn FrameScorer> = match self.config.video_extractor {
            VideoExtractorKind::Synthetic => Box::new(SyntheticVideoScorer::new()),
        };
        self.start_video_with(scorer)
    }

    /// Start the video session with a caller-supplied frame scorer
    pub fn start_video_with(&mut self, scorer: Box<dyn FrameScorer>) -> Result<(), CaptureError> {
        if self.video.is_some() {
            return Ok(());
        }
        self.video = Some(spawn_video(&self.config, scorer, self.aggregator.clone()));
        Ok(())
    }

    /// Stop the audio session (idempotent)
    pub fn stop_audio(&mut self) {
        if let Some(mut session) = self.audio.take() {
            session.stop();
        }
    }

    /// Stop the video session (idempotent)
    pub fn stop_video(&mut self) {
        if let Some(mut session) = self.video.take() {
            session.stop();
        }
    }

    /// Start both sources together
    pub fn start_all(&mut self, audio_feed: Box<dyn AudioFeed>) -> Result<(), CaptureError> {
        self.start_video()?;
        self.start_audio(audio_feed)
    }

    /// Stop both sources together
    pub fn stop_all(&mut self) {
        self.stop_audio();
        self.stop_video();
        info!("all capture sessions stopped");
    }

    /// Whether any source is currently running
    pub fn any_active(&self) -> bool {
        self.audio.is_some() || self.video.is_some()
    }
}

impl Drop for CaptureManager {
    fn drop(&mut self) {
        self.stop_all();
    }
}
