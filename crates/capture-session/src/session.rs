//! Per-source analysis loops

use crate::config::SessionConfig;
use crate::feed::AudioFeed;
use acoustic_features::FeatureExtractor;
use emotion_fusion::{AggregatorHandle, SourceKind};
use emotion_scorer::{FrameScorer, ScorerConfig, VoiceScorer};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

/// Handle to a running analysis loop
///
/// Dropping the handle does not stop the loop; call [`SessionHandle::stop`].
/// Stopping is idempotent and cancels the pending timer, so no further
/// ticks are delivered after it returns.
#[derive(Debug)]
pub struct SessionHandle {
    kind: SourceKind,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl SessionHandle {
    fn new(kind: SourceKind, shutdown: oneshot::Sender<()>, task: JoinHandle<()>) -> Self {
        Self {
            kind,
            shutdown: Some(shutdown),
            task: Some(task),
        }
    }

    /// Which source this session drives
    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Whether stop has not been requested yet
    pub fn is_running(&self) -> bool {
        self.shutdown.is_some()
    }

    /// Request the loop to stop (idempotent)
    pub fn stop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            // Loop may already have exited on its own; either way is fine
            let _ = shutdown.send(());
            info!(kind = ?self.kind, "session stop requested");
        }
    }

    /// Wait for the loop task to finish (after [`SessionHandle::stop`])
    pub async fn join(&mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

/// Spawn the audio analysis loop
///
/// Each tick polls the feed, extracts features, scores them and delivers
/// the vector to the aggregator. A dry feed tick is skipped silently. The
/// feed is dropped when the loop exits, releasing the capture handle.
pub(crate) fn spawn_audio(
    config: &SessionConfig,
    mut feed: Box<dyn AudioFeed>,
    aggregator: AggregatorHandle,
) -> SessionHandle {
    let interval = Duration::from_millis(config.audio_interval_ms);
    let extractor = FeatureExtractor::default();
    let mut scorer = VoiceScorer::new(ScorerConfig {
        noise_amplitude: config.noise_amplitude,
    });
    let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

    let task = tokio::spawn(async move {
        if aggregator.source_started(SourceKind::Audio).await.is_err() {
            warn!("aggregator closed before audio session started");
            return;
        }
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        info!(interval_ms = interval.as_millis() as u64, "audio session started");

        loop {
            tokio::select! {
                _ = &mut shutdown_rx => break,
                _ = ticker.tick() => {
                    let Some(block) = feed.poll() else { continue };
                    let features = extractor.extract(&block);
                    let emotions = scorer.score(&features);
                    if aggregator.update(SourceKind::Audio, emotions).await.is_err() {
                        warn!("aggregator closed, stopping audio session");
                        break;
                    }
                }
            }
        }

        let _ = aggregator.source_stopped(SourceKind::Audio).await;
        info!("audio session stopped");
    });

    SessionHandle::new(SourceKind::Audio, shutdown_tx, task)
}

/// Spawn the video analysis loop
///
/// Same shape as the audio loop, but frame scoring comes from the
/// configured [`FrameScorer`] (synthetic by default) instead of acoustic
/// feature extraction.
pub(crate) fn spawn_video(
    config: &SessionConfig,
    mut scorer: Box<dyn FrameScorer>,
    aggregator: AggregatorHandle,
) -> SessionHandle {
    let interval = Duration::from_millis(config.video_interval_ms);
    let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

    let task = tokio::spawn(async move {
        if aggregator.source_started(SourceKind::Video).await.is_err() {
            warn!("aggregator closed before video session started");
            return;
        }
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        info!(interval_ms = interval.as_millis() as u64, "video session started");

        loop {
            tokio::select! {
                _ = &mut shutdown_rx => break,
                _ = ticker.tick() => {
                    let emotions = scorer.score_frame();
                    if aggregator.update(SourceKind::Video, emotions).await.is_err() {
                        warn!("aggregator closed, stopping video session");
                        break;
                    }
                }
            }
        }

        let _ = aggregator.source_stopped(SourceKind::Video).await;
        info!("video session stopped");
    });

    SessionHandle::new(SourceKind::Video, shutdown_tx, task)
}
