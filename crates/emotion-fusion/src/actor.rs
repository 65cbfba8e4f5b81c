//! Actor wrapper serializing aggregator mutations
//!
//! Two source timers may fire interleaved; the blend step reads then writes
//! the shared displayed vector, so all mutations funnel through a channel
//! into one task that owns the [`EmotionAggregator`].

use crate::aggregator::{EmotionAggregator, SourceKind};
use crate::FusionError;
use emotion_types::{AnalysisSource, EmotionDimension, EmotionVector};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

/// Commands accepted by the owning task
enum Command {
    SourceUpdate {
        kind: SourceKind,
        emotions: EmotionVector,
    },
    Manual(EmotionVector),
    SetDimension(EmotionDimension, f64),
    AutoUpdate(bool),
    Reset,
    Started(SourceKind),
    Stopped(SourceKind),
    Snapshot(oneshot::Sender<AggregatorSnapshot>),
}

/// Point-in-time view of the aggregator for the rendering collaborator
#[derive(Debug, Clone)]
pub struct AggregatorSnapshot {
    pub current: EmotionVector,
    pub source: AnalysisSource,
    pub auto_update: bool,
    pub history: Vec<EmotionVector>,
}

/// Cloneable handle to the owning aggregator task
#[derive(Clone)]
pub struct AggregatorHandle {
    tx: mpsc::Sender<Command>,
}

impl AggregatorHandle {
    /// Spawn the owning task and return a handle to it
    ///
    /// The task runs until every handle is dropped.
    pub fn spawn() -> Self {
        let (tx, mut rx) = mpsc::channel(64);
        tokio::spawn(async move {
            let mut aggregator = EmotionAggregator::new();
            info!("aggregator task started");
            while let Some(command) = rx.recv().await {
                match command {
                    Command::SourceUpdate { kind, emotions } => {
                        aggregator.apply_source(kind, emotions);
                    }
                    Command::Manual(emotions) => aggregator.set_manual(emotions),
                    Command::SetDimension(dimension, value) => {
                        aggregator.set_dimension(dimension, value)
                    }
                    Command::AutoUpdate(enabled) => aggregator.set_auto_update(enabled),
                    Command::Reset => aggregator.reset(),
                    Command::Started(kind) => aggregator.source_started(kind),
                    Command::Stopped(kind) => aggregator.source_stopped(kind),
                    Command::Snapshot(reply) => {
                        let snapshot = AggregatorSnapshot {
                            current: *aggregator.current(),
                            source: aggregator.source(),
                            auto_update: aggregator.auto_update(),
                            history: aggregator.history().to_vec(),
                        };
                        // Receiver may have given up; nothing to do then
                        let _ = reply.send(snapshot);
                    }
                }
            }
            debug!("aggregator task stopped: all handles dropped");
        });
        Self { tx }
    }

    async fn send(&self, command: Command) -> Result<(), FusionError> {
        self.tx.send(command).await.map_err(|_| FusionError::Closed)
    }

    /// Deliver one source-driven update
    pub async fn update(
        &self,
        kind: SourceKind,
        emotions: EmotionVector,
    ) -> Result<(), FusionError> {
        self.send(Command::SourceUpdate { kind, emotions }).await
    }

    /// Overwrite the displayed vector (manual edit)
    pub async fn set_manual(&self, emotions: EmotionVector) -> Result<(), FusionError> {
        self.send(Command::Manual(emotions)).await
    }

    /// Overwrite a single dimension (manual edit)
    pub async fn set_dimension(
        &self,
        dimension: EmotionDimension,
        value: f64,
    ) -> Result<(), FusionError> {
        self.send(Command::SetDimension(dimension, value)).await
    }

    /// Enable or disable source-driven updates
    pub async fn set_auto_update(&self, enabled: bool) -> Result<(), FusionError> {
        self.send(Command::AutoUpdate(enabled)).await
    }

    /// Restore the baseline and clear history
    pub async fn reset(&self) -> Result<(), FusionError> {
        self.send(Command::Reset).await
    }

    /// Mark a source as running
    pub async fn source_started(&self, kind: SourceKind) -> Result<(), FusionError> {
        self.send(Command::Started(kind)).await
    }

    /// Mark a source as stopped
    pub async fn source_stopped(&self, kind: SourceKind) -> Result<(), FusionError> {
        self.send(Command::Stopped(kind)).await
    }

    /// Read the current state and history
    pub async fn snapshot(&self) -> Result<AggregatorSnapshot, FusionError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Snapshot(reply_tx)).await?;
        reply_rx.await.map_err(|_| FusionError::Closed)
    }
}
