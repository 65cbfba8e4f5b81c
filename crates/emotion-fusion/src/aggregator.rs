//! Aggregator state machine

use crate::history::EmotionHistory;
use emotion_types::{AnalysisSource, EmotionDimension, EmotionVector};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Weight kept for the previous displayed vector when a video update blends
const PREV_WEIGHT_ON_VIDEO: f64 = 0.3;

/// Weight kept for the previous displayed vector when an audio update blends
const PREV_WEIGHT_ON_AUDIO: f64 = 0.7;

/// A source that can drive aggregator updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Video,
    Audio,
}

impl SourceKind {
    fn as_analysis_source(self) -> AnalysisSource {
        match self {
            SourceKind::Video => AnalysisSource::Video,
            SourceKind::Audio => AnalysisSource::Audio,
        }
    }
}

/// Serializes source updates, manual edits and resets into one displayed
/// emotion state plus a bounded history
///
/// When both sources are active an incoming update is blended with the
/// previous displayed vector using fixed, trigger-dependent ratios: a video
/// update keeps 30% of the previous state, an audio update keeps 70%. The
/// asymmetry (triggering order affects the result) is intentional and
/// preserved as designed.
#[derive(Debug, Clone)]
pub struct EmotionAggregator {
    current: EmotionVector,
    source: AnalysisSource,
    auto_update: bool,
    video_active: bool,
    audio_active: bool,
    history: EmotionHistory,
}

impl Default for EmotionAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl EmotionAggregator {
    /// Aggregator at the fixed baseline, auto-update enabled
    pub fn new() -> Self {
        Self {
            current: EmotionVector::baseline(),
            source: AnalysisSource::Manual,
            auto_update: true,
            video_active: false,
            audio_active: false,
            history: EmotionHistory::new(),
        }
    }

    /// Currently displayed vector
    pub fn current(&self) -> &EmotionVector {
        &self.current
    }

    /// Provenance of the displayed vector
    pub fn source(&self) -> AnalysisSource {
        self.source
    }

    /// Whether source-driven updates are applied
    pub fn auto_update(&self) -> bool {
        self.auto_update
    }

    /// Rolling history of accepted updates
    pub fn history(&self) -> &EmotionHistory {
        &self.history
    }

    /// Whether the given source is currently marked active
    pub fn is_active(&self, kind: SourceKind) -> bool {
        match kind {
            SourceKind::Video => self.video_active,
            SourceKind::Audio => self.audio_active,
        }
    }

    /// Mark a source as running (idempotent)
    pub fn source_started(&mut self, kind: SourceKind) {
        let flag = match kind {
            SourceKind::Video => &mut self.video_active,
            SourceKind::Audio => &mut self.audio_active,
        };
        if !*flag {
            *flag = true;
            info!(?kind, "source started");
        }
    }

    /// Mark a source as stopped (idempotent; state and history unchanged)
    pub fn source_stopped(&mut self, kind: SourceKind) {
        let flag = match kind {
            SourceKind::Video => &mut self.video_active,
            SourceKind::Audio => &mut self.audio_active,
        };
        if *flag {
            *flag = false;
            info!(?kind, "source stopped");
        }
    }

    /// Apply one source-driven update
    ///
    /// Returns `true` if the update was accepted. Updates are ignored
    /// entirely while auto-update is disabled. An accepted update is
    /// displayed verbatim when the other source is inactive, otherwise
    /// blended with the previous displayed state; either way the resulting
    /// displayed vector is appended to history.
    pub fn apply_source(&mut self, kind: SourceKind, emotions: EmotionVector) -> bool {
        if !self.auto_update {
            debug!(?kind, "source update ignored: auto-update disabled");
            return false;
        }

        let other_active = match kind {
            SourceKind::Video => self.audio_active,
            SourceKind::Audio => self.video_active,
        };

        if other_active {
            let prev_weight = match kind {
                SourceKind::Video => PREV_WEIGHT_ON_VIDEO,
                SourceKind::Audio => PREV_WEIGHT_ON_AUDIO,
            };
            self.current = self.current.blend(&emotions, prev_weight);
            self.source = AnalysisSource::Combined;
        } else {
            self.current = emotions;
            self.source = kind.as_analysis_source();
        }

        self.history.push(self.current);
        debug!(?kind, source = ?self.source, "source update applied");
        true
    }

    /// Overwrite the displayed vector outright
    ///
    /// Always applies, regardless of active sources or the auto-update
    /// switch, and forces the source tag to manual.
    pub fn set_manual(&mut self, emotions: EmotionVector) {
        self.current = emotions;
        self.source = AnalysisSource::Manual;
        debug!("manual vector applied");
    }

    /// Overwrite a single dimension (manual edit)
    pub fn set_dimension(&mut self, dimension: EmotionDimension, value: f64) {
        self.current.set(dimension, value);
        self.source = AnalysisSource::Manual;
        debug!(dimension = dimension.as_str(), value, "manual dimension edit");
    }

    /// Enable or disable source-driven updates
    ///
    /// Toggling never changes the current state or history by itself.
    pub fn set_auto_update(&mut self, enabled: bool) {
        self.auto_update = enabled;
        info!(enabled, "auto-update toggled");
    }

    /// Restore the fixed baseline, tag manual, clear history
    pub fn reset(&mut self) {
        self.current = EmotionVector::baseline();
        self.source = AnalysisSource::Manual;
        self.history.clear();
        info!("aggregator reset to baseline");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HISTORY_CAPACITY;

    #[test]
    fn test_single_source_displays_verbatim() {
        let mut agg = EmotionAggregator::new();
        agg.source_started(SourceKind::Audio);

        let update = EmotionVector::splat(42.0);
        assert!(agg.apply_source(SourceKind::Audio, update));
        assert_eq!(agg.current(), &update);
        assert_eq!(agg.source(), AnalysisSource::Audio);
        assert_eq!(agg.history().len(), 1);
    }

    #[test]
    fn test_video_update_blends_when_audio_active() {
        let mut agg = EmotionAggregator::new();
        agg.source_started(SourceKind::Video);
        agg.source_started(SourceKind::Audio);
        agg.set_manual(EmotionVector::splat(50.0));

        assert!(agg.apply_source(SourceKind::Video, EmotionVector::splat(10.0)));
        // prev*0.3 + incoming*0.7 = 50*0.3 + 10*0.7 = 22
        assert_eq!(agg.current(), &EmotionVector::splat(22.0));
        assert_eq!(agg.source(), AnalysisSource::Combined);
    }

    #[test]
    fn test_audio_update_uses_inverted_weights() {
        let mut agg = EmotionAggregator::new();
        agg.source_started(SourceKind::Video);
        agg.source_started(SourceKind::Audio);
        agg.set_manual(EmotionVector::splat(50.0));

        assert!(agg.apply_source(SourceKind::Audio, EmotionVector::splat(10.0)));
        // prev*0.7 + incoming*0.3 = 50*0.7 + 10*0.3 = 38
        assert_eq!(agg.current(), &EmotionVector::splat(38.0));
        assert_eq!(agg.source(), AnalysisSource::Combined);
    }

    #[test]
    fn test_trigger_order_is_asymmetric() {
        let mut video_first = EmotionAggregator::new();
        video_first.source_started(SourceKind::Video);
        video_first.source_started(SourceKind::Audio);
        video_first.set_manual(EmotionVector::splat(40.0));
        video_first.apply_source(SourceKind::Video, EmotionVector::splat(20.0));

        let mut audio_first = EmotionAggregator::new();
        audio_first.source_started(SourceKind::Video);
        audio_first.source_started(SourceKind::Audio);
        audio_first.set_manual(EmotionVector::splat(40.0));
        audio_first.apply_source(SourceKind::Audio, EmotionVector::splat(20.0));

        assert_ne!(video_first.current(), audio_first.current());
    }

    #[test]
    fn test_auto_update_disabled_ignores_sources() {
        let mut agg = EmotionAggregator::new();
        agg.source_started(SourceKind::Audio);
        agg.set_auto_update(false);

        let before = *agg.current();
        assert!(!agg.apply_source(SourceKind::Audio, EmotionVector::splat(99.0)));
        assert_eq!(agg.current(), &before);
        assert!(agg.history().is_empty());

        // Manual edits still apply
        agg.set_dimension(EmotionDimension::Fear, 55.0);
        assert_eq!(agg.current().fear, 55.0);
        assert_eq!(agg.source(), AnalysisSource::Manual);

        // Re-enabling lets source updates through again
        agg.set_auto_update(true);
        assert!(agg.apply_source(SourceKind::Audio, EmotionVector::splat(12.0)));
        assert_eq!(agg.source(), AnalysisSource::Audio);
    }

    #[test]
    fn test_manual_forces_manual_state() {
        let mut agg = EmotionAggregator::new();
        agg.source_started(SourceKind::Video);
        agg.apply_source(SourceKind::Video, EmotionVector::splat(30.0));
        assert_eq!(agg.source(), AnalysisSource::Video);

        agg.set_manual(EmotionVector::splat(7.0));
        assert_eq!(agg.source(), AnalysisSource::Manual);
        assert_eq!(agg.current(), &EmotionVector::splat(7.0));
    }

    #[test]
    fn test_history_bounded_to_last_twenty() {
        let mut agg = EmotionAggregator::new();
        agg.source_started(SourceKind::Audio);
        for i in 0..25 {
            agg.apply_source(SourceKind::Audio, EmotionVector::splat(i as f64));
        }
        assert_eq!(agg.history().len(), HISTORY_CAPACITY);
        let entries = agg.history().to_vec();
        assert_eq!(entries[0].joy, 5.0);
        assert_eq!(entries[19].joy, 24.0);
    }

    #[test]
    fn test_reset_restores_baseline_and_clears_history() {
        let mut agg = EmotionAggregator::new();
        agg.source_started(SourceKind::Video);
        agg.source_started(SourceKind::Audio);
        agg.apply_source(SourceKind::Video, EmotionVector::splat(60.0));
        agg.set_auto_update(false);

        agg.reset();
        assert_eq!(agg.current(), &EmotionVector::baseline());
        assert_eq!(agg.source(), AnalysisSource::Manual);
        assert!(agg.history().is_empty());
    }

    #[test]
    fn test_source_stop_is_idempotent() {
        let mut agg = EmotionAggregator::new();
        agg.source_started(SourceKind::Video);
        let before_state = agg.source();

        agg.source_stopped(SourceKind::Video);
        agg.source_stopped(SourceKind::Video);
        assert!(!agg.is_active(SourceKind::Video));
        assert_eq!(agg.source(), before_state);
    }
}
