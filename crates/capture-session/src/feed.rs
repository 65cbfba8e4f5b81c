//! Capture collaborator seam

use crate::PermissionState;
use emotion_types::AudioBlock;
use std::collections::VecDeque;

/// Source of raw per-tick audio capture data
///
/// Implemented by the platform capture layer. `poll` returning `None` means
/// no data was available this tick; the tick is skipped without error.
pub trait AudioFeed: Send {
    /// Current capture permission as known to the collaborator
    fn permission(&self) -> PermissionState {
        PermissionState::Granted
    }

    /// Take the next capture block, if one is ready
    fn poll(&mut self) -> Option<AudioBlock>;
}

/// Deterministic feed replaying a fixed sequence of blocks
///
/// Used in tests and demos in place of a live microphone.
#[derive(Debug, Default)]
pub struct ScriptedFeed {
    blocks: VecDeque<AudioBlock>,
    permission: PermissionState,
}

impl ScriptedFeed {
    /// Feed that will hand out the given blocks in order, then run dry
    pub fn new(blocks: impl IntoIterator<Item = AudioBlock>) -> Self {
        Self {
            blocks: blocks.into_iter().collect(),
            permission: PermissionState::Granted,
        }
    }

    /// Feed that reports denied permission and yields nothing
    pub fn denied() -> Self {
        Self {
            blocks: VecDeque::new(),
            permission: PermissionState::Denied,
        }
    }

    /// Remaining scripted blocks
    pub fn remaining(&self) -> usize {
        self.blocks.len()
    }
}

impl AudioFeed for ScriptedFeed {
    fn permission(&self) -> PermissionState {
        self.permission
    }

    fn poll(&mut self) -> Option<AudioBlock> {
        self.blocks.pop_front()
    }
}
