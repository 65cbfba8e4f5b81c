//! Bounded rolling history of accepted emotion snapshots

use emotion_types::EmotionVector;
use std::collections::VecDeque;

/// Number of snapshots retained before the oldest is evicted
pub const HISTORY_CAPACITY: usize = 20;

/// Sliding window of the most recent accepted vectors, oldest first
#[derive(Debug, Clone, Default)]
pub struct EmotionHistory {
    data: VecDeque<EmotionVector>,
}

impl EmotionHistory {
    pub fn new() -> Self {
        Self {
            data: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Append a snapshot, evicting the oldest entry once full
    pub fn push(&mut self, vector: EmotionVector) {
        if self.data.len() >= HISTORY_CAPACITY {
            self.data.pop_front();
        }
        self.data.push_back(vector);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Most recently appended snapshot
    pub fn latest(&self) -> Option<&EmotionVector> {
        self.data.back()
    }

    /// Snapshots in arrival order
    pub fn iter(&self) -> impl Iterator<Item = &EmotionVector> {
        self.data.iter()
    }

    /// Copy out in arrival order
    pub fn to_vec(&self) -> Vec<EmotionVector> {
        self.data.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}
