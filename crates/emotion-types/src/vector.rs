//! Emotion vector and provenance tags

use serde::{Deserialize, Serialize};

/// Provenance of the currently displayed emotion state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    /// Set directly by the user (sliders / direct writes)
    #[default]
    Manual,
    /// Driven by the video analysis path alone
    Video,
    /// Driven by the audio analysis path alone
    Audio,
    /// Blended from both active paths
    Combined,
}

/// One axis of the emotion radar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionDimension {
    Joy,
    Love,
    Peace,
    Calm,
    Sadness,
    Fear,
    Anger,
    Excitement,
}

impl EmotionDimension {
    /// All dimensions in radar display order (45° apart, starting at joy)
    pub const ALL: [EmotionDimension; 8] = [
        EmotionDimension::Joy,
        EmotionDimension::Love,
        EmotionDimension::Peace,
        EmotionDimension::Calm,
        EmotionDimension::Sadness,
        EmotionDimension::Fear,
        EmotionDimension::Anger,
        EmotionDimension::Excitement,
    ];

    /// Lowercase name of the dimension
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionDimension::Joy => "joy",
            EmotionDimension::Love => "love",
            EmotionDimension::Peace => "peace",
            EmotionDimension::Calm => "calm",
            EmotionDimension::Sadness => "sadness",
            EmotionDimension::Fear => "fear",
            EmotionDimension::Anger => "anger",
            EmotionDimension::Excitement => "excitement",
        }
    }
}

/// 8-dimensional emotion intensity record
///
/// Each value is a percentage-like intensity with a lower bound of 0 and a
/// per-dimension upper clamp applied by the scorer. The dimensions are
/// computed independently and do not sum to any fixed total.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmotionVector {
    pub joy: f64,
    pub love: f64,
    pub peace: f64,
    pub calm: f64,
    pub sadness: f64,
    pub fear: f64,
    pub anger: f64,
    pub excitement: f64,
}

impl EmotionVector {
    /// The fixed baseline restored on reset
    pub const fn baseline() -> Self {
        Self {
            joy: 30.0,
            love: 25.0,
            peace: 35.0,
            calm: 40.0,
            sadness: 15.0,
            fear: 10.0,
            anger: 12.0,
            excitement: 28.0,
        }
    }

    /// Create a vector with every dimension set to the same value
    pub const fn splat(value: f64) -> Self {
        Self {
            joy: value,
            love: value,
            peace: value,
            calm: value,
            sadness: value,
            fear: value,
            anger: value,
            excitement: value,
        }
    }

    /// Read a single dimension
    pub fn get(&self, dimension: EmotionDimension) -> f64 {
        match dimension {
            EmotionDimension::Joy => self.joy,
            EmotionDimension::Love => self.love,
            EmotionDimension::Peace => self.peace,
            EmotionDimension::Calm => self.calm,
            EmotionDimension::Sadness => self.sadness,
            EmotionDimension::Fear => self.fear,
            EmotionDimension::Anger => self.anger,
            EmotionDimension::Excitement => self.excitement,
        }
    }

    /// Overwrite a single dimension
    pub fn set(&mut self, dimension: EmotionDimension, value: f64) {
        match dimension {
            EmotionDimension::Joy => self.joy = value,
            EmotionDimension::Love => self.love = value,
            EmotionDimension::Peace => self.peace = value,
            EmotionDimension::Calm => self.calm = value,
            EmotionDimension::Sadness => self.sadness = value,
            EmotionDimension::Fear => self.fear = value,
            EmotionDimension::Anger => self.anger = value,
            EmotionDimension::Excitement => self.excitement = value,
        }
    }

    /// Values in radar display order (matches [`EmotionDimension::ALL`])
    pub fn values(&self) -> [f64; 8] {
        [
            self.joy,
            self.love,
            self.peace,
            self.calm,
            self.sadness,
            self.fear,
            self.anger,
            self.excitement,
        ]
    }

    /// Weighted blend of `self` (previous display state) with an incoming
    /// vector, rounded to the nearest integer per dimension.
    ///
    /// `prev_weight` is the weight kept for `self`; the incoming vector gets
    /// `1 - prev_weight`.
    pub fn blend(&self, incoming: &EmotionVector, prev_weight: f64) -> EmotionVector {
        let w = prev_weight;
        let mut out = EmotionVector::default();
        for dim in EmotionDimension::ALL {
            let mixed = self.get(dim) * w + incoming.get(dim) * (1.0 - w);
            out.set(dim, mixed.round());
        }
        out
    }
}
