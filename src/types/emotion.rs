//! Emotion categories and polarity columns

use serde::{Deserialize, Serialize};

/// The closed set of 8 emotion categories shared by the lexicon and the ranking service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    Joy,
    Trust,
    Fear,
    Surprise,
    Sadness,
    Disgust,
    Anger,
    Anticipation,
}

impl EmotionCategory {
    /// All categories, in display order
    pub const ALL: [EmotionCategory; 8] = [
        EmotionCategory::Joy,
        EmotionCategory::Trust,
        EmotionCategory::Fear,
        EmotionCategory::Surprise,
        EmotionCategory::Sadness,
        EmotionCategory::Disgust,
        EmotionCategory::Anger,
        EmotionCategory::Anticipation,
    ];

    /// Lexicon key (lowercase, as written in the lexicon file)
    pub fn key(&self) -> &'static str {
        match self {
            Self::Joy => "joy",
            Self::Trust => "trust",
            Self::Fear => "fear",
            Self::Surprise => "surprise",
            Self::Sadness => "sadness",
            Self::Disgust => "disgust",
            Self::Anger => "anger",
            Self::Anticipation => "anticipation",
        }
    }

    /// Human-facing name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Joy => "Joy",
            Self::Trust => "Trust",
            Self::Fear => "Fear",
            Self::Surprise => "Surprise",
            Self::Sadness => "Sadness",
            Self::Disgust => "Disgust",
            Self::Anger => "Anger",
            Self::Anticipation => "Anticipation",
        }
    }

    /// Parse an exact lexicon key. Keys outside the 8 categories return None.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.key() == key)
    }

    /// Resolve a human-facing emotion name (case-insensitive, surrounding whitespace ignored)
    pub fn from_label(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(name))
    }

    /// Polarity column used when no emotion lexicon is loaded
    pub fn fallback_column(&self) -> PolarityColumn {
        match self {
            Self::Joy | Self::Trust | Self::Anticipation => PolarityColumn::Positive,
            Self::Fear | Self::Sadness | Self::Disgust | Self::Anger => PolarityColumn::Negative,
            Self::Surprise => PolarityColumn::Neutral,
        }
    }

    /// Display color as RGB
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Joy => (0x4C, 0xAF, 0x50),
            Self::Trust => (0x8B, 0xC3, 0x4A),
            Self::Fear => (0x9C, 0x27, 0xB0),
            Self::Surprise => (0xFF, 0x98, 0x00),
            Self::Sadness => (0x21, 0x96, 0xF3),
            Self::Disgust => (0x79, 0x55, 0x48),
            Self::Anger => (0xF4, 0x43, 0x36),
            Self::Anticipation => (0xFF, 0xC1, 0x07),
        }
    }
}

impl std::fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One of the three proportion columns of a polarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolarityColumn {
    Positive,
    Negative,
    Neutral,
}

impl PolarityColumn {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for PolarityColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
