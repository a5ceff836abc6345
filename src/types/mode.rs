//! Scoring mode definitions

use serde::{Deserialize, Serialize};

/// The two modes of a scoring run. Selected once when the corpus is
/// aggregated, never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoringMode {
    /// Emotion lexicon loaded, emotion queries use lexicon totals
    EmotionAware,
    /// No emotion lexicon, emotion queries use polarity columns
    PolarityOnly,
}

impl ScoringMode {
    /// Mode implied by lexicon availability
    pub fn from_lexicon_loaded(loaded: bool) -> Self {
        if loaded {
            ScoringMode::EmotionAware
        } else {
            ScoringMode::PolarityOnly
        }
    }

    pub fn is_emotion_aware(&self) -> bool {
        *self == ScoringMode::EmotionAware
    }

    /// Status line for user-facing surfaces
    pub fn status_message(&self) -> &'static str {
        match self {
            ScoringMode::EmotionAware => "NRC Emotion Lexicon loaded",
            ScoringMode::PolarityOnly => "Using basic sentiment analysis (NRC lexicon not found)",
        }
    }
}

impl std::fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ScoringMode::EmotionAware => "EMOTION-AWARE",
            ScoringMode::PolarityOnly => "POLARITY-ONLY",
        };
        write!(f, "{}", name)
    }
}
