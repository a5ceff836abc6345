//! Per-verse score types
//!
//! Emotion scoring never fails: a verse either gets a populated score or an
//! explicit zero-score sentinel with the reason attached.

use serde::{Deserialize, Serialize};
use crate::types::{EmotionCategory, PolarityColumn, Verse};

/// Polarity scores for one text
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarityScores {
    /// Proportion of positive sentiment (0.0-1.0)
    pub positive: f64,
    /// Proportion of negative sentiment (0.0-1.0)
    pub negative: f64,
    /// Proportion of neutral text (0.0-1.0)
    pub neutral: f64,
    /// Normalized net sentiment (-1.0-1.0)
    pub compound: f64,
}

impl PolarityScores {
    /// Value of one proportion column
    pub fn column(&self, column: PolarityColumn) -> f64 {
        match column {
            PolarityColumn::Positive => self.positive,
            PolarityColumn::Negative => self.negative,
            PolarityColumn::Neutral => self.neutral,
        }
    }
}

/// Per-category emotion totals. Every category is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmotionScores {
    pub joy: u32,
    pub trust: u32,
    pub fear: u32,
    pub surprise: u32,
    pub sadness: u32,
    pub disgust: u32,
    pub anger: u32,
    pub anticipation: u32,
}

impl EmotionScores {
    /// All-zero totals
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, category: EmotionCategory) -> u32 {
        match category {
            EmotionCategory::Joy => self.joy,
            EmotionCategory::Trust => self.trust,
            EmotionCategory::Fear => self.fear,
            EmotionCategory::Surprise => self.surprise,
            EmotionCategory::Sadness => self.sadness,
            EmotionCategory::Disgust => self.disgust,
            EmotionCategory::Anger => self.anger,
            EmotionCategory::Anticipation => self.anticipation,
        }
    }

    fn slot(&mut self, category: EmotionCategory) -> &mut u32 {
        match category {
            EmotionCategory::Joy => &mut self.joy,
            EmotionCategory::Trust => &mut self.trust,
            EmotionCategory::Fear => &mut self.fear,
            EmotionCategory::Surprise => &mut self.surprise,
            EmotionCategory::Sadness => &mut self.sadness,
            EmotionCategory::Disgust => &mut self.disgust,
            EmotionCategory::Anger => &mut self.anger,
            EmotionCategory::Anticipation => &mut self.anticipation,
        }
    }

    /// Add an intensity to one category (saturating)
    pub fn add(&mut self, category: EmotionCategory, intensity: u32) {
        let slot = self.slot(category);
        *slot = slot.saturating_add(intensity);
    }

    /// Add another set of totals category by category
    pub fn merge(&mut self, other: &EmotionScores) {
        for category in EmotionCategory::ALL {
            self.add(category, other.get(category));
        }
    }

    /// Sum over all categories
    pub fn total(&self) -> u64 {
        EmotionCategory::ALL.iter().map(|c| self.get(*c) as u64).sum()
    }

    /// (category, total) pairs in category order
    pub fn iter(&self) -> impl Iterator<Item = (EmotionCategory, u32)> + '_ {
        EmotionCategory::ALL.iter().map(move |c| (*c, self.get(*c)))
    }
}

/// Result of scoring one text against the emotion lexicon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionResult {
    /// Totals; all zero when `reason` is a zero-score reason
    pub scores: EmotionScores,
    /// Why the scores look the way they do
    pub reason: EmotionReason,
    /// Number of word tokens examined
    pub token_count: usize,
    /// Number of tokens found in the lexicon
    pub matched_count: usize,
}

impl EmotionResult {
    /// Populated score
    pub fn scored(scores: EmotionScores, token_count: usize, matched_count: usize) -> Self {
        Self {
            scores,
            reason: EmotionReason::E101_SCORED,
            token_count,
            matched_count,
        }
    }

    /// Zero-score sentinel
    pub fn zeroed(reason: EmotionReason) -> Self {
        Self {
            scores: EmotionScores::zero(),
            reason,
            token_count: 0,
            matched_count: 0,
        }
    }

    /// Was the text actually scored?
    pub fn is_scored(&self) -> bool {
        !self.reason.is_zeroed()
    }
}

/// Reason codes for emotion scoring outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum EmotionReason {
    /// Text tokenized and scored
    E101_SCORED,
    /// Text was empty or whitespace only
    E102_ZERO_EMPTY_TEXT,
    /// Text contained no word tokens
    E103_ZERO_NO_TOKENS,
}

impl EmotionReason {
    pub fn code(&self) -> &'static str {
        match self {
            Self::E101_SCORED => "E101_SCORED",
            Self::E102_ZERO_EMPTY_TEXT => "E102_ZERO_EMPTY_TEXT",
            Self::E103_ZERO_NO_TOKENS => "E103_ZERO_NO_TOKENS",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::E101_SCORED => "Scored against lexicon",
            Self::E102_ZERO_EMPTY_TEXT => "Empty text, zero score",
            Self::E103_ZERO_NO_TOKENS => "No word tokens, zero score",
        }
    }

    /// Is this a zero-score sentinel?
    pub fn is_zeroed(&self) -> bool {
        matches!(self, Self::E102_ZERO_EMPTY_TEXT | Self::E103_ZERO_NO_TOKENS)
    }
}

impl std::fmt::Display for EmotionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

/// A verse with its scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerseScore {
    pub verse: Verse,
    pub polarity: PolarityScores,
    /// Present for every verse in emotion-aware mode, absent for every verse otherwise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotions: Option<EmotionScores>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_has_every_category() {
        let zero = EmotionScores::zero();
        for (_, total) in zero.iter() {
            assert_eq!(total, 0);
        }
        assert_eq!(zero.iter().count(), 8);
    }

    #[test]
    fn test_add_and_merge() {
        let mut a = EmotionScores::zero();
        a.add(EmotionCategory::Joy, 2);
        a.add(EmotionCategory::Fear, 1);
        let mut b = EmotionScores::zero();
        b.add(EmotionCategory::Joy, 3);
        a.merge(&b);
        assert_eq!(a.get(EmotionCategory::Joy), 5);
        assert_eq!(a.get(EmotionCategory::Fear), 1);
        assert_eq!(a.total(), 6);
    }

    #[test]
    fn test_add_saturates() {
        let mut a = EmotionScores::zero();
        a.add(EmotionCategory::Anger, u32::MAX);
        a.add(EmotionCategory::Anger, 5);
        assert_eq!(a.anger, u32::MAX);
    }

    #[test]
    fn test_zeroed_result() {
        let result = EmotionResult::zeroed(EmotionReason::E102_ZERO_EMPTY_TEXT);
        assert!(!result.is_scored());
        assert_eq!(result.scores, EmotionScores::zero());
        assert!(EmotionResult::scored(EmotionScores::zero(), 3, 0).is_scored());
    }

    #[test]
    fn test_polarity_column() {
        let p = PolarityScores { positive: 0.4, negative: 0.1, neutral: 0.5, compound: 0.3 };
        assert_eq!(p.column(PolarityColumn::Positive), 0.4);
        assert_eq!(p.column(PolarityColumn::Negative), 0.1);
        assert_eq!(p.column(PolarityColumn::Neutral), 0.5);
    }
}
