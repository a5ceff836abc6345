//! Emotion scorer: sums lexicon intensities per emotion category

use lazy_static::lazy_static;
use regex::Regex;
use crate::types::{EmotionCategory, EmotionReason, EmotionResult, EmotionScores, LexiconTable};

lazy_static! {
    // Maximal runs of letters/digits. Punctuation and apostrophes separate
    // words, so "lord's" yields "lord" and "s".
    static ref RE_WORD: Regex = Regex::new(r"[\p{L}\p{N}]+").unwrap();
}

/// Lowercase and split text into word tokens
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    RE_WORD
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Emotion scorer over a loaded lexicon
#[derive(Debug, Default)]
pub struct EmotionScorer;

impl EmotionScorer {
    /// Create new scorer
    pub fn new() -> Self {
        Self
    }

    /// Score text and return totals for all 8 categories, or a zero-score
    /// sentinel with the reason. Never fails.
    pub fn score(&self, text: &str, lexicon: &LexiconTable) -> EmotionResult {
        if text.trim().is_empty() {
            return EmotionResult::zeroed(EmotionReason::E102_ZERO_EMPTY_TEXT);
        }

        let tokens = tokenize(text);
        if tokens.is_empty() {
            return EmotionResult::zeroed(EmotionReason::E103_ZERO_NO_TOKENS);
        }

        let mut scores = EmotionScores::zero();
        let mut matched = 0;
        for token in &tokens {
            if let Some(intensities) = lexicon.get(token) {
                matched += 1;
                for category in EmotionCategory::ALL {
                    if let Some(intensity) = intensities.get(&category) {
                        scores.add(category, *intensity);
                    }
                }
            }
        }

        EmotionResult::scored(scores, tokens.len(), matched)
    }

    /// Quick score - just the totals
    pub fn quick_score(&self, text: &str, lexicon: &LexiconTable) -> EmotionScores {
        self.score(text, lexicon).scores
    }
}

// =============================================================================
// TESTS
// =============================================================================
