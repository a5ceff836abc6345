//! Scoring aggregator: one scored row per verse, in corpus order
//!
//! Polarity is computed for every verse. Emotion totals are computed for
//! every verse iff the lexicon is loaded. The mode is decided here, once.

use tracing::{debug, info};
use crate::core::emotion::EmotionScorer;
use crate::core::polarity::PolarityScorer;
use crate::types::{Corpus, Lexicon, ScoredCorpus, ScoringMode, VerseScore};

/// Aggregator over a polarity oracle
pub struct Aggregator<'a> {
    polarity: &'a dyn PolarityScorer,
    emotion: EmotionScorer,
}

impl<'a> Aggregator<'a> {
    pub fn new(polarity: &'a dyn PolarityScorer) -> Self {
        Self {
            polarity,
            emotion: EmotionScorer::new(),
        }
    }

    /// Score every verse. Same inputs always give an equal result.
    pub fn aggregate(&self, corpus: &Corpus, lexicon: &Lexicon) -> ScoredCorpus {
        let table = lexicon.table();
        let mode = ScoringMode::from_lexicon_loaded(table.is_some());
        let mut zeroed = 0usize;

        let verses = corpus
            .verses()
            .iter()
            .map(|verse| {
                let polarity = self.polarity.polarity(&verse.text);
                let emotions = table.map(|table| {
                    let result = self.emotion.score(&verse.text, table);
                    if !result.is_scored() {
                        zeroed += 1;
                        debug!(
                            verse = %verse.reference(),
                            reason = result.reason.code(),
                            "emotion score defaulted to zero"
                        );
                    }
                    result.scores
                });
                VerseScore {
                    verse: verse.clone(),
                    polarity,
                    emotions,
                }
            })
            .collect::<Vec<_>>();

        info!(
            mode = %mode,
            verses = verses.len(),
            zero_scored = zeroed,
            lexicon = lexicon.reason().code(),
            "corpus scored"
        );

        ScoredCorpus::new(mode, verses)
    }
}

/// Score a corpus with the given polarity oracle
pub fn aggregate(corpus: &Corpus, lexicon: &Lexicon, polarity: &dyn PolarityScorer) -> ScoredCorpus {
    Aggregator::new(polarity).aggregate(corpus, lexicon)
}

// =============================================================================
// TESTS
// =============================================================================
