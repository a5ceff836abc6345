//! SentimentEngine: load once, then answer read-only queries
//!
//! The engine owns the immutable ScoredCorpus. Share it across threads
//! with `Arc<SentimentEngine>`; queries take `&self` and never lock.

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use crate::core::aggregator::aggregate;
use crate::core::config::EngineConfig;
use crate::core::corpus::load_corpus;
use crate::core::lexicon::load_lexicon;
use crate::core::polarity::{PolarityScorer, ValenceLexicon, VaderScorer};
use crate::core::ranking;
use crate::DEFAULT_TOP_N;
use crate::types::{
    Corpus, EmotionTotal, EngineResult, GroupRanking, HeatmapRow, Lexicon, ReasonCode,
    ScoredCorpus, ScoringMode, TopVerses, Verse,
};

/// Scored corpus plus the moment it was built
#[derive(Debug, Clone)]
pub struct SentimentEngine {
    scored: ScoredCorpus,
    top_n: usize,
    loaded_at: DateTime<Utc>,
}

impl SentimentEngine {
    /// Wrap an already scored corpus
    pub fn new(scored: ScoredCorpus) -> Self {
        Self {
            scored,
            top_n: DEFAULT_TOP_N,
            loaded_at: Utc::now(),
        }
    }

    /// Result count used when a top-verses query gives none
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    /// Score a loaded corpus with the given lexicon outcome and polarity oracle
    pub fn from_parts(corpus: &Corpus, lexicon: &Lexicon, polarity: &dyn PolarityScorer) -> Self {
        Self::new(aggregate(corpus, lexicon, polarity))
    }

    /// Run the whole load phase from configuration.
    ///
    /// Only corpus problems are fatal. The lexicon is probed exactly once
    /// here; whatever it yields fixes the mode for the engine's lifetime.
    pub fn build(config: &EngineConfig) -> EngineResult<Self> {
        let corpus = load_corpus(&config.corpus_path)?;

        let lexicon = match &config.lexicon_path {
            Some(path) => load_lexicon(path),
            None => {
                info!(
                    reason = ReasonCode::L205_LEXICON_NOT_CONFIGURED.code(),
                    "no emotion lexicon configured"
                );
                Lexicon::Absent(ReasonCode::L205_LEXICON_NOT_CONFIGURED)
            }
        };

        let scorer = polarity_scorer(config);
        Ok(Self::from_parts(&corpus, &lexicon, &scorer).with_top_n(config.top_n))
    }

    pub fn scored(&self) -> &ScoredCorpus {
        &self.scored
    }

    pub fn mode(&self) -> ScoringMode {
        self.scored.mode()
    }

    /// Human status line for the selected mode
    pub fn status_message(&self) -> &'static str {
        self.scored.mode().status_message()
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.scored.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scored.is_empty()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn top_verses(&self, emotion: &str, n: usize) -> EngineResult<Vec<Verse>> {
        ranking::top_verses(&self.scored, emotion, n)
    }

    pub fn top_scored(&self, emotion: &str, n: usize) -> EngineResult<TopVerses> {
        ranking::top_scored(&self.scored, emotion, n)
    }

    pub fn rank_groups(&self, key: &str) -> EngineResult<Vec<GroupRanking>> {
        ranking::rank_groups(&self.scored, key)
    }

    pub fn emotion_distribution(&self) -> EngineResult<Vec<EmotionTotal>> {
        ranking::emotion_distribution(&self.scored)
    }

    pub fn chapter_heatmap(&self) -> Vec<HeatmapRow> {
        ranking::chapter_heatmap(&self.scored)
    }
}

/// VADER scorer over the configured valence file, or the built-in list
fn polarity_scorer(config: &EngineConfig) -> VaderScorer {
    let Some(path) = &config.valence_lexicon_path else {
        return VaderScorer::new();
    };

    match ValenceLexicon::load(path) {
        Ok(lexicon) if !lexicon.is_empty() => {
            info!(path = %path.display(), words = lexicon.len(), "valence lexicon loaded");
            VaderScorer::with_lexicon(lexicon)
        }
        Ok(_) => {
            warn!(path = %path.display(), "valence lexicon empty, using built-in word list");
            VaderScorer::new()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "valence lexicon unreadable, using built-in word list");
            VaderScorer::new()
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
