//! Engine configuration

use std::path::PathBuf;
use serde::Deserialize;
use crate::{DEFAULT_CORPUS_PATH, DEFAULT_LEXICON_PATH, DEFAULT_TOP_N};

/// Where the engine reads its sources from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Verse corpus CSV
    pub corpus_path: PathBuf,
    /// Emotion lexicon; None runs polarity-only without probing the disk
    pub lexicon_path: Option<PathBuf>,
    /// Full valence lexicon for the polarity scorer; None uses the built-in word list
    pub valence_lexicon_path: Option<PathBuf>,
    /// Default result count for top-verse queries
    pub top_n: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            corpus_path: PathBuf::from(DEFAULT_CORPUS_PATH),
            lexicon_path: Some(PathBuf::from(DEFAULT_LEXICON_PATH)),
            valence_lexicon_path: None,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl EngineConfig {
    pub fn new(corpus_path: impl Into<PathBuf>) -> Self {
        Self {
            corpus_path: corpus_path.into(),
            ..Self::default()
        }
    }

    pub fn with_lexicon(mut self, path: impl Into<PathBuf>) -> Self {
        self.lexicon_path = Some(path.into());
        self
    }

    pub fn without_lexicon(mut self) -> Self {
        self.lexicon_path = None;
        self
    }

    pub fn with_valence_lexicon(mut self, path: impl Into<PathBuf>) -> Self {
        self.valence_lexicon_path = Some(path.into());
        self
    }
}

// =============================================================================
// TESTS
// =============================================================================
