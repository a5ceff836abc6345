//! Verse corpus and scored corpus
//!
//! Both are built once and read-only afterwards.

use serde::Serialize;
use crate::types::{EngineError, EngineResult, ScoringMode, Verse, VerseScore};

/// Ordered, non-empty sequence of verses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    verses: Vec<Verse>,
}

impl Corpus {
    /// Build a corpus. An empty verse list is rejected.
    pub fn new(verses: Vec<Verse>) -> EngineResult<Self> {
        if verses.is_empty() {
            return Err(EngineError::EmptyCorpus);
        }
        Ok(Self { verses })
    }

    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}

/// Scored verses in corpus order, plus the mode fixed for the run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCorpus {
    mode: ScoringMode,
    verses: Vec<VerseScore>,
}

impl ScoredCorpus {
    pub(crate) fn new(mode: ScoringMode, verses: Vec<VerseScore>) -> Self {
        Self { mode, verses }
    }

    /// Mode selected when this corpus was aggregated
    pub fn mode(&self) -> ScoringMode {
        self.mode
    }

    pub fn verses(&self) -> &[VerseScore] {
        &self.verses
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
