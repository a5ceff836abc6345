//! Emotion lexicon table and load outcome

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::types::{EmotionCategory, ReasonCode};

/// Counters collected while parsing a lexicon source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LexiconStats {
    /// Lines with the wrong field count, an empty word, a bad intensity or invalid UTF-8
    pub malformed_lines: usize,
    /// Well-formed lines naming an emotion outside the 8 categories
    pub ignored_lines: usize,
}

/// word → emotion category → intensity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexiconTable {
    words: HashMap<String, HashMap<EmotionCategory, u32>>,
    pub stats: LexiconStats,
}

impl LexiconTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from (word, category, intensity) triples
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, EmotionCategory, u32)>,
    {
        let mut table = Self::new();
        for (word, category, intensity) in entries {
            table.insert(word, category, intensity);
        }
        table
    }

    /// Insert one (word, category) intensity. The word is lowercased; a
    /// repeated pair overwrites the earlier value.
    pub fn insert(&mut self, word: &str, category: EmotionCategory, intensity: u32) {
        self.words
            .entry(word.to_lowercase())
            .or_default()
            .insert(category, intensity);
    }

    /// Intensities for a lowercased word
    pub fn get(&self, word: &str) -> Option<&HashMap<EmotionCategory, u32>> {
        self.words.get(word)
    }

    /// Intensity for one (word, category) pair
    pub fn intensity(&self, word: &str, category: EmotionCategory) -> Option<u32> {
        self.words.get(word).and_then(|m| m.get(&category).copied())
    }

    /// Number of distinct words
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of (word, category) entries
    pub fn entry_count(&self) -> usize {
        self.words.values().map(|m| m.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Outcome of a lexicon load: fully loaded, or absent with the reason.
/// There is no partially loaded state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lexicon {
    Loaded(LexiconTable),
    Absent(ReasonCode),
}

impl Lexicon {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Lexicon::Loaded(_))
    }

    /// The table, if loaded
    pub fn table(&self) -> Option<&LexiconTable> {
        match self {
            Lexicon::Loaded(table) => Some(table),
            Lexicon::Absent(_) => None,
        }
    }

    pub fn reason(&self) -> ReasonCode {
        match self {
            Lexicon::Loaded(_) => ReasonCode::L201_LEXICON_LOADED,
            Lexicon::Absent(reason) => *reason,
        }
    }
}

impl From<LexiconTable> for Lexicon {
    /// An empty table is treated as absent
    fn from(table: LexiconTable) -> Self {
        if table.is_empty() {
            Lexicon::Absent(ReasonCode::L204_LEXICON_EMPTY)
        } else {
            Lexicon::Loaded(table)
        }
    }
}
