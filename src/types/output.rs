//! Query keys and result structures returned by the ranking service

use serde::{Deserialize, Serialize};
use crate::types::{
    Book, EmotionCategory, EngineError, PolarityColumn, ScoringMode, Verse,
};

/// Column a top-verses query was ranked by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum ScoreColumn {
    /// Lexicon emotion total
    Emotion(EmotionCategory),
    /// Polarity proportion (fallback)
    Polarity(PolarityColumn),
}

impl std::fmt::Display for ScoreColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreColumn::Emotion(c) => write!(f, "emotion:{}", c.key()),
            ScoreColumn::Polarity(c) => write!(f, "polarity:{}", c.name()),
        }
    }
}

/// A verse together with the value it was ranked by
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredVerse {
    pub verse: Verse,
    pub score: f64,
}

impl ScoredVerse {
    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!("{} | score={:.3} | {}", self.verse.reference(), self.score, self.verse.text)
    }
}

/// Result of a top-verses query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopVerses {
    pub emotion: EmotionCategory,
    pub mode: ScoringMode,
    pub column: ScoreColumn,
    pub verses: Vec<ScoredVerse>,
}

/// Grouping used by group ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupKey {
    /// One group per book
    #[serde(rename = "book")]
    Book,
    /// One group per (book, chapter)
    #[serde(rename = "book+chapter")]
    BookChapter,
}

impl GroupKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupKey::Book => "book",
            GroupKey::BookChapter => "book+chapter",
        }
    }
}

impl std::str::FromStr for GroupKey {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if key.eq_ignore_ascii_case("book") {
            Ok(GroupKey::Book)
        } else if key.eq_ignore_ascii_case("book+chapter") {
            Ok(GroupKey::BookChapter)
        } else {
            Err(EngineError::UnknownGroupKey(s.to_string()))
        }
    }
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identity of a ranked group. `chapter` is set only for book+chapter groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupIdentity {
    pub book: Book,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter: Option<u32>,
}

impl std::fmt::Display for GroupIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.chapter {
            Some(chapter) => write!(f, "{} {}", self.book, chapter),
            None => write!(f, "{}", self.book),
        }
    }
}

/// One entry of a group ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRanking {
    pub group: GroupIdentity,
    /// Arithmetic mean of compound scores over the group's verses
    pub mean_compound: f64,
    pub verse_count: usize,
}

impl GroupRanking {
    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "{} | mean_compound={:.3} | verses={}",
            self.group, self.mean_compound, self.verse_count
        )
    }
}

/// Corpus-wide total for one emotion category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionTotal {
    pub emotion: EmotionCategory,
    pub total: u64,
}

/// One cell of the book × chapter heatmap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub chapter: u32,
    pub mean_compound: f64,
}

/// One book row of the heatmap, chapters ascending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapRow {
    pub book: Book,
    pub cells: Vec<HeatmapCell>,
}
