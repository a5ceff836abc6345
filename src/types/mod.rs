//! Core types for verse-sentiment

mod book;
mod emotion;
mod verse;
mod score;
mod mode;
mod reason;
mod lexicon;
mod corpus;
mod output;
mod error;

pub use book::{Book, BOOK_COUNT};
pub use emotion::{EmotionCategory, PolarityColumn};
pub use verse::{Verse, VerseRef};
pub use score::{PolarityScores, EmotionScores, EmotionResult, EmotionReason, VerseScore};
pub use mode::ScoringMode;
pub use reason::ReasonCode;
pub use lexicon::{Lexicon, LexiconTable, LexiconStats};
pub use corpus::{Corpus, ScoredCorpus};
pub use output::{
    ScoreColumn, ScoredVerse, TopVerses, GroupKey, GroupIdentity, GroupRanking,
    EmotionTotal, HeatmapCell, HeatmapRow,
};
pub use error::{EngineError, EngineResult};
