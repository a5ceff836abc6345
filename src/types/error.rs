//! Engine error types

use thiserror::Error;

/// Errors surfaced by the engine. Lexicon absence and malformed lexicon
/// lines are not errors and never appear here.
#[derive(Error, Debug)]
pub enum EngineError {
    // Load phase
    #[error("failed to read corpus: {0}")]
    CorpusIo(#[from] std::io::Error),

    #[error("failed to parse corpus: {0}")]
    CorpusCsv(#[from] csv::Error),

    #[error("invalid corpus record at line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    #[error("corpus contains no verses")]
    EmptyCorpus,

    // Query phase
    #[error("unknown emotion: {0:?} (expected one of Joy, Trust, Fear, Surprise, Sadness, Disgust, Anger, Anticipation)")]
    UnknownEmotion(String),

    #[error("unknown group key: {0:?} (expected \"book\" or \"book+chapter\")")]
    UnknownGroupKey(String),

    #[error("emotion lexicon not loaded; emotion totals are unavailable in polarity-only mode")]
    LexiconUnavailable,
}

impl EngineError {
    /// Is this a rejected query (as opposed to a load failure)?
    pub fn is_invalid_query(&self) -> bool {
        matches!(
            self,
            Self::UnknownEmotion(_) | Self::UnknownGroupKey(_) | Self::LexiconUnavailable
        )
    }
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
