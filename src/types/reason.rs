//! Reason codes for load-phase decisions

use serde::{Deserialize, Serialize};

/// Why the lexicon store ended up loaded or absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ReasonCode {
    // =========================================================================
    // L200: Lexicon outcome
    // =========================================================================
    /// Lexicon parsed with at least one usable entry
    L201_LEXICON_LOADED,
    /// Lexicon source does not exist
    L202_LEXICON_NOT_FOUND,
    /// Lexicon source exists but could not be read
    L203_LEXICON_UNREADABLE,
    /// Lexicon source parsed to zero usable entries
    L204_LEXICON_EMPTY,
    /// No lexicon source configured
    L205_LEXICON_NOT_CONFIGURED,
}

impl ReasonCode {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::L201_LEXICON_LOADED => "L201_LEXICON_LOADED",
            Self::L202_LEXICON_NOT_FOUND => "L202_LEXICON_NOT_FOUND",
            Self::L203_LEXICON_UNREADABLE => "L203_LEXICON_UNREADABLE",
            Self::L204_LEXICON_EMPTY => "L204_LEXICON_EMPTY",
            Self::L205_LEXICON_NOT_CONFIGURED => "L205_LEXICON_NOT_CONFIGURED",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::L201_LEXICON_LOADED => "Emotion lexicon loaded",
            Self::L202_LEXICON_NOT_FOUND => "Emotion lexicon not found",
            Self::L203_LEXICON_UNREADABLE => "Emotion lexicon could not be read",
            Self::L204_LEXICON_EMPTY => "Emotion lexicon has no usable entries",
            Self::L205_LEXICON_NOT_CONFIGURED => "No emotion lexicon configured",
        }
    }

    /// Does this reason mean the lexicon is absent?
    pub fn is_absent(&self) -> bool {
        !matches!(self, Self::L201_LEXICON_LOADED)
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
