//! verse-sentiment: emotion and sentiment scoring engine for verse corpora
//!
//! Load phase: corpus loader → lexicon store → aggregator (polarity + emotion scorers).
//! Query phase: the ranking service over the immutable scored corpus.

pub mod core;
pub mod types;

// =============================================================================
// DEFAULTS
// =============================================================================

/// Default number of verses returned by a top-verses query
pub const DEFAULT_TOP_N: usize = 10;

/// Default corpus location
pub const DEFAULT_CORPUS_PATH: &str = "bible.csv";

/// Default emotion lexicon location (NRC word-level lexicon)
pub const DEFAULT_LEXICON_PATH: &str = "NRC-Emotion-Lexicon-Wordlevel-v0.92.txt";

// =============================================================================
// POLARITY SCORER WEIGHTS - empirically derived values of the VADER model
// =============================================================================

/// Valence added by a booster word ("very", "extremely")
pub const BOOSTER_INCREMENT: f64 = 0.293;

/// Valence removed by a dampener word ("slightly", "barely")
pub const BOOSTER_DECREMENT: f64 = -0.293;

/// Valence added to an ALL-CAPS word in mixed-case text
pub const CAPS_INCREMENT: f64 = 0.733;

/// Multiplier applied to a negated word
pub const NEGATION_SCALAR: f64 = -0.74;

/// Weight of text before a contrastive "but"
pub const BUT_BEFORE_WEIGHT: f64 = 0.5;

/// Weight of text after a contrastive "but"
pub const BUT_AFTER_WEIGHT: f64 = 1.5;

/// Emphasis per exclamation mark (counted up to 4)
pub const EXCLAMATION_EMPHASIS: f64 = 0.292;

/// Emphasis per question mark when there are 2 or 3
pub const QUESTION_EMPHASIS: f64 = 0.18;

/// Emphasis cap for more than 3 question marks
pub const QUESTION_EMPHASIS_MAX: f64 = 0.96;

/// Normalization constant: compound = x / sqrt(x² + alpha)
pub const NORMALIZE_ALPHA: f64 = 15.0;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
