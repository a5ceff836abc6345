//! Lexicon store: word → emotion → intensity
//!
//! Source format: one `word<TAB>emotion<TAB>intensity` triple per line.
//! Outcome is all or nothing. A missing or unreadable source is Absent,
//! never an error; malformed lines are skipped and counted.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};
use crate::types::{EmotionCategory, Lexicon, LexiconTable, ReasonCode};

/// Classification of a single source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Usable (word, category, intensity) triple
    Entry(String, EmotionCategory, u32),
    /// Well-formed, but the emotion is outside the 8 categories
    Ignored,
    /// Blank line
    Blank,
    /// Wrong field count, empty word or bad intensity
    Malformed,
}

/// Load the lexicon from a file path
pub fn load_lexicon<P: AsRef<Path>>(path: P) -> Lexicon {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(
                path = %path.display(),
                reason = ReasonCode::L202_LEXICON_NOT_FOUND.code(),
                "emotion lexicon not found, falling back to polarity scores"
            );
            return Lexicon::Absent(ReasonCode::L202_LEXICON_NOT_FOUND);
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                reason = ReasonCode::L203_LEXICON_UNREADABLE.code(),
                "emotion lexicon unreadable, falling back to polarity scores"
            );
            return Lexicon::Absent(ReasonCode::L203_LEXICON_UNREADABLE);
        }
    };

    let lexicon = load_lexicon_from_reader(BufReader::new(file));
    if let Lexicon::Loaded(table) = &lexicon {
        info!(
            path = %path.display(),
            words = table.word_count(),
            entries = table.entry_count(),
            malformed = table.stats.malformed_lines,
            ignored = table.stats.ignored_lines,
            "emotion lexicon loaded"
        );
    }
    lexicon
}

/// Load the lexicon from any buffered source
pub fn load_lexicon_from_reader<R: BufRead>(reader: R) -> Lexicon {
    match parse_table(reader) {
        Ok(table) => {
            let lexicon = Lexicon::from(table);
            if let Lexicon::Absent(reason) = lexicon {
                warn!(reason = reason.code(), "emotion lexicon has no usable entries");
            }
            lexicon
        }
        Err(e) => {
            warn!(
                error = %e,
                reason = ReasonCode::L203_LEXICON_UNREADABLE.code(),
                "emotion lexicon read failed, discarding partial load"
            );
            Lexicon::Absent(ReasonCode::L203_LEXICON_UNREADABLE)
        }
    }
}

/// Parse every line into a table. Only an I/O failure aborts.
fn parse_table<R: BufRead>(reader: R) -> io::Result<LexiconTable> {
    let mut table = LexiconTable::new();

    for (index, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let outcome = match std::str::from_utf8(&bytes) {
            Ok(line) => parse_line(line),
            Err(_) => LineOutcome::Malformed,
        };

        match outcome {
            LineOutcome::Entry(word, category, intensity) => {
                table.insert(&word, category, intensity);
            }
            LineOutcome::Ignored => table.stats.ignored_lines += 1,
            LineOutcome::Blank => {}
            LineOutcome::Malformed => {
                debug!(line = index + 1, "skipping malformed lexicon line");
                table.stats.malformed_lines += 1;
            }
        }
    }

    Ok(table)
}

/// Classify one line of the lexicon source
pub fn parse_line(line: &str) -> LineOutcome {
    let line = line.trim();
    if line.is_empty() {
        return LineOutcome::Blank;
    }

    let parts: Vec<&str> = line.split('\t').collect();
    let [word, emotion, value] = parts.as_slice() else {
        return LineOutcome::Malformed;
    };

    let word = word.trim();
    if word.is_empty() {
        return LineOutcome::Malformed;
    }
    let Ok(intensity) = value.trim().parse::<u32>() else {
        return LineOutcome::Malformed;
    };

    match EmotionCategory::from_key(emotion.trim()) {
        Some(category) => LineOutcome::Entry(word.to_lowercase(), category, intensity),
        None => LineOutcome::Ignored,
    }
}

// =============================================================================
// TESTS
// =============================================================================
