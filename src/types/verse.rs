//! Verse records

use serde::{Deserialize, Serialize};
use crate::types::Book;

/// Verse identity: (book, chapter, verse)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseRef {
    pub book: Book,
    pub chapter: u32,
    pub verse: u32,
}

impl std::fmt::Display for VerseRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// A single verse of the corpus. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub book: Book,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

impl Verse {
    pub fn new(book: Book, chapter: u32, verse: u32, text: impl Into<String>) -> Self {
        Self {
            book,
            chapter,
            verse,
            text: text.into(),
        }
    }

    /// Identity of this verse
    pub fn reference(&self) -> VerseRef {
        VerseRef {
            book: self.book,
            chapter: self.chapter,
            verse: self.verse,
        }
    }
}
