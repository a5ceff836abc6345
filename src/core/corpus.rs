//! Corpus loader: CSV verse records → normalized corpus
//!
//! Columns are read by position: id, book number, chapter, verse, text.
//! Header names are ignored. The corpus is authoritative, so an invalid
//! record rejects the whole load.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use serde::Deserialize;
use tracing::info;
use crate::types::{Book, Corpus, EngineError, EngineResult, Verse, BOOK_COUNT};

/// Raw CSV row before normalization
#[derive(Debug, Deserialize)]
struct RawRecord(String, i64, i64, i64, String);

/// Load a corpus from a CSV file
pub fn load_corpus<P: AsRef<Path>>(path: P) -> EngineResult<Corpus> {
    let file = File::open(path.as_ref())?;
    let corpus = load_corpus_from_reader(file)?;
    info!(path = %path.as_ref().display(), verses = corpus.len(), "corpus loaded");
    Ok(corpus)
}

/// Load a corpus from any CSV source
pub fn load_corpus_from_reader<R: Read>(reader: R) -> EngineResult<Corpus> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut verses = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let raw: RawRecord = record.deserialize(None)?;
        verses.push(normalize(raw, line)?);
    }

    Corpus::new(verses)
}

/// Validate and convert one raw row
fn normalize(raw: RawRecord, line: u64) -> EngineResult<Verse> {
    let RawRecord(_id, book, chapter, verse, text) = raw;

    let book = u8::try_from(book)
        .ok()
        .and_then(Book::from_number)
        .ok_or_else(|| EngineError::InvalidRecord {
            line,
            reason: format!("book number {} outside 1..={}", book, BOOK_COUNT),
        })?;
    let chapter = positive(chapter, "chapter", line)?;
    let verse = positive(verse, "verse", line)?;

    Ok(Verse::new(book, chapter, verse, text))
}

fn positive(value: i64, field: &str, line: u64) -> EngineResult<u32> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v >= 1)
        .ok_or_else(|| EngineError::InvalidRecord {
            line,
            reason: format!("{} must be a positive integer, got {}", field, value),
        })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
id,b,c,v,t
1001001,1,1,1,\"In the beginning God created the heaven and the earth.\"
1001002,1,1,2,\"And the earth was without form, and void.\"
19023001,19,23,1,The LORD is my shepherd; I shall not want.
";

    #[test]
    fn test_loads_in_order_with_book_names() {
        let corpus = load_corpus_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(corpus.len(), 3);
        let verses = corpus.verses();
        assert_eq!(verses[0].book, Book::Genesis);
        assert_eq!(verses[1].verse, 2);
        assert_eq!(verses[2].book, Book::Psalms);
        assert_eq!(verses[2].reference().to_string(), "Psalms 23:1");
        assert_eq!(verses[2].text, "The LORD is my shepherd; I shall not want.");
    }

    #[test]
    fn test_header_names_are_ignored() {
        let csv = "a,b,c,d,e\n1,66,22,21,The grace of our Lord Jesus Christ be with you all.\n";
        let corpus = load_corpus_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(corpus.verses()[0].book, Book::Revelation);
    }

    #[test]
    fn test_empty_corpus_rejected() {
        let csv = "id,b,c,v,t\n";
        assert!(matches!(load_corpus_from_reader(csv.as_bytes()), Err(EngineError::EmptyCorpus)));
    }

    #[test]
    fn test_book_out_of_range_rejected() {
        for book in ["0", "67", "-1"] {
            let csv = format!("id,b,c,v,t\n1,{},1,1,text\n", book);
            match load_corpus_from_reader(csv.as_bytes()) {
                Err(EngineError::InvalidRecord { line, .. }) => assert_eq!(line, 2),
                other => panic!("expected InvalidRecord for book {}, got {:?}", book, other),
            }
        }
    }

    #[test]
    fn test_non_positive_chapter_rejected() {
        let csv = "id,b,c,v,t\n1,1,0,1,text\n";
        assert!(matches!(
            load_corpus_from_reader(csv.as_bytes()),
            Err(EngineError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn test_wrong_field_count_is_csv_error() {
        let csv = "id,b,c,v,t\n1,1,1,text\n";
        assert!(matches!(load_corpus_from_reader(csv.as_bytes()), Err(EngineError::CorpusCsv(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_corpus("/nonexistent/dir/bible.csv");
        assert!(matches!(result, Err(EngineError::CorpusIo(_))));
    }
}
