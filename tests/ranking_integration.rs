//! Integration tests for the ranking service
//!
//! Verse text starts with the compound score the test oracle should report,
//! so expected orderings can be read straight off the fixtures.

use pretty_assertions::assert_eq;

use verse_sentiment::core::{PolarityScorer, SentimentEngine};
use verse_sentiment::types::{
    Book, Corpus, EmotionCategory, EmotionTotal, EngineError, GroupKey, Lexicon, LexiconTable,
    PolarityColumn, PolarityScores, ReasonCode, ScoreColumn, ScoringMode, Verse,
};

/// Oracle reading "<compound> words..." texts
struct LeadingNumberScorer;

impl PolarityScorer for LeadingNumberScorer {
    fn polarity(&self, text: &str) -> PolarityScores {
        let compound: f64 = text
            .split_whitespace()
            .next()
            .and_then(|t| t.parse().ok())
            .unwrap_or(0.0);
        PolarityScores {
            positive: compound.max(0.0),
            negative: (-compound).max(0.0),
            neutral: 1.0 - compound.abs(),
            compound,
        }
    }
}

fn corpus() -> Corpus {
    Corpus::new(vec![
        Verse::new(Book::Genesis, 1, 1, "0.10 light"),
        Verse::new(Book::Genesis, 1, 2, "-0.50 darkness darkness"),
        Verse::new(Book::Genesis, 2, 1, "0.30 light light light"),
        Verse::new(Book::Exodus, 1, 1, "0.90 bondage"),
        Verse::new(Book::Exodus, 2, 1, "-0.90 darkness"),
        Verse::new(Book::Psalms, 23, 1, "0.60 light shepherd"),
    ])
    .unwrap()
}

fn lexicon() -> Lexicon {
    Lexicon::from(LexiconTable::from_entries([
        ("light", EmotionCategory::Joy, 1),
        ("light", EmotionCategory::Trust, 1),
        ("darkness", EmotionCategory::Fear, 1),
        ("darkness", EmotionCategory::Sadness, 1),
        ("shepherd", EmotionCategory::Trust, 1),
        ("bondage", EmotionCategory::Anger, 1),
    ]))
}

fn aware() -> SentimentEngine {
    SentimentEngine::from_parts(&corpus(), &lexicon(), &LeadingNumberScorer)
}

fn polarity_only() -> SentimentEngine {
    let absent = Lexicon::Absent(ReasonCode::L202_LEXICON_NOT_FOUND);
    SentimentEngine::from_parts(&corpus(), &absent, &LeadingNumberScorer)
}

fn refs(verses: &[Verse]) -> Vec<String> {
    verses.iter().map(|v| v.reference().to_string()).collect()
}

// =============================================================================
// Top verses
// =============================================================================

#[test]
fn test_top_trust_emotion_aware() {
    let top = aware().top_scored("Trust", 3).unwrap();
    assert_eq!(top.mode, ScoringMode::EmotionAware);
    assert_eq!(top.column, ScoreColumn::Emotion(EmotionCategory::Trust));
    assert_eq!(
        refs(&top.verses.iter().map(|s| s.verse.clone()).collect::<Vec<_>>()),
        vec!["Genesis 2:1", "Psalms 23:1", "Genesis 1:1"]
    );
    assert_eq!(top.verses[0].score, 3.0);
    assert_eq!(top.verses[1].score, 2.0);
}

#[test]
fn test_top_fear_ties_keep_corpus_order() {
    let top = aware().top_verses("FEAR", 10).unwrap();
    assert_eq!(
        refs(&top),
        vec!["Genesis 1:2", "Exodus 2:1", "Genesis 1:1", "Genesis 2:1", "Exodus 1:1", "Psalms 23:1"]
    );
}

#[test]
fn test_top_polarity_only_fallback_columns() {
    let engine = polarity_only();

    let joy = engine.top_verses("joy", 2).unwrap();
    assert_eq!(refs(&joy), vec!["Exodus 1:1", "Psalms 23:1"]);

    let sadness = engine.top_scored("Sadness", 1).unwrap();
    assert_eq!(sadness.column, ScoreColumn::Polarity(PolarityColumn::Negative));
    assert_eq!(sadness.verses[0].verse.reference().to_string(), "Exodus 2:1");

    let surprise = engine.top_scored("Surprise", 1).unwrap();
    assert_eq!(surprise.column, ScoreColumn::Polarity(PolarityColumn::Neutral));
    assert_eq!(surprise.verses[0].verse.reference().to_string(), "Genesis 1:1");
}

#[test]
fn test_unknown_emotion_is_invalid_query() {
    for engine in [aware(), polarity_only()] {
        let err = engine.top_verses("Love", 5).unwrap_err();
        assert!(err.is_invalid_query());
        assert!(matches!(err, EngineError::UnknownEmotion(ref name) if name == "Love"));
    }
}

// =============================================================================
// Group ranking
// =============================================================================

#[test]
fn test_rank_books() {
    let books = aware().rank_groups("book").unwrap();
    let order: Vec<Book> = books.iter().map(|r| r.group.book).collect();
    assert_eq!(order, vec![Book::Psalms, Book::Exodus, Book::Genesis]);
    assert_eq!(books[1].mean_compound, 0.0);
    assert_eq!(books[2].verse_count, 3);
    assert!((books[2].mean_compound - (-0.1 / 3.0)).abs() < 1e-9);
}

#[test]
fn test_rank_chapters() {
    let chapters = polarity_only().rank_groups(" Book+Chapter ").unwrap();
    let labels: Vec<String> = chapters.iter().map(|r| r.group.to_string()).collect();
    assert_eq!(
        labels,
        vec!["Exodus 1", "Psalms 23", "Genesis 2", "Genesis 1", "Exodus 2"]
    );
    assert_eq!(chapters[3].verse_count, 2);
}

#[test]
fn test_unknown_group_key() {
    let err = aware().rank_groups("testament").unwrap_err();
    assert!(matches!(err, EngineError::UnknownGroupKey(_)));
    assert!("book".parse::<GroupKey>().is_ok());
}

// =============================================================================
// Distribution & heatmap
// =============================================================================

#[test]
fn test_emotion_distribution() {
    let totals = aware().emotion_distribution().unwrap();
    let expected = [
        (EmotionCategory::Joy, 5),
        (EmotionCategory::Trust, 6),
        (EmotionCategory::Fear, 3),
        (EmotionCategory::Surprise, 0),
        (EmotionCategory::Sadness, 3),
        (EmotionCategory::Disgust, 0),
        (EmotionCategory::Anger, 1),
        (EmotionCategory::Anticipation, 0),
    ]
    .map(|(emotion, total)| EmotionTotal { emotion, total });
    assert_eq!(totals, expected.to_vec());
}

#[test]
fn test_distribution_rejected_in_polarity_only() {
    let err = polarity_only().emotion_distribution().unwrap_err();
    assert!(matches!(err, EngineError::LexiconUnavailable));
}

#[test]
fn test_chapter_heatmap() {
    let heatmap = aware().chapter_heatmap();
    let books: Vec<Book> = heatmap.iter().map(|r| r.book).collect();
    assert_eq!(books, vec![Book::Genesis, Book::Exodus, Book::Psalms]);

    let genesis: Vec<u32> = heatmap[0].cells.iter().map(|c| c.chapter).collect();
    assert_eq!(genesis, vec![1, 2]);
    assert!((heatmap[0].cells[0].mean_compound - (-0.2)).abs() < 1e-9);
    assert_eq!(heatmap[2].cells[0].mean_compound, 0.6);
}
