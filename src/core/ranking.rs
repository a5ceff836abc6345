//! Ranking service: read-only queries over a ScoredCorpus
//!
//! Every sort here is stable, so equal scores keep corpus order.

use std::collections::{BTreeMap, HashMap};
use crate::types::{
    Book, EmotionCategory, EmotionScores, EmotionTotal, EngineError, EngineResult, GroupIdentity,
    GroupKey, GroupRanking, HeatmapCell, HeatmapRow, ScoreColumn, ScoredCorpus, ScoredVerse,
    ScoringMode, TopVerses, Verse, VerseScore,
};

/// Resolve a human-facing emotion name
pub fn resolve_emotion(name: &str) -> EngineResult<EmotionCategory> {
    EmotionCategory::from_label(name).ok_or_else(|| EngineError::UnknownEmotion(name.to_string()))
}

/// Score column an emotion query sorts by in the given mode
pub fn resolve_column(emotion: EmotionCategory, mode: ScoringMode) -> ScoreColumn {
    match mode {
        ScoringMode::EmotionAware => ScoreColumn::Emotion(emotion),
        ScoringMode::PolarityOnly => ScoreColumn::Polarity(emotion.fallback_column()),
    }
}

/// Fold -0.0 into 0.0 so equal scores compare equal under `total_cmp`
fn sort_key(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

fn column_value(score: &VerseScore, column: ScoreColumn) -> f64 {
    let value = match column {
        ScoreColumn::Emotion(category) => score
            .emotions
            .map_or(0.0, |emotions| f64::from(emotions.get(category))),
        ScoreColumn::Polarity(column) => score.polarity.column(column),
    };
    sort_key(value)
}

// =============================================================================
// TOP VERSES
// =============================================================================

/// Top `n` verses for an emotion, with the score they were ranked by
pub fn top_scored(scored: &ScoredCorpus, emotion: &str, n: usize) -> EngineResult<TopVerses> {
    let emotion = resolve_emotion(emotion)?;
    let column = resolve_column(emotion, scored.mode());

    let mut ranked: Vec<(f64, &VerseScore)> = scored
        .verses()
        .iter()
        .map(|score| (column_value(score, column), score))
        .collect();
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

    let verses = ranked
        .into_iter()
        .take(n)
        .map(|(score, row)| ScoredVerse {
            verse: row.verse.clone(),
            score,
        })
        .collect();

    Ok(TopVerses {
        emotion,
        mode: scored.mode(),
        column,
        verses,
    })
}

/// Top `n` verses for an emotion
pub fn top_verses(scored: &ScoredCorpus, emotion: &str, n: usize) -> EngineResult<Vec<Verse>> {
    Ok(top_scored(scored, emotion, n)?
        .verses
        .into_iter()
        .map(|s| s.verse)
        .collect())
}

// =============================================================================
// GROUP RANKING
// =============================================================================

fn group_of(verse: &Verse, key: GroupKey) -> GroupIdentity {
    GroupIdentity {
        book: verse.book,
        chapter: match key {
            GroupKey::Book => None,
            GroupKey::BookChapter => Some(verse.chapter),
        },
    }
}

/// Mean compound per group, highest first, ties by first appearance
pub fn rank_groups(scored: &ScoredCorpus, key: &str) -> EngineResult<Vec<GroupRanking>> {
    let key: GroupKey = key.parse()?;

    let mut order: Vec<GroupIdentity> = Vec::new();
    let mut sums: HashMap<GroupIdentity, (f64, usize)> = HashMap::new();
    for row in scored.verses() {
        let group = group_of(&row.verse, key);
        let entry = sums.entry(group).or_insert_with(|| {
            order.push(group);
            (0.0, 0)
        });
        entry.0 += row.polarity.compound;
        entry.1 += 1;
    }

    let mut rankings: Vec<GroupRanking> = order
        .into_iter()
        .map(|group| {
            let (sum, count) = sums[&group];
            GroupRanking {
                group,
                mean_compound: sort_key(sum / count as f64),
                verse_count: count,
            }
        })
        .collect();
    rankings.sort_by(|a, b| b.mean_compound.total_cmp(&a.mean_compound));

    Ok(rankings)
}

// =============================================================================
// DISTRIBUTION & HEATMAP
// =============================================================================

/// Corpus-wide totals per category, in category order
pub fn emotion_distribution(scored: &ScoredCorpus) -> EngineResult<Vec<EmotionTotal>> {
    if !scored.mode().is_emotion_aware() {
        return Err(EngineError::LexiconUnavailable);
    }

    let totals: [u64; 8] = scored
        .verses()
        .iter()
        .filter_map(|row| row.emotions.as_ref())
        .fold([0u64; 8], |mut acc, emotions: &EmotionScores| {
            for (i, (_, value)) in emotions.iter().enumerate() {
                acc[i] += u64::from(value);
            }
            acc
        });

    Ok(EmotionCategory::ALL
        .iter()
        .zip(totals)
        .map(|(&emotion, total)| EmotionTotal { emotion, total })
        .collect())
}

/// Mean compound per chapter, books in first-appearance order
pub fn chapter_heatmap(scored: &ScoredCorpus) -> Vec<HeatmapRow> {
    let mut order: Vec<Book> = Vec::new();
    let mut chapters: HashMap<Book, BTreeMap<u32, (f64, usize)>> = HashMap::new();

    for row in scored.verses() {
        let book = row.verse.book;
        let cells = chapters.entry(book).or_insert_with(|| {
            order.push(book);
            BTreeMap::new()
        });
        let cell = cells.entry(row.verse.chapter).or_insert((0.0, 0));
        cell.0 += row.polarity.compound;
        cell.1 += 1;
    }

    order
        .into_iter()
        .map(|book| HeatmapRow {
            book,
            cells: chapters
                .remove(&book)
                .unwrap_or_default()
                .into_iter()
                .map(|(chapter, (sum, count))| HeatmapCell {
                    chapter,
                    mean_compound: sum / count as f64,
                })
                .collect(),
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PolarityColumn, PolarityScores};

    fn row(book: Book, chapter: u32, verse: u32, compound: f64, joy: Option<u32>) -> VerseScore {
        let positive = compound.max(0.0);
        let negative = (-compound).max(0.0);
        VerseScore {
            verse: Verse::new(book, chapter, verse, format!("{} {}:{}", book, chapter, verse)),
            polarity: PolarityScores {
                positive,
                negative,
                neutral: 1.0 - positive - negative,
                compound,
            },
            emotions: joy.map(|j| {
                let mut e = EmotionScores::zero();
                e.add(EmotionCategory::Joy, j);
                e.add(EmotionCategory::Fear, 1);
                e
            }),
        }
    }

    fn aware() -> ScoredCorpus {
        ScoredCorpus::new(
            ScoringMode::EmotionAware,
            vec![
                row(Book::Genesis, 1, 1, 0.2, Some(1)),
                row(Book::Genesis, 1, 2, -0.4, Some(3)),
                row(Book::Genesis, 2, 1, 0.6, Some(1)),
                row(Book::Exodus, 1, 1, 0.8, Some(0)),
            ],
        )
    }

    fn polarity_only() -> ScoredCorpus {
        ScoredCorpus::new(
            ScoringMode::PolarityOnly,
            vec![
                row(Book::Genesis, 1, 1, 0.2, None),
                row(Book::Genesis, 1, 2, -0.4, None),
                row(Book::Exodus, 1, 1, 0.8, None),
            ],
        )
    }

    fn refs(verses: &[Verse]) -> Vec<String> {
        verses.iter().map(|v| v.reference().to_string()).collect()
    }

    #[test]
    fn test_top_verses_by_emotion_total() {
        let top = top_verses(&aware(), "Joy", 3).unwrap();
        assert_eq!(refs(&top), vec!["Genesis 1:2", "Genesis 1:1", "Genesis 2:1"]);
    }

    #[test]
    fn test_top_verses_ties_keep_corpus_order() {
        let top = top_verses(&aware(), "fear", 10).unwrap();
        assert_eq!(
            refs(&top),
            vec!["Genesis 1:1", "Genesis 1:2", "Genesis 2:1", "Exodus 1:1"]
        );
    }

    #[test]
    fn test_top_verses_fallback_column() {
        let top = top_scored(&polarity_only(), " anger ", 1).unwrap();
        assert_eq!(top.column, ScoreColumn::Polarity(PolarityColumn::Negative));
        assert_eq!(refs(&[top.verses[0].verse.clone()]), vec!["Genesis 1:2"]);
        assert_eq!(top.verses[0].score, 0.4);

        let top = top_verses(&polarity_only(), "JOY", 1).unwrap();
        assert_eq!(refs(&top), vec!["Exodus 1:1"]);
    }

    #[test]
    fn test_signed_zero_ties_keep_corpus_order() {
        let mut first = row(Book::Genesis, 1, 1, 0.0, None);
        first.polarity.negative = -0.0;
        let second = row(Book::Genesis, 1, 2, 0.0, None);
        let scored = ScoredCorpus::new(ScoringMode::PolarityOnly, vec![first, second]);

        let top = top_scored(&scored, "Fear", 2).unwrap();
        assert_eq!(
            refs(&top.verses.iter().map(|s| s.verse.clone()).collect::<Vec<_>>()),
            vec!["Genesis 1:1", "Genesis 1:2"]
        );
        assert!(top.verses[0].score.is_sign_positive());
    }

    #[test]
    fn test_signed_zero_group_means_keep_first_appearance() {
        let mut ruth = row(Book::Ruth, 1, 1, 0.0, None);
        ruth.polarity.compound = -0.0;
        let scored = ScoredCorpus::new(
            ScoringMode::PolarityOnly,
            vec![ruth, row(Book::Esther, 1, 1, 0.0, None)],
        );
        let ranked = rank_groups(&scored, "book").unwrap();
        let books: Vec<Book> = ranked.iter().map(|r| r.group.book).collect();
        assert_eq!(books, vec![Book::Ruth, Book::Esther]);
    }

    #[test]
    fn test_top_verses_n_larger_than_corpus() {
        assert_eq!(top_verses(&aware(), "Trust", 100).unwrap().len(), 4);
        assert!(top_verses(&aware(), "Trust", 0).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_emotion_rejected_in_both_modes() {
        assert!(matches!(top_verses(&aware(), "Love", 1), Err(EngineError::UnknownEmotion(_))));
        assert!(matches!(
            top_verses(&polarity_only(), "positive", 1),
            Err(EngineError::UnknownEmotion(_))
        ));
    }

    #[test]
    fn test_rank_books() {
        let ranked = rank_groups(&aware(), "book").unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].group.book, Book::Exodus);
        assert_eq!(ranked[0].verse_count, 1);
        assert_eq!(ranked[1].group.book, Book::Genesis);
        assert_eq!(ranked[1].verse_count, 3);
        assert!((ranked[1].mean_compound - 0.4 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_rank_chapters_ties_by_first_appearance() {
        let scored = ScoredCorpus::new(
            ScoringMode::PolarityOnly,
            vec![
                row(Book::Ruth, 2, 1, 0.5, None),
                row(Book::Ruth, 1, 1, 0.5, None),
                row(Book::Ruth, 3, 1, 0.9, None),
            ],
        );
        let ranked = rank_groups(&scored, "Book+Chapter").unwrap();
        let chapters: Vec<Option<u32>> = ranked.iter().map(|r| r.group.chapter).collect();
        assert_eq!(chapters, vec![Some(3), Some(2), Some(1)]);
    }

    #[test]
    fn test_unknown_group_key() {
        assert!(matches!(rank_groups(&aware(), "chapter"), Err(EngineError::UnknownGroupKey(_))));
    }

    #[test]
    fn test_emotion_distribution() {
        let totals = emotion_distribution(&aware()).unwrap();
        assert_eq!(totals.len(), 8);
        assert_eq!(totals[0], EmotionTotal { emotion: EmotionCategory::Joy, total: 5 });
        assert_eq!(totals[2], EmotionTotal { emotion: EmotionCategory::Fear, total: 4 });
        assert_eq!(totals[4].total, 0);
    }

    #[test]
    fn test_emotion_distribution_requires_lexicon() {
        assert!(matches!(
            emotion_distribution(&polarity_only()),
            Err(EngineError::LexiconUnavailable)
        ));
    }

    #[test]
    fn test_chapter_heatmap() {
        let heatmap = chapter_heatmap(&aware());
        assert_eq!(heatmap.len(), 2);
        assert_eq!(heatmap[0].book, Book::Genesis);
        assert_eq!(heatmap[0].cells.len(), 2);
        assert_eq!(heatmap[0].cells[0].chapter, 1);
        assert!((heatmap[0].cells[0].mean_compound - (-0.1)).abs() < 1e-9);
        assert_eq!(heatmap[0].cells[1].mean_compound, 0.6);
        assert_eq!(heatmap[1].book, Book::Exodus);
    }
}
