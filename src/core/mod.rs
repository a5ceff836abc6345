//! Core modules for verse-sentiment

pub mod corpus;
pub mod lexicon;
pub mod emotion;
pub mod polarity;
pub mod aggregator;
pub mod ranking;
pub mod config;
pub mod engine;
pub mod api;

pub use corpus::{load_corpus, load_corpus_from_reader};
pub use lexicon::{load_lexicon, load_lexicon_from_reader};
pub use emotion::{tokenize, EmotionScorer};
pub use polarity::{PolarityScorer, ValenceLexicon, VaderScorer};
pub use aggregator::{aggregate, Aggregator};
pub use ranking::{chapter_heatmap, emotion_distribution, rank_groups, top_scored, top_verses};
pub use config::EngineConfig;
pub use engine::SentimentEngine;
pub use api::{create_router, run_server};
