//! Integration tests for the HTTP API

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use verse_sentiment::core::{create_router, SentimentEngine, VaderScorer};
use verse_sentiment::types::{
    Book, Corpus, EmotionCategory, Lexicon, LexiconTable, ReasonCode, Verse,
};

fn corpus() -> Corpus {
    Corpus::new(vec![
        Verse::new(Book::Genesis, 1, 3, "Let there be light, and there was light."),
        Verse::new(Book::Genesis, 1, 5, "And the evening and the morning were the first day."),
        Verse::new(Book::John, 11, 35, "Jesus wept."),
    ])
    .unwrap()
}

fn aware_router() -> Router {
    let lexicon = Lexicon::from(LexiconTable::from_entries([
        ("light", EmotionCategory::Joy, 1),
        ("wept", EmotionCategory::Sadness, 1),
    ]));
    let engine = SentimentEngine::from_parts(&corpus(), &lexicon, &VaderScorer::new());
    create_router(Arc::new(engine))
}

fn polarity_router() -> Router {
    let lexicon = Lexicon::Absent(ReasonCode::L202_LEXICON_NOT_FOUND);
    let engine = SentimentEngine::from_parts(&corpus(), &lexicon, &VaderScorer::new());
    create_router(Arc::new(engine))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = get(aware_router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], verse_sentiment::VERSION);
    assert_eq!(json["mode"], "EMOTION_AWARE");
    assert_eq!(json["verses"], 3);
    assert!(json["loaded_at"].is_string());
}

#[tokio::test]
async fn test_health_reports_polarity_only() {
    let (_, json) = get(polarity_router(), "/health").await;
    assert_eq!(json["mode"], "POLARITY_ONLY");
    assert_eq!(json["message"], "Using basic sentiment analysis (NRC lexicon not found)");
}

#[tokio::test]
async fn test_top_verses() {
    let (status, json) = get(aware_router(), "/verses/top?emotion=joy&n=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["emotion"], "joy");
    assert_eq!(json["column"]["kind"], "emotion");
    assert_eq!(json["verses"].as_array().unwrap().len(), 1);
    assert_eq!(json["verses"][0]["verse"]["verse"], 3);
    assert_eq!(json["verses"][0]["score"], 2.0);
}

#[tokio::test]
async fn test_top_verses_default_n() {
    let (status, json) = get(aware_router(), "/verses/top?emotion=Sadness").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["verses"].as_array().unwrap().len(), 3);
    assert_eq!(json["verses"][0]["verse"]["book"], "John");
}

#[tokio::test]
async fn test_top_verses_default_n_from_engine() {
    let lexicon = Lexicon::Absent(ReasonCode::L202_LEXICON_NOT_FOUND);
    let engine = SentimentEngine::from_parts(&corpus(), &lexicon, &VaderScorer::new()).with_top_n(2);
    let app = create_router(Arc::new(engine));

    let (status, json) = get(app, "/verses/top?emotion=Joy").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["verses"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_top_verses_polarity_fallback() {
    let (status, json) = get(polarity_router(), "/verses/top?emotion=Fear&n=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["column"]["kind"], "polarity");
    assert_eq!(json["column"]["name"], "negative");
}

#[tokio::test]
async fn test_unknown_emotion_is_bad_request() {
    let (status, json) = get(aware_router(), "/verses/top?emotion=Love").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("Love"));

    let (status, _) = get(aware_router(), "/verses/top").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rankings() {
    let (status, json) = get(aware_router(), "/rankings/book").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["key"], "book");
    assert_eq!(json["groups"].as_array().unwrap().len(), 2);

    let (status, json) = get(aware_router(), "/rankings/book+chapter").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["key"], "book+chapter");
    assert!(json["groups"][0]["group"]["chapter"].is_u64());
}

#[tokio::test]
async fn test_unknown_ranking_key() {
    let (status, json) = get(aware_router(), "/rankings/verse").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_distribution() {
    let (status, json) = get(aware_router(), "/emotions/distribution").await;
    assert_eq!(status, StatusCode::OK);
    let totals = json["totals"].as_array().unwrap();
    assert_eq!(totals.len(), 8);
    assert_eq!(totals[0]["emotion"], "joy");
    assert_eq!(totals[0]["total"], 2);
    assert_eq!(totals[4]["emotion"], "sadness");
    assert_eq!(totals[4]["total"], 1);
}

#[tokio::test]
async fn test_distribution_conflict_in_polarity_only() {
    let (status, json) = get(polarity_router(), "/emotions/distribution").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_heatmap() {
    let (status, json) = get(polarity_router(), "/heatmap").await;
    assert_eq!(status, StatusCode::OK);
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["book"], "Genesis");
    assert_eq!(rows[0]["cells"][0]["chapter"], 1);
}
