//! verse-sentiment CLI
//!
//! Usage:
//!   verse-sentiment                                  # Status + top verses for every emotion
//!   verse-sentiment --emotion Joy --top 5            # Top verses for one emotion
//!   verse-sentiment --rank-books                     # Books by mean compound
//!   verse-sentiment --rank-chapters                  # Chapters by mean compound
//!   verse-sentiment --distribution                   # Corpus-wide emotion totals
//!   verse-sentiment --heatmap                        # Mean compound per chapter
//!   verse-sentiment --serve                          # HTTP API server
//!   verse-sentiment --emotion Fear --json            # JSON output

use anyhow::{Context, Result};
use clap::Parser;
use colored::{ColoredString, Colorize};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use verse_sentiment::core::{run_server, EngineConfig, SentimentEngine};
use verse_sentiment::types::{
    EmotionCategory, EmotionTotal, GroupRanking, HeatmapRow, ScoringMode, TopVerses,
};
use verse_sentiment::{DEFAULT_CORPUS_PATH, DEFAULT_LEXICON_PATH, DEFAULT_TOP_N, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "verse-sentiment",
    version = VERSION,
    about = "Score verses for emotion and sentiment, then rank verses, books and chapters",
    long_about = "verse-sentiment loads a verse corpus, scores every verse for polarity and,\n\
                  when the NRC emotion lexicon is available, for eight emotions.\n\n\
                  Modes (fixed at startup):\n  \
                  EMOTION-AWARE  - lexicon loaded, emotions ranked by lexicon totals\n  \
                  POLARITY-ONLY  - lexicon absent, emotions ranked by a polarity column\n\n\
                  Emotions: Joy, Trust, Fear, Surprise, Sadness, Disgust, Anger, Anticipation"
)]
struct Args {
    /// Verse corpus CSV (id,b,c,v,t)
    #[arg(long, env = "VERSE_SENTIMENT_CORPUS", default_value = DEFAULT_CORPUS_PATH)]
    corpus: PathBuf,

    /// NRC word-level emotion lexicon
    #[arg(long, env = "VERSE_SENTIMENT_LEXICON", default_value = DEFAULT_LEXICON_PATH)]
    lexicon: PathBuf,

    /// Valence lexicon for the polarity scorer (word<TAB>mean)
    #[arg(long)]
    valence_lexicon: Option<PathBuf>,

    /// Show top verses for one emotion
    #[arg(short, long)]
    emotion: Option<String>,

    /// Number of verses to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Rank books by mean compound score
    #[arg(long)]
    rank_books: bool,

    /// Rank chapters by mean compound score
    #[arg(long)]
    rank_chapters: bool,

    /// Show corpus-wide emotion totals
    #[arg(long)]
    distribution: bool,

    /// Show mean compound score per chapter
    #[arg(long)]
    heatmap: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Log filter when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn config(&self) -> EngineConfig {
        EngineConfig {
            corpus_path: self.corpus.clone(),
            lexicon_path: Some(self.lexicon.clone()),
            valence_lexicon_path: self.valence_lexicon.clone(),
            top_n: self.top,
        }
    }

    fn has_action(&self) -> bool {
        self.emotion.is_some()
            || self.rank_books
            || self.rank_chapters
            || self.distribution
            || self.heatmap
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    if args.no_color {
        colored::control::set_override(false);
    }

    let config = args.config();
    let engine = SentimentEngine::build(&config)
        .with_context(|| format!("failed to load corpus from {}", config.corpus_path.display()))?;

    if args.serve {
        return run_serve(&args, engine).await;
    }

    if args.json {
        print_json(&args, &engine, engine.top_n())
    } else {
        print_text(&args, &engine, engine.top_n())
    }
}

/// Logs go to stderr so stdout stays clean for --json
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_serve(args: &Args, engine: SentimentEngine) -> Result<()> {
    println!();
    println!("{}", format!("verse-sentiment v{} API server", VERSION).bold());
    println!("  {} ({} verses)", mode_label(engine.mode()), engine.len());
    println!("  GET  /health                  - Status");
    println!("  GET  /verses/top?emotion=&n=  - Top verses for an emotion");
    println!("  GET  /rankings/:key           - book | book+chapter");
    println!("  GET  /emotions/distribution   - Emotion totals");
    println!("  GET  /heatmap                 - Chapter heatmap");
    println!();

    run_server(&args.addr, Arc::new(engine))
        .await
        .with_context(|| format!("server error on {}", args.addr))
}

// =============================================================================
// JSON OUTPUT
// =============================================================================

#[derive(Serialize)]
struct Report {
    version: &'static str,
    mode: ScoringMode,
    message: &'static str,
    verses: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    top: Vec<TopVerses>,
    #[serde(skip_serializing_if = "Option::is_none")]
    books: Option<Vec<GroupRanking>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chapters: Option<Vec<GroupRanking>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    distribution: Option<Vec<EmotionTotal>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    heatmap: Option<Vec<HeatmapRow>>,
}

fn print_json(args: &Args, engine: &SentimentEngine, n: usize) -> Result<()> {
    let top = match &args.emotion {
        Some(emotion) => vec![engine.top_scored(emotion, n)?],
        None if !args.has_action() => EmotionCategory::ALL
            .iter()
            .map(|e| engine.top_scored(e.label(), n))
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    let report = Report {
        version: VERSION,
        mode: engine.mode(),
        message: engine.status_message(),
        verses: engine.len(),
        top,
        books: args.rank_books.then(|| engine.rank_groups("book")).transpose()?,
        chapters: args.rank_chapters.then(|| engine.rank_groups("book+chapter")).transpose()?,
        distribution: args.distribution.then(|| engine.emotion_distribution()).transpose()?,
        heatmap: args.heatmap.then(|| engine.chapter_heatmap()),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

// =============================================================================
// TEXT OUTPUT
// =============================================================================

fn print_text(args: &Args, engine: &SentimentEngine, n: usize) -> Result<()> {
    print_header(engine);

    if !args.has_action() {
        for emotion in EmotionCategory::ALL {
            print_top(&engine.top_scored(emotion.label(), n)?);
        }
        return Ok(());
    }

    if let Some(emotion) = &args.emotion {
        print_top(&engine.top_scored(emotion, n)?);
    }
    if args.rank_books {
        print_rankings("Books by mean compound", &engine.rank_groups("book")?);
    }
    if args.rank_chapters {
        print_rankings("Chapters by mean compound", &engine.rank_groups("book+chapter")?);
    }
    if args.distribution {
        print_distribution(&engine.emotion_distribution()?);
    }
    if args.heatmap {
        print_heatmap(&engine.chapter_heatmap());
    }
    Ok(())
}

fn mode_label(mode: ScoringMode) -> ColoredString {
    match mode {
        ScoringMode::EmotionAware => mode.to_string().green().bold(),
        ScoringMode::PolarityOnly => mode.to_string().yellow().bold(),
    }
}

fn emotion_label(emotion: EmotionCategory) -> ColoredString {
    let (r, g, b) = emotion.rgb();
    emotion.label().truecolor(r, g, b).bold()
}

fn print_header(engine: &SentimentEngine) {
    println!("{}", "========================================".bold());
    println!("  verse-sentiment v{} - {}", VERSION, mode_label(engine.mode()));
    println!("{}", "========================================".bold());
    println!("{} ({} verses)", engine.status_message(), engine.len());
    if !engine.mode().is_emotion_aware() {
        println!(
            "{}",
            "Note: emotions are ranked by polarity (Joy/Trust/Anticipation by positive, \
             Fear/Sadness/Disgust/Anger by negative, Surprise by neutral)."
                .yellow()
        );
    }
    println!();
}

fn print_top(top: &TopVerses) {
    println!("{} {}", emotion_label(top.emotion), format!("[{}]", top.column).dimmed());
    for scored in &top.verses {
        println!(
            "  {} {}",
            scored.verse.reference().to_string().bold(),
            format!("({:.3})", scored.score).dimmed()
        );
        println!("    {}", scored.verse.text);
    }
    println!();
}

fn compound_colored(value: f64) -> ColoredString {
    let text = format!("{:+.3}", value);
    if value > 0.05 {
        text.green()
    } else if value < -0.05 {
        text.red()
    } else {
        text.normal()
    }
}

fn print_rankings(title: &str, rankings: &[GroupRanking]) {
    println!("{}", title.bold());
    for (i, ranking) in rankings.iter().enumerate() {
        println!(
            "  {:>4}. {:<24} {}  ({} verses)",
            i + 1,
            ranking.group.to_string(),
            compound_colored(ranking.mean_compound),
            ranking.verse_count
        );
    }
    println!();
}

fn print_distribution(totals: &[EmotionTotal]) {
    const BAR_WIDTH: u64 = 40;
    let max = totals.iter().map(|t| t.total).max().unwrap_or(0).max(1);

    println!("{}", "Emotion distribution".bold());
    for total in totals {
        let (r, g, b) = total.emotion.rgb();
        let bar = "#".repeat((total.total * BAR_WIDTH / max) as usize);
        println!(
            "  {:<13} {:>8}  {}",
            emotion_label(total.emotion),
            total.total,
            bar.truecolor(r, g, b)
        );
    }
    println!();
}

fn print_heatmap(rows: &[HeatmapRow]) {
    println!("{}", "Mean compound by chapter".bold());
    for row in rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|cell| format!("{}:{}", cell.chapter, compound_colored(cell.mean_compound)))
            .collect();
        println!("  {:<16} {}", row.book.name(), cells.join(" "));
    }
    println!();
}
