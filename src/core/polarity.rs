//! Polarity scorer: positive / negative / neutral proportions plus a compound score
//!
//! The engine only depends on the `PolarityScorer` trait. `VaderScorer` is the
//! shipped rule-based implementation (valence lexicon, boosters, negation,
//! contrastive "but", caps and punctuation emphasis).

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use lazy_static::lazy_static;
use crate::{
    BOOSTER_INCREMENT, BOOSTER_DECREMENT, CAPS_INCREMENT, NEGATION_SCALAR,
    BUT_BEFORE_WEIGHT, BUT_AFTER_WEIGHT, EXCLAMATION_EMPHASIS,
    QUESTION_EMPHASIS, QUESTION_EMPHASIS_MAX, NORMALIZE_ALPHA,
};
use crate::types::PolarityScores;

/// Sentiment oracle consumed by the aggregator
pub trait PolarityScorer {
    /// Score one text. positive/negative/neutral lie in [0, 1], compound in [-1, 1].
    fn polarity(&self, text: &str) -> PolarityScores;
}

// =============================================================================
// WORD LISTS
// =============================================================================

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt",
    "ain't", "aren't", "can't", "couldn't", "daren't", "didn't", "doesn't",
    "dont", "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither",
    "don't", "hadn't", "hasn't", "haven't", "isn't", "mightn't", "mustn't",
    "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing", "nowhere",
    "oughtnt", "shant", "shouldnt", "wasnt", "werent", "oughtn't", "shan't",
    "shouldn't", "wasn't", "weren't", "without", "wont", "wouldnt", "won't",
    "wouldn't", "rarely", "seldom", "despite",
];

const BOOSTERS_UP: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerably", "decidedly",
    "deeply", "enormously", "entirely", "especially", "exceedingly", "exceptionally",
    "extremely", "fully", "greatly", "highly", "hugely", "incredibly", "intensely",
    "more", "most", "particularly", "purely", "quite", "really", "remarkably", "so",
    "sore", "substantially", "thoroughly", "totally", "tremendously", "unbelievably",
    "unusually", "utterly", "very",
];

const BOOSTERS_DOWN: &[&str] = &[
    "almost", "barely", "hardly", "kinda", "less", "little", "marginally",
    "occasionally", "partly", "scarcely", "slightly", "somewhat", "sorta",
];

/// Built-in valence lexicon, VADER scale (-4.0 to 4.0)
const BUILTIN_VALENCE: &[(&str, f64)] = &[
    // positive
    ("abundance", 2.0), ("accept", 1.6), ("accepted", 1.1), ("adore", 2.6), ("alive", 1.6),
    ("amazing", 2.8), ("beautiful", 2.9), ("beloved", 2.3), ("best", 3.2), ("bless", 1.8),
    ("blessed", 2.9), ("blessing", 2.2), ("blessings", 2.5), ("bountiful", 2.2), ("brave", 2.4),
    ("calm", 1.3), ("celebrate", 2.7), ("charity", 1.8), ("cheer", 2.3), ("clean", 1.7),
    ("comfort", 1.5), ("comforted", 1.8), ("compassion", 2.0), ("courage", 2.2), ("delight", 2.9),
    ("delivered", 1.1), ("excellent", 2.7), ("exalt", 2.1), ("faithful", 1.9), ("favour", 1.9),
    ("favor", 1.7), ("free", 2.3), ("freedom", 3.2), ("friend", 2.2), ("gentle", 1.9),
    ("gift", 1.9), ("glad", 2.0), ("gladness", 2.3), ("glorious", 3.2), ("glory", 2.3),
    ("good", 1.9), ("goodness", 2.2), ("grace", 1.8), ("gracious", 2.6), ("great", 3.1),
    ("happy", 2.7), ("heal", 1.4), ("healed", 1.4), ("help", 1.7), ("holy", 1.4),
    ("honest", 2.3), ("honour", 2.3), ("honor", 2.2), ("hope", 1.9), ("humble", 1.2),
    ("joy", 2.8), ("joyful", 2.9), ("justice", 2.4), ("kind", 2.4), ("kindness", 2.6),
    ("laugh", 2.6), ("life", 1.1), ("like", 1.5), ("love", 3.2), ("loved", 2.9),
    ("lovely", 2.8), ("loveth", 2.8), ("loving", 2.9), ("merciful", 2.2), ("mercy", 1.5),
    ("mighty", 1.7), ("peace", 2.5), ("peaceful", 2.2), ("perfect", 2.7), ("pleasant", 2.3),
    ("please", 1.3), ("pleased", 1.9), ("praise", 2.6), ("praised", 2.2), ("precious", 2.7),
    ("prosper", 2.1), ("prosperity", 2.2), ("pure", 1.6), ("rejoice", 2.6), ("rejoiced", 2.5),
    ("rest", 1.2), ("rich", 2.6), ("righteous", 2.1), ("righteousness", 2.1), ("safe", 1.9),
    ("salvation", 2.4), ("save", 2.2), ("saved", 1.8), ("sing", 1.5), ("strength", 2.2),
    ("strong", 2.3), ("success", 2.7), ("sweet", 2.0), ("thank", 1.5), ("thanks", 1.9),
    ("thanksgiving", 2.3), ("treasure", 1.2), ("triumph", 2.9), ("true", 2.0), ("trust", 2.3),
    ("truth", 1.3), ("victory", 2.8), ("virtue", 1.9), ("wealth", 2.2), ("win", 2.8),
    ("wisdom", 2.4), ("wise", 2.1), ("wonderful", 2.7), ("worship", 1.2), ("worthy", 1.9),
    // negative
    ("abomination", -2.9), ("afflicted", -2.2), ("affliction", -2.4), ("afraid", -2.2),
    ("anger", -2.7), ("angry", -2.3), ("anguish", -2.9), ("ashamed", -2.1), ("bad", -2.5),
    ("battle", -1.6), ("betray", -3.2), ("bitter", -1.8), ("blood", -1.1), ("burn", -1.2),
    ("captive", -1.5), ("condemn", -2.3), ("condemned", -2.3), ("corrupt", -3.0),
    ("crime", -2.5), ("cruel", -2.8), ("cry", -2.1), ("cursed", -2.5), ("curse", -2.5),
    ("danger", -2.4), ("dead", -3.3), ("death", -2.9), ("deceit", -2.0), ("despair", -3.0),
    ("destroy", -2.5), ("destroyed", -3.0), ("destruction", -2.7), ("die", -2.9),
    ("died", -2.6), ("disaster", -3.1), ("disgrace", -2.2), ("distress", -2.4),
    ("enemies", -2.2), ("enemy", -2.5), ("evil", -3.4), ("fail", -2.5), ("false", -1.8),
    ("famine", -2.6), ("fear", -2.2), ("feared", -2.2), ("foolish", -1.8), ("grief", -2.2),
    ("grieve", -1.8), ("guilty", -1.8), ("hate", -2.7), ("hated", -3.2), ("hatred", -3.2),
    ("hell", -3.6), ("hurt", -2.4), ("iniquity", -2.3), ("kill", -3.7), ("killed", -3.5),
    ("lament", -2.0), ("lie", -1.6), ("lies", -1.8), ("lost", -1.3), ("mourn", -1.9),
    ("mourning", -1.9), ("murder", -3.7), ("pain", -2.3), ("perish", -2.4),
    ("pestilence", -2.3), ("plague", -2.6), ("poor", -2.1), ("punish", -2.4),
    ("punishment", -2.2), ("rage", -2.6), ("sad", -2.1), ("shame", -2.1), ("sick", -2.3),
    ("sin", -2.1), ("sinful", -2.6), ("sins", -2.1), ("slain", -2.9), ("slay", -2.8),
    ("slew", -2.6), ("sorrow", -2.4), ("suffer", -2.5), ("terrible", -2.1), ("terror", -3.0),
    ("transgression", -2.0), ("trouble", -1.7), ("ugly", -2.3), ("war", -2.9),
    ("weep", -2.4), ("wept", -2.4), ("wicked", -2.4), ("wickedness", -2.6), ("woe", -1.9),
    ("wrath", -2.9), ("wrong", -2.1),
];

lazy_static! {
    static ref NEGATION_SET: HashSet<&'static str> = NEGATIONS.iter().copied().collect();
    static ref BOOSTER_MAP: HashMap<&'static str, f64> = BOOSTERS_UP
        .iter()
        .map(|w| (*w, BOOSTER_INCREMENT))
        .chain(BOOSTERS_DOWN.iter().map(|w| (*w, BOOSTER_DECREMENT)))
        .collect();
}

// =============================================================================
// VALENCE LEXICON
// =============================================================================

/// word → valence
#[derive(Debug, Clone, Default)]
pub struct ValenceLexicon {
    words: HashMap<String, f64>,
}

impl ValenceLexicon {
    /// Small built-in lexicon
    pub fn builtin() -> Self {
        Self {
            words: BUILTIN_VALENCE
                .iter()
                .map(|(w, v)| (w.to_string(), *v))
                .collect(),
        }
    }

    /// Load a `word<TAB>mean[<TAB>...]` valence file (VADER lexicon format).
    /// Lines without a finite numeric second field are skipped.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut words = HashMap::new();
        for line in reader.lines() {
            let line = line?;
            let mut fields = line.trim_end().split('\t');
            let (Some(word), Some(mean)) = (fields.next(), fields.next()) else {
                continue;
            };
            if word.is_empty() {
                continue;
            }
            match mean.trim().parse::<f64>() {
                Ok(valence) if valence.is_finite() => {
                    words.insert(word.to_lowercase(), valence);
                }
                _ => {}
            }
        }
        Ok(Self { words })
    }

    pub fn get(&self, word: &str) -> Option<f64> {
        self.words.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

// =============================================================================
// VADER SCORER
// =============================================================================

/// Rule-based polarity scorer in the VADER style
#[derive(Debug, Clone)]
pub struct VaderScorer {
    lexicon: ValenceLexicon,
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for VaderScorer {
    fn polarity(&self, text: &str) -> PolarityScores {
        self.score(text)
    }
}

impl VaderScorer {
    /// Scorer over the built-in lexicon
    pub fn new() -> Self {
        Self::with_lexicon(ValenceLexicon::builtin())
    }

    pub fn with_lexicon(lexicon: ValenceLexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &ValenceLexicon {
        &self.lexicon
    }

    /// Score text
    pub fn score(&self, text: &str) -> PolarityScores {
        let tokens = split_tokens(text);
        if tokens.is_empty() {
            return PolarityScores::default();
        }

        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let caps_differ = caps_differential(&tokens);

        let mut sentiments = Vec::with_capacity(tokens.len());
        for i in 0..tokens.len() {
            let lower = lowered[i].as_str();
            if BOOSTER_MAP.contains_key(lower) {
                sentiments.push(0.0);
                continue;
            }
            if lower == "kind" && lowered.get(i + 1).map(String::as_str) == Some("of") {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.valence_at(i, &tokens, &lowered, caps_differ));
        }

        apply_but_rule(&lowered, &mut sentiments);
        score_valence(&sentiments, text)
    }

    /// Quick score - just the compound value
    pub fn quick_compound(&self, text: &str) -> f64 {
        self.score(text).compound
    }

    /// Valence of token `i` after caps, booster and negation adjustments
    fn valence_at(&self, i: usize, tokens: &[&str], lowered: &[String], caps_differ: bool) -> f64 {
        let Some(mut valence) = self.lexicon.get(&lowered[i]) else {
            return 0.0;
        };

        if caps_differ && is_all_caps(tokens[i]) {
            valence += CAPS_INCREMENT.copysign(valence);
        }

        for distance in 1..=3 {
            if i < distance {
                break;
            }
            let prev = lowered[i - distance].as_str();
            if self.lexicon.contains(prev) {
                continue;
            }
            let mut scalar = booster_scalar(tokens[i - distance], prev, valence, caps_differ);
            if distance == 2 {
                scalar *= 0.95;
            } else if distance == 3 {
                scalar *= 0.9;
            }
            valence += scalar;
            valence = negation_check(valence, lowered, i, distance);
        }

        least_check(valence, lowered, i)
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Whitespace tokens with surrounding punctuation removed. Tokens that would
/// shrink to two characters or fewer keep their punctuation; single
/// characters are dropped.
fn split_tokens(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|token| {
            let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 2 {
                token
            } else {
                stripped
            }
        })
        .filter(|token| token.chars().count() > 1)
        .collect()
}

fn is_all_caps(token: &str) -> bool {
    let mut has_upper = false;
    for c in token.chars().filter(|c| c.is_alphabetic()) {
        if c.is_lowercase() {
            return false;
        }
        has_upper = true;
    }
    has_upper
}

/// True when some, but not all, tokens are ALL CAPS
fn caps_differential(tokens: &[&str]) -> bool {
    let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
    caps > 0 && caps < tokens.len()
}

fn is_negation(word: &str) -> bool {
    NEGATION_SET.contains(word) || word.contains("n't")
}

fn booster_scalar(token: &str, lower: &str, valence: f64, caps_differ: bool) -> f64 {
    let Some(base) = BOOSTER_MAP.get(lower).copied() else {
        return 0.0;
    };
    let mut scalar = if valence < 0.0 { -base } else { base };
    if caps_differ && is_all_caps(token) {
        scalar += if valence > 0.0 { CAPS_INCREMENT } else { -CAPS_INCREMENT };
    }
    scalar
}

/// Negation (or "never so" emphasis) `distance` words before token `i`
fn negation_check(valence: f64, lowered: &[String], i: usize, distance: usize) -> f64 {
    let word = |back: usize| back_word(lowered, i, back);
    match distance {
        1 => {
            if is_negation(word(1)) {
                return valence * NEGATION_SCALAR;
            }
        }
        2 => {
            if word(2) == "never" && matches!(word(1), "so" | "this") {
                return valence * 1.25;
            }
            if word(2) == "without" && word(1) == "doubt" {
                return valence;
            }
            if is_negation(word(2)) {
                return valence * NEGATION_SCALAR;
            }
        }
        _ => {
            if word(3) == "never" && (matches!(word(2), "so" | "this") || matches!(word(1), "so" | "this")) {
                return valence * 1.25;
            }
            if word(3) == "without" && (word(2) == "doubt" || word(1) == "doubt") {
                return valence;
            }
            if is_negation(word(3)) {
                return valence * NEGATION_SCALAR;
            }
        }
    }
    valence
}

fn back_word(lowered: &[String], i: usize, back: usize) -> &str {
    lowered[i - back].as_str()
}

/// "least good" flips valence; "at least" and "very least" do not
fn least_check(valence: f64, lowered: &[String], i: usize) -> f64 {
    if i >= 1 && lowered[i - 1] == "least" {
        let guarded = i >= 2 && matches!(lowered[i - 2].as_str(), "at" | "very");
        if !guarded {
            return valence * NEGATION_SCALAR;
        }
    }
    valence
}

/// Halve sentiment before the first "but", amplify it after
fn apply_but_rule(lowered: &[String], sentiments: &mut [f64]) {
    let Some(but_index) = lowered.iter().position(|w| w == "but") else {
        return;
    };
    for (index, sentiment) in sentiments.iter_mut().enumerate() {
        if index < but_index {
            *sentiment *= BUT_BEFORE_WEIGHT;
        } else if index > but_index {
            *sentiment *= BUT_AFTER_WEIGHT;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64;
    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_EMPHASIS,
        _ => QUESTION_EMPHASIS_MAX,
    };
    exclamations * EXCLAMATION_EMPHASIS + question_emphasis
}

/// Map an unbounded valence sum into [-1, 1]
pub fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZE_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    let emphasis = punctuation_emphasis(text);

    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = normalize(sum);

    // +1 / -1 compensates for neutral words counting as 1
    let mut positive_sum = 0.0;
    let mut negative_sum = 0.0;
    let mut neutral_count = 0.0;
    for s in sentiments {
        if *s > 0.0 {
            positive_sum += s + 1.0;
        } else if *s < 0.0 {
            negative_sum += s - 1.0;
        } else {
            neutral_count += 1.0;
        }
    }
    if positive_sum > negative_sum.abs() {
        positive_sum += emphasis;
    } else if positive_sum < negative_sum.abs() {
        negative_sum -= emphasis;
    }

    let total = positive_sum + negative_sum.abs() + neutral_count;
    PolarityScores {
        positive: round_to((positive_sum / total).abs(), 3),
        negative: round_to((negative_sum / total).abs(), 3),
        neutral: round_to((neutral_count / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}

// =============================================================================
// TESTS
// =============================================================================
