use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::models::Scene;

use super::terms::{is_stopword, light_stem};

static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Four polarity scores for one text, VADER convention: negative,
/// neutral, and positive proportions plus the normalized compound score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentScores {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
    pub compound: f64,
}

/// Scoring collaborator seam: consumes cleaned text, returns four
/// numeric scores
pub trait SentimentScorer {
    fn score(&self, text: &str) -> SentimentScores;
}

/// Scorer backed by the VADER rule-based analyzer
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderScorer;

impl SentimentScorer for VaderScorer {
    fn score(&self, text: &str) -> SentimentScores {
        let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();
        let scores = analyzer.polarity_scores(text);
        SentimentScores {
            negative: scores.get("neg").copied().unwrap_or(0.0),
            neutral: scores.get("neu").copied().unwrap_or(0.0),
            positive: scores.get("pos").copied().unwrap_or(0.0),
            compound: scores.get("compound").copied().unwrap_or(0.0),
        }
    }
}

/// Sentiment record for one scene
#[derive(Debug, Clone, Serialize)]
pub struct SceneSentiment {
    /// Scene sequence number
    pub scene: usize,
    #[serde(flatten)]
    pub scores: SentimentScores,
}

/// Clean scene text before scoring: drop heading lines, lowercase,
/// strip punctuation, drop stopwords, stem what remains
pub fn preprocess(text: &str) -> String {
    let kept: Vec<&str> = text
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !(trimmed.starts_with("EXT") || trimmed.starts_with("INT"))
        })
        .collect();

    let lowered = kept.join("\n").to_lowercase();
    let cleaned = NON_WORD_RE.replace_all(&lowered, "");

    cleaned
        .split_whitespace()
        .filter(|token| !is_stopword(token))
        .map(light_stem)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Score every scene in order, one record per scene
pub fn score_scenes<S: SentimentScorer>(scenes: &[Scene], scorer: &S) -> Vec<SceneSentiment> {
    scenes
        .iter()
        .map(|scene| SceneSentiment {
            scene: scene.number,
            scores: scorer.score(&preprocess(&scene.text)),
        })
        .collect()
}
