use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dialogue::is_name_line;
use crate::models::SpeakerCensus;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z][A-Za-z\-]+").unwrap());

/// Directorial expressions stripped from the text before tokenizing.
/// Superset of the cue denylist: PAUSE and SILENCE show up as stage
/// directions but never as cues worth counting.
const DIRECTORIAL_TERMS: &[&str] = &[
    "BLACK",
    "CUT TO",
    "FADE OUT",
    "FADE IN",
    "DISSOLVE TO",
    "CUT IN",
    "CLOSE",
    "PAUSE",
    "SILENCE",
    "MORE",
    "CONT'D",
    "CONTINUED",
    "FADE TO BLACK",
    "TITLE",
    "REVEAL",
    "OMITTED",
    "P.O.V.",
    "POV",
    "SUPER",
    "BACK TO SCENE",
    "CONT",
    "EXT",
    "INT",
];

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let words = [
        // core english
        "the", "a", "an", "and", "or", "but", "if", "then", "of", "to", "in", "on", "for",
        "with", "as", "by", "is", "are", "was", "were", "be", "been", "being", "that", "this",
        "it", "its", "at", "from", "into", "over", "under", "about", "after", "before",
        "between", "during", "without", "within", "than", "not", "no", "yes", "so", "such",
        "which", "there", "will", "can", "would", "could", "should", "has", "have", "had",
        "does", "do", "did", "done",
        // conversational fillers common in dialogue
        "we", "you", "your", "he", "she", "they", "what", "all", "one", "out", "up", "his",
        "her", "their", "my", "me", "when", "just", "more", "how", "like", "who", "them",
        "now", "him", "said", "get", "got", "something", "anything", "everything",
        "somebody", "anybody", "us", "dont", "im", "youre", "thats", "well", "oh", "hey",
        "yeah", "okay", "gonna", "know", "think", "right", "going", "come", "go", "here",
        "look", "see", "want", "let", "mean", "really", "back", "way", "good", "man",
    ];
    words.into_iter().collect()
});

pub(crate) fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

/// Crude suffix stemming in place of a full lemmatizer
pub(crate) fn light_stem(word: &str) -> String {
    if word.len() > 4 && word.ends_with('s') {
        return word[..word.len() - 1].to_string();
    }
    if word.ends_with("ing") && word.len() > 5 {
        return word[..word.len() - 3].to_string();
    }
    if word.ends_with("ed") && word.len() > 4 {
        return word[..word.len() - 2].to_string();
    }
    word.to_string()
}

/// Configuration for word-cloud term selection
#[derive(Debug, Clone)]
pub struct TermConfig {
    /// Number of terms kept, by descending frequency
    pub max_terms: usize,
    /// Tokens shorter than this are dropped
    pub min_len: usize,
}

impl Default for TermConfig {
    fn default() -> Self {
        Self {
            max_terms: 50,
            min_len: 3,
        }
    }
}

/// Salient terms for the word cloud: directorial expressions and cue
/// lines removed, stopwords and short tokens dropped, accepted character
/// names excluded, top terms by frequency.
///
/// Character-name removal uses the census rather than named-entity
/// recognition; every word of every accepted name is excluded.
pub fn salient_terms(
    text: &str,
    census: &SpeakerCensus,
    config: &TermConfig,
) -> Vec<(String, u32)> {
    let mut stripped = text.to_string();
    for term in DIRECTORIAL_TERMS {
        stripped = stripped.replace(term, "");
    }

    let body: String = stripped
        .lines()
        .filter(|line| !is_name_line(line))
        .collect::<Vec<_>>()
        .join("\n");

    let name_words: HashSet<String> = census
        .accepted
        .iter()
        .flat_map(|name| name.split_whitespace())
        .map(|word| word.to_lowercase())
        .collect();

    let mut bag: HashMap<String, u32> = HashMap::new();
    for token in TOKEN_RE.find_iter(&body) {
        let token = token.as_str().to_lowercase();
        if token.len() < config.min_len || is_stopword(&token) || name_words.contains(&token) {
            continue;
        }
        *bag.entry(token).or_insert(0) += 1;
    }

    let mut terms: Vec<(String, u32)> = bag.into_iter().collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    terms.truncate(config.max_terms);
    terms
}
