use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{DialogueEntry, SpeakerCensus};

/// Shape of a character cue line: uppercase letters and spaces only,
/// at least two characters after trimming
static NAME_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][A-Z ]+$").unwrap());

/// Directorial and editing terms that look like cue lines but never name
/// a character
pub const NON_CHARACTER_TERMS: &[&str] = &[
    "BLACK",
    "CUT TO",
    "FADE OUT",
    "FADE IN",
    "DISSOLVE TO",
    "CUT IN",
    "CLOSE",
    "BACK TO SCENE",
    "ON",
    "MOMENTS LATER",
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
    "CONT",
    "EXT",
    "INT",
];

/// Configuration for speaker acceptance
#[derive(Debug, Clone)]
pub struct SpeakerConfig {
    /// A name must occur strictly more than this many times to be
    /// accepted as a true character
    pub min_occurrences: usize,
    /// Cue-shaped terms excluded before counting
    pub denylist: Vec<String>,
}

impl Default for SpeakerConfig {
    fn default() -> Self {
        Self {
            min_occurrences: 2,
            denylist: NON_CHARACTER_TERMS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Whether a line has the shape of a character cue
pub fn is_name_line(line: &str) -> bool {
    NAME_LINE_RE.is_match(line.trim())
}

/// Count cue lines document-wide and accept the names that clear the
/// denylist and the occurrence threshold
pub fn speaker_census(text: &str, config: &SpeakerConfig) -> SpeakerCensus {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for line in text.lines() {
        let name = line.trim();
        if !NAME_LINE_RE.is_match(name) {
            continue;
        }
        if config.denylist.iter().any(|term| term == name) {
            continue;
        }
        *counts.entry(name.to_string()).or_insert(0) += 1;
    }

    let accepted = counts
        .iter()
        .filter(|&(_, &count)| count > config.min_occurrences)
        .map(|(name, _)| name.clone())
        .collect();

    SpeakerCensus { counts, accepted }
}

/// Dialogue-line count per speaker
pub fn speaker_line_counts(entries: &[DialogueEntry]) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for entry in entries {
        *counts.entry(entry.speaker.clone()).or_insert(0) += 1;
    }
    counts
}

/// The `limit` speakers with the most dialogue lines, most talkative
/// first; ties break alphabetically for a stable order
pub fn top_speakers(entries: &[DialogueEntry], limit: usize) -> Vec<String> {
    let mut ranked: Vec<(String, usize)> = speaker_line_counts(entries).into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked.into_iter().map(|(name, _)| name).collect()
}
