use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// One speaker cue and the dialogue line that follows it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueEntry {
    /// Cleaned speaker name from the cue line
    pub speaker: String,
    /// The dialogue line, trimmed
    pub line: String,
}

impl DialogueEntry {
    pub fn new(speaker: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            line: line.into(),
        }
    }
}

/// Document-wide census of cue lines: occurrence counts after denylist
/// filtering, and the names accepted as true characters
#[derive(Debug, Clone, Default)]
pub struct SpeakerCensus {
    /// Occurrences per cleaned name, denylisted terms already excluded
    pub counts: HashMap<String, usize>,
    /// Names whose count exceeded the acceptance threshold
    pub accepted: HashSet<String>,
}

impl SpeakerCensus {
    pub fn is_accepted(&self, name: &str) -> bool {
        self.accepted.contains(name)
    }

    /// Accepted names in a stable order
    pub fn accepted_sorted(&self) -> Vec<String> {
        let mut names: Vec<String> = self.accepted.iter().cloned().collect();
        names.sort();
        names
    }
}
