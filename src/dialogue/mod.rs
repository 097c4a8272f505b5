pub mod interactions;
pub mod speakers;

pub use interactions::*;
pub use speakers::*;

use crate::models::{DialogueEntry, SpeakerCensus};

/// Extract ordered (speaker cue, dialogue line) pairs.
///
/// A cue-shaped line followed by a non-empty line yields one entry;
/// blank lines between the cue and the dialogue are skipped, and the
/// dialogue line is consumed before scanning resumes. Speakers are not
/// filtered here; run the result through [`accepted_dialogues`] with a
/// census to keep only true characters.
pub fn extract_dialogues(text: &str) -> Vec<DialogueEntry> {
    let lines: Vec<&str> = text.lines().collect();
    let mut entries = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if is_name_line(lines[i]) {
            let mut j = i + 1;
            while j < lines.len() && lines[j].trim().is_empty() {
                j += 1;
            }
            if j < lines.len() {
                entries.push(DialogueEntry::new(lines[i].trim(), lines[j].trim()));
                i = j + 1;
                continue;
            }
        }
        i += 1;
    }

    entries
}

/// Keep only entries whose speaker survived the census
pub fn accepted_dialogues(entries: &[DialogueEntry], census: &SpeakerCensus) -> Vec<DialogueEntry> {
    entries
        .iter()
        .filter(|entry| census.is_accepted(&entry.speaker))
        .cloned()
        .collect()
}
