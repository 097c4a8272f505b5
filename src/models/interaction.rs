use std::collections::HashMap;

use super::DialogueEntry;

/// Symmetric count of consecutive-distinct-speaker adjacencies.
///
/// `get(a, b)` counts how many times `a` and `b` spoke in immediate
/// succession (in either order) within the scoped text. Self-pairs are
/// never incremented.
#[derive(Debug, Clone, Default)]
pub struct InteractionMatrix {
    speakers: Vec<String>,
    index: HashMap<String, usize>,
    counts: Vec<u32>,
}

impl InteractionMatrix {
    /// Build a matrix over `speakers` by folding the ordered dialogue
    /// sequence: entries whose speaker is outside the set are skipped,
    /// and each adjacent pair of remaining entries with different
    /// speakers increments the undirected edge by one.
    pub fn from_entries(speakers: &[String], entries: &[DialogueEntry]) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(speakers.len());
        let mut index: HashMap<String, usize> = HashMap::with_capacity(speakers.len());
        for name in speakers {
            if !index.contains_key(name) {
                index.insert(name.clone(), unique.len());
                unique.push(name.clone());
            }
        }

        let n = unique.len();
        let mut counts = vec![0u32; n * n];
        let mut prev: Option<usize> = None;
        for entry in entries {
            let Some(&cur) = index.get(&entry.speaker) else {
                continue;
            };
            if let Some(p) = prev {
                if p != cur {
                    counts[p * n + cur] += 1;
                    counts[cur * n + p] += 1;
                }
            }
            prev = Some(cur);
        }

        Self {
            speakers: unique,
            index,
            counts,
        }
    }

    /// Interaction count between two speakers; zero for unknown names
    pub fn get(&self, a: &str, b: &str) -> u32 {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&i), Some(&j)) => self.counts[i * self.speakers.len() + j],
            _ => 0,
        }
    }

    /// Speakers indexing the matrix, in insertion order
    pub fn speakers(&self) -> &[String] {
        &self.speakers
    }

    /// Sum of all matrix entries. Each adjacency contributes twice, once
    /// per direction.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Undirected pairs with nonzero weight, each emitted once
    pub fn pairs(&self) -> Vec<(&str, &str, u32)> {
        let n = self.speakers.len();
        let mut out = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                let weight = self.counts[i * n + j];
                if weight > 0 {
                    out.push((self.speakers[i].as_str(), self.speakers[j].as_str(), weight));
                }
            }
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.speakers.is_empty()
    }
}
