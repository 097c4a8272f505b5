pub mod patterns;
pub mod spans;

pub use spans::extract_scenes;

use tracing::debug;

use crate::models::{MarkerKind, SceneBoundary, SegmentationResult};

/// Configuration for scene segmentation
#[derive(Debug, Clone)]
pub struct SegmenterConfig {
    /// If fewer lines than this are labeled by a tier, the next broader
    /// tier is applied
    pub match_floor: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self { match_floor: 150 }
    }
}

/// Split a screenplay into an ordered sequence of scenes.
///
/// Classification escalates through three tiers, each applied only when
/// the previous tiers labeled fewer than `match_floor` lines:
/// 1. strict markers: EXT/INT headings, `[Scene: ...,]` tags, FADE OUT,
///    CUT TO
/// 2. generic uppercase headings with at least 3 words
/// 3. broader transitions: DISSOLVE, SMASH CUT, plus the tier-1
///    transition set on still-unlabeled lines
///
/// Zero matches yield an empty result, not an error.
pub fn segment(text: &str, config: &SegmenterConfig) -> SegmentationResult {
    let boundaries = find_boundaries(text, config);
    let scenes = spans::extract_scenes(text, &boundaries);
    SegmentationResult { boundaries, scenes }
}

fn find_boundaries(text: &str, config: &SegmenterConfig) -> Vec<SceneBoundary> {
    let lines: Vec<&str> = text.lines().collect();
    let mut labels: Vec<Option<MarkerKind>> = lines
        .iter()
        .map(|line| patterns::classify_strict(line))
        .collect();

    if count_labeled(&labels) < config.match_floor {
        debug!("strict tier below match floor, adding uppercase headings");
        for (label, line) in labels.iter_mut().zip(&lines) {
            if label.is_none() && patterns::is_heading(line) {
                *label = Some(MarkerKind::Heading);
            }
        }
    }

    if count_labeled(&labels) < config.match_floor {
        debug!("heading tier below match floor, adding transition fallbacks");
        for (label, line) in labels.iter_mut().zip(&lines) {
            if label.is_none() {
                *label = patterns::classify_transition(line);
            }
        }
    }

    let mut boundaries = Vec::new();
    for (line, label) in lines.iter().zip(&labels) {
        if let Some(kind) = label {
            boundaries.push(SceneBoundary {
                line: line.to_string(),
                number: boundaries.len() + 1,
                kind: *kind,
            });
        }
    }
    boundaries
}

fn count_labeled(labels: &[Option<MarkerKind>]) -> usize {
    labels.iter().flatten().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_result() {
        let result = segment("", &SegmenterConfig::default());
        assert!(result.boundaries.is_empty());
        assert!(result.scenes.is_empty());
    }

    #[test]
    fn test_no_markers_yields_empty_result() {
        let text = "just some prose\nwith no headings\nat all";
        let result = segment(text, &SegmenterConfig::default());
        assert!(result.scenes.is_empty());
    }

    #[test]
    fn test_boundary_numbers_increase_by_one_from_one() {
        let text = "EXT. DOCK - DAY\nhello\nINT. BAR - NIGHT\nworld\nEXT. DOCK - DAY\nagain";
        let result = segment(text, &SegmenterConfig::default());

        let numbers: Vec<usize> = result.boundaries.iter().map(|b| b.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_strict_tier_alone_when_floor_met() {
        // With the floor at 1, the single EXT match suffices and the
        // uppercase heading is never labeled
        let text = "EXT. DOCK - DAY\nTHE LONG GOODBYE\nprose";
        let config = SegmenterConfig { match_floor: 1 };
        let result = segment(text, &config);

        assert_eq!(result.boundaries.len(), 1);
        assert_eq!(result.boundaries[0].kind, MarkerKind::Ext);
    }

    #[test]
    fn test_uppercase_tier_applies_below_floor() {
        let text = "EXT. DOCK - DAY\nTHE LONG GOODBYE\nprose";
        let result = segment(text, &SegmenterConfig::default());

        assert_eq!(result.boundaries.len(), 2);
        assert_eq!(result.boundaries[1].kind, MarkerKind::Heading);
        assert_eq!(result.boundaries[1].line, "THE LONG GOODBYE");
    }

    #[test]
    fn test_transition_fallback_is_last_tier() {
        let text = "DISSOLVE TO:\nprose here\nDISSOLVE TO:";
        let result = segment(text, &SegmenterConfig::default());

        // Tier 1 and 2 label nothing ("DISSOLVE TO:" is only 2 words),
        // so the fallback tier picks the dissolves up
        assert_eq!(result.boundaries.len(), 2);
        assert!(result
            .boundaries
            .iter()
            .all(|b| b.kind == MarkerKind::Dissolve));
    }

    #[test]
    fn test_fade_in_and_cut_to_document() {
        // CUT TO is a strict tier-1 marker; FADE IN never matches any
        // tier (not a tier-1 marker, only 2 words for tier 2, and not in
        // the fallback transition set)
        let mut doc = String::new();
        for _ in 0..10 {
            doc.push_str("FADE IN:\n");
            doc.push_str("CUT TO:\n");
        }
        let result = segment(&doc, &SegmenterConfig::default());

        assert_eq!(result.boundaries.len(), 10);
        assert!(result.boundaries.iter().all(|b| b.kind == MarkerKind::CutTo));
    }

    #[test]
    fn test_scene_count_matches_boundary_count() {
        let text = "EXT. A - DAY\none\nINT. B - DAY\ntwo";
        let result = segment(text, &SegmenterConfig::default());
        assert_eq!(result.scene_count(), result.boundaries.len());
    }
}
