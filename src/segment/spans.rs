use tracing::warn;

use crate::models::{Scene, SceneBoundary};

/// Slice the document into one span per boundary.
///
/// Each span starts at the first occurrence of the boundary's matched
/// line, searching forward from the previous boundary's end, and runs to
/// the next boundary's first occurrence (or document end). When a
/// heading's literal text recurs verbatim, the first-occurrence search
/// can land early and make spans misalign; a detected overlap is logged,
/// not silently accepted.
pub fn extract_scenes(text: &str, boundaries: &[SceneBoundary]) -> Vec<Scene> {
    let mut scenes = Vec::with_capacity(boundaries.len());
    let mut search_from = 0usize;
    let mut prev_end = 0usize;

    for (i, boundary) in boundaries.iter().enumerate() {
        let start = match find_from(text, &boundary.line, search_from) {
            Some(pos) => pos,
            None => {
                warn!(
                    scene = boundary.number,
                    "matched line not found at or after cursor; span may be misaligned"
                );
                search_from
            }
        };
        if i > 0 && start < prev_end {
            warn!(
                scene = boundary.number,
                previous = boundaries[i - 1].number,
                "scene span overlaps the previous span"
            );
        }

        let body_from = start + boundary.line.len();
        let end = match boundaries.get(i + 1) {
            Some(next) => find_from(text, &next.line, body_from).unwrap_or(text.len()),
            None => text.len(),
        };
        let end = end.max(body_from.min(text.len()));

        scenes.push(Scene {
            number: boundary.number,
            title: format!("{:03} {}", boundary.number, boundary.line),
            text: normalize_span(&text[start.min(text.len())..end]),
        });

        search_from = body_from.min(text.len());
        prev_end = end;
    }

    scenes
}

/// First occurrence of `needle` at or after `from`, as a byte offset into
/// the full text
fn find_from(text: &str, needle: &str, from: usize) -> Option<usize> {
    if from > text.len() || needle.is_empty() {
        return None;
    }
    text[from..].find(needle).map(|pos| pos + from)
}

/// Collapse whitespace runs within each line to single spaces, keeping
/// the line structure dialogue extraction relies on
fn normalize_span(span: &str) -> String {
    span.trim()
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MarkerKind;

    fn boundary(line: &str, number: usize) -> SceneBoundary {
        SceneBoundary {
            line: line.to_string(),
            number,
            kind: MarkerKind::Ext,
        }
    }

    #[test]
    fn test_spans_are_contiguous_and_ordered() {
        let text = "EXT. DOCK - DAY\nJohn waits.\nEXT. BAR - NIGHT\nMary drinks.\nEXT. DOCK - DAY\nJohn waits again.";
        let boundaries = vec![
            boundary("EXT. DOCK - DAY", 1),
            boundary("EXT. BAR - NIGHT", 2),
            boundary("EXT. DOCK - DAY", 3),
        ];

        let scenes = extract_scenes(text, &boundaries);

        assert_eq!(scenes.len(), 3);
        // Each span opens with its own matched line, in document order
        assert_eq!(scenes[0].text.lines().next(), Some("EXT. DOCK - DAY"));
        assert_eq!(scenes[1].text.lines().next(), Some("EXT. BAR - NIGHT"));
        assert_eq!(scenes[2].text.lines().next(), Some("EXT. DOCK - DAY"));
        assert!(scenes[0].text.contains("John waits."));
        assert!(scenes[1].text.contains("Mary drinks."));
        assert!(scenes[2].text.contains("John waits again."));
    }

    #[test]
    fn test_last_scene_runs_to_document_end() {
        let text = "EXT. DOCK - DAY\nline one\nline two";
        let scenes = extract_scenes(text, &[boundary("EXT. DOCK - DAY", 1)]);

        assert_eq!(scenes.len(), 1);
        assert!(scenes[0].text.ends_with("line two"));
    }

    #[test]
    fn test_title_embeds_zero_padded_sequence() {
        let text = "EXT. DOCK - DAY\nhello";
        let scenes = extract_scenes(text, &[boundary("EXT. DOCK - DAY", 1)]);

        assert_eq!(scenes[0].title, "001 EXT. DOCK - DAY");
    }

    #[test]
    fn test_whitespace_runs_collapse_within_lines() {
        let text = "EXT. DOCK   -   DAY\n  JOHN\n     Hello    there.";
        let scenes = extract_scenes(text, &[boundary("EXT. DOCK   -   DAY", 1)]);

        let lines: Vec<&str> = scenes[0].text.lines().collect();
        assert_eq!(lines, vec!["EXT. DOCK - DAY", "JOHN", "Hello there."]);
    }

    #[test]
    fn test_no_boundaries_no_scenes() {
        assert!(extract_scenes("some text", &[]).is_empty());
        assert!(extract_scenes("", &[]).is_empty());
    }
}
