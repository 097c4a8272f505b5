use serde::{Deserialize, Serialize};

/// Which pattern rule labeled a line as a scene or transition marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerKind {
    /// Exterior scene heading (EXT. ...)
    Ext,
    /// Interior scene heading (INT. ...)
    Int,
    /// Bracketed `[Scene: ...,]` marker
    SceneTag,
    /// FADE OUT transition
    FadeOut,
    /// CUT TO transition
    CutTo,
    /// Generic all-uppercase heading (broadened tier)
    Heading,
    /// DISSOLVE transition (fallback tier)
    Dissolve,
    /// SMASH CUT transition (fallback tier)
    SmashCut,
}

/// A line recognized as marking the start of a new scene or transition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneBoundary {
    /// The matched line, exactly as it appears in the source
    pub line: String,
    /// 1-based sequence number in document order, no gaps
    pub number: usize,
    /// Which rule labeled the line
    pub kind: MarkerKind,
}

/// A scene: synthetic title plus its normalized text span
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Sequence number of the opening boundary
    pub number: usize,
    /// Synthetic label, `"{number:03} {matched_line}"`
    pub title: String,
    /// Span text from this boundary to the next, whitespace runs inside
    /// each line collapsed to single spaces
    pub text: String,
}

impl Scene {
    /// Chart-facing label for this scene
    pub fn label(&self) -> String {
        format!("Scene {}", self.number)
    }
}

/// Output of the scene segmenter
#[derive(Debug, Clone, Default)]
pub struct SegmentationResult {
    /// All recognized boundaries in document order
    pub boundaries: Vec<SceneBoundary>,
    /// One scene per boundary, spans contiguous in document order
    pub scenes: Vec<Scene>,
}

impl SegmentationResult {
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_label() {
        let scene = Scene {
            number: 7,
            title: "007 EXT. HARBOR - NIGHT".to_string(),
            text: String::new(),
        };
        assert_eq!(scene.label(), "Scene 7");
    }
}
