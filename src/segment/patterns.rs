use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::MarkerKind;

static EXT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bEXT[.:\s\-–,]").unwrap());
// INT carries no word boundary: scene headings like "INT./EXT." and
// numbered variants ("2 INT -") would otherwise be missed
static INT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"INT[.:\s\-–,]").unwrap());
static SCENE_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[Scene:?\s.*?,\]$").unwrap());
static FADE_OUT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bFADE OUT[.:\s\-–,]").unwrap());
static CUT_TO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bCUT TO[.:\s\-–,]").unwrap());
static DISSOLVE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bDISSOLVE[.:\s\-–,]").unwrap());
static SMASH_CUT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bSMASH CUT[.:\s\-–,]").unwrap());
static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z0-9\s:()\-.,]+$").unwrap());

/// Strict first-tier classification, evaluated in fixed priority order;
/// first match wins
pub fn classify_strict(line: &str) -> Option<MarkerKind> {
    if EXT_RE.is_match(line) {
        Some(MarkerKind::Ext)
    } else if INT_RE.is_match(line) {
        Some(MarkerKind::Int)
    } else if SCENE_TAG_RE.is_match(line) {
        Some(MarkerKind::SceneTag)
    } else if FADE_OUT_RE.is_match(line) {
        Some(MarkerKind::FadeOut)
    } else if CUT_TO_RE.is_match(line) {
        Some(MarkerKind::CutTo)
    } else {
        None
    }
}

/// Second-tier generic heading: entirely uppercase (digits, punctuation,
/// whitespace allowed) with at least 3 words
pub fn is_heading(line: &str) -> bool {
    !line.trim().is_empty()
        && HEADING_RE.is_match(line)
        && line.split_whitespace().count() >= 3
}

/// Third-tier transition fallback for lines no earlier tier labeled
pub fn classify_transition(line: &str) -> Option<MarkerKind> {
    if FADE_OUT_RE.is_match(line) {
        Some(MarkerKind::FadeOut)
    } else if CUT_TO_RE.is_match(line) {
        Some(MarkerKind::CutTo)
    } else if DISSOLVE_RE.is_match(line) {
        Some(MarkerKind::Dissolve)
    } else if SMASH_CUT_RE.is_match(line) {
        Some(MarkerKind::SmashCut)
    } else if SCENE_TAG_RE.is_match(line) {
        Some(MarkerKind::SceneTag)
    } else {
        None
    }
}
