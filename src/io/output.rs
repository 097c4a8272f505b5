use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::analysis::SceneSentiment;
use crate::dialogue::SceneInteraction;
use crate::models::InteractionMatrix;

/// Errors from writing visualization artifacts
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to create {path:?}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything the export stage needs, assembled by the caller
#[derive(Debug)]
pub struct AnalysisReport {
    /// Name of the analyzed file
    pub source_file: String,
    /// Total scenes found
    pub scene_count: usize,
    /// Dialogue entries surviving speaker acceptance
    pub dialogue_count: usize,
    /// Accepted speakers document-wide
    pub speaker_count: usize,
    /// Matrix over the top speakers, for the network view
    pub network: InteractionMatrix,
    /// Dialogue-line count per speaker, for node sizing
    pub speaker_lines: HashMap<String, usize>,
    /// Interaction count per scene, in scene order
    pub interactions: Vec<SceneInteraction>,
    /// Sentiment record per scene, in scene order
    pub sentiment: Vec<SceneSentiment>,
    /// Word-cloud terms with weights, descending
    pub terms: Vec<(String, u32)>,
}

#[derive(Debug, Serialize)]
struct VizNode {
    id: String,
    dialogue_lines: usize,
}

#[derive(Debug, Serialize)]
struct VizEdge {
    source: String,
    target: String,
    weight: u32,
}

#[derive(Debug, Serialize)]
struct VizNetwork {
    nodes: Vec<VizNode>,
    edges: Vec<VizEdge>,
}

#[derive(Debug, Serialize)]
struct VizTerm {
    term: String,
    weight: u32,
}

#[derive(Debug, Serialize)]
struct RunSummary<'a> {
    source_file: &'a str,
    generated_at: String,
    scene_count: usize,
    speaker_count: usize,
    dialogue_count: usize,
}

/// Write all renderer-ready JSON artifacts into `out_dir`, one file per
/// view
pub fn write_all_viz(out_dir: &Path, report: &AnalysisReport) -> Result<(), ExportError> {
    std::fs::create_dir_all(out_dir).map_err(|source| ExportError::Create {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let network = VizNetwork {
        nodes: report
            .network
            .speakers()
            .iter()
            .map(|name| VizNode {
                id: name.clone(),
                dialogue_lines: report.speaker_lines.get(name).copied().unwrap_or(0),
            })
            .collect(),
        edges: report
            .network
            .pairs()
            .into_iter()
            .map(|(source, target, weight)| VizEdge {
                source: source.to_string(),
                target: target.to_string(),
                weight,
            })
            .collect(),
    };
    write_json(&out_dir.join("viz.network.json"), &network)?;

    write_json(&out_dir.join("viz.interactions.json"), &report.interactions)?;
    write_json(&out_dir.join("viz.sentiment.json"), &report.sentiment)?;

    let terms: Vec<VizTerm> = report
        .terms
        .iter()
        .map(|(term, weight)| VizTerm {
            term: term.clone(),
            weight: *weight,
        })
        .collect();
    write_json(&out_dir.join("viz.wordcloud.json"), &terms)?;

    let summary = RunSummary {
        source_file: &report.source_file,
        generated_at: chrono::Utc::now().to_rfc3339(),
        scene_count: report.scene_count,
        speaker_count: report.speaker_count,
        dialogue_count: report.dialogue_count,
    };
    write_json(&out_dir.join("summary.json"), &summary)?;

    info!("Wrote visualization artifacts to {:?}", out_dir);
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ExportError> {
    let file = std::fs::File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::to_writer_pretty(file, value).map_err(|source| ExportError::Serialize {
        path: path.to_path_buf(),
        source,
    })
}
