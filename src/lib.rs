pub mod analysis;
pub mod dialogue;
pub mod io;
pub mod models;
pub mod segment;

pub use analysis::{
    preprocess, salient_terms, score_scenes, SceneSentiment, SentimentScorer, SentimentScores,
    TermConfig, VaderScorer,
};
pub use dialogue::{
    accepted_dialogues, extract_dialogues, network_matrix, scene_interactions, speaker_census,
    speaker_line_counts, top_speakers, InteractionConfig, SceneInteraction, SpeakerConfig,
};
pub use io::{
    decode_bytes, read_screenplay, write_all_viz, AnalysisReport, ExportError, InputError,
    Screenplay,
};
pub use models::{
    DialogueEntry, InteractionMatrix, MarkerKind, Scene, SceneBoundary, SegmentationResult,
    SpeakerCensus,
};
pub use segment::{segment, SegmenterConfig};
