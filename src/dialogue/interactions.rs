use serde::Serialize;

use crate::models::{DialogueEntry, InteractionMatrix, Scene, SpeakerCensus};

use super::{extract_dialogues, top_speakers};

/// Configuration for the interaction views
#[derive(Debug, Clone)]
pub struct InteractionConfig {
    /// Number of speakers kept in the network view, ranked by dialogue
    /// line count
    pub top_speakers: usize,
    /// Per-scene interaction sums are integer-divided by this for chart
    /// scaling
    pub scale_divisor: u64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            top_speakers: 20,
            scale_divisor: 10,
        }
    }
}

/// One point of the interaction-over-time series
#[derive(Debug, Clone, Serialize)]
pub struct SceneInteraction {
    /// Chart label, `"Scene {n}"`
    pub scene: String,
    /// Scaled sum of the scene's interaction matrix
    pub count: u64,
}

/// Matrix for the network view: dialogue entries restricted to accepted
/// speakers, then to the most talkative `top_speakers` of those
pub fn network_matrix(
    entries: &[DialogueEntry],
    census: &SpeakerCensus,
    config: &InteractionConfig,
) -> InteractionMatrix {
    let accepted: Vec<DialogueEntry> = entries
        .iter()
        .filter(|entry| census.is_accepted(&entry.speaker))
        .cloned()
        .collect();
    let top = top_speakers(&accepted, config.top_speakers);
    InteractionMatrix::from_entries(&top, &accepted)
}

/// One interaction count per scene, in scene order.
///
/// Each scene gets its own matrix over all accepted speakers, folded
/// from that scene's dialogue alone, so counts never leak across scene
/// boundaries. The scalar is the full matrix sum (each adjacency counted
/// twice) integer-divided by the scale divisor.
pub fn scene_interactions(
    scenes: &[Scene],
    census: &SpeakerCensus,
    config: &InteractionConfig,
) -> Vec<SceneInteraction> {
    let speakers = census.accepted_sorted();
    scenes
        .iter()
        .map(|scene| {
            let entries = extract_dialogues(&scene.text);
            let matrix = InteractionMatrix::from_entries(&speakers, &entries);
            SceneInteraction {
                scene: scene.label(),
                count: matrix.total() / config.scale_divisor,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::{speaker_census, SpeakerConfig};

    fn scene(number: usize, text: &str) -> Scene {
        Scene {
            number,
            title: format!("{:03} heading", number),
            text: text.to_string(),
        }
    }

    fn lenient() -> SpeakerConfig {
        SpeakerConfig {
            min_occurrences: 0,
            ..Default::default()
        }
    }

    #[test]
    fn test_network_matrix_keeps_only_top_speakers() {
        let entries = vec![
            DialogueEntry::new("JOHN", "a"),
            DialogueEntry::new("MARY", "b"),
            DialogueEntry::new("JOHN", "c"),
            DialogueEntry::new("MARY", "d"),
            DialogueEntry::new("ALICE", "e"),
        ];
        let census = speaker_census("JOHN\nx\nMARY\nx\nALICE\nx", &lenient());
        let config = InteractionConfig {
            top_speakers: 2,
            ..Default::default()
        };

        let matrix = network_matrix(&entries, &census, &config);

        assert_eq!(matrix.speakers().len(), 2);
        assert!(matrix.speakers().contains(&"JOHN".to_string()));
        assert!(matrix.speakers().contains(&"MARY".to_string()));
        // MARY -> ALICE adjacency is outside the kept set
        assert_eq!(matrix.get("MARY", "ALICE"), 0);
    }

    #[test]
    fn test_network_matrix_drops_unaccepted_speakers() {
        let entries = vec![
            DialogueEntry::new("JOHN", "a"),
            DialogueEntry::new("GUARD", "b"),
            DialogueEntry::new("MARY", "c"),
        ];
        // Census text where GUARD never reaches the threshold
        let census = speaker_census(
            "JOHN\nx\nJOHN\nx\nJOHN\nx\nMARY\nx\nMARY\nx\nMARY\nx\nGUARD\nx",
            &SpeakerConfig::default(),
        );

        let matrix = network_matrix(&entries, &census, &InteractionConfig::default());

        // With GUARD filtered out, JOHN and MARY become adjacent
        assert_eq!(matrix.get("JOHN", "MARY"), 1);
    }

    #[test]
    fn test_scene_interactions_scale_and_labels() {
        // Six alternating cues: five adjacencies, matrix total 10,
        // scaled count 1
        let text = "JOHN\none\nMARY\ntwo\nJOHN\nthree\nMARY\nfour\nJOHN\nfive\nMARY\nsix";
        let census = speaker_census(text, &lenient());
        let scenes = vec![scene(1, text), scene(2, "no dialogue here")];

        let series = scene_interactions(&scenes, &census, &InteractionConfig::default());

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].scene, "Scene 1");
        assert_eq!(series[0].count, 1);
        assert_eq!(series[1].scene, "Scene 2");
        assert_eq!(series[1].count, 0);
    }

    #[test]
    fn test_scene_with_single_speaker_counts_zero() {
        let text = "JOHN\nhello\nJOHN\nstill me";
        let census = speaker_census(text, &lenient());
        let scenes = vec![scene(1, text)];

        let series = scene_interactions(&scenes, &census, &InteractionConfig::default());
        assert_eq!(series[0].count, 0);
    }

    #[test]
    fn test_no_scenes_no_series() {
        let census = speaker_census("", &SpeakerConfig::default());
        assert!(scene_interactions(&[], &census, &InteractionConfig::default()).is_empty());
    }
}
