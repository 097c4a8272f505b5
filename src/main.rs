use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use reelsight::{
    accepted_dialogues, extract_dialogues, network_matrix, read_screenplay, salient_terms,
    scene_interactions, score_scenes, segment, speaker_census, speaker_line_counts,
    write_all_viz, AnalysisReport, InteractionConfig, SegmenterConfig, SpeakerConfig,
    TermConfig, VaderScorer,
};

#[derive(Parser)]
#[command(name = "reelsight")]
#[command(author, version, about = "Screenplay analysis pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a screenplay and write visualization artifacts
    Analyze {
        /// Input screenplay text file
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for the JSON artifacts
        #[arg(short, long)]
        out_dir: PathBuf,

        /// A name must appear more than this many times to count as a
        /// character
        #[arg(long, default_value = "2")]
        character_threshold: usize,

        /// Number of speakers kept in the network view
        #[arg(long, default_value = "20")]
        top_speakers: usize,

        /// Labeled-line floor below which broader heading tiers apply
        #[arg(long, default_value = "150")]
        match_floor: usize,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print a summary of a screenplay without writing files
    Inspect {
        /// Input screenplay text file
        #[arg(short, long)]
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            out_dir,
            character_threshold,
            top_speakers,
            match_floor,
            verbose,
        } => {
            setup_logging(verbose);
            analyze_screenplay(input, out_dir, character_threshold, top_speakers, match_floor)
        }
        Commands::Inspect { input, verbose } => {
            setup_logging(verbose);
            inspect_screenplay(input)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn analyze_screenplay(
    input: PathBuf,
    out_dir: PathBuf,
    character_threshold: usize,
    top_speakers: usize,
    match_floor: usize,
) -> Result<()> {
    info!("Loading screenplay from {:?}", input);
    let screenplay = read_screenplay(&input).context("Failed to read input screenplay")?;

    let segmenter_config = SegmenterConfig { match_floor };
    let speaker_config = SpeakerConfig {
        min_occurrences: character_threshold,
        ..Default::default()
    };
    let interaction_config = InteractionConfig {
        top_speakers,
        ..Default::default()
    };

    let segmentation = segment(&screenplay.text, &segmenter_config);
    info!("Found {} scenes", segmentation.scene_count());

    let census = speaker_census(&screenplay.text, &speaker_config);
    let entries = extract_dialogues(&screenplay.text);
    let accepted = accepted_dialogues(&entries, &census);
    info!(
        "Found {} accepted speakers across {} dialogue entries",
        census.accepted.len(),
        accepted.len()
    );

    let network = network_matrix(&entries, &census, &interaction_config);
    let interactions = scene_interactions(&segmentation.scenes, &census, &interaction_config);
    let sentiment = score_scenes(&segmentation.scenes, &VaderScorer);
    let terms = salient_terms(&screenplay.text, &census, &TermConfig::default());

    let report = AnalysisReport {
        source_file: input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.display().to_string()),
        scene_count: segmentation.scene_count(),
        dialogue_count: accepted.len(),
        speaker_count: census.accepted.len(),
        network,
        speaker_lines: speaker_line_counts(&accepted),
        interactions,
        sentiment,
        terms,
    };

    write_all_viz(&out_dir, &report).context("Failed to write visualization artifacts")?;

    info!(
        "Complete: {} scenes, {} speakers, {} dialogue entries",
        report.scene_count, report.speaker_count, report.dialogue_count
    );

    Ok(())
}

fn inspect_screenplay(input: PathBuf) -> Result<()> {
    info!("Inspecting screenplay from {:?}", input);
    let screenplay = read_screenplay(&input).context("Failed to read input screenplay")?;

    let segmentation = segment(&screenplay.text, &SegmenterConfig::default());
    let census = speaker_census(&screenplay.text, &SpeakerConfig::default());
    let entries = extract_dialogues(&screenplay.text);
    let accepted = accepted_dialogues(&entries, &census);

    println!("Screenplay Analysis");
    println!("===================");
    println!("Scenes: {}", segmentation.scene_count());
    println!("Accepted speakers: {}", census.accepted.len());
    println!("Dialogue entries: {}", accepted.len());
    println!();

    println!("Speaker Statistics");
    println!("------------------");
    let line_counts = speaker_line_counts(&accepted);
    let mut speakers: Vec<(&String, &usize)> = line_counts.iter().collect();
    speakers.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (name, lines) in &speakers {
        let cues = census.counts.get(*name).copied().unwrap_or(0);
        println!("{}: {} dialogue lines, {} cues", name, lines, cues);
    }
    println!();

    let network = network_matrix(&entries, &census, &InteractionConfig::default());
    println!("Interactions");
    println!("------------");
    println!("Total (both directions): {}", network.total());
    let mut pairs = network.pairs();
    pairs.sort_by(|a, b| b.2.cmp(&a.2));
    for (a, b, weight) in pairs.iter().take(10) {
        println!("{} - {}: {}", a, b, weight);
    }

    Ok(())
}
