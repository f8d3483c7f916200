//! Command-line interface for outfit_recommender
//!
//! Basic CLI tool for trying garment analysis and outfit suggestions
//!
//! ```text
//! cargo run --example cli -- analyze shirt.jpg
//! cargo run --example cli -- suggest wardrobe.json --seed 7
//! ```

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use outfit_recommender::{
    image_loader, top_ranked, wardrobe_variety_score, EngineConfig, EngineError, ImageAnalyzer,
    StylePreferences, SuggestionEngine, WardrobeItem,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "outfit-cli", about = "Garment analysis and outfit suggestions")]
struct Cli {
    /// Engine configuration file (JSON); defaults are used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Detect color and pattern of a garment photo
    Analyze {
        image: PathBuf,
        /// Also print every dominant color cluster
        #[arg(long)]
        clusters: bool,
    },
    /// Generate outfit suggestions from a wardrobe file
    Suggest {
        wardrobe: PathBuf,
        /// Seed for reproducible suggestions
        #[arg(long)]
        seed: Option<u64>,
        /// Only print the best N proposals
        #[arg(long)]
        top: Option<usize>,
    },
}

/// Wardrobe file layout: `{"items": [...], "preferences": {...}}`
#[derive(Deserialize)]
struct WardrobeFile {
    items: Vec<WardrobeItem>,
    #[serde(default)]
    preferences: StylePreferences,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_json_file(path),
        None => Ok(EngineConfig::default()),
    };
    let config = config.unwrap_or_else(|e| fail(&e));

    let outcome = match cli.command {
        Command::Analyze { image, clusters } => analyze(&image, clusters, &config),
        Command::Suggest { wardrobe, seed, top } => suggest(&wardrobe, seed, top, &config),
    };

    if let Err(e) = outcome {
        fail(&e);
    }
}

fn analyze(path: &Path, clusters: bool, config: &EngineConfig) -> Result<(), EngineError> {
    let image = image_loader::load_image(path)?;
    let analyzer = ImageAnalyzer::with_config(config.analysis.clone());
    let attributes = analyzer.analyze(&image)?;

    println!("{}", to_json(&attributes)?);

    if clusters {
        for color in analyzer.dominant_colors(&image)? {
            println!("{}  {:5.1}%  ({} px)", color.hex(), color.share * 100.0, color.pixel_count);
        }
    }
    Ok(())
}

fn suggest(
    path: &Path,
    seed: Option<u64>,
    top: Option<usize>,
    config: &EngineConfig,
) -> Result<(), EngineError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| EngineError::config(format!("Failed to read {}", path.display()), e))?;
    let wardrobe: WardrobeFile = serde_json::from_str(&content)
        .map_err(|e| EngineError::config("Invalid wardrobe file", e))?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let engine = SuggestionEngine::with_config(config.suggestions.clone());
    let proposals = engine.try_generate(&wardrobe.items, &wardrobe.preferences, &mut rng)?;
    if proposals.is_empty() {
        eprintln!("No compatible outfits found; add items from more categories.");
    }

    let shown = top_ranked(&proposals, top.unwrap_or(proposals.len()));
    println!("{}", to_json(&shown)?);
    eprintln!("Wardrobe variety score: {}", wardrobe_variety_score(&wardrobe.items));
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, EngineError> {
    serde_json::to_string_pretty(value).map_err(|e| EngineError::config("Failed to encode output", e))
}

fn fail(err: &EngineError) -> ! {
    eprintln!("Error: {}", err);
    eprintln!("{}", err.user_message());
    process::exit(1);
}
