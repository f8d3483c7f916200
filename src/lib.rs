//! # Outfit Recommender
//!
//! A Rust crate for deriving garment attributes from photos and suggesting
//! outfits from a digitized wardrobe.
//!
//! This library provides:
//! - Dominant color naming via seeded k-means clustering
//! - Pattern classification from quadrant variance
//! - Category-aware outfit selection with favorite color/pattern preference
//! - Outfit naming, style notes and a 0-100 compatibility score
//!
//! Persistence, accounts and HTTP handling are left to the caller: the
//! engine takes items and preferences by value and returns proposals.
//!
//! ## Example
//!
//! ```rust,no_run
//! use outfit_recommender::{analyze_garment, SuggestionEngine, StylePreferences, WardrobeItem};
//! use rand::SeedableRng;
//! use std::path::Path;
//!
//! let attributes = analyze_garment(Path::new("shirt.jpg"))?;
//! println!("color: {}, pattern: {}", attributes.color, attributes.pattern);
//!
//! let items: Vec<WardrobeItem> = Vec::new();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let proposals = SuggestionEngine::new().generate(&items, &StylePreferences::default(), &mut rng);
//! # Ok::<(), outfit_recommender::EngineError>(())
//! ```

use std::path::Path;

pub mod analyzer;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod image_loader;
pub mod outfit;
pub mod pattern;
pub mod wardrobe;

pub use analyzer::ImageAnalyzer;
pub use color::{ColorClassifier, ColorQuantizer, DominantColor};
pub use config::{AnalysisConfig, EngineConfig, SuggestionConfig};
pub use error::{EngineError, Result};
pub use outfit::{
    top_ranked, wardrobe_variety_score, ItemSelector, OutfitNarrator, OutfitScorer,
    ProposalFilter, SuggestionEngine,
};
pub use pattern::PatternClassifier;
pub use wardrobe::{
    CategoryTag, ColorCategory, GarmentAttributes, ItemId, OccasionTag, OutfitProposal,
    PatternCategory, SeasonTag, StylePreferences, StyleTag, WardrobeItem,
};

/// Analyze a garment photo from disk with default parameters
///
/// # Errors
///
/// Returns `EngineError::DecodeFailure` if the file cannot be read or decoded,
/// or if the image cannot be analyzed. Callers should keep any attribute
/// values they already have.
pub fn analyze_garment(image_path: &Path) -> Result<GarmentAttributes> {
    let image = image_loader::load_image(image_path)?;
    ImageAnalyzer::new().analyze(&image)
}

/// Analyze an encoded garment photo held in memory
pub fn analyze_garment_bytes(bytes: &[u8]) -> Result<GarmentAttributes> {
    let image = image_loader::load_image_bytes(bytes)?;
    ImageAnalyzer::new().analyze(&image)
}
