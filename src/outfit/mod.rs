//! Outfit synthesis module
//!
//! This module selects compatible items from a wardrobe, names and scores
//! the resulting outfits, and batches them into suggestions.

pub mod engine;
pub mod filter;
pub mod narrator;
pub mod scorer;
pub mod selector;
pub mod variety;

pub use engine::SuggestionEngine;
pub use filter::{top_ranked, ProposalFilter};
pub use narrator::OutfitNarrator;
pub use scorer::OutfitScorer;
pub use selector::ItemSelector;
pub use variety::wardrobe_variety_score;
