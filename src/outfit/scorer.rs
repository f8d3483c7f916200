//! Outfit compatibility scoring
//!
//! score = 70 + 10 × (share of favorite colors) + 10 × (share of preferred
//! patterns) + 10 if the outfit has both a top and a bottom, truncated and
//! capped at 100.

use std::collections::BTreeSet;

use crate::constants::outfit::{
    BASE_SCORE, COLOR_MATCH_WEIGHT, MAX_SCORE, PATTERN_MATCH_WEIGHT, TOPS_AND_BOTTOMS_BONUS,
};
use crate::wardrobe::{CategoryTag, ColorCategory, OccasionTag, PatternCategory, SeasonTag, WardrobeItem};

/// Computes a 0-100 compatibility score for a set of items
#[derive(Debug, Clone, Default)]
pub struct OutfitScorer;

impl OutfitScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score a selected outfit.
    ///
    /// `items` must not be empty; an empty outfit only earns the base score.
    /// Occasion and season are accepted for future weighting and do not
    /// currently change the result.
    pub fn score(
        &self,
        items: &[&WardrobeItem],
        favorite_colors: &BTreeSet<ColorCategory>,
        preferred_patterns: &BTreeSet<PatternCategory>,
        _occasion: OccasionTag,
        _season: SeasonTag,
    ) -> u8 {
        let mut total = BASE_SCORE;

        if !items.is_empty() {
            let n = items.len() as f64;
            let color_matches = items
                .iter()
                .filter(|item| favorite_colors.contains(&item.color))
                .count() as f64;
            let pattern_matches = items
                .iter()
                .filter(|item| preferred_patterns.contains(&item.pattern))
                .count() as f64;

            total += COLOR_MATCH_WEIGHT * color_matches / n;
            total += PATTERN_MATCH_WEIGHT * pattern_matches / n;
        }

        let has = |category| items.iter().any(|item| item.category == category);
        if has(CategoryTag::Tops) && has(CategoryTag::Bottoms) {
            total += TOPS_AND_BOTTOMS_BONUS;
        }

        (total.trunc().clamp(0.0, MAX_SCORE as f64)) as u8
    }
}
