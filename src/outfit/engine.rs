//! Batch outfit suggestion generation
//!
//! Each batch runs a fixed number of attempts. Every attempt draws a season
//! and an occasion from the user's preferences, narrows the wardrobe to items
//! wearable that season, selects an outfit, then names and scores it.
//! Attempts that cannot form an outfit are skipped, so a batch may hold fewer
//! proposals than attempts. Proposals are not deduplicated.

use rand::Rng;
use tracing::debug;

use crate::config::SuggestionConfig;
use crate::constants::outfit::MIN_OUTFIT_ITEMS;
use crate::outfit::{ItemSelector, OutfitNarrator, OutfitScorer};
use crate::wardrobe::{OccasionTag, OutfitProposal, SeasonTag, StylePreferences, WardrobeItem};
use crate::{EngineError, Result};

/// Occasions drawn from when the user has not picked any
const DEFAULT_OCCASIONS: [OccasionTag; 3] =
    [OccasionTag::Casual, OccasionTag::Formal, OccasionTag::Business];

/// Top-level outfit suggestion orchestrator
#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine {
    config: SuggestionConfig,
    selector: ItemSelector,
    narrator: OutfitNarrator,
    scorer: OutfitScorer,
}

impl SuggestionEngine {
    /// Create an engine with default batch parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom batch parameters
    pub fn with_config(config: SuggestionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Number of attempts made for a wardrobe of `item_count` items
    pub fn attempts_for(&self, item_count: usize) -> usize {
        self.config.max_suggestions.min(item_count / 2 + 1)
    }

    /// Generate a batch of outfit proposals.
    ///
    /// Returns an empty batch when the wardrobe has fewer than two items.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        items: &[WardrobeItem],
        prefs: &StylePreferences,
        rng: &mut R,
    ) -> Vec<OutfitProposal> {
        match self.try_generate(items, prefs, rng) {
            Ok(proposals) => proposals,
            Err(err) => {
                debug!(error = %err, "no outfit suggestions generated");
                Vec::new()
            }
        }
    }

    /// Generate a batch, reporting a too-small wardrobe as an error
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InsufficientInput` if `items` has fewer than two
    /// elements.
    pub fn try_generate<R: Rng + ?Sized>(
        &self,
        items: &[WardrobeItem],
        prefs: &StylePreferences,
        rng: &mut R,
    ) -> Result<Vec<OutfitProposal>> {
        if items.len() < MIN_OUTFIT_ITEMS {
            return Err(EngineError::insufficient(format!(
                "wardrobe has {} item(s), at least {} required",
                items.len(),
                MIN_OUTFIT_ITEMS
            )));
        }

        let seasons = candidate_seasons(prefs);
        let occasions = candidate_occasions(prefs);
        let attempts = self.attempts_for(items.len());
        let mut proposals = Vec::with_capacity(attempts);

        for attempt in 0..attempts {
            let season = seasons[rng.gen_range(0..seasons.len())];
            let occasion = occasions[rng.gen_range(0..occasions.len())];

            let mut pool: Vec<&WardrobeItem> =
                items.iter().filter(|item| item.fits_season(season)).collect();
            if pool.len() < MIN_OUTFIT_ITEMS {
                pool = items.iter().collect();
            }

            let smallest = self.config.min_outfit_items;
            let largest = self.config.max_outfit_items.max(smallest);
            let target = rng.gen_range(smallest..=largest).min(pool.len());

            let outfit = self.selector.select(
                pool.iter().copied(),
                target,
                &prefs.favorite_colors,
                &prefs.preferred_patterns,
                rng,
            );
            if outfit.len() < MIN_OUTFIT_ITEMS {
                debug!(attempt, %season, %occasion, "skipping attempt without a valid outfit");
                continue;
            }

            let name = self.narrator.name(&outfit, occasion, season, rng);
            let style_notes = self.narrator.notes(&outfit, occasion, season);
            let score = self.scorer.score(
                &outfit,
                &prefs.favorite_colors,
                &prefs.preferred_patterns,
                occasion,
                season,
            );

            proposals.push(OutfitProposal::new(
                name,
                outfit.iter().map(|item| item.id).collect(),
                occasion,
                season,
                prefs.style_preference,
                style_notes,
                score,
            ));
        }

        debug!(attempts, generated = proposals.len(), "outfit batch generated");
        Ok(proposals)
    }
}

/// Preferred seasons, or the four calendar seasons when none are marked
fn candidate_seasons(prefs: &StylePreferences) -> Vec<SeasonTag> {
    let preferred = prefs.preferred_seasons();
    if preferred.is_empty() {
        SeasonTag::CALENDAR.to_vec()
    } else {
        preferred
    }
}

fn candidate_occasions(prefs: &StylePreferences) -> Vec<OccasionTag> {
    if prefs.occasion_preferences.is_empty() {
        DEFAULT_OCCASIONS.to_vec()
    } else {
        prefs.occasion_preferences.iter().copied().collect()
    }
}
