//! Outfit names and style notes
//!
//! Names combine a random occasion adjective with a random season adjective.
//! Notes join three fixed sentences: occasion, season, then color harmony.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::wardrobe::{OccasionTag, SeasonTag, WardrobeItem};

const FALLBACK_OCCASION_ADJECTIVE: &str = "Stylish";
const FALLBACK_SEASON_ADJECTIVE: &str = "Seasonal";

const FALLBACK_OCCASION_NOTE: &str = "This versatile outfit works well for various occasions.";

const MONOCHROMATIC_NOTE: &str = "The monochromatic color scheme creates a sleek, unified look.";
const COMPLEMENTARY_NOTE: &str =
    "The complementary colors create a balanced and visually appealing combination.";
const HARMONIOUS_NOTE: &str =
    "The thoughtful color combination creates a harmonious and coordinated look.";

/// Generates human-readable outfit names and style notes
#[derive(Debug, Clone, Default)]
pub struct OutfitNarrator;

impl OutfitNarrator {
    pub fn new() -> Self {
        Self
    }

    /// Name an outfit, e.g. "Relaxed Sunny Ensemble"
    pub fn name<R: Rng + ?Sized>(
        &self,
        _items: &[&WardrobeItem],
        occasion: OccasionTag,
        season: SeasonTag,
        rng: &mut R,
    ) -> String {
        let occasion_adj = occasion_adjectives(occasion)
            .choose(rng)
            .copied()
            .unwrap_or(FALLBACK_OCCASION_ADJECTIVE);
        let season_adj = season_adjectives(season)
            .choose(rng)
            .copied()
            .unwrap_or(FALLBACK_SEASON_ADJECTIVE);

        format!("{} {} Ensemble", occasion_adj, season_adj)
    }

    /// Style notes: occasion sentence, season sentence, color harmony sentence
    pub fn notes(&self, items: &[&WardrobeItem], occasion: OccasionTag, season: SeasonTag) -> String {
        let distinct_colors: BTreeSet<_> = items.iter().map(|item| item.color).collect();

        format!(
            "{} {} {}",
            occasion_note(occasion),
            season_note(season),
            harmony_note(distinct_colors.len())
        )
    }
}

fn occasion_adjectives(occasion: OccasionTag) -> &'static [&'static str] {
    match occasion {
        OccasionTag::Casual => &["Relaxed", "Casual", "Everyday", "Laid-back"],
        OccasionTag::Formal => &["Elegant", "Formal", "Sophisticated", "Polished"],
        OccasionTag::Business => &["Professional", "Business", "Office-ready", "Work"],
        OccasionTag::Party => &["Festive", "Party", "Celebration", "Night-out"],
        OccasionTag::Date => &["Romantic", "Date Night", "Evening", "Charming"],
        OccasionTag::Workout => &["Active", "Workout", "Fitness", "Athletic"],
        _ => &[FALLBACK_OCCASION_ADJECTIVE],
    }
}

fn season_adjectives(season: SeasonTag) -> &'static [&'static str] {
    match season {
        SeasonTag::Spring => &["Spring", "Fresh", "Blooming"],
        SeasonTag::Summer => &["Summer", "Sunny", "Vibrant"],
        SeasonTag::Fall => &["Fall", "Autumn", "Cozy"],
        SeasonTag::Winter => &["Winter", "Warm", "Cozy"],
        SeasonTag::All => &["All-season", "Versatile", "Year-round"],
    }
}

fn occasion_note(occasion: OccasionTag) -> &'static str {
    match occasion {
        OccasionTag::Casual => {
            "This relaxed outfit is perfect for everyday wear, offering both comfort and style."
        }
        OccasionTag::Formal => {
            "This elegant ensemble is suitable for formal events, creating a sophisticated look."
        }
        OccasionTag::Business => {
            "This professional outfit projects confidence and competence in the workplace."
        }
        OccasionTag::Party => {
            "This festive combination is ideal for social gatherings and celebrations."
        }
        OccasionTag::Date => {
            "This charming outfit creates the perfect impression for a special evening out."
        }
        OccasionTag::Workout => {
            "This functional outfit provides comfort and performance for your active lifestyle."
        }
        _ => FALLBACK_OCCASION_NOTE,
    }
}

fn season_note(season: SeasonTag) -> &'static str {
    match season {
        SeasonTag::Spring => "The light layers and fresh colors are perfect for spring weather.",
        SeasonTag::Summer => {
            "The breathable fabrics and vibrant tones are ideal for warm summer days."
        }
        SeasonTag::Fall => {
            "The rich colors and layering options work well for the transitional fall season."
        }
        SeasonTag::Winter => {
            "The warm fabrics and cozy layers will keep you stylish during cold winter days."
        }
        SeasonTag::All => {
            "This versatile combination works well year-round with appropriate accessories."
        }
    }
}

fn harmony_note(distinct_colors: usize) -> &'static str {
    match distinct_colors {
        1 => MONOCHROMATIC_NOTE,
        2 => COMPLEMENTARY_NOTE,
        _ => HARMONIOUS_NOTE,
    }
}
