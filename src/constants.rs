//! Fixed vocabulary tables and tuning constants for the recommendation engine
//!
//! Callers constructing wardrobe items and preferences must use the same
//! enumerations; the engine only matches tags exactly.

use crate::wardrobe::ColorCategory;

/// Named color palette used for dominant color classification
pub mod color_palette {
    use super::ColorCategory;

    /// Reference RGB points per color category, in declaration order.
    /// Ties between equidistant points resolve to the earlier entry.
    pub const REFERENCE_COLORS: [(ColorCategory, [[u8; 3]; 2]); 11] = [
        (ColorCategory::Black, [[0, 0, 0], [50, 50, 50]]),
        (ColorCategory::White, [[200, 200, 200], [255, 255, 255]]),
        (ColorCategory::Gray, [[100, 100, 100], [150, 150, 150]]),
        (ColorCategory::Red, [[150, 0, 0], [255, 50, 50]]),
        (ColorCategory::Blue, [[0, 0, 150], [50, 50, 255]]),
        (ColorCategory::Green, [[0, 150, 0], [50, 255, 50]]),
        (ColorCategory::Yellow, [[200, 200, 0], [255, 255, 50]]),
        (ColorCategory::Purple, [[150, 0, 150], [255, 50, 255]]),
        (ColorCategory::Pink, [[255, 150, 150], [255, 200, 200]]),
        (ColorCategory::Brown, [[150, 75, 0], [200, 100, 50]]),
        (ColorCategory::Orange, [[255, 100, 0], [255, 150, 50]]),
    ];
}

/// Variance-ratio thresholds for pattern classification
pub mod pattern {
    pub const SOLID_THRESHOLD: f64 = 0.05;
    pub const STRIPED_THRESHOLD: f64 = 0.20;
    pub const POLKA_DOT_THRESHOLD: f64 = 0.25;
    pub const PLAID_THRESHOLD: f64 = 0.30;
    pub const GRAPHIC_THRESHOLD: f64 = 0.35;

    /// Guards the ratio against a zero mean variance
    pub const VARIANCE_EPSILON: f64 = 1e-10;
}

/// Image normalization and clustering parameters
pub mod analysis {
    /// Images are resized to this square resolution before analysis
    pub const TARGET_SIZE: u32 = 100;

    /// Number of color clusters extracted per image
    pub const CLUSTER_COUNT: usize = 5;

    /// Fixed seed so repeated analysis of one image is deterministic
    pub const CLUSTER_SEED: u64 = 42;

    /// Upper bound on k-means refinement passes
    pub const MAX_ITERATIONS: usize = 300;
}

/// Outfit generation and scoring parameters
pub mod outfit {
    /// Upper bound on proposals per generation batch
    pub const MAX_SUGGESTIONS: usize = 6;

    /// An outfit needs at least this many items
    pub const MIN_OUTFIT_ITEMS: usize = 2;

    /// Largest outfit the engine will propose
    pub const MAX_OUTFIT_ITEMS: usize = 4;

    pub const BASE_SCORE: f64 = 70.0;
    pub const COLOR_MATCH_WEIGHT: f64 = 10.0;
    pub const PATTERN_MATCH_WEIGHT: f64 = 10.0;
    pub const TOPS_AND_BOTTOMS_BONUS: f64 = 10.0;
    pub const MAX_SCORE: u8 = 100;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_thresholds_ascending() {
        let bands = [
            pattern::SOLID_THRESHOLD,
            pattern::STRIPED_THRESHOLD,
            pattern::POLKA_DOT_THRESHOLD,
            pattern::PLAID_THRESHOLD,
            pattern::GRAPHIC_THRESHOLD,
        ];
        assert!(bands.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_palette_has_no_other_entry() {
        assert!(color_palette::REFERENCE_COLORS
            .iter()
            .all(|(category, _)| *category != ColorCategory::Other));
    }

    #[test]
    fn test_outfit_bounds() {
        assert!(outfit::MIN_OUTFIT_ITEMS <= outfit::MAX_OUTFIT_ITEMS);
        let best = outfit::BASE_SCORE
            + outfit::COLOR_MATCH_WEIGHT
            + outfit::PATTERN_MATCH_WEIGHT
            + outfit::TOPS_AND_BOTTOMS_BONUS;
        assert_eq!(best as u8, outfit::MAX_SCORE);
    }
}
