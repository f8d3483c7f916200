//! Wardrobe variety score
//!
//! Rewards breadth across categories, colors, patterns and seasons, each
//! capped so no single dimension dominates:
//!
//! | dimension  | points per distinct value | cap |
//! |------------|---------------------------|-----|
//! | categories | 10                        | 30  |
//! | colors     | 5                         | 30  |
//! | patterns   | 10                        | 30  |
//! | seasons    | 2.5                       | 10  |

use std::collections::BTreeSet;

use crate::wardrobe::WardrobeItem;

/// Score a whole wardrobe for variety, 0-100; an empty wardrobe scores 0
pub fn wardrobe_variety_score(items: &[WardrobeItem]) -> u8 {
    if items.is_empty() {
        return 0;
    }

    let distinct = |values: BTreeSet<&'static str>| values.len() as f64;
    let categories = distinct(items.iter().map(|i| i.category.as_str()).collect());
    let colors = distinct(items.iter().map(|i| i.color.as_str()).collect());
    let patterns = distinct(items.iter().map(|i| i.pattern.as_str()).collect());
    let seasons = distinct(items.iter().map(|i| i.season.as_str()).collect());

    let total = (categories * 10.0).min(30.0)
        + (colors * 5.0).min(30.0)
        + (patterns * 10.0).min(30.0)
        + (seasons * 2.5).min(10.0);

    total as u8
}
