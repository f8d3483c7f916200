//! Category-aware item selection for a single outfit
//!
//! An outfit takes at most one item per category. Tops and bottoms are filled
//! first, preferring items in a favorite color or preferred pattern; the rest
//! of the outfit is drawn from randomly chosen unused categories.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::wardrobe::{CategoryTag, ColorCategory, PatternCategory, WardrobeItem};

/// Categories filled before any other
const ESSENTIAL_CATEGORIES: [CategoryTag; 2] = [CategoryTag::Tops, CategoryTag::Bottoms];

/// Selects compatible wardrobe items for one outfit
#[derive(Debug, Clone, Default)]
pub struct ItemSelector;

impl ItemSelector {
    pub fn new() -> Self {
        Self
    }

    /// Select up to `count` items from `pool`, one per category.
    ///
    /// Returns an empty selection when the pool spans fewer than two
    /// categories. The result can be shorter than `count` once categories run
    /// out; callers treat fewer than two items as a failed selection.
    pub fn select<'a, I, R>(
        &self,
        pool: I,
        count: usize,
        favorite_colors: &BTreeSet<ColorCategory>,
        preferred_patterns: &BTreeSet<PatternCategory>,
        rng: &mut R,
    ) -> Vec<&'a WardrobeItem>
    where
        I: IntoIterator<Item = &'a WardrobeItem>,
        R: Rng + ?Sized,
    {
        let groups = group_by_category(pool);
        if groups.len() < 2 {
            debug!(categories = groups.len(), "not enough categories for an outfit");
            return Vec::new();
        }

        let mut selected = Vec::with_capacity(count.max(ESSENTIAL_CATEGORIES.len()));
        let mut used = vec![false; groups.len()];

        for essential in ESSENTIAL_CATEGORIES {
            let Some(index) = groups.iter().position(|(category, _)| *category == essential) else {
                continue;
            };
            let items = &groups[index].1;

            let preferred: Vec<&WardrobeItem> = items
                .iter()
                .copied()
                .filter(|item| {
                    favorite_colors.contains(&item.color)
                        || preferred_patterns.contains(&item.pattern)
                })
                .collect();

            let candidates = if preferred.is_empty() { items } else { &preferred };
            if let Some(item) = candidates.choose(rng) {
                selected.push(*item);
                used[index] = true;
            }
        }

        let mut remaining: Vec<usize> = (0..groups.len()).filter(|i| !used[*i]).collect();

        while selected.len() < count && !remaining.is_empty() {
            let index = remaining.remove(rng.gen_range(0..remaining.len()));
            if let Some(item) = groups[index].1.choose(rng) {
                selected.push(*item);
            }
        }

        selected
    }
}

/// Group items by category, keeping first-appearance order
fn group_by_category<'a, I>(pool: I) -> Vec<(CategoryTag, Vec<&'a WardrobeItem>)>
where
    I: IntoIterator<Item = &'a WardrobeItem>,
{
    let mut groups: Vec<(CategoryTag, Vec<&'a WardrobeItem>)> = Vec::new();
    for item in pool {
        match groups.iter_mut().find(|(category, _)| *category == item.category) {
            Some((_, items)) => items.push(item),
            None => groups.push((item.category, vec![item])),
        }
    }
    groups
}
