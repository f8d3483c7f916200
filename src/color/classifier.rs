//! Nearest-reference color naming
//!
//! Maps an RGB color to the named category whose reference point is closest
//! in RGB space. Each category may carry several reference points; the search
//! is global across all of them.

use palette::Srgb;

use crate::constants::color_palette::REFERENCE_COLORS;
use crate::wardrobe::ColorCategory;

/// Classifies RGB colors into the fixed named palette
#[derive(Debug, Clone)]
pub struct ColorClassifier {
    table: Vec<(ColorCategory, Vec<Srgb<u8>>)>,
}

impl Default for ColorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorClassifier {
    /// Create a classifier over the standard wardrobe palette
    pub fn new() -> Self {
        let table = REFERENCE_COLORS
            .iter()
            .map(|(category, points)| {
                let points = points
                    .iter()
                    .map(|[r, g, b]| Srgb::new(*r, *g, *b))
                    .collect();
                (*category, points)
            })
            .collect();
        Self { table }
    }

    /// Create a classifier over a custom reference table.
    ///
    /// Declaration order matters: on equal distance the earlier category wins.
    pub fn with_table(table: Vec<(ColorCategory, Vec<Srgb<u8>>)>) -> Self {
        Self { table }
    }

    /// Reference points in declaration order
    pub fn references(&self) -> impl Iterator<Item = (ColorCategory, Srgb<u8>)> + '_ {
        self.table
            .iter()
            .flat_map(|(category, points)| points.iter().map(move |p| (*category, *p)))
    }

    /// Classify a color by its closest reference point.
    ///
    /// Returns [`ColorCategory::Other`] only when the table is empty.
    pub fn classify(&self, color: Srgb<u8>) -> ColorCategory {
        let mut closest = ColorCategory::Other;
        let mut min_distance = u32::MAX;

        for (category, reference) in self.references() {
            let distance = squared_distance(color, reference);
            // Strict comparison keeps the first-declared category on ties
            if distance < min_distance {
                min_distance = distance;
                closest = category;
            }
        }

        closest
    }

    /// Classify from separate channel values
    pub fn classify_rgb(&self, r: u8, g: u8, b: u8) -> ColorCategory {
        self.classify(Srgb::new(r, g, b))
    }
}

/// Squared Euclidean distance; ordering matches the true distance
fn squared_distance(a: Srgb<u8>, b: Srgb<u8>) -> u32 {
    let dr = a.red as i32 - b.red as i32;
    let dg = a.green as i32 - b.green as i32;
    let db = a.blue as i32 - b.blue as i32;
    (dr * dr + dg * dg + db * db) as u32
}
