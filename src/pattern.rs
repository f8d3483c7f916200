//! Pattern classification from regional variance
//!
//! The image is split into four quadrants and the pixel variance of each is
//! measured. How unevenly that variance is spread across quadrants (the
//! coefficient of variation of the four values) selects a pattern band.
//!
//! Bands are evaluated in ascending threshold order with a strict `<`, so a
//! ratio sitting exactly on a threshold belongs to the next band up. Anything
//! above the last threshold is floral.

use image::RgbImage;

use crate::constants::pattern::{
    GRAPHIC_THRESHOLD, PLAID_THRESHOLD, POLKA_DOT_THRESHOLD, SOLID_THRESHOLD, STRIPED_THRESHOLD,
    VARIANCE_EPSILON,
};
use crate::wardrobe::PatternCategory;

/// Classifies garment images into pattern categories
#[derive(Debug, Clone)]
pub struct PatternClassifier {
    /// Upper bounds, ascending
    bands: Vec<(f64, PatternCategory)>,
    /// Category for ratios above every band
    open_band: PatternCategory,
}

impl Default for PatternClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternClassifier {
    /// Create a classifier with the standard thresholds
    pub fn new() -> Self {
        Self::with_thresholds(
            vec![
                (SOLID_THRESHOLD, PatternCategory::Solid),
                (STRIPED_THRESHOLD, PatternCategory::Striped),
                (PLAID_THRESHOLD, PatternCategory::Plaid),
                (POLKA_DOT_THRESHOLD, PatternCategory::PolkaDot),
                (GRAPHIC_THRESHOLD, PatternCategory::Graphic),
            ],
            PatternCategory::Floral,
        )
    }

    /// Create a classifier with custom bands.
    ///
    /// Bands are always checked in ascending numeric order, whatever order
    /// they are given in.
    pub fn with_thresholds(mut bands: Vec<(f64, PatternCategory)>, open_band: PatternCategory) -> Self {
        bands.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { bands, open_band }
    }

    /// Classify the pattern of an RGB image
    pub fn classify(&self, image: &RgbImage) -> PatternCategory {
        self.classify_ratio(variance_ratio(image))
    }

    /// Map a variance ratio onto a pattern band
    pub fn classify_ratio(&self, ratio: f64) -> PatternCategory {
        self.bands
            .iter()
            .find(|(threshold, _)| ratio < *threshold)
            .map(|(_, category)| *category)
            .unwrap_or(self.open_band)
    }
}

/// Coefficient of variation of the four quadrant variances
pub fn variance_ratio(image: &RgbImage) -> f64 {
    ratio_of(&quadrant_variances(image))
}

/// `stddev / (mean + ε)` over a set of region variances
pub fn ratio_of(variances: &[f64]) -> f64 {
    if variances.is_empty() {
        return 0.0;
    }
    let n = variances.len() as f64;
    let mean = variances.iter().sum::<f64>() / n;
    let spread = variances.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    spread.sqrt() / (mean + VARIANCE_EPSILON)
}

/// Variances of the top-left, top-right, bottom-left and bottom-right quadrants.
///
/// Quadrants split at `height / 2` and `width / 2`; odd dimensions give the
/// extra row or column to the second half.
pub fn quadrant_variances(image: &RgbImage) -> [f64; 4] {
    let (width, height) = image.dimensions();
    let mid_x = width / 2;
    let mid_y = height / 2;

    [
        region_variance(image, 0, mid_x, 0, mid_y),
        region_variance(image, mid_x, width, 0, mid_y),
        region_variance(image, 0, mid_x, mid_y, height),
        region_variance(image, mid_x, width, mid_y, height),
    ]
}

/// Population variance over every channel value in the region; empty regions are 0
fn region_variance(image: &RgbImage, x0: u32, x1: u32, y0: u32, y1: u32) -> f64 {
    let count = ((x1 - x0) as usize) * ((y1 - y0) as usize) * 3;
    if count == 0 {
        return 0.0;
    }

    let values = || {
        (y0..y1).flat_map(move |y| {
            (x0..x1).flat_map(move |x| image.get_pixel(x, y).0.into_iter().map(f64::from))
        })
    };

    let mean = values().sum::<f64>() / count as f64;
    values().map(|v| (v - mean) * (v - mean)).sum::<f64>() / count as f64
}
