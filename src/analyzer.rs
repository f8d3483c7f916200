//! Garment image analysis
//!
//! Derives a garment's color and pattern from a decoded photo:
//! - Normalize to a small fixed resolution to bound cost
//! - Cluster pixel colors and name the largest cluster's centroid
//! - Classify the pattern from quadrant variance on the same grid
//!
//! Any failure is reported as `EngineError::DecodeFailure`; callers keep
//! whatever attribute values they already had.

use image::{DynamicImage, RgbImage};
use tracing::debug;

use crate::color::{ColorClassifier, ColorCluster, ColorQuantizer, DominantColor};
use crate::config::AnalysisConfig;
use crate::pattern::{self, PatternClassifier};
use crate::wardrobe::GarmentAttributes;
use crate::{EngineError, Result};

/// Orchestrates color and pattern classification for one garment image
#[derive(Debug, Clone)]
pub struct ImageAnalyzer {
    config: AnalysisConfig,
    quantizer: ColorQuantizer,
    colors: ColorClassifier,
    patterns: PatternClassifier,
}

impl Default for ImageAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageAnalyzer {
    /// Create an analyzer with default parameters
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::default())
    }

    /// Create an analyzer with custom analysis parameters
    pub fn with_config(config: AnalysisConfig) -> Self {
        let quantizer = ColorQuantizer::with_params(
            config.cluster_count,
            config.seed,
            config.max_iterations,
            config.restarts,
        );
        Self {
            config,
            quantizer,
            colors: ColorClassifier::new(),
            patterns: PatternClassifier::new(),
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze a decoded garment image
    ///
    /// # Errors
    ///
    /// Returns `EngineError::DecodeFailure` if the image is empty or the
    /// color statistics cannot be computed.
    pub fn analyze(&self, image: &DynamicImage) -> Result<GarmentAttributes> {
        let normalized = self.normalize(image)?;
        self.analyze_pixels(&normalized)
    }

    /// Analyze an RGB grid that is already at the working resolution
    pub fn analyze_pixels(&self, grid: &RgbImage) -> Result<GarmentAttributes> {
        let clusters = self.clusters(grid)?;
        let dominant = dominant_cluster(&clusters)
            .ok_or_else(|| EngineError::decode_msg("No color clusters found"))?;
        let color = self.colors.classify(dominant.color());

        let ratio = pattern::variance_ratio(grid);
        if !ratio.is_finite() {
            return Err(EngineError::decode_msg(format!(
                "Pattern variance ratio is not finite: {}",
                ratio
            )));
        }
        let pattern = self.patterns.classify_ratio(ratio);

        debug!(
            color = %color,
            pattern = %pattern,
            ratio,
            dominant_pixels = dominant.pixel_count,
            "garment analyzed"
        );

        Ok(GarmentAttributes { color, pattern })
    }

    /// All color clusters of an image, largest first
    pub fn dominant_colors(&self, image: &DynamicImage) -> Result<Vec<DominantColor>> {
        let normalized = self.normalize(image)?;
        let clusters = self.clusters(&normalized)?;
        let total: usize = clusters.iter().map(|c| c.pixel_count).sum();

        let mut colors: Vec<DominantColor> = clusters
            .iter()
            .map(|cluster| DominantColor {
                srgb: cluster.color(),
                pixel_count: cluster.pixel_count,
                share: cluster.pixel_count as f32 / total.max(1) as f32,
            })
            .collect();
        colors.sort_by(|a, b| b.pixel_count.cmp(&a.pixel_count));
        Ok(colors)
    }

    /// Resize to the working resolution and drop alpha
    fn normalize(&self, image: &DynamicImage) -> Result<RgbImage> {
        if image.width() == 0 || image.height() == 0 {
            return Err(EngineError::decode_msg(format!(
                "Image has no pixels ({}x{})",
                image.width(),
                image.height()
            )));
        }
        if self.config.target_width == 0 || self.config.target_height == 0 {
            return Err(EngineError::decode_msg("Target resolution must be positive"));
        }

        Ok(image
            .resize_exact(
                self.config.target_width,
                self.config.target_height,
                self.config.resize_filter.into(),
            )
            .to_rgb8())
    }

    fn clusters(&self, grid: &RgbImage) -> Result<Vec<ColorCluster>> {
        let pixels: Vec<[u8; 3]> = grid.pixels().map(|p| p.0).collect();
        self.quantizer.quantize(&pixels)
    }
}

/// Largest cluster; ties go to the earliest cluster
fn dominant_cluster(clusters: &[ColorCluster]) -> Option<&ColorCluster> {
    clusters.iter().fold(None, |best: Option<&ColorCluster>, cluster| match best {
        Some(b) if b.pixel_count >= cluster.pixel_count => Some(b),
        _ => Some(cluster),
    })
}
