//! Configuration structures for the recommendation engine.
//!
//! All tunable parameters are grouped into image analysis and outfit
//! suggestion sections. Defaults reproduce the engine's fixed constants, so a
//! missing config file and [`EngineConfig::default`] behave identically.
//!
//! # Configuration Loading
//!
//! ```no_run
//! use outfit_recommender::EngineConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = EngineConfig::from_json_file(Path::new("engine.json"))?;
//!
//! // Or use defaults
//! let config = EngineConfig::default();
//! # Ok::<(), outfit_recommender::EngineError>(())
//! ```

use std::path::Path;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::constants::{analysis, outfit};
use crate::{EngineError, Result};

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Image analysis configuration
    pub analysis: AnalysisConfig,

    /// Outfit suggestion configuration
    pub suggestions: SuggestionConfig,
}

/// Image normalization and dominant color clustering parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Width images are resized to before analysis
    pub target_width: u32,

    /// Height images are resized to before analysis
    pub target_height: u32,

    /// Number of k-means color clusters
    pub cluster_count: usize,

    /// Seed for cluster initialization
    pub seed: u64,

    /// Maximum refinement passes per k-means run
    pub max_iterations: usize,

    /// Independent k-means runs; the tightest partition wins
    pub restarts: usize,

    /// Resampling filter used for normalization
    pub resize_filter: ResizeFilter,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            target_width: analysis::TARGET_SIZE,
            target_height: analysis::TARGET_SIZE,
            cluster_count: analysis::CLUSTER_COUNT,
            seed: analysis::CLUSTER_SEED,
            max_iterations: analysis::MAX_ITERATIONS,
            restarts: 10,
            resize_filter: ResizeFilter::CatmullRom,
        }
    }
}

/// Resampling filters available for image normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Outfit suggestion batch parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Upper bound on proposals per batch
    pub max_suggestions: usize,

    /// Smallest outfit size drawn per proposal
    pub min_outfit_items: usize,

    /// Largest outfit size drawn per proposal
    pub max_outfit_items: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            max_suggestions: outfit::MAX_SUGGESTIONS,
            min_outfit_items: outfit::MIN_OUTFIT_ITEMS,
            max_outfit_items: outfit::MAX_OUTFIT_ITEMS,
        }
    }
}

impl EngineConfig {
    /// Check that every parameter is usable
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Config` naming the first invalid parameter.
    pub fn validate(&self) -> Result<()> {
        let a = &self.analysis;
        if a.target_width == 0 || a.target_height == 0 {
            return Err(EngineError::invalid_config(format!(
                "target size must be positive, got {}x{}",
                a.target_width, a.target_height
            )));
        }
        if a.cluster_count == 0 {
            return Err(EngineError::invalid_config("cluster_count must be at least 1"));
        }
        if a.max_iterations == 0 || a.restarts == 0 {
            return Err(EngineError::invalid_config(
                "max_iterations and restarts must be at least 1",
            ));
        }

        let s = &self.suggestions;
        if s.min_outfit_items < outfit::MIN_OUTFIT_ITEMS {
            return Err(EngineError::invalid_config(format!(
                "min_outfit_items must be at least {}, got {}",
                outfit::MIN_OUTFIT_ITEMS,
                s.min_outfit_items
            )));
        }
        if s.min_outfit_items > s.max_outfit_items {
            return Err(EngineError::invalid_config(format!(
                "min_outfit_items ({}) exceeds max_outfit_items ({})",
                s.min_outfit_items, s.max_outfit_items
            )));
        }
        Ok(())
    }

    /// Load and validate configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            EngineError::config(format!("Failed to read {}", path.display()), e)
        })?;
        Self::from_json_str(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| EngineError::config("Invalid configuration JSON", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| EngineError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            EngineError::config(format!("Failed to write {}", path.display()), e)
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.analysis.target_width, 100);
        assert_eq!(config.analysis.cluster_count, 5);
        assert_eq!(config.analysis.seed, 42);
        assert_eq!(config.suggestions.max_suggestions, 6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = EngineConfig::from_json_str(r#"{"analysis": {"seed": 7}}"#).unwrap();
        assert_eq!(config.analysis.seed, 7);
        assert_eq!(config.analysis.cluster_count, 5);
        assert_eq!(config.suggestions, SuggestionConfig::default());
    }

    #[test]
    fn test_rejects_invalid_values() {
        let mut config = EngineConfig::default();
        config.analysis.cluster_count = 0;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.suggestions.min_outfit_items = 5;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.suggestions.min_outfit_items = 1;
        assert!(config.validate().is_err());

        assert!(EngineConfig::from_json_str(r#"{"analysis": {"target_width": 0}}"#).is_err());
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        match EngineConfig::from_json_str("{not json") {
            Err(EngineError::Config { .. }) => {}
            other => panic!("Expected Config error, got: {:?}", other),
        }
    }

    #[test]
    fn test_json_file_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "outfit_recommender_config_{}.json",
            std::process::id()
        ));
        let mut config = EngineConfig::default();
        config.analysis.resize_filter = ResizeFilter::Lanczos3;

        config.to_json_file(&path).unwrap();
        let loaded = EngineConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }
}
