//! Color analysis module
//!
//! This module handles dominant color extraction by clustering and the
//! mapping of raw RGB values onto the named wardrobe palette.

pub mod classifier;
pub mod quantizer;

pub use classifier::ColorClassifier;
pub use quantizer::{ColorCluster, ColorQuantizer, DominantColor};
