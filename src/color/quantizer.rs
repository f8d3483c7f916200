//! Dominant color extraction by k-means clustering
//!
//! Clusters RGB pixels into a small number of representative colors:
//! - k-means++ seeding from a fixed-seed RNG, so results are reproducible
//! - Lloyd refinement until assignments stop changing or an iteration cap
//! - Several restarts, keeping the partition with the lowest inertia
//!
//! Algorithm tag: `algo-kmeans-dominant-color`

use palette::Srgb;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::trace;

use crate::constants::analysis::{CLUSTER_COUNT, CLUSTER_SEED, MAX_ITERATIONS};
use crate::{EngineError, Result};

/// Number of independent k-means runs per quantization
const DEFAULT_RESTARTS: usize = 10;

/// One color cluster found in an image
#[derive(Debug, Clone, PartialEq)]
pub struct ColorCluster {
    /// Mean RGB of the cluster members
    pub centroid: [f64; 3],
    /// Number of pixels assigned to this cluster
    pub pixel_count: usize,
}

impl ColorCluster {
    /// Centroid truncated to integer channels
    pub fn color(&self) -> Srgb<u8> {
        let [r, g, b] = self.centroid;
        Srgb::new(truncate_channel(r), truncate_channel(g), truncate_channel(b))
    }
}

/// A dominant color with its share of the image
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DominantColor {
    pub srgb: Srgb<u8>,
    pub pixel_count: usize,
    /// Fraction of analyzed pixels in this cluster (0.0-1.0)
    pub share: f32,
}

impl DominantColor {
    /// Hexadecimal color representation (e.g. "#1E3A8A")
    pub fn hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            self.srgb.red, self.srgb.green, self.srgb.blue
        )
    }
}

/// Seeded k-means color quantizer
#[derive(Debug, Clone)]
pub struct ColorQuantizer {
    cluster_count: usize,
    seed: u64,
    max_iterations: usize,
    restarts: usize,
}

impl Default for ColorQuantizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorQuantizer {
    /// Create a quantizer with the standard parameters (k = 5, seed 42)
    pub fn new() -> Self {
        Self {
            cluster_count: CLUSTER_COUNT,
            seed: CLUSTER_SEED,
            max_iterations: MAX_ITERATIONS,
            restarts: DEFAULT_RESTARTS,
        }
    }

    /// Create a quantizer with custom parameters
    pub fn with_params(cluster_count: usize, seed: u64, max_iterations: usize, restarts: usize) -> Self {
        Self {
            cluster_count,
            seed,
            max_iterations,
            restarts: restarts.max(1),
        }
    }

    /// Cluster pixels into at most `cluster_count` colors.
    ///
    /// Fewer clusters are returned when the image has fewer distinct colors.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::DecodeFailure` if `pixels` is empty or the
    /// cluster count is zero.
    pub fn quantize(&self, pixels: &[[u8; 3]]) -> Result<Vec<ColorCluster>> {
        if pixels.is_empty() {
            return Err(EngineError::decode_msg("No pixels to cluster"));
        }
        if self.cluster_count == 0 {
            return Err(EngineError::decode_msg("Cluster count must be positive"));
        }

        let points: Vec<[f64; 3]> = pixels
            .iter()
            .map(|p| [p[0] as f64, p[1] as f64, p[2] as f64])
            .collect();

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut best: Option<(f64, Vec<[f64; 3]>, Vec<usize>)> = None;

        for run in 0..self.restarts {
            let mut centroids = self.seed_centroids(&points, &mut rng);
            let mut labels = vec![usize::MAX; points.len()];

            let mut iterations = 0;
            while iterations < self.max_iterations {
                if !assign(&points, &centroids, &mut labels) {
                    break;
                }
                update(&points, &labels, &mut centroids);
                iterations += 1;
            }
            assign(&points, &centroids, &mut labels);

            let inertia = inertia(&points, &centroids, &labels);
            trace!(run, iterations, inertia, "k-means run finished");

            if best.as_ref().map_or(true, |(best_inertia, _, _)| inertia < *best_inertia) {
                best = Some((inertia, centroids, labels));
            }
        }

        let (_, centroids, labels) =
            best.ok_or_else(|| EngineError::decode_msg("k-means produced no result"))?;

        let mut counts = vec![0usize; centroids.len()];
        for label in &labels {
            counts[*label] += 1;
        }

        if centroids.iter().flatten().any(|c| !c.is_finite()) {
            return Err(EngineError::decode_msg("Non-finite cluster centroid"));
        }

        Ok(centroids
            .into_iter()
            .zip(counts)
            .map(|(centroid, pixel_count)| ColorCluster {
                centroid,
                pixel_count,
            })
            .collect())
    }

    /// k-means++ seeding: spread initial centroids proportionally to D²
    fn seed_centroids(&self, points: &[[f64; 3]], rng: &mut StdRng) -> Vec<[f64; 3]> {
        let mut centroids = Vec::with_capacity(self.cluster_count);
        centroids.push(points[rng.gen_range(0..points.len())]);

        let mut nearest: Vec<f64> = points
            .iter()
            .map(|p| squared_distance(p, &centroids[0]))
            .collect();

        while centroids.len() < self.cluster_count {
            let total: f64 = nearest.iter().sum();
            if total <= 0.0 {
                // Every point already coincides with a centroid
                break;
            }

            let target = rng.gen::<f64>() * total;
            let mut cumulative = 0.0;
            let mut chosen = points.len() - 1;
            for (i, weight) in nearest.iter().enumerate() {
                cumulative += weight;
                if cumulative >= target && *weight > 0.0 {
                    chosen = i;
                    break;
                }
            }

            let centroid = points[chosen];
            for (distance, point) in nearest.iter_mut().zip(points) {
                *distance = distance.min(squared_distance(point, &centroid));
            }
            centroids.push(centroid);
        }

        centroids
    }
}

/// Assign each point to its nearest centroid; returns true if any label changed
fn assign(points: &[[f64; 3]], centroids: &[[f64; 3]], labels: &mut [usize]) -> bool {
    let mut changed = false;
    for (point, label) in points.iter().zip(labels.iter_mut()) {
        let nearest = nearest_centroid(point, centroids);
        if *label != nearest {
            *label = nearest;
            changed = true;
        }
    }
    changed
}

/// Move each centroid to the mean of its members; empty clusters stay put
fn update(points: &[[f64; 3]], labels: &[usize], centroids: &mut [[f64; 3]]) {
    let mut sums = vec![[0.0f64; 3]; centroids.len()];
    let mut counts = vec![0usize; centroids.len()];

    for (point, label) in points.iter().zip(labels) {
        for channel in 0..3 {
            sums[*label][channel] += point[channel];
        }
        counts[*label] += 1;
    }

    for ((centroid, sum), count) in centroids.iter_mut().zip(&sums).zip(&counts) {
        if *count > 0 {
            for channel in 0..3 {
                centroid[channel] = sum[channel] / *count as f64;
            }
        }
    }
}

fn inertia(points: &[[f64; 3]], centroids: &[[f64; 3]], labels: &[usize]) -> f64 {
    points
        .iter()
        .zip(labels)
        .map(|(point, label)| squared_distance(point, &centroids[*label]))
        .sum()
}

fn nearest_centroid(point: &[f64; 3], centroids: &[[f64; 3]]) -> usize {
    let mut nearest = 0;
    let mut min_distance = f64::INFINITY;
    for (i, centroid) in centroids.iter().enumerate() {
        let distance = squared_distance(point, centroid);
        if distance < min_distance {
            min_distance = distance;
            nearest = i;
        }
    }
    nearest
}

fn squared_distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    (0..3).map(|c| (a[c] - b[c]) * (a[c] - b[c])).sum()
}

fn truncate_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}
