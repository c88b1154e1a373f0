//! Configuration for world generation.

use serde::{Deserialize, Serialize};

/// Configuration parameters for a full generation run.
///
/// Defaults match the reference colony world: a 50x50 grid with up to four
/// mountain ranges. All thresholds are expressed in the same unit-less
/// altitude scale the synthesizer produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Grid width in tiles.
    pub width: usize,
    /// Grid height in tiles.
    pub height: usize,
    /// Master random seed for reproducible generation.
    pub seed: u64,

    /// Inset from every grid edge inside which peaks may be placed, so
    /// ridges are never truncated by the boundary.
    pub edge_buffer: usize,
    /// Upper bound on the number of planned peaks.
    pub max_peaks: usize,
    /// Proposal budget per peak after the first; exhausting it skips the peak.
    pub placement_attempts: usize,
    /// Minimum Euclidean distance between any two accepted peaks (tiles).
    pub min_peak_separation: f64,

    /// Plateau-mask value above which a tile becomes a plateau candidate.
    pub plateau_threshold: f64,
    /// Lower end of the regional plateau target height.
    pub plateau_height_base: f64,
    /// Span of the regional plateau target height above its base.
    pub plateau_height_variation: f64,
    /// Cap on the blend strength toward the plateau target height.
    pub plateau_flatness: f64,

    /// Mean neighborhood altitude difference below which a tile reads as a
    /// valley (negative: the tile sits lower than its surroundings).
    pub valley_gradient_threshold: f64,
    /// Tiles at or above this altitude are never relabeled as valleys.
    pub valley_max_altitude: f64,

    /// Optional ceiling applied to the synthesized altitude. Off by default:
    /// stacked ridge contributions are allowed to exceed the mountain
    /// threshold so tall ranges read as very mountainous.
    pub altitude_clamp: Option<f64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            seed: 42,
            edge_buffer: 8,
            max_peaks: 4,
            placement_attempts: 20,
            min_peak_separation: 20.0,
            plateau_threshold: 0.58,
            plateau_height_base: 0.65,
            plateau_height_variation: 0.15,
            plateau_flatness: 0.85,
            valley_gradient_threshold: -0.05,
            valley_max_altitude: 0.7,
            altitude_clamp: None,
        }
    }
}

impl WorldConfig {
    /// Creates a configuration with the given seed and default tunables.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Creates a configuration with the given dimensions and seed.
    pub fn with_dimensions(width: usize, height: usize, seed: u64) -> Self {
        Self {
            width,
            height,
            seed,
            ..Default::default()
        }
    }

    /// Returns the number of tiles in the configured grid.
    pub fn tile_count(&self) -> usize {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WorldConfig::default();
        assert_eq!(config.width, 50);
        assert_eq!(config.height, 50);
        assert_eq!(config.edge_buffer, 8);
        assert_eq!(config.max_peaks, 4);
        assert!((config.min_peak_separation - 20.0).abs() < 1e-9);
        assert!(config.altitude_clamp.is_none());
    }

    #[test]
    fn test_with_seed() {
        let config = WorldConfig::with_seed(123);
        assert_eq!(config.seed, 123);
        assert_eq!(config.width, 50);
    }

    #[test]
    fn test_with_dimensions() {
        let config = WorldConfig::with_dimensions(80, 60, 7);
        assert_eq!(config.width, 80);
        assert_eq!(config.height, 60);
        assert_eq!(config.tile_count(), 4800);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = WorldConfig::with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let back: WorldConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, 99);
        assert_eq!(back.width, config.width);
        assert!((back.plateau_threshold - config.plateau_threshold).abs() < 1e-12);
    }
}
