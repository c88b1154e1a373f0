//! Seeded coherent-noise fields for terrain synthesis and classification.
//!
//! Each generation concern samples its own gradient-noise field, derived from
//! the master seed with a fixed per-field offset, so the fields are mutually
//! independent yet fully reproducible. Sampling is scalar `f64` per tile:
//! runs with the same seed produce bit-identical values on every platform.

use noise::{NoiseFn, Perlin};

/// Spatial frequency of the broad base-terrain octave.
const BROAD_FREQUENCY: f64 = 0.055;
/// Amplitude of the broad base-terrain octave.
const BROAD_AMPLITUDE: f64 = 0.9;
/// Spatial frequency of the fine base-terrain octave.
const FINE_FREQUENCY: f64 = 0.18;
/// Amplitude of the fine base-terrain octave.
const FINE_AMPLITUDE: f64 = 0.25;
/// Spatial frequency of the ridge height-variation field.
const RIDGE_DETAIL_FREQUENCY: f64 = 0.3;
/// Spatial frequency of the plateau candidate mask.
const PLATEAU_MASK_FREQUENCY: f64 = 0.12;
/// Spatial frequency of the regional plateau target-height field.
const PLATEAU_LEVEL_FREQUENCY: f64 = 0.045;

/// The set of independent noise fields used by one generation run.
#[derive(Debug, Clone)]
pub struct TerrainNoise {
    broad: Perlin,
    fine: Perlin,
    ridge_detail: Perlin,
    plateau_mask: Perlin,
    plateau_level: Perlin,
}

impl TerrainNoise {
    /// Creates the field set for the given 64-bit seed.
    pub fn new(seed: u64) -> Self {
        let base = fold_seed(seed);
        Self {
            broad: Perlin::new(base),
            fine: Perlin::new(base.wrapping_add(1111)),
            ridge_detail: Perlin::new(base.wrapping_add(2222)),
            plateau_mask: Perlin::new(base.wrapping_add(3333)),
            plateau_level: Perlin::new(base.wrapping_add(4444)),
        }
    }

    /// Samples the two-octave rolling base terrain (no baseline offset).
    ///
    /// One broad and one fine octave at different spatial frequencies; the
    /// result is roughly within ±(broad + fine) amplitude.
    pub fn rolling(&self, x: f64, y: f64) -> f64 {
        BROAD_AMPLITUDE * self.broad.get([x * BROAD_FREQUENCY, y * BROAD_FREQUENCY])
            + FINE_AMPLITUDE * self.fine.get([x * FINE_FREQUENCY, y * FINE_FREQUENCY])
    }

    /// Samples the ridge height-variation field in [-1, 1].
    pub fn ridge_detail(&self, x: f64, y: f64) -> f64 {
        self.ridge_detail
            .get([x * RIDGE_DETAIL_FREQUENCY, y * RIDGE_DETAIL_FREQUENCY])
    }

    /// Samples the plateau candidate mask, remapped to [0, 1].
    pub fn plateau_mask(&self, x: f64, y: f64) -> f64 {
        let value = self
            .plateau_mask
            .get([x * PLATEAU_MASK_FREQUENCY, y * PLATEAU_MASK_FREQUENCY]);
        0.5 * (value + 1.0)
    }

    /// Samples the regional plateau target-height field, remapped to [0, 1].
    pub fn plateau_level(&self, x: f64, y: f64) -> f64 {
        let value = self
            .plateau_level
            .get([x * PLATEAU_LEVEL_FREQUENCY, y * PLATEAU_LEVEL_FREQUENCY]);
        0.5 * (value + 1.0)
    }
}

/// Folds a 64-bit seed into the 32-bit seed space the noise source accepts.
fn fold_seed(seed: u64) -> u32 {
    (seed ^ (seed >> 32)) as u32
}
