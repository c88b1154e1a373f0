//! Altitude synthesis: rolling base terrain plus anisotropic ridge ranges.
//!
//! Every tile receives a base altitude from two octaves of coherent noise,
//! then each planned peak adds an elongated ridge contribution on top.
//! Contributions accumulate additively, so overlapping ranges stack; no
//! global clamp is applied unless the configuration asks for one.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::fields::TerrainNoise;
use crate::peaks::Peak;
use crate::terrain::World;

/// Constant offset added to the rolling base terrain.
const BASELINE_OFFSET: f64 = 0.2;
/// Height scale of a single ridge contribution at full intensity.
const BASE_MOUNTAIN_HEIGHT: f64 = 1.5;

/// Distance scale crosswise to the ridge axis.
const RIDGE_NARROW_SCALE: f64 = 0.15;
/// Distance scale lengthwise along the ridge axis.
const RIDGE_LONG_SCALE: f64 = 8.0;
/// Exponent applied to the alignment factor when interpolating the two
/// scales; higher values concentrate the stretch along the axis.
const ALIGNMENT_EXPONENT: f64 = 2.5;

/// Lengthwise falloff bounds: near-full intensity inside the inner bound,
/// linear to zero at the outer bound.
const LENGTH_INNER_BOUND: f64 = 8.5;
const LENGTH_OUTER_BOUND: f64 = 10.5;
/// Crosswise falloff bounds.
const CROSS_INNER_BOUND: f64 = 1.75;
const CROSS_OUTER_BOUND: f64 = 3.75;

/// Fraction of intensity lost across the inner band.
const INNER_BAND_DECAY: f64 = 0.1;
/// Strength of the noise-based height variation along a ridge.
const RIDGE_DETAIL_AMPLITUDE: f64 = 0.15;

/// A peak's ridge axis: anchor point plus deterministic orientation.
#[derive(Debug, Clone)]
pub(crate) struct RidgeAxis {
    origin: DVec2,
    pub(crate) direction: f64,
    cos_dir: f64,
    sin_dir: f64,
}

impl RidgeAxis {
    /// Derives the axis for a peak. The orientation depends only on the
    /// peak's coordinates and the world seed, so the same peak always grows
    /// its range in the same direction.
    pub(crate) fn new(peak: &Peak, seed: u64) -> Self {
        let key = seed
            .wrapping_add(peak.x as u64 * 31)
            .wrapping_add(peak.y as u64 * 131);
        let mut rng = ChaCha8Rng::seed_from_u64(key);
        let direction = rng.random::<f64>() * std::f64::consts::PI;
        Self {
            origin: DVec2::new(peak.x as f64, peak.y as f64),
            direction,
            cos_dir: direction.cos(),
            sin_dir: direction.sin(),
        }
    }
}

/// Fills both altitude layers of the world grid.
///
/// The base layer receives the noise-only terrain; the finished layer
/// receives base plus the sum of all ridge contributions, optionally capped
/// by `config.altitude_clamp`.
pub fn synthesize(world: &mut World) {
    let noise = TerrainNoise::new(world.config.seed);
    let seed = world.config.seed;
    let clamp = world.config.altitude_clamp;
    let ridges: Vec<RidgeAxis> = world
        .peaks()
        .iter()
        .map(|peak| RidgeAxis::new(peak, seed))
        .collect();

    for y in 0..world.grid.height {
        for x in 0..world.grid.width {
            let base = BASELINE_OFFSET + noise.rolling(x as f64, y as f64);
            let mut altitude = base;
            for ridge in &ridges {
                altitude += ridge_contribution(x as f64, y as f64, ridge, &noise);
            }
            if let Some(max) = clamp {
                altitude = altitude.min(max);
            }
            world.grid.set_base_altitude(x, y, base);
            world.grid.set_altitude(x, y, altitude);
        }
    }
}

/// Computes one peak's height contribution at a tile.
pub(crate) fn ridge_contribution(x: f64, y: f64, ridge: &RidgeAxis, noise: &TerrainNoise) -> f64 {
    let offset = DVec2::new(x - ridge.origin.x, y - ridge.origin.y);
    let distance = offset.length();
    if distance < f64::EPSILON {
        // The anchor tile itself: bearing is undefined, intensity is full.
        return BASE_MOUNTAIN_HEIGHT;
    }

    // How closely the tile's bearing from the peak matches the ridge axis:
    // 1 on-axis, 0 perpendicular.
    let bearing = offset.y.atan2(offset.x);
    let alignment = (bearing - ridge.direction).cos().abs();

    // Anisotropic stretch turns the circular bump into an elongated range.
    let stretch = RIDGE_NARROW_SCALE
        + (RIDGE_LONG_SCALE - RIDGE_NARROW_SCALE) * alignment.powf(ALIGNMENT_EXPONENT);

    // Offset in ridge-aligned coordinates.
    let lengthwise = (offset.x * ridge.cos_dir + offset.y * ridge.sin_dir).abs();
    let crosswise = (-offset.x * ridge.sin_dir + offset.y * ridge.cos_dir).abs();

    let length_falloff = band_falloff(lengthwise, LENGTH_INNER_BOUND, LENGTH_OUTER_BOUND);
    let cross_falloff = band_falloff(crosswise, CROSS_INNER_BOUND, CROSS_OUTER_BOUND);
    if length_falloff == 0.0 || cross_falloff == 0.0 {
        return 0.0;
    }

    let stretched = distance / stretch;
    let radial = (-0.5 * stretched * stretched).exp();

    let shaped = radial * length_falloff * cross_falloff;
    let detail = noise.ridge_detail(x, y);
    BASE_MOUNTAIN_HEIGHT * shaped * (1.0 + RIDGE_DETAIL_AMPLITUDE * detail)
}

/// Piecewise band falloff: mild linear decay inside the inner bound, linear
/// to zero between the inner and outer bounds, zero beyond.
fn band_falloff(distance: f64, inner: f64, outer: f64) -> f64 {
    if distance <= inner {
        1.0 - INNER_BAND_DECAY * (distance / inner)
    } else if distance < outer {
        (1.0 - INNER_BAND_DECAY) * (1.0 - (distance - inner) / (outer - inner))
    } else {
        0.0
    }
}
