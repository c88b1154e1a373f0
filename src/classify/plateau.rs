//! Plateau carving and rim smoothing (classification pass 2).

use crate::fields::TerrainNoise;
use crate::terrain::{Grid, LandType, WorldConfig};

/// Tiles at or below this altitude are never touched by the plateau pass;
/// keeping the floor above sea level preserves water tiles untouched.
pub(crate) const PLATEAU_ALTITUDE_FLOOR: f64 = 0.25;
/// Plateaus are capped below the mountain threshold.
pub(crate) const PLATEAU_ALTITUDE_CEILING: f64 = 0.9;
/// Mask distance from the threshold inside which rim tiles are smoothed.
pub(crate) const EDGE_BAND_WIDTH: f64 = 0.1;

/// Carves plateau candidates toward a regional target height, then softens
/// the plateau rims.
///
/// Candidates are mid-altitude tiles whose independent mask field exceeds
/// `config.plateau_threshold`; the blend strength grows with the threshold
/// excess up to `config.plateau_flatness`. The target height is itself a
/// per-region value in `[plateau_height_base, plateau_height_base +
/// plateau_height_variation]`. Rim smoothing averages tiles near the mask
/// threshold with their 8-neighborhood (from a post-carve snapshot) so
/// plateau boundaries step down gradually. Both steps label affected tiles
/// `Plateaus` and cap altitude at the plateau ceiling.
pub fn plateau_pass(grid: &mut Grid, noise: &TerrainNoise, config: &WorldConfig) {
    let (w, h) = (grid.width, grid.height);

    // Sample the mask once so carving and rim smoothing agree on it.
    let mut mask = vec![0.0f64; w * h];
    for y in 0..h {
        for x in 0..w {
            mask[y * w + x] = noise.plateau_mask(x as f64, y as f64);
        }
    }

    for y in 0..h {
        for x in 0..w {
            let altitude = grid.altitude(x, y);
            if altitude <= PLATEAU_ALTITUDE_FLOOR || altitude >= PLATEAU_ALTITUDE_CEILING {
                continue;
            }
            let value = mask[y * w + x];
            if value <= config.plateau_threshold {
                continue;
            }

            let target = config.plateau_height_base
                + config.plateau_height_variation * noise.plateau_level(x as f64, y as f64);
            let strength = ((value - config.plateau_threshold)
                / (1.0 - config.plateau_threshold))
                .min(config.plateau_flatness);
            let carved =
                (altitude + (target - altitude) * strength).min(PLATEAU_ALTITUDE_CEILING);

            grid.set_altitude(x, y, carved);
            grid.set_land_type(x, y, LandType::Plateaus);
        }
    }

    // Rim smoothing reads a snapshot so the result is independent of
    // iteration order.
    let mut snapshot = vec![0.0f64; w * h];
    for y in 0..h {
        for x in 0..w {
            snapshot[y * w + x] = grid.altitude(x, y);
        }
    }

    for y in 0..h {
        for x in 0..w {
            let altitude = snapshot[y * w + x];
            if altitude <= PLATEAU_ALTITUDE_FLOOR || altitude >= PLATEAU_ALTITUDE_CEILING {
                continue;
            }
            let offset = (mask[y * w + x] - config.plateau_threshold).abs();
            if offset >= EDGE_BAND_WIDTH {
                continue;
            }

            let mut sum = 0.0;
            let mut count = 0.0;
            for (nx, ny) in grid.neighbors_8(x, y) {
                sum += snapshot[ny * w + nx];
                count += 1.0;
            }
            if count == 0.0 {
                continue;
            }

            let closeness = 1.0 - offset / EDGE_BAND_WIDTH;
            let smoothed =
                (altitude + (sum / count - altitude) * closeness).min(PLATEAU_ALTITUDE_CEILING);

            grid.set_altitude(x, y, smoothed);
            grid.set_land_type(x, y, LandType::Plateaus);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_grid(width: usize, height: usize, altitude: f64) -> Grid {
        let mut grid = Grid::new(width, height);
        for y in 0..height {
            for x in 0..width {
                grid.set_altitude(x, y, altitude);
                grid.set_land_type(x, y, LandType::Hills);
            }
        }
        grid
    }

    #[test]
    fn test_water_and_mountains_are_never_touched() {
        let config = WorldConfig::with_seed(11);
        let noise = TerrainNoise::new(config.seed);

        let mut grid = flat_grid(20, 20, 0.5);
        grid.set_altitude(0, 0, -0.3);
        grid.set_land_type(0, 0, LandType::Water);
        grid.set_altitude(1, 0, 1.4);
        grid.set_land_type(1, 0, LandType::Mountains);

        plateau_pass(&mut grid, &noise, &config);

        assert_eq!(grid.altitude(0, 0), -0.3);
        assert_eq!(grid.land_type(0, 0), LandType::Water);
        assert_eq!(grid.altitude(1, 0), 1.4);
        assert_eq!(grid.land_type(1, 0), LandType::Mountains);
    }

    #[test]
    fn test_plateaus_respect_ceiling() {
        let config = WorldConfig::with_seed(23);
        let noise = TerrainNoise::new(config.seed);
        let mut grid = flat_grid(30, 30, 0.85);

        plateau_pass(&mut grid, &noise, &config);

        for (x, y) in grid.coords() {
            if grid.land_type(x, y) == LandType::Plateaus {
                assert!(grid.altitude(x, y) <= PLATEAU_ALTITUDE_CEILING + 1e-12);
            }
        }
    }

    #[test]
    fn test_carving_pulls_toward_regional_target() {
        let mut config = WorldConfig::with_seed(5);
        let noise = TerrainNoise::new(config.seed);
        let mut grid = flat_grid(40, 40, 0.3);

        // Anchor the threshold just below the strongest mask value so that
        // tile is a guaranteed candidate.
        let (mut mx, mut my, mut strongest) = (0, 0, f64::MIN);
        for (x, y) in grid.coords() {
            let value = noise.plateau_mask(x as f64, y as f64);
            if value > strongest {
                (mx, my, strongest) = (x, y, value);
            }
        }
        config.plateau_threshold = strongest - 0.05;

        plateau_pass(&mut grid, &noise, &config);

        // The candidate moved up toward the [0.65, 0.80] target band and was
        // relabeled, staying under the plateau ceiling.
        assert_eq!(grid.land_type(mx, my), LandType::Plateaus);
        let carved = grid.altitude(mx, my);
        assert!(carved > 0.3 && carved <= PLATEAU_ALTITUDE_CEILING);
    }

    #[test]
    fn test_blend_strength_is_capped_by_flatness() {
        let mut config = WorldConfig::with_seed(5);
        config.plateau_flatness = 0.0;
        let noise = TerrainNoise::new(config.seed);

        // With zero flatness the carve blend is a no-op; only rim smoothing
        // may move altitudes, and a uniform grid has nothing to smooth.
        let mut grid = flat_grid(25, 25, 0.5);
        plateau_pass(&mut grid, &noise, &config);

        for (x, y) in grid.coords() {
            assert!((grid.altitude(x, y) - 0.5).abs() < 1e-12);
        }
    }
}
