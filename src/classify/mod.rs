//! Multi-pass land-type classification.
//!
//! Four ordered, mutating passes over the grid: altitude thresholding,
//! plateau carving, valley detection, coastal detection. Later passes may
//! overwrite labels assigned by earlier ones — last pass wins is the
//! explicit conflict policy, encoded by the call order in [`classify`].

mod plateau;

pub use plateau::plateau_pass;

use crate::fields::TerrainNoise;
use crate::terrain::{Grid, LandType, World, WorldConfig};

/// Altitude at or below which a tile is water.
pub(crate) const WATER_LEVEL: f64 = 0.0;
/// Altitude below which land reads as plains.
pub(crate) const PLAINS_CEILING: f64 = 0.3;
/// Altitude at or above which a tile is mountains.
pub(crate) const MOUNTAIN_FLOOR: f64 = 1.0;

/// Runs all four classification passes in order.
pub fn classify(world: &mut World) {
    let noise = TerrainNoise::new(world.config.seed);
    let config = world.config.clone();

    threshold_pass(&mut world.grid);
    plateau_pass(&mut world.grid, &noise, &config);
    valley_pass(&mut world.grid, &config);
    coastal_pass(&mut world.grid);
}

/// Maps an altitude to its base land type.
///
/// The upper hills band doubles as foothills in some renderers but carries
/// the same label.
pub(crate) fn land_type_for_altitude(altitude: f64) -> LandType {
    if altitude <= WATER_LEVEL {
        LandType::Water
    } else if altitude < PLAINS_CEILING {
        LandType::Plains
    } else if altitude < MOUNTAIN_FLOOR {
        LandType::Hills
    } else {
        LandType::Mountains
    }
}

/// Pass 1: pure altitude thresholding, no neighbor lookups.
pub fn threshold_pass(grid: &mut Grid) {
    for y in 0..grid.height {
        for x in 0..grid.width {
            let land = land_type_for_altitude(grid.altitude(x, y));
            grid.set_land_type(x, y, land);
        }
    }
}

/// Pass 3: relabels depressions as valleys.
///
/// A tile is a valley when it sits measurably below the mean of its
/// 8-neighborhood, is not water, lies below the valley altitude cap, and was
/// not already carved into a plateau.
pub fn valley_pass(grid: &mut Grid, config: &WorldConfig) {
    for y in 0..grid.height {
        for x in 0..grid.width {
            let altitude = grid.altitude(x, y);
            if altitude <= WATER_LEVEL || altitude >= config.valley_max_altitude {
                continue;
            }
            if grid.land_type(x, y) == LandType::Plateaus {
                continue;
            }

            let mut sum = 0.0;
            let mut count = 0.0;
            for (nx, ny) in grid.neighbors_8(x, y) {
                sum += altitude - grid.altitude(nx, ny);
                count += 1.0;
            }
            if count == 0.0 {
                continue;
            }

            if sum / count < config.valley_gradient_threshold {
                grid.set_land_type(x, y, LandType::Valleys);
            }
        }
    }
}

/// Pass 4: relabels land bordering water as coastal.
///
/// Runs last and overwrites plateau and valley labels; mountains and water
/// itself are never coastal.
pub fn coastal_pass(grid: &mut Grid) {
    for y in 0..grid.height {
        for x in 0..grid.width {
            let altitude = grid.altitude(x, y);
            if altitude <= WATER_LEVEL || altitude >= MOUNTAIN_FLOOR {
                continue;
            }
            let borders_water = grid
                .neighbors_8(x, y)
                .any(|(nx, ny)| grid.altitude(nx, ny) <= WATER_LEVEL);
            if borders_water {
                grid.set_land_type(x, y, LandType::Coastal);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a grid with uniform altitude and one forced tile.
    fn grid_with_center(size: usize, fill: f64, center: f64) -> Grid {
        let mut grid = Grid::new(size, size);
        for y in 0..size {
            for x in 0..size {
                grid.set_altitude(x, y, fill);
            }
        }
        let mid = size / 2;
        grid.set_altitude(mid, mid, center);
        grid
    }

    #[test]
    fn test_threshold_table_edges() {
        assert_eq!(land_type_for_altitude(-0.4), LandType::Water);
        assert_eq!(land_type_for_altitude(0.0), LandType::Water);
        assert_eq!(land_type_for_altitude(0.15), LandType::Plains);
        assert_eq!(land_type_for_altitude(0.3), LandType::Hills);
        assert_eq!(land_type_for_altitude(0.85), LandType::Hills);
        assert_eq!(land_type_for_altitude(1.0), LandType::Mountains);
        assert_eq!(land_type_for_altitude(2.7), LandType::Mountains);
    }

    #[test]
    fn test_valley_pass_detects_depressions() {
        let config = WorldConfig::default();
        let mut grid = grid_with_center(5, 0.5, 0.35);
        threshold_pass(&mut grid);
        valley_pass(&mut grid, &config);

        assert_eq!(grid.land_type(2, 2), LandType::Valleys);
        assert_eq!(grid.land_type(1, 1), LandType::Hills);
    }

    #[test]
    fn test_valley_pass_skips_high_ground_and_plateaus() {
        let config = WorldConfig::default();

        // Same depression shape but above the valley altitude cap.
        let mut grid = grid_with_center(5, 0.95, 0.8);
        threshold_pass(&mut grid);
        valley_pass(&mut grid, &config);
        assert_eq!(grid.land_type(2, 2), LandType::Hills);

        // A carved plateau keeps its label even when it sits low.
        let mut grid = grid_with_center(5, 0.5, 0.35);
        threshold_pass(&mut grid);
        grid.set_land_type(2, 2, LandType::Plateaus);
        valley_pass(&mut grid, &config);
        assert_eq!(grid.land_type(2, 2), LandType::Plateaus);
    }

    #[test]
    fn test_coastal_pass_rings_water() {
        let mut grid = grid_with_center(5, 0.5, -0.2);
        threshold_pass(&mut grid);
        coastal_pass(&mut grid);

        assert_eq!(grid.land_type(2, 2), LandType::Water);
        for (nx, ny) in [(1, 1), (2, 1), (3, 1), (1, 2), (3, 2), (1, 3), (2, 3), (3, 3)] {
            assert_eq!(grid.land_type(nx, ny), LandType::Coastal);
        }
        assert_eq!(grid.land_type(0, 0), LandType::Hills);
    }

    #[test]
    fn test_coastal_pass_never_labels_mountains_or_water() {
        let mut grid = grid_with_center(3, 1.3, -0.1);
        threshold_pass(&mut grid);
        coastal_pass(&mut grid);

        assert_eq!(grid.land_type(1, 1), LandType::Water);
        assert_eq!(grid.land_type(0, 0), LandType::Mountains);
    }

    #[test]
    fn test_overwrite_order_coastal_wins() {
        // One water tile at the center of a hills-range grid: after the full
        // pass sequence its up-to-8 neighbors must all read coastal, even if
        // an earlier pass had relabeled one of them.
        let config = WorldConfig::default();
        let noise = TerrainNoise::new(config.seed);
        let mut grid = grid_with_center(5, 0.5, -0.2);

        threshold_pass(&mut grid);
        plateau_pass(&mut grid, &noise, &config);
        valley_pass(&mut grid, &config);
        coastal_pass(&mut grid);

        assert_eq!(grid.land_type(2, 2), LandType::Water);
        let mut coastal = 0;
        for (x, y) in grid.coords() {
            let near_center =
                (x as i32 - 2).abs() <= 1 && (y as i32 - 2).abs() <= 1 && (x, y) != (2, 2);
            if near_center {
                assert_eq!(grid.land_type(x, y), LandType::Coastal);
                coastal += 1;
            } else {
                assert_ne!(grid.land_type(x, y), LandType::Coastal);
            }
        }
        assert_eq!(coastal, 8);
    }

    #[test]
    fn test_water_tiles_are_never_relabeled() {
        let config = WorldConfig::default();
        let noise = TerrainNoise::new(config.seed);

        let mut grid = Grid::new(9, 9);
        for (i, (x, y)) in grid.coords().collect::<Vec<_>>().into_iter().enumerate() {
            // Alternating water and mid-altitude land.
            let altitude = if i % 3 == 0 { -0.25 } else { 0.45 };
            grid.set_altitude(x, y, altitude);
        }

        threshold_pass(&mut grid);
        plateau_pass(&mut grid, &noise, &config);
        valley_pass(&mut grid, &config);
        coastal_pass(&mut grid);

        for (x, y) in grid.coords() {
            if grid.altitude(x, y) <= WATER_LEVEL {
                assert_eq!(grid.land_type(x, y), LandType::Water);
            }
        }
    }
}
