//! Fixed-size tile grid with a diagnostic noise-only layer.

use serde::{Deserialize, Serialize};

use super::tile::{LandType, Tile};

/// The world grid: two parallel tile matrices in row-major order.
///
/// The primary matrix holds the finished terrain (ridges, plateaus, labels);
/// the base matrix holds the raw noise-only altitude and is kept solely for
/// diagnostic display. Out-of-bounds access is a programming defect and
/// panics; it is never a recoverable condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Grid width in tiles.
    pub width: usize,
    /// Grid height in tiles.
    pub height: usize,
    tiles: Vec<Tile>,
    base_tiles: Vec<Tile>,
}

impl Grid {
    /// Creates a grid of the given dimensions with default (water) tiles.
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            tiles: vec![Tile::default(); size],
            base_tiles: vec![Tile::default(); size],
        }
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    /// Returns the tile at the given coordinate.
    pub fn tile(&self, x: usize, y: usize) -> &Tile {
        &self.tiles[self.index(x, y)]
    }

    /// Returns a mutable reference to the tile at the given coordinate.
    pub fn tile_mut(&mut self, x: usize, y: usize) -> &mut Tile {
        let i = self.index(x, y);
        &mut self.tiles[i]
    }

    /// Returns the noise-only tile at the given coordinate.
    pub fn base_tile(&self, x: usize, y: usize) -> &Tile {
        &self.base_tiles[self.index(x, y)]
    }

    /// Returns the finished altitude at the given coordinate.
    pub fn altitude(&self, x: usize, y: usize) -> f64 {
        self.tiles[self.index(x, y)].altitude
    }

    /// Sets the finished altitude at the given coordinate.
    pub fn set_altitude(&mut self, x: usize, y: usize, altitude: f64) {
        let i = self.index(x, y);
        self.tiles[i].altitude = altitude;
    }

    /// Returns the noise-only altitude at the given coordinate.
    pub fn base_altitude(&self, x: usize, y: usize) -> f64 {
        self.base_tiles[self.index(x, y)].altitude
    }

    /// Sets the noise-only altitude at the given coordinate.
    pub fn set_base_altitude(&mut self, x: usize, y: usize, altitude: f64) {
        let i = self.index(x, y);
        self.base_tiles[i].altitude = altitude;
    }

    /// Returns the land type at the given coordinate.
    pub fn land_type(&self, x: usize, y: usize) -> LandType {
        self.tiles[self.index(x, y)].land_type
    }

    /// Sets the land type at the given coordinate.
    pub fn set_land_type(&mut self, x: usize, y: usize, land: LandType) {
        let i = self.index(x, y);
        self.tiles[i].land_type = land;
    }

    /// Returns all finished tiles in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Returns an iterator over all (x, y) tile coordinates.
    pub fn coords(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// Returns an iterator over the in-bounds 8-neighborhood of a tile.
    ///
    /// Border tiles yield fewer than eight neighbors; the grid does not wrap.
    pub fn neighbors_8(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        const OFFSETS: [(i32, i32); 8] = [
            (-1, -1),
            (0, -1),
            (1, -1),
            (-1, 0),
            (1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
        ];
        let (w, h) = (self.width as i32, self.height as i32);
        let (cx, cy) = (x as i32, y as i32);
        OFFSETS.iter().filter_map(move |&(dx, dy)| {
            let nx = cx + dx;
            let ny = cy + dy;
            (nx >= 0 && ny >= 0 && nx < w && ny < h).then_some((nx as usize, ny as usize))
        })
    }

    /// Computes the (min, max) finished altitude across the grid.
    pub fn altitude_range(&self) -> (f64, f64) {
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for tile in &self.tiles {
            min = min.min(tile.altitude);
            max = max.max(tile.altitude);
        }
        (min, max)
    }

    /// Computes the (min, max) noise-only altitude across the grid.
    pub fn base_altitude_range(&self) -> (f64, f64) {
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for tile in &self.base_tiles {
            min = min.min(tile.altitude);
            max = max.max(tile.altitude);
        }
        (min, max)
    }

    /// Counts tiles carrying the given land type.
    pub fn count_land_type(&self, land: LandType) -> usize {
        self.tiles.iter().filter(|t| t.land_type == land).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(10, 6);
        assert_eq!(grid.width, 10);
        assert_eq!(grid.height, 6);
        assert_eq!(grid.tiles().len(), 60);
        assert!(grid.tiles().iter().all(|t| t.land_type == LandType::Water));
    }

    #[test]
    fn test_get_set_altitude() {
        let mut grid = Grid::new(8, 8);
        grid.set_altitude(3, 5, 0.42);
        grid.set_base_altitude(3, 5, 0.17);
        assert_eq!(grid.altitude(3, 5), 0.42);
        assert_eq!(grid.base_altitude(3, 5), 0.17);
        // The two layers are independent.
        assert_eq!(grid.altitude(5, 3), 0.0);
    }

    #[test]
    fn test_coords_iterates_row_major() {
        let grid = Grid::new(3, 2);
        let coords: Vec<_> = grid.coords().collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_neighbors_8_interior_and_corner() {
        let grid = Grid::new(5, 5);
        assert_eq!(grid.neighbors_8(2, 2).count(), 8);
        assert_eq!(grid.neighbors_8(0, 0).count(), 3);
        assert_eq!(grid.neighbors_8(4, 2).count(), 5);

        let corner: Vec<_> = grid.neighbors_8(0, 0).collect();
        assert!(corner.contains(&(1, 0)));
        assert!(corner.contains(&(0, 1)));
        assert!(corner.contains(&(1, 1)));
    }

    #[test]
    fn test_altitude_range() {
        let mut grid = Grid::new(4, 4);
        grid.set_altitude(0, 0, -0.5);
        grid.set_altitude(3, 3, 1.5);
        let (min, max) = grid.altitude_range();
        assert_eq!(min, -0.5);
        assert_eq!(max, 1.5);
    }

    #[test]
    fn test_count_land_type() {
        let mut grid = Grid::new(3, 3);
        grid.set_land_type(1, 1, LandType::Mountains);
        grid.set_land_type(2, 2, LandType::Mountains);
        assert_eq!(grid.count_land_type(LandType::Mountains), 2);
        assert_eq!(grid.count_land_type(LandType::Water), 7);
    }
}
