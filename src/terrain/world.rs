//! The owned world aggregate threaded through the generation pipeline.

use serde::{Deserialize, Serialize};

use super::config::WorldConfig;
use super::grid::Grid;
use crate::peaks::{Peak, PeakPlacement};

/// A generated (or in-progress) world.
///
/// The world is created once per generation run and passed by `&mut` through
/// each pipeline stage; there is no ambient shared state. Once the pipeline
/// finishes, consumers hold it by `&World` and read the grid through its
/// accessors — the borrow rules make interleaved partial reads
/// unrepresentable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Generation parameters this world was built from.
    pub config: WorldConfig,
    /// The tile grid (finished terrain plus the diagnostic noise-only layer).
    pub grid: Grid,
    /// Peak-planning outcome (populated by the peak stage).
    pub placement: PeakPlacement,
}

impl World {
    /// Creates an empty world for the given configuration.
    pub fn new(config: WorldConfig) -> Self {
        let grid = Grid::new(config.width, config.height);
        Self {
            config,
            grid,
            placement: PeakPlacement::default(),
        }
    }

    /// Returns the accepted ridge anchor points, in insertion order.
    pub fn peaks(&self) -> &[Peak] {
        &self.placement.peaks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_creation() {
        let world = World::new(WorldConfig::with_dimensions(20, 10, 7));
        assert_eq!(world.grid.width, 20);
        assert_eq!(world.grid.height, 10);
        assert!(world.peaks().is_empty());
        assert_eq!(world.placement.requested, 0);
    }
}
