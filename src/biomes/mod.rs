//! Declarative biome-compatibility model.
//!
//! Pure configuration data: which land types each biome may occupy, and
//! which biomes may sit next to each other. The generation pipeline never
//! consults these tables — they constrain a future biome-assignment pass,
//! and [`check_assignment`] states that contract in executable form. The
//! adjacency table is symmetric by construction.

use serde::{Deserialize, Serialize};

use crate::terrain::{Grid, LandType};

/// Climate biome layered on top of the land-type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biome {
    Tundra,
    BorealForest,
    TemperateForest,
    Grassland,
    Savanna,
    Desert,
    TropicalRainforest,
    Alpine,
}

impl Biome {
    /// All biomes.
    pub const ALL: [Biome; 8] = [
        Biome::Tundra,
        Biome::BorealForest,
        Biome::TemperateForest,
        Biome::Grassland,
        Biome::Savanna,
        Biome::Desert,
        Biome::TropicalRainforest,
        Biome::Alpine,
    ];

    /// Returns the name of the biome.
    pub fn name(&self) -> &'static str {
        match self {
            Biome::Tundra => "tundra",
            Biome::BorealForest => "boreal forest",
            Biome::TemperateForest => "temperate forest",
            Biome::Grassland => "grassland",
            Biome::Savanna => "savanna",
            Biome::Desert => "desert",
            Biome::TropicalRainforest => "tropical rainforest",
            Biome::Alpine => "alpine",
        }
    }

    /// Land types this biome may legally occupy.
    ///
    /// Water carries no biome at all, so it appears in no table.
    pub fn allowed_land_types(self) -> &'static [LandType] {
        match self {
            Biome::Tundra => &[LandType::Plains, LandType::Hills, LandType::Coastal],
            Biome::BorealForest => &[LandType::Plains, LandType::Hills, LandType::Valleys],
            Biome::TemperateForest => &[
                LandType::Plains,
                LandType::Hills,
                LandType::Valleys,
                LandType::Plateaus,
            ],
            Biome::Grassland => &[LandType::Plains, LandType::Valleys, LandType::Plateaus],
            Biome::Savanna => &[LandType::Plains, LandType::Hills, LandType::Plateaus],
            Biome::Desert => &[LandType::Plains, LandType::Plateaus, LandType::SandDunes],
            Biome::TropicalRainforest => {
                &[LandType::Plains, LandType::Valleys, LandType::Coastal]
            }
            Biome::Alpine => &[LandType::Hills, LandType::Mountains, LandType::Plateaus],
        }
    }

    /// Biomes this biome may be 8-adjacent to (symmetric, includes self).
    pub fn compatible_neighbors(self) -> &'static [Biome] {
        match self {
            Biome::Tundra => &[Biome::Tundra, Biome::BorealForest, Biome::Alpine],
            Biome::BorealForest => &[
                Biome::BorealForest,
                Biome::Tundra,
                Biome::TemperateForest,
                Biome::Alpine,
            ],
            Biome::TemperateForest => &[
                Biome::TemperateForest,
                Biome::BorealForest,
                Biome::Grassland,
            ],
            Biome::Grassland => &[
                Biome::Grassland,
                Biome::TemperateForest,
                Biome::Savanna,
                Biome::Desert,
                Biome::Alpine,
            ],
            Biome::Savanna => &[
                Biome::Savanna,
                Biome::Grassland,
                Biome::Desert,
                Biome::TropicalRainforest,
            ],
            Biome::Desert => &[Biome::Desert, Biome::Grassland, Biome::Savanna],
            Biome::TropicalRainforest => &[Biome::TropicalRainforest, Biome::Savanna],
            Biome::Alpine => &[
                Biome::Alpine,
                Biome::Tundra,
                Biome::BorealForest,
                Biome::Grassland,
            ],
        }
    }

    /// Returns true if this biome may occupy the given land type.
    pub fn permits_land_type(self, land: LandType) -> bool {
        self.allowed_land_types().contains(&land)
    }

    /// Returns true if this biome may sit next to the given biome.
    pub fn permits_neighbor(self, other: Biome) -> bool {
        self.compatible_neighbors().contains(&other)
    }
}

/// One contract violation found by [`check_assignment`].
#[derive(Debug, Clone, PartialEq)]
pub struct CompatibilityViolation {
    pub x: usize,
    pub y: usize,
    pub kind: ViolationKind,
}

/// The two ways an assignment can break the compatibility contract.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationKind {
    /// The tile's biome does not permit the tile's land type.
    DisallowedLandType { biome: Biome, land: LandType },
    /// A neighboring tile carries a biome outside this biome's allow-list.
    IncompatibleNeighbor {
        biome: Biome,
        neighbor: Biome,
        nx: usize,
        ny: usize,
    },
}

/// Validates a biome assignment against both compatibility tables.
///
/// Tiles without a biome are ignored: the contract only binds tiles an
/// assignment pass has populated. Returns every violation found; an empty
/// result means the assignment conforms.
pub fn check_assignment(grid: &Grid) -> Vec<CompatibilityViolation> {
    let mut violations = Vec::new();

    for y in 0..grid.height {
        for x in 0..grid.width {
            let Some(biome) = grid.tile(x, y).biome else {
                continue;
            };

            if !biome.permits_land_type(grid.land_type(x, y)) {
                violations.push(CompatibilityViolation {
                    x,
                    y,
                    kind: ViolationKind::DisallowedLandType {
                        biome,
                        land: grid.land_type(x, y),
                    },
                });
            }

            for (nx, ny) in grid.neighbors_8(x, y) {
                let Some(neighbor) = grid.tile(nx, ny).biome else {
                    continue;
                };
                if !biome.permits_neighbor(neighbor) {
                    violations.push(CompatibilityViolation {
                        x,
                        y,
                        kind: ViolationKind::IncompatibleNeighbor {
                            biome,
                            neighbor,
                            nx,
                            ny,
                        },
                    });
                }
            }
        }
    }

    violations
}
