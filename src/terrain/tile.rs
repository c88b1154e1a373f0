//! Tile and land-type definitions.

use serde::{Deserialize, Serialize};

use crate::biomes::Biome;

/// Discrete terrain classification for a single tile.
///
/// Every tile carries exactly one land type at any time; later classifier
/// passes may overwrite the label assigned by earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandType {
    Water,
    Plains,
    Hills,
    Mountains,
    Valleys,
    Plateaus,
    Coastal,
    SandDunes,
}

impl LandType {
    /// All land types, in legend order.
    pub const ALL: [LandType; 8] = [
        LandType::Water,
        LandType::Plains,
        LandType::Hills,
        LandType::Mountains,
        LandType::Valleys,
        LandType::Plateaus,
        LandType::Coastal,
        LandType::SandDunes,
    ];

    /// Returns the name of the land type.
    pub fn name(&self) -> &'static str {
        match self {
            LandType::Water => "water",
            LandType::Plains => "plains",
            LandType::Hills => "hills",
            LandType::Mountains => "mountains",
            LandType::Valleys => "valleys",
            LandType::Plateaus => "plateaus",
            LandType::Coastal => "coastal",
            LandType::SandDunes => "sand dunes",
        }
    }
}

/// A single cell of the world grid.
///
/// `altitude` is unit-less and carries no hard clamp; stacked ridge
/// contributions may push it past the nominal working range. `biome` is an
/// extension point: the generation pipeline never populates it, a future
/// assignment pass does (see [`crate::biomes`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub altitude: f64,
    pub land_type: LandType,
    pub biome: Option<Biome>,
}

impl Default for Tile {
    fn default() -> Self {
        Self {
            altitude: 0.0,
            land_type: LandType::Water,
            biome: None,
        }
    }
}
