//! World, grid, and tile data structures.
//!
//! Provides the core World and Grid types the generation pipeline mutates
//! and that downstream consumers read.

mod config;
mod grid;
mod tile;
mod world;

pub use config::WorldConfig;
pub use grid::Grid;
pub use tile::{LandType, Tile};
pub use world::World;
