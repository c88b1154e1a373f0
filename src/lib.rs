//! Procedural terrain synthesis and land classification for a fixed-size
//! colony-world grid.
//!
//! Generation runs as a one-shot, seeded, single-threaded pipeline:
//! well-separated mountain anchors are planned first, altitude is synthesized
//! from layered coherent noise plus anisotropic ridge contributions, and four
//! ordered classification passes turn altitude into discrete land types.
//! A declarative biome-compatibility model ships alongside the pipeline as
//! the contract for a future biome-assignment stage.

pub mod biomes;
pub mod classify;
pub mod export;
pub mod fields;
pub mod height;
pub mod peaks;
pub mod pipeline;
pub mod terrain;

pub use biomes::{check_assignment, Biome};
pub use peaks::{plan_peaks, Peak, PeakPlacement};
pub use pipeline::{
    generate, standard_pipeline, ClassifyStage, GenerationStage, HeightStage, PeakStage, Pipeline,
    PipelineError, StageId,
};
pub use terrain::{Grid, LandType, Tile, World, WorldConfig};
