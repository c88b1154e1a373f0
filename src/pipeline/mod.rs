//! World-generation pipeline.
//!
//! Wires the peak, height, and classification stages into the standard
//! generation sequence and exposes [`generate`] as the one-call entry point.

mod stage;

pub use stage::{
    ClassifyStage, GenerationStage, HeightStage, PeakStage, Pipeline, PipelineError, StageId,
};

use crate::terrain::{World, WorldConfig};

/// Builds the standard three-stage pipeline: peaks, height, classification.
pub fn standard_pipeline() -> Pipeline {
    let mut pipeline = Pipeline::new();
    pipeline
        .add_stage(PeakStage)
        .add_stage(HeightStage)
        .add_stage(ClassifyStage);
    pipeline
}

/// Generates a complete world from the given configuration.
///
/// One-shot, synchronous, single-threaded: the call returns only once every
/// stage has run to completion, after which the world can be shared
/// read-only with any number of consumers.
pub fn generate(config: WorldConfig) -> Result<World, PipelineError> {
    let mut world = World::new(config);
    standard_pipeline().run(&mut world)?;
    Ok(world)
}
