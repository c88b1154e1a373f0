//! Generation stage trait and pipeline orchestration.

use thiserror::Error;

use crate::classify::classify;
use crate::height::synthesize;
use crate::peaks::plan_peaks;
use crate::terrain::World;

/// Unique identifier for generation stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageId {
    /// Mountain-range anchor planning.
    Peaks,
    /// Altitude synthesis (base noise + ridges).
    Height,
    /// Multi-pass land-type classification.
    Classify,
}

impl StageId {
    /// Returns the name of the stage.
    pub fn name(&self) -> &'static str {
        match self {
            StageId::Peaks => "peaks",
            StageId::Height => "height",
            StageId::Classify => "classify",
        }
    }
}

/// Errors that can occur during pipeline execution.
///
/// The built-in stages are total functions over the world and never fail;
/// these variants exist for mis-wired pipelines and for external stages.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Stage '{0}' failed: {1}")]
    StageFailed(String, String),
    #[error("Missing dependency: stage '{0}' requires '{1}'")]
    MissingDependency(String, String),
}

/// Trait for implementing generation stages.
///
/// Each stage mutates the world in place, building on the stages it
/// declares as dependencies. Making the ordering a declared contract keeps
/// the overwrite-wins-last-pass rule explicit rather than an accident of
/// call order.
pub trait GenerationStage {
    /// Returns the unique identifier for this stage.
    fn id(&self) -> StageId;

    /// Returns a human-readable name for the stage.
    fn name(&self) -> &str;

    /// Returns the stage IDs that must run before this stage.
    fn dependencies(&self) -> &[StageId] {
        &[]
    }

    /// Executes the stage, mutating the world in place.
    fn execute(&self, world: &mut World) -> Result<(), PipelineError>;
}

/// Orchestrates generation stages into a complete pipeline.
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn GenerationStage>>,
}

impl Pipeline {
    /// Creates a new empty pipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Adds a stage to the pipeline.
    pub fn add_stage<S: GenerationStage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Returns the number of stages in the pipeline.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Executes all stages in order on the given world.
    pub fn run(&self, world: &mut World) -> Result<(), PipelineError> {
        self.run_with_callbacks(world, |_, _, _| {}, |_, _, _| {})
    }

    /// Executes all stages with progress callbacks.
    ///
    /// # Arguments
    /// * `world` - The world to generate
    /// * `on_stage_start` - Called when each stage begins
    /// * `on_stage_complete` - Called when each stage finishes
    pub fn run_with_callbacks<F1, F2>(
        &self,
        world: &mut World,
        mut on_stage_start: F1,
        mut on_stage_complete: F2,
    ) -> Result<(), PipelineError>
    where
        F1: FnMut(&str, usize, usize),
        F2: FnMut(&str, usize, usize),
    {
        let total = self.stages.len();
        let mut completed: Vec<StageId> = Vec::new();

        for (i, stage) in self.stages.iter().enumerate() {
            on_stage_start(stage.name(), i, total);

            for dep in stage.dependencies() {
                if !completed.contains(dep) {
                    return Err(PipelineError::MissingDependency(
                        stage.name().to_string(),
                        dep.name().to_string(),
                    ));
                }
            }

            stage.execute(world)?;
            completed.push(stage.id());

            on_stage_complete(stage.name(), i, total);
        }

        Ok(())
    }
}

/// Peak planning stage.
pub struct PeakStage;

impl GenerationStage for PeakStage {
    fn id(&self) -> StageId {
        StageId::Peaks
    }

    fn name(&self) -> &str {
        "Peak Planning"
    }

    fn execute(&self, world: &mut World) -> Result<(), PipelineError> {
        world.placement = plan_peaks(&world.config);
        Ok(())
    }
}

/// Altitude synthesis stage.
pub struct HeightStage;

impl GenerationStage for HeightStage {
    fn id(&self) -> StageId {
        StageId::Height
    }

    fn name(&self) -> &str {
        "Height Synthesis"
    }

    fn dependencies(&self) -> &[StageId] {
        &[StageId::Peaks]
    }

    fn execute(&self, world: &mut World) -> Result<(), PipelineError> {
        synthesize(world);
        Ok(())
    }
}

/// Land-classification stage.
pub struct ClassifyStage;

impl GenerationStage for ClassifyStage {
    fn id(&self) -> StageId {
        StageId::Classify
    }

    fn name(&self) -> &str {
        "Land Classification"
    }

    fn dependencies(&self) -> &[StageId] {
        &[StageId::Height]
    }

    fn execute(&self, world: &mut World) -> Result<(), PipelineError> {
        classify(world);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::WorldConfig;

    #[test]
    fn test_stage_id_name() {
        assert_eq!(StageId::Peaks.name(), "peaks");
        assert_eq!(StageId::Height.name(), "height");
        assert_eq!(StageId::Classify.name(), "classify");
    }

    #[test]
    fn test_missing_dependency_is_rejected() {
        let mut pipeline = Pipeline::new();
        pipeline.add_stage(HeightStage);

        let mut world = World::new(WorldConfig::with_seed(1));
        let err = pipeline.run(&mut world).unwrap_err();
        assert!(matches!(err, PipelineError::MissingDependency(_, _)));
    }

    #[test]
    fn test_pipeline_with_callbacks() {
        let mut pipeline = Pipeline::new();
        pipeline.add_stage(PeakStage);

        let mut world = World::new(WorldConfig::with_seed(1));
        let mut started = false;
        let mut completed = false;

        pipeline
            .run_with_callbacks(
                &mut world,
                |name, _, _| {
                    assert_eq!(name, "Peak Planning");
                    started = true;
                },
                |name, _, _| {
                    assert_eq!(name, "Peak Planning");
                    completed = true;
                },
            )
            .unwrap();

        assert!(started);
        assert!(completed);
        assert!(!world.peaks().is_empty());
    }

    #[test]
    fn test_stage_count() {
        let mut pipeline = Pipeline::new();
        assert_eq!(pipeline.stage_count(), 0);
        pipeline.add_stage(PeakStage).add_stage(HeightStage);
        assert_eq!(pipeline.stage_count(), 2);
    }
}
