//! Setup and launch orchestration.

pub mod pipeline;

pub use pipeline::{LaunchPipeline, PipelineOptions, RunOutcome};
