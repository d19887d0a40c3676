//! Orchestrator - the kickoff seam to the external crew runner
//!
//! Scheduling, retries, and agent hand-off all belong to the external
//! runner. This module only defines the hand-off contract: give it an
//! assembly, get back the run's output or its error verbatim. No timeout
//! or cancellation is imposed at this layer.

use crate::descriptor::CrewAssembly;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Output of a single task within a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskOutput {
    /// Task name
    pub task: String,
    /// Raw model output for the task
    pub raw: String,
}

/// Result of one crew run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewOutput {
    /// Final output of the run
    pub raw: String,
    /// Per-task outputs, when the runner reports them
    #[serde(default)]
    pub task_outputs: Vec<TaskOutput>,
}

/// Executes a prepared crew assembly
#[async_trait]
pub trait Orchestrator: Send + Sync {
    /// Run the crew to completion and return its output.
    ///
    /// # Errors
    /// Runner-side failures surface as [`crate::Error::Runner`].
    async fn kickoff(&self, assembly: &CrewAssembly) -> Result<CrewOutput>;
}
