//! Error types for foreman-crew

use std::path::PathBuf;
use thiserror::Error;

/// Crew configuration and assembly error type
#[derive(Debug, Error)]
pub enum Error {
    /// A task references an agent that is not part of the same assembly
    #[error("task '{task}' references unknown agent '{agent}'. Available agents: {available}")]
    UnknownAgent {
        /// Task naming the reference
        task: String,
        /// The agent name that failed to resolve
        agent: String,
        /// Comma-separated agent names present in the assembly
        available: String,
    },

    /// A crew topology lists a task that is not defined
    #[error("task '{task}' not found in configuration. Available tasks: {available}")]
    UnknownTask {
        /// The task name that failed to resolve
        task: String,
        /// Comma-separated task names present in configuration
        available: String,
    },

    /// The requested crew is not defined
    #[error("crew '{crew}' not found in configuration. Available crews: {available}")]
    UnknownCrew {
        /// The crew name that failed to resolve
        crew: String,
        /// Comma-separated crew names present in configuration
        available: String,
    },

    /// The same agent name is defined more than once
    #[error("duplicate agent definition: '{0}'")]
    DuplicateAgent(String),

    /// The same task name is defined more than once
    #[error("duplicate task definition: '{0}'")]
    DuplicateTask(String),

    /// Configuration file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the offending file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file failed schema validation
    #[error("invalid configuration in {path}: {source}")]
    Parse {
        /// Path of the offending file
        path: PathBuf,
        /// Underlying YAML error
        #[source]
        source: serde_yaml::Error,
    },

    /// LLM client construction failed
    #[error(transparent)]
    Llm(#[from] foreman_llm::Error),

    /// External crew runner reported a failure
    #[error("crew runner error: {0}")]
    Runner(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
