//! Foreman Crew - declarative crew assembly
//!
//! This crate reads agent, task, and crew topology definitions from YAML
//! and assembles them into a [`CrewAssembly`] ready to hand to the
//! external crew runner:
//! - Config: strongly-typed configuration store (agents.yaml, tasks.yaml,
//!   crews.yaml)
//! - Builder: single-pass, fail-fast assembly with referential checks
//! - Orchestrator: the kickoff seam to the external runner
//!
//! Assembly is synchronous and shares nothing between invocations; every
//! build re-reads credentials through the factory it was given.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod builder;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod orchestrator;

pub use builder::CrewBuilder;
pub use config::{AgentConfig, ConfigStore, CrewConfig, LlmConfig, TaskConfig};
pub use descriptor::{AgentDescriptor, CrewAssembly, Process, TaskDescriptor};
pub use error::{Error, Result};
pub use orchestrator::{CrewOutput, Orchestrator, TaskOutput};
