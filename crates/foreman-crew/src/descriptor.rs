//! Descriptors - the transient output of a crew build
//!
//! Descriptors live for one orchestration run: built, serialized into the
//! runner hand-off, then dropped. Nothing here is shared across runs.

use foreman_llm::LlmClient;
use serde::{Deserialize, Serialize};

/// Execution process for a crew
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Process {
    /// Tasks run one after another in configuration order
    #[default]
    Sequential,
    /// A manager model delegates tasks across the crew
    Hierarchical,
}

impl Process {
    /// Returns the lowercase string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Hierarchical => "hierarchical",
        }
    }
}

/// A fully-constructed agent: persona plus a ready LLM client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentDescriptor {
    /// Agent name, the reference key for tasks
    pub name: String,
    /// Role/title of the agent
    pub role: String,
    /// Goal the agent should achieve
    pub goal: String,
    /// Backstory/context for the agent
    pub backstory: String,
    /// Whether the runner should log this agent's steps
    pub verbose: bool,
    /// Whether the agent may delegate to other agents
    pub allow_delegation: bool,
    /// Constructed LLM client handle
    pub llm: LlmClient,
}

/// A task bound to an agent by name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDescriptor {
    /// Task name
    pub name: String,
    /// Detailed description of the work
    pub description: String,
    /// Description of the expected output format
    pub expected_output: String,
    /// Name of the assigned agent; always present in the same assembly
    pub agent: String,
}

/// A complete crew prepared for one orchestration run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewAssembly {
    /// Crew name (`default` for the implicit all-tasks crew)
    pub name: String,
    /// Agents in the crew
    pub agents: Vec<AgentDescriptor>,
    /// Tasks in execution order
    pub tasks: Vec<TaskDescriptor>,
    /// Execution process
    pub process: Process,
    /// Whether the runner should log crew progress
    pub verbose: bool,
}

impl CrewAssembly {
    /// Look up an agent of the assembly by name
    #[must_use]
    pub fn agent(&self, name: &str) -> Option<&AgentDescriptor> {
        self.agents.iter().find(|a| a.name == name)
    }

    /// Task names in execution order
    #[must_use]
    pub fn task_order(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_default_and_names() {
        assert_eq!(Process::default(), Process::Sequential);
        assert_eq!(Process::Sequential.as_str(), "sequential");
        assert_eq!(Process::Hierarchical.as_str(), "hierarchical");
    }

    #[test]
    fn test_process_serde_roundtrip() {
        let p: Process = serde_yaml::from_str("hierarchical").unwrap();
        assert_eq!(p, Process::Hierarchical);
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"hierarchical\"");
    }
}
