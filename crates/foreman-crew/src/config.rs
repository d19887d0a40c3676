//! Configuration store
//!
//! Three declarative files describe a deployment:
//! - `agents.yaml` — personas and their provider/model bindings
//! - `tasks.yaml` — work items, each assigned to one agent by name
//! - `crews.yaml` — optional named topologies over the two sets
//!
//! Files are parsed into strongly-typed structs with unknown fields
//! rejected, so malformed entries fail here instead of deep inside crew
//! assembly. Sequence order in `tasks.yaml` is the execution order for
//! the default crew; `crews.yaml` task lists carry their own order.
//! Duplicate agent or task names are a load error.

use crate::error::{Error, Result};
use foreman_llm::Provider;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

fn default_true() -> bool {
    true
}

/// Provider/model binding for an agent
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlmConfig {
    /// Provider name (openai, gemini, huggingface)
    pub provider: Provider,
    /// Model id, passed through to the provider's routing convention
    pub model: String,
    /// Sampling temperature override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Completion token ceiling override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// One agent persona definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Unique agent name, referenced by tasks and crews
    pub name: String,
    /// Role/title of the agent
    pub role: String,
    /// Goal the agent should achieve
    pub goal: String,
    /// Backstory/context for the agent
    pub backstory: String,
    /// Whether the runner should log this agent's steps
    #[serde(default = "default_true")]
    pub verbose: bool,
    /// Whether the agent may delegate to other agents
    #[serde(default)]
    pub allow_delegation: bool,
    /// Provider/model binding
    pub llm: LlmConfig,
}

/// One task definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskConfig {
    /// Unique task name, referenced by crews
    pub name: String,
    /// Detailed description of the work
    pub description: String,
    /// Name of the agent assigned to this task
    pub agent: String,
    /// Description of the expected output format
    pub expected_output: String,
}

/// Named crew topology
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrewConfig {
    /// Agent names included in this crew
    pub agents: Vec<String>,
    /// Task names in execution order
    pub tasks: Vec<String>,
    /// Execution process
    #[serde(default)]
    pub process: crate::descriptor::Process,
    /// Whether the runner should log crew progress
    #[serde(default = "default_true")]
    pub verbose: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AgentsFile {
    agents: Vec<AgentConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TasksFile {
    tasks: Vec<TaskConfig>,
}

/// Loaded, validated configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    agents: Vec<AgentConfig>,
    tasks: Vec<TaskConfig>,
    crews: HashMap<String, CrewConfig>,
    crew_order: Vec<String>,
}

impl ConfigStore {
    /// Load `agents.yaml`, `tasks.yaml`, and (optionally) `crews.yaml`
    /// from a directory.
    ///
    /// # Errors
    /// IO and schema errors name the offending file; duplicate agent or
    /// task names fail the load.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();

        let agents_path = dir.join("agents.yaml");
        let agents: AgentsFile = read_yaml(&agents_path)?;

        let tasks_path = dir.join("tasks.yaml");
        let tasks: TasksFile = read_yaml(&tasks_path)?;

        let crews_path = dir.join("crews.yaml");
        let crews: HashMap<String, CrewConfig> = if crews_path.exists() {
            read_yaml(&crews_path)?
        } else {
            warn!(path = %crews_path.display(), "crews.yaml not found, only the default crew is available");
            HashMap::new()
        };

        let store = Self::from_parts(agents.agents, tasks.tasks, crews)?;
        info!(
            agents = store.agents.len(),
            tasks = store.tasks.len(),
            crews = store.crews.len(),
            "loaded crew configuration"
        );
        Ok(store)
    }

    /// Assemble a store from already-parsed definitions.
    ///
    /// # Errors
    /// Fails on duplicate agent or task names.
    pub fn from_parts(
        agents: Vec<AgentConfig>,
        tasks: Vec<TaskConfig>,
        crews: HashMap<String, CrewConfig>,
    ) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for agent in &agents {
            if !seen.insert(agent.name.clone()) {
                return Err(Error::DuplicateAgent(agent.name.clone()));
            }
        }

        let mut seen = std::collections::HashSet::new();
        for task in &tasks {
            if !seen.insert(task.name.clone()) {
                return Err(Error::DuplicateTask(task.name.clone()));
            }
        }

        let mut crew_order: Vec<String> = crews.keys().cloned().collect();
        crew_order.sort();

        Ok(Self {
            agents,
            tasks,
            crews,
            crew_order,
        })
    }

    /// Parse a store from YAML strings (tests and embedding callers).
    ///
    /// # Errors
    /// Schema errors are attributed to synthetic file names.
    pub fn from_yaml(agents: &str, tasks: &str, crews: Option<&str>) -> Result<Self> {
        let agents: AgentsFile = parse_yaml("agents.yaml", agents)?;
        let tasks: TasksFile = parse_yaml("tasks.yaml", tasks)?;
        let crews = match crews {
            Some(raw) => parse_yaml("crews.yaml", raw)?,
            None => HashMap::new(),
        };
        Self::from_parts(agents.agents, tasks.tasks, crews)
    }

    /// Look up an agent definition by name
    #[must_use]
    pub fn agent(&self, name: &str) -> Option<&AgentConfig> {
        self.agents.iter().find(|a| a.name == name)
    }

    /// Look up a task definition by name
    #[must_use]
    pub fn task(&self, name: &str) -> Option<&TaskConfig> {
        self.tasks.iter().find(|t| t.name == name)
    }

    /// Look up a crew topology by name
    #[must_use]
    pub fn crew(&self, name: &str) -> Option<&CrewConfig> {
        self.crews.get(name)
    }

    /// All agent definitions, in file order
    #[must_use]
    pub fn agents(&self) -> &[AgentConfig] {
        &self.agents
    }

    /// All task definitions, in file (execution) order
    #[must_use]
    pub fn tasks(&self) -> &[TaskConfig] {
        &self.tasks
    }

    /// Defined agent names, in file order
    #[must_use]
    pub fn agent_names(&self) -> Vec<&str> {
        self.agents.iter().map(|a| a.name.as_str()).collect()
    }

    /// Defined task names, in file order
    #[must_use]
    pub fn task_names(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.name.as_str()).collect()
    }

    /// Defined crew names, sorted
    #[must_use]
    pub fn crew_names(&self) -> Vec<&str> {
        self.crew_order.iter().map(String::as_str).collect()
    }
}

fn read_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&raw).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_yaml<T: serde::de::DeserializeOwned>(name: &str, raw: &str) -> Result<T> {
    serde_yaml::from_str(raw).map_err(|source| Error::Parse {
        path: name.into(),
        source,
    })
}
