//! Builder - single-pass crew assembly
//!
//! Combines configuration entries with factory-built LLM clients. The
//! build is fail-fast: the first missing credential, unknown reference,
//! or bad provider aborts the whole assembly, so a partial crew is never
//! handed to the runner.

use crate::config::{AgentConfig, ConfigStore, TaskConfig};
use crate::descriptor::{AgentDescriptor, CrewAssembly, Process, TaskDescriptor};
use crate::error::{Error, Result};
use foreman_llm::LlmFactory;
use tracing::{debug, info};

/// Name given to the implicit crew over all configured agents and tasks
pub const DEFAULT_CREW_NAME: &str = "default";

/// Assembles [`CrewAssembly`] values from a [`ConfigStore`]
#[derive(Debug, Clone)]
pub struct CrewBuilder {
    store: ConfigStore,
    factory: LlmFactory,
}

impl CrewBuilder {
    /// Create a builder over loaded configuration
    #[must_use]
    pub fn new(store: ConfigStore, factory: LlmFactory) -> Self {
        Self { store, factory }
    }

    /// The configuration backing this builder
    #[must_use]
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Build the named crew from `crews.yaml`.
    ///
    /// Task order follows the crew's task list.
    ///
    /// # Errors
    /// [`Error::UnknownCrew`] for an undefined crew; otherwise any agent
    /// or task failure aborts the build (no partial assembly).
    pub fn build(&self, crew_name: &str) -> Result<CrewAssembly> {
        let crew = self.store.crew(crew_name).ok_or_else(|| Error::UnknownCrew {
            crew: crew_name.to_string(),
            available: self.store.crew_names().join(", "),
        })?;

        let mut agent_configs = Vec::with_capacity(crew.agents.len());
        for name in &crew.agents {
            // A crew listing an undefined agent reads as a task-side
            // reference problem to the operator; report it the same way.
            let config = self.store.agent(name).ok_or_else(|| Error::UnknownAgent {
                task: crew_name.to_string(),
                agent: name.clone(),
                available: self.store.agent_names().join(", "),
            })?;
            agent_configs.push(config);
        }

        let mut task_configs = Vec::with_capacity(crew.tasks.len());
        for name in &crew.tasks {
            let config = self.store.task(name).ok_or_else(|| Error::UnknownTask {
                task: name.clone(),
                available: self.store.task_names().join(", "),
            })?;
            task_configs.push(config);
        }

        self.assemble(crew_name, &agent_configs, &task_configs, crew.process, crew.verbose)
    }

    /// Build the implicit crew: every agent, every task in `tasks.yaml`
    /// order, sequential process.
    ///
    /// # Errors
    /// Same fail-fast semantics as [`Self::build`].
    pub fn build_default(&self) -> Result<CrewAssembly> {
        let agents: Vec<&AgentConfig> = self.store.agents().iter().collect();
        let tasks: Vec<&TaskConfig> = self.store.tasks().iter().collect();
        self.assemble(DEFAULT_CREW_NAME, &agents, &tasks, Process::Sequential, true)
    }

    fn assemble(
        &self,
        name: &str,
        agent_configs: &[&AgentConfig],
        task_configs: &[&TaskConfig],
        process: Process,
        verbose: bool,
    ) -> Result<CrewAssembly> {
        let mut agents = Vec::with_capacity(agent_configs.len());
        for config in agent_configs {
            let mut llm = self
                .factory
                .create_client(config.llm.provider, &config.llm.model)?;
            if let Some(temperature) = config.llm.temperature {
                llm = llm.with_temperature(temperature);
            }
            if let Some(max_tokens) = config.llm.max_tokens {
                llm = llm.with_max_tokens(max_tokens);
            }
            debug!(agent = %config.name, model = %llm.model, "built agent descriptor");

            agents.push(AgentDescriptor {
                name: config.name.clone(),
                role: config.role.clone(),
                goal: config.goal.clone(),
                backstory: config.backstory.clone(),
                verbose: config.verbose,
                allow_delegation: config.allow_delegation,
                llm,
            });
        }

        let mut tasks = Vec::with_capacity(task_configs.len());
        for config in task_configs {
            if !agents.iter().any(|a| a.name == config.agent) {
                return Err(Error::UnknownAgent {
                    task: config.name.clone(),
                    agent: config.agent.clone(),
                    available: agents
                        .iter()
                        .map(|a| a.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                });
            }
            tasks.push(TaskDescriptor {
                name: config.name.clone(),
                description: config.description.clone(),
                expected_output: config.expected_output.clone(),
                agent: config.agent.clone(),
            });
        }

        info!(
            crew = %name,
            agents = agents.len(),
            tasks = tasks.len(),
            process = %process.as_str(),
            "assembled crew"
        );

        Ok(CrewAssembly {
            name: name.to_string(),
            agents,
            tasks,
            process,
            verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foreman_llm::{Error as LlmError, StaticCredentials};
    use std::sync::Arc;

    const AGENTS: &str = r#"
agents:
  - name: strategist
    role: AI Strategy Architect
    goal: Shape the analysis plan
    backstory: Veteran operations analyst.
    llm:
      provider: openai
      model: gpt-4o
  - name: writer
    role: Content Writer
    goal: Turn findings into prose
    backstory: Former trade journalist.
    llm:
      provider: gemini
      model: gemini-1.5-pro
"#;

    const TASKS: &str = r#"
tasks:
  - name: t1
    description: Analyze the quarter's numbers.
    agent: strategist
    expected_output: A bullet-point analysis.
  - name: t2
    description: Write the management report.
    agent: writer
    expected_output: A two-page report.
"#;

    const CREWS: &str = r#"
reporting:
  agents: [strategist, writer]
  tasks: [t2, t1]
  process: hierarchical
  verbose: false
"#;

    fn builder(crews: Option<&str>, vars: &[(&str, &str)]) -> CrewBuilder {
        let store = ConfigStore::from_yaml(AGENTS, TASKS, crews).unwrap();
        let mut source = StaticCredentials::new();
        for (var, value) in vars {
            source = source.with(*var, *value);
        }
        CrewBuilder::new(store, LlmFactory::new(Arc::new(source)))
    }

    fn all_keys() -> Vec<(&'static str, &'static str)> {
        vec![
            ("OPENAI_API_KEY", "sk-test"),
            ("GEMINI_API_KEY", "AIza-test"),
        ]
    }

    #[test]
    fn test_build_default_preserves_task_file_order() {
        let assembly = builder(None, &all_keys()).build_default().unwrap();
        assert_eq!(assembly.name, DEFAULT_CREW_NAME);
        assert_eq!(assembly.task_order(), vec!["t1", "t2"]);
        assert_eq!(assembly.process, Process::Sequential);
        assert_eq!(assembly.agents.len(), 2);
        // Routed model strings carry the provider prefix convention.
        assert_eq!(assembly.agent("strategist").unwrap().llm.model, "gpt-4o");
        assert_eq!(
            assembly.agent("writer").unwrap().llm.model,
            "gemini/gemini-1.5-pro"
        );
    }

    #[test]
    fn test_build_named_crew_uses_topology_order() {
        let assembly = builder(Some(CREWS), &all_keys()).build("reporting").unwrap();
        assert_eq!(assembly.task_order(), vec!["t2", "t1"]);
        assert_eq!(assembly.process, Process::Hierarchical);
        assert!(!assembly.verbose);
    }

    #[test]
    fn test_unknown_crew_lists_available() {
        let err = builder(Some(CREWS), &all_keys()).build("nightly").unwrap_err();
        match &err {
            Error::UnknownCrew { crew, available } => {
                assert_eq!(crew, "nightly");
                assert_eq!(available, "reporting");
            }
            other => panic!("expected UnknownCrew, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_agent_reference_aborts_build() {
        let tasks = r#"
tasks:
  - name: t1
    description: d
    agent: strategist
    expected_output: o
  - name: t2
    description: d
    agent: ghost
    expected_output: o
"#;
        let store = ConfigStore::from_yaml(AGENTS, tasks, None).unwrap();
        let source = StaticCredentials::new()
            .with("OPENAI_API_KEY", "sk-test")
            .with("GEMINI_API_KEY", "AIza-test");
        let builder = CrewBuilder::new(store, LlmFactory::new(Arc::new(source)));

        let err = builder.build_default().unwrap_err();
        match &err {
            Error::UnknownAgent { task, agent, available } => {
                assert_eq!(task, "t2");
                assert_eq!(agent, "ghost");
                assert!(available.contains("strategist") && available.contains("writer"));
            }
            other => panic!("expected UnknownAgent, got {other:?}"),
        }
    }

    #[test]
    fn test_one_missing_credential_aborts_whole_build() {
        // Only the OpenAI key is set; the writer agent needs Gemini.
        let err = builder(None, &[("OPENAI_API_KEY", "sk-test")])
            .build_default()
            .unwrap_err();
        match &err {
            Error::Llm(LlmError::MissingCredential { var }) => {
                assert_eq!(var, "GEMINI_API_KEY");
            }
            other => panic!("expected MissingCredential, got {other:?}"),
        }
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_generation_overrides_flow_into_client() {
        let agents = r#"
agents:
  - name: strategist
    role: r
    goal: g
    backstory: b
    llm:
      provider: openai
      model: gpt-4o
      temperature: 0.1
      max_tokens: 256
"#;
        let tasks = r#"
tasks:
  - name: t1
    description: d
    agent: strategist
    expected_output: o
"#;
        let store = ConfigStore::from_yaml(agents, tasks, None).unwrap();
        let source = StaticCredentials::new().with("OPENAI_API_KEY", "sk-test");
        let builder = CrewBuilder::new(store, LlmFactory::new(Arc::new(source)));

        let assembly = builder.build_default().unwrap();
        let llm = &assembly.agent("strategist").unwrap().llm;
        assert_eq!(llm.temperature, 0.1);
        assert_eq!(llm.max_tokens, 256);
    }
}
