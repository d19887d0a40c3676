//! CLI module for Foreman
//!
//! Commands:
//! - `agents` / `tasks` / `crews`: list configured entries
//! - `validate`: build every configured crew without running it
//! - `run`: build a crew and kick it off on the external runner

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use foreman_crew::{ConfigStore, CrewBuilder, Orchestrator};
use foreman_llm::LlmFactory;
use std::path::PathBuf;

/// Foreman CLI
#[derive(Parser, Debug)]
#[command(name = "foreman")]
#[command(about = "Configuration-driven crew assembly for LLM agent runs")]
#[command(version)]
pub struct Cli {
    /// Directory holding agents.yaml, tasks.yaml, and crews.yaml
    #[arg(long, default_value = "config", global = true)]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List configured agents
    Agents,
    /// List configured tasks in execution order
    Tasks,
    /// List configured crews
    Crews,
    /// Build every configured crew and report problems without running
    Validate,
    /// Build a crew and kick it off on the external runner
    Run {
        /// Crew name from crews.yaml; omit for the default crew
        crew: Option<String>,
    },
}

/// Run the CLI command
pub async fn run(cli: Cli) -> Result<()> {
    let command = match cli.command {
        Some(command) => command,
        None => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            cmd.print_help()?;
            println!();
            return Ok(());
        }
    };

    let store = ConfigStore::load(&cli.config_dir).with_context(|| {
        format!(
            "failed to load crew configuration from {}",
            cli.config_dir.display()
        )
    })?;

    match command {
        Commands::Agents => {
            for agent in store.agents() {
                println!(
                    "{}  [{} / {}]  {}",
                    agent.name, agent.llm.provider, agent.llm.model, agent.role
                );
            }
        }
        Commands::Tasks => {
            for task in store.tasks() {
                println!("{}  (agent: {})", task.name, task.agent);
            }
        }
        Commands::Crews => {
            for name in store.crew_names() {
                if let Some(crew) = store.crew(name) {
                    println!(
                        "{}  [{}]  {} agents, {} tasks",
                        name,
                        crew.process.as_str(),
                        crew.agents.len(),
                        crew.tasks.len()
                    );
                }
            }
        }
        Commands::Validate => {
            validate(&store)?;
        }
        Commands::Run { crew } => {
            let builder = CrewBuilder::new(store, LlmFactory::default());
            let assembly = match crew.as_deref() {
                Some(name) => builder.build(name)?,
                None => builder.build_default()?,
            };

            let runner = crate::runner::HttpRunner::from_env()?;
            let output = runner.kickoff(&assembly).await?;
            println!("{}", output.raw);
        }
    }

    Ok(())
}

/// Build every configured crew (and the default one) against current
/// credentials, reporting each failure rather than stopping at the first.
fn validate(store: &ConfigStore) -> Result<()> {
    let builder = CrewBuilder::new(store.clone(), LlmFactory::default());
    let mut failures = 0usize;

    match builder.build_default() {
        Ok(assembly) => println!(
            "default: ok ({} agents, {} tasks)",
            assembly.agents.len(),
            assembly.tasks.len()
        ),
        Err(err) => {
            failures += 1;
            eprintln!("default: {err}");
        }
    }

    for name in store.crew_names() {
        match builder.build(name) {
            Ok(assembly) => println!(
                "{name}: ok ({} agents, {} tasks)",
                assembly.agents.len(),
                assembly.tasks.len()
            ),
            Err(err) => {
                failures += 1;
                eprintln!("{name}: {err}");
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} crew(s) failed validation");
    }
    Ok(())
}
