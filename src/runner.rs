//! Runner - HTTP hand-off to the external crew runner
//!
//! Foreman prepares assemblies; the runner service executes them. This
//! gateway POSTs the serialized assembly to the runner's kickoff endpoint
//! and relays the result or error verbatim. No retry or timeout is added
//! here; the runner owns run-time behavior.

use async_trait::async_trait;
use foreman_crew::{CrewAssembly, CrewOutput, Error, Orchestrator, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

/// Environment variable naming the runner's base URL
pub const RUNNER_URL_VAR: &str = "FOREMAN_RUNNER_URL";

/// Environment variable holding the optional runner API key
pub const RUNNER_API_KEY_VAR: &str = "FOREMAN_RUNNER_API_KEY";

#[derive(Debug, Deserialize)]
struct RunnerError {
    error: String,
}

/// HTTP gateway to the external crew runner
#[derive(Debug)]
pub struct HttpRunner {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpRunner {
    /// Create a gateway for the given base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: None,
        }
    }

    /// Attach a bearer API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Build a gateway from `FOREMAN_RUNNER_URL` and (optionally)
    /// `FOREMAN_RUNNER_API_KEY`.
    ///
    /// # Errors
    /// Fails when the URL variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(RUNNER_URL_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| Error::Runner(format!("{RUNNER_URL_VAR} is not set")))?;

        let mut runner = Self::new(base_url);
        if let Ok(api_key) = std::env::var(RUNNER_API_KEY_VAR) {
            if !api_key.trim().is_empty() {
                runner = runner.with_api_key(api_key);
            }
        }
        Ok(runner)
    }

    fn kickoff_url(&self) -> String {
        format!("{}/v1/crews/kickoff", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Orchestrator for HttpRunner {
    async fn kickoff(&self, assembly: &CrewAssembly) -> Result<CrewOutput> {
        let url = self.kickoff_url();
        debug!(crew = %assembly.name, %url, "handing assembly to crew runner");

        let mut request = self.client.post(&url).json(assembly);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Runner(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<RunnerError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(Error::Runner(format!("runner returned {status}: {detail}")));
        }

        let output: CrewOutput = response
            .json()
            .await
            .map_err(|e| Error::Runner(format!("invalid runner response: {e}")))?;

        info!(crew = %assembly.name, "crew run completed");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kickoff_url_normalizes_trailing_slash() {
        let runner = HttpRunner::new("http://localhost:8700/");
        assert_eq!(runner.kickoff_url(), "http://localhost:8700/v1/crews/kickoff");

        let runner = HttpRunner::new("http://localhost:8700");
        assert_eq!(runner.kickoff_url(), "http://localhost:8700/v1/crews/kickoff");
    }

    #[test]
    fn test_from_env_requires_url() {
        // Isolate from any ambient value.
        std::env::remove_var(RUNNER_URL_VAR);
        let err = HttpRunner::from_env().unwrap_err();
        assert!(err.to_string().contains(RUNNER_URL_VAR));
    }
}
