//! Factory - construct LLM client handles
//!
//! Validates credential presence and applies the provider dispatch tables.
//! Construction is local: no network call is made, so a freshly built
//! client proves only that configuration is complete, not that the key is
//! valid upstream.

use crate::client::{LlmClient, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use crate::credentials::{self, CredentialSource, EnvCredentials};
use crate::error::Result;
use crate::provider::Provider;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// Factory for [`LlmClient`] handles
#[derive(Clone)]
pub struct LlmFactory {
    credentials: Arc<dyn CredentialSource>,
}

impl Default for LlmFactory {
    /// Factory backed by the process environment
    fn default() -> Self {
        Self::new(Arc::new(EnvCredentials))
    }
}

impl LlmFactory {
    /// Create a factory with an explicit credential source
    #[must_use]
    pub fn new(credentials: Arc<dyn CredentialSource>) -> Self {
        Self { credentials }
    }

    /// Build a client for the given provider and model.
    ///
    /// The model id is opaque and passed through to the routed model
    /// string; the credential is re-read from the source on every call.
    ///
    /// # Errors
    /// [`crate::Error::MissingCredential`] when the provider's credential
    /// variable is unset or empty.
    pub fn create_client(&self, provider: Provider, model: &str) -> Result<LlmClient> {
        let api_key = credentials::resolve(self.credentials.as_ref(), provider)?;
        let routed = provider.route_model(model);
        debug!(provider = %provider, model = %routed, "constructed LLM client");

        Ok(LlmClient {
            provider,
            model: routed,
            api_key,
            base_url: provider.base_url().map(str::to_string),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        })
    }

    /// Build a client from a raw provider name.
    ///
    /// # Errors
    /// [`crate::Error::UnsupportedProvider`] for names outside the
    /// supported set, regardless of credential state, plus everything
    /// [`Self::create_client`] returns.
    pub fn create_client_named(&self, provider: &str, model: &str) -> Result<LlmClient> {
        let provider = Provider::from_str(provider)?;
        self.create_client(provider, model)
    }
}

impl std::fmt::Debug for LlmFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmFactory").finish_non_exhaustive()
    }
}
