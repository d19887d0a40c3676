//! Credential resolution
//!
//! API keys are looked up through a [`CredentialSource`] so that callers
//! can inject deterministic credentials instead of relying on ambient
//! process state. The production default, [`EnvCredentials`], reads the
//! environment at call time — never cached — so a changed variable takes
//! effect on the next construction.

use crate::error::{Error, Result};
use crate::provider::Provider;
use std::collections::HashMap;

/// Source of provider API keys
pub trait CredentialSource: Send + Sync {
    /// Look up a credential variable by name.
    ///
    /// Returns `None` when the variable is unset. Empty values are treated
    /// as absent by [`resolve`].
    fn get(&self, var: &str) -> Option<String>;
}

/// Resolve the API key for a provider through the given source.
///
/// # Errors
/// Returns [`Error::MissingCredential`] naming the provider's credential
/// variable when it is unset or empty.
pub fn resolve(source: &dyn CredentialSource, provider: Provider) -> Result<String> {
    let var = provider.credential_var();
    match source.get(var) {
        Some(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(Error::MissingCredential {
            var: var.to_string(),
        }),
    }
}

/// Process-environment credential source
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentials;

impl CredentialSource for EnvCredentials {
    fn get(&self, var: &str) -> Option<String> {
        std::env::var(var).ok()
    }
}

/// Map-backed credential source for tests and embedding callers
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    vars: HashMap<String, String>,
}

impl StaticCredentials {
    /// Create an empty source (every lookup misses)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a credential variable
    #[must_use]
    pub fn with(mut self, var: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(var.into(), value.into());
        self
    }
}

impl CredentialSource for StaticCredentials {
    fn get(&self, var: &str) -> Option<String> {
        self.vars.get(var).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_source_resolves() {
        let source = StaticCredentials::new().with("OPENAI_API_KEY", "sk-test");
        let key = resolve(&source, Provider::OpenAi).unwrap();
        assert_eq!(key, "sk-test");
    }

    #[test]
    fn test_missing_credential_names_variable() {
        let source = StaticCredentials::new();
        let err = resolve(&source, Provider::Gemini).unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_empty_credential_counts_as_missing() {
        let source = StaticCredentials::new().with("HUGGINGFACE_API_KEY", "   ");
        let err = resolve(&source, Provider::HuggingFace).unwrap_err();
        assert!(err.to_string().contains("HUGGINGFACE_API_KEY"));
    }
}
