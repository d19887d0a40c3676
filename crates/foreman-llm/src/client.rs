//! Client - the stateless LLM client handle
//!
//! An [`LlmClient`] is pure configuration: a routed model string, the API
//! key that authorizes it, and optional generation defaults. It holds no
//! connection and makes no network call; the external crew runner opens
//! the transport selected by the routed model string.

use crate::provider::Provider;
use crate::util::mask_api_key;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default sampling temperature applied when configuration leaves it unset
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default completion token ceiling applied when configuration leaves it unset
pub const DEFAULT_MAX_TOKENS: u32 = 4000;

/// Stateless handle for one provider/model pair
#[derive(Clone, Serialize, Deserialize)]
pub struct LlmClient {
    /// Vendor this client targets
    pub provider: Provider,
    /// Routed model string, provider prefix already applied
    pub model: String,
    /// API key, serialized only into the runner hand-off payload
    pub api_key: String,
    /// Custom API base URL, when the provider needs one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Sampling temperature
    pub temperature: f32,
    /// Completion token ceiling
    pub max_tokens: u32,
}

impl LlmClient {
    /// Override the sampling temperature
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Override the completion token ceiling
    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

// Manual Debug so the API key never lands in logs in the clear.
impl fmt::Debug for LlmClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmClient")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &mask_api_key(&self.api_key))
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> LlmClient {
        LlmClient {
            provider: Provider::OpenAi,
            model: "gpt-4o".to_string(),
            api_key: "sk-1234567890abcdef".to_string(),
            base_url: None,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    #[test]
    fn test_debug_masks_api_key() {
        let repr = format!("{:?}", client());
        assert!(!repr.contains("sk-1234567890abcdef"));
        assert!(repr.contains("sk-1...cdef"));
    }

    #[test]
    fn test_generation_overrides() {
        let client = client().with_temperature(0.2).with_max_tokens(512);
        assert_eq!(client.temperature, 0.2);
        assert_eq!(client.max_tokens, 512);
    }

    #[test]
    fn test_base_url_omitted_from_payload_when_absent() {
        let json = serde_json::to_value(client()).unwrap();
        assert!(json.get("base_url").is_none());
        assert_eq!(json["model"], "gpt-4o");
    }
}
