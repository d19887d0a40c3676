//! Provider - supported LLM vendors and their dispatch tables
//!
//! Each provider carries three fixed facts: which environment variable
//! holds its API key, how its model ids are routed, and whether a custom
//! base URL applies. The routing prefix is part of the wire contract with
//! the external crew runner and must not change.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported LLM vendor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// OpenAI (GPT family)
    OpenAi,
    /// Google Gemini
    Gemini,
    /// Hugging Face Inference API
    HuggingFace,
}

/// Hugging Face Inference API endpoint
const HUGGINGFACE_BASE_URL: &str = "https://api.inference.huggingface.co";

impl Provider {
    /// All supported providers, in documentation order
    pub const ALL: &'static [Provider] = &[Self::OpenAi, Self::Gemini, Self::HuggingFace];

    /// Returns the lowercase string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Gemini => "gemini",
            Self::HuggingFace => "huggingface",
        }
    }

    /// Environment variable holding this provider's API key
    #[must_use]
    pub fn credential_var(&self) -> &'static str {
        match self {
            Self::OpenAi => "OPENAI_API_KEY",
            Self::Gemini => "GEMINI_API_KEY",
            Self::HuggingFace => "HUGGINGFACE_API_KEY",
        }
    }

    /// Routed model string the downstream runner uses to pick a transport.
    ///
    /// OpenAI model ids pass through verbatim; Gemini and Hugging Face ids
    /// are namespaced with a provider prefix.
    #[must_use]
    pub fn route_model(&self, model: &str) -> String {
        match self {
            Self::OpenAi => model.to_string(),
            Self::Gemini => format!("gemini/{model}"),
            Self::HuggingFace => format!("huggingface/{model}"),
        }
    }

    /// Custom API base URL, when the provider needs one
    #[must_use]
    pub fn base_url(&self) -> Option<&'static str> {
        match self {
            Self::HuggingFace => Some(HUGGINGFACE_BASE_URL),
            Self::OpenAi | Self::Gemini => None,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = Error;

    /// Parses a provider name, tolerating case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "gemini" => Ok(Self::Gemini),
            "huggingface" => Ok(Self::HuggingFace),
            other => Err(Error::UnsupportedProvider(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_providers() {
        assert_eq!("openai".parse::<Provider>().unwrap(), Provider::OpenAi);
        assert_eq!("gemini".parse::<Provider>().unwrap(), Provider::Gemini);
        assert_eq!(
            "huggingface".parse::<Provider>().unwrap(),
            Provider::HuggingFace
        );
        // Case and whitespace are tolerated
        assert_eq!(" OpenAI ".parse::<Provider>().unwrap(), Provider::OpenAi);
    }

    #[test]
    fn test_parse_unknown_provider_names_value() {
        let err = "mistral".parse::<Provider>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("mistral"));
        assert!(msg.contains("openai, gemini, huggingface"));
    }

    #[test]
    fn test_route_model_prefixes() {
        assert_eq!(Provider::OpenAi.route_model("gpt-4o"), "gpt-4o");
        assert_eq!(
            Provider::Gemini.route_model("gemini-1.5-pro"),
            "gemini/gemini-1.5-pro"
        );
        assert_eq!(
            Provider::HuggingFace.route_model("meta-llama/Llama-3.1-8B"),
            "huggingface/meta-llama/Llama-3.1-8B"
        );
    }

    #[test]
    fn test_credential_vars() {
        assert_eq!(Provider::OpenAi.credential_var(), "OPENAI_API_KEY");
        assert_eq!(Provider::Gemini.credential_var(), "GEMINI_API_KEY");
        assert_eq!(
            Provider::HuggingFace.credential_var(),
            "HUGGINGFACE_API_KEY"
        );
    }

    #[test]
    fn test_base_urls() {
        assert_eq!(Provider::OpenAi.base_url(), None);
        assert_eq!(Provider::Gemini.base_url(), None);
        assert_eq!(
            Provider::HuggingFace.base_url(),
            Some("https://api.inference.huggingface.co")
        );
    }

    #[test]
    fn test_serde_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&Provider::OpenAi).unwrap(),
            "\"openai\""
        );
        let p: Provider = serde_json::from_str("\"huggingface\"").unwrap();
        assert_eq!(p, Provider::HuggingFace);
    }
}
