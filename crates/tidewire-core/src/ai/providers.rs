//! AI provider identities and default connection settings
//!
//! Defines provider and API protocol identifiers plus the built-in table of
//! per-provider defaults (API type, endpoint, secret name).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::constants::providers as defaults;

/// Identifier for an AI provider
///
/// Unrecognized names are kept verbatim in `Other` so they survive a
/// load/save round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProviderId {
    Groq,
    Other(String),
}

impl ProviderId {
    /// Providers with a built-in defaults entry
    pub fn all() -> &'static [ProviderId] {
        &[ProviderId::Groq]
    }

    /// Persisted name (e.g. "groq")
    pub fn as_str(&self) -> &str {
        match self {
            ProviderId::Groq => "groq",
            ProviderId::Other(name) => name,
        }
    }

    /// True for an `Other` holding the empty string
    pub fn is_empty(&self) -> bool {
        matches!(self, ProviderId::Other(name) if name.is_empty())
    }
}

impl From<&str> for ProviderId {
    fn from(name: &str) -> Self {
        match name {
            "groq" => ProviderId::Groq,
            other => ProviderId::Other(other.to_string()),
        }
    }
}

impl From<String> for ProviderId {
    fn from(name: String) -> Self {
        match ProviderId::from(name.as_str()) {
            ProviderId::Other(_) => ProviderId::Other(name),
            known => known,
        }
    }
}

impl From<ProviderId> for String {
    fn from(id: ProviderId) -> Self {
        match id {
            ProviderId::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderId::Groq => write!(f, "Groq"),
            ProviderId::Other(name) => write!(f, "{}", name),
        }
    }
}

/// Wire protocol family spoken by a provider endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApiType {
    /// OpenAI Chat Completions (/v1/chat/completions)
    OpenAIChat,
    /// OpenAI Responses (/v1/responses)
    OpenAIResponses,
    /// Anthropic Messages (/v1/messages)
    AnthropicMessages,
    /// Google Gemini (/v1beta/models/{model})
    GoogleGemini,
    Other(String),
}

impl ApiType {
    pub fn as_str(&self) -> &str {
        match self {
            ApiType::OpenAIChat => "openai-chat",
            ApiType::OpenAIResponses => "openai-responses",
            ApiType::AnthropicMessages => "anthropic-messages",
            ApiType::GoogleGemini => "google-gemini",
            ApiType::Other(name) => name,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ApiType::Other(name) if name.is_empty())
    }
}

impl From<&str> for ApiType {
    fn from(name: &str) -> Self {
        match name {
            "openai-chat" => ApiType::OpenAIChat,
            "openai-responses" => ApiType::OpenAIResponses,
            "anthropic-messages" => ApiType::AnthropicMessages,
            "google-gemini" => ApiType::GoogleGemini,
            other => ApiType::Other(other.to_string()),
        }
    }
}

impl From<String> for ApiType {
    fn from(name: String) -> Self {
        match ApiType::from(name.as_str()) {
            ApiType::Other(_) => ApiType::Other(name),
            known => known,
        }
    }
}

impl From<ApiType> for String {
    fn from(api_type: ApiType) -> Self {
        match api_type {
            ApiType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ApiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Default connection settings for a built-in provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderDefaults {
    pub provider: ProviderId,
    pub api_type: ApiType,
    /// Absolute endpoint URL
    pub endpoint: &'static str,
    /// Secret-store key for the API token (never the token itself)
    pub secret_name: &'static str,
}

/// Lazily initialized built-in defaults, read-only after first access
static PROVIDER_DEFAULTS: LazyLock<Vec<ProviderDefaults>> = LazyLock::new(|| {
    vec![
        // Groq - OpenAI-compatible chat endpoint under /openai/v1
        ProviderDefaults {
            provider: ProviderId::Groq,
            api_type: ApiType::OpenAIChat,
            endpoint: defaults::GROQ_CHAT_ENDPOINT,
            secret_name: defaults::GROQ_API_TOKEN_SECRET_NAME,
        },
    ]
});

/// All built-in provider defaults (cached, no allocation)
pub fn builtin_defaults() -> &'static [ProviderDefaults] {
    &PROVIDER_DEFAULTS
}

/// Defaults for a provider, or None if it has no built-in entry
pub fn provider_defaults(id: &ProviderId) -> Option<&'static ProviderDefaults> {
    PROVIDER_DEFAULTS.iter().find(|d| &d.provider == id)
}
