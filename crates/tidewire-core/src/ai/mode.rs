//! AI mode configuration
//!
//! A mode is a user-named AI setup: which provider, which protocol, where to
//! send requests and which secret holds the API key. Users usually name only
//! the provider; `apply_provider_defaults` fills in the rest.

use serde::{Deserialize, Serialize};
use url::Url;

use super::providers::{provider_defaults, ApiType, ProviderId};
use crate::error::ModeError;

/// User-supplied AI mode configuration
///
/// Field keys are part of the persisted config format and must stay stable.
/// An empty string is treated the same as an absent field; anything else,
/// whitespace included, counts as an explicit value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiModeConfig {
    #[serde(rename = "display:name", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Sort key for mode pickers (lower first)
    #[serde(rename = "display:order", default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<f64>,

    #[serde(rename = "ai:provider", default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderId>,

    #[serde(rename = "ai:apitype", default, skip_serializing_if = "Option::is_none")]
    pub api_type: Option<ApiType>,

    #[serde(rename = "ai:model", default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(rename = "ai:endpoint", default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Secret-store key for the API token
    #[serde(
        rename = "ai:apitokensecretname",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub api_token_secret_name: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl AiModeConfig {
    /// Config naming only a provider
    pub fn for_provider(provider: impl Into<ProviderId>) -> Self {
        Self {
            provider: Some(provider.into()),
            ..Self::default()
        }
    }

    /// Builder: set API type
    pub fn with_api_type(mut self, api_type: impl Into<ApiType>) -> Self {
        self.api_type = Some(api_type.into());
        self
    }

    /// Builder: set endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Builder: set model ID
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Builder: set secret name
    pub fn with_secret_name(mut self, secret_name: impl Into<String>) -> Self {
        self.api_token_secret_name = Some(secret_name.into());
        self
    }

    /// Functional form of [`apply_provider_defaults`]
    pub fn with_provider_defaults(mut self) -> Self {
        apply_provider_defaults(&mut self);
        self
    }

    pub fn provider(&self) -> Option<&ProviderId> {
        self.provider.as_ref().filter(|p| !p.is_empty())
    }

    pub fn api_type(&self) -> Option<&ApiType> {
        self.api_type.as_ref().filter(|a| !a.is_empty())
    }

    pub fn endpoint(&self) -> Option<&str> {
        non_empty(&self.endpoint)
    }

    pub fn secret_name(&self) -> Option<&str> {
        non_empty(&self.api_token_secret_name)
    }

    /// True once provider, API type, endpoint and secret name are all set
    pub fn is_fully_resolved(&self) -> bool {
        self.provider().is_some()
            && self.api_type().is_some()
            && self.endpoint().is_some()
            && self.secret_name().is_some()
    }

    /// Check that a resolved mode has what an API client needs
    ///
    /// Built-in providers must end up with all three connection fields.
    /// Other providers must set API type and endpoint themselves; a secret
    /// name is optional for them (local servers often need no key).
    pub fn validate(&self, mode: &str) -> Result<(), ModeError> {
        let provider = self.provider().ok_or_else(|| ModeError::MissingProvider {
            mode: mode.to_string(),
        })?;
        let builtin = provider_defaults(provider).is_some();

        if !builtin && (self.api_type().is_none() || self.endpoint().is_none()) {
            return Err(ModeError::UnknownProvider {
                mode: mode.to_string(),
                provider: provider.as_str().to_string(),
            });
        }

        if self.api_type().is_none() {
            return Err(ModeError::MissingApiType {
                mode: mode.to_string(),
            });
        }

        let endpoint = self.endpoint().ok_or_else(|| ModeError::MissingEndpoint {
            mode: mode.to_string(),
        })?;
        validate_endpoint(mode, endpoint)?;

        let has_secret = self.secret_name().is_some_and(|s| !s.trim().is_empty());
        if builtin && !has_secret {
            return Err(ModeError::MissingSecretName {
                mode: mode.to_string(),
            });
        }

        Ok(())
    }
}

fn validate_endpoint(mode: &str, endpoint: &str) -> Result<(), ModeError> {
    let invalid = |reason: String| ModeError::InvalidEndpoint {
        mode: mode.to_string(),
        endpoint: endpoint.to_string(),
        reason,
    };

    let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme {:?}", other))),
    }
}

/// Fill unset connection fields from the provider's built-in defaults
///
/// Only empty fields are written; explicit values are never replaced and the
/// provider itself is left alone. Providers without a defaults entry (or a
/// missing provider) leave the config untouched. Idempotent.
pub fn apply_provider_defaults(config: &mut AiModeConfig) {
    let Some(defaults) = config.provider().and_then(provider_defaults) else {
        return;
    };

    let mut filled = Vec::new();
    if config.api_type().is_none() {
        config.api_type = Some(defaults.api_type.clone());
        filled.push("api type");
    }
    if config.endpoint().is_none() {
        config.endpoint = Some(defaults.endpoint.to_string());
        filled.push("endpoint");
    }
    if config.secret_name().is_none() {
        config.api_token_secret_name = Some(defaults.secret_name.to_string());
        filled.push("secret name");
    }

    if !filled.is_empty() {
        tracing::debug!(
            provider = defaults.provider.as_str(),
            filled = ?filled,
            "applied provider defaults"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::providers::{GROQ_API_TOKEN_SECRET_NAME, GROQ_CHAT_ENDPOINT};

    #[test]
    fn test_apply_provider_defaults_groq() {
        let mut config = AiModeConfig::for_provider(ProviderId::Groq);
        apply_provider_defaults(&mut config);

        assert_eq!(config.provider, Some(ProviderId::Groq));
        assert_eq!(config.api_type, Some(ApiType::OpenAIChat));
        assert_eq!(config.endpoint.as_deref(), Some(GROQ_CHAT_ENDPOINT));
        assert_eq!(
            config.api_token_secret_name.as_deref(),
            Some(GROQ_API_TOKEN_SECRET_NAME)
        );
        assert!(config.is_fully_resolved());
    }

    #[test]
    fn test_every_builtin_provider_resolves_to_its_table_entry() {
        for id in ProviderId::all() {
            let config = AiModeConfig::for_provider(id.clone()).with_provider_defaults();
            let expected = provider_defaults(id).unwrap();
            assert_eq!(config.api_type.as_ref(), Some(&expected.api_type));
            assert_eq!(config.endpoint(), Some(expected.endpoint));
            assert_eq!(config.secret_name(), Some(expected.secret_name));
        }
    }

    #[test]
    fn test_explicit_fields_are_not_overwritten() {
        let mut config = AiModeConfig::for_provider(ProviderId::Groq)
            .with_endpoint("http://localhost:8080/v1/chat/completions");
        apply_provider_defaults(&mut config);

        // Self-hosted endpoint kept, rest filled in
        assert_eq!(
            config.endpoint(),
            Some("http://localhost:8080/v1/chat/completions")
        );
        assert_eq!(config.api_type, Some(ApiType::OpenAIChat));
        assert_eq!(config.secret_name(), Some(GROQ_API_TOKEN_SECRET_NAME));

        let mut config = AiModeConfig::for_provider(ProviderId::Groq)
            .with_api_type(ApiType::OpenAIResponses)
            .with_secret_name("WORK_GROQ_KEY");
        apply_provider_defaults(&mut config);
        assert_eq!(config.api_type, Some(ApiType::OpenAIResponses));
        assert_eq!(config.secret_name(), Some("WORK_GROQ_KEY"));
        assert_eq!(config.endpoint(), Some(GROQ_CHAT_ENDPOINT));
    }

    #[test]
    fn test_whitespace_values_are_explicit() {
        let mut config = AiModeConfig::for_provider(ProviderId::Groq)
            .with_api_type(" ")
            .with_endpoint("   ")
            .with_secret_name("\t");
        apply_provider_defaults(&mut config);

        assert_eq!(config.api_type, Some(ApiType::Other(" ".to_string())));
        assert_eq!(config.endpoint.as_deref(), Some("   "));
        assert_eq!(config.api_token_secret_name.as_deref(), Some("\t"));

        // Kept as written, but still not usable
        assert!(matches!(
            config.validate("ws").unwrap_err(),
            ModeError::InvalidEndpoint { .. }
        ));
    }

    #[test]
    fn test_empty_strings_count_as_unset() {
        let mut config = AiModeConfig::for_provider(ProviderId::Groq)
            .with_api_type("")
            .with_endpoint("")
            .with_secret_name("");
        apply_provider_defaults(&mut config);
        assert!(config.is_fully_resolved());
        assert_eq!(config.endpoint(), Some(GROQ_CHAT_ENDPOINT));
    }

    #[test]
    fn test_unknown_provider_is_a_no_op() {
        let original = AiModeConfig::for_provider("my-proxy").with_model("llama3");
        let mut config = original.clone();
        apply_provider_defaults(&mut config);
        assert_eq!(config, original);

        let mut empty = AiModeConfig::default();
        apply_provider_defaults(&mut empty);
        assert_eq!(empty, AiModeConfig::default());
    }

    #[test]
    fn test_apply_is_idempotent() {
        let once = AiModeConfig::for_provider(ProviderId::Groq).with_provider_defaults();
        let twice = once.clone().with_provider_defaults();
        assert_eq!(once, twice);

        let partial = AiModeConfig::for_provider(ProviderId::Groq)
            .with_endpoint("https://groq.internal/v1/chat/completions");
        let once = partial.with_provider_defaults();
        assert_eq!(once.clone().with_provider_defaults(), once);
    }

    #[test]
    fn test_persisted_field_names() {
        let config = AiModeConfig::for_provider(ProviderId::Groq).with_provider_defaults();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["ai:provider"], "groq");
        assert_eq!(json["ai:apitype"], "openai-chat");
        assert_eq!(json["ai:endpoint"], GROQ_CHAT_ENDPOINT);
        assert_eq!(json["ai:apitokensecretname"], GROQ_API_TOKEN_SECRET_NAME);
        assert!(json.get("ai:model").is_none());

        let parsed: AiModeConfig = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_validate_resolved_builtin() {
        let config = AiModeConfig::for_provider(ProviderId::Groq).with_provider_defaults();
        assert!(config.validate("groq-fast").is_ok());
    }

    #[test]
    fn test_validate_missing_provider() {
        let err = AiModeConfig::default().validate("empty").unwrap_err();
        assert!(matches!(err, ModeError::MissingProvider { .. }));
        assert_eq!(err.mode(), Some("empty"));
    }

    #[test]
    fn test_validate_unknown_provider() {
        let config = AiModeConfig::for_provider("mystery").with_provider_defaults();
        let err = config.validate("m").unwrap_err();
        assert!(matches!(
            err,
            ModeError::UnknownProvider { ref provider, .. } if provider == "mystery"
        ));

        // Fully user-configured custom provider is fine without a secret
        let custom = AiModeConfig::for_provider("ollama")
            .with_api_type(ApiType::OpenAIChat)
            .with_endpoint("http://localhost:11434/v1/chat/completions");
        assert!(custom.validate("local").is_ok());
    }

    #[test]
    fn test_validate_invalid_endpoint() {
        let config = AiModeConfig::for_provider(ProviderId::Groq)
            .with_endpoint("api.groq.com/openai")
            .with_provider_defaults();
        assert!(matches!(
            config.validate("bad").unwrap_err(),
            ModeError::InvalidEndpoint { .. }
        ));

        let config = AiModeConfig::for_provider(ProviderId::Groq)
            .with_endpoint("ftp://example.com/chat")
            .with_provider_defaults();
        assert!(matches!(
            config.validate("bad").unwrap_err(),
            ModeError::InvalidEndpoint { .. }
        ));
    }

    #[test]
    fn test_validate_missing_fields_without_resolution() {
        let config = AiModeConfig::for_provider(ProviderId::Groq);
        assert!(matches!(
            config.validate("raw").unwrap_err(),
            ModeError::MissingApiType { .. }
        ));

        let config = AiModeConfig::for_provider(ProviderId::Groq)
            .with_api_type(ApiType::OpenAIChat)
            .with_endpoint(GROQ_CHAT_ENDPOINT);
        assert!(matches!(
            config.validate("raw").unwrap_err(),
            ModeError::MissingSecretName { .. }
        ));

        let config = config.with_secret_name("  ");
        assert!(matches!(
            config.validate("raw").unwrap_err(),
            ModeError::MissingSecretName { .. }
        ));
    }
}
