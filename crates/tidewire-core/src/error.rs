//! AI mode error types

use thiserror::Error;

/// Errors reported when loading or validating AI mode configuration
///
/// Default resolution itself never fails; these surface afterwards, when a
/// mode still lacks something the client needs.
#[derive(Debug, Error)]
pub enum ModeError {
    /// No provider named
    #[error("ai mode {mode:?}: no provider set")]
    MissingProvider { mode: String },

    /// Provider has no built-in defaults and the mode does not fill the gap
    #[error("ai mode {mode:?}: unknown provider {provider:?} (set api type and endpoint explicitly)")]
    UnknownProvider { mode: String, provider: String },

    #[error("ai mode {mode:?}: missing api type")]
    MissingApiType { mode: String },

    #[error("ai mode {mode:?}: missing endpoint")]
    MissingEndpoint { mode: String },

    #[error("ai mode {mode:?}: missing api token secret name")]
    MissingSecretName { mode: String },

    /// Endpoint is not an absolute http(s) URL
    #[error("ai mode {mode:?}: invalid endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint {
        mode: String,
        endpoint: String,
        reason: String,
    },

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse error
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("toml error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl ModeError {
    /// Mode name the error refers to, if any
    pub fn mode(&self) -> Option<&str> {
        match self {
            ModeError::MissingProvider { mode }
            | ModeError::UnknownProvider { mode, .. }
            | ModeError::MissingApiType { mode }
            | ModeError::MissingEndpoint { mode }
            | ModeError::MissingSecretName { mode }
            | ModeError::InvalidEndpoint { mode, .. } => Some(mode.as_str()),
            ModeError::Io(_)
            | ModeError::Json(_)
            | ModeError::Toml(_)
            | ModeError::TomlSer(_) => None,
        }
    }
}
