//! AI mode layer
//!
//! Provider identities, their built-in defaults, and the per-mode
//! configuration record those defaults are applied to.

pub mod mode;
pub mod providers;

pub use mode::{apply_provider_defaults, AiModeConfig};
pub use providers::{builtin_defaults, provider_defaults, ApiType, ProviderDefaults, ProviderId};
