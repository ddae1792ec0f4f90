//! tidewire core - input normalization for AI modes and pseudo-terminals
//!
//! This crate provides:
//! - Built-in AI provider defaults and fill-if-absent resolution of AI modes
//! - Validation and file storage for named AI modes
//! - Clamping of application terminal sizes into pty window sizes

pub mod ai;
pub mod constants;
pub mod error;
pub mod paths;
pub mod pty;
pub mod storage;

// Re-exports for convenience
pub use ai::{apply_provider_defaults, AiModeConfig, ApiType, ProviderId};
pub use error::ModeError;
pub use pty::{winsize_from_term_size, TermSize, Winsize};
pub use storage::ModeStore;
