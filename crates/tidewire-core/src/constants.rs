//! Application constants and configuration defaults
//!
//! Centralized location for provider endpoints, secret names, and limits

/// Provider endpoints and secret-store identifiers
pub mod providers {
    /// Groq OpenAI-compatible chat completions endpoint
    pub const GROQ_CHAT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

    /// Secret-store key holding the Groq API key
    pub const GROQ_API_TOKEN_SECRET_NAME: &str = "GROQ_KEY";
}

/// Pseudo-terminal limits
pub mod pty {
    /// Largest value any window-size field can carry (`u16::MAX`)
    pub const MAX_WINSIZE_DIMENSION: i64 = u16::MAX as i64;
}

/// Config directory and file names
pub mod config {
    /// Config directory name under the user's home
    pub const CONFIG_DIR_NAME: &str = ".tidewire";

    /// Env var overriding the config directory
    pub const CONFIG_DIR_ENV: &str = "TIDEWIRE_CONFIG_DIR";

    /// AI mode definitions file name
    pub const MODES_FILE_NAME: &str = "aimodes.json";

    /// Logs subdirectory name
    pub const LOGS_DIR_NAME: &str = "logs";
}
