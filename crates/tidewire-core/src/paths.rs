//! Filesystem locations for tidewire config and logs

use std::path::PathBuf;

use crate::constants::config::{CONFIG_DIR_ENV, CONFIG_DIR_NAME, LOGS_DIR_NAME, MODES_FILE_NAME};

/// Config directory: `$TIDEWIRE_CONFIG_DIR`, else `~/.tidewire`
pub fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// AI mode definitions file
pub fn modes_file() -> PathBuf {
    config_dir().join(MODES_FILE_NAME)
}

pub fn logs_dir() -> PathBuf {
    config_dir().join(LOGS_DIR_NAME)
}
