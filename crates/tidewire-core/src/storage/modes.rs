//! AI mode definitions file
//!
//! Stores named AI modes in a JSON object keyed by mode name. Paths ending in
//! `.toml` are read and written as TOML instead, so hand-written configs can
//! use either format.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::ai::{apply_provider_defaults, AiModeConfig};
use crate::error::ModeError;
use crate::paths;

/// Named AI modes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModeStore {
    modes: BTreeMap<String, AiModeConfig>,
}

impl ModeStore {
    /// Load modes from the default modes file
    pub fn load() -> Result<Self, ModeError> {
        Self::load_from_path(&paths::modes_file())
    }

    /// Load modes from a specific path
    ///
    /// A missing file is an empty store. `.toml` files are parsed as TOML,
    /// everything else as JSON.
    pub fn load_from_path(path: &Path) -> Result<Self, ModeError> {
        if !path.exists() {
            tracing::debug!("No modes file at {:?}, starting empty", path);
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;

        let store: ModeStore = if is_toml_path(path) {
            toml::from_str(&contents)?
        } else {
            serde_json::from_str(&contents)?
        };
        tracing::debug!("Loaded {} ai modes from {:?}", store.len(), path);
        Ok(store)
    }

    /// Save modes to a specific path
    ///
    /// Uses the same format rule as `load_from_path`. Writes to a uniquely
    /// named temp file in the target directory, then renames it over the
    /// target.
    pub fn save_to_path(&self, path: &Path) -> Result<(), ModeError> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let contents = if is_toml_path(path) {
            toml::to_string_pretty(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(contents.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|e| e.error)?;

        tracing::debug!("AI modes saved atomically to {:?}", path);
        Ok(())
    }

    /// Save modes to the default modes file
    pub fn save(&self) -> Result<(), ModeError> {
        self.save_to_path(&paths::modes_file())
    }

    /// Apply provider defaults to every mode
    pub fn resolve_all(&mut self) {
        for config in self.modes.values_mut() {
            apply_provider_defaults(config);
        }
    }

    /// Validate every mode, collecting all errors
    pub fn validate_all(&self) -> Vec<ModeError> {
        self.modes
            .iter()
            .filter_map(|(name, config)| config.validate(name).err())
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&AiModeConfig> {
        self.modes.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, config: AiModeConfig) {
        self.modes.insert(name.into(), config);
    }

    pub fn remove(&mut self, name: &str) -> Option<AiModeConfig> {
        self.modes.remove(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// Modes ordered for display: by `display:order` (unset last), then name
    pub fn sorted(&self) -> Vec<(&str, &AiModeConfig)> {
        let mut modes: Vec<_> = self
            .modes
            .iter()
            .map(|(name, config)| (name.as_str(), config))
            .collect();
        modes.sort_by(|(a_name, a), (b_name, b)| {
            let a_order = a.display_order.unwrap_or(f64::MAX);
            let b_order = b.display_order.unwrap_or(f64::MAX);
            a_order.total_cmp(&b_order).then_with(|| a_name.cmp(b_name))
        });
        modes
    }
}

fn is_toml_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}
