//! Feature flag storage and lookup.
//!
//! Flags follow the console's `feature.json` document: a JSON array of
//! `{name, description, active}` entries. The router never reads flags from
//! process-wide state; it takes a [`FeatureGate`] by injection.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::Write as _;
use std::path::Path;
use tempfile::NamedTempFile;

/// Well-known feature keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKey {
    /// Gates the new-format run comparison page.
    V2Alpha,
    /// Gates function-component page rewrites.
    FunctionalComponent,
}

impl FeatureKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V2Alpha => "v2_alpha",
            Self::FunctionalComponent => "functional_component",
        }
    }
}

/// Read access to feature flags.
pub trait FeatureGate: Send + Sync {
    fn is_enabled(&self, key: FeatureKey) -> bool;
}

/// One entry in the features document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Feature {
    pub name: String,
    pub description: String,
    pub active: bool,
}

/// The full features document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Features {
    entries: Vec<Feature>,
}

impl Features {
    /// Load flags from a features JSON document.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let features = serde_json::from_str(&text)?;
        Ok(features)
    }

    /// Save flags, writing atomically via a temp file in the same directory.
    pub fn save(&self, path: &Path) -> Result<()> {
        let parent = path
            .parent()
            .ok_or_else(|| Error::config(format!("features path has no parent: {}", path.display())))?;
        std::fs::create_dir_all(parent)?;
        let mut tmp = NamedTempFile::new_in(parent)?;
        serde_json::to_writer_pretty(&mut tmp, self)?;
        tmp.write_all(b"\n")?;
        tmp.persist(path)
            .map_err(|err| Error::config(format!("persist features file: {err}")))?;
        Ok(())
    }

    /// Set one flag, appending an entry if the key is not yet present.
    pub fn set(&mut self, key: FeatureKey, active: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|f| f.name == key.as_str()) {
            entry.active = active;
        } else {
            self.entries.push(Feature {
                name: key.as_str().to_string(),
                description: String::new(),
                active,
            });
        }
    }
}

impl FeatureGate for Features {
    fn is_enabled(&self, key: FeatureKey) -> bool {
        self.entries
            .iter()
            .any(|f| f.name == key.as_str() && f.active)
    }
}
