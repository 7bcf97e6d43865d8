//! File-backed key-value slot for the CLI's credential token.
//!
//! The file holds a flat JSON object. Storage is best-effort, like the
//! browser's localStorage: failures are logged and the slot reads as empty.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use session_core::KeyValueSlot;

pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `session.json` under the platform config directory
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = directories::ProjectDirs::from("com", "mdd", "mdd-api")
            .context("Failed to determine config directory")?
            .config_dir()
            .to_path_buf();

        Ok(config_dir.join("session.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path).context("Failed to read session file")?;
        serde_json::from_str(&contents).context("Failed to parse session file")
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        // Write to temp file first
        let temp_path = self.path.with_extension("tmp");
        let contents =
            serde_json::to_string_pretty(entries).context("Failed to serialize session file")?;
        fs::write(&temp_path, contents).context("Failed to write temp session file")?;

        fs::rename(&temp_path, &self.path).context("Failed to rename session file")?;
        Ok(())
    }

    fn modify(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) {
        let result = self.load().and_then(|mut entries| {
            f(&mut entries);
            self.save(&entries)
        });
        if let Err(e) = result {
            tracing::warn!(path = %self.path.display(), "Session file not updated: {:#}", e);
        }
    }
}

impl KeyValueSlot for FileSlot {
    fn get(&self, key: &str) -> Option<String> {
        match self.load() {
            Ok(mut entries) => entries.remove(key),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Ignoring session file: {:#}", e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        self.modify(|entries| {
            entries.insert(key.to_string(), value.to_string());
        });
    }

    fn delete(&self, key: &str) {
        self.modify(|entries| {
            entries.remove(key);
        });
    }
}
