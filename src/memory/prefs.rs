// src/memory/prefs.rs — Saved user preferences
//
// One JSON file holding the profile the user last saved through the API.
// When present it replaces the TOML profile as the baseline for a cycle;
// per-request overrides still apply on top.

use std::path::{Path, PathBuf};

use crate::infra::config::ProfileConfig;
use crate::infra::paths;

#[derive(Debug, Clone)]
pub struct PreferencesStore {
    path: PathBuf,
}

impl PreferencesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn at_default_path() -> Self {
        Self::new(paths::preferences_path())
    }

    /// The saved profile, or None when nothing has been saved yet. An
    /// unreadable or unparseable file also reads as None; saving overwrites it.
    pub fn load(&self) -> Option<ProfileConfig> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }

    pub fn save(&self, profile: &ProfileConfig) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(profile)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_none() {
        let store = PreferencesStore::new("/nonexistent/preferences.json");
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = PreferencesStore::new(dir.path().join("preferences.json"));

        let mut profile = ProfileConfig::default();
        profile.location = "Anna University".into();
        profile.food_budget = 150.0;
        store.save(&profile).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.location, "Anna University");
        assert!((loaded.food_budget - 150.0).abs() < f64::EPSILON);
        assert_eq!(loaded.class_start_time, "09:00");
    }

    #[test]
    fn test_save_overwrites_previous() {
        let dir = TempDir::new().unwrap();
        let store = PreferencesStore::new(dir.path().join("preferences.json"));

        let mut profile = ProfileConfig::default();
        store.save(&profile).unwrap();
        profile.class_start_time = "08:30".into();
        store.save(&profile).unwrap();

        assert_eq!(store.load().unwrap().class_start_time, "08:30");
    }

    #[test]
    fn test_corrupt_file_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "not json").unwrap();
        let store = PreferencesStore::new(&path);
        assert!(store.load().is_none());
    }
}
