// src/infra/paths.rs — Path management
//
// All paths respect the DAYBREAK_HOME environment variable for isolation.
// When DAYBREAK_HOME is set, config and data live under that directory.
// When unset, config uses ~/.daybreak/ and data uses the platform data dir.

use directories::ProjectDirs;
use std::path::PathBuf;
use std::sync::OnceLock;

static PROJECT_DIRS: OnceLock<ProjectDirs> = OnceLock::new();

fn project_dirs() -> &'static ProjectDirs {
    PROJECT_DIRS.get_or_init(|| {
        ProjectDirs::from("", "", "daybreak").expect("Could not determine home directory")
    })
}

/// Returns the DAYBREAK_HOME override, if set.
fn daybreak_home() -> Option<PathBuf> {
    std::env::var_os("DAYBREAK_HOME").map(PathBuf::from)
}

/// Configuration directory: $DAYBREAK_HOME/ or ~/.daybreak/
pub fn config_dir() -> PathBuf {
    if let Some(home) = daybreak_home() {
        return home;
    }
    dirs_home().join(".daybreak")
}

/// Data directory: $DAYBREAK_HOME/data/ or the platform-local data dir.
pub fn data_dir() -> PathBuf {
    if let Some(home) = daybreak_home() {
        return home.join("data");
    }
    project_dirs().data_local_dir().to_path_buf()
}

/// Home directory
pub fn dirs_home() -> PathBuf {
    directories::BaseDirs::new()
        .expect("Could not determine home directory")
        .home_dir()
        .to_path_buf()
}

/// Config file path
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Execution history log (JSONL, one record per booking)
pub fn history_path() -> PathBuf {
    data_dir().join("history.jsonl")
}

/// Saved user preferences (JSON)
pub fn preferences_path() -> PathBuf {
    data_dir().join("preferences.json")
}

/// Ensure required directories exist
pub fn ensure_dirs() -> anyhow::Result<()> {
    for dir in [config_dir(), data_dir()] {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}
