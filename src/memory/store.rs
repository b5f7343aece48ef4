// src/memory/store.rs — Execution history log
//
// Appends one JSONL record per confirmed booking and reads recent records
// back for the history views. Best-effort: callers log and continue when an
// append fails. Rotates at 1000 lines or 1MB, keeping the last 500.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::infra::paths;

/// One line in `history.jsonl`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionRecord {
    pub timestamp: String,
    pub food: String,
    pub travel: String,
    pub confidence: f64,
    pub buffer_minutes: f64,
    pub status: String,
    #[serde(default)]
    pub approved_by_user: bool,
}

#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn at_default_path() -> Self {
        Self::new(paths::history_path())
    }

    pub fn append(&self, record: &ExecutionRecord) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        if let Ok(meta) = std::fs::metadata(&self.path) {
            let should_rotate = meta.len() > 1_048_576 || {
                std::fs::read_to_string(&self.path)
                    .map(|c| c.lines().count() >= 1000)
                    .unwrap_or(false)
            };
            if should_rotate {
                rotate(&self.path)?;
            }
        }

        let line = serde_json::to_string(record)?;
        let mut f = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(f, "{}", line)?;
        Ok(())
    }

    /// Last `limit` records, oldest first. Unparseable lines are skipped.
    pub fn read(&self, limit: usize) -> Vec<ExecutionRecord> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(_) => return Vec::new(),
        };

        let lines: Vec<&str> = content.lines().collect();
        let start = lines.len().saturating_sub(limit);

        lines[start..]
            .iter()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Keep only the last 500 lines.
fn rotate(path: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(path)?;
    let lines: Vec<&str> = content.lines().collect();
    let keep = if lines.len() > 500 {
        &lines[lines.len() - 500..]
    } else {
        &lines
    };
    let new_content = keep.join("\n") + "\n";
    std::fs::write(path, new_content)?;
    Ok(())
}
