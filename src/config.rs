use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_undo_window_secs() -> u64 {
    4
}

fn default_recently_removed_cap() -> usize {
    32
}

/// Host-tunable engine settings. Unknown or missing fields fall back
/// to defaults so old config files keep loading.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct SiftConfig {
    /// Seconds the undo toast stays actionable after a mark-done.
    pub undo_window_secs: u64,
    /// Entries retained on the recently-removed side list before the
    /// oldest is dropped.
    pub recently_removed_cap: usize,
    pub debug_logging: bool,
}

impl Default for SiftConfig {
    fn default() -> Self {
        Self {
            undo_window_secs: default_undo_window_secs(),
            recently_removed_cap: default_recently_removed_cap(),
            debug_logging: false,
        }
    }
}

impl SiftConfig {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("sift")
            .join("config.json")
    }

    /// Read config from `path`; a missing or malformed file yields defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                log::warn!("unreadable config {}: {e}; using defaults", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::error!("failed to create config directory: {e}");
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::error!("failed to save config: {e}");
                }
            }
            Err(e) => log::error!("failed to serialize config: {e}"),
        }
    }

    pub fn undo_window(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.undo_window_secs as i64)
    }
}
