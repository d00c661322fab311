use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Columns of the offscreen list view used when no terminal is mounted.
pub const DEFAULT_EXPORT_WIDTH: u16 = 60;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the key-value store files.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Directory `todo-list.pdf` is written to.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
    #[serde(default)]
    pub export_width: Option<u16>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/quicklist/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("quicklist/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("quicklist\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Reads a config file, falling back to defaults when it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Ignoring unreadable config {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Resolves the storage directory: explicit override, then config, then the platform data dir.
    pub fn effective_data_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.data_dir.clone())
            .or_else(|| dirs::data_dir().map(|dir| dir.join("quicklist")))
            .unwrap_or_else(|| PathBuf::from(".quicklist"))
    }

    pub fn effective_export_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.export_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn effective_export_width(&self) -> u16 {
        self.export_width
            .filter(|width| *width > 0)
            .unwrap_or(DEFAULT_EXPORT_WIDTH)
    }
}
