//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use tracing::warn;

use super::Config;

impl Config {
    /// Get the config directory path (~/.devdeck/)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".devdeck")
    }

    /// Get the config file path (~/.devdeck/config.toml)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a file with atomic write and file locking.
    ///
    /// 1. Exclusive lock prevents concurrent writes from CLI and GUI
    /// 2. Atomic write (temp file + rename) prevents corruption on crash
    /// 3. Parent directory is created if needed
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        let lock_path = path.with_extension("toml.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

        lock_file
            .lock_exclusive()
            .with_context(|| "Failed to acquire config lock")?;

        let temp_path = path.with_extension("toml.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(content.as_bytes())
            .with_context(|| "Failed to write config content")?;

        temp_file
            .sync_all()
            .with_context(|| "Failed to sync config file")?;

        std::fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

        // Lock is automatically released when lock_file is dropped
        Ok(())
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to_file(&Self::config_path())
    }

    /// Load from ~/.devdeck/config.toml, creating it with defaults on first
    /// run. A config that fails to parse falls back to defaults with a
    /// warning instead of blocking startup.
    pub fn load() -> Self {
        let path = Self::config_path();

        if !path.exists() {
            let config = Config::default();
            if let Err(e) = config.save_to_file(&path) {
                warn!("[config] Failed to write default config: {e}");
            }
            return config;
        }

        match Self::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "[config] Failed to load {} ({e}). Falling back to defaults.",
                    path.display()
                );
                Config::default()
            }
        }
    }

    /// Initialize a config file, optionally overwriting an existing one.
    /// Returns the path written, or None if a config already existed.
    pub fn init(force: bool) -> Result<Option<PathBuf>> {
        let path = Self::config_path();
        if path.exists() && !force {
            return Ok(None);
        }
        Config::default().save_to_file(&path)?;
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.launch.terminal = "kitty".to_string();
        config.ui.zoom = 1.25;
        config.links.fetch_metadata = false;
        config.save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.launch.terminal, "kitty");
        assert_eq!(loaded.ui.zoom, 1.25);
        assert!(!loaded.links.fetch_metadata);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("[launch]\nterminal = \"alacritty\"\n").unwrap();
        assert_eq!(config.launch.terminal, "alacritty");
        assert_eq!(config.ui.zoom, 1.0);
        assert!(config.links.fetch_metadata);
    }
}
