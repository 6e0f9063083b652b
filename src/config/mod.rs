//! Application settings, separate from the dashboard data.

mod io;

use serde::{Deserialize, Serialize};

/// Main configuration structure, stored as `~/.devdeck/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Process launching
    #[serde(default)]
    pub launch: LaunchSettings,

    /// UI preferences
    #[serde(default)]
    pub ui: UiSettings,

    /// Link cards
    #[serde(default)]
    pub links: LinkSettings,
}

/// How agents and commands are started.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchSettings {
    /// Terminal emulator command. Empty means platform default
    /// (Terminal.app on macOS, the `$TERMINAL`/x-terminal-emulator chain on
    /// Linux, `cmd` on Windows).
    #[serde(default)]
    pub terminal: String,

    /// Ask for confirmation before starting a process.
    #[serde(default)]
    pub confirm_before_launch: bool,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            terminal: String::new(),
            confirm_before_launch: false,
        }
    }
}

/// UI preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Pixel zoom factor for the whole UI.
    #[serde(default = "default_zoom")]
    pub zoom: f32,

    /// Show the bottom status bar.
    #[serde(default = "default_true")]
    pub show_status_bar: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            zoom: default_zoom(),
            show_status_bar: true,
        }
    }
}

/// Link card behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkSettings {
    /// Fetch page title/description for new links in the background.
    #[serde(default = "default_true")]
    pub fetch_metadata: bool,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            fetch_metadata: true,
        }
    }
}

fn default_zoom() -> f32 {
    1.0
}

fn default_true() -> bool {
    true
}
