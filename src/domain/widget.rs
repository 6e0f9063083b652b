//! Note, link and shell-command widgets.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A free-form note card; the body renders as markdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// Pinned notes sort before the rest of the section.
    #[serde(default)]
    pub pinned: bool,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: super::new_id(),
            title: title.into(),
            body: String::new(),
            pinned: false,
            updated_at: Utc::now(),
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A bookmarked URL with optionally fetched page metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub url: String,
    /// Falls back to the URL in the card when empty.
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            id: super::new_id(),
            url: url.into(),
            title: String::new(),
            description: None,
            created_at: Utc::now(),
        }
    }

    /// Card heading: the title when known, otherwise the URL itself.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.url
        } else {
            &self.title
        }
    }
}

/// A saved shell command with a run button on its card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandEntry {
    pub id: String,
    pub label: String,
    /// The command line, run through the shell.
    pub command: String,
    /// Working directory; falls back to the project root at run time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,
    /// Open a terminal window (true) or run silently and report the exit
    /// status as a toast (false).
    #[serde(default = "default_in_terminal")]
    pub in_terminal: bool,
}

fn default_in_terminal() -> bool {
    true
}

impl CommandEntry {
    pub fn new(label: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            id: super::new_id(),
            label: label.into(),
            command: command.into(),
            cwd: None,
            in_terminal: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_display_title_falls_back_to_url() {
        let mut link = Link::new("https://docs.rs/egui");
        assert_eq!(link.display_title(), "https://docs.rs/egui");
        link.title = "egui docs".to_string();
        assert_eq!(link.display_title(), "egui docs");
    }
}
