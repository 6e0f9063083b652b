//! Local JSON store for the dashboard document.
//!
//! The whole board (every project and its widgets) is one JSON document at
//! `~/.devdeck/dashboard.json`. Loading tolerates a missing file; saving is
//! atomic (temp file + rename) under an exclusive lock so a CLI invocation
//! and a running GUI never corrupt each other's writes.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::Project;

/// Error type for store I/O.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a valid dashboard file: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize dashboard: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The persisted document: all projects plus the current selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dashboard {
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Id of the project shown when the GUI opens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_project: Option<String>,
}

impl Dashboard {
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn project_mut(&mut self, id: &str) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == id)
    }

    /// Finds a project whose root matches `path` (after canonicalization).
    pub fn project_by_root(&self, path: &Path) -> Option<&Project> {
        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        self.projects.iter().find(|p| {
            p.root
                .as_ref()
                .map(|r| r.canonicalize().unwrap_or_else(|_| r.clone()) == canonical)
                .unwrap_or(false)
        })
    }
}

/// Handle on the dashboard file: the loaded document plus its path.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    pub dashboard: Dashboard,
}

impl Store {
    /// Data directory (`~/.devdeck/`).
    pub fn data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".devdeck")
    }

    /// Default dashboard path (`~/.devdeck/dashboard.json`).
    pub fn default_path() -> PathBuf {
        Self::data_dir().join("dashboard.json")
    }

    /// Loads the default store; a missing file yields an empty board.
    pub fn load() -> Result<Self, StoreError> {
        Self::load_from(Self::default_path())
    }

    /// Loads the store from an explicit path.
    pub fn load_from(path: PathBuf) -> Result<Self, StoreError> {
        if !path.exists() {
            info!("[store] No dashboard at {}, starting empty", path.display());
            return Ok(Self {
                path,
                dashboard: Dashboard::default(),
            });
        }

        let content = std::fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        let dashboard: Dashboard =
            serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?;
        Ok(Self { path, dashboard })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saves the document with file locking and an atomic rename.
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(&self.dashboard)?;

        // Separate lock file so the rename below never races the lock itself
        let lock_path = self.path.with_extension("json.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|source| StoreError::Io {
                path: lock_path.clone(),
                source,
            })?;
        lock_file
            .lock_exclusive()
            .map_err(|source| StoreError::Io {
                path: lock_path.clone(),
                source,
            })?;

        let temp_path = self.path.with_extension("json.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|source| StoreError::Io {
                path: temp_path.clone(),
                source,
            })?;
        temp_file
            .write_all(content.as_bytes())
            .and_then(|_| temp_file.sync_all())
            .map_err(|source| StoreError::Io {
                path: temp_path.clone(),
                source,
            })?;

        std::fs::rename(&temp_path, &self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        // Lock released when lock_file drops
        Ok(())
    }

    /// Adds a project and selects it. Returns the new project's id.
    pub fn add_project(&mut self, project: Project) -> String {
        let id = project.id.clone();
        self.dashboard.projects.push(project);
        self.dashboard.active_project = Some(id.clone());
        id
    }

    /// Removes a project, fixing up the selection.
    pub fn remove_project(&mut self, id: &str) -> Option<Project> {
        let index = self.dashboard.projects.iter().position(|p| p.id == id)?;
        let removed = self.dashboard.projects.remove(index);
        if self.dashboard.active_project.as_deref() == Some(id) {
            self.dashboard.active_project =
                self.dashboard.projects.first().map(|p| p.id.clone());
        }
        Some(removed)
    }

    pub fn rename_project(&mut self, id: &str, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        if let Some(project) = self.dashboard.project_mut(id) {
            project.name = name.to_string();
        }
    }

    /// Registers a project for a folder, reusing an existing registration.
    /// Returns the project id either way.
    pub fn register_root(&mut self, root: PathBuf) -> String {
        if let Some(existing) = self.dashboard.project_by_root(&root) {
            let id = existing.id.clone();
            self.dashboard.active_project = Some(id.clone());
            return id;
        }
        self.add_project(Project::from_root(root))
    }

    /// Saves, logging instead of bubbling the error. GUI callers surface the
    /// returned message as a toast.
    pub fn save_or_report(&self) -> Option<String> {
        match self.save() {
            Ok(()) => None,
            Err(e) => {
                warn!("[store] Save failed: {e}");
                Some(format!("Save failed: {e}"))
            }
        }
    }
}
