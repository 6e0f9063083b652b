//! The project entity: one dashboard column of widgets.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AgentLauncher, CommandEntry, Link, Note, WorkdirSuggestion};

/// A project and all widgets shown on its board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Local checkout root, when known. Used as the default launch cwd.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub commands: Vec<CommandEntry>,
    #[serde(default)]
    pub agents: Vec<AgentLauncher>,
    #[serde(default)]
    pub workdirs: Vec<WorkdirSuggestion>,
}

impl Project {
    pub fn new(name: impl Into<String>, root: Option<PathBuf>) -> Self {
        Self {
            id: super::new_id(),
            name: name.into(),
            root,
            created_at: Utc::now(),
            notes: Vec::new(),
            links: Vec::new(),
            commands: Vec::new(),
            agents: Vec::new(),
            workdirs: Vec::new(),
        }
    }

    /// Creates a project named after the folder.
    pub fn from_root(root: PathBuf) -> Self {
        let name = root
            .file_name()
            .and_then(|n| n.to_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| "project".to_string());
        Self::new(name, Some(root))
    }

    /// Records a working-directory use, deduplicating on the path text.
    pub fn touch_workdir(&mut self, path: &str) {
        let path = path.trim();
        if path.is_empty() {
            return;
        }
        if let Some(existing) = self.workdirs.iter_mut().find(|w| w.path == path) {
            existing.touch();
        } else {
            self.workdirs.push(WorkdirSuggestion::new(path));
        }
        self.workdirs.sort_by(|a, b| b.last_used.cmp(&a.last_used));
    }

    /// Suggestions in most-recently-used order.
    pub fn workdir_suggestions(&self) -> impl Iterator<Item = &WorkdirSuggestion> {
        self.workdirs.iter()
    }

    /// Notes with pinned entries first, preserving relative order otherwise.
    pub fn sorted_note_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.notes.len()).collect();
        indices.sort_by_key(|&i| !self.notes[i].pinned);
        indices
    }
}

/// Moves one element of a widget list, clamping the destination.
///
/// Shared by the drag-reorder handlers for every section.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() {
        return;
    }
    let item = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, item);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_workdir_dedupes_and_orders() {
        let mut project = Project::new("demo", None);
        project.touch_workdir("/a");
        project.touch_workdir("/b");
        project.touch_workdir("/a");
        let paths: Vec<&str> = project
            .workdir_suggestions()
            .map(|w| w.path.as_str())
            .collect();
        assert_eq!(paths, vec!["/a", "/b"]);
        assert_eq!(project.workdirs.len(), 2);
    }

    #[test]
    fn test_touch_workdir_ignores_empty() {
        let mut project = Project::new("demo", None);
        project.touch_workdir("   ");
        assert!(project.workdirs.is_empty());
    }

    #[test]
    fn test_move_item_reorders_and_clamps() {
        let mut items = vec!["a", "b", "c"];
        move_item(&mut items, 0, 2);
        assert_eq!(items, vec!["b", "c", "a"]);
        move_item(&mut items, 2, 99);
        assert_eq!(items, vec!["b", "c", "a"]);
        move_item(&mut items, 9, 0);
        assert_eq!(items, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_pinned_notes_sort_first() {
        let mut project = Project::new("demo", None);
        project.notes.push(Note::new("one"));
        project.notes.push(Note::new("two"));
        project.notes.push(Note::new("three"));
        project.notes[2].pinned = true;
        assert_eq!(project.sorted_note_indices(), vec![2, 0, 1]);
    }
}
