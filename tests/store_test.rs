//! Integration tests for the dashboard store.

use std::path::PathBuf;

use devdeck::domain::{AgentKind, AgentLauncher, CommandEntry, Link, Note, Project};
use devdeck::store::Store;

fn store_in(dir: &tempfile::TempDir) -> Store {
    Store::load_from(dir.path().join("dashboard.json")).unwrap()
}

#[test]
fn test_missing_file_loads_empty_board() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    assert!(store.dashboard.projects.is_empty());
    assert!(store.dashboard.active_project.is_none());
}

#[test]
fn test_save_and_reload_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);

    let mut project = Project::new("demo", Some(PathBuf::from("/srv/demo")));
    let mut note = Note::new("Readme pointers");
    note.body = "# Setup\nRun `cargo build` first.".to_string();
    note.pinned = true;
    project.notes.push(note);
    project.links.push(Link::new("https://docs.rs/egui"));
    project
        .commands
        .push(CommandEntry::new("test", "cargo test"));

    let mut launcher = AgentLauncher::new("review", AgentKind::Claude);
    launcher.args = "--continue --add-dir /srv/shared".to_string();
    project.agents.push(launcher);
    project.touch_workdir("/srv/demo");

    let id = store.add_project(project);
    store.save().unwrap();

    let reloaded = store_in(&dir);
    assert_eq!(reloaded.dashboard.active_project.as_deref(), Some(id.as_str()));
    let project = reloaded.dashboard.project(&id).unwrap();
    assert_eq!(project.name, "demo");
    assert_eq!(project.notes.len(), 1);
    assert!(project.notes[0].pinned);
    assert_eq!(project.links.len(), 1);
    assert_eq!(project.commands[0].command, "cargo test");
    assert_eq!(project.agents[0].args, "--continue --add-dir /srv/shared");
    assert_eq!(project.workdirs[0].path, "/srv/demo");
}

#[test]
fn test_save_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);
    store.add_project(Project::new("demo", None));
    store.save().unwrap();

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| name.ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp files left behind: {leftovers:?}");
}

#[test]
fn test_register_root_reuses_existing_project() {
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("app");
    std::fs::create_dir(&folder).unwrap();

    let mut store = store_in(&dir);
    let first = store.register_root(folder.clone());
    let second = store.register_root(folder);
    assert_eq!(first, second);
    assert_eq!(store.dashboard.projects.len(), 1);
}

#[test]
fn test_remove_project_fixes_selection() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);
    let first = store.add_project(Project::new("one", None));
    let second = store.add_project(Project::new("two", None));
    assert_eq!(store.dashboard.active_project.as_deref(), Some(second.as_str()));

    store.remove_project(&second);
    assert_eq!(store.dashboard.active_project.as_deref(), Some(first.as_str()));

    store.remove_project(&first);
    assert!(store.dashboard.active_project.is_none());
    assert!(store.dashboard.projects.is_empty());
}

#[test]
fn test_rename_ignores_blank_names() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);
    let id = store.add_project(Project::new("one", None));
    store.rename_project(&id, "   ");
    assert_eq!(store.dashboard.project(&id).unwrap().name, "one");
    store.rename_project(&id, "renamed");
    assert_eq!(store.dashboard.project(&id).unwrap().name, "renamed");
}
