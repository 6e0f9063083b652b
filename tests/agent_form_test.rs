//! End-to-end exercise of the launcher form's argument editing, driving the
//! same operations the GUI wires to its checkboxes and chips.

use std::path::PathBuf;

use devdeck::args;
use devdeck::domain::{AgentKind, AgentLauncher, Project};
use devdeck::host::LaunchRequest;

/// A form session: toggle flags from the kind's vocabulary, add directories,
/// let the user hand-edit the field, and check nothing fights.
#[test]
fn test_form_session_composes_and_unwinds() {
    let kind = AgentKind::Claude;
    let dir_flag = kind.dir_flag().unwrap();
    let (skip_flag, _) = kind.boolean_flags()[0];

    let mut field = String::new();

    field = args::toggle_flag(&field, skip_flag, true);
    assert!(args::has_flag(&field, skip_flag));

    field = args::add_value(&field, dir_flag, "/home/user/shared");
    field = args::add_value(&field, dir_flag, "/home/user/other");
    assert_eq!(
        args::list_values(&field, dir_flag),
        vec!["/home/user/shared", "/home/user/other"]
    );

    // Manual edit in the free-text field: append a model override
    field.push_str(" --model sonnet");

    // Structured controls still agree with the edited string
    assert!(args::has_flag(&field, skip_flag));
    assert_eq!(
        args::list_values(&field, dir_flag),
        vec!["/home/user/shared", "/home/user/other"]
    );

    // Unwind: remove one directory, then the flag
    field = args::remove_value(&field, dir_flag, "/home/user/shared");
    assert_eq!(args::list_values(&field, dir_flag), vec!["/home/user/other"]);

    field = args::toggle_flag(&field, skip_flag, false);
    assert!(!args::has_flag(&field, skip_flag));

    // The manual edit survived every structured operation
    assert!(field.contains("--model sonnet"));
}

#[test]
fn test_mode_prefix_round_trip_with_other_args() {
    let kind = AgentKind::Codex;
    let (prefix, _) = kind.mode_prefix().unwrap();

    let mut field = "--full-auto".to_string();
    field = args::toggle_mode_prefix(&field, prefix, true);
    assert_eq!(field, "exec --full-auto");
    assert!(args::has_mode_prefix(&field, prefix));

    field = args::toggle_mode_prefix(&field, prefix, false);
    assert_eq!(field, "--full-auto");
}

#[test]
fn test_saved_string_reaches_launcher_verbatim() {
    let mut launcher = AgentLauncher::new("review", AgentKind::Claude);
    launcher.args = "--continue --add-dir \"/srv/my docs\"".to_string();
    let project = Project::new("demo", Some(PathBuf::from("/srv/demo")));

    let req = LaunchRequest::agent(&launcher, &project);
    assert_eq!(
        req.command_line,
        "'claude' --continue --add-dir \"/srv/my docs\""
    );
    assert_eq!(req.cwd, Some(PathBuf::from("/srv/demo")));
}

#[test]
fn test_launcher_workdir_overrides_project_root() {
    let mut launcher = AgentLauncher::new("review", AgentKind::Claude);
    launcher.workdir = Some(PathBuf::from("/srv/elsewhere"));
    let project = Project::new("demo", Some(PathBuf::from("/srv/demo")));

    let req = LaunchRequest::agent(&launcher, &project);
    assert_eq!(req.cwd, Some(PathBuf::from("/srv/elsewhere")));
}
