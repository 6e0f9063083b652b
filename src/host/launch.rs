//! Process launching for agents and shell commands.
//!
//! Launches are fire-and-forget: the request is assembled into a small
//! bootstrap script, opened in a terminal window (or run silently through
//! the shell), and the outcome is reported back to the GUI over a channel.
//! The argument string on an agent launcher is appended to the command line
//! verbatim; the shell in the spawned terminal does the final splitting.

use std::path::PathBuf;
use std::process::Command;
use std::sync::mpsc::Sender;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::domain::{AgentLauncher, CommandEntry, Project};

/// Outcome events delivered to the GUI toast system.
#[derive(Debug, Clone)]
pub enum LaunchEvent {
    Started { label: String },
    /// A silent command finished; terminal launches never report this.
    Finished { label: String, code: Option<i32> },
    Failed { label: String, error: String },
}

/// Everything needed to start one process.
#[derive(Debug, Clone)]
pub struct LaunchRequest {
    pub label: String,
    /// Full shell command line, already escaped where needed.
    pub command_line: String,
    pub cwd: Option<PathBuf>,
    pub env: Vec<(String, String)>,
    /// Open a terminal window, or run through the shell silently.
    pub in_terminal: bool,
}

impl LaunchRequest {
    /// Builds the request for an agent launcher card.
    pub fn agent(launcher: &AgentLauncher, project: &Project) -> Self {
        let command_line = compose_command_line(launcher.effective_binary(), &launcher.args);
        Self {
            label: launcher.label.clone(),
            command_line,
            cwd: launcher.launch_dir(project.root.as_ref()).cloned(),
            env: launcher
                .env
                .iter()
                .map(|v| (v.name.clone(), v.value.clone()))
                .collect(),
            in_terminal: true,
        }
    }

    /// Builds the request for a shell command card.
    pub fn command(entry: &CommandEntry, project: &Project) -> Self {
        Self {
            label: entry.label.clone(),
            command_line: entry.command.clone(),
            cwd: entry.cwd.clone().or_else(|| project.root.clone()),
            env: Vec::new(),
            in_terminal: entry.in_terminal,
        }
    }

    /// Opening a plain shell in a suggested working directory.
    pub fn shell_at(path: PathBuf) -> Self {
        Self {
            label: format!("Shell: {}", path.display()),
            command_line: String::new(),
            cwd: Some(path),
            env: Vec::new(),
            in_terminal: true,
        }
    }
}

/// Appends the opaque argument string to the escaped binary.
fn compose_command_line(binary: &str, args: &str) -> String {
    let binary = shell_escape(binary);
    if args.trim().is_empty() {
        binary
    } else {
        format!("{} {}", binary, args.trim())
    }
}

/// Wrap in single quotes and escape any single quotes
fn shell_escape(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// The bootstrap script run inside the spawned terminal.
fn build_script(req: &LaunchRequest) -> String {
    let mut script = String::from("#!/bin/bash\n");
    if let Some(cwd) = &req.cwd {
        script.push_str(&format!("cd {}\n", shell_escape(&cwd.display().to_string())));
    }
    for (name, value) in &req.env {
        script.push_str(&format!("export {}={}\n", name, shell_escape(value)));
    }
    if req.command_line.is_empty() {
        // Plain shell session
        script.push_str("exec \"${SHELL:-/bin/bash}\"\n");
    } else {
        script.push_str(&req.command_line);
        script.push('\n');
    }
    script
}

/// Starts processes and reports outcomes over `tx`.
pub struct Launcher {
    tx: Sender<LaunchEvent>,
    runtime: tokio::runtime::Handle,
}

impl Launcher {
    pub fn new(tx: Sender<LaunchEvent>, runtime: tokio::runtime::Handle) -> Self {
        Self { tx, runtime }
    }

    /// Dispatches a request; the result arrives as a `LaunchEvent`.
    pub fn launch(&self, req: LaunchRequest, terminal_override: &str) {
        let label = req.label.clone();
        let outcome = if req.in_terminal {
            self.open_in_terminal(&req, terminal_override)
                .map(|_| LaunchEvent::Started {
                    label: label.clone(),
                })
        } else {
            self.run_silent(req).map(|_| LaunchEvent::Started {
                label: label.clone(),
            })
        };

        let event = outcome.unwrap_or_else(|e| {
            warn!("[launch] {label}: {e:#}");
            LaunchEvent::Failed {
                label,
                error: format!("{e:#}"),
            }
        });
        let _ = self.tx.send(event);
    }

    fn open_in_terminal(&self, req: &LaunchRequest, terminal_override: &str) -> Result<()> {
        static LAUNCH_SEQ: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);
        let seq = LAUNCH_SEQ.fetch_add(1, std::sync::atomic::Ordering::Relaxed);

        let script = build_script(req);
        let script_path = std::env::temp_dir().join(format!(
            "devdeck_launch_{}_{}.sh",
            std::process::id(),
            seq
        ));
        std::fs::write(&script_path, &script)
            .with_context(|| format!("Failed to write {}", script_path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&script_path)?.permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(&script_path, perms)?;
        }

        info!("[launch] Opening terminal for '{}'", req.label);
        open_terminal_with(&script_path, terminal_override)
    }

    /// Runs the command through the shell without a window and reports the
    /// exit status when it finishes.
    fn run_silent(&self, req: LaunchRequest) -> Result<()> {
        // tokio::process needs the runtime context on this thread
        let _guard = self.runtime.enter();

        let mut command = if cfg!(windows) {
            let mut c = tokio::process::Command::new("cmd");
            c.arg("/C").arg(&req.command_line);
            c
        } else {
            let mut c = tokio::process::Command::new("sh");
            c.arg("-c").arg(&req.command_line);
            c
        };
        if let Some(cwd) = &req.cwd {
            command.current_dir(cwd);
        }
        command.envs(req.env.iter().map(|(k, v)| (k.clone(), v.clone())));

        let mut child = command
            .spawn()
            .with_context(|| format!("Failed to run '{}'", req.command_line))?;

        let tx = self.tx.clone();
        let label = req.label;
        self.runtime.spawn(async move {
            let event = match child.wait().await {
                Ok(status) => LaunchEvent::Finished {
                    label,
                    code: status.code(),
                },
                Err(e) => LaunchEvent::Failed {
                    label,
                    error: e.to_string(),
                },
            };
            let _ = tx.send(event);
        });
        Ok(())
    }
}

/// Open a URL in the default browser
pub fn open_url(url: &str) {
    #[cfg(target_os = "macos")]
    {
        let _ = Command::new("open").arg(url).spawn();
    }

    #[cfg(target_os = "linux")]
    {
        let _ = Command::new("xdg-open").arg(url).spawn();
    }

    #[cfg(target_os = "windows")]
    {
        let _ = Command::new("cmd").args(["/C", "start", "", url]).spawn();
    }
}

/// Opens the bootstrap script in a terminal window, per platform.
#[cfg(target_os = "macos")]
fn open_terminal_with(script_path: &std::path::Path, _terminal_override: &str) -> Result<()> {
    let applescript = format!(
        "tell application \"Terminal\"\n\tactivate\n\tdo script \"{}\"\nend tell",
        script_path
            .display()
            .to_string()
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
    );
    let status = Command::new("osascript")
        .arg("-e")
        .arg(&applescript)
        .status()
        .context("Failed to run AppleScript")?;
    if !status.success() {
        anyhow::bail!("AppleScript failed with status: {status}");
    }
    Ok(())
}

#[cfg(all(unix, not(target_os = "macos")))]
fn open_terminal_with(script_path: &std::path::Path, terminal_override: &str) -> Result<()> {
    let script = script_path.display().to_string();
    let mut errors = Vec::new();

    for (term, exec_args) in terminal_candidates(terminal_override) {
        let mut command = Command::new(&term);
        command.args(&exec_args).arg(&script);
        match command.spawn() {
            Ok(_) => return Ok(()),
            Err(e) => errors.push(format!("{term}: {e}")),
        }
    }
    anyhow::bail!("No terminal emulator found ({})", errors.join(", "))
}

#[cfg(windows)]
fn open_terminal_with(script_path: &std::path::Path, _terminal_override: &str) -> Result<()> {
    Command::new("cmd")
        .args(["/C", "start", "", "bash"])
        .arg(script_path)
        .spawn()
        .context("Failed to open terminal window")?;
    Ok(())
}

/// Terminals to try, in order, with their run-a-command arguments.
#[cfg(all(unix, not(target_os = "macos")))]
fn terminal_candidates(terminal_override: &str) -> Vec<(String, Vec<String>)> {
    fn exec_args(term: &str) -> Vec<String> {
        // gnome-terminal dropped `-e`; everything else here accepts it
        if term.contains("gnome-terminal") {
            vec!["--".to_string()]
        } else {
            vec!["-e".to_string()]
        }
    }

    let mut candidates = Vec::new();
    if !terminal_override.trim().is_empty() {
        let term = terminal_override.trim().to_string();
        let args = exec_args(&term);
        candidates.push((term, args));
    }
    if let Ok(term) = std::env::var("TERMINAL") {
        if !term.trim().is_empty() {
            let term = term.trim().to_string();
            let args = exec_args(&term);
            candidates.push((term, args));
        }
    }
    for term in [
        "x-terminal-emulator",
        "gnome-terminal",
        "konsole",
        "xfce4-terminal",
        "alacritty",
        "kitty",
        "xterm",
    ] {
        candidates.push((term.to_string(), exec_args(term)));
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AgentKind, EnvVar};

    #[test]
    fn test_shell_escape_handles_single_quotes() {
        assert_eq!(shell_escape("plain"), "'plain'");
        assert_eq!(shell_escape("it's"), "'it'\\''s'");
    }

    #[test]
    fn test_compose_command_line_keeps_args_verbatim() {
        assert_eq!(compose_command_line("claude", ""), "'claude'");
        assert_eq!(
            compose_command_line("claude", "--continue --add-dir \"/a b\""),
            "'claude' --continue --add-dir \"/a b\""
        );
    }

    #[test]
    fn test_build_script_contains_cwd_env_and_command() {
        let mut launcher = AgentLauncher::new("main", AgentKind::Claude);
        launcher.args = "--verbose".to_string();
        launcher.env.push(EnvVar {
            name: "API_KEY".into(),
            value: "se'cret".into(),
        });
        let project = Project::new("demo", Some(PathBuf::from("/srv/demo")));
        let req = LaunchRequest::agent(&launcher, &project);

        let script = build_script(&req);
        assert!(script.starts_with("#!/bin/bash\n"));
        assert!(script.contains("cd '/srv/demo'\n"));
        assert!(script.contains("export API_KEY='se'\\''cret'\n"));
        assert!(script.ends_with("'claude' --verbose\n"));
    }

    #[test]
    fn test_shell_at_builds_plain_shell_script() {
        let req = LaunchRequest::shell_at(PathBuf::from("/srv/demo"));
        let script = build_script(&req);
        assert!(script.contains("cd '/srv/demo'"));
        assert!(script.contains("exec \"${SHELL:-/bin/bash}\""));
    }

    #[test]
    fn test_command_request_falls_back_to_project_root() {
        let project = Project::new("demo", Some(PathBuf::from("/srv/demo")));
        let entry = CommandEntry::new("build", "cargo build");
        let req = LaunchRequest::command(&entry, &project);
        assert_eq!(req.cwd, Some(PathBuf::from("/srv/demo")));
        assert!(req.in_terminal);
    }
}
