//! Agent launcher configuration.
//!
//! An agent launcher describes how to start an external coding-assistant CLI
//! for a project: which tool, an optional binary override, a working
//! directory, environment variables, and a free-form argument string. The
//! argument string is opaque to everything except the `args` editor
//! operations and the launcher that finally splits it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The kind of coding-agent CLI a launcher starts.
///
/// Each kind carries the static vocabulary the launcher form offers as
/// structured controls: togglable boolean flags, an optional subcommand
/// prefix, and an optional multi-value directory flag. The vocabulary only
/// drives the form; the resulting argument string stays free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    /// Claude Code (Anthropic)
    #[default]
    Claude,
    /// Codex CLI (OpenAI)
    Codex,
    /// Gemini CLI (Google)
    Gemini,
    /// Any other tool; the user supplies the binary
    Custom,
}

impl AgentKind {
    pub const ALL: [AgentKind; 4] = [
        AgentKind::Claude,
        AgentKind::Codex,
        AgentKind::Gemini,
        AgentKind::Custom,
    ];

    /// Human-readable name for pickers.
    pub fn label(&self) -> &'static str {
        match self {
            AgentKind::Claude => "Claude Code",
            AgentKind::Codex => "Codex CLI",
            AgentKind::Gemini => "Gemini CLI",
            AgentKind::Custom => "Custom",
        }
    }

    /// Default binary when the launcher has no override.
    pub fn default_binary(&self) -> &'static str {
        match self {
            AgentKind::Claude => "claude",
            AgentKind::Codex => "codex",
            AgentKind::Gemini => "gemini",
            AgentKind::Custom => "",
        }
    }

    /// Boolean flags the form exposes as checkboxes, as `(flag, label)`.
    pub fn boolean_flags(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            AgentKind::Claude => &[
                ("--dangerously-skip-permissions", "Skip permission prompts"),
                ("--continue", "Continue most recent session"),
                ("--verbose", "Verbose output"),
            ],
            AgentKind::Codex => &[
                ("--full-auto", "Full auto (sandboxed)"),
                ("--search", "Enable web search"),
            ],
            AgentKind::Gemini => &[
                ("--yolo", "Auto-approve all actions"),
                ("--sandbox", "Run in sandbox"),
            ],
            AgentKind::Custom => &[],
        }
    }

    /// Leading subcommand the form can toggle, as `(token, label)`.
    pub fn mode_prefix(&self) -> Option<(&'static str, &'static str)> {
        match self {
            AgentKind::Codex => Some(("exec", "Run non-interactively (exec)")),
            _ => None,
        }
    }

    /// Multi-value flag for extra directories the agent may access.
    pub fn dir_flag(&self) -> Option<&'static str> {
        match self {
            AgentKind::Claude => Some("--add-dir"),
            _ => None,
        }
    }
}

/// A single environment variable passed to a launched agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

impl EnvVar {
    /// Parses `NAME=VALUE` lines; blank lines and lines without `=` are
    /// skipped.
    pub fn parse_lines(text: &str) -> Vec<EnvVar> {
        text.lines()
            .filter_map(|line| {
                let line = line.trim();
                let (name, value) = line.split_once('=')?;
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                Some(EnvVar {
                    name: name.to_string(),
                    value: value.trim().to_string(),
                })
            })
            .collect()
    }

    /// Renders a list back into the `NAME=VALUE` form the editor shows.
    pub fn to_lines(vars: &[EnvVar]) -> String {
        vars.iter()
            .map(|v| format!("{}={}", v.name, v.value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A configured way to start a coding agent for a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentLauncher {
    pub id: String,
    /// Display label on the launcher card.
    pub label: String,
    #[serde(default)]
    pub kind: AgentKind,
    /// Overrides the kind's default binary when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary: Option<String>,
    /// Extra CLI arguments, stored verbatim as one opaque string.
    #[serde(default)]
    pub args: String,
    /// Working directory; falls back to the project root at launch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workdir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<EnvVar>,
}

impl AgentLauncher {
    pub fn new(label: impl Into<String>, kind: AgentKind) -> Self {
        Self {
            id: super::new_id(),
            label: label.into(),
            kind,
            binary: None,
            args: String::new(),
            workdir: None,
            env: Vec::new(),
        }
    }

    /// The binary to start: the override if present, else the kind default.
    pub fn effective_binary(&self) -> &str {
        match &self.binary {
            Some(b) if !b.trim().is_empty() => b,
            _ => self.kind.default_binary(),
        }
    }

    /// Where to launch: the launcher's workdir, else the project root.
    pub fn launch_dir<'a>(&'a self, project_root: Option<&'a PathBuf>) -> Option<&'a PathBuf> {
        self.workdir.as_ref().or(project_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_binary_prefers_override() {
        let mut launcher = AgentLauncher::new("main", AgentKind::Claude);
        assert_eq!(launcher.effective_binary(), "claude");
        launcher.binary = Some("claude-nightly".to_string());
        assert_eq!(launcher.effective_binary(), "claude-nightly");
        launcher.binary = Some("   ".to_string());
        assert_eq!(launcher.effective_binary(), "claude");
    }

    #[test]
    fn test_env_lines_round_trip() {
        let vars = EnvVar::parse_lines("FOO=1\n\nBAR = two words \nnot-a-var\n=missing");
        assert_eq!(
            vars,
            vec![
                EnvVar { name: "FOO".into(), value: "1".into() },
                EnvVar { name: "BAR".into(), value: "two words".into() },
            ]
        );
        assert_eq!(EnvVar::to_lines(&vars), "FOO=1\nBAR=two words");
    }

    #[test]
    fn test_kind_vocabularies_are_consistent() {
        for kind in AgentKind::ALL {
            for (flag, label) in kind.boolean_flags() {
                assert!(flag.starts_with("--"));
                assert!(!label.is_empty());
            }
            if let Some(flag) = kind.dir_flag() {
                assert!(flag.starts_with("--"));
            }
            if let Some((token, _)) = kind.mode_prefix() {
                assert!(!token.starts_with('-'));
            }
        }
    }
}
