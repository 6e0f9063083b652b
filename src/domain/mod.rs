//! Core entity types for the dashboard.
//!
//! Everything the board persists lives here: projects and the widgets they
//! carry (notes, links, shell commands, agent launchers, working-directory
//! suggestions). All types are plain serde data; behavior that touches the
//! filesystem or processes belongs to `store` and `host`.

mod agent;
mod project;
mod widget;
mod workdir;

pub use agent::{AgentKind, AgentLauncher, EnvVar};
pub use project::{move_item, Project};
pub use widget::{CommandEntry, Link, Note};
pub use workdir::WorkdirSuggestion;

/// Generates a fresh widget/project identifier.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
