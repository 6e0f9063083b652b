//! DevDeck - your projects at a glance.
//!
//! DevDeck is a desktop dashboard of per-project widgets: notes, links,
//! saved shell commands, coding-agent launchers and working-directory
//! suggestions. The board is one local JSON document; the GUI is plain view
//! composition over it, and the only outside contact goes through the thin
//! host bridge (folder picker, process launcher, URL metadata fetch).
//!
//! ## Argument strings
//!
//! Agent launchers carry their CLI arguments as one opaque string, edited
//! both through structured form controls and free text. The pure operations
//! in [`args`] keep those two in agreement; see that module for the
//! invariants.

pub mod args;
pub mod config;
pub mod domain;
pub mod gui;
pub mod host;
pub mod store;

pub use domain::*;
