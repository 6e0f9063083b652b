//! GUI module for the main devdeck application
//!
//! A dashboard window: project list on the left, the selected project's
//! widget sections in the center, settings and status bar around them.
//! All state mutation goes through `DeckApp` methods; the host bridge
//! reports back over channels drained once per frame.

pub mod agents;
pub mod app;
pub mod app_eframe;
pub mod commands;
pub mod links;
pub mod modal;
pub mod notes;
pub mod projects;
pub mod runner;
pub mod sections;
pub mod settings;
pub mod status_bar;
pub mod theme;
pub mod toast;
pub mod workdirs;

pub use app::{DeckApp, SectionKind, ViewMode};
pub use runner::run_gui;
