//! Host bridge: the few places where the dashboard touches the outside
//! world. Folder pickers, process launching and URL metadata fetching all
//! live here so the GUI stays pure view composition. Every failure comes
//! back as a `Result` or an event on a channel; nothing in this module
//! panics on a bad path or a dead network.

pub mod launch;
pub mod metadata;
pub mod picker;

pub use launch::{open_url, LaunchEvent, LaunchRequest, Launcher};
pub use metadata::{MetadataFetcher, MetadataRequest, MetadataResult, PageMetadata};
pub use picker::pick_folder;
