//! GUI runner - launches the main devdeck application window.

use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::Result;
use eframe::egui;
use tracing::info;

use super::app::DeckApp;
use super::theme;
use crate::config::Config;
use crate::host::{Launcher, MetadataFetcher};
use crate::store::Store;

/// Run the main GUI application.
///
/// Must be called from within the tokio runtime; the host bridge spawns its
/// background work on the current runtime handle.
pub fn run_gui(store_override: Option<PathBuf>) -> Result<()> {
    let config = Config::load();

    let store = match store_override {
        Some(path) => Store::load_from(path)?,
        None => Store::load()?,
    };
    info!(
        "[gui] Loaded {} project(s) from {}",
        store.dashboard.projects.len(),
        store.path().display()
    );

    let runtime = tokio::runtime::Handle::current();
    let (launch_tx, launch_rx) = mpsc::channel();
    let (metadata_tx, metadata_rx) = mpsc::channel();
    let launcher = Launcher::new(launch_tx, runtime.clone());
    let fetcher = MetadataFetcher::new(metadata_tx, runtime);

    let app = DeckApp::new(store, config, launcher, fetcher, launch_rx, metadata_rx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1180.0, 760.0])
            .with_min_inner_size([860.0, 520.0])
            .with_decorations(true)
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "devdeck",
        options,
        Box::new(move |cc| {
            theme::apply(&cc.egui_ctx);
            // Image support for markdown note bodies
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
