//! eframe::App implementation for DeckApp
//!
//! Contains the main update loop that runs every frame.

use eframe::egui;

use super::app::{DeckApp, ViewMode};

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Host-bridge outcomes first so this frame renders current state
        self.drain_host_events();

        // Zoom preference
        if (ctx.zoom_factor() - self.config.ui.zoom).abs() > f32::EPSILON {
            ctx.set_zoom_factor(self.config.ui.zoom);
        }

        self.handle_escape(ctx);

        // Bottom status bar - rendered before the side/central panels so
        // they account for its height
        if self.config.ui.show_status_bar {
            self.render_status_bar(ctx);
        }

        self.render_project_panel(ctx);

        match self.view {
            ViewMode::Board => self.render_board(ctx),
            ViewMode::Settings => self.render_settings(ctx),
        }

        // Dialogs and toasts on top of everything
        self.render_modals(ctx);
        self.toasts.render(ctx);

        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}
