//! Bottom status bar.

use eframe::egui::{self, RichText};

use super::app::{DeckApp, ViewMode};
use super::theme::{ACCENT_COPPER, TEXT_MUTED};

impl DeckApp {
    pub(super) fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(self.store.path().display().to_string())
                        .small()
                        .color(TEXT_MUTED),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (label, next) = match self.view {
                        ViewMode::Board => ("Settings", ViewMode::Settings),
                        ViewMode::Settings => ("Back to board", ViewMode::Board),
                    };
                    if ui
                        .button(RichText::new(label).small().color(ACCENT_COPPER))
                        .clicked()
                    {
                        self.view = next;
                        self.settings_status = None;
                    }

                    let projects = self.store.dashboard.projects.len();
                    ui.label(
                        RichText::new(format!("{projects} project(s)"))
                            .small()
                            .color(TEXT_MUTED),
                    );
                });
            });
        });
    }
}
