//! Settings view editing the application config.

use eframe::egui::{self, RichText, ScrollArea};

use super::app::DeckApp;
use super::theme::{ACCENT_GREEN, ACCENT_RED, BG_PRIMARY, TEXT_DIM, TEXT_PRIMARY};

impl DeckApp {
    pub(super) fn render_settings(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(16.0))
            .show(ctx, |ui| {
                ui.label(
                    RichText::new("SETTINGS")
                        .monospace()
                        .size(18.0)
                        .color(TEXT_PRIMARY),
                );
                ui.add_space(12.0);
                ui.separator();
                ui.add_space(12.0);

                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Launching").strong().color(TEXT_PRIMARY));
                        ui.add_space(4.0);
                        ui.horizontal(|ui| {
                            ui.label(RichText::new("Terminal emulator").color(TEXT_DIM));
                            ui.add(
                                egui::TextEdit::singleline(&mut self.config.launch.terminal)
                                    .hint_text("platform default")
                                    .desired_width(220.0),
                            );
                        });
                        ui.checkbox(
                            &mut self.config.launch.confirm_before_launch,
                            "Confirm before launching",
                        );

                        ui.add_space(12.0);
                        ui.label(RichText::new("Interface").strong().color(TEXT_PRIMARY));
                        ui.add_space(4.0);
                        ui.horizontal(|ui| {
                            ui.label(RichText::new("Zoom").color(TEXT_DIM));
                            ui.add(
                                egui::Slider::new(&mut self.config.ui.zoom, 0.75..=1.5)
                                    .step_by(0.05),
                            );
                        });
                        ui.checkbox(&mut self.config.ui.show_status_bar, "Show status bar");

                        ui.add_space(12.0);
                        ui.label(RichText::new("Links").strong().color(TEXT_PRIMARY));
                        ui.add_space(4.0);
                        ui.checkbox(
                            &mut self.config.links.fetch_metadata,
                            "Fetch page metadata for new links",
                        );

                        ui.add_space(16.0);
                        ui.horizontal(|ui| {
                            if ui.button("Save settings").clicked() {
                                self.settings_status = match self.config.save() {
                                    Ok(()) => Some(("Settings saved".to_string(), true)),
                                    Err(e) => Some((format!("Save failed: {e}"), false)),
                                };
                            }
                            if let Some((message, success)) = &self.settings_status {
                                let color = if *success { ACCENT_GREEN } else { ACCENT_RED };
                                ui.label(RichText::new(message).small().color(color));
                            }
                        });
                    });
            });
    }
}
