//! Central board: the selected project's widget sections.

use eframe::egui::{self, RichText, ScrollArea};

use super::app::{DeckApp, SectionDrag, SectionKind};
use super::theme::{ACCENT_COPPER, BG_PRIMARY, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};
use crate::host;

impl DeckApp {
    pub(super) fn render_board(&mut self, ctx: &egui::Context) {
        let Some(project_id) = self.active_project_id() else {
            self.render_empty_board(ctx);
            return;
        };

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(16.0))
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.render_project_header(ui, &project_id);
                        ui.add_space(10.0);
                        self.render_notes_section(ui, &project_id);
                        ui.add_space(14.0);
                        self.render_links_section(ui, &project_id);
                        ui.add_space(14.0);
                        self.render_commands_section(ui, &project_id);
                        ui.add_space(14.0);
                        self.render_agents_section(ui, &project_id);
                        ui.add_space(14.0);
                        self.render_workdirs_section(ui, &project_id);
                        ui.add_space(24.0);
                    });
            });
    }

    fn render_empty_board(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(16.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.3);
                    ui.label(RichText::new("No projects yet").size(18.0).color(TEXT_DIM));
                    ui.add_space(8.0);
                    if ui
                        .button(RichText::new("+ Add project folder").color(ACCENT_COPPER))
                        .clicked()
                    {
                        if let Some(folder) = host::pick_folder(None, "Add project folder") {
                            self.store.register_root(folder);
                            self.save_board();
                        }
                    }
                });
            });
    }

    fn render_project_header(&mut self, ui: &mut egui::Ui, project_id: &str) {
        let Some(project) = self.store.dashboard.project(project_id) else {
            return;
        };
        let name = project.name.clone();
        let root = project.root.as_ref().map(|r| r.display().to_string());

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(&name)
                    .monospace()
                    .size(20.0)
                    .color(TEXT_PRIMARY),
            );
            if let Some(root) = &root {
                ui.label(RichText::new(root).small().color(TEXT_MUTED));
            }
        });
        ui.separator();
    }

    /// Section header with collapse toggle and an add button.
    /// Returns `(body_visible, add_clicked)`.
    pub(super) fn section_header(
        &mut self,
        ui: &mut egui::Ui,
        project_id: &str,
        section: SectionKind,
        count: usize,
        add_label: Option<&str>,
    ) -> (bool, bool) {
        let collapsed = self.is_collapsed(project_id, section);
        let mut add_clicked = false;

        ui.horizontal(|ui| {
            let arrow = if collapsed { "\u{25b8}" } else { "\u{25be}" };
            let header = ui.add(
                egui::Button::new(
                    RichText::new(format!("{arrow} {}", section.title()))
                        .monospace()
                        .color(TEXT_PRIMARY),
                )
                .frame(false),
            );
            if header.clicked() {
                self.toggle_section(project_id, section);
            }
            ui.label(RichText::new(format!("({count})")).small().color(TEXT_MUTED));

            if let Some(label) = add_label {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(RichText::new(label).small().color(ACCENT_COPPER))
                        .clicked()
                    {
                        add_clicked = true;
                    }
                });
            }
        });
        ui.add_space(4.0);

        (!collapsed, add_clicked)
    }
}

/// Wraps a card in a drag source for within-section reordering.
///
/// `index` is the card's position in the underlying widget vector (which can
/// differ from the display position when a section sorts, e.g. pinned
/// notes). Returns `Some((from, to))` when a drag released on this card.
pub(super) fn drag_reorder_card(
    ui: &mut egui::Ui,
    project_id: &str,
    section: SectionKind,
    index: usize,
    body: impl FnOnce(&mut egui::Ui),
) -> Option<(usize, usize)> {
    let id = egui::Id::new(("section_card", project_id, section, index));
    let response = ui
        .dnd_drag_source(id, SectionDrag { section, index }, |ui| {
            body(ui);
        })
        .response;

    if let Some(hover) = response.dnd_hover_payload::<SectionDrag>() {
        if hover.section == section && hover.index != index {
            let rect = response.rect;
            let y = if hover.index < index {
                rect.bottom() + 2.0
            } else {
                rect.top() - 2.0
            };
            ui.painter()
                .hline(rect.x_range(), y, egui::Stroke::new(2.0, ACCENT_COPPER));
        }
    }

    let dropped = response.dnd_release_payload::<SectionDrag>()?;
    (dropped.section == section && dropped.index != index)
        .then(|| (dropped.index, index))
}
