//! Confirmation dialogs rendered on top of the board.

use eframe::egui::{self, Align2, RichText};

use super::app::{DeckApp, DeleteTarget, SectionKind};
use super::theme::{ACCENT_RED, TEXT_DIM};

impl DeckApp {
    pub(super) fn render_modals(&mut self, ctx: &egui::Context) {
        self.render_confirm_delete(ctx);
        self.render_confirm_launch(ctx);
    }

    fn render_confirm_delete(&mut self, ctx: &egui::Context) {
        let Some(target) = self.confirm_delete.clone() else {
            return;
        };

        let description = match &target {
            DeleteTarget::Project { name, .. } => {
                format!("Delete project '{name}' and all its widgets?")
            }
            DeleteTarget::Widget { label, section, .. } => {
                format!("Delete '{label}' from {}?", section.title())
            }
        };

        let mut decided: Option<bool> = None;
        egui::Window::new("Confirm delete")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&description);
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui
                        .button(RichText::new("Delete").color(ACCENT_RED))
                        .clicked()
                    {
                        decided = Some(true);
                    }
                    if ui.button(RichText::new("Cancel").color(TEXT_DIM)).clicked() {
                        decided = Some(false);
                    }
                });
            });

        match decided {
            Some(true) => {
                self.confirm_delete = None;
                self.apply_delete(target);
            }
            Some(false) => self.confirm_delete = None,
            None => {}
        }
    }

    fn apply_delete(&mut self, target: DeleteTarget) {
        match target {
            DeleteTarget::Project { id, name } => {
                if self.store.remove_project(&id).is_some() {
                    self.toasts.info(format!("Removed project '{name}'"));
                }
            }
            DeleteTarget::Widget {
                project_id,
                section,
                widget_id,
                label,
            } => {
                if let Some(project) = self.store.dashboard.project_mut(&project_id) {
                    match section {
                        SectionKind::Notes => project.notes.retain(|n| n.id != widget_id),
                        SectionKind::Links => project.links.retain(|l| l.id != widget_id),
                        SectionKind::Commands => project.commands.retain(|c| c.id != widget_id),
                        SectionKind::Agents => project.agents.retain(|a| a.id != widget_id),
                        SectionKind::Workdirs => project.workdirs.retain(|w| w.path != widget_id),
                    }
                    self.toasts.info(format!("Removed '{label}'"));
                }
            }
        }
        self.save_board();
    }

    fn render_confirm_launch(&mut self, ctx: &egui::Context) {
        let Some((_, req)) = &self.pending_launch else {
            return;
        };
        let label = req.label.clone();
        let command_line = req.command_line.clone();

        let mut decided: Option<bool> = None;
        egui::Window::new("Confirm launch")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!("Start '{label}'?"));
                if !command_line.is_empty() {
                    ui.label(RichText::new(&command_line).monospace().color(TEXT_DIM));
                }
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Launch").clicked() {
                        decided = Some(true);
                    }
                    if ui.button(RichText::new("Cancel").color(TEXT_DIM)).clicked() {
                        decided = Some(false);
                    }
                });
            });

        match decided {
            Some(true) => {
                if let Some((project_id, req)) = self.pending_launch.take() {
                    self.perform_launch(project_id, req);
                }
            }
            Some(false) => self.pending_launch = None,
            None => {}
        }
    }
}
