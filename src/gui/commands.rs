//! Shell command section: saved command lines with a run button.

use eframe::egui::{self, RichText};

use super::app::{CommandDraft, DeckApp, DeleteTarget, SectionKind};
use super::sections::drag_reorder_card;
use super::theme::{ACCENT_GREEN, ACCENT_RED, BG_SECONDARY, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};
use crate::domain::{move_item, CommandEntry};
use crate::host::{self, LaunchRequest};

enum CommandAction {
    Run(CommandEntry),
    Edit(CommandEntry),
    Delete(String, String),
    Move(usize, usize),
}

impl DeckApp {
    pub(super) fn render_commands_section(&mut self, ui: &mut egui::Ui, project_id: &str) {
        let Some(project) = self.store.dashboard.project(project_id).cloned() else {
            return;
        };

        let (open, add) = self.section_header(
            ui,
            project_id,
            SectionKind::Commands,
            project.commands.len(),
            Some("+ Command"),
        );
        if add {
            self.command_draft = Some(CommandDraft {
                project_id: project_id.to_string(),
                id: None,
                label: String::new(),
                command: String::new(),
                cwd: String::new(),
                in_terminal: true,
            });
        }
        if !open {
            return;
        }

        let editing_new = self
            .command_draft
            .as_ref()
            .is_some_and(|d| d.project_id == project_id && d.id.is_none());
        if editing_new {
            self.render_command_editor(ui);
        }

        let mut action: Option<CommandAction> = None;
        for (idx, entry) in project.commands.iter().enumerate() {
            let editing_this = self.command_draft.as_ref().is_some_and(|d| {
                d.project_id == project_id && d.id.as_deref() == Some(&entry.id)
            });
            if editing_this {
                self.render_command_editor(ui);
                continue;
            }

            let moved = drag_reorder_card(ui, project_id, SectionKind::Commands, idx, |ui| {
                let frame = egui::Frame::NONE
                    .fill(BG_SECONDARY)
                    .corner_radius(4.0)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&entry.label).strong().color(TEXT_PRIMARY));
                            ui.label(
                                RichText::new(&entry.command)
                                    .monospace()
                                    .small()
                                    .color(TEXT_DIM),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui
                                        .button(RichText::new("\u{25b6} Run").color(ACCENT_GREEN))
                                        .clicked()
                                    {
                                        action = Some(CommandAction::Run(entry.clone()));
                                    }
                                    if !entry.in_terminal {
                                        ui.label(
                                            RichText::new("silent").small().color(TEXT_MUTED),
                                        );
                                    }
                                },
                            );
                        });
                    });

                let response = frame.response.interact(egui::Sense::click());
                response.context_menu(|ui| {
                    if ui.button("Edit").clicked() {
                        action = Some(CommandAction::Edit(entry.clone()));
                        ui.close();
                    }
                    if ui
                        .button(RichText::new("Delete").color(ACCENT_RED))
                        .clicked()
                    {
                        action = Some(CommandAction::Delete(entry.id.clone(), entry.label.clone()));
                        ui.close();
                    }
                });
            });
            if let Some((from, to)) = moved {
                action = Some(CommandAction::Move(from, to));
            }
            ui.add_space(6.0);
        }

        if project.commands.is_empty() && !editing_new {
            ui.label(RichText::new("No commands").small().color(TEXT_MUTED));
        }

        if let Some(action) = action {
            self.apply_command_action(project_id, action);
        }
    }

    fn apply_command_action(&mut self, project_id: &str, action: CommandAction) {
        match action {
            CommandAction::Run(entry) => {
                if let Some(project) = self.store.dashboard.project(project_id) {
                    let req = LaunchRequest::command(&entry, project);
                    self.request_launch(project_id.to_string(), req);
                }
            }
            CommandAction::Edit(entry) => {
                self.command_draft = Some(CommandDraft {
                    project_id: project_id.to_string(),
                    id: Some(entry.id),
                    label: entry.label,
                    command: entry.command,
                    cwd: entry
                        .cwd
                        .map(|c| c.display().to_string())
                        .unwrap_or_default(),
                    in_terminal: entry.in_terminal,
                });
            }
            CommandAction::Delete(id, label) => {
                self.confirm_delete = Some(DeleteTarget::Widget {
                    project_id: project_id.to_string(),
                    section: SectionKind::Commands,
                    widget_id: id,
                    label,
                });
            }
            CommandAction::Move(from, to) => {
                if let Some(project) = self.store.dashboard.project_mut(project_id) {
                    move_item(&mut project.commands, from, to);
                }
                self.save_board();
            }
        }
    }

    fn render_command_editor(&mut self, ui: &mut egui::Ui) {
        let Some(mut draft) = self.command_draft.take() else {
            return;
        };

        enum Outcome {
            Open,
            Save,
            Cancel,
        }
        let mut outcome = Outcome::Open;

        egui::Frame::NONE
            .fill(BG_SECONDARY)
            .corner_radius(4.0)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut draft.label)
                        .hint_text("Label")
                        .desired_width(f32::INFINITY),
                );
                ui.add(
                    egui::TextEdit::singleline(&mut draft.command)
                        .hint_text("Command line, e.g. cargo test")
                        .font(egui::TextStyle::Monospace)
                        .desired_width(f32::INFINITY),
                );
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut draft.cwd)
                            .hint_text("Working directory (project root when empty)")
                            .desired_width(ui.available_width() - 80.0),
                    );
                    if ui.button("Browse...").clicked() {
                        if let Some(folder) = host::pick_folder(None, "Working directory") {
                            draft.cwd = folder.display().to_string();
                        }
                    }
                });
                ui.checkbox(&mut draft.in_terminal, "Open in terminal window");
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(RichText::new("Cancel").color(TEXT_DIM)).clicked() {
                            outcome = Outcome::Cancel;
                        }
                        let can_save = !draft.label.trim().is_empty()
                            && !draft.command.trim().is_empty();
                        if ui
                            .add_enabled(can_save, egui::Button::new("Save"))
                            .clicked()
                        {
                            outcome = Outcome::Save;
                        }
                    });
                });
            });
        ui.add_space(6.0);

        match outcome {
            Outcome::Save => self.save_command_draft(draft),
            Outcome::Cancel => {}
            Outcome::Open => self.command_draft = Some(draft),
        }
    }

    fn save_command_draft(&mut self, draft: CommandDraft) {
        let Some(project) = self.store.dashboard.project_mut(&draft.project_id) else {
            return;
        };

        let cwd = Some(draft.cwd.trim())
            .filter(|c| !c.is_empty())
            .map(std::path::PathBuf::from);

        match &draft.id {
            Some(id) => {
                if let Some(entry) = project.commands.iter_mut().find(|c| &c.id == id) {
                    entry.label = draft.label.trim().to_string();
                    entry.command = draft.command.trim().to_string();
                    entry.cwd = cwd;
                    entry.in_terminal = draft.in_terminal;
                }
            }
            None => {
                let mut entry =
                    CommandEntry::new(draft.label.trim(), draft.command.trim());
                entry.cwd = cwd;
                entry.in_terminal = draft.in_terminal;
                project.commands.push(entry);
            }
        }
        self.save_board();
    }
}
