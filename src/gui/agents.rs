//! Agent launcher section.
//!
//! Cards launch a configured coding agent; the create/edit form composes the
//! launcher's argument string through checkbox toggles, a subcommand toggle
//! and directory chips, all backed by the pure operations in `crate::args`.
//! Checkbox state is re-derived from the string every frame, so manual edits
//! in the free-text field and the structured controls never disagree.

use eframe::egui::{self, RichText};

use super::app::{AgentDraft, DeckApp, DeleteTarget, SectionKind};
use super::sections::drag_reorder_card;
use super::theme::{
    ACCENT_COPPER, ACCENT_GREEN, ACCENT_RED, BG_SECONDARY, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
};
use crate::domain::{move_item, new_id, AgentKind, AgentLauncher, EnvVar};
use crate::host::{self, LaunchRequest};
use crate::args;

enum AgentAction {
    Launch(AgentLauncher),
    Edit(AgentLauncher),
    Duplicate(AgentLauncher),
    Delete(String, String),
    Move(usize, usize),
}

impl DeckApp {
    pub(super) fn render_agents_section(&mut self, ui: &mut egui::Ui, project_id: &str) {
        let Some(project) = self.store.dashboard.project(project_id).cloned() else {
            return;
        };

        let (open, add) = self.section_header(
            ui,
            project_id,
            SectionKind::Agents,
            project.agents.len(),
            Some("+ Agent"),
        );
        if add {
            self.agent_draft = Some(AgentDraft::new(project_id.to_string()));
        }
        if !open {
            return;
        }

        // Quick-fill options for the workdir field, most recent first
        let suggestions: Vec<(String, bool)> = project
            .workdir_suggestions()
            .map(|w| (w.path.clone(), w.remote))
            .collect();

        let editing_new = self
            .agent_draft
            .as_ref()
            .is_some_and(|d| d.project_id == project_id && d.id.is_none());
        if editing_new {
            self.render_agent_editor(ui, &suggestions);
        }

        let mut action: Option<AgentAction> = None;
        for (idx, launcher) in project.agents.iter().enumerate() {
            let editing_this = self.agent_draft.as_ref().is_some_and(|d| {
                d.project_id == project_id && d.id.as_deref() == Some(&launcher.id)
            });
            if editing_this {
                self.render_agent_editor(ui, &suggestions);
                continue;
            }

            let moved = drag_reorder_card(ui, project_id, SectionKind::Agents, idx, |ui| {
                let frame = egui::Frame::NONE
                    .fill(BG_SECONDARY)
                    .corner_radius(4.0)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(&launcher.label).strong().color(TEXT_PRIMARY),
                            );
                            ui.label(
                                RichText::new(launcher.kind.label())
                                    .small()
                                    .color(ACCENT_COPPER),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui
                                        .button(
                                            RichText::new("\u{25b6} Launch").color(ACCENT_GREEN),
                                        )
                                        .clicked()
                                    {
                                        action = Some(AgentAction::Launch(launcher.clone()));
                                    }
                                },
                            );
                        });
                        let preview = if launcher.args.trim().is_empty() {
                            launcher.effective_binary().to_string()
                        } else {
                            format!("{} {}", launcher.effective_binary(), launcher.args.trim())
                        };
                        ui.label(RichText::new(preview).monospace().small().color(TEXT_DIM));
                        if let Some(workdir) = &launcher.workdir {
                            ui.label(
                                RichText::new(format!("in {}", workdir.display()))
                                    .small()
                                    .color(TEXT_MUTED),
                            );
                        }
                    });

                let response = frame.response.interact(egui::Sense::click());
                response.context_menu(|ui| {
                    if ui.button("Edit").clicked() {
                        action = Some(AgentAction::Edit(launcher.clone()));
                        ui.close();
                    }
                    if ui.button("Duplicate").clicked() {
                        action = Some(AgentAction::Duplicate(launcher.clone()));
                        ui.close();
                    }
                    if ui
                        .button(RichText::new("Delete").color(ACCENT_RED))
                        .clicked()
                    {
                        action = Some(AgentAction::Delete(
                            launcher.id.clone(),
                            launcher.label.clone(),
                        ));
                        ui.close();
                    }
                });
            });
            if let Some((from, to)) = moved {
                action = Some(AgentAction::Move(from, to));
            }
            ui.add_space(6.0);
        }

        if project.agents.is_empty() && !editing_new {
            ui.label(RichText::new("No agents").small().color(TEXT_MUTED));
        }

        if let Some(action) = action {
            self.apply_agent_action(project_id, action);
        }
    }

    fn apply_agent_action(&mut self, project_id: &str, action: AgentAction) {
        match action {
            AgentAction::Launch(launcher) => {
                if let Some(project) = self.store.dashboard.project(project_id) {
                    let req = LaunchRequest::agent(&launcher, project);
                    self.request_launch(project_id.to_string(), req);
                }
            }
            AgentAction::Edit(launcher) => {
                self.agent_draft = Some(AgentDraft {
                    project_id: project_id.to_string(),
                    id: Some(launcher.id),
                    label: launcher.label,
                    kind: launcher.kind,
                    binary: launcher.binary.unwrap_or_default(),
                    args: launcher.args,
                    workdir: launcher
                        .workdir
                        .map(|w| w.display().to_string())
                        .unwrap_or_default(),
                    env_text: EnvVar::to_lines(&launcher.env),
                });
            }
            AgentAction::Duplicate(launcher) => {
                if let Some(project) = self.store.dashboard.project_mut(project_id) {
                    let mut copy = launcher;
                    copy.id = new_id();
                    copy.label = format!("{} (copy)", copy.label);
                    project.agents.push(copy);
                }
                self.save_board();
            }
            AgentAction::Delete(id, label) => {
                self.confirm_delete = Some(DeleteTarget::Widget {
                    project_id: project_id.to_string(),
                    section: SectionKind::Agents,
                    widget_id: id,
                    label,
                });
            }
            AgentAction::Move(from, to) => {
                if let Some(project) = self.store.dashboard.project_mut(project_id) {
                    move_item(&mut project.agents, from, to);
                }
                self.save_board();
            }
        }
    }

    /// The create/edit form. Structured controls edit `draft.args` in place
    /// through the pure string operations; the free-text field below edits
    /// the same string directly.
    fn render_agent_editor(&mut self, ui: &mut egui::Ui, suggestions: &[(String, bool)]) {
        let Some(mut draft) = self.agent_draft.take() else {
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
                        .hint_text("Label, e.g. Review session")
                        .desired_width(f32::INFINITY),
                );

                ui.horizontal(|ui| {
                    ui.label(RichText::new("Agent").color(TEXT_DIM));
                    egui::ComboBox::from_id_salt("agent_kind")
                        .selected_text(draft.kind.label())
                        .show_ui(ui, |ui| {
                            for kind in AgentKind::ALL {
                                ui.selectable_value(&mut draft.kind, kind, kind.label());
                            }
                        });
                    ui.add(
                        egui::TextEdit::singleline(&mut draft.binary)
                            .hint_text(draft.kind.default_binary())
                            .desired_width(160.0),
                    );
                });

                // Working directory with quick-fill from recent launches
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut draft.workdir)
                            .hint_text("Working directory (project root when empty)")
                            .desired_width(ui.available_width() - 160.0),
                    );
                    if ui.button("Browse...").clicked() {
                        if let Some(folder) = host::pick_folder(None, "Working directory") {
                            draft.workdir = folder.display().to_string();
                        }
                    }
                    if !suggestions.is_empty() {
                        ui.menu_button("Recent", |ui| {
                            for (path, remote) in suggestions {
                                let mut text = RichText::new(path).monospace();
                                if *remote {
                                    text = text.color(TEXT_MUTED);
                                }
                                let button = ui.add_enabled(!remote, egui::Button::new(text));
                                if button.clicked() {
                                    draft.workdir = path.clone();
                                    ui.close();
                                }
                            }
                        });
                    }
                });

                ui.add_space(6.0);
                render_arg_controls(ui, &mut draft);
                ui.add_space(2.0);
                ui.add(
                    egui::TextEdit::singleline(&mut draft.args)
                        .hint_text("Extra arguments")
                        .font(egui::TextStyle::Monospace)
                        .desired_width(f32::INFINITY),
                );
                let args_ok =
                    draft.args.trim().is_empty() || shell_words::split(&draft.args).is_ok();
                if !args_ok {
                    ui.label(
                        RichText::new("Unbalanced quote in arguments")
                            .small()
                            .color(ACCENT_RED),
                    );
                }

                ui.add_space(4.0);
                ui.label(RichText::new("Environment").small().color(TEXT_DIM));
                ui.add(
                    egui::TextEdit::multiline(&mut draft.env_text)
                        .hint_text("NAME=VALUE, one per line")
                        .font(egui::TextStyle::Monospace)
                        .desired_rows(2)
                        .desired_width(f32::INFINITY),
                );

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(RichText::new("Cancel").color(TEXT_DIM)).clicked() {
                            outcome = Outcome::Cancel;
                        }
                        let has_binary = draft.kind != AgentKind::Custom
                            || !draft.binary.trim().is_empty();
                        let can_save =
                            !draft.label.trim().is_empty() && has_binary && args_ok;
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
            Outcome::Save => self.save_agent_draft(draft),
            Outcome::Cancel => {}
            Outcome::Open => self.agent_draft = Some(draft),
        }
    }

    fn save_agent_draft(&mut self, draft: AgentDraft) {
        let Some(project) = self.store.dashboard.project_mut(&draft.project_id) else {
            return;
        };

        let binary = Some(draft.binary.trim().to_string()).filter(|b| !b.is_empty());
        let workdir = Some(draft.workdir.trim())
            .filter(|w| !w.is_empty())
            .map(std::path::PathBuf::from);
        let env = EnvVar::parse_lines(&draft.env_text);

        match &draft.id {
            Some(id) => {
                if let Some(launcher) = project.agents.iter_mut().find(|a| &a.id == id) {
                    launcher.label = draft.label.trim().to_string();
                    launcher.kind = draft.kind;
                    launcher.binary = binary;
                    launcher.args = draft.args;
                    launcher.workdir = workdir;
                    launcher.env = env;
                }
            }
            None => {
                let mut launcher = AgentLauncher::new(draft.label.trim(), draft.kind);
                launcher.binary = binary;
                launcher.args = draft.args;
                launcher.workdir = workdir;
                launcher.env = env;
                project.agents.push(launcher);
            }
        }
        self.save_board();
    }
}

/// Structured controls over the argument string. Enabled state is a pure
/// projection of the current string, never separate UI state.
fn render_arg_controls(ui: &mut egui::Ui, draft: &mut AgentDraft) {
    if let Some((prefix, label)) = draft.kind.mode_prefix() {
        let mut on = args::has_mode_prefix(&draft.args, prefix);
        if ui.checkbox(&mut on, label).changed() {
            draft.args = args::toggle_mode_prefix(&draft.args, prefix, on);
        }
    }

    for (flag, label) in draft.kind.boolean_flags() {
        let mut on = args::has_flag(&draft.args, flag);
        if ui.checkbox(&mut on, *label).on_hover_text(*flag).changed() {
            draft.args = args::toggle_flag(&draft.args, flag, on);
        }
    }

    if let Some(dir_flag) = draft.kind.dir_flag() {
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("Extra directories").small().color(TEXT_DIM));
            for path in args::list_values(&draft.args, dir_flag) {
                let chip = ui.add(egui::Button::new(
                    RichText::new(format!("{path}  \u{2715}")).monospace().small(),
                ));
                if chip.clicked() {
                    draft.args = args::remove_value(&draft.args, dir_flag, &path);
                }
            }
            if ui
                .button(RichText::new("+ Add directory").small().color(ACCENT_COPPER))
                .clicked()
            {
                if let Some(folder) = host::pick_folder(None, "Add directory") {
                    draft.args =
                        args::add_value(&draft.args, dir_flag, &folder.display().to_string());
                }
            }
        });
    }
}
