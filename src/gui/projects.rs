//! Project list side panel.

use eframe::egui::{self, RichText, ScrollArea};

use super::app::{DeckApp, DeleteTarget};
use super::theme::{ACCENT_COPPER, BG_SELECTED, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};
use crate::domain::Project;
use crate::host;

/// Minimum fuzzy score for a non-substring match to show while filtering.
const FUZZY_THRESHOLD: f64 = 0.72;

enum ProjectAction {
    Select(String),
    StartRename(String, String),
    CommitRename(String, String),
    Delete(String, String),
    AddFromFolder,
    AddEmpty,
}

impl DeckApp {
    pub(super) fn render_project_panel(&mut self, ctx: &egui::Context) {
        let mut action: Option<ProjectAction> = None;

        egui::SidePanel::left("project_panel")
            .resizable(true)
            .default_width(230.0)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("PROJECTS")
                            .monospace()
                            .size(15.0)
                            .color(TEXT_PRIMARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("{}", self.store.dashboard.projects.len()))
                                .small()
                                .color(TEXT_MUTED),
                        );
                    });
                });
                ui.add_space(6.0);
                ui.add(
                    egui::TextEdit::singleline(&mut self.project_filter)
                        .hint_text("Filter...")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(6.0);
                ui.separator();

                let active_id = self.active_project_id();
                let rows = self.filtered_projects();

                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for (id, name, root) in &rows {
                            let renaming = self
                                .rename_project
                                .as_ref()
                                .is_some_and(|(rename_id, _)| rename_id == id);
                            if renaming {
                                if let Some(commit) = self.render_rename_row(ui, id) {
                                    action = Some(commit);
                                }
                                continue;
                            }

                            let selected = active_id.as_deref() == Some(id.as_str());
                            let response = ui.add(
                                egui::Button::new(
                                    RichText::new(name).color(if selected {
                                        ACCENT_COPPER
                                    } else {
                                        TEXT_PRIMARY
                                    }),
                                )
                                .fill(if selected {
                                    BG_SELECTED
                                } else {
                                    egui::Color32::TRANSPARENT
                                })
                                .min_size(egui::vec2(ui.available_width(), 0.0)),
                            );
                            if response.clicked() {
                                action = Some(ProjectAction::Select(id.clone()));
                            }
                            response.context_menu(|ui| {
                                if ui.button("Rename").clicked() {
                                    action =
                                        Some(ProjectAction::StartRename(id.clone(), name.clone()));
                                    ui.close();
                                }
                                if ui.button("Remove").clicked() {
                                    action = Some(ProjectAction::Delete(id.clone(), name.clone()));
                                    ui.close();
                                }
                            });
                            if let Some(root) = root {
                                response.on_hover_text(root);
                            }
                        }

                        ui.add_space(10.0);
                        if ui
                            .button(RichText::new("+ Add project folder").color(ACCENT_COPPER))
                            .clicked()
                        {
                            action = Some(ProjectAction::AddFromFolder);
                        }
                        if ui
                            .button(RichText::new("+ New empty project").color(TEXT_DIM))
                            .clicked()
                        {
                            action = Some(ProjectAction::AddEmpty);
                        }
                    });
            });

        if let Some(action) = action {
            self.apply_project_action(action);
        }
    }

    /// Inline rename editor replacing the project row.
    fn render_rename_row(&mut self, ui: &mut egui::Ui, id: &str) -> Option<ProjectAction> {
        let Some((_, buffer)) = &mut self.rename_project else {
            return None;
        };
        let response = ui.add(
            egui::TextEdit::singleline(buffer)
                .desired_width(f32::INFINITY)
                .hint_text("Project name"),
        );
        response.request_focus();
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            let name = buffer.clone();
            return Some(ProjectAction::CommitRename(id.to_string(), name));
        }
        None
    }

    fn apply_project_action(&mut self, action: ProjectAction) {
        match action {
            ProjectAction::Select(id) => {
                self.store.dashboard.active_project = Some(id);
                self.close_drafts();
                self.save_board();
            }
            ProjectAction::StartRename(id, name) => {
                self.rename_project = Some((id, name));
            }
            ProjectAction::CommitRename(id, name) => {
                self.rename_project = None;
                self.store.rename_project(&id, &name);
                self.save_board();
            }
            ProjectAction::Delete(id, name) => {
                self.confirm_delete = Some(DeleteTarget::Project { id, name });
            }
            ProjectAction::AddFromFolder => {
                if let Some(folder) = host::pick_folder(None, "Add project folder") {
                    let id = self.store.register_root(folder);
                    self.store.dashboard.active_project = Some(id);
                    self.save_board();
                }
            }
            ProjectAction::AddEmpty => {
                let project = Project::new("New project", None);
                let id = project.id.clone();
                self.store.add_project(project);
                self.rename_project = Some((id, "New project".to_string()));
                self.save_board();
            }
        }
    }

    /// Projects matching the filter: substring matches first, then fuzzy
    /// matches above the threshold. Returns `(id, name, root)` rows.
    fn filtered_projects(&self) -> Vec<(String, String, Option<String>)> {
        let filter = self.project_filter.trim().to_lowercase();
        let mut rows: Vec<(f64, (String, String, Option<String>))> = self
            .store
            .dashboard
            .projects
            .iter()
            .filter_map(|p| {
                let row = (
                    p.id.clone(),
                    p.name.clone(),
                    p.root.as_ref().map(|r| r.display().to_string()),
                );
                if filter.is_empty() {
                    return Some((2.0, row));
                }
                let name = p.name.to_lowercase();
                if name.contains(&filter) {
                    return Some((2.0, row));
                }
                let score = strsim::jaro_winkler(&name, &filter);
                (score >= FUZZY_THRESHOLD).then_some((score, row))
            })
            .collect();

        if !filter.is_empty() {
            rows.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        }
        rows.into_iter().map(|(_, row)| row).collect()
    }
}
