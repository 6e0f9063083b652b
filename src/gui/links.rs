//! Links section: bookmark cards with fetched page metadata.

use eframe::egui::{self, RichText};

use super::app::{DeckApp, DeleteTarget, LinkDraft, SectionKind};
use super::sections::drag_reorder_card;
use super::theme::{ACCENT_CYAN, ACCENT_RED, BG_SECONDARY, TEXT_DIM, TEXT_MUTED};
use crate::domain::{move_item, Link};
use crate::host;

enum LinkAction {
    Open(String),
    Edit(Link),
    Fetch(String, String),
    CopyUrl(String),
    Delete(String, String),
    Move(usize, usize),
}

impl DeckApp {
    pub(super) fn render_links_section(&mut self, ui: &mut egui::Ui, project_id: &str) {
        let Some(project) = self.store.dashboard.project(project_id).cloned() else {
            return;
        };

        let (open, add) = self.section_header(
            ui,
            project_id,
            SectionKind::Links,
            project.links.len(),
            Some("+ Link"),
        );
        if add {
            self.link_draft = Some(LinkDraft {
                project_id: project_id.to_string(),
                id: None,
                url: String::new(),
                title: String::new(),
                description: String::new(),
            });
        }
        if !open {
            return;
        }

        let editing_new = self
            .link_draft
            .as_ref()
            .is_some_and(|d| d.project_id == project_id && d.id.is_none());
        if editing_new {
            self.render_link_editor(ui);
        }

        let mut action: Option<LinkAction> = None;
        for (idx, link) in project.links.iter().enumerate() {
            let editing_this = self
                .link_draft
                .as_ref()
                .is_some_and(|d| d.project_id == project_id && d.id.as_deref() == Some(&link.id));
            if editing_this {
                self.render_link_editor(ui);
                continue;
            }

            let fetching = self.pending_fetches.contains(&link.id);
            let moved = drag_reorder_card(ui, project_id, SectionKind::Links, idx, |ui| {
                let frame = egui::Frame::NONE
                    .fill(BG_SECONDARY)
                    .corner_radius(4.0)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            let title = ui.add(
                                egui::Button::new(
                                    RichText::new(link.display_title()).color(ACCENT_CYAN),
                                )
                                .frame(false),
                            );
                            if title.clicked() {
                                action = Some(LinkAction::Open(link.url.clone()));
                            }
                            title.on_hover_text(&link.url);
                            if fetching {
                                ui.spinner();
                            }
                        });
                        if let Some(description) = &link.description {
                            ui.label(RichText::new(description).small().color(TEXT_DIM));
                        }
                    });

                let response = frame.response.interact(egui::Sense::click());
                response.context_menu(|ui| {
                    if ui.button("Edit").clicked() {
                        action = Some(LinkAction::Edit(link.clone()));
                        ui.close();
                    }
                    if ui.button("Fetch metadata").clicked() {
                        action = Some(LinkAction::Fetch(link.id.clone(), link.url.clone()));
                        ui.close();
                    }
                    if ui.button("Copy URL").clicked() {
                        action = Some(LinkAction::CopyUrl(link.url.clone()));
                        ui.close();
                    }
                    if ui
                        .button(RichText::new("Delete").color(ACCENT_RED))
                        .clicked()
                    {
                        action = Some(LinkAction::Delete(
                            link.id.clone(),
                            link.display_title().to_string(),
                        ));
                        ui.close();
                    }
                });
            });
            if let Some((from, to)) = moved {
                action = Some(LinkAction::Move(from, to));
            }
            ui.add_space(6.0);
        }

        if project.links.is_empty() && !editing_new {
            ui.label(RichText::new("No links").small().color(TEXT_MUTED));
        }

        if let Some(action) = action {
            self.apply_link_action(ui.ctx(), project_id, action);
        }
    }

    fn apply_link_action(&mut self, ctx: &egui::Context, project_id: &str, action: LinkAction) {
        match action {
            LinkAction::Open(url) => host::open_url(&url),
            LinkAction::Edit(link) => {
                self.link_draft = Some(LinkDraft {
                    project_id: project_id.to_string(),
                    id: Some(link.id),
                    url: link.url,
                    title: link.title,
                    description: link.description.unwrap_or_default(),
                });
            }
            LinkAction::Fetch(link_id, url) => {
                self.start_metadata_fetch(project_id.to_string(), link_id, url);
            }
            LinkAction::CopyUrl(url) => {
                ctx.copy_text(url);
                self.toasts.info("URL copied");
            }
            LinkAction::Delete(id, label) => {
                self.confirm_delete = Some(DeleteTarget::Widget {
                    project_id: project_id.to_string(),
                    section: SectionKind::Links,
                    widget_id: id,
                    label,
                });
            }
            LinkAction::Move(from, to) => {
                if let Some(project) = self.store.dashboard.project_mut(project_id) {
                    move_item(&mut project.links, from, to);
                }
                self.save_board();
            }
        }
    }

    fn render_link_editor(&mut self, ui: &mut egui::Ui) {
        let Some(mut draft) = self.link_draft.take() else {
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
                    egui::TextEdit::singleline(&mut draft.url)
                        .hint_text("https://...")
                        .desired_width(f32::INFINITY),
                );
                ui.add(
                    egui::TextEdit::singleline(&mut draft.title)
                        .hint_text("Title (optional, fetched when empty)")
                        .desired_width(f32::INFINITY),
                );
                ui.add(
                    egui::TextEdit::singleline(&mut draft.description)
                        .hint_text("Description (optional)")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(RichText::new("Cancel").color(TEXT_DIM)).clicked() {
                            outcome = Outcome::Cancel;
                        }
                        let can_save = !draft.url.trim().is_empty();
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
            Outcome::Save => self.save_link_draft(draft),
            Outcome::Cancel => {}
            Outcome::Open => self.link_draft = Some(draft),
        }
    }

    fn save_link_draft(&mut self, draft: LinkDraft) {
        let auto_fetch = self.config.links.fetch_metadata;
        let Some(project) = self.store.dashboard.project_mut(&draft.project_id) else {
            return;
        };

        let url = draft.url.trim().to_string();
        let title = draft.title.trim().to_string();
        let description = Some(draft.description.trim().to_string()).filter(|d| !d.is_empty());

        let link_id = match &draft.id {
            Some(id) => {
                if let Some(link) = project.links.iter_mut().find(|l| &l.id == id) {
                    link.url = url.clone();
                    link.title = title.clone();
                    link.description = description;
                }
                id.clone()
            }
            None => {
                let mut link = Link::new(url.clone());
                link.title = title.clone();
                link.description = description;
                let id = link.id.clone();
                project.links.push(link);
                id
            }
        };
        self.save_board();

        if auto_fetch && title.is_empty() {
            self.start_metadata_fetch(draft.project_id, link_id, url);
        }
    }
}
