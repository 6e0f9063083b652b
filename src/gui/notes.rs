//! Notes section: markdown cards with inline editing.

use eframe::egui::{self, RichText};

use super::app::{DeckApp, DeleteTarget, NoteDraft, SectionKind};
use super::sections::drag_reorder_card;
use super::theme::{ACCENT_YELLOW, BG_SECONDARY, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};
use crate::domain::{move_item, Note};

enum NoteAction {
    Edit(Note),
    TogglePin(String),
    Delete(String, String),
    Move(usize, usize),
}

impl DeckApp {
    pub(super) fn render_notes_section(&mut self, ui: &mut egui::Ui, project_id: &str) {
        let Some(project) = self.store.dashboard.project(project_id).cloned() else {
            return;
        };

        let (open, add) = self.section_header(
            ui,
            project_id,
            SectionKind::Notes,
            project.notes.len(),
            Some("+ Note"),
        );
        if add {
            self.note_draft = Some(NoteDraft {
                project_id: project_id.to_string(),
                id: None,
                title: String::new(),
                body: String::new(),
                pinned: false,
                preview: false,
            });
        }
        if !open {
            return;
        }

        let editing_new = self
            .note_draft
            .as_ref()
            .is_some_and(|d| d.project_id == project_id && d.id.is_none());
        if editing_new {
            self.render_note_editor(ui);
        }

        let mut action: Option<NoteAction> = None;
        for idx in project.sorted_note_indices() {
            let note = &project.notes[idx];

            let editing_this = self
                .note_draft
                .as_ref()
                .is_some_and(|d| d.project_id == project_id && d.id.as_deref() == Some(&note.id));
            if editing_this {
                self.render_note_editor(ui);
                continue;
            }

            let cache = &mut self.commonmark_cache;
            let moved = drag_reorder_card(ui, project_id, SectionKind::Notes, idx, |ui| {
                let frame = egui::Frame::NONE
                    .fill(BG_SECONDARY)
                    .corner_radius(4.0)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            if note.pinned {
                                ui.label(RichText::new("\u{2605}").color(ACCENT_YELLOW))
                                    .on_hover_text("Pinned");
                            }
                            ui.label(RichText::new(&note.title).strong().color(TEXT_PRIMARY));
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(
                                        RichText::new(
                                            note.updated_at.format("%Y-%m-%d").to_string(),
                                        )
                                        .small()
                                        .color(TEXT_MUTED),
                                    );
                                },
                            );
                        });
                        if !note.body.trim().is_empty() {
                            ui.add_space(4.0);
                            egui_commonmark::CommonMarkViewer::new().show(ui, cache, &note.body);
                        }
                    });

                let response = frame.response.interact(egui::Sense::click());
                response.context_menu(|ui| {
                    if ui.button("Edit").clicked() {
                        action = Some(NoteAction::Edit(note.clone()));
                        ui.close();
                    }
                    let pin_label = if note.pinned { "Unpin" } else { "Pin" };
                    if ui.button(pin_label).clicked() {
                        action = Some(NoteAction::TogglePin(note.id.clone()));
                        ui.close();
                    }
                    if ui.button(RichText::new("Delete").color(super::theme::ACCENT_RED)).clicked() {
                        action = Some(NoteAction::Delete(note.id.clone(), note.title.clone()));
                        ui.close();
                    }
                });
            });
            if let Some((from, to)) = moved {
                action = Some(NoteAction::Move(from, to));
            }
            ui.add_space(6.0);
        }

        if project.notes.is_empty() && !editing_new {
            ui.label(RichText::new("No notes").small().color(TEXT_MUTED));
        }

        if let Some(action) = action {
            self.apply_note_action(project_id, action);
        }
    }

    fn apply_note_action(&mut self, project_id: &str, action: NoteAction) {
        match action {
            NoteAction::Edit(note) => {
                self.note_draft = Some(NoteDraft {
                    project_id: project_id.to_string(),
                    id: Some(note.id),
                    title: note.title,
                    body: note.body,
                    pinned: note.pinned,
                    preview: false,
                });
            }
            NoteAction::TogglePin(id) => {
                if let Some(project) = self.store.dashboard.project_mut(project_id) {
                    if let Some(note) = project.notes.iter_mut().find(|n| n.id == id) {
                        note.pinned = !note.pinned;
                        note.touch();
                    }
                }
                self.save_board();
            }
            NoteAction::Delete(id, title) => {
                self.confirm_delete = Some(DeleteTarget::Widget {
                    project_id: project_id.to_string(),
                    section: SectionKind::Notes,
                    widget_id: id,
                    label: title,
                });
            }
            NoteAction::Move(from, to) => {
                if let Some(project) = self.store.dashboard.project_mut(project_id) {
                    move_item(&mut project.notes, from, to);
                }
                self.save_board();
            }
        }
    }

    /// Inline note editor for both creating and editing.
    fn render_note_editor(&mut self, ui: &mut egui::Ui) {
        let Some(mut draft) = self.note_draft.take() else {
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
                    egui::TextEdit::singleline(&mut draft.title)
                        .hint_text("Title")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(4.0);
                if draft.preview {
                    egui_commonmark::CommonMarkViewer::new().show(
                        ui,
                        &mut self.commonmark_cache,
                        &draft.body,
                    );
                } else {
                    ui.add(
                        egui::TextEdit::multiline(&mut draft.body)
                            .hint_text("Markdown...")
                            .desired_rows(6)
                            .desired_width(f32::INFINITY),
                    );
                }
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.checkbox(&mut draft.pinned, "Pinned");
                    let preview_label = if draft.preview { "Edit" } else { "Preview" };
                    if ui
                        .button(RichText::new(preview_label).small().color(TEXT_DIM))
                        .clicked()
                    {
                        draft.preview = !draft.preview;
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(RichText::new("Cancel").color(TEXT_DIM)).clicked() {
                            outcome = Outcome::Cancel;
                        }
                        let can_save = !draft.title.trim().is_empty();
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
            Outcome::Save => {
                self.save_note_draft(draft);
            }
            Outcome::Cancel => {}
            Outcome::Open => self.note_draft = Some(draft),
        }
    }

    fn save_note_draft(&mut self, draft: NoteDraft) {
        let Some(project) = self.store.dashboard.project_mut(&draft.project_id) else {
            return;
        };
        match &draft.id {
            Some(id) => {
                if let Some(note) = project.notes.iter_mut().find(|n| &n.id == id) {
                    note.title = draft.title.trim().to_string();
                    note.body = draft.body;
                    note.pinned = draft.pinned;
                    note.touch();
                }
            }
            None => {
                let mut note = Note::new(draft.title.trim());
                note.body = draft.body;
                note.pinned = draft.pinned;
                project.notes.push(note);
            }
        }
        self.save_board();
    }
}
