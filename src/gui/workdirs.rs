//! Recent working directories section.
//!
//! Entries accumulate from launches; rows open a shell in the directory and
//! the same list backs the quick-fill menu in the agent form.

use chrono::{DateTime, Utc};
use eframe::egui::{self, RichText};

use super::app::{DeckApp, DeleteTarget, SectionKind};
use super::theme::{ACCENT_GREEN, ACCENT_RED, BG_SECONDARY, TEXT_DIM, TEXT_MUTED};
use crate::host::LaunchRequest;

enum WorkdirAction {
    OpenShell(String),
    Forget(String),
}

impl DeckApp {
    pub(super) fn render_workdirs_section(&mut self, ui: &mut egui::Ui, project_id: &str) {
        let Some(project) = self.store.dashboard.project(project_id).cloned() else {
            return;
        };

        let (open, _) = self.section_header(
            ui,
            project_id,
            SectionKind::Workdirs,
            project.workdirs.len(),
            None,
        );
        if !open {
            return;
        }

        let mut action: Option<WorkdirAction> = None;
        for suggestion in project.workdir_suggestions() {
            let frame = egui::Frame::NONE
                .fill(BG_SECONDARY)
                .corner_radius(4.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&suggestion.path).monospace().small());
                        if suggestion.remote {
                            ui.label(RichText::new("remote").small().color(TEXT_MUTED));
                        }
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if !suggestion.remote
                                    && ui
                                        .button(
                                            RichText::new("Open shell")
                                                .small()
                                                .color(ACCENT_GREEN),
                                        )
                                        .clicked()
                                {
                                    action =
                                        Some(WorkdirAction::OpenShell(suggestion.path.clone()));
                                }
                                ui.label(
                                    RichText::new(format_relative(suggestion.last_used))
                                        .small()
                                        .color(TEXT_MUTED),
                                );
                            },
                        );
                    });
                });

            let response = frame.response.interact(egui::Sense::click());
            response.context_menu(|ui| {
                if ui
                    .button(RichText::new("Forget").color(ACCENT_RED))
                    .clicked()
                {
                    action = Some(WorkdirAction::Forget(suggestion.path.clone()));
                    ui.close();
                }
            });
            ui.add_space(4.0);
        }

        if project.workdirs.is_empty() {
            ui.label(
                RichText::new("Directories show up here after the first launch")
                    .small()
                    .color(TEXT_DIM),
            );
        }

        match action {
            Some(WorkdirAction::OpenShell(path)) => {
                let req = LaunchRequest::shell_at(path.into());
                self.request_launch(project_id.to_string(), req);
            }
            Some(WorkdirAction::Forget(path)) => {
                self.confirm_delete = Some(DeleteTarget::Widget {
                    project_id: project_id.to_string(),
                    section: SectionKind::Workdirs,
                    widget_id: path.clone(),
                    label: path,
                });
            }
            None => {}
        }
    }
}

/// Compact "how long ago" text for suggestion rows.
fn format_relative(when: DateTime<Utc>) -> String {
    let elapsed = Utc::now().signed_duration_since(when);
    if elapsed.num_minutes() < 1 {
        "just now".to_string()
    } else if elapsed.num_hours() < 1 {
        format!("{} min ago", elapsed.num_minutes())
    } else if elapsed.num_days() < 1 {
        format!("{} h ago", elapsed.num_hours())
    } else if elapsed.num_days() < 30 {
        format!("{} d ago", elapsed.num_days())
    } else {
        when.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_relative_buckets() {
        let now = Utc::now();
        assert_eq!(format_relative(now), "just now");
        assert_eq!(format_relative(now - Duration::minutes(5)), "5 min ago");
        assert_eq!(format_relative(now - Duration::hours(3)), "3 h ago");
        assert_eq!(format_relative(now - Duration::days(2)), "2 d ago");
        let old = now - Duration::days(90);
        assert_eq!(format_relative(old), old.format("%Y-%m-%d").to_string());
    }
}
