//! Main GUI application state.
//!
//! `DeckApp` owns the loaded store and config, the host-bridge handles, and
//! all transient form state (drafts, rename buffers, confirmation dialogs).
//! Rendering is split across the section modules; everything mutates the
//! store through methods here and saves after each change.

use std::collections::HashSet;
use std::sync::mpsc::Receiver;

use eframe::egui;
use tracing::info;

use crate::config::Config;
use crate::domain::AgentKind;
use crate::host::{LaunchEvent, LaunchRequest, Launcher, MetadataFetcher, MetadataRequest, MetadataResult};
use crate::store::Store;

use super::toast::Toasts;

/// View mode for the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// The dashboard board
    Board,
    /// Settings view
    Settings,
}

/// The widget sections of a project board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Notes,
    Links,
    Commands,
    Agents,
    Workdirs,
}

impl SectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Notes => "Notes",
            SectionKind::Links => "Links",
            SectionKind::Commands => "Commands",
            SectionKind::Agents => "Agents",
            SectionKind::Workdirs => "Recent directories",
        }
    }
}

/// Drag-and-drop payload for reordering cards within a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDrag {
    pub section: SectionKind,
    pub index: usize,
}

/// What a confirmation dialog is about to delete.
#[derive(Debug, Clone)]
pub enum DeleteTarget {
    Project {
        id: String,
        name: String,
    },
    Widget {
        project_id: String,
        section: SectionKind,
        widget_id: String,
        label: String,
    },
}

// ─── Form drafts ───────────────────────────────────────────────────────────
// One draft per widget kind; `id: None` means the form is creating a new
// entry, otherwise it edits the card with that id in place.

#[derive(Debug, Clone)]
pub(super) struct NoteDraft {
    pub project_id: String,
    pub id: Option<String>,
    pub title: String,
    pub body: String,
    pub pinned: bool,
    pub preview: bool,
}

#[derive(Debug, Clone)]
pub(super) struct LinkDraft {
    pub project_id: String,
    pub id: Option<String>,
    pub url: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub(super) struct CommandDraft {
    pub project_id: String,
    pub id: Option<String>,
    pub label: String,
    pub command: String,
    pub cwd: String,
    pub in_terminal: bool,
}

#[derive(Debug, Clone)]
pub(super) struct AgentDraft {
    pub project_id: String,
    pub id: Option<String>,
    pub label: String,
    pub kind: AgentKind,
    pub binary: String,
    /// The opaque argument string the structured controls edit in place.
    pub args: String,
    pub workdir: String,
    pub env_text: String,
}

impl AgentDraft {
    pub fn new(project_id: String) -> Self {
        Self {
            project_id,
            id: None,
            label: String::new(),
            kind: AgentKind::default(),
            binary: String::new(),
            args: String::new(),
            workdir: String::new(),
            env_text: String::new(),
        }
    }
}

/// Main application state
pub struct DeckApp {
    pub(super) store: Store,
    pub(super) config: Config,
    pub(super) launcher: Launcher,
    pub(super) fetcher: MetadataFetcher,
    launch_rx: Receiver<LaunchEvent>,
    metadata_rx: Receiver<MetadataResult>,

    pub(super) view: ViewMode,
    /// Filter text above the project list.
    pub(super) project_filter: String,
    /// Collapsed sections, per project.
    pub(super) collapsed: HashSet<(String, SectionKind)>,

    pub(super) note_draft: Option<NoteDraft>,
    pub(super) link_draft: Option<LinkDraft>,
    pub(super) command_draft: Option<CommandDraft>,
    pub(super) agent_draft: Option<AgentDraft>,
    /// Project rename in progress: (id, edit buffer).
    pub(super) rename_project: Option<(String, String)>,
    pub(super) confirm_delete: Option<DeleteTarget>,
    /// Launch waiting for confirmation (when configured).
    pub(super) pending_launch: Option<(String, LaunchRequest)>,
    /// Link ids with a metadata fetch in flight.
    pub(super) pending_fetches: HashSet<String>,

    pub(super) toasts: Toasts,
    pub(super) commonmark_cache: egui_commonmark::CommonMarkCache,
    /// Save feedback in the settings view: (message, is_success).
    pub(super) settings_status: Option<(String, bool)>,
}

impl DeckApp {
    pub fn new(
        store: Store,
        config: Config,
        launcher: Launcher,
        fetcher: MetadataFetcher,
        launch_rx: Receiver<LaunchEvent>,
        metadata_rx: Receiver<MetadataResult>,
    ) -> Self {
        Self {
            store,
            config,
            launcher,
            fetcher,
            launch_rx,
            metadata_rx,
            view: ViewMode::Board,
            project_filter: String::new(),
            collapsed: HashSet::new(),
            note_draft: None,
            link_draft: None,
            command_draft: None,
            agent_draft: None,
            rename_project: None,
            confirm_delete: None,
            pending_launch: None,
            pending_fetches: HashSet::new(),
            toasts: Toasts::default(),
            commonmark_cache: egui_commonmark::CommonMarkCache::default(),
            settings_status: None,
        }
    }

    pub(super) fn active_project_id(&self) -> Option<String> {
        self.store
            .dashboard
            .active_project
            .clone()
            .filter(|id| self.store.dashboard.project(id).is_some())
            .or_else(|| self.store.dashboard.projects.first().map(|p| p.id.clone()))
    }

    /// Persist the board; failures surface as an error toast.
    pub(super) fn save_board(&mut self) {
        if let Some(message) = self.store.save_or_report() {
            self.toasts.error(message);
        }
    }

    pub(super) fn toggle_section(&mut self, project_id: &str, section: SectionKind) {
        let key = (project_id.to_string(), section);
        if !self.collapsed.remove(&key) {
            self.collapsed.insert(key);
        }
    }

    pub(super) fn is_collapsed(&self, project_id: &str, section: SectionKind) -> bool {
        self.collapsed
            .contains(&(project_id.to_string(), section))
    }

    // ─── Launching ─────────────────────────────────────────────────────────

    /// Starts a launch, or parks it behind the confirmation dialog.
    pub(super) fn request_launch(&mut self, project_id: String, req: LaunchRequest) {
        if self.config.launch.confirm_before_launch {
            self.pending_launch = Some((project_id, req));
        } else {
            self.perform_launch(project_id, req);
        }
    }

    pub(super) fn perform_launch(&mut self, project_id: String, req: LaunchRequest) {
        if let Some(cwd) = &req.cwd {
            if let Some(project) = self.store.dashboard.project_mut(&project_id) {
                project.touch_workdir(&cwd.display().to_string());
            }
            self.save_board();
        }
        info!("[gui] Launching '{}'", req.label);
        let terminal = self.config.launch.terminal.clone();
        self.launcher.launch(req, &terminal);
    }

    // ─── Metadata ──────────────────────────────────────────────────────────

    pub(super) fn start_metadata_fetch(&mut self, project_id: String, link_id: String, url: String) {
        if url.trim().is_empty() || !self.pending_fetches.insert(link_id.clone()) {
            return;
        }
        self.fetcher.fetch(MetadataRequest {
            project_id,
            link_id,
            url,
        });
    }

    fn apply_metadata(&mut self, result: MetadataResult) {
        self.pending_fetches.remove(&result.link_id);
        let metadata = match result.outcome {
            Ok(m) => m,
            Err(e) => {
                self.toasts.error(format!("Metadata fetch failed: {e}"));
                return;
            }
        };

        let Some(project) = self.store.dashboard.project_mut(&result.project_id) else {
            return;
        };
        let Some(link) = project.links.iter_mut().find(|l| l.id == result.link_id) else {
            return;
        };

        let mut changed = false;
        if link.title.trim().is_empty() {
            if let Some(title) = metadata.title {
                link.title = title;
                changed = true;
            }
        }
        if link.description.is_none() {
            if let Some(description) = metadata.description {
                link.description = Some(description);
                changed = true;
            }
        }
        if changed {
            self.save_board();
        }
    }

    // ─── Host events ───────────────────────────────────────────────────────

    /// Drains launch and metadata channels into toasts/board updates.
    pub(super) fn drain_host_events(&mut self) {
        while let Ok(event) = self.launch_rx.try_recv() {
            match event {
                LaunchEvent::Started { label } => {
                    self.toasts.success(format!("Launched {label}"));
                }
                LaunchEvent::Finished { label, code } => match code {
                    Some(0) => self.toasts.success(format!("{label} finished")),
                    Some(code) => self.toasts.error(format!("{label} exited with code {code}")),
                    None => self.toasts.error(format!("{label} was terminated")),
                },
                LaunchEvent::Failed { label, error } => {
                    self.toasts.error(format!("{label}: {error}"));
                }
            }
        }

        let mut results = Vec::new();
        while let Ok(result) = self.metadata_rx.try_recv() {
            results.push(result);
        }
        for result in results {
            self.apply_metadata(result);
        }
    }

    // ─── Escape / dismissal ────────────────────────────────────────────────

    pub(super) fn handle_escape(&mut self, ctx: &egui::Context) {
        if !ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            return;
        }
        // Dialogs first, then open forms; never steal Escape from a focused
        // text field.
        if self.confirm_delete.take().is_some() || self.pending_launch.take().is_some() {
            return;
        }
        if ctx.memory(|m| m.focused().is_some()) {
            return;
        }
        if self.rename_project.take().is_some() {
            return;
        }
        self.close_drafts();
    }

    pub(super) fn close_drafts(&mut self) {
        self.note_draft = None;
        self.link_draft = None;
        self.command_draft = None;
        self.agent_draft = None;
    }
}
