//! Toast notifications for host-call outcomes.
//!
//! Launch results, metadata fetch failures and save errors show up as
//! temporary notifications stacked in the top-right corner.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use eframe::egui::{self, Align2, Color32, Id, RichText, Vec2};

use super::theme::{ACCENT_CYAN, ACCENT_GREEN, ACCENT_RED, BG_SECONDARY, TEXT_PRIMARY};

/// How long a toast is displayed
const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Animation duration for fade in/out
const FADE_DURATION: f32 = 0.3;

/// At most this many toasts on screen; older ones drop first.
const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn color(&self) -> Color32 {
        match self {
            ToastKind::Info => ACCENT_CYAN,
            ToastKind::Success => ACCENT_GREEN,
            ToastKind::Error => ACCENT_RED,
        }
    }
}

#[derive(Debug)]
struct Toast {
    message: String,
    kind: ToastKind,
    shown_at: Instant,
}

/// Queue of active toasts.
#[derive(Debug, Default)]
pub struct Toasts {
    active: VecDeque<Toast>,
}

impl Toasts {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.active.push_back(Toast {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
        });
        while self.active.len() > MAX_VISIBLE {
            self.active.pop_front();
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    /// Render the stack and drop expired toasts.
    pub fn render(&mut self, ctx: &egui::Context) {
        self.active
            .retain(|t| t.shown_at.elapsed() < TOAST_DURATION);
        if self.active.is_empty() {
            return;
        }

        let mut offset_y = 48.0;
        for (i, toast) in self.active.iter().enumerate() {
            let elapsed = toast.shown_at.elapsed().as_secs_f32();
            let total = TOAST_DURATION.as_secs_f32();
            let alpha = if elapsed < FADE_DURATION {
                elapsed / FADE_DURATION
            } else if elapsed > total - FADE_DURATION {
                (total - elapsed) / FADE_DURATION
            } else {
                1.0
            };

            let bg = Color32::from_rgba_unmultiplied(
                BG_SECONDARY.r(),
                BG_SECONDARY.g(),
                BG_SECONDARY.b(),
                (alpha * 240.0) as u8,
            );
            let accent = toast.kind.color();
            let stroke_color = Color32::from_rgba_unmultiplied(
                accent.r(),
                accent.g(),
                accent.b(),
                (alpha * 180.0) as u8,
            );
            let text_color = Color32::from_rgba_unmultiplied(
                TEXT_PRIMARY.r(),
                TEXT_PRIMARY.g(),
                TEXT_PRIMARY.b(),
                (alpha * 255.0) as u8,
            );

            egui::Area::new(Id::new(("toast", i)))
                .anchor(Align2::RIGHT_TOP, Vec2::new(-16.0, offset_y))
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    egui::Frame::NONE
                        .fill(bg)
                        .stroke(egui::Stroke::new(1.0, stroke_color))
                        .corner_radius(6.0)
                        .inner_margin(12.0)
                        .show(ui, |ui| {
                            ui.set_max_width(320.0);
                            ui.label(RichText::new(&toast.message).color(text_color));
                        });
                });
            offset_y += 52.0;
        }

        // Keep repainting for the fades
        ctx.request_repaint();
    }
}
