//! GUI Theme: "Harbor" - cool slate panels with a copper accent.
//!
//! Color constants for the DevDeck GUI.

use eframe::egui::{self, Color32};

// ═══════════════════════════════════════════════════════════════════════════
// BACKGROUNDS
// ═══════════════════════════════════════════════════════════════════════════

/// Window background: deep blue-grey slate
pub const BG_PRIMARY: Color32 = Color32::from_rgb(21, 24, 30);
/// Card and panel background
pub const BG_SECONDARY: Color32 = Color32::from_rgb(28, 32, 40);
/// Hovered/active surface
pub const BG_HIGHLIGHT: Color32 = Color32::from_rgb(38, 44, 55);
/// Selected item background
pub const BG_SELECTED: Color32 = Color32::from_rgb(46, 56, 72);

// ═══════════════════════════════════════════════════════════════════════════
// TEXT COLORS
// ═══════════════════════════════════════════════════════════════════════════

/// Primary text: warm off-white
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(226, 228, 222);
/// Secondary text
pub const TEXT_DIM: Color32 = Color32::from_rgb(150, 156, 162);
/// Muted text
pub const TEXT_MUTED: Color32 = Color32::from_rgb(100, 106, 114);

// ═══════════════════════════════════════════════════════════════════════════
// ACCENT COLORS
// ═══════════════════════════════════════════════════════════════════════════

/// Copper: primary accent for actions and selection
pub const ACCENT_COPPER: Color32 = Color32::from_rgb(222, 142, 78);
pub const ACCENT_CYAN: Color32 = Color32::from_rgb(94, 196, 204);
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(120, 200, 120);
pub const ACCENT_RED: Color32 = Color32::from_rgb(232, 100, 96);
pub const ACCENT_YELLOW: Color32 = Color32::from_rgb(230, 196, 90);

/// Apply the theme to the egui context. Called once at startup.
pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_SECONDARY;
    visuals.extreme_bg_color = Color32::from_rgb(15, 17, 21);
    visuals.faint_bg_color = BG_SECONDARY;
    visuals.widgets.noninteractive.bg_fill = BG_SECONDARY;
    visuals.widgets.inactive.bg_fill = BG_HIGHLIGHT;
    visuals.widgets.hovered.bg_fill = BG_SELECTED;
    visuals.widgets.active.bg_fill = BG_SELECTED;
    visuals.selection.bg_fill = BG_SELECTED;
    visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT_COPPER);
    visuals.hyperlink_color = ACCENT_CYAN;
    visuals.override_text_color = Some(TEXT_PRIMARY);
    ctx.set_visuals(visuals);
}
