//! Theme constants for the Tic-Tac-Toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(245, 240, 230);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 60, 70);

// Mark colors
pub const X_MARK: Color32 = Color32::from_rgb(220, 70, 70);
pub const O_MARK: Color32 = Color32::from_rgb(60, 110, 210);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 180, 40);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 200, 80);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 60)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_READY: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(80, 60, 30);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const GRID_LINE_WIDTH: f32 = 4.0;
pub const MARK_STROKE_WIDTH: f32 = 10.0;
pub const MARK_INSET_RATIO: f32 = 0.22;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 6.0;
