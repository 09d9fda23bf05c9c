//! Theme constants for the three-player Othello GUI

use egui::Color32;

use crate::board::Player;

// Board colors - classic felt
pub const BOARD_BG: Color32 = Color32::from_rgb(34, 120, 60);
pub const BOARD_BORDER: Color32 = Color32::from_rgb(20, 70, 35);
pub const GRID_LINE: Color32 = Color32::from_rgb(15, 55, 28);
pub const COORD_TEXT: Color32 = Color32::from_rgb(200, 230, 205);

// Disc colors
pub const BLACK_DISC: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_DISC_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_DISC: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_DISC_HIGHLIGHT: Color32 = Color32::from_rgb(255, 255, 255);
pub const RED_DISC: Color32 = Color32::from_rgb(200, 40, 45);
pub const RED_DISC_HIGHLIGHT: Color32 = Color32::from_rgb(240, 110, 110);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 200, 40);
pub const LEGAL_MOVE_DOT: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 70);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

/// Main and highlight color of a player's disc
pub fn disc_colors(player: Player) -> (Color32, Color32) {
    match player.0 {
        0 => (BLACK_DISC, BLACK_DISC_HIGHLIGHT),
        1 => (WHITE_DISC, WHITE_DISC_HIGHLIGHT),
        _ => (RED_DISC, RED_DISC_HIGHLIGHT),
    }
}

/// Translucent disc used for hover previews and hints
pub fn ghost_color(player: Player) -> Color32 {
    let (main, _) = disc_colors(player);
    Color32::from_rgba_unmultiplied(main.r(), main.g(), main.b(), 110)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const CENTRAL_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const DISC_RADIUS_RATIO: f32 = 0.40;
pub const GRID_LINE_WIDTH: f32 = 1.5;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
pub const LEGAL_MOVE_DOT_RADIUS: f32 = 4.0;
