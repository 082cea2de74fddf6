//! Theme constants for the SOS GUI

use egui::Color32;

// Board colors - paper and ink
pub const BOARD_BG: Color32 = Color32::from_rgb(246, 240, 225);
pub const GRID_LINE: Color32 = Color32::from_rgb(90, 80, 70);
pub const CORNER_CELL: Color32 = Color32::from_rgb(236, 226, 204);

// Letters
pub const LETTER_S: Color32 = Color32::from_rgb(40, 60, 120);
pub const LETTER_O: Color32 = Color32::from_rgb(150, 50, 40);

// Side accents (scored lines, score cards)
pub const FIRST_SIDE: Color32 = Color32::from_rgb(70, 130, 220);
pub const SECOND_SIDE: Color32 = Color32::from_rgb(220, 110, 60);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);
pub const SUGGESTION: Color32 = Color32::from_rgb(80, 170, 90);

// Functions for colors that can't be const
pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 90)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 70)
}

pub fn scored_line(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 170)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Buttons
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const BUTTON_SELECTED: Color32 = Color32::from_rgb(70, 110, 170);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 30.0;
pub const GRID_LINE_WIDTH: f32 = 2.0;
pub const LETTER_SIZE_RATIO: f32 = 0.6;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
pub const SCORED_LINE_WIDTH: f32 = 5.0;
