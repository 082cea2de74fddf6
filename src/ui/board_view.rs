//! Board rendering for the SOS GUI

use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Cell, Pos, Symbol};
use crate::rules::Side;

use super::theme::*;

/// What the board view needs to draw one frame
pub struct BoardScene<'a> {
    pub board: &'a Board,
    /// Symbol a click would write
    pub symbol: Symbol,
    pub last_move: Option<Pos>,
    pub suggestion: Option<(Pos, Symbol)>,
    /// Completed sequences and the side that completed each
    pub lines: &'a [([Pos; 3], Side)],
    /// Whether clicks are accepted
    pub interactive: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 80.0,
            board_rect: Rect::NOTHING,
            size: crate::BOARD_SIZE,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(&mut self, ui: &mut egui::Ui, scene: &BoardScene<'_>) -> Option<Pos> {
        let available_size = ui.available_size();
        self.size = scene.board.size();

        let board_px = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_px - 2.0 * BOARD_MARGIN) / self.size as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_px), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_corner_cells(&painter);
        self.draw_grid(&painter);
        self.draw_letters(&painter, scene.board);

        for (line, side) in scene.lines {
            self.draw_scored_line(&painter, line, *side);
        }

        if let Some(pos) = scene.last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some((pos, symbol)) = scene.suggestion {
            self.draw_letter(&painter, pos, symbol, SUGGESTION);
        }

        // Hover preview and click
        let mut clicked = None;
        if scene.interactive {
            if let Some(pointer) = response.hover_pos() {
                if let Some(pos) = self.screen_to_board(pointer) {
                    let is_valid = scene.board.is_valid_move(pos.row(), pos.col());
                    self.draw_hover_preview(&painter, pos, scene.symbol, is_valid);
                    if response.clicked() && is_valid {
                        clicked = Some(pos);
                    }
                }
            }
        }

        clicked
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Shade the four pre-filled corners
    fn draw_corner_cells(&self, painter: &Painter) {
        let last = (self.size - 1) as u8;
        for (row, col) in [(0, 0), (0, last), (last, 0), (last, last)] {
            painter.rect_filled(self.cell_rect(Pos::new(row, col)), CornerRadius::ZERO, CORNER_CELL);
        }
    }

    /// Draw the N x N cell grid
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = self.size as f32 * self.cell_size;

        for i in 0..=self.size {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }

        // Row / column indices, 0-based as players type them
        let font = FontId::proportional(12.0);
        for i in 0..self.size {
            let center = BOARD_MARGIN + (i as f32 + 0.5) * self.cell_size;
            painter.text(
                self.board_rect.min + Vec2::new(center, BOARD_MARGIN * 0.5),
                Align2::CENTER_CENTER,
                i.to_string(),
                font.clone(),
                GRID_LINE,
            );
            painter.text(
                self.board_rect.min + Vec2::new(BOARD_MARGIN * 0.5, center),
                Align2::CENTER_CENTER,
                i.to_string(),
                font.clone(),
                GRID_LINE,
            );
        }
    }

    fn draw_letters(&self, painter: &Painter, board: &Board) {
        for (row, cells) in board.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let pos = Pos::new(row as u8, col as u8);
                match cell {
                    Cell::S => self.draw_letter(painter, pos, Symbol::S, LETTER_S),
                    Cell::O => self.draw_letter(painter, pos, Symbol::O, LETTER_O),
                    Cell::Empty => {}
                }
            }
        }
    }

    fn draw_letter(&self, painter: &Painter, pos: Pos, symbol: Symbol, color: Color32) {
        painter.text(
            self.board_to_screen(pos),
            Align2::CENTER_CENTER,
            symbol.as_char(),
            FontId::proportional(self.cell_size * LETTER_SIZE_RATIO),
            color,
        );
    }

    /// Stroke through a completed S-O-S, colored by the side that completed it
    fn draw_scored_line(&self, painter: &Painter, line: &[Pos; 3], side: Side) {
        let accent = match side {
            Side::First => FIRST_SIDE,
            Side::Second => SECOND_SIDE,
        };
        let start = self.board_to_screen(line[0]);
        let end = self.board_to_screen(line[2]);
        painter.line_segment([start, end], Stroke::new(SCORED_LINE_WIDTH, scored_line(accent)));
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos);
        let corner = rect.right_top() + Vec2::new(-8.0, 8.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, symbol: Symbol, is_valid: bool) {
        let rect = self.cell_rect(pos).shrink(GRID_LINE_WIDTH);
        if is_valid {
            painter.rect_filled(rect, CornerRadius::same(2), hover_valid());
            self.draw_letter(painter, pos, symbol, Color32::from_rgba_unmultiplied(60, 60, 60, 120));
        } else {
            painter.rect_filled(rect, CornerRadius::same(2), hover_invalid());
        }
    }

    /// Convert screen coordinates to a board cell
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN) / self.cell_size;
        if x < 0.0 || y < 0.0 {
            return None;
        }

        let (col, row) = (x.floor() as usize, y.floor() as usize);
        (row < self.size && col < self.size).then(|| Pos::new(row as u8, col as u8))
    }

    /// Center of a cell in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
