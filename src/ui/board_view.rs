//! Board rendering for the three-player Othello GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Cell, Player, Pos};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    rows: usize,
    columns: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 48.0,
            board_rect: Rect::NOTHING,
            rows: 0,
            columns: 0,
        }
    }
}

/// What the view needs to know about the turn besides the board
pub struct TurnView {
    pub current_turn: Player,
    pub last_move: Option<Pos>,
    pub suggested_move: Option<Pos>,
    /// Accept clicks and show hover previews
    pub interactive: bool,
}

impl BoardView {
    /// Render the board and return the clicked position if it is a legal move
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, turn: &TurnView) -> Option<Pos> {
        let available_size = ui.available_size();

        self.rows = board.rows();
        self.columns = board.columns();
        let side = available_size.x.min(available_size.y) - 20.0;
        let cells = self.rows.max(self.columns) as f32;
        self.cell_size = (side - 2.0 * BOARD_MARGIN) / cells;

        let (response, painter) = ui.allocate_painter(Vec2::new(side, side), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BORDER);
        painter.rect_filled(self.grid_rect(), CornerRadius::ZERO, BOARD_BG);

        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_discs(&painter, board);

        if let Some(pos) = turn.last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(pos) = turn.suggested_move {
            self.draw_suggestion(&painter, pos, turn.current_turn);
        }

        if !turn.interactive {
            return None;
        }

        for pos in board.legal_moves(turn.current_turn) {
            painter.circle_filled(self.cell_center(pos), LEGAL_MOVE_DOT_RADIUS, LEGAL_MOVE_DOT);
        }

        let pointer = response.hover_pos()?;
        let pos = self.screen_to_board(pointer)?;
        let is_legal = board.is_legal(i32::from(pos.row), i32::from(pos.col), turn.current_turn);

        let radius = self.cell_size * DISC_RADIUS_RATIO;
        let color = if is_legal {
            ghost_color(turn.current_turn)
        } else {
            hover_invalid()
        };
        painter.circle_filled(self.cell_center(pos), radius, color);

        (response.clicked() && is_legal).then_some(pos)
    }

    fn grid_rect(&self) -> Rect {
        Rect::from_min_size(
            self.board_rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::new(self.columns as f32 * self.cell_size, self.rows as f32 * self.cell_size),
        )
    }

    /// Cell borders
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let grid = self.grid_rect();

        for i in 0..=self.columns {
            let x = grid.min.x + i as f32 * self.cell_size;
            painter.line_segment([Pos2::new(x, grid.min.y), Pos2::new(x, grid.max.y)], stroke);
        }
        for i in 0..=self.rows {
            let y = grid.min.y + i as f32 * self.cell_size;
            painter.line_segment([Pos2::new(grid.min.x, y), Pos2::new(grid.max.x, y)], stroke);
        }
    }

    /// Row and column indices, matching the coordinates typed in the terminal
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(13.0);
        let grid = self.grid_rect();

        for col in 0..self.columns {
            let x = grid.min.x + (col as f32 + 0.5) * self.cell_size;
            let pos = Pos2::new(x, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, col.to_string(), font.clone(), COORD_TEXT);
        }

        for row in 0..self.rows {
            let y = grid.min.y + (row as f32 + 0.5) * self.cell_size;
            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, y);
            painter.text(pos, egui::Align2::CENTER_CENTER, row.to_string(), font.clone(), COORD_TEXT);
        }
    }

    fn draw_discs(&self, painter: &Painter, board: &Board) {
        for (pos, cell) in board.cells() {
            if let Cell::Disc(player) = cell {
                self.draw_disc(painter, pos, player);
            }
        }
    }

    /// Draw a single disc with shadow and highlight
    fn draw_disc(&self, painter: &Painter, pos: Pos, player: Player) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * DISC_RADIUS_RATIO;
        let (main, highlight) = disc_colors(player);

        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            egui::Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );
        painter.circle_filled(center, radius, main);
        painter.circle_filled(center + Vec2::splat(-radius * 0.3), radius * 0.2, highlight);
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        painter.circle_filled(self.cell_center(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_suggestion(&self, painter: &Painter, pos: Pos, turn: Player) {
        let center = self.cell_center(pos);
        painter.circle_filled(center, self.cell_size * DISC_RADIUS_RATIO, ghost_color(turn));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(16.0),
            WIN_HIGHLIGHT,
        );
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.grid_rect().min;
        if relative.x < 0.0 || relative.y < 0.0 {
            return None;
        }
        let col = (relative.x / self.cell_size).floor() as usize;
        let row = (relative.y / self.cell_size).floor() as usize;

        (row < self.rows && col < self.columns).then(|| Pos::new(row as u8, col as u8))
    }

    /// Centre of a cell in screen coordinates
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        let grid = self.grid_rect();
        Pos2::new(
            grid.min.x + (pos.col as f32 + 0.5) * self.cell_size,
            grid.min.y + (pos.row as f32 + 0.5) * self.cell_size,
        )
    }
}
