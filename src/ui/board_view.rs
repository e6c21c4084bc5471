//! Board rendering for the Tic-Tac-Toe GUI

use crate::rules::is_valid_move;
use crate::{Board, Mark, Pos, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 120.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Mark,
        last_move: Option<Pos>,
        winning_line: Option<[Pos; 3]>,
        accepting_input: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_BG);

        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        // Handle hover preview and click
        let mut clicked_pos = None;

        if accepting_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    if is_valid_move(board, board_pos) {
                        self.draw_hover_preview(&painter, board_pos, current_turn);

                        if response.clicked() {
                            clicked_pos = Some(board_pos);
                        }
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the two inner lines in each direction
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = self.cell_size * BOARD_SIZE as f32;

        for i in 1..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for idx in 0..BOARD_SIZE * BOARD_SIZE {
            let pos = Pos::from_index(idx);
            if let Some(mark) = board.get(pos).mark() {
                self.draw_mark(painter, pos, mark, mark_color(mark));
            }
        }
    }

    /// Draw an X as two strokes or an O as a ring
    fn draw_mark(&self, painter: &Painter, pos: Pos, mark: Mark, color: Color32) {
        let center = self.board_to_screen(pos);
        let half = self.cell_size * (0.5 - MARK_INSET_RATIO);
        let stroke = Stroke::new(MARK_STROKE_WIDTH, color);

        match mark {
            Mark::X => {
                painter.line_segment(
                    [center + Vec2::new(-half, -half), center + Vec2::new(half, half)],
                    stroke,
                );
                painter.line_segment(
                    [center + Vec2::new(half, -half), center + Vec2::new(-half, half)],
                    stroke,
                );
            }
            Mark::O => {
                painter.circle_stroke(center, half, stroke);
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let corner = self.board_to_screen(pos)
            + Vec2::new(self.cell_size * 0.38, -self.cell_size * 0.38);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw a stroke through the winning line
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 3]) {
        let stroke = Stroke::new(MARK_STROKE_WIDTH * 0.8, WIN_HIGHLIGHT);
        let start = self.board_to_screen(line[0]);
        let end = self.board_to_screen(line[2]);
        painter.line_segment([start, end], stroke);
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Mark) {
        let rect = Rect::from_center_size(self.board_to_screen(pos), Vec2::splat(self.cell_size));
        painter.rect_filled(rect.shrink(GRID_LINE_WIDTH), CornerRadius::same(4), hover_valid());

        let faded = mark_color(turn).gamma_multiply(0.35);
        self.draw_mark(painter, pos, turn, faded);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to the screen center of its cell
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}

fn mark_color(mark: Mark) -> Color32 {
    match mark {
        Mark::X => X_MARK,
        Mark::O => O_MARK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        BoardView {
            cell_size: 100.0,
            board_rect: Rect::from_min_size(Pos2::new(10.0, 10.0), Vec2::splat(348.0)),
        }
    }

    #[test]
    fn test_screen_board_round_trip_centers() {
        let view = view();
        for idx in 0..9 {
            let pos = Pos::from_index(idx);
            assert_eq!(view.screen_to_board(view.board_to_screen(pos)), Some(pos));
        }
    }

    #[test]
    fn test_screen_outside_grid() {
        let view = view();
        assert_eq!(view.screen_to_board(Pos2::new(5.0, 5.0)), None);
        assert_eq!(view.screen_to_board(Pos2::new(400.0, 50.0)), None);
    }
}
