//! Positional weights for board evaluation
//!
//! Corners can never be flipped back, so they dominate. The squares handing
//! a corner to the next player are penalised, edges are mildly favoured.

use crate::board::{Board, Pos};

/// Square weights for positional evaluation
pub struct PositionWeight;

impl PositionWeight {
    /// Corner square
    pub const CORNER: i32 = 100;
    /// Diagonal neighbour of a corner (X-square)
    pub const X_SQUARE: i32 = -25;
    /// Edge neighbour of a corner (C-square)
    pub const C_SQUARE: i32 = -10;
    /// Any other edge square
    pub const EDGE: i32 = 10;
    /// Second ring, gives access to the edge
    pub const INNER_RING: i32 = -2;
    /// Everything else
    pub const INTERIOR: i32 = 1;

    /// Per-square bonuses used by the wedge strategy
    pub const WEDGE_CORNER: i32 = 25;
    pub const WEDGE_EDGE: i32 = 5;
    pub const WEDGE: i32 = 15;
}

/// Distance from the nearest border along one axis
#[inline]
fn border_distance(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1).saturating_sub(index))
}

#[inline]
pub fn is_corner(board: &Board, pos: Pos) -> bool {
    border_distance(pos.row as usize, board.rows()) == 0
        && border_distance(pos.col as usize, board.columns()) == 0
}

#[inline]
pub fn is_edge(board: &Board, pos: Pos) -> bool {
    border_distance(pos.row as usize, board.rows()) == 0
        || border_distance(pos.col as usize, board.columns()) == 0
}

/// Weight of a square, derived from its distance to the borders
pub fn position_weight(board: &Board, pos: Pos) -> i32 {
    let dr = border_distance(pos.row as usize, board.rows());
    let dc = border_distance(pos.col as usize, board.columns());

    match (dr, dc) {
        (0, 0) => PositionWeight::CORNER,
        (1, 1) => PositionWeight::X_SQUARE,
        (0, 1) | (1, 0) => PositionWeight::C_SQUARE,
        (0, _) | (_, 0) => PositionWeight::EDGE,
        (1, _) | (_, 1) => PositionWeight::INNER_RING,
        _ => PositionWeight::INTERIOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_on_default_board() {
        let board = Board::new();
        assert_eq!(position_weight(&board, Pos::new(0, 0)), PositionWeight::CORNER);
        assert_eq!(position_weight(&board, Pos::new(8, 8)), PositionWeight::CORNER);
        assert_eq!(position_weight(&board, Pos::new(1, 7)), PositionWeight::X_SQUARE);
        assert_eq!(position_weight(&board, Pos::new(0, 1)), PositionWeight::C_SQUARE);
        assert_eq!(position_weight(&board, Pos::new(8, 4)), PositionWeight::EDGE);
        assert_eq!(position_weight(&board, Pos::new(1, 4)), PositionWeight::INNER_RING);
        assert_eq!(position_weight(&board, Pos::new(4, 4)), PositionWeight::INTERIOR);
    }

    #[test]
    fn test_weights_are_symmetric() {
        let board = Board::new();
        for (pos, _) in board.cells() {
            let mirrored = Pos::new(8 - pos.row, 8 - pos.col);
            let transposed = Pos::new(pos.col, pos.row);
            assert_eq!(position_weight(&board, pos), position_weight(&board, mirrored));
            assert_eq!(position_weight(&board, pos), position_weight(&board, transposed));
        }
    }

    #[test]
    fn test_corner_and_edge_predicates() {
        let board = Board::new();
        assert!(is_corner(&board, Pos::new(0, 8)));
        assert!(!is_corner(&board, Pos::new(0, 4)));
        assert!(is_edge(&board, Pos::new(0, 4)));
        assert!(!is_edge(&board, Pos::new(4, 4)));
    }
}
