//! Move legality for three-player Othello
//!
//! A placement is legal when the target is on the board, empty, touches at
//! least one disc in any of the eight neighbouring cells, and captures at
//! least one opposing disc. The adjacency rule is stricter than classic
//! Othello and is checked before captures.

use crate::board::{Board, Player, Pos};
use crate::error::IllegalMove;

use super::capture::has_capture;

/// Check if the target touches an occupied cell (border-clipped 8-neighbourhood)
fn has_adjacent_disc(board: &Board, pos: Pos) -> bool {
    let (row, col) = (i32::from(pos.row), i32::from(pos.col));
    (-1..=1)
        .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
        .filter(|&(dr, dc)| (dr, dc) != (0, 0))
        .filter_map(|(dr, dc)| board.cell_at(row + dr, col + dc))
        .any(|cell| !cell.is_empty())
}

/// Validate a placement, returning the target position or the first rule it breaks.
pub fn check_move(board: &Board, row: i32, col: i32, player: Player) -> Result<Pos, IllegalMove> {
    let pos = board
        .pos_at(row, col)
        .ok_or(IllegalMove::OutOfBounds { row, col })?;

    if !board.is_empty(pos) {
        return Err(IllegalMove::SquareTaken(pos));
    }

    if !has_adjacent_disc(board, pos) {
        return Err(IllegalMove::NotAdjacent(pos));
    }

    if !has_capture(board, row, col, player) {
        return Err(IllegalMove::NoCaptures(pos));
    }

    Ok(pos)
}

#[inline]
pub fn is_legal(board: &Board, row: i32, col: i32, player: Player) -> bool {
    check_move(board, row, col, player).is_ok()
}

/// All legal moves for `player` in row-major order.
/// The order is relied on for tie-breaking in move selection.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Pos> {
    board
        .cells()
        .filter(|&(pos, _)| is_legal(board, i32::from(pos.row), i32::from(pos.col), player))
        .map(|(pos, _)| pos)
        .collect()
}

pub fn has_legal_move(board: &Board, player: Player) -> bool {
    board
        .cells()
        .any(|(pos, _)| is_legal(board, i32::from(pos.row), i32::from(pos.col), player))
}
