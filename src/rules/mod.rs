//! Game rules for three-player Othello
//!
//! This module implements the rule set:
//! - Capture rules (eight-direction flanking)
//! - Legality (bounds, empty target, adjacency, must capture)
//! - Terminal scoring (unique top score wins, ties draw)
//!
//! The board exposes each rule as an inherent method as well.

pub mod capture;
pub mod legality;
pub mod outcome;

// Re-exports for convenient access
pub use capture::{captures, has_capture, DIRECTIONS};
pub use legality::{check_move, has_legal_move, is_legal, legal_moves};
pub use outcome::{scores, winner, winner_from_scores};

use crate::board::{Board, Placement, Player, Pos};
use crate::error::IllegalMove;

impl Board {
    /// Commit a move for `player`. The target and every captured disc become
    /// `player`. Illegal moves are rejected and leave the board untouched.
    pub fn place(&mut self, row: i32, col: i32, player: Player) -> Result<Placement, IllegalMove> {
        let pos = check_move(self, row, col, player)?;
        let captured = captures(self, row, col, player);
        Ok(self.apply_unchecked(pos, player, captured))
    }

    /// Place at a board position, see [`Board::place`]
    #[inline]
    pub fn place_at(&mut self, pos: Pos, player: Player) -> Result<Placement, IllegalMove> {
        self.place(i32::from(pos.row), i32::from(pos.col), player)
    }

    /// Play a move, run `f` on the resulting position, then restore the board
    /// exactly (target emptied, every captured disc back to its former owner).
    pub fn scoped<R>(
        &mut self,
        pos: Pos,
        player: Player,
        f: impl FnOnce(&mut Board) -> R,
    ) -> Result<R, IllegalMove> {
        let placement = self.place_at(pos, player)?;
        let result = f(self);
        self.revert(placement);
        Ok(result)
    }

    /// Discs `player` would capture at (row, col)
    #[inline]
    pub fn captures(&self, row: i32, col: i32, player: Player) -> Vec<Pos> {
        captures(self, row, col, player)
    }

    #[inline]
    pub fn check_move(&self, row: i32, col: i32, player: Player) -> Result<Pos, IllegalMove> {
        check_move(self, row, col, player)
    }

    #[inline]
    pub fn is_legal(&self, row: i32, col: i32, player: Player) -> bool {
        is_legal(self, row, col, player)
    }

    #[inline]
    pub fn legal_moves(&self, player: Player) -> Vec<Pos> {
        legal_moves(self, player)
    }

    #[inline]
    pub fn has_legal_move(&self, player: Player) -> bool {
        has_legal_move(self, player)
    }

    #[inline]
    pub fn scores(&self) -> Vec<usize> {
        scores(self)
    }

    /// Winner by disc count, `None` on any tie for first
    #[inline]
    pub fn winner(&self) -> Option<Player> {
        winner(self)
    }
}
