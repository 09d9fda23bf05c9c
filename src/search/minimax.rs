//! Depth-limited minimax for three-player Othello
//!
//! The three-player game is collapsed into two roles: the maximizing player
//! picks the best child, every other player is assumed to pick the child
//! that is worst for the maximizing player. This is not a max-n or paranoid
//! search. Results are reproducible for a given depth and heuristic.
//!
//! # Features
//!
//! - Pass handling: a player without a legal move is skipped, which still
//!   consumes one ply of depth
//! - Terminal detection: a full rotation of passes ends the game
//! - Scoped mutate/restore on one working board, no per-node clones
//!
//! # Example
//!
//! ```
//! use trithello::board::{Board, Player};
//! use trithello::eval::HeuristicKind;
//! use trithello::search::Searcher;
//!
//! let mut board = Board::new();
//! board.setup_three_players();
//!
//! let mut searcher = Searcher::new(&HeuristicKind::Greedy, 3);
//! let score = searcher.search(&mut board, 2, Player::FIRST, Player::FIRST, 0);
//! println!("score {score} after {} nodes", searcher.stats().nodes);
//! ```

use tracing::{trace, warn};

use crate::board::{Board, Player};
use crate::eval::Heuristic;

/// Search statistics for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, including leaves
    pub nodes: u64,
    /// Heuristic evaluations
    pub leaves: u64,
    /// Pass transitions taken
    pub passes: u64,
}

/// Minimax searcher bound to one heuristic and a player rotation
pub struct Searcher<'h, H: Heuristic + ?Sized> {
    heuristic: &'h H,
    player_count: u8,
    stats: SearchStats,
}

impl<'h, H: Heuristic + ?Sized> Searcher<'h, H> {
    pub fn new(heuristic: &'h H, player_count: u8) -> Self {
        debug_assert!(player_count > 0);
        Self {
            heuristic,
            player_count,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Evaluate `board` for `maximizing` with `current` to move.
    ///
    /// `passes` is the number of consecutive players already skipped. The
    /// board is mutated while searching and restored before returning.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u32,
        maximizing: Player,
        current: Player,
        passes: u8,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 || passes >= self.player_count {
            self.stats.leaves += 1;
            return self.heuristic.evaluate(board, maximizing);
        }

        let next = current.next(self.player_count);
        let moves = board.legal_moves(current);

        if moves.is_empty() {
            self.stats.passes += 1;
            trace!(player = %current, depth, passes, "pass");
            return self.search(board, depth - 1, maximizing, next, passes + 1);
        }

        let maximize = current == maximizing;
        let mut best: Option<i32> = None;

        for pos in moves {
            let child = board.scoped(pos, current, |b| self.search(b, depth - 1, maximizing, next, 0));
            let value = match child {
                Ok(value) => value,
                Err(err) => {
                    // legal_moves only yields legal placements
                    warn!(%pos, player = %current, %err, "generated move rejected");
                    continue;
                }
            };

            best = Some(match best {
                None => value,
                Some(b) if maximize => b.max(value),
                Some(b) => b.min(value),
            });
        }

        // Only reachable with every generated move rejected, treat as a leaf
        best.unwrap_or_else(|| {
            self.stats.leaves += 1;
            self.heuristic.evaluate(board, maximizing)
        })
    }
}

/// Minimax value of `board` for `maximizing`, with `current` to move.
///
/// The board is handed back in exactly the state it was passed in.
pub fn minimax<H: Heuristic + ?Sized>(
    board: &mut Board,
    depth: u32,
    maximizing: Player,
    current: Player,
    player_count: u8,
    passes: u8,
    heuristic: &H,
) -> i32 {
    Searcher::new(heuristic, player_count).search(board, depth, maximizing, current, passes)
}
