//! AI engine: root move selection on top of the minimax search
//!
//! Every legal root move is played on a working copy of the board and the
//! resulting position is searched to the configured depth with the next
//! player to move. The move with the highest value wins; ties go to the
//! move found first in row-major order, so the choice is reproducible.
//!
//! # Example
//!
//! ```
//! use trithello::{AIEngine, Board, HeuristicKind, Player};
//!
//! let mut board = Board::new();
//! board.setup_three_players();
//!
//! let engine = AIEngine::new(HeuristicKind::WeightedSum, 1);
//! let result = engine.get_move_with_stats(&board, Player::FIRST);
//! if let Some(pos) = result.best_move {
//!     board.place_at(pos, Player::FIRST).unwrap();
//! }
//! println!("score {} in {}ms", result.score, result.time_ms);
//! ```

use std::time::Instant;

use tracing::{debug, warn};

use crate::board::{Board, Player, Pos};
use crate::eval::{Heuristic, HeuristicKind};
use crate::search::{SearchStats, Searcher};

/// Default search depth below each root move
pub const DEFAULT_DEPTH: u32 = 2;

/// Result of a move search with statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, `None` when the player has to pass
    pub best_move: Option<Pos>,
    /// Search value of the chosen move (0 when there is no move)
    pub score: i32,
    /// Number of legal root moves considered
    pub candidates: usize,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    fn pass(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            candidates: 0,
            time_ms,
            nodes: 0,
        }
    }
}

/// AI engine for three-player Othello
#[derive(Debug, Clone)]
pub struct AIEngine<H = HeuristicKind> {
    heuristic: H,
    depth: u32,
}

impl AIEngine<HeuristicKind> {
    /// Engine with the weighted-sum heuristic at the default depth
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(HeuristicKind::WeightedSum, DEFAULT_DEPTH)
    }
}

impl<H: Heuristic> AIEngine<H> {
    #[must_use]
    pub fn new(heuristic: H, depth: u32) -> Self {
        Self { heuristic, depth }
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Get the best move for `player`, `None` if it has to pass
    #[must_use]
    pub fn get_move(&self, board: &Board, player: Player) -> Option<Pos> {
        self.get_move_with_stats(board, player).best_move
    }

    /// Evaluate every root move and return the best one with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&self, board: &Board, player: Player) -> MoveResult {
        let start = Instant::now();
        let moves = board.legal_moves(player);
        if moves.is_empty() {
            debug!(%player, "no legal move, passing");
            return MoveResult::pass(start.elapsed().as_millis() as u64);
        }

        let next = player.next(board.player_count());
        let mut work = board.clone();
        let mut searcher = Searcher::new(&self.heuristic, board.player_count());
        let mut best: Option<(Pos, i32)> = None;

        for &pos in &moves {
            let searched = work.scoped(pos, player, |b| searcher.search(b, self.depth, player, next, 0));
            let value = match searched {
                Ok(value) => value,
                Err(err) => {
                    warn!(%pos, %player, %err, "root move rejected");
                    continue;
                }
            };

            // Strict comparison keeps the first move on ties
            if best.map_or(true, |(_, score)| value > score) {
                best = Some((pos, value));
            }
        }

        let SearchStats { nodes, .. } = searcher.stats();
        let time_ms = start.elapsed().as_millis() as u64;
        debug!(
            %player,
            best = ?best.map(|(pos, _)| pos),
            score = best.map_or(0, |(_, score)| score),
            candidates = moves.len(),
            nodes,
            time_ms,
            "move selected"
        );

        MoveResult {
            best_move: best.map(|(pos, _)| pos),
            score: best.map_or(0, |(_, score)| score),
            candidates: moves.len(),
            time_ms,
            nodes,
        }
    }
}

impl Default for AIEngine<HeuristicKind> {
    fn default() -> Self {
        Self::with_defaults()
    }
}
