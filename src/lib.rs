//! Three-player Othello rules engine with a minimax AI
//!
//! Three players (Black, White, Red) share a 9x9 board and take turns in a
//! fixed rotation. A disc must go on an empty square next to an existing
//! disc and must close at least one straight run of other players' discs
//! with one of the mover's own; every closed run is flipped. A player
//! without a legal move passes. The game ends when nobody can move and the
//! player with the strictly highest disc count wins.
//!
//! # Architecture
//!
//! - [`board`]: grid, cells, players and positions
//! - [`rules`]: capture detection, legality, placement and scoring
//! - [`eval`]: heuristics (greedy, weighted sum, wedge)
//! - [`search`]: depth-limited minimax, one maximizer against the rest
//! - [`engine`]: move selection for a player on top of the search
//! - [`game`], [`player`]: turn loop and seat agents
//! - [`console`], [`ui`]: terminal and egui front ends
//!
//! # Quick Start
//!
//! ```
//! use trithello::{AIEngine, Board, HeuristicKind, Player};
//!
//! let mut board = Board::new();
//! board.setup_three_players();
//!
//! let engine = AIEngine::new(HeuristicKind::WeightedSum, 1);
//! if let Some(pos) = engine.get_move(&board, Player::FIRST) {
//!     board.place_at(pos, Player::FIRST).unwrap();
//! }
//! assert_eq!(board.disc_count(), 10);
//! ```

pub mod board;
pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod player;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Placement, Player, Pos};
pub use engine::{AIEngine, MoveResult};
pub use error::{GameError, IllegalMove};
pub use eval::{Heuristic, HeuristicKind};
