//! Evaluation module for three-player Othello positions
//!
//! This module provides the heuristic capability used by the search and
//! the built-in strategies. The evaluation considers:
//! - Disc counts
//! - Positional weights (corners, edges, squares near corners)
//! - Wedge opportunities on the edges

pub mod heuristic;
pub mod weights;

pub use heuristic::{greedy, wedge, weighted_sum, Heuristic, HeuristicKind};
pub use weights::{position_weight, PositionWeight};
