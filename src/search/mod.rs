//! Search module for three-player Othello AI
//!
//! Contains the depth-limited minimax used by the AI players. Move
//! selection at the root lives in [`crate::engine`].

pub mod minimax;

pub use minimax::{minimax, SearchStats, Searcher};
