//! GUI module for three-player Othello
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::TrithelloApp;
pub use game_state::{GameResult, GameState};
