//! Terminal scoring
//!
//! The player with strictly the most discs wins. Any tie for the top score
//! is a draw, even if another player trails behind.

use crate::board::{Board, Player};

/// Disc count per player, indexed by player number
pub fn scores(board: &Board) -> Vec<usize> {
    let mut scores = vec![0; board.player_count() as usize];
    for owner in board.cells().filter_map(|(_, cell)| cell.owner()) {
        if let Some(score) = scores.get_mut(owner.index()) {
            *score += 1;
        }
    }
    scores
}

/// Winner from a list of scores, `None` for a draw at the top
pub fn winner_from_scores(scores: &[usize]) -> Option<Player> {
    let max = *scores.iter().max()?;
    let mut leaders = scores.iter().enumerate().filter(|&(_, &s)| s == max);
    let (first, _) = leaders.next()?;
    if leaders.next().is_some() {
        return None;
    }
    u8::try_from(first).ok().map(Player)
}

pub fn winner(board: &Board) -> Option<Player> {
    winner_from_scores(&scores(board))
}
