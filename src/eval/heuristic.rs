//! Heuristic evaluation for three-player Othello
//!
//! A heuristic scores a board from one player's perspective; higher is
//! better for that player. The search treats it as a black box and only
//! relies on it being deterministic.
//!
//! Three strategies are provided:
//! - Greedy: raw disc count
//! - Weighted sum: positional weights, own minus the opponents' average
//! - Wedge: corners, edges and wedge opportunities on the edge

use crate::board::{Board, Cell, Player, Pos};

use super::weights::{is_corner, is_edge, position_weight, PositionWeight};

/// Capability to evaluate a board for a player
pub trait Heuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

impl<F> Heuristic for F
where
    F: Fn(&Board, Player) -> i32,
{
    #[inline]
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        self(board, player)
    }
}

/// Built-in evaluation strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeuristicKind {
    Greedy,
    WeightedSum,
    Wedge,
}

impl HeuristicKind {
    pub fn name(self) -> &'static str {
        match self {
            HeuristicKind::Greedy => "greedy",
            HeuristicKind::WeightedSum => "weighted sum",
            HeuristicKind::Wedge => "wedge",
        }
    }
}

impl Heuristic for HeuristicKind {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        match self {
            HeuristicKind::Greedy => greedy(board, player),
            HeuristicKind::WeightedSum => weighted_sum(board, player),
            HeuristicKind::Wedge => wedge(board, player),
        }
    }
}

#[inline]
fn clamp_count(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

/// Number of discs owned by `player`
#[must_use]
pub fn greedy(board: &Board, player: Player) -> i32 {
    clamp_count(board.count(player))
}

/// Positional sum for `player` minus the average positional sum of the others
#[must_use]
pub fn weighted_sum(board: &Board, player: Player) -> i32 {
    let mut sums = vec![0i32; board.player_count() as usize];
    for (pos, cell) in board.cells() {
        if let Some(sum) = cell.owner().and_then(|owner| sums.get_mut(owner.index())) {
            *sum += position_weight(board, pos);
        }
    }

    let own = sums.get(player.index()).copied().unwrap_or(0);
    let opponents = sums.len().saturating_sub(1);
    if opponents == 0 {
        return own;
    }
    let others: i32 = sums.iter().sum::<i32>() - own;
    own - others / clamp_count(opponents)
}

/// Neighbours of an edge square along its edge, `None` for corners and interior squares
fn edge_neighbours(board: &Board, pos: Pos) -> Option<(Pos, Pos)> {
    if !is_edge(board, pos) || is_corner(board, pos) {
        return None;
    }
    let (row, col) = (i32::from(pos.row), i32::from(pos.col));
    let last_row = board.rows() as i32 - 1;
    let (a, b) = if row == 0 || row == last_row {
        ((row, col - 1), (row, col + 1))
    } else {
        ((row - 1, col), (row + 1, col))
    };
    Some((board.pos_at(a.0, a.1)?, board.pos_at(b.0, b.1)?))
}

/// An empty edge square flanked along the edge by opponent discs, which
/// `player` can legally take. A disc there cannot be flipped along the edge.
fn is_wedge(board: &Board, pos: Pos, player: Player) -> bool {
    if !board.is_empty(pos) {
        return false;
    }
    let Some((a, b)) = edge_neighbours(board, pos) else {
        return false;
    };
    let is_opponent = |p: Pos| matches!(board.get(p), Cell::Disc(owner) if owner != player);
    is_opponent(a)
        && is_opponent(b)
        && board.is_legal(i32::from(pos.row), i32::from(pos.col), player)
}

/// Edge and corner control plus available wedges
#[must_use]
pub fn wedge(board: &Board, player: Player) -> i32 {
    let mut score = 0;
    for (pos, cell) in board.cells() {
        match cell {
            Cell::Disc(owner) if owner == player => {
                score += 1;
                if is_corner(board, pos) {
                    score += PositionWeight::WEDGE_CORNER;
                } else if is_edge(board, pos) {
                    score += PositionWeight::WEDGE_EDGE;
                }
            }
            Cell::Empty if is_wedge(board, pos, player) => score += PositionWeight::WEDGE,
            _ => {}
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opening() -> Board {
        let mut board = Board::new();
        board.setup_three_players();
        board
    }

    #[test]
    fn test_greedy_counts_discs() {
        let board = opening();
        for player in 0..3 {
            assert_eq!(greedy(&board, Player(player)), 3);
        }
    }

    #[test]
    fn test_closure_is_heuristic() {
        let board = opening();
        let constant = |_: &Board, _: Player| 7;
        assert_eq!(constant.evaluate(&board, Player::FIRST), 7);
    }

    #[test]
    fn test_kind_dispatch() {
        let board = opening();
        assert_eq!(HeuristicKind::Greedy.evaluate(&board, Player::SECOND), 3);
        assert_eq!(
            HeuristicKind::WeightedSum.evaluate(&board, Player::SECOND),
            weighted_sum(&board, Player::SECOND)
        );
    }

    #[test]
    fn test_weighted_sum_prefers_corner() {
        let mut board = Board::new();
        board.put_disc(Pos::new(0, 0), Player::FIRST);
        board.put_disc(Pos::new(1, 1), Player::SECOND);
        board.put_disc(Pos::new(4, 4), Player::THIRD);

        assert!(weighted_sum(&board, Player::FIRST) > weighted_sum(&board, Player::SECOND));
        assert!(weighted_sum(&board, Player::THIRD) > weighted_sum(&board, Player::SECOND));
        // 100 - (-25 + 1) / 2 = 112
        assert_eq!(weighted_sum(&board, Player::FIRST), 112);
    }

    #[test]
    fn test_wedge_bonus() {
        let mut board = Board::new();
        // Top edge: W _ R with Black behind the gap on row 1 and 2
        board.put_disc(Pos::new(0, 3), Player::SECOND);
        board.put_disc(Pos::new(0, 5), Player::THIRD);
        board.put_disc(Pos::new(1, 4), Player::SECOND);
        board.put_disc(Pos::new(2, 4), Player::FIRST);

        assert!(is_wedge(&board, Pos::new(0, 4), Player::FIRST));
        assert!(!is_wedge(&board, Pos::new(0, 4), Player::SECOND));
        // One interior disc plus one wedge
        assert_eq!(wedge(&board, Player::FIRST), 1 + PositionWeight::WEDGE);
    }

    #[test]
    fn test_wedge_counts_edges_and_corners() {
        let mut board = Board::new();
        board.put_disc(Pos::new(0, 0), Player::FIRST);
        board.put_disc(Pos::new(0, 4), Player::FIRST);
        board.put_disc(Pos::new(4, 4), Player::FIRST);

        let expected = 3 + PositionWeight::WEDGE_CORNER + PositionWeight::WEDGE_EDGE;
        assert_eq!(wedge(&board, Player::FIRST), expected);
    }

    #[test]
    fn test_heuristics_are_deterministic() {
        let board = opening();
        for kind in [HeuristicKind::Greedy, HeuristicKind::WeightedSum, HeuristicKind::Wedge] {
            for player in 0..3 {
                assert_eq!(
                    kind.evaluate(&board, Player(player)),
                    kind.evaluate(&board, Player(player))
                );
            }
        }
    }
}
