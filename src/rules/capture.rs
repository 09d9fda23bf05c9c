//! Capture (flip) rules
//!
//! From the placed disc, walk each of the eight compass rays collecting
//! opposing discs. The run is captured only when the walk ends on one of the
//! mover's own discs; an empty cell or the board edge discards it.

use crate::board::{Board, Cell, Player, Pos};

/// The eight compass directions, clockwise from north
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),  // N
    (-1, 1),  // NE
    (0, 1),   // E
    (1, 1),   // SE
    (1, 0),   // S
    (1, -1),  // SW
    (0, -1),  // W
    (-1, -1), // NW
];

/// Discs captured along a single ray. Empty when the ray does not close.
fn ray_captures(board: &Board, row: i32, col: i32, dr: i32, dc: i32, player: Player) -> Vec<Pos> {
    let mut visited = Vec::new();
    let (mut r, mut c) = (row + dr, col + dc);

    while let Some(pos) = board.pos_at(r, c) {
        match board.get(pos) {
            Cell::Disc(owner) if owner == player => return visited,
            Cell::Disc(_) => visited.push(pos),
            Cell::Empty => return Vec::new(),
        }
        r += dr;
        c += dc;
    }

    // Walked off the board without closing the run
    Vec::new()
}

/// Find discs that would be captured if `player` placed at (row, col).
///
/// Only the flanking geometry is checked; callers use `check_move` for the
/// full legality rules. The result is ordered by direction, then distance.
pub fn captures(board: &Board, row: i32, col: i32, player: Player) -> Vec<Pos> {
    DIRECTIONS
        .iter()
        .flat_map(|&(dr, dc)| ray_captures(board, row, col, dr, dc, player))
        .collect()
}

/// Check if a placement would capture anything, stopping at the first closing ray.
pub fn has_capture(board: &Board, row: i32, col: i32, player: Player) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| !ray_captures(board, row, col, dr, dc, player).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: u8, col: u8) -> Pos {
        Pos::new(row, col)
    }

    #[test]
    fn test_capture_flanked_run() {
        let mut board = Board::new();
        // Row 4: W B B B _   W places at col 5 and flanks the run
        board.put_disc(p(4, 1), Player::SECOND);
        for col in 2..=4 {
            board.put_disc(p(4, col), Player::FIRST);
        }

        let captured = captures(&board, 4, 5, Player::SECOND);
        assert_eq!(captured, vec![p(4, 4), p(4, 3), p(4, 2)]);
        assert!(!captured.contains(&p(4, 1)));
        assert!(!captured.contains(&p(4, 5)));
    }

    #[test]
    fn test_capture_vertical_and_diagonal() {
        let mut board = Board::new();
        board.put_disc(p(2, 4), Player::FIRST);
        board.put_disc(p(3, 4), Player::SECOND);
        board.put_disc(p(2, 2), Player::FIRST);
        board.put_disc(p(3, 3), Player::THIRD);

        let captured = captures(&board, 4, 4, Player::FIRST);
        assert_eq!(captured.len(), 2);
        assert!(captured.contains(&p(3, 4)));
        assert!(captured.contains(&p(3, 3)));
    }

    #[test]
    fn test_capture_mixed_opponents_in_one_ray() {
        let mut board = Board::new();
        // Both opponents count as opposing discs
        board.put_disc(p(0, 1), Player::SECOND);
        board.put_disc(p(0, 2), Player::THIRD);
        board.put_disc(p(0, 3), Player::FIRST);

        let captured = captures(&board, 0, 0, Player::FIRST);
        assert_eq!(captured, vec![p(0, 1), p(0, 2)]);
    }

    #[test]
    fn test_no_capture_when_ray_hits_empty() {
        let mut board = Board::new();
        board.put_disc(p(4, 3), Player::SECOND);
        board.put_disc(p(4, 2), Player::SECOND);
        // (4, 1) empty, (4, 0) own disc behind the gap
        board.put_disc(p(4, 0), Player::FIRST);

        assert!(captures(&board, 4, 4, Player::FIRST).is_empty());
        assert!(!has_capture(&board, 4, 4, Player::FIRST));
    }

    #[test]
    fn test_no_capture_when_ray_leaves_board() {
        let mut board = Board::new();
        board.put_disc(p(0, 1), Player::SECOND);
        board.put_disc(p(0, 0), Player::SECOND);

        assert!(captures(&board, 0, 2, Player::FIRST).is_empty());
    }

    #[test]
    fn test_adjacent_own_disc_captures_nothing() {
        let mut board = Board::new();
        board.put_disc(p(4, 5), Player::FIRST);
        board.put_disc(p(4, 6), Player::SECOND);
        board.put_disc(p(4, 7), Player::FIRST);

        // The ray stops at the first own disc, the run behind it is not reached
        assert!(captures(&board, 4, 4, Player::FIRST).is_empty());
    }

    #[test]
    fn test_capture_multiple_directions() {
        let mut board = Board::new();
        //     B
        //     W
        // B W _ W B
        board.put_disc(p(2, 4), Player::FIRST);
        board.put_disc(p(3, 4), Player::SECOND);
        board.put_disc(p(4, 2), Player::FIRST);
        board.put_disc(p(4, 3), Player::SECOND);
        board.put_disc(p(4, 5), Player::THIRD);
        board.put_disc(p(4, 6), Player::FIRST);

        let captured = captures(&board, 4, 4, Player::FIRST);
        assert_eq!(captured.len(), 3);
        assert!(captured.contains(&p(3, 4)));
        assert!(captured.contains(&p(4, 3)));
        assert!(captured.contains(&p(4, 5)));
    }

    #[test]
    fn test_capture_at_corner() {
        let mut board = Board::new();
        board.put_disc(p(1, 1), Player::THIRD);
        board.put_disc(p(2, 2), Player::THIRD);
        board.put_disc(p(3, 3), Player::SECOND);

        let captured = captures(&board, 0, 0, Player::SECOND);
        assert_eq!(captured, vec![p(1, 1), p(2, 2)]);
    }
}
