use super::*;
use crate::error::IllegalMove;

fn opening() -> Board {
    let mut board = Board::new();
    board.setup_three_players();
    board
}

#[test]
fn test_player_rotation() {
    assert_eq!(Player::FIRST.next(3), Player::SECOND);
    assert_eq!(Player::SECOND.next(3), Player::THIRD);
    assert_eq!(Player::THIRD.next(3), Player::FIRST);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.rows(), DEFAULT_ROWS);
    assert_eq!(board.columns(), DEFAULT_COLUMNS);
    assert_eq!(board.player_count(), DEFAULT_PLAYERS);
    assert_eq!(board.disc_count(), 0);
    assert!(board.cells().all(|(_, cell)| cell == Cell::Empty));
}

#[test]
#[should_panic]
fn test_zero_sized_board_panics() {
    let _ = Board::with_size(0, 9, 3);
}

#[test]
fn test_three_player_opening() {
    let board = opening();
    let expect = [
        ((3, 3), 0),
        ((3, 5), 0),
        ((4, 4), 0),
        ((3, 4), 1),
        ((5, 3), 1),
        ((5, 5), 1),
        ((4, 3), 2),
        ((4, 5), 2),
        ((5, 4), 2),
    ];
    for ((row, col), player) in expect {
        assert_eq!(board.get(Pos::new(row, col)), Cell::Disc(Player(player)));
    }
    assert_eq!(board.disc_count(), 9);
    assert_eq!(board.scores(), vec![3, 3, 3]);
}

#[test]
fn test_bounds() {
    let board = Board::new();
    assert!(board.in_bounds(0, 0));
    assert!(board.in_bounds(8, 8));
    assert!(!board.in_bounds(-1, 0));
    assert!(!board.in_bounds(0, 9));
    assert_eq!(board.cell_at(9, 0), None);
    assert_eq!(board.cell_at(4, 4), Some(Cell::Empty));
}

#[test]
fn test_place_flips_captured_discs() {
    let mut board = opening();
    let before = board.disc_count();

    // (2,4): S ray (3,4) White then (4,4) Black
    let placement = board.place(2, 4, Player::FIRST).unwrap();

    assert_eq!(placement.pos(), Pos::new(2, 4));
    assert_eq!(placement.flipped().collect::<Vec<_>>(), vec![Pos::new(3, 4)]);
    assert_eq!(board.get(Pos::new(2, 4)), Cell::Disc(Player::FIRST));
    assert_eq!(board.get(Pos::new(3, 4)), Cell::Disc(Player::FIRST));
    assert_eq!(board.disc_count(), before + 1);
}

#[test]
fn test_place_postconditions_for_every_opening_move() {
    let board = opening();
    for player in 0..3 {
        let player = Player(player);
        for pos in board.legal_moves(player) {
            let mut working = board.clone();
            let captured = working.captures(i32::from(pos.row), i32::from(pos.col), player);
            working.place_at(pos, player).unwrap();

            assert_eq!(working.disc_count(), board.disc_count() + 1);
            assert_eq!(working.get(pos), Cell::Disc(player));
            for p in captured {
                assert_eq!(working.get(p), Cell::Disc(player));
            }
        }
    }
}

#[test]
fn test_illegal_place_leaves_board_untouched() {
    let mut board = opening();
    let snapshot = board.clone();

    assert!(matches!(
        board.place(0, 0, Player::FIRST),
        Err(IllegalMove::NotAdjacent(_))
    ));
    assert!(matches!(
        board.place(4, 4, Player::FIRST),
        Err(IllegalMove::SquareTaken(_))
    ));
    assert!(matches!(
        board.place(10, 2, Player::FIRST),
        Err(IllegalMove::OutOfBounds { .. })
    ));
    assert_eq!(board, snapshot);
}

#[test]
fn test_revert_restores_every_previous_owner() {
    let mut board = Board::new();
    // Ray east from (0,0) holds discs of both opponents
    board.put_disc(Pos::new(0, 1), Player::SECOND);
    board.put_disc(Pos::new(0, 2), Player::THIRD);
    board.put_disc(Pos::new(0, 3), Player::FIRST);
    let snapshot = board.clone();

    let placement = board.place(0, 0, Player::FIRST).unwrap();
    assert_eq!(placement.flip_count(), 2);
    assert_eq!(board.count(Player::FIRST), 4);

    board.revert(placement);
    assert_eq!(board, snapshot);
}

#[test]
fn test_scoped_move_restores_board() {
    let mut board = opening();
    let snapshot = board.clone();

    let discs_inside = board
        .scoped(Pos::new(2, 4), Player::FIRST, |b| b.count(Player::FIRST))
        .unwrap();

    assert_eq!(discs_inside, 5);
    assert_eq!(board, snapshot);
}

#[test]
fn test_scoped_illegal_move_skips_closure() {
    let mut board = opening();
    let mut ran = false;
    let result = board.scoped(Pos::new(0, 0), Player::FIRST, |_| ran = true);
    assert!(result.is_err());
    assert!(!ran);
}

#[test]
fn test_display_has_indices_and_symbols() {
    let board = opening();
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[0].contains('0') && lines[0].contains('8'));
    // Row 4 is the fifth rendered row: header, separator, then row/separator pairs
    let row4 = lines[2 + 4 * 2];
    assert!(row4.trim_start().starts_with('4'));
    assert!(row4.contains("| R | B | R |"));
}
