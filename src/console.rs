//! Terminal front end
//!
//! Draws the board with coloured cells (green felt, black / white / red
//! discs) and runs a game with the configured seats.

use colored::{Color, Colorize};
use tracing::info;

use crate::board::{Board, Cell, Player, Pos};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{Game, GameOutcome, TurnEvent};

const FELT: Color = Color::Green;

fn disc_color(player: Player) -> Color {
    match player.0 {
        0 => Color::Black,
        1 => Color::White,
        2 => Color::Red,
        _ => Color::Blue,
    }
}

/// Board as text. With `color` each disc is a coloured block, otherwise the
/// plain `Display` rendering is used.
pub fn render(board: &Board, color: bool) -> String {
    if !color {
        return board.to_string();
    }

    let mut out = String::from("    ");
    for col in 0..board.columns() {
        out.push_str(&format!("{col:^3} "));
    }
    out.push('\n');

    for row in 0..board.rows() {
        out.push_str(&format!("{row:>2} {}", "|".on_color(FELT)));
        for col in 0..board.columns() {
            let cell = match board.get(Pos::new(row as u8, col as u8)) {
                Cell::Empty => "   ".on_color(FELT),
                Cell::Disc(player) => "   ".on_color(disc_color(player)),
            };
            out.push_str(&format!("{cell}{}", "|".on_color(FELT)));
        }
        out.push('\n');
    }
    out
}

fn describe(event: &TurnEvent) -> String {
    match event {
        TurnEvent::Moved { player, pos, flipped } => {
            format!("{player} plays {pos}, flipping {flipped}.")
        }
        TurnEvent::Passed(player) => format!("{player} has no moves, skipping."),
    }
}

fn announce(outcome: &GameOutcome) -> String {
    let scores = outcome
        .scores
        .iter()
        .enumerate()
        .map(|(seat, score)| format!("{} {score}", Player(seat as u8)))
        .collect::<Vec<_>>()
        .join(", ");
    match outcome.winner {
        Some(player) => format!("Congratulations {player}, you win! ({scores})"),
        None => format!("It's a draw. ({scores})"),
    }
}

/// Play a full game in the terminal
pub fn run(config: &GameConfig) -> Result<GameOutcome, GameError> {
    let agents = config.build_agents()?;
    let mut game = Game::new(agents)?;
    let color = !config.no_color;
    let all_ai = config.players.iter().all(|kind| !kind.is_human());

    info!(players = ?config.players, depth = config.depth, "starting terminal game");
    let outcome = game.play(|board, event| {
        println!("{}", describe(event));
        // Human seats draw the board themselves at the start of their turn
        if all_ai {
            print!("{}", render(board, color));
        }
    })?;

    print!("{}", render(game.board(), color));
    println!("{}", announce(&outcome));
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_render_matches_display() {
        let mut board = Board::new();
        board.setup_three_players();
        assert_eq!(render(&board, false), board.to_string());
    }

    #[test]
    fn test_colored_render_has_one_line_per_row() {
        colored::control::set_override(true);
        let mut board = Board::new();
        board.setup_three_players();
        let text = render(&board, true);
        assert_eq!(text.lines().count(), board.rows() + 1);
        assert!(text.contains('\u{1b}'));
    }

    #[test]
    fn test_announce() {
        let win = GameOutcome {
            winner: Some(Player::FIRST),
            scores: vec![12, 5, 5],
            moves: 10,
        };
        assert!(announce(&win).starts_with("Congratulations Black"));

        let draw = GameOutcome {
            winner: None,
            scores: vec![10, 10, 5],
            moves: 10,
        };
        assert!(announce(&draw).starts_with("It's a draw"));
    }

    #[test]
    fn test_describe_pass() {
        assert_eq!(describe(&TurnEvent::Passed(Player::THIRD)), "Red has no moves, skipping.");
    }
}
