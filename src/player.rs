//! Player abstraction for a game session
//!
//! Human and AI players differ only in how the next move is produced:
//! humans type coordinates, the AI runs the minimax search.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::board::{Board, Player, Pos};
use crate::engine::{AIEngine, MoveResult};
use crate::error::GameError;
use crate::eval::HeuristicKind;

/// A seat at the table
pub trait Agent {
    /// Seat this agent plays for
    fn player(&self) -> Player;

    /// Short label for logs and messages
    fn label(&self) -> String;

    fn has_legal_move(&self, board: &Board) -> bool {
        board.has_legal_move(self.player())
    }

    /// Produce a legal move on `board`
    fn next_move(&mut self, board: &Board) -> Result<Pos, GameError>;

    /// Called at the start of the agent's turn
    fn show_board(&mut self, _board: &Board) {}
}

/// Parse "row column" (space or comma separated)
pub fn parse_move(line: &str) -> Result<(i32, i32), GameError> {
    let bad = || GameError::BadInput(line.trim().to_string());
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());

    let row = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
    let col = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
    if parts.next().is_some() {
        return Err(bad());
    }
    Ok((row, col))
}

/// Human player reading moves from a text stream
pub struct HumanAgent {
    player: Player,
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
    use_color: bool,
}

impl HumanAgent {
    pub fn new(player: Player, input: Box<dyn BufRead>, output: Box<dyn Write>, use_color: bool) -> Self {
        Self {
            player,
            input,
            output,
            use_color,
        }
    }

    /// Human reading stdin and writing stdout
    pub fn stdio(player: Player, use_color: bool) -> Self {
        Self::new(
            player,
            Box::new(std::io::stdin().lock()),
            Box::new(std::io::stdout()),
            use_color,
        )
    }

    fn prompt(&mut self) -> Result<String, GameError> {
        write!(self.output, "{} to move (row column): ", self.player)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line)
    }
}

impl Agent for HumanAgent {
    fn player(&self) -> Player {
        self.player
    }

    fn label(&self) -> String {
        format!("{} (human)", self.player)
    }

    fn next_move(&mut self, board: &Board) -> Result<Pos, GameError> {
        loop {
            let line = self.prompt()?;
            let attempt = parse_move(&line)
                .and_then(|(row, col)| board.check_move(row, col, self.player).map_err(GameError::from));

            match attempt {
                Ok(pos) => return Ok(pos),
                Err(err) => {
                    warn!(player = %self.player, input = line.trim(), %err, "move rejected");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    fn show_board(&mut self, board: &Board) {
        let text = crate::console::render(board, self.use_color);
        if let Err(err) = write!(self.output, "{text}") {
            warn!(%err, "could not draw board");
        }
    }
}

/// Computer player driven by the minimax search
pub struct AiAgent {
    player: Player,
    engine: AIEngine<HeuristicKind>,
    last_result: Option<MoveResult>,
}

impl AiAgent {
    pub fn new(player: Player, heuristic: HeuristicKind, depth: u32) -> Self {
        Self {
            player,
            engine: AIEngine::new(heuristic, depth),
            last_result: None,
        }
    }

    /// Statistics of the last search
    pub fn last_result(&self) -> Option<&MoveResult> {
        self.last_result.as_ref()
    }
}

impl Agent for AiAgent {
    fn player(&self) -> Player {
        self.player
    }

    fn label(&self) -> String {
        format!("{} ({} AI)", self.player, self.engine.heuristic().name())
    }

    fn next_move(&mut self, board: &Board) -> Result<Pos, GameError> {
        let result = self.engine.get_move_with_stats(board, self.player);
        debug!(
            player = %self.player,
            score = result.score,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "ai move"
        );
        let best = result.best_move;
        self.last_result = Some(result);
        best.ok_or(GameError::NoMove(self.player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn opening() -> Board {
        let mut board = Board::new();
        board.setup_three_players();
        board
    }

    fn human(input: &str) -> HumanAgent {
        HumanAgent::new(
            Player::FIRST,
            Box::new(Cursor::new(input.to_string().into_bytes())),
            Box::new(std::io::sink()),
            false,
        )
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("3 4\n").unwrap(), (3, 4));
        assert_eq!(parse_move(" 2,7 ").unwrap(), (2, 7));
        assert_eq!(parse_move("-1 0").unwrap(), (-1, 0));
        assert!(matches!(parse_move("a b"), Err(GameError::BadInput(_))));
        assert!(matches!(parse_move("3"), Err(GameError::BadInput(_))));
        assert!(matches!(parse_move("1 2 3"), Err(GameError::BadInput(_))));
    }

    #[test]
    fn test_human_reprompts_until_legal() {
        let board = opening();
        // garbage, occupied, isolated, then a legal move
        let mut agent = human("hello\n4 4\n0 0\n2 4\n");
        assert_eq!(agent.next_move(&board).unwrap(), Pos::new(2, 4));
    }

    #[test]
    fn test_human_input_closed() {
        let board = opening();
        let mut agent = human("9 9\n");
        assert!(matches!(agent.next_move(&board), Err(GameError::InputClosed)));
    }

    #[test]
    fn test_ai_agent_moves_and_records_stats() {
        let board = opening();
        let mut agent = AiAgent::new(Player::SECOND, HeuristicKind::Greedy, 1);
        let pos = agent.next_move(&board).unwrap();
        assert!(board.is_legal(i32::from(pos.row), i32::from(pos.col), Player::SECOND));
        assert_eq!(agent.last_result().and_then(|r| r.best_move), Some(pos));
        assert!(agent.label().contains("greedy"));
    }

    #[test]
    fn test_ai_agent_without_move() {
        let board = Board::new();
        let mut agent = AiAgent::new(Player::THIRD, HeuristicKind::Wedge, 1);
        assert!(!agent.has_legal_move(&board));
        assert!(matches!(agent.next_move(&board), Err(GameError::NoMove(_))));
    }
}
