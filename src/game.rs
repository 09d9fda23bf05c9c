//! Game session: turn order, passes and the final result
//!
//! Agents play in seat order. A seat without a legal move is skipped. The
//! game ends after a full round in which nobody could move.

use tracing::info;

use crate::board::{Board, Player, Pos};
use crate::error::GameError;
use crate::player::Agent;

/// What happened on one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    Moved {
        player: Player,
        pos: Pos,
        flipped: usize,
    },
    Passed(Player),
}

/// Final result of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    /// `None` when two or more players share the top score
    pub winner: Option<Player>,
    pub scores: Vec<usize>,
    pub moves: usize,
}

pub struct Game {
    board: Board,
    agents: Vec<Box<dyn Agent>>,
    history: Vec<(Pos, Player)>,
}

impl Game {
    /// Standard game on a 9x9 board with the three-player opening
    pub fn new(agents: Vec<Box<dyn Agent>>) -> Result<Self, GameError> {
        let mut board = Board::new();
        board.setup_three_players();
        Self::with_board(board, agents)
    }

    /// Game starting from an arbitrary position. Agents must sit in player order.
    pub fn with_board(board: Board, agents: Vec<Box<dyn Agent>>) -> Result<Self, GameError> {
        if agents.len() != board.player_count() as usize {
            return Err(GameError::Config(format!(
                "expected {} players, got {}",
                board.player_count(),
                agents.len()
            )));
        }
        for (seat, agent) in agents.iter().enumerate() {
            if agent.player().index() != seat {
                return Err(GameError::Config(format!(
                    "seat {seat} is played by {}",
                    agent.label()
                )));
            }
        }
        Ok(Self {
            board,
            agents,
            history: Vec::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Committed moves in play order
    pub fn history(&self) -> &[(Pos, Player)] {
        &self.history
    }

    /// Let the agent in `seat` take its turn
    pub fn play_turn(&mut self, seat: usize) -> Result<TurnEvent, GameError> {
        let agent = self
            .agents
            .get_mut(seat)
            .ok_or_else(|| GameError::Config(format!("no seat {seat}")))?;
        let player = agent.player();

        agent.show_board(&self.board);
        if !agent.has_legal_move(&self.board) {
            info!(%player, "no moves, skipping");
            return Ok(TurnEvent::Passed(player));
        }

        let pos = agent.next_move(&self.board)?;
        let placement = self.board.place_at(pos, player)?;
        self.history.push((pos, player));
        info!(%player, %pos, flipped = placement.flip_count(), "move");

        Ok(TurnEvent::Moved {
            player,
            pos,
            flipped: placement.flip_count(),
        })
    }

    /// One turn for every seat, in order
    pub fn play_round(&mut self) -> Result<Vec<TurnEvent>, GameError> {
        (0..self.agents.len()).map(|seat| self.play_turn(seat)).collect()
    }

    /// Play until a full round passes without a move. `observer` sees each turn.
    pub fn play(&mut self, mut observer: impl FnMut(&Board, &TurnEvent)) -> Result<GameOutcome, GameError> {
        loop {
            let mut stuck = true;
            for seat in 0..self.agents.len() {
                let event = self.play_turn(seat)?;
                if matches!(event, TurnEvent::Moved { .. }) {
                    stuck = false;
                }
                observer(&self.board, &event);
            }
            if stuck {
                let outcome = self.outcome();
                info!(winner = ?outcome.winner, scores = ?outcome.scores, moves = outcome.moves, "game over");
                return Ok(outcome);
            }
        }
    }

    pub fn outcome(&self) -> GameOutcome {
        GameOutcome {
            winner: self.board.winner(),
            scores: self.board.scores(),
            moves: self.history.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::HeuristicKind;
    use crate::player::AiAgent;

    fn ai_seats(kinds: [HeuristicKind; 3], depth: u32) -> Vec<Box<dyn Agent>> {
        kinds
            .iter()
            .enumerate()
            .map(|(seat, &kind)| Box::new(AiAgent::new(Player(seat as u8), kind, depth)) as Box<dyn Agent>)
            .collect()
    }

    #[test]
    fn test_rejects_wrong_seat_count() {
        let agents = ai_seats([HeuristicKind::Greedy; 3], 0).into_iter().take(2).collect();
        assert!(matches!(Game::new(agents), Err(GameError::Config(_))));
    }

    #[test]
    fn test_rejects_seats_out_of_order() {
        let mut agents = ai_seats([HeuristicKind::Greedy; 3], 0);
        agents.swap(0, 1);
        assert!(matches!(Game::new(agents), Err(GameError::Config(_))));
    }

    #[test]
    fn test_first_round_moves() {
        let mut game = Game::new(ai_seats([HeuristicKind::Greedy; 3], 0)).unwrap();
        let events = game.play_round().unwrap();
        assert_eq!(events.len(), 3);
        assert!(events.iter().all(|e| matches!(e, TurnEvent::Moved { .. })));
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.board().disc_count(), 12);
    }

    #[test]
    fn test_pass_when_stuck() {
        let mut board = Board::new();
        board.put_disc(Pos::new(4, 4), Player::FIRST);
        let mut game = Game::with_board(board, ai_seats([HeuristicKind::Greedy; 3], 0)).unwrap();
        assert_eq!(game.play_turn(1).unwrap(), TurnEvent::Passed(Player::SECOND));
    }

    #[test]
    fn test_game_runs_to_completion() {
        let mut game = Game::new(ai_seats(
            [HeuristicKind::Greedy, HeuristicKind::WeightedSum, HeuristicKind::Wedge],
            0,
        ))
        .unwrap();
        let mut turns = 0;
        let outcome = game.play(|_, _| turns += 1).unwrap();

        assert_eq!(outcome.scores.iter().sum::<usize>(), game.board().disc_count());
        assert_eq!(outcome.moves, game.history().len());
        assert_eq!(outcome.winner, game.board().winner());
        assert_eq!(turns % 3, 0);
        for player in 0..3 {
            assert!(!game.board().has_legal_move(Player(player)));
        }
    }
}
