//! Game state management for the three-player Othello GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::PlayerKind;
use crate::engine::{AIEngine, MoveResult};
use crate::eval::HeuristicKind;
use crate::{Board, Player, Pos};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Game result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// `None` on a shared top score
    pub winner: Option<Player>,
    pub scores: Vec<usize>,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    /// Player kind per seat, in turn order
    pub seats: Vec<PlayerKind>,
    pub current_turn: Player,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Player)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,

    ai_depth: u32,
}

impl GameState {
    pub fn new(seats: Vec<PlayerKind>, ai_depth: u32) -> Self {
        let mut state = Self {
            board: Board::new(),
            seats,
            current_turn: Player::FIRST,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            ai_depth,
        };
        state.reset();
        state
    }

    /// Fresh opening position with the same seats
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.board.setup_three_players();
        self.current_turn = Player::FIRST;
        self.game_over = None;
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.suggested_move = None;
        self.message = None;
        info!(seats = ?self.seats, depth = self.ai_depth, "new game");
    }

    /// New game with a different seating
    pub fn restart(&mut self, seats: Vec<PlayerKind>) {
        self.seats = seats;
        self.reset();
    }

    pub fn ai_depth(&self) -> u32 {
        self.ai_depth
    }

    pub fn seat(&self, player: Player) -> PlayerKind {
        self.seats
            .get(player.index())
            .copied()
            .unwrap_or(PlayerKind::Human)
    }

    /// Number of human and AI seats
    pub fn seat_counts(&self) -> (usize, usize) {
        let humans = self.seats.iter().filter(|kind| kind.is_human()).count();
        (humans, self.seats.len() - humans)
    }

    pub fn is_human_turn(&self) -> bool {
        self.game_over.is_none() && self.seat(self.current_turn).is_human()
    }

    pub fn is_ai_turn(&self) -> bool {
        self.game_over.is_none() && !self.seat(self.current_turn).is_human()
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place a disc for the human whose turn it is
    pub fn try_place(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(pos).map_err(|err| err.to_string())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) -> Result<(), crate::IllegalMove> {
        let player = self.current_turn;
        let placement = self.board.place_at(pos, player)?;
        debug!(%player, %pos, flipped = placement.flip_count(), "move");

        self.move_history.push((pos, player));
        self.last_move = Some(pos);
        self.suggested_move = None;
        self.message = None;
        self.move_timer.stop();

        self.advance_turn();
        Ok(())
    }

    /// Hand the turn to the next seat that can move, skipping the rest.
    /// Ends the game when nobody can move.
    fn advance_turn(&mut self) {
        let player_count = self.board.player_count();
        let mut skipped = Vec::new();
        let mut next = self.current_turn.next(player_count);

        while !self.board.has_legal_move(next) {
            skipped.push(next);
            if skipped.len() == player_count as usize {
                let result = GameResult {
                    winner: self.board.winner(),
                    scores: self.board.scores(),
                };
                info!(winner = ?result.winner, scores = ?result.scores, "game over");
                self.game_over = Some(result);
                return;
            }
            next = next.next(player_count);
        }

        if !skipped.is_empty() {
            let names: Vec<String> = skipped.iter().map(|p| p.to_string()).collect();
            self.message = Some(format!("{} has no moves, skipping", names.join(" and ")));
        }
        self.current_turn = next;
        self.move_timer.start();
    }

    /// Start AI thinking on a background thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }
        let Some(heuristic) = self.seat(self.current_turn).heuristic() else {
            return;
        };

        let board = self.board.clone();
        let player = self.current_turn;
        let depth = self.ai_depth;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let engine = AIEngine::new(heuristic, depth);
            let result = engine.get_move_with_stats(&board, player);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);
            let best_move = move_result.best_move;
            self.last_ai_result = Some(move_result);

            match best_move {
                Some(pos) => {
                    if let Err(err) = self.execute_move(pos) {
                        warn!(%pos, %err, "engine proposed an illegal move");
                        self.message = Some(format!("AI move rejected: {err}"));
                    }
                }
                None => self.message = Some("AI could not find a move".to_string()),
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Shallow weighted-sum search to hint the human to move
    pub fn request_suggestion(&mut self) {
        if !self.is_human_turn() || self.is_ai_thinking() {
            return;
        }

        let engine = AIEngine::new(HeuristicKind::WeightedSum, 1);
        let result = engine.get_move_with_stats(&self.board, self.current_turn);

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }
}
