//! Session configuration
//!
//! The command line names one player type per seat, in turn order.
//! `RUST_LOG` overrides `--log-level` when set.

use clap::{Parser, ValueEnum};

use crate::board::{Player, DEFAULT_PLAYERS};
use crate::engine::DEFAULT_DEPTH;
use crate::error::GameError;
use crate::eval::HeuristicKind;
use crate::player::{Agent, AiAgent, HumanAgent};

/// Kind of player sitting at a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    Human,
    GreedyAi,
    WeightedSumAi,
    WedgeAi,
}

impl PlayerKind {
    /// Heuristic driving this seat, `None` for humans
    pub fn heuristic(self) -> Option<HeuristicKind> {
        match self {
            PlayerKind::Human => None,
            PlayerKind::GreedyAi => Some(HeuristicKind::Greedy),
            PlayerKind::WeightedSumAi => Some(HeuristicKind::WeightedSum),
            PlayerKind::WedgeAi => Some(HeuristicKind::Wedge),
        }
    }

    pub fn is_human(self) -> bool {
        self == PlayerKind::Human
    }
}

/// Three-player Othello
#[derive(Debug, Clone, Parser)]
#[command(name = "trithello", version, about = "Three-player Othello with minimax AI opponents")]
pub struct GameConfig {
    /// Player type for each seat, in turn order (Black, White, Red)
    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        default_values = ["human", "weighted-sum-ai", "wedge-ai"]
    )]
    pub players: Vec<PlayerKind>,

    /// Search depth below each candidate move
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    pub depth: u32,

    /// Open the graphical board instead of playing in the terminal
    #[arg(long)]
    pub gui: bool,

    /// Plain text board without terminal colours
    #[arg(long)]
    pub no_color: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: vec![PlayerKind::Human, PlayerKind::WeightedSumAi, PlayerKind::WedgeAi],
            depth: DEFAULT_DEPTH,
            gui: false,
            no_color: false,
            log_level: "warn".to_string(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.players.len() != DEFAULT_PLAYERS as usize {
            return Err(GameError::Config(format!(
                "exactly {DEFAULT_PLAYERS} players are required, got {}",
                self.players.len()
            )));
        }
        if self.depth == 0 {
            return Err(GameError::Config("depth must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Terminal agents for every seat; humans use stdin/stdout
    pub fn build_agents(&self) -> Result<Vec<Box<dyn Agent>>, GameError> {
        self.validate()?;
        let agents = self
            .players
            .iter()
            .enumerate()
            .map(|(seat, &kind)| {
                let player = Player(seat as u8);
                match kind.heuristic() {
                    Some(heuristic) => Box::new(AiAgent::new(player, heuristic, self.depth)) as Box<dyn Agent>,
                    None => Box::new(HumanAgent::stdio(player, !self.no_color)),
                }
            })
            .collect();
        Ok(agents)
    }
}
