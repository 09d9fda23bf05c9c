//! Board representation for three-player Othello

pub mod board;
mod display;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::{Board, Placement};

/// Default board height
pub const DEFAULT_ROWS: usize = 9;
/// Default board width
pub const DEFAULT_COLUMNS: usize = 9;
/// Number of seats in the standard game
pub const DEFAULT_PLAYERS: u8 = 3;

/// Player identifier, an index into the turn rotation (0, 1, 2 in the standard game)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Player(pub u8);

impl Player {
    pub const FIRST: Player = Player(0);
    pub const SECOND: Player = Player(1);
    pub const THIRD: Player = Player(2);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Next player in rotation
    #[inline]
    pub fn next(self, player_count: u8) -> Player {
        Player((self.0 + 1) % player_count)
    }

    /// Disc colour name used by the front ends
    pub fn color_name(self) -> &'static str {
        match self.0 {
            0 => "Black",
            1 => "White",
            2 => "Red",
            _ => "Unknown",
        }
    }

    /// Single character used by the plain text renderer
    pub fn symbol(self) -> char {
        match self.0 {
            0 => 'B',
            1 => 'W',
            2 => 'R',
            n => char::from_digit(u32::from(n) % 10, 10).unwrap_or('?'),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.color_name())
    }
}

/// Cell state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Disc(Player),
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Owner of the disc, if any
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Disc(player) => Some(player),
            Cell::Empty => None,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// Row-major, which is the order legal moves are generated in
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
