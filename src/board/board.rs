//! Board storage and search bookkeeping

use super::{Cell, Player, Pos, DEFAULT_COLUMNS, DEFAULT_PLAYERS, DEFAULT_ROWS};

/// Game board: a fixed `rows x columns` grid of cells.
///
/// Outside the crate the only way to change a cell is a validated
/// placement, so discs cannot be dropped or overwritten directly:
///
/// ```compile_fail
/// use trithello::{Board, Player, Pos};
///
/// let mut board = Board::new();
/// board.setup_three_players();
/// board.put_disc(Pos::new(4, 4), Player::SECOND);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    columns: usize,
    player_count: u8,
    /// Row-major cell storage
    cells: Vec<Cell>,
}

/// Record of a committed placement, enough to restore the board exactly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pos: Pos,
    /// Captured cells with their owner before the flip
    flipped: Vec<(Pos, Player)>,
}

impl Placement {
    pub(crate) fn new(pos: Pos, flipped: Vec<(Pos, Player)>) -> Self {
        Self { pos, flipped }
    }

    /// Target cell of the placement
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Cells captured by the placement
    pub fn flipped(&self) -> impl Iterator<Item = Pos> + '_ {
        self.flipped.iter().map(|&(pos, _)| pos)
    }

    #[inline]
    pub fn flip_count(&self) -> usize {
        self.flipped.len()
    }
}

impl Board {
    /// Empty 9x9 board for three players
    pub fn new() -> Self {
        Self::with_size(DEFAULT_ROWS, DEFAULT_COLUMNS, DEFAULT_PLAYERS)
    }

    /// Empty board of the given dimensions.
    ///
    /// # Panics
    /// If any dimension or the player count is zero, or a dimension exceeds 255.
    pub fn with_size(rows: usize, columns: usize, player_count: u8) -> Self {
        assert!(rows > 0 && columns > 0, "board dimensions must be positive");
        assert!(rows <= u8::MAX as usize && columns <= u8::MAX as usize);
        assert!(player_count > 0, "at least one player is required");
        Self {
            rows,
            columns,
            player_count,
            cells: vec![Cell::Empty; rows * columns],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn player_count(&self) -> u8 {
        self.player_count
    }

    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as usize) < self.rows && col >= 0 && (col as usize) < self.columns
    }

    /// Convert signed coordinates to a position, `None` when off the board
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pos_at(&self, row: i32, col: i32) -> Option<Pos> {
        self.in_bounds(row, col).then(|| Pos::new(row as u8, col as u8))
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!((pos.row as usize) < self.rows && (pos.col as usize) < self.columns);
        pos.row as usize * self.columns + pos.col as usize
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Cell at signed coordinates, `None` when off the board
    #[inline]
    pub fn cell_at(&self, row: i32, col: i32) -> Option<Cell> {
        self.pos_at(row, col).map(|pos| self.get(pos))
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// Put a disc without any rule processing.
    /// Used for the opening and search bookkeeping; game moves go through `place`.
    #[inline]
    pub(crate) fn put_disc(&mut self, pos: Pos, player: Player) {
        let idx = self.index(pos);
        self.cells[idx] = Cell::Disc(player);
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        let columns = self.columns;
        self.cells.iter().enumerate().map(move |(idx, &cell)| {
            (Pos::new((idx / columns) as u8, (idx % columns) as u8), cell)
        })
    }

    /// Number of discs owned by `player`
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Disc(player)).count()
    }

    /// Total discs on board
    pub fn disc_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Seed the three-player starting position: three discs per player
    /// around the centre. On 9x9 that is
    /// player 0 at (3,3) (3,5) (4,4), player 1 at (3,4) (5,3) (5,5),
    /// player 2 at (4,3) (4,5) (5,4).
    ///
    /// # Panics
    /// If the board is smaller than 3x3 or has fewer than three players.
    pub fn setup_three_players(&mut self) {
        assert!(self.rows >= 3 && self.columns >= 3, "board too small for the opening");
        assert!(self.player_count >= 3, "opening needs three players");

        const OPENING: [(i32, i32, u8); 9] = [
            (-1, -1, 0),
            (-1, 1, 0),
            (0, 0, 0),
            (-1, 0, 1),
            (1, -1, 1),
            (1, 1, 1),
            (0, -1, 2),
            (0, 1, 2),
            (1, 0, 2),
        ];

        let center_row = (self.rows / 2) as i32;
        let center_col = (self.columns / 2) as i32;
        for (dr, dc, player) in OPENING {
            if let Some(pos) = self.pos_at(center_row + dr, center_col + dc) {
                self.put_disc(pos, Player(player));
            }
        }
    }

    /// Undo a placement: the target becomes empty again and every captured
    /// cell goes back to its previous owner. Search bookkeeping only.
    pub fn revert(&mut self, placement: Placement) {
        for (pos, owner) in placement.flipped {
            self.put_disc(pos, owner);
        }
        let idx = self.index(placement.pos);
        self.cells[idx] = Cell::Empty;
    }

    pub(crate) fn apply_unchecked(&mut self, pos: Pos, player: Player, captured: Vec<Pos>) -> Placement {
        let flipped = captured
            .into_iter()
            .filter_map(|p| self.get(p).owner().map(|owner| (p, owner)))
            .collect::<Vec<_>>();
        for &(p, _) in &flipped {
            self.put_disc(p, player);
        }
        self.put_disc(pos, player);
        Placement::new(pos, flipped)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
