//! Plain text rendering with row and column indices

use std::fmt;

use super::{Board, Cell, Pos};

impl Board {
    fn separator(&self) -> String {
        let mut line = String::from("   +");
        for _ in 0..self.columns() {
            line.push_str("---+");
        }
        line
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "    ")?;
        for col in 0..self.columns() {
            write!(f, "{col:^3} ")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.separator())?;

        for row in 0..self.rows() {
            write!(f, "{row:>2} |")?;
            for col in 0..self.columns() {
                let symbol = match self.get(Pos::new(row as u8, col as u8)) {
                    Cell::Empty => ' ',
                    Cell::Disc(player) => player.symbol(),
                };
                write!(f, " {symbol} |")?;
            }
            writeln!(f)?;
            writeln!(f, "{}", self.separator())?;
        }
        Ok(())
    }
}
