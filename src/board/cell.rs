//! Cell-level types: players, structural classes, and per-cell state.
//!
//! A cell's structural class (corner, edge, interior) is fixed by its
//! position on the board and determines its critical mass, the orb count at
//! which it explodes. Classes are computed once when a grid is built and
//! cached on the cell, never recomputed per move.

/// One of the two players.
///
/// `Red` is the human side and `Blue` the engine side, matching the owner
/// letters used by the game-state file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    /// Returns the other player.
    pub const fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// Returns the single-character owner letter used by the game-state
    /// file format.
    pub const fn letter(self) -> char {
        match self {
            Player::Red => 'R',
            Player::Blue => 'B',
        }
    }

    /// Parses a player from its owner letter.
    pub fn from_letter(c: char) -> Option<Player> {
        match c {
            'R' => Some(Player::Red),
            'B' => Some(Player::Blue),
            _ => None,
        }
    }
}

/// Structural class of a board position: determined solely by where the
/// cell sits relative to the board rim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellClass {
    Corner,
    Edge,
    Interior,
}

impl CellClass {
    /// Orb count at which a cell of this class explodes.
    ///
    /// Equal to the number of orthogonal neighbors the cell has, which is
    /// what keeps cascades orb-conserving: every orb removed from an
    /// exploding cell lands in exactly one neighbor.
    pub const fn critical_mass(self) -> u8 {
        match self {
            CellClass::Corner => 2,
            CellClass::Edge => 3,
            CellClass::Interior => 4,
        }
    }

    /// Classifies a position on a `rows x cols` board.
    pub fn of(row: usize, col: usize, rows: usize, cols: usize) -> CellClass {
        let on_row_rim = row == 0 || row == rows - 1;
        let on_col_rim = col == 0 || col == cols - 1;
        if on_row_rim && on_col_rim {
            CellClass::Corner
        } else if on_row_rim || on_col_rim {
            CellClass::Edge
        } else {
            CellClass::Interior
        }
    }
}

/// A single board cell: orb count, owner, and cached structural class.
///
/// Invariant: `owner` is `None` exactly when `count` is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub count: u8,
    pub owner: Option<Player>,
    pub class: CellClass,
}

impl Cell {
    /// Creates an empty cell of the given class.
    pub const fn empty(class: CellClass) -> Cell {
        Cell {
            count: 0,
            owner: None,
            class,
        }
    }

    /// Orb count at which this cell explodes.
    pub const fn critical_mass(&self) -> u8 {
        self.class.critical_mass()
    }

    /// True when one more orb would make this cell explode.
    pub const fn is_critical(&self) -> bool {
        self.count + 1 == self.class.critical_mass()
    }
}
