//! Grid state, move legality, and placement.
//!
//! The grid is a plain value type: every search branch clones it and works
//! on its own snapshot, so sibling branches never observe each other's
//! mutations. Structural classes are computed once at construction and
//! cached on each cell.

use super::cascade::{cascade, DEFAULT_WAVE_CAP};
use super::cell::{Cell, CellClass, Player};

/// A move target: board coordinates in row-major convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

/// Rejected placement. The grid is left untouched, so callers may treat
/// this as "no state change occurred".
#[derive(Debug, thiserror::Error)]
pub enum PlaceError {
    #[error("invalid move at ({row}, {col}) for {player:?}: cell owned by opponent")]
    InvalidMove {
        row: usize,
        col: usize,
        player: Player,
    },
}

/// Configuration failures when constructing or loading a grid. The load is
/// aborted; no existing grid is corrupted.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("board must be at least 2x2, got {rows}x{cols}")]
    TooSmall { rows: usize, cols: usize },

    #[error("cell matrix is {got_rows}x{got_cols}, expected {rows}x{cols}")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        got_rows: usize,
        got_cols: usize,
    },
}

/// The game board: an `rows x cols` matrix of cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    /// Hard cap on cascade waves. A defensive bound on runaway chains, not
    /// a game rule; see `board::cascade`.
    pub wave_cap: u32,
}

impl Grid {
    /// Creates an empty grid, classifying every cell once.
    pub fn new(rows: usize, cols: usize) -> Result<Grid, GridError> {
        if rows < 2 || cols < 2 {
            return Err(GridError::TooSmall { rows, cols });
        }
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::empty(CellClass::of(row, col, rows, cols)));
            }
        }
        Ok(Grid {
            rows,
            cols,
            cells,
            wave_cap: DEFAULT_WAVE_CAP,
        })
    }

    /// Builds a grid from a `(count, owner)` matrix, typically the output
    /// of the game-state parser. Fails if the matrix does not match the
    /// requested dimensions.
    pub fn from_cells(
        rows: usize,
        cols: usize,
        cells: &[Vec<(u8, Option<Player>)>],
    ) -> Result<Grid, GridError> {
        let mut grid = Grid::new(rows, cols)?;
        let got_rows = cells.len();
        let got_cols = cells.first().map_or(0, |r| r.len());
        if got_rows != rows || cells.iter().any(|r| r.len() != cols) {
            return Err(GridError::DimensionMismatch {
                rows,
                cols,
                got_rows,
                got_cols,
            });
        }
        for (row, line) in cells.iter().enumerate() {
            for (col, &(count, owner)) in line.iter().enumerate() {
                let cell = grid.cell_mut(row, col);
                cell.count = count;
                cell.owner = owner;
            }
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell at the given position. Panics on out-of-range
    /// coordinates, which callers never produce for an in-range `Move`.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row * self.cols + col]
    }

    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        &mut self.cells[row * self.cols + col]
    }

    /// Iterates over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Move, &Cell)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            (
                Move {
                    row: i / cols,
                    col: i % cols,
                },
                cell,
            )
        })
    }

    /// In-bounds orthogonal neighbors of a position. Off-grid positions are
    /// skipped, never wrapped.
    pub(crate) fn neighbors(
        &self,
        row: usize,
        col: usize,
    ) -> impl Iterator<Item = (usize, usize)> {
        let (rows, cols) = (self.rows, self.cols);
        [
            (row.wrapping_sub(1), col),
            (row + 1, col),
            (row, col.wrapping_sub(1)),
            (row, col + 1),
        ]
        .into_iter()
        .filter(move |&(r, c)| r < rows && c < cols)
    }

    /// True iff the target cell is empty or already owned by `player`.
    pub fn is_legal_move(&self, mv: Move, player: Player) -> bool {
        let cell = self.cell(mv.row, mv.col);
        cell.count == 0 || cell.owner == Some(player)
    }

    /// All legal moves for `player` in row-major scan order. The order is
    /// part of the move-selection contract: ties break toward the first
    /// move found.
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        self.iter()
            .filter(|&(mv, _)| self.is_legal_move(mv, player))
            .map(|(mv, _)| mv)
            .collect()
    }

    /// Places one orb for `player`, cascading if the cell reaches its
    /// critical mass. An illegal move is reported and leaves the grid
    /// unchanged.
    pub fn place(&mut self, mv: Move, player: Player) -> Result<(), PlaceError> {
        if !self.is_legal_move(mv, player) {
            return Err(PlaceError::InvalidMove {
                row: mv.row,
                col: mv.col,
                player,
            });
        }
        let cell = self.cell_mut(mv.row, mv.col);
        if cell.count == 0 {
            cell.owner = Some(player);
        }
        cell.count += 1;
        if cell.count >= cell.critical_mass() {
            cascade(self, mv, player);
        }
        Ok(())
    }

    /// Total orbs owned by `player`.
    pub fn total_orbs(&self, player: Player) -> u32 {
        self.cells
            .iter()
            .filter(|cell| cell.owner == Some(player))
            .map(|cell| u32::from(cell.count))
            .sum()
    }

    /// Total orbs on the board for both players.
    pub fn total_orbs_all(&self) -> u32 {
        self.total_orbs(Player::Red) + self.total_orbs(Player::Blue)
    }

    /// True iff at most one player currently owns any orbs.
    ///
    /// Vacuously true on the empty opening board; callers must special-case
    /// the opening move rather than treat that as game over.
    pub fn is_terminal(&self) -> bool {
        let mut red = false;
        let mut blue = false;
        for cell in &self.cells {
            match cell.owner {
                Some(Player::Red) => red = true,
                Some(Player::Blue) => blue = true,
                None => {}
            }
            if red && blue {
                return false;
            }
        }
        true
    }

    /// The player owning every orb on a non-empty board, if any.
    pub fn winner(&self) -> Option<Player> {
        let red = self.total_orbs(Player::Red) > 0;
        let blue = self.total_orbs(Player::Blue) > 0;
        match (red, blue) {
            (true, false) => Some(Player::Red),
            (false, true) => Some(Player::Blue),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(row: usize, col: usize) -> Move {
        Move { row, col }
    }

    #[test]
    fn new_rejects_degenerate_boards() {
        assert!(matches!(Grid::new(1, 6), Err(GridError::TooSmall { .. })));
        assert!(matches!(Grid::new(9, 0), Err(GridError::TooSmall { .. })));
        assert!(Grid::new(2, 2).is_ok());
    }

    #[test]
    fn classes_cached_at_construction() {
        let grid = Grid::new(9, 6).unwrap();
        assert_eq!(grid.cell(0, 0).class, CellClass::Corner);
        assert_eq!(grid.cell(0, 3).class, CellClass::Edge);
        assert_eq!(grid.cell(4, 2).class, CellClass::Interior);
    }

    #[test]
    fn from_cells_rejects_dimension_mismatch() {
        let short = vec![vec![(0u8, None); 6]; 8];
        assert!(matches!(
            Grid::from_cells(9, 6, &short),
            Err(GridError::DimensionMismatch { .. })
        ));

        let ragged = vec![vec![(0u8, None); 6], vec![(0u8, None); 5]];
        assert!(matches!(
            Grid::from_cells(2, 6, &ragged),
            Err(GridError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn from_cells_loads_counts_and_owners() {
        let mut cells = vec![vec![(0u8, None); 3]; 3];
        cells[1][2] = (2, Some(Player::Red));
        let grid = Grid::from_cells(3, 3, &cells).unwrap();
        assert_eq!(grid.cell(1, 2).count, 2);
        assert_eq!(grid.cell(1, 2).owner, Some(Player::Red));
        assert_eq!(grid.total_orbs(Player::Red), 2);
    }

    #[test]
    fn neighbor_count_matches_critical_mass() {
        let grid = Grid::new(9, 6).unwrap();
        for (m, cell) in grid.iter() {
            let n = grid.neighbors(m.row, m.col).count();
            assert_eq!(n as u8, cell.critical_mass());
        }
    }

    #[test]
    fn legal_moves_scan_row_major() {
        let grid = Grid::new(2, 2).unwrap();
        let moves = grid.legal_moves(Player::Blue);
        assert_eq!(moves, vec![mv(0, 0), mv(0, 1), mv(1, 0), mv(1, 1)]);
    }

    #[test]
    fn opponent_cell_is_illegal() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.place(mv(1, 1), Player::Red).unwrap();
        assert!(!grid.is_legal_move(mv(1, 1), Player::Blue));
        assert!(grid.is_legal_move(mv(1, 1), Player::Red));
        assert!(!grid
            .legal_moves(Player::Blue)
            .contains(&mv(1, 1)));
    }

    #[test]
    fn invalid_place_leaves_grid_unchanged() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.place(mv(1, 1), Player::Red).unwrap();
        let before = grid.clone();
        let err = grid.place(mv(1, 1), Player::Blue);
        assert!(matches!(err, Err(PlaceError::InvalidMove { .. })));
        assert_eq!(grid, before);
    }

    #[test]
    fn place_sets_owner_on_empty_cell() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.place(mv(1, 1), Player::Blue).unwrap();
        let cell = grid.cell(1, 1);
        assert_eq!(cell.count, 1);
        assert_eq!(cell.owner, Some(Player::Blue));
    }

    #[test]
    fn totals_track_ownership() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.place(mv(1, 1), Player::Blue).unwrap();
        grid.place(mv(1, 1), Player::Blue).unwrap();
        grid.place(mv(2, 2), Player::Red).unwrap();
        assert_eq!(grid.total_orbs(Player::Blue), 2);
        assert_eq!(grid.total_orbs(Player::Red), 1);
        assert_eq!(grid.total_orbs_all(), 3);
    }

    #[test]
    fn empty_board_is_vacuously_terminal() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(grid.is_terminal());
        assert_eq!(grid.winner(), None);
    }

    #[test]
    fn terminal_and_winner_with_one_side() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.place(mv(1, 1), Player::Blue).unwrap();
        assert!(grid.is_terminal());
        assert_eq!(grid.winner(), Some(Player::Blue));

        grid.place(mv(0, 1), Player::Red).unwrap();
        assert!(!grid.is_terminal());
        assert_eq!(grid.winner(), None);
    }
}
