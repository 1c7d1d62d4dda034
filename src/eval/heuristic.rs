//! Board-scoring heuristics.
//!
//! Each heuristic is a pure function of the grid returning a signed score,
//! positive in the engine's (Blue's) favor. Exactly one is active during
//! search; the rest remain valid, independently testable strategies rather
//! than a class hierarchy.

use serde::Deserialize;

use crate::board::{CellClass, Grid, Player};

/// The scoring function the search applies at its depth cutoff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// Blue's orb total minus Red's.
    OrbDifference,
    /// Owned-cell count weighted 2 for rim cells, 1 for interior.
    PositionalByCells,
    /// Orb count weighted 2 for rim cells, 1 for interior.
    PositionalByOrbs,
    /// Cells one orb away from exploding, signed by owner.
    CriticalCellDifference,
    /// Orb count plus friendly-neighbor bonuses minus hostile-neighbor
    /// penalties, per occupied cell.
    #[default]
    AdjacencyAdvantage,
}

impl Heuristic {
    /// Scores the grid. Positive favors Blue.
    pub fn evaluate(self, grid: &Grid) -> i32 {
        match self {
            Heuristic::OrbDifference => orb_difference(grid),
            Heuristic::PositionalByCells => positional_by_cells(grid),
            Heuristic::PositionalByOrbs => positional_by_orbs(grid),
            Heuristic::CriticalCellDifference => critical_cell_difference(grid),
            Heuristic::AdjacencyAdvantage => adjacency_advantage(grid),
        }
    }
}

/// +1 for Blue-owned, -1 for Red-owned.
fn sign(owner: Player) -> i32 {
    match owner {
        Player::Blue => 1,
        Player::Red => -1,
    }
}

/// Rim cells are worth double: they explode sooner and are harder to
/// recapture.
fn class_weight(class: CellClass) -> i32 {
    match class {
        CellClass::Corner | CellClass::Edge => 2,
        CellClass::Interior => 1,
    }
}

pub(crate) fn orb_difference(grid: &Grid) -> i32 {
    grid.total_orbs(Player::Blue) as i32 - grid.total_orbs(Player::Red) as i32
}

pub(crate) fn positional_by_cells(grid: &Grid) -> i32 {
    let mut advantage = 0;
    for (_, cell) in grid.iter() {
        if let Some(owner) = cell.owner {
            advantage += sign(owner) * class_weight(cell.class);
        }
    }
    advantage
}

pub(crate) fn positional_by_orbs(grid: &Grid) -> i32 {
    let mut advantage = 0;
    for (_, cell) in grid.iter() {
        if let Some(owner) = cell.owner {
            advantage += sign(owner) * class_weight(cell.class) * i32::from(cell.count);
        }
    }
    advantage
}

pub(crate) fn critical_cell_difference(grid: &Grid) -> i32 {
    let mut advantage = 0;
    for (_, cell) in grid.iter() {
        if cell.is_critical() {
            if let Some(owner) = cell.owner {
                advantage += sign(owner);
            }
        }
    }
    advantage
}

/// For each occupied cell: its own orb count, plus a bonus per friendly
/// orthogonal neighbor (+2 when the cell is one orb from exploding, else
/// +1), minus 1 per hostile orthogonal neighbor; signed by the owner.
pub(crate) fn adjacency_advantage(grid: &Grid) -> i32 {
    let mut advantage = 0;
    for (mv, cell) in grid.iter() {
        let Some(owner) = cell.owner else { continue };
        let friendly_bonus = if cell.is_critical() { 2 } else { 1 };

        let mut local = i32::from(cell.count);
        for (r, c) in grid.neighbors(mv.row, mv.col) {
            match grid.cell(r, c).owner {
                Some(n) if n == owner => local += friendly_bonus,
                Some(_) => local -= 1,
                None => {}
            }
        }
        advantage += sign(owner) * local;
    }
    advantage
}
