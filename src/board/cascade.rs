//! Breadth-first explosion propagation.
//!
//! A placement that lifts a cell to its critical mass starts a cascade:
//! the cell empties and pushes one orb into each in-bounds orthogonal
//! neighbor, capturing it for the acting player regardless of its previous
//! owner. Neighbors that reach their own critical mass explode in the next
//! wave, and the wavefront expands until no cell is left above threshold.
//!
//! Because a cell's critical mass equals its neighbor count, each explosion
//! redistributes its orbs one-for-one; corner (2), edge (3), and interior
//! (4) cells all conserve the board total identically.

use super::cell::Player;
use super::grid::{Grid, Move};

/// Default hard cap on cascade waves.
///
/// A defensive bound on worst-case runtime for adversarial inputs, not a
/// game rule. On large boards a legitimate chain could hit it and leave
/// cells above threshold, so it is exposed as the tunable `Grid::wave_cap`
/// rather than fixed here.
pub const DEFAULT_WAVE_CAP: u32 = 20;

/// Propagates explosions starting from `start`, which has just reached its
/// critical mass.
///
/// Stops early once the opponent's running orb total hits zero at the end
/// of a wave: a fully captured opponent cannot regain orbs, so further
/// waves cannot change the outcome.
pub(crate) fn cascade(grid: &mut Grid, start: Move, mover: Player) {
    let wave_cap = grid.wave_cap;
    let opponent = mover.opponent();
    let mut opponent_orbs = i64::from(grid.total_orbs(opponent));

    let (rows, cols) = (grid.rows(), grid.cols());
    let neighbors = move |row: usize, col: usize| {
        [
            (row.wrapping_sub(1), col),
            (row + 1, col),
            (row, col.wrapping_sub(1)),
            (row, col + 1),
        ]
        .into_iter()
        .filter(move |&(r, c)| r < rows && c < cols)
    };

    let mut wave = vec![start];
    let mut next = Vec::new();
    let mut waves = 0u32;

    while !wave.is_empty() {
        waves += 1;
        if waves > wave_cap {
            break;
        }

        for &m in &wave {
            let exploding = grid.cell_mut(m.row, m.col);
            exploding.count = 0;
            exploding.owner = None;

            for (r, c) in neighbors(m.row, m.col) {
                let cell = grid.cell_mut(r, c);
                if cell.owner == Some(opponent) {
                    opponent_orbs -= i64::from(cell.count);
                }
                cell.count += 1;
                cell.owner = Some(mover);
                if cell.count >= cell.critical_mass() {
                    next.push(Move { row: r, col: c });
                }
            }
        }

        wave.clear();
        std::mem::swap(&mut wave, &mut next);

        if opponent_orbs <= 0 {
            return;
        }
    }
}
