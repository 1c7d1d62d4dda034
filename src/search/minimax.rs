//! Alpha-beta minimax over cloned grid states.
//!
//! The tree alternates between a maximizing state (Blue, the engine, to
//! move) and a minimizing state (Red to move). Every recursive step clones
//! the grid before placing, so sibling branches stay fully isolated; no
//! undo log is needed and branches could be searched independently.

use crate::board::{Grid, Player};
use crate::eval::Heuristic;

/// Sentinel for a position where the opponent has no orbs left.
pub const SCORE_WIN: i32 = i32::MAX;
/// Sentinel for a position where the engine has no orbs left.
pub const SCORE_LOSS: i32 = i32::MIN;

/// Adaptive depth policy, keyed on the total orb count after the candidate
/// move: deep while the board is sparse, shallower once the branching
/// factor grows.
pub fn adaptive_depth(total_orbs: u32) -> u32 {
    if total_orbs <= 10 {
        5
    } else if total_orbs <= 20 {
        3
    } else {
        2
    }
}

/// Alpha-beta minimax. `maximizing` means Blue is to move.
///
/// The win/loss check runs before the depth cutoff, so a decided position
/// reports its sentinel at any requested depth, including zero. Pruning
/// stops move enumeration as soon as `beta <= alpha`; it changes how many
/// branches are visited, never the value returned.
pub fn minimax(
    grid: &Grid,
    depth: u32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    heuristic: Heuristic,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if grid.total_orbs(Player::Red) == 0 {
        return SCORE_WIN;
    }
    if grid.total_orbs(Player::Blue) == 0 {
        return SCORE_LOSS;
    }
    if depth == 0 {
        return heuristic.evaluate(grid);
    }

    let mover = if maximizing { Player::Blue } else { Player::Red };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for mv in grid.legal_moves(mover) {
        let mut child = grid.clone();
        if let Err(e) = child.place(mv, mover) {
            // legal_moves only yields placeable cells; report and skip if
            // that contract is ever broken.
            eprintln!("search: {e}");
            continue;
        }
        let value = minimax(&child, depth - 1, !maximizing, alpha, beta, heuristic, nodes);

        if maximizing {
            best = best.max(value);
            alpha = alpha.max(value);
        } else {
            best = best.min(value);
            beta = beta.min(value);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    fn seed(grid: &mut Grid, row: usize, col: usize, count: u8, owner: Player) {
        let cell = grid.cell_mut(row, col);
        cell.count = count;
        cell.owner = Some(owner);
    }

    fn search(grid: &Grid, depth: u32, maximizing: bool) -> i32 {
        let mut nodes = 0;
        minimax(
            grid,
            depth,
            maximizing,
            i32::MIN,
            i32::MAX,
            Heuristic::default(),
            &mut nodes,
        )
    }

    /// Reference minimax without pruning, for equivalence checks.
    fn plain_minimax(grid: &Grid, depth: u32, maximizing: bool, heuristic: Heuristic) -> i32 {
        if grid.total_orbs(Player::Red) == 0 {
            return SCORE_WIN;
        }
        if grid.total_orbs(Player::Blue) == 0 {
            return SCORE_LOSS;
        }
        if depth == 0 {
            return heuristic.evaluate(grid);
        }
        let mover = if maximizing { Player::Blue } else { Player::Red };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for mv in grid.legal_moves(mover) {
            let mut child = grid.clone();
            child.place(mv, mover).unwrap();
            let value = plain_minimax(&child, depth - 1, !maximizing, heuristic);
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }
        best
    }

    #[test]
    fn depth_policy_tiers() {
        assert_eq!(adaptive_depth(9), 5);
        assert_eq!(adaptive_depth(10), 5);
        assert_eq!(adaptive_depth(11), 3);
        assert_eq!(adaptive_depth(15), 3);
        assert_eq!(adaptive_depth(20), 3);
        assert_eq!(adaptive_depth(21), 2);
        assert_eq!(adaptive_depth(25), 2);
    }

    #[test]
    fn terminal_short_circuit_beats_depth_cutoff() {
        let mut grid = Grid::new(3, 3).unwrap();
        seed(&mut grid, 1, 1, 2, Player::Blue);

        for depth in [0, 1, 4] {
            assert_eq!(search(&grid, depth, true), SCORE_WIN);
            assert_eq!(search(&grid, depth, false), SCORE_WIN);
        }
    }

    #[test]
    fn lost_position_reports_loss_sentinel() {
        let mut grid = Grid::new(3, 3).unwrap();
        seed(&mut grid, 1, 1, 2, Player::Red);

        for depth in [0, 1, 4] {
            assert_eq!(search(&grid, depth, true), SCORE_LOSS);
            assert_eq!(search(&grid, depth, false), SCORE_LOSS);
        }
    }

    #[test]
    fn depth_zero_returns_static_evaluation() {
        let mut grid = Grid::new(3, 3).unwrap();
        seed(&mut grid, 0, 0, 1, Player::Blue);
        seed(&mut grid, 2, 2, 1, Player::Red);
        assert_eq!(search(&grid, 0, true), Heuristic::default().evaluate(&grid));
    }

    #[test]
    fn maximizer_finds_immediate_capture() {
        // Blue at the corner next to Red's lone orb: exploding the corner
        // captures everything.
        let mut grid = Grid::new(3, 3).unwrap();
        seed(&mut grid, 0, 0, 1, Player::Blue);
        seed(&mut grid, 0, 1, 1, Player::Red);
        assert_eq!(search(&grid, 2, true), SCORE_WIN);
    }

    #[test]
    fn pruning_matches_plain_minimax() {
        let mut grid = Grid::new(3, 3).unwrap();
        seed(&mut grid, 0, 0, 1, Player::Blue);
        seed(&mut grid, 1, 1, 2, Player::Blue);
        seed(&mut grid, 2, 2, 1, Player::Red);
        seed(&mut grid, 0, 2, 1, Player::Red);

        for h in [
            Heuristic::OrbDifference,
            Heuristic::AdjacencyAdvantage,
            Heuristic::PositionalByOrbs,
        ] {
            for depth in 0..=3 {
                for maximizing in [true, false] {
                    let mut nodes = 0;
                    let pruned =
                        minimax(&grid, depth, maximizing, i32::MIN, i32::MAX, h, &mut nodes);
                    let plain = plain_minimax(&grid, depth, maximizing, h);
                    assert_eq!(pruned, plain, "h={h:?} depth={depth} max={maximizing}");
                }
            }
        }
    }

    #[test]
    fn pruning_visits_no_more_nodes() {
        let mut grid = Grid::new(3, 3).unwrap();
        seed(&mut grid, 0, 0, 2, Player::Blue);
        seed(&mut grid, 2, 2, 2, Player::Red);

        let mut pruned_nodes = 0;
        minimax(
            &grid,
            3,
            true,
            i32::MIN,
            i32::MAX,
            Heuristic::default(),
            &mut pruned_nodes,
        );

        // Count plain-minimax nodes with a fully open window and no cuts.
        fn count(grid: &Grid, depth: u32, maximizing: bool) -> u64 {
            let mut n = 1;
            if grid.total_orbs(Player::Red) == 0
                || grid.total_orbs(Player::Blue) == 0
                || depth == 0
            {
                return n;
            }
            let mover = if maximizing { Player::Blue } else { Player::Red };
            for mv in grid.legal_moves(mover) {
                let mut child = grid.clone();
                child.place(mv, mover).unwrap();
                n += count(&child, depth - 1, !maximizing);
            }
            n
        }
        let full_nodes = count(&grid, 3, true);
        assert!(pruned_nodes <= full_nodes);
    }

    #[test]
    fn seeded_window_never_misreports_better_lines() {
        // With alpha seeded above a candidate's true value the search may
        // fail low, but a line better than alpha must come back exact.
        let mut grid = Grid::new(3, 3).unwrap();
        seed(&mut grid, 0, 0, 1, Player::Blue);
        seed(&mut grid, 2, 2, 1, Player::Red);

        let exact = plain_minimax(&grid, 2, false, Heuristic::default());
        let mut nodes = 0;
        let seeded = minimax(
            &grid,
            2,
            false,
            exact - 1,
            i32::MAX,
            Heuristic::default(),
            &mut nodes,
        );
        assert_eq!(seeded, exact);
    }
}
