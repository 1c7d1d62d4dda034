//! Root move selection for the engine's turn.
//!
//! Enumerates Blue's legal moves in scan order, searches each resulting
//! position with minimax rooted at the minimizing state (Red replies next),
//! and keeps the first candidate with the strictly greatest value. The
//! sequential path seeds alpha with the best value found so far, tightening
//! the window across candidates; the rayon path searches each candidate
//! with a full window instead, which provably selects the same move.

use rayon::prelude::*;

use crate::board::{Grid, Move, Player};
use crate::eval::Heuristic;

use super::minimax::{adaptive_depth, minimax};

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub mv: Move,
    pub value: i32,
    pub nodes: u64,
}

/// Picks Blue's move. Returns `None` only when Blue has no legal move,
/// which on this game's rules means every cell is Red-owned.
///
/// The candidate placement itself is ply one, so the remaining search runs
/// at the adaptive depth minus one. When no candidate strictly beats the
/// loss sentinel the first legal move is returned, so the engine always
/// answers while it still can.
pub fn select_move(grid: &Grid, heuristic: Heuristic) -> Option<SearchResult> {
    let candidates = grid.legal_moves(Player::Blue);

    let mut best_value = i32::MIN;
    let mut best_move: Option<Move> = None;
    let mut nodes = 0u64;

    for &mv in &candidates {
        let mut child = grid.clone();
        if let Err(e) = child.place(mv, Player::Blue) {
            eprintln!("select: {e}");
            continue;
        }
        let depth = adaptive_depth(child.total_orbs_all());
        let value = minimax(
            &child,
            depth - 1,
            false,
            best_value,
            i32::MAX,
            heuristic,
            &mut nodes,
        );
        if value > best_value {
            best_value = value;
            best_move = Some(mv);
        }
    }

    let mv = best_move.or_else(|| candidates.first().copied())?;
    Some(SearchResult {
        mv,
        value: best_value,
        nodes,
    })
}

/// Parallel root search: every candidate subtree is independent, so each is
/// searched on its own worker with a full alpha-beta window and the results
/// are reduced by (value, scan order). Selects the same move as
/// `select_move`; a full-window search returns exact values, and the
/// sequential seeded window only ever suppresses candidates that are not
/// strictly better than the running best.
pub fn select_move_parallel(
    grid: &Grid,
    heuristic: Heuristic,
    threads: usize,
) -> Option<SearchResult> {
    if threads <= 1 {
        return select_move(grid, heuristic);
    }

    let pool = match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("select: thread pool unavailable ({e}), searching sequentially");
            return select_move(grid, heuristic);
        }
    };

    let candidates = grid.legal_moves(Player::Blue);
    if candidates.is_empty() {
        return None;
    }

    let scored: Vec<(i32, u64)> = pool.install(|| {
        candidates
            .par_iter()
            .map(|&mv| {
                let mut nodes = 0u64;
                let mut child = grid.clone();
                if let Err(e) = child.place(mv, Player::Blue) {
                    eprintln!("select: {e}");
                    return (i32::MIN, nodes);
                }
                let depth = adaptive_depth(child.total_orbs_all());
                let value = minimax(
                    &child,
                    depth - 1,
                    false,
                    i32::MIN,
                    i32::MAX,
                    heuristic,
                    &mut nodes,
                );
                (value, nodes)
            })
            .collect()
    });

    let nodes = scored.iter().map(|&(_, n)| n).sum();
    let mut best_value = i32::MIN;
    let mut best_move: Option<Move> = None;
    for (&mv, &(value, _)) in candidates.iter().zip(&scored) {
        if value > best_value {
            best_value = value;
            best_move = Some(mv);
        }
    }

    let mv = best_move.or_else(|| candidates.first().copied())?;
    Some(SearchResult {
        mv,
        value: best_value,
        nodes,
    })
}
