//! Adversarial search.
//!
//! Alpha-beta minimax over cloned grid states, with an adaptive depth
//! policy and a root move selector for the engine's turn.

pub mod minimax;
pub mod select;

pub use minimax::{adaptive_depth, minimax, SCORE_LOSS, SCORE_WIN};
pub use select::{select_move, select_move_parallel, SearchResult};
