//! Orbweaver engine library.
//!
//! Exposes the grid/cascade simulator, heuristic evaluators, alpha-beta
//! search, and the game-state file protocol for use by integration tests
//! and the binary entry point.

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod protocol;
pub mod search;
