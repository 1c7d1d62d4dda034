//! Position evaluation.
//!
//! Scores a grid from the engine's perspective using one of a small closed
//! set of interchangeable heuristics, selected at configuration time.

pub mod heuristic;

pub use heuristic::Heuristic;
