//! Board representation and cascade simulation.
//!
//! Contains the core data structures for players, cells, and the grid,
//! plus the breadth-first explosion propagation triggered by placement.

pub mod cascade;
pub mod cell;
pub mod grid;

pub use cascade::DEFAULT_WAVE_CAP;
pub use cell::{Cell, CellClass, Player};
pub use grid::{Grid, GridError, Move, PlaceError};
