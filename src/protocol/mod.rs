//! External interfaces.
//!
//! The game-state file format used to exchange the board between turns.
//! The core consumes and produces it only through the load/dump contract
//! in `gamestate`.

pub mod gamestate;

pub use gamestate::{format_game_state, parse_game_state, GameStateError, MoveHeader};
