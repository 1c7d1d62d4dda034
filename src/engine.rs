//! Turn driver.
//!
//! Glues the protocol, search, and board layers into one engine turn:
//! load the game-state file the human just wrote, pick a reply, apply it,
//! and write the updated state back under the `AI Move:` header.

use std::fs;
use std::path::Path;

use crate::board::{Grid, PlaceError, Player};
use crate::config::EngineConfig;
use crate::protocol::gamestate::{
    format_game_state, parse_game_state, GameStateError, MoveHeader,
};
use crate::search::{select_move_parallel, SearchResult};

/// Errors raised while playing a turn.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    GameState(#[from] GameStateError),

    #[error(transparent)]
    Place(#[from] PlaceError),

    #[error("state file does not record a human move")]
    NotHumanMove,

    #[error("no legal move available for the engine")]
    NoLegalMove,
}

/// Plays engine turns over game-state files.
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Engine {
        Engine { config }
    }

    /// Plays one turn: reads the state from `input`, computes and applies
    /// the engine's reply, and writes the updated state to `output`.
    ///
    /// The input must record a human move; replying to our own output
    /// would desynchronize the exchange.
    pub fn play_turn(&self, input: &Path, output: &Path) -> Result<SearchResult, EngineError> {
        let text = fs::read_to_string(input).map_err(|source| EngineError::Read {
            path: input.display().to_string(),
            source,
        })?;

        let (header, mut grid) = parse_game_state(&text, self.config.rows, self.config.cols)?;
        if header != MoveHeader::Human {
            return Err(EngineError::NotHumanMove);
        }
        grid.wave_cap = self.config.wave_cap;

        let result = self.choose(&grid).ok_or(EngineError::NoLegalMove)?;
        grid.place(result.mv, Player::Blue)?;

        fs::write(output, format_game_state(MoveHeader::Ai, &grid)).map_err(|source| {
            EngineError::Write {
                path: output.display().to_string(),
                source,
            }
        })?;

        eprintln!(
            "info move ({}, {}) score {} nodes {}",
            result.mv.row, result.mv.col, result.value, result.nodes
        );
        Ok(result)
    }

    /// Runs the root search with the configured heuristic and thread count.
    pub fn choose(&self, grid: &Grid) -> Option<SearchResult> {
        select_move_parallel(grid, self.config.heuristic, self.config.threads)
    }
}
