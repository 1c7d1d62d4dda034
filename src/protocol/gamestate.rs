//! Game-state file encoding and decoding.
//!
//! The board travels between turns as a small text file: a header line
//! naming whose move was just recorded, then one line per board row of
//! whitespace-separated cell tokens. A token is a single digit orb count
//! optionally followed by the owner's letter (`R` human, `B` engine); a
//! bare `0` is an empty cell.
//!
//! Example for a 2x3 board after a human move:
//!
//! ```text
//! Human Move:
//! 1R 0 2B
//! 0 1R 0
//! ```

use crate::board::{Grid, GridError, Player};

/// Header line of a game-state file: whose move was just recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveHeader {
    Human,
    Ai,
}

impl MoveHeader {
    /// The literal header line for this variant.
    pub const fn line(self) -> &'static str {
        match self {
            MoveHeader::Human => "Human Move:",
            MoveHeader::Ai => "AI Move:",
        }
    }

    /// Parses a header line, tolerating trailing whitespace.
    pub fn from_line(line: &str) -> Option<MoveHeader> {
        match line.trim_end() {
            "Human Move:" => Some(MoveHeader::Human),
            "AI Move:" => Some(MoveHeader::Ai),
            _ => None,
        }
    }
}

/// Errors that can occur while reading a game-state file.
#[derive(Debug, thiserror::Error)]
pub enum GameStateError {
    #[error("missing header line")]
    MissingHeader,

    #[error("unrecognized header: '{0}'")]
    BadHeader(String),

    #[error("expected {expected} rows, got {got}")]
    NotEnoughRows { expected: usize, got: usize },

    #[error("row {row} has {got} cells, expected {expected}")]
    NotEnoughCols {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("malformed cell token '{token}' in row {row}")]
    BadToken { row: usize, token: String },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Parses a game-state file into its header and a grid of the given shape.
///
/// The expected dimensions come from the caller (the deployment fixes
/// them); a matrix of any other shape is a configuration error, reported
/// rather than silently corrected.
pub fn parse_game_state(
    input: &str,
    rows: usize,
    cols: usize,
) -> Result<(MoveHeader, Grid), GameStateError> {
    let mut lines = input.lines();

    let header_line = lines.next().ok_or(GameStateError::MissingHeader)?;
    let header = MoveHeader::from_line(header_line)
        .ok_or_else(|| GameStateError::BadHeader(header_line.trim_end().to_string()))?;

    let mut cells: Vec<Vec<(u8, Option<Player>)>> = Vec::with_capacity(rows);
    for row in 0..rows {
        let line = lines.next().ok_or(GameStateError::NotEnoughRows {
            expected: rows,
            got: row,
        })?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < cols {
            return Err(GameStateError::NotEnoughCols {
                row,
                expected: cols,
                got: tokens.len(),
            });
        }
        let mut parsed = Vec::with_capacity(cols);
        for token in tokens.iter().take(cols) {
            let cell = parse_token(token).ok_or_else(|| GameStateError::BadToken {
                row,
                token: token.to_string(),
            })?;
            parsed.push(cell);
        }
        cells.push(parsed);
    }

    let grid = Grid::from_cells(rows, cols, &cells)?;
    Ok((header, grid))
}

/// Parses one cell token: a digit count plus optional owner letter. A cell
/// without an owner letter must hold zero orbs, and an owned cell must
/// hold at least one.
fn parse_token(token: &str) -> Option<(u8, Option<Player>)> {
    let mut chars = token.chars();
    let count = chars.next()?.to_digit(10)? as u8;
    match chars.next() {
        None => {
            if count == 0 {
                Some((0, None))
            } else {
                None
            }
        }
        Some(letter) => {
            if chars.next().is_some() || count == 0 {
                return None;
            }
            let owner = Player::from_letter(letter)?;
            Some((count, Some(owner)))
        }
    }
}

/// Formats the full grid under the given header, row-major and
/// space-separated, in the same layout the parser accepts.
pub fn format_game_state(header: MoveHeader, grid: &Grid) -> String {
    let mut out = String::new();
    out.push_str(header.line());
    out.push('\n');
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if col > 0 {
                out.push(' ');
            }
            let cell = grid.cell(row, col);
            out.push((b'0' + cell.count) as char);
            if let Some(owner) = cell.owner {
                out.push(owner.letter());
            }
        }
        out.push('\n');
    }
    out
}
