//! Orbweaver -- a chain-reaction engine driven by game-state files.
//!
//! Reads the board the human just played from a text file, computes the
//! engine's reply with alpha-beta search, applies it, and writes the
//! updated board back under the `AI Move:` header. The chosen move is
//! printed to stdout as `row col`.
//!
//! Usage: `orbweaver [--config FILE] [INPUT [OUTPUT]]`
//! INPUT defaults to `gameState.txt`; OUTPUT defaults to INPUT.

use std::path::PathBuf;
use std::process::ExitCode;

use orbweaver::config::EngineConfig;
use orbweaver::engine::Engine;

struct Args {
    config: Option<PathBuf>,
    input: PathBuf,
    output: PathBuf,
}

/// Parses command-line arguments. Returns `None` on a usage error after
/// reporting it to stderr.
fn parse_args() -> Option<Args> {
    let mut config = None;
    let mut positional: Vec<PathBuf> = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => match args.next() {
                Some(path) => config = Some(PathBuf::from(path)),
                None => {
                    eprintln!("--config requires a file path");
                    return None;
                }
            },
            _ if arg.starts_with("--") => {
                eprintln!("unknown flag: {arg}");
                return None;
            }
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    if positional.len() > 2 {
        eprintln!("usage: orbweaver [--config FILE] [INPUT [OUTPUT]]");
        return None;
    }
    let input = positional
        .first()
        .cloned()
        .unwrap_or_else(|| PathBuf::from("gameState.txt"));
    let output = positional.get(1).cloned().unwrap_or_else(|| input.clone());

    Some(Args {
        config,
        input,
        output,
    })
}

fn main() -> ExitCode {
    let Some(args) = parse_args() else {
        return ExitCode::FAILURE;
    };

    let config = match &args.config {
        Some(path) => match EngineConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => EngineConfig::default(),
    };

    let engine = Engine::new(config);
    match engine.play_turn(&args.input, &args.output) {
        Ok(result) => {
            println!("{} {}", result.mv.row, result.mv.col);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
