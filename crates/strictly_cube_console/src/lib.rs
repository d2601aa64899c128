//! Terminal driver for cube tic-tac-toe.
//!
//! The game rules live in `strictly_cube`; this crate owns everything a
//! caller does around them: configuration, score-keeping, and turning
//! move outcomes into messages.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod scoreboard;
mod session;

pub use cli::{Cli, Command};
pub use config::{ConfigError, SessionConfig};
pub use scoreboard::Scoreboard;
pub use session::{Command as SessionCommand, Flow, ParseMoveError, Session, parse_coordinate};

use std::io::Write;
use strictly_cube::{GameController, LineCatalog, LineCategory};

/// Writes the catalog, optionally restricted to one category.
pub fn write_lines(category: Option<LineCategory>, out: &mut impl Write) -> std::io::Result<()> {
    let catalog = LineCatalog::shared();
    let mut count = 0;
    for (number, line) in catalog.all_lines().iter().enumerate() {
        if category.is_some_and(|c| c != line.category()) {
            continue;
        }
        writeln!(out, "{number:>2}  {line}")?;
        count += 1;
    }
    writeln!(out, "{count} lines")
}

/// Replays `face:index` moves from X's first move and writes the final state.
pub fn write_replay(moves: &[String], out: &mut impl Write) -> anyhow::Result<()> {
    let coords = moves
        .iter()
        .map(|m| parse_coordinate(m))
        .collect::<Result<Vec<_>, _>>()?;
    let game = GameController::replay(&coords)?;
    let state = game.current_state();

    writeln!(out, "Moves: {}", game.history().len())?;
    writeln!(out, "Phase: {}", state.phase())?;
    match (state.winner(), state.winning_line()) {
        (Some(winner), Some(line)) => writeln!(out, "Winner: {winner} via {line}")?,
        _ if state.is_active() => writeln!(out, "Player {} to move", state.current_player())?,
        _ => {}
    }
    Ok(())
}
