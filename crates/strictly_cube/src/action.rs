//! Moves and their outcomes.

use crate::coordinate::Coordinate;
use crate::lines::Line;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{player} -> {coordinate}")]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell marked.
    pub coordinate: Coordinate,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, coordinate: Coordinate) -> Self {
        Self { player, coordinate }
    }
}

/// What an accepted move did to the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The game continues with the other player.
    TurnChanged {
        /// Player to move next.
        next_player: Player,
    },
    /// The mover completed a line.
    Won {
        /// The winner.
        player: Player,
        /// First completed line in catalog order.
        line: Line,
    },
    /// The board is full and no line was completed.
    Draw,
}

impl MoveOutcome {
    /// Returns true if the move ended the game.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::TurnChanged { .. })
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::TurnChanged { next_player } => write!(f, "Player {next_player} to move"),
            MoveOutcome::Won { player, line } => write!(f, "Player {player} wins: {line}"),
            MoveOutcome::Draw => write!(f, "Draw"),
        }
    }
}
