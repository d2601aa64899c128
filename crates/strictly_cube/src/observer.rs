//! Synchronous notifications of game lifecycle changes.

use crate::action::MoveOutcome;
use crate::coordinate::Coordinate;
use crate::lines::Line;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Something that happened to a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A move was accepted and the turn passed.
    TurnChanged {
        /// Cell just marked.
        last_move: Coordinate,
        /// Player to move next.
        next_player: Player,
    },
    /// A move completed a line.
    Won {
        /// The winner.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// The last empty cell was filled without a win.
    Draw,
    /// The game was reset to a fresh board.
    Reset,
}

impl GameEvent {
    pub(crate) fn from_outcome(last_move: Coordinate, outcome: &MoveOutcome) -> Self {
        match outcome {
            MoveOutcome::TurnChanged { next_player } => GameEvent::TurnChanged {
                last_move,
                next_player: *next_player,
            },
            MoveOutcome::Won { player, line } => GameEvent::Won {
                player: *player,
                line: line.clone(),
            },
            MoveOutcome::Draw => GameEvent::Draw,
        }
    }
}

/// Receives events from a [`GameController`](crate::GameController).
///
/// Observers run on the caller's thread, after the state change is complete.
/// They must be `Send` so a controller can move to another thread.
pub trait GameObserver: Send {
    /// Called once per event.
    fn notify(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent) + Send,
{
    fn notify(&mut self, event: &GameEvent) {
        self(event)
    }
}
