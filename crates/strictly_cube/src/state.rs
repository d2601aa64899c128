//! Game lifecycle state.

use crate::lines::Line;
use crate::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display)]
pub enum Phase {
    /// Moves are accepted.
    #[default]
    InProgress,
    /// A player completed a line.
    Won,
    /// The board filled with no completed line.
    Draw,
}

/// Snapshot of turn order and outcome.
///
/// Only the controller creates or changes a `GameState`; callers receive
/// clones for rendering and score-keeping.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameState {
    /// Player whose turn it is (or who made the final move once the game ends).
    #[getter(copy)]
    current_player: Player,
    /// Lifecycle phase.
    #[getter(copy)]
    phase: Phase,
    /// The completed line, once the game is won.
    winning_line: Option<Line>,
    /// The winner, once the game is won.
    #[getter(copy)]
    winner: Option<Player>,
}

impl GameState {
    /// Creates the state of a fresh game: X to move, in progress.
    pub fn new() -> Self {
        Self {
            current_player: Player::X,
            phase: Phase::InProgress,
            winning_line: None,
            winner: None,
        }
    }

    /// Returns true while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.phase == Phase::InProgress
    }

    pub(crate) fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    pub(crate) fn finish_won(&mut self, line: Line) {
        self.phase = Phase::Won;
        self.winner = Some(self.current_player);
        self.winning_line = Some(line);
    }

    pub(crate) fn finish_draw(&mut self) {
        self.phase = Phase::Draw;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
