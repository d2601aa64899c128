//! Win tallies across games in one session.

use derive_getters::Getters;
use strictly_cube::{MoveOutcome, Player};
use tracing::instrument;

/// Wins per player and draws, kept by the session rather than the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, derive_new::new)]
pub struct Scoreboard {
    /// Games won by X.
    #[getter(copy)]
    x_wins: u32,
    /// Games won by O.
    #[getter(copy)]
    o_wins: u32,
    /// Drawn games.
    #[getter(copy)]
    draws: u32,
}

impl Scoreboard {
    /// Counts a finished game; non-terminal outcomes are ignored.
    #[instrument(skip(self, outcome))]
    pub fn record(&mut self, outcome: &MoveOutcome) {
        match outcome {
            MoveOutcome::Won {
                player: Player::X, ..
            } => self.x_wins += 1,
            MoveOutcome::Won {
                player: Player::O, ..
            } => self.o_wins += 1,
            MoveOutcome::Draw => self.draws += 1,
            MoveOutcome::TurnChanged { .. } => {}
        }
    }

    /// Wins for one player.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Clears every tally.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X {} - O {} (draws: {})", self.x_wins, self.o_wins, self.draws)
    }
}
