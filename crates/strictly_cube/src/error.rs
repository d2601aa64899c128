//! Error types for board access and move application.

use crate::coordinate::Coordinate;
use crate::state::Phase;
use derive_more::{Display, Error, From};

/// A coordinate outside the 6x9 addressable space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Invalid coordinate: face {face} (must be 0-5), index {index} (must be 0-8)")]
pub struct InvalidCoordinate {
    /// Requested face.
    pub face: usize,
    /// Requested cell index.
    pub index: usize,
}

impl From<Coordinate> for InvalidCoordinate {
    fn from(coord: Coordinate) -> Self {
        Self {
            face: coord.face,
            index: coord.index,
        }
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum MoveError {
    /// The coordinate is not on the cube.
    #[display("{_0}")]
    #[from]
    InvalidCoordinate(InvalidCoordinate),

    /// The target cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(#[error(not(source))] Coordinate),

    /// The game has already ended.
    #[display("Game is not active (phase: {_0})")]
    GameNotActive(#[error(not(source))] Phase),
}

/// Error raised when a recorded move sequence cannot be replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Replay failed at move {move_number}")]
pub struct ReplayError {
    /// Zero-based position of the rejected move in the sequence.
    pub move_number: usize,
    /// Why the move was rejected.
    pub source: MoveError,
}
