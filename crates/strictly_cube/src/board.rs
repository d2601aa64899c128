//! The 6x9 grid of cell marks.

use crate::coordinate::{CELLS_PER_FACE, Coordinate, FACES};
use crate::error::InvalidCoordinate;
use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Marks on all six faces of the cube.
///
/// Every addressable coordinate always holds exactly one [`Mark`]; the board
/// itself enforces no game rules, so `set` overwrites unconditionally.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells per face in row-major order.
    faces: [[Mark; CELLS_PER_FACE]; FACES],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the mark at the given coordinate.
    pub fn get(&self, coord: Coordinate) -> Result<Mark, InvalidCoordinate> {
        self.faces
            .get(coord.face)
            .and_then(|face| face.get(coord.index))
            .copied()
            .ok_or_else(|| coord.into())
    }

    /// Sets the mark at the given coordinate.
    #[instrument(skip(self), fields(coord = %coord))]
    pub fn set(&mut self, coord: Coordinate, mark: Mark) -> Result<(), InvalidCoordinate> {
        let cell = self
            .faces
            .get_mut(coord.face)
            .and_then(|face| face.get_mut(coord.index))
            .ok_or(InvalidCoordinate::from(coord))?;
        *cell = mark;
        Ok(())
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.faces.iter().flatten().all(|mark| !mark.is_empty())
    }

    /// Resets every cell to empty.
    pub fn clear(&mut self) {
        self.faces = Default::default();
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.faces.iter().flatten().filter(|m| **m == mark).count()
    }

    /// Iterates over every cell that holds a player's mark.
    pub fn occupied(&self) -> impl Iterator<Item = (Coordinate, Mark)> + '_ {
        self.cells().filter(|(_, mark)| !mark.is_empty())
    }

    /// Iterates over every cell, face by face.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, Mark)> + '_ {
        self.faces.iter().enumerate().flat_map(|(face, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(index, mark)| (Coordinate::new(face, index), *mark))
        })
    }
}
