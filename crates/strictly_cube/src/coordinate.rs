//! Cell coordinates on the cube.

use serde::{Deserialize, Serialize};

/// Number of faces on the cube.
pub const FACES: usize = 6;

/// Number of cells on each 3x3 face.
pub const CELLS_PER_FACE: usize = 9;

/// Total number of addressable cells.
pub const CELL_COUNT: usize = FACES * CELLS_PER_FACE;

/// A cell on the cube: a face (0-5) and a row-major index within it (0-8).
///
/// Construction does not validate; the board rejects coordinates outside
/// the addressable space with [`InvalidCoordinate`](crate::InvalidCoordinate).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("({face},{index})")]
pub struct Coordinate {
    /// Face of the cube (0-5).
    pub face: usize,
    /// Row-major cell index within the face (0-8).
    pub index: usize,
}

impl Coordinate {
    /// Creates a coordinate.
    pub const fn new(face: usize, index: usize) -> Self {
        Self { face, index }
    }

    /// Returns true if the coordinate lies on the cube.
    pub const fn is_valid(self) -> bool {
        self.face < FACES && self.index < CELLS_PER_FACE
    }

    /// Row within the face (0-2).
    pub const fn row(self) -> usize {
        self.index / 3
    }

    /// Column within the face (0-2).
    pub const fn column(self) -> usize {
        self.index % 3
    }

    /// Returns true for the four corner cells of a face.
    pub const fn is_corner(self) -> bool {
        matches!(self.index, 0 | 2 | 6 | 8)
    }

    /// Iterates every addressable coordinate, face by face.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..FACES).flat_map(|face| (0..CELLS_PER_FACE).map(move |index| Coordinate::new(face, index)))
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((face, index): (usize, usize)) -> Self {
        Self::new(face, index)
    }
}
