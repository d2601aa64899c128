//! Catalog of every winning line on the cube.
//!
//! The catalog is pure data: the same 69 lines, in the same order, for every
//! game. It is built once per process and shared read-only through
//! [`LineCatalog::shared`].

use crate::coordinate::{Coordinate, FACES};
use crate::invariants::{CatalogInvariants, InvariantSet};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::{debug, instrument, warn};

/// Which family of winning pattern a line belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum LineCategory {
    /// Row, column or diagonal within a single face.
    #[display("in-face")]
    InFace,
    /// Three face centers joined through the cube's interior.
    #[display("center")]
    Center,
    /// Three corner cells along a space diagonal of the cube.
    #[display("corner-diagonal")]
    CornerDiagonal,
    /// Four cells at the same index on the faces of the equatorial ring.
    #[display("ring")]
    Ring,
}

/// One way to win: a fixed sequence of 3 or 4 distinct cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    category: LineCategory,
    cells: Vec<Coordinate>,
}

impl Line {
    fn new(category: LineCategory, cells: impl IntoIterator<Item = (usize, usize)>) -> Self {
        Self {
            category,
            cells: cells.into_iter().map(Coordinate::from).collect(),
        }
    }

    /// The family this line belongs to.
    pub fn category(&self) -> LineCategory {
        self.category
    }

    /// Cells of the line, in scan order.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Number of cells (3 or 4).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; lines are never empty.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns true if `coord` is one of the line's cells.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells.contains(&coord)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [", self.category)?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{cell}")?;
        }
        write!(f, "]")
    }
}

// Cell index patterns within one face.
const FACE_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

// Every cross-face line touches face 4 or 5, so no ring line contains one.
const CENTER_LINES: [[(usize, usize); 3]; 4] = [
    [(0, 4), (5, 4), (4, 4)],
    [(2, 4), (5, 4), (4, 4)],
    [(1, 4), (5, 4), (3, 4)],
    [(1, 4), (4, 4), (3, 4)],
];

const CORNER_DIAGONALS: [[(usize, usize); 3]; 8] = [
    [(0, 0), (5, 0), (4, 6)],
    [(0, 2), (5, 2), (4, 8)],
    [(0, 6), (5, 6), (4, 0)],
    [(0, 8), (5, 8), (4, 2)],
    [(2, 0), (5, 2), (4, 2)],
    [(2, 2), (5, 8), (4, 0)],
    [(2, 6), (5, 0), (4, 8)],
    [(2, 8), (5, 6), (4, 6)],
];

/// Faces forming the equatorial ring, in scan order.
const RING_FACES: [usize; 4] = [0, 1, 2, 3];

/// Immutable, ordered set of winning lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCatalog {
    lines: Vec<Line>,
}

static SHARED: LazyLock<LineCatalog> = LazyLock::new(LineCatalog::build);

impl LineCatalog {
    /// Number of lines in the catalog.
    pub const LEN: usize = 69;

    /// The process-wide catalog, built on first use.
    pub fn shared() -> &'static LineCatalog {
        &SHARED
    }

    /// Enumerates the catalog: in-face lines, then center lines, then corner
    /// diagonals, then ring lines.
    #[instrument]
    pub fn build() -> Self {
        let mut lines = Vec::with_capacity(Self::LEN);

        for face in 0..FACES {
            lines.extend(
                FACE_LINES
                    .iter()
                    .map(|pattern| Line::new(LineCategory::InFace, pattern.map(|index| (face, index)))),
            );
        }

        lines.extend(CENTER_LINES.iter().map(|cells| Line::new(LineCategory::Center, *cells)));
        lines.extend(
            CORNER_DIAGONALS
                .iter()
                .map(|cells| Line::new(LineCategory::CornerDiagonal, *cells)),
        );

        for band in 0..3 {
            for column in 0..3 {
                let index = band * 3 + column;
                lines.push(Line::new(
                    LineCategory::Ring,
                    RING_FACES.map(|face| (face, index)),
                ));
            }
        }

        let catalog = Self { lines };
        debug!(lines = catalog.lines.len(), "Built line catalog");
        if cfg!(debug_assertions)
            && let Err(violations) = CatalogInvariants::check_all(&catalog)
        {
            for violation in &violations {
                warn!(invariant = %violation.description, "Line catalog invariant violated");
            }
        }
        catalog
    }

    /// All lines in fixed catalog order.
    pub fn all_lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false for a built catalog.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines of one category, in catalog order.
    pub fn by_category(&self, category: LineCategory) -> impl Iterator<Item = &Line> + '_ {
        self.lines.iter().filter(move |line| line.category == category)
    }

    /// Lines passing through `coord`, in catalog order.
    pub fn lines_through(&self, coord: Coordinate) -> impl Iterator<Item = &Line> + '_ {
        self.lines.iter().filter(move |line| line.contains(coord))
    }
}

impl<'a> IntoIterator for &'a LineCatalog {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_category_counts() {
        let catalog = LineCatalog::shared();
        let expected = [
            (LineCategory::InFace, 48),
            (LineCategory::Center, 4),
            (LineCategory::CornerDiagonal, 8),
            (LineCategory::Ring, 9),
        ];
        for (category, count) in expected {
            assert_eq!(catalog.by_category(category).count(), count, "{category}");
        }
        assert_eq!(catalog.len(), LineCatalog::LEN);
    }

    #[test]
    fn test_categories_appear_in_order() {
        let order: Vec<_> = LineCatalog::shared()
            .all_lines()
            .iter()
            .map(Line::category)
            .collect();
        let mut sorted = order.clone();
        let rank = |c: &LineCategory| LineCategory::iter().position(|x| x == *c);
        sorted.sort_by_key(rank);
        assert_eq!(order, sorted);
    }

    #[test]
    fn test_first_lines_are_face_zero_rows() {
        let lines = LineCatalog::shared().all_lines();
        let cells: Vec<_> = lines[0].cells().to_vec();
        assert_eq!(
            cells,
            vec![Coordinate::new(0, 0), Coordinate::new(0, 1), Coordinate::new(0, 2)]
        );
        assert_eq!(lines[6].cells()[1], Coordinate::new(0, 4));
        assert_eq!(
            lines[7].cells(),
            [Coordinate::new(0, 2), Coordinate::new(0, 4), Coordinate::new(0, 6)]
        );
    }

    #[test]
    fn test_center_lines_use_face_centers_of_distinct_faces() {
        for line in LineCatalog::shared().by_category(LineCategory::Center) {
            assert!(line.cells().iter().all(|c| c.index == 4));
            let mut faces: Vec<_> = line.cells().iter().map(|c| c.face).collect();
            faces.sort_unstable();
            faces.dedup();
            assert_eq!(faces.len(), 3, "{line}");
        }
    }

    #[test]
    fn test_corner_diagonals_use_corners_only() {
        for line in LineCatalog::shared().by_category(LineCategory::CornerDiagonal) {
            assert_eq!(line.len(), 3);
            assert!(line.cells().iter().all(|c| c.is_corner()), "{line}");
        }
    }

    #[test]
    fn test_ring_lines_span_equator() {
        let rings: Vec<_> = LineCatalog::shared().by_category(LineCategory::Ring).collect();
        assert_eq!(
            rings[0].cells(),
            [
                Coordinate::new(0, 0),
                Coordinate::new(1, 0),
                Coordinate::new(2, 0),
                Coordinate::new(3, 0),
            ]
        );
        for line in rings {
            assert_eq!(line.len(), 4);
            let index = line.cells()[0].index;
            assert!(line.cells().iter().all(|c| c.index == index));
        }
    }

    #[test]
    fn test_lines_through_center_of_face_zero() {
        let through: Vec<_> = LineCatalog::shared()
            .lines_through(Coordinate::new(0, 4))
            .map(Line::category)
            .collect();
        // Row, column, two diagonals, one center line, one ring line.
        assert_eq!(through.len(), 6);
        assert_eq!(
            through.iter().filter(|c| **c == LineCategory::Center).count(),
            1
        );
    }

    #[test]
    fn test_nested_line_is_detected() {
        use crate::invariants::{Invariant, NoNestedLines};

        let nested = LineCatalog {
            lines: vec![
                Line::new(LineCategory::Center, [(1, 4), (0, 4), (3, 4)]),
                Line::new(LineCategory::Ring, RING_FACES.map(|face| (face, 4))),
            ],
        };
        assert!(!NoNestedLines::holds(&nested));
        assert!(NoNestedLines::holds(LineCatalog::shared()));
    }

    #[test]
    fn test_category_parses_from_kebab_case() {
        assert_eq!("corner-diagonal".parse::<LineCategory>(), Ok(LineCategory::CornerDiagonal));
        assert_eq!("Ring".parse::<LineCategory>(), Ok(LineCategory::Ring));
        assert_eq!(LineCategory::InFace.to_string(), "in-face");
    }

    #[test]
    fn test_display_line() {
        let line = &LineCatalog::shared().all_lines()[0];
        assert_eq!(line.to_string(), "in-face [(0,0) (0,1) (0,2)]");
    }
}
