//! Catalog invariants over line shape, uniqueness, nesting and cell coverage.

use super::Invariant;
use crate::coordinate::Coordinate;
use crate::lines::LineCatalog;
use std::collections::{BTreeSet, HashSet};

/// Invariant: every line has 3 or 4 valid, pairwise distinct cells.
pub struct ValidCells;

impl Invariant<LineCatalog> for ValidCells {
    fn holds(catalog: &LineCatalog) -> bool {
        catalog.all_lines().iter().all(|line| {
            let distinct: HashSet<_> = line.cells().iter().collect();
            matches!(line.len(), 3 | 4)
                && distinct.len() == line.len()
                && line.cells().iter().all(|c| c.is_valid())
        })
    }

    fn description() -> &'static str {
        "Every line has 3 or 4 distinct valid cells"
    }
}

/// Invariant: no two lines cover the same set of cells.
pub struct DistinctLines;

impl Invariant<LineCatalog> for DistinctLines {
    fn holds(catalog: &LineCatalog) -> bool {
        let patterns: HashSet<BTreeSet<Coordinate>> = catalog
            .all_lines()
            .iter()
            .map(|line| line.cells().iter().copied().collect())
            .collect();
        patterns.len() == catalog.len()
    }

    fn description() -> &'static str {
        "Lines are pairwise distinct as sets of cells"
    }
}

/// Invariant: no line's cells are a subset of another line's cells.
///
/// A nested line would always complete first, so the enclosing line could
/// never be reported as the win.
pub struct NoNestedLines;

impl Invariant<LineCatalog> for NoNestedLines {
    fn holds(catalog: &LineCatalog) -> bool {
        let lines = catalog.all_lines();
        lines.iter().enumerate().all(|(i, inner)| {
            lines.iter().enumerate().all(|(j, outer)| {
                i == j || !inner.cells().iter().all(|c| outer.contains(*c))
            })
        })
    }

    fn description() -> &'static str {
        "No line is contained in another line"
    }
}

/// Invariant: every cell of the cube lies on at least one line.
pub struct FullCoverage;

impl Invariant<LineCatalog> for FullCoverage {
    fn holds(catalog: &LineCatalog) -> bool {
        Coordinate::all().all(|coord| catalog.lines_through(coord).next().is_some())
    }

    fn description() -> &'static str {
        "Every cell lies on at least one winning line"
    }
}
