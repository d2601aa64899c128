//! Structural properties of the winning-line catalog.

use std::collections::{BTreeSet, HashSet};
use strictly_cube::{Board, Coordinate, LineCatalog, LineCategory, Player, all_lines, find_win};

#[test]
fn test_catalog_size_and_uniqueness() {
    let lines = all_lines();
    assert_eq!(lines.len(), LineCatalog::LEN);

    let patterns: HashSet<BTreeSet<Coordinate>> = lines
        .iter()
        .map(|line| line.cells().iter().copied().collect())
        .collect();
    assert_eq!(patterns.len(), lines.len(), "duplicate winning pattern");
}

#[test]
fn test_partition_by_shape() {
    let lines = all_lines();

    let single_face = lines
        .iter()
        .filter(|l| l.len() == 3 && l.cells().iter().all(|c| c.face == l.cells()[0].face))
        .count();
    assert_eq!(single_face, 48);

    let centers = lines
        .iter()
        .filter(|l| {
            let faces: HashSet<_> = l.cells().iter().map(|c| c.face).collect();
            l.len() == 3 && faces.len() == 3 && l.cells().iter().all(|c| c.index == 4)
        })
        .count();
    assert_eq!(centers, 4);

    let corners = lines
        .iter()
        .filter(|l| l.len() == 3 && l.cells().iter().all(|c| c.is_corner()))
        .count();
    assert_eq!(corners, 8);

    let rings = lines.iter().filter(|l| l.len() == 4).count();
    assert_eq!(rings, 9);
}

#[test]
fn test_shape_matches_category() {
    for line in all_lines() {
        match line.category() {
            LineCategory::InFace | LineCategory::Center | LineCategory::CornerDiagonal => {
                assert_eq!(line.len(), 3, "{line}")
            }
            LineCategory::Ring => assert_eq!(line.len(), 4, "{line}"),
        }
    }
}

#[test]
fn test_no_orphan_cell() {
    for coord in Coordinate::all() {
        assert!(
            all_lines().iter().any(|line| line.contains(coord)),
            "{coord} lies on no line"
        );
    }
}

#[test]
fn test_every_cell_valid() {
    assert!(
        all_lines()
            .iter()
            .flat_map(|line| line.cells())
            .all(|c| c.is_valid())
    );
}

#[test]
fn test_shared_catalog_is_stable() {
    let first = LineCatalog::shared();
    let second = LineCatalog::shared();
    assert!(std::ptr::eq(first, second));
    assert_eq!(*first, LineCatalog::build());
}

#[test]
fn test_empty_board_has_no_win() {
    let board = Board::new();
    for player in [Player::X, Player::O] {
        assert_eq!(find_win(LineCatalog::shared(), &board, player), None);
    }
}

#[test]
fn test_every_line_is_winnable() {
    let catalog = LineCatalog::shared();
    for line in catalog.all_lines() {
        let mut board = Board::new();
        for &cell in line.cells() {
            board.set(cell, Player::O.mark()).unwrap();
        }
        let found = find_win(catalog, &board, Player::O).expect("line should win");
        assert_eq!(found, line);
    }
}

#[test]
fn test_no_line_contains_another() {
    let lines = all_lines();
    for (i, inner) in lines.iter().enumerate() {
        for (j, outer) in lines.iter().enumerate() {
            if i != j {
                assert!(
                    !inner.cells().iter().all(|c| outer.contains(*c)),
                    "{inner} lies inside {outer}"
                );
            }
        }
    }
}

#[test]
fn test_cross_face_lines_avoid_ring_faces() {
    for line in all_lines() {
        if matches!(line.category(), LineCategory::Center | LineCategory::CornerDiagonal) {
            assert!(line.cells().iter().any(|c| c.face >= 4), "{line}");
        }
    }
}
