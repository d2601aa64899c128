//! Win detection over the line catalog.
//!
//! Lines are scanned in catalog order and cells left to right; a line is
//! abandoned at the first cell that is not the player's mark. When one move
//! completes several lines at once, [`find_win`] reports only the first in
//! catalog order. [`find_all_wins`] reports every completed line.

use crate::board::Board;
use crate::lines::{Line, LineCatalog};
use crate::types::Player;
use tracing::instrument;

/// Returns true if every cell of `line` holds `player`'s mark.
fn is_complete(board: &Board, line: &Line, player: Player) -> bool {
    let target = player.mark();
    line.cells()
        .iter()
        .all(|&coord| board.get(coord).is_ok_and(|mark| mark == target))
}

/// Returns the first catalog line completed by `player`, if any.
#[instrument(skip(catalog, board))]
pub fn find_win<'c>(catalog: &'c LineCatalog, board: &Board, player: Player) -> Option<&'c Line> {
    catalog
        .all_lines()
        .iter()
        .find(|line| is_complete(board, line, player))
}

/// Returns every catalog line completed by `player`, in catalog order.
#[instrument(skip(catalog, board))]
pub fn find_all_wins<'c>(catalog: &'c LineCatalog, board: &Board, player: Player) -> Vec<&'c Line> {
    catalog
        .all_lines()
        .iter()
        .filter(|line| is_complete(board, line, player))
        .collect()
}
