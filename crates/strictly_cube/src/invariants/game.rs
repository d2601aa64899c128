//! Game invariants: marks stay balanced and the board is exactly the replayed history.

use super::Invariant;
use crate::board::Board;
use crate::controller::GameController;
use crate::types::Player;

/// Invariant: X has made as many moves as O, or exactly one more.
pub struct BalancedMarks;

impl Invariant<GameController> for BalancedMarks {
    fn holds(game: &GameController) -> bool {
        let x = game.board().count(Player::X.mark());
        let o = game.board().count(Player::O.mark());
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

/// Invariant: replaying the move history onto an empty board reproduces the board.
pub struct HistoryMatchesBoard;

impl Invariant<GameController> for HistoryMatchesBoard {
    fn holds(game: &GameController) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            // Cells must be empty before they are marked
            match reconstructed.get(mov.coordinate) {
                Ok(mark) if mark.is_empty() => {}
                _ => return false,
            }
            if reconstructed.set(mov.coordinate, mov.player.mark()).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board matches the replayed move history"
    }
}
