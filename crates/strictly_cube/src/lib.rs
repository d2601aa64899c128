//! Strictly Cube - tic-tac-toe on the six faces of a cube
//!
//! Two players alternate marking the 54 cells of a cube whose faces are 3x3
//! grids. A player wins by completing any line in the fixed catalog, which
//! includes lines that cross between faces through the cube's interior.
//!
//! # Architecture
//!
//! - **Board**: the 6x9 grid of marks
//! - **LineCatalog**: every winning line, built once and shared
//! - **Win detection**: scans the catalog for a player's completed line
//! - **GameController**: turn order, phase transitions, observers
//!
//! # Example
//!
//! ```
//! use strictly_cube::{GameController, MoveOutcome, Player};
//!
//! let mut game = GameController::new();
//! for (face, index) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     game.apply_move_at(face, index).unwrap();
//! }
//! let outcome = game.apply_move_at(0, 2).unwrap();
//! assert!(matches!(outcome, MoveOutcome::Won { player: Player::X, .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod controller;
mod coordinate;
mod error;
pub mod invariants;
mod lines;
mod observer;
mod state;
mod types;
mod win;

pub use action::{Move, MoveOutcome};
pub use board::Board;
pub use controller::GameController;
pub use coordinate::{CELL_COUNT, CELLS_PER_FACE, Coordinate, FACES};
pub use error::{InvalidCoordinate, MoveError, ReplayError};
pub use lines::{Line, LineCatalog, LineCategory};
pub use observer::{GameEvent, GameObserver};
pub use state::{GameState, Phase};
pub use types::{Mark, Player};
pub use win::{find_all_wins, find_win};

/// Every winning line, in fixed catalog order.
pub fn all_lines() -> &'static [Line] {
    LineCatalog::shared().all_lines()
}
