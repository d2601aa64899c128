//! Game controller: owns the board and turn order, applies moves.

use crate::action::{Move, MoveOutcome};
use crate::board::Board;
use crate::coordinate::Coordinate;
use crate::error::{MoveError, ReplayError};
use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use crate::lines::{Line, LineCatalog};
use crate::observer::{GameEvent, GameObserver};
use crate::state::GameState;
use crate::win;
use tracing::{debug, info, instrument, warn};

/// One game of cube tic-tac-toe.
///
/// The controller is the only writer of its board and state. Moves are
/// applied synchronously; a rejected move leaves everything untouched.
pub struct GameController {
    board: Board,
    state: GameState,
    history: Vec<Move>,
    catalog: &'static LineCatalog,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameController {
    /// Creates a new game using the shared line catalog.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: GameState::new(),
            history: Vec::new(),
            catalog: LineCatalog::shared(),
            observers: Vec::new(),
        }
    }

    /// Builds a game by applying `moves` in order, starting with X.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(moves: &[Coordinate]) -> Result<Self, ReplayError> {
        let mut game = Self::new();
        for (move_number, coord) in moves.iter().enumerate() {
            game.apply_move(*coord)
                .map_err(|source| ReplayError { move_number, source })?;
        }
        Ok(game)
    }

    /// Registers an observer notified after every accepted move and reset.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Places the current player's mark at `coord`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameNotActive`] once the game is won or drawn.
    /// - [`MoveError::InvalidCoordinate`] if `coord` is off the cube.
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self), fields(coord = %coord, player = %self.state.current_player()))]
    pub fn apply_move(&mut self, coord: Coordinate) -> Result<MoveOutcome, MoveError> {
        if !self.state.is_active() {
            return Err(MoveError::GameNotActive(self.state.phase()));
        }
        if !self.board.get(coord)?.is_empty() {
            return Err(MoveError::CellOccupied(coord));
        }

        let player = self.state.current_player();
        self.board.set(coord, player.mark())?;
        self.history.push(Move::new(player, coord));
        debug!(moves = self.history.len(), "Mark placed");

        let outcome = if let Some(line) = win::find_win(self.catalog, &self.board, player) {
            info!(%player, %line, "Game won");
            self.state.finish_won(line.clone());
            MoveOutcome::Won {
                player,
                line: line.clone(),
            }
        } else if self.board.is_full() {
            info!("Game drawn");
            self.state.finish_draw();
            MoveOutcome::Draw
        } else {
            self.state.pass_turn();
            MoveOutcome::TurnChanged {
                next_player: self.state.current_player(),
            }
        };

        if cfg!(debug_assertions) {
            self.log_violations();
        }
        self.emit(GameEvent::from_outcome(coord, &outcome));
        Ok(outcome)
    }

    /// Convenience for [`apply_move`](Self::apply_move) with raw face and index.
    pub fn apply_move_at(&mut self, face: usize, index: usize) -> Result<MoveOutcome, MoveError> {
        self.apply_move(Coordinate::new(face, index))
    }

    /// Starts a fresh game. Allowed in any phase.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.state = GameState::new();
        self.history.clear();
        info!("Game reset");
        self.emit(GameEvent::Reset);
    }

    /// Snapshot of turn order and outcome.
    pub fn current_state(&self) -> GameState {
        self.state.clone()
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves applied since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The catalog this game checks against.
    pub fn all_lines(&self) -> &'static [Line] {
        self.catalog.all_lines()
    }

    /// Every line completed by the last mover, in catalog order.
    ///
    /// Usually one; a single move can complete several lines, in which case
    /// [`MoveOutcome::Won`] carries only the first.
    pub fn completed_lines(&self) -> Vec<&'static Line> {
        match self.history.last() {
            Some(last) => win::find_all_wins(self.catalog, &self.board, last.player),
            None => Vec::new(),
        }
    }

    /// Checks the game invariants against the current board and history.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        GameInvariants::check_all(self)
    }

    fn log_violations(&self) {
        if let Err(violations) = self.check_invariants() {
            for violation in &violations {
                warn!(invariant = %violation.description, "Game invariant violated");
            }
        }
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("state", &self.state)
            .field("moves", &self.history.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}
