//! Interactive session: reads commands, drives a game, reports outcomes.

use crate::config::SessionConfig;
use crate::scoreboard::Scoreboard;
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use strictly_cube::{Coordinate, GameController, MoveOutcome, Phase};
use tracing::{debug, instrument};

/// A move that could not be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot parse move '{input}': expected 'face index' (e.g. '0 4' or '0:4')")]
pub struct ParseMoveError {
    /// The rejected input.
    pub input: String,
}

/// Parses `face index`, `face:index` or `face,index`.
pub fn parse_coordinate(input: &str) -> Result<Coordinate, ParseMoveError> {
    let error = || ParseMoveError {
        input: input.to_string(),
    };
    let mut parts = input
        .split(|c: char| c.is_whitespace() || c == ':' || c == ',')
        .filter(|part| !part.is_empty());

    let face = parts.next().and_then(|p| p.parse().ok()).ok_or_else(error)?;
    let index = parts.next().and_then(|p| p.parse().ok()).ok_or_else(error)?;
    if parts.next().is_some() {
        return Err(error());
    }
    Ok(Coordinate::new(face, index))
}

/// One line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Mark a cell.
    Play(Coordinate),
    /// Start a new game, keeping scores.
    Reset,
    /// Clear scores and start a new game.
    ResetScores,
    /// Show the scoreboard.
    Scores,
    /// Show turn and phase.
    State,
    /// List available commands.
    Help,
    /// End the session.
    Quit,
}

impl std::str::FromStr for Command {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reset" | "new" => Ok(Command::Reset),
            "reset-scores" => Ok(Command::ResetScores),
            "scores" => Ok(Command::Scores),
            "state" => Ok(Command::State),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => parse_coordinate(other).map(Command::Play),
        }
    }
}

const HELP: &str = "Commands: <face> <index> | reset | reset-scores | scores | state | help | quit";

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Stop.
    Quit,
}

/// A game plus the caller-side concerns around it.
#[derive(Debug)]
pub struct Session {
    game: GameController,
    scores: Scoreboard,
    config: SessionConfig,
}

impl Session {
    /// Creates a session with a fresh game and empty scores.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            game: GameController::new(),
            scores: Scoreboard::default(),
            config,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Scores so far.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Handles one input line, writing any messages to `out`.
    #[instrument(skip(self, out))]
    pub fn handle(&mut self, input: &str, out: &mut impl Write) -> std::io::Result<Flow> {
        if input.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        let command = match input.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{e}")?;
                return Ok(Flow::Continue);
            }
        };
        debug!(?command, "Handling command");

        match command {
            Command::Play(coord) => self.play(coord, out)?,
            Command::Reset => {
                self.game.reset();
                writeln!(out, "New game. Player X to move.")?;
            }
            Command::ResetScores => {
                self.scores.clear();
                self.game.reset();
                writeln!(out, "Scores cleared. New game. Player X to move.")?;
            }
            Command::Scores => writeln!(out, "{}", self.scores)?,
            Command::State => self.write_state(out)?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn play(&mut self, coord: Coordinate, out: &mut impl Write) -> std::io::Result<()> {
        let outcome = match self.game.apply_move(coord) {
            Ok(outcome) => outcome,
            Err(e) => {
                writeln!(out, "{e}")?;
                if !self.game.current_state().is_active() {
                    writeln!(out, "Game over. Type 'reset' for a new game.")?;
                }
                return Ok(());
            }
        };

        self.scores.record(&outcome);
        match &outcome {
            MoveOutcome::TurnChanged { next_player } => {
                writeln!(out, "Player {next_player} to move.")?;
            }
            MoveOutcome::Won { player, line } => {
                writeln!(out, "Player {player} wins!")?;
                if self.config.show_winning_line() {
                    writeln!(out, "Winning line: {line}")?;
                }
                writeln!(out, "Score: {}", self.scores)?;
            }
            MoveOutcome::Draw => {
                writeln!(out, "Draw!")?;
                writeln!(out, "Score: {}", self.scores)?;
            }
        }

        if outcome.is_terminal() && self.config.auto_restart() {
            self.game.reset();
            writeln!(out, "New game. Player X to move.")?;
        }
        Ok(())
    }

    fn write_state(&self, out: &mut impl Write) -> std::io::Result<()> {
        let state = self.game.current_state();
        match state.phase() {
            Phase::InProgress => writeln!(
                out,
                "Player {} to move ({} moves played).",
                state.current_player(),
                self.game.history().len()
            ),
            Phase::Won => match state.winner() {
                Some(winner) => writeln!(out, "Player {winner} has won."),
                None => writeln!(out, "Game won."),
            },
            Phase::Draw => writeln!(out, "Game drawn."),
        }
    }

    /// Reads commands until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> std::io::Result<()> {
        writeln!(out, "{HELP}")?;
        writeln!(out, "Player X to move.")?;
        for line in input.lines() {
            if self.handle(&line?, &mut out)? == Flow::Quit {
                break;
            }
        }
        out.flush()
    }
}
