//! Command-line interface for the cube console.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_cube::LineCategory;

/// Strictly Cube - tic-tac-toe on the faces of a cube
#[derive(Parser, Debug)]
#[command(name = "strictly_cube")]
#[command(about = "Two-player tic-tac-toe across the six faces of a cube", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML session config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Tracing filter, overriding the config file (RUST_LOG still wins)
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play,

    /// List the winning lines
    Lines {
        /// Only lines of this category (in-face, center, corner-diagonal, ring)
        #[arg(long)]
        category: Option<LineCategory>,
    },

    /// Apply a sequence of moves and print the result
    Replay {
        /// Moves as face:index, X first
        #[arg(required = true)]
        moves: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["strictly_cube"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_lines_category() {
        let cli = Cli::try_parse_from(["strictly_cube", "lines", "--category", "ring"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Lines {
                category: Some(LineCategory::Ring)
            })
        );
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["strictly_cube", "replay"]).is_err());
        let cli = Cli::try_parse_from(["strictly_cube", "replay", "0:0", "1:0"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec!["0:0".to_string(), "1:0".to_string()]
            })
        );
    }
}
