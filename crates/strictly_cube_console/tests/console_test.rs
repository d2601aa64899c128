//! Tests for the console driver's public surface.

use std::io::Write;
use strictly_cube::LineCategory;
use strictly_cube_console::{Session, SessionConfig, write_lines, write_replay};

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "log_filter = \"debug\"\nshow_winning_line = false").expect("write config");

    let config = SessionConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.log_filter(), "debug");
    assert!(!config.show_winning_line());
    assert!(!config.auto_restart());
}

#[test]
fn test_config_errors_carry_location() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = SessionConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.file.ends_with("config.rs"));

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "auto_restart = \"sometimes\"").expect("write config");
    let err = SessionConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_lines_listing() {
    let mut out = Vec::new();
    write_lines(None, &mut out).expect("write");
    let text = String::from_utf8(out).expect("utf8");
    assert!(text.ends_with("69 lines\n"));

    let mut out = Vec::new();
    write_lines(Some(LineCategory::Center), &mut out).expect("write");
    let text = String::from_utf8(out).expect("utf8");
    assert!(text.contains("48  center [(0,4) (5,4) (4,4)]"));
    assert!(text.ends_with("4 lines\n"));
}

#[test]
fn test_replay_to_win() {
    let moves: Vec<String> = ["0:0", "1:0", "0:1", "1:1", "0:2"]
        .iter()
        .map(|m| m.to_string())
        .collect();
    let mut out = Vec::new();
    write_replay(&moves, &mut out).expect("valid replay");
    let text = String::from_utf8(out).expect("utf8");
    assert!(text.contains("Phase: Won"));
    assert!(text.contains("Winner: X via in-face [(0,0) (0,1) (0,2)]"));
}

#[test]
fn test_replay_rejects_bad_move() {
    let moves = vec!["0:0".to_string(), "0:0".to_string()];
    let err = write_replay(&moves, &mut Vec::new()).unwrap_err();
    assert_eq!(err.to_string(), "Replay failed at move 1");
    assert_eq!(
        format!("{err:#}"),
        "Replay failed at move 1: Cell (0,0) is already occupied"
    );

    let moves = vec!["zero".to_string()];
    assert!(write_replay(&moves, &mut Vec::new()).is_err());
}

#[test]
fn test_session_transcript() {
    let mut session = Session::new(SessionConfig::default());
    let input = "0 0\n1 0\n0 1\n1 1\n0 2\n3 3\nscores\nreset-scores\nstate\nquit\n";
    let mut out = Vec::new();
    session.run(input.as_bytes(), &mut out).expect("session io");

    let text = String::from_utf8(out).expect("utf8");
    assert!(text.contains("Player X wins!"));
    assert!(text.contains("Game is not active (phase: Won)"));
    assert!(text.contains("X 1 - O 0 (draws: 0)"));
    assert!(text.contains("Player X to move (0 moves played)."));
    assert_eq!(session.scores().x_wins(), 0);
}
