//! Subcommands of the `ttt` binary

pub mod analyze;
pub mod export;
pub mod play;
pub mod selfplay;

use anyhow::{Context, Result, anyhow};

use crate::tictactoe::{Board, Player};

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "player1" | "p1" => Ok(Player::X),
        "o" | "second" | "player2" | "p2" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

/// Parse an optional `--state`/`--start` board, defaulting to the empty board.
pub(crate) fn parse_board_arg(value: Option<&str>, flag: &str) -> Result<Board> {
    match value {
        Some(raw) => Board::from_string(raw).with_context(|| format!("Invalid board for {flag}")),
        None => Ok(Board::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_player_token() {
        assert_eq!(parse_player_token("X", "--human").unwrap(), Player::X);
        assert_eq!(parse_player_token(" second ", "--human").unwrap(), Player::O);
        let err = parse_player_token("z", "--human").unwrap_err();
        assert!(err.to_string().contains("--human"));
    }

    #[test]
    fn test_parse_board_arg() {
        assert_eq!(parse_board_arg(None, "--state").unwrap(), Board::new());
        let board = parse_board_arg(Some("X...O...."), "--state").unwrap();
        assert_eq!(board.player(), Player::X);
        assert!(parse_board_arg(Some("XX"), "--state").is_err());
    }
}
