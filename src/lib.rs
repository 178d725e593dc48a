//! Tic-Tac-Toe with an exhaustive minimax agent
//!
//! This crate provides:
//! - An immutable 3x3 board with legal-move generation and outcome checks
//! - Plain (unpruned) minimax search over the full game tree
//! - Agents, a match runner and observers for playing series of games
//! - Reachable-state analysis with CSV and JSON export
//! - The `ttt` command-line driver

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{Minimax, minimax};
pub use tictactoe::{Action, Board, Cell, Game, GameOutcome, Player};
