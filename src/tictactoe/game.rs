//! High-level game management

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::{Action, Board, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal board, `None` while play continues
    pub fn of(board: &Board) -> Option<Self> {
        if !board.is_terminal() {
            return None;
        }
        Some(match board.winner() {
            Some(winner) => GameOutcome::Win(winner),
            None => GameOutcome::Draw,
        })
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win(player) => write!(f, "Game over: {player} wins."),
            GameOutcome::Draw => write!(f, "Game over: Tie."),
        }
    }
}

/// A complete game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Create a game continuing from an arbitrary position
    pub fn from_board(initial: Board) -> Self {
        Game {
            initial,
            moves: Vec::new(),
            outcome: GameOutcome::of(&initial),
        }
    }

    /// Play an action for whoever is to move and return the new board
    pub fn play(&mut self, action: Action) -> Result<Board, crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let current = self.current_state()?;
        let next = current.result(action)?;

        self.moves.push(Move {
            action,
            player: current.player(),
        });
        self.outcome = GameOutcome::of(&next);

        Ok(next)
    }

    /// Get current board state
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid, which only
    /// happens for a hand-edited or corrupted transcript.
    pub fn current_state(&self) -> Result<Board, crate::Error> {
        self.moves
            .iter()
            .try_fold(self.initial, |board, m| board.result(m.action))
    }

    /// Get the sequence of board states, starting with the initial board
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut board = self.initial;
        states.push(board);
        for m in &self.moves {
            board = board.result(m.action)?;
            states.push(board);
        }
        Ok(states)
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
