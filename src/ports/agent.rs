//! Agent port - abstraction for anything that picks moves
//!
//! Implemented by the minimax searcher, a random baseline, and the
//! interactive human player of the command-line driver.

use crate::{
    Result,
    tictactoe::{Action, Board},
};

/// Agent trait - Unified interface for move selection
///
/// # Examples
///
/// ```
/// use ttt_minimax::{
///     pipeline::MinimaxAgent,
///     ports::Agent,
///     tictactoe::Board,
/// };
///
/// let mut agent = MinimaxAgent::new("Minimax");
/// let action = agent.select_action(&Board::new())?;
/// assert!(Board::new().actions().contains(&action));
/// # Ok::<(), ttt_minimax::Error>(())
/// ```
pub trait Agent {
    /// Select an action for the player to move on `board`.
    ///
    /// # Errors
    ///
    /// Returns an error if no valid moves are available (terminal state).
    fn select_action(&mut self, board: &Board) -> Result<Action>;

    /// Get the agent's name.
    ///
    /// Used for identification in match summaries and logging.
    fn name(&self) -> &str;

    /// Seed the agent's internal random number generator.
    ///
    /// Deterministic agents ignore it.
    fn set_rng_seed(&mut self, _seed: u64) {}
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn select_action(&mut self, board: &Board) -> Result<Action> {
        (**self).select_action(board)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn set_rng_seed(&mut self, seed: u64) {
        (**self).set_rng_seed(seed)
    }
}
