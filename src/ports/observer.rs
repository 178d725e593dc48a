//! Observer port - hooks for watching matches as they are played
//!
//! Observers keep presentation and bookkeeping out of the match loop: the
//! textual board printer, the progress bar and the win/draw tallies are all
//! observers.

use crate::{
    Result,
    tictactoe::{Action, Board, Game, Player},
};

/// Observer trait for monitoring a series of games
///
/// # Event Sequence
///
/// 1. `on_series_start(total_games)` - Once at the beginning
/// 2. For each game:
///    - `on_game_start(game_num, board)`
///    - `on_move(...)` - After each applied move
///    - `on_game_end(game_num, game)`
/// 3. `on_series_end()` - Once at the end
///
/// Every method defaults to a no-op.
///
/// # Examples
///
/// ```
/// use ttt_minimax::{ports::Observer, tictactoe::Game};
///
/// struct GameCounter {
///     finished: usize,
/// }
///
/// impl Observer for GameCounter {
///     fn on_game_end(&mut self, _game_num: usize, _game: &Game) -> ttt_minimax::Result<()> {
///         self.finished += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer {
    /// Called before the first game of a series.
    fn on_series_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called when a game starts, with its initial board.
    fn on_game_start(&mut self, _game_num: usize, _board: &Board) -> Result<()> {
        Ok(())
    }

    /// Called after a move has been applied.
    ///
    /// # Parameters
    ///
    /// * `game_num` - Index of the current game
    /// * `player` - Player who moved
    /// * `action` - Cell that was played
    /// * `board` - Board after the move
    fn on_move(
        &mut self,
        _game_num: usize,
        _player: Player,
        _action: Action,
        _board: &Board,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when a game reaches a terminal board.
    fn on_game_end(&mut self, _game_num: usize, _game: &Game) -> Result<()> {
        Ok(())
    }

    /// Called after the last game of a series.
    fn on_series_end(&mut self) -> Result<()> {
        Ok(())
    }
}
