//! Match runner: plays agents against each other and reports to observers

use serde::{Deserialize, Serialize};
use tracing::{info, trace};

use crate::{
    Error, Result,
    ports::{Agent, Observer},
    tictactoe::{Board, Game, GameOutcome, Player},
};

/// Aggregate result of a series of games
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeriesResult {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    /// Full transcripts, in play order
    pub games: Vec<Game>,
}

impl SeriesResult {
    pub fn total_games(&self) -> usize {
        self.games.len()
    }

    fn record(&mut self, game: Game) {
        match game.outcome {
            Some(GameOutcome::Win(Player::X)) => self.x_wins += 1,
            Some(GameOutcome::Win(Player::O)) => self.o_wins += 1,
            Some(GameOutcome::Draw) | None => self.draws += 1,
        }
        self.games.push(game);
    }
}

/// Plays games between an X agent and an O agent
///
/// # Examples
///
/// ```
/// use ttt_minimax::pipeline::{MatchRunner, MinimaxAgent};
/// use ttt_minimax::tictactoe::GameOutcome;
///
/// let mut x = MinimaxAgent::new("X");
/// let mut o = MinimaxAgent::new("O");
/// let game = MatchRunner::new().play_game(0, &mut x, &mut o)?;
/// assert_eq!(game.outcome, Some(GameOutcome::Draw));
/// # Ok::<(), ttt_minimax::Error>(())
/// ```
pub struct MatchRunner<'a> {
    start: Board,
    observers: Vec<Box<dyn Observer + 'a>>,
}

impl<'a> MatchRunner<'a> {
    /// Runner starting every game from the empty board
    pub fn new() -> Self {
        Self {
            start: Board::new(),
            observers: Vec::new(),
        }
    }

    /// Start every game from `start` instead of the empty board
    pub fn with_start(mut self, start: Board) -> Self {
        self.start = start;
        self
    }

    /// Add an observer
    pub fn with_observer(mut self, observer: impl Observer + 'a) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Play one game to completion.
    ///
    /// # Errors
    ///
    /// Propagates agent errors and [`InvalidAction`](crate::Error::InvalidAction)
    /// when an agent returns an illegal action.
    pub fn play_game(
        &mut self,
        game_num: usize,
        x_agent: &mut dyn Agent,
        o_agent: &mut dyn Agent,
    ) -> Result<Game> {
        let mut game = Game::from_board(self.start);
        let mut board = self.start;

        for observer in &mut self.observers {
            observer.on_game_start(game_num, &board)?;
        }

        while !board.is_terminal() {
            let player = board.player();
            let agent: &mut dyn Agent = match player {
                Player::X => &mut *x_agent,
                Player::O => &mut *o_agent,
            };
            let action = agent.select_action(&board)?;
            trace!(game_num, %player, agent = agent.name(), %action, "move selected");

            board = game.play(action)?;
            for observer in &mut self.observers {
                observer.on_move(game_num, player, action, &board)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_game_end(game_num, &game)?;
        }
        Ok(game)
    }

    /// Play `games` games with the same agents.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfiguration`](crate::Error::InvalidConfiguration)
    /// for an empty series, otherwise the first error of any game.
    pub fn run(
        &mut self,
        games: usize,
        x_agent: &mut dyn Agent,
        o_agent: &mut dyn Agent,
    ) -> Result<SeriesResult> {
        if games == 0 {
            return Err(Error::InvalidConfiguration {
                message: "a series needs at least one game".to_string(),
            });
        }

        for observer in &mut self.observers {
            observer.on_series_start(games)?;
        }

        let mut result = SeriesResult::default();
        for game_num in 0..games {
            let game = self.play_game(game_num, x_agent, o_agent)?;
            result.record(game);
        }

        for observer in &mut self.observers {
            observer.on_series_end()?;
        }

        info!(
            x = x_agent.name(),
            o = o_agent.name(),
            games,
            x_wins = result.x_wins,
            o_wins = result.o_wins,
            draws = result.draws,
            "series finished"
        );
        Ok(result)
    }
}

impl Default for MatchRunner<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Play a single game from `start` without observers.
pub fn play_match(
    x_agent: &mut dyn Agent,
    o_agent: &mut dyn Agent,
    start: Board,
) -> Result<Game> {
    MatchRunner::new()
        .with_start(start)
        .play_game(0, x_agent, o_agent)
}
