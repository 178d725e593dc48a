//! Observer implementations for the match runner

use std::io::Write;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result,
    ports::Observer,
    tictactoe::{Action, Board, Game, GameOutcome, Player},
};

/// Prints the board after every move and the result at the end.
///
/// This is the textual driving loop: board, move, board, ..., winner or tie.
pub struct BoardPrinter<W: Write> {
    out: W,
}

impl<W: Write> BoardPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Observer for BoardPrinter<W> {
    fn on_game_start(&mut self, game_num: usize, board: &Board) -> Result<()> {
        writeln!(self.out, "Game {}", game_num + 1)?;
        writeln!(self.out, "{board}")?;
        Ok(())
    }

    fn on_move(
        &mut self,
        _game_num: usize,
        player: Player,
        action: Action,
        board: &Board,
    ) -> Result<()> {
        writeln!(self.out, "{player} plays {action}")?;
        writeln!(self.out, "{board}")?;
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, game: &Game) -> Result<()> {
        if let Some(outcome) = game.outcome {
            writeln!(self.out, "{outcome}")?;
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Progress bar observer - shows series progress with running tallies
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            x_wins: 0,
            o_wins: 0,
            draws: 0,
        }
    }

    fn tally(&self) -> String {
        format!("X:{} O:{} D:{}", self.x_wins, self.o_wins, self.draws)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_series_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, game: &Game) -> Result<()> {
        match game.outcome {
            Some(GameOutcome::Win(Player::X)) => self.x_wins += 1,
            Some(GameOutcome::Win(Player::O)) => self.o_wins += 1,
            Some(GameOutcome::Draw) | None => self.draws += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.tally());
        }
        Ok(())
    }

    fn on_series_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.tally());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{MatchRunner, MinimaxAgent};

    #[test]
    fn test_board_printer_transcript() {
        let start = Board::from_string("XX.OO....").unwrap();
        let mut out = Vec::new();
        let mut x = MinimaxAgent::new("X");
        let mut o = MinimaxAgent::new("O");

        MatchRunner::new()
            .with_start(start)
            .with_observer(BoardPrinter::new(&mut out))
            .play_game(0, &mut x, &mut o)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Game 1\n"));
        assert!(text.contains("X plays (0, 2)"));
        assert!(text.contains(" X | X | X"));
        assert!(text.contains("Game over: X wins."));
    }

    #[test]
    fn test_board_printer_reports_tie() {
        let mut game = Game::from_board(Board::from_string("XOXXOOOX.").unwrap());
        game.play(Action::new(2, 2)).unwrap();

        let mut printer = BoardPrinter::new(Vec::new());
        printer.on_game_end(0, &game).unwrap();
        let text = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(text, "Game over: Tie.\n\n");
    }

    #[test]
    fn test_progress_observer_tallies() {
        let mut observer = ProgressObserver::new();
        observer.on_series_start(2).unwrap();

        let mut won = Game::from_board(Board::from_string("XX.OO....").unwrap());
        won.play(Action::new(0, 2)).unwrap();
        observer.on_game_end(0, &won).unwrap();

        let drawn = Game::from_board(Board::from_string("XOXXOOOXX").unwrap());
        observer.on_game_end(1, &drawn).unwrap();
        observer.on_series_end().unwrap();

        assert_eq!(observer.tally(), "X:1 O:0 D:1");
    }
}
