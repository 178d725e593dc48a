//! Play command - a human against the minimax agent on the terminal

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::{
    Error,
    cli::{
        commands::{parse_board_arg, parse_player_token},
        config::OrderArg,
    },
    pipeline::{BoardPrinter, MatchRunner, MinimaxAgent},
    ports::Agent,
    tictactoe::{Action, Board, GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the minimax agent")]
pub struct PlayArgs {
    /// Side the human plays (x or o); X always moves first
    #[arg(long, default_value = "x")]
    pub human: String,

    /// Starting board as nine characters (X, O, '.')
    #[arg(long)]
    pub start: Option<String>,

    /// Action order used by the computer's search
    #[arg(long, value_enum, default_value_t = OrderArg::RowMajor)]
    pub order: OrderArg,

    /// Seed for a shuffled search order
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Agent backed by a line-oriented reader, prompting on a writer
///
/// Accepts `row col` or `row,col`; invalid or illegal input is reported
/// and the prompt repeats.
pub struct HumanAgent<R: BufRead, W: Write> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    fn prompt(&mut self) -> crate::Result<String> {
        write!(self.output, "Your move (row col): ")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(Error::Io {
                operation: "read move".to_string(),
                source: io::Error::from(io::ErrorKind::UnexpectedEof),
            });
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn select_action(&mut self, board: &Board) -> crate::Result<Action> {
        if board.is_terminal() {
            return Err(Error::NoValidMoves);
        }

        loop {
            let line = self.prompt()?;
            let action = match line.trim().parse::<Action>() {
                Ok(action) => action,
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };
            match board.result(action) {
                Ok(_) => return Ok(action),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let human_side = parse_player_token(&args.human, "--human")?;
    let start = parse_board_arg(args.start.as_deref(), "--start")?;

    let stdin = io::stdin();
    let mut human = HumanAgent::new("Human", stdin.lock(), io::stdout());
    let mut computer =
        MinimaxAgent::with_config("Minimax", args.order.search_config(args.seed));

    println!("You are {human_side}. Enter moves as 'row col' with rows and columns 0-2.");

    let mut runner = MatchRunner::new()
        .with_start(start)
        .with_observer(BoardPrinter::new(io::stdout()));
    let game = match human_side {
        Player::X => runner.play_game(0, &mut human, &mut computer)?,
        Player::O => runner.play_game(0, &mut computer, &mut human)?,
    };

    match game.outcome {
        Some(GameOutcome::Win(winner)) if winner == human_side => println!("You win!"),
        Some(GameOutcome::Win(_)) => println!("The computer wins."),
        _ => println!("It's a draw."),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn human(input: &str) -> HumanAgent<Cursor<Vec<u8>>, Vec<u8>> {
        HumanAgent::new("H", Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_human_accepts_valid_move() {
        let mut agent = human("1 1\n");
        let action = agent.select_action(&Board::new()).unwrap();
        assert_eq!(action, Action::new(1, 1));
    }

    #[test]
    fn test_human_reprompts_on_bad_input() {
        let board = Board::from_string("X........").unwrap();
        let mut agent = human("hello\n0 0\n3 3\n2,2\n");
        let action = agent.select_action(&board).unwrap();
        assert_eq!(action, Action::new(2, 2));

        let transcript = String::from_utf8(agent.output).unwrap();
        assert_eq!(transcript.matches("Your move (row col): ").count(), 4);
    }

    #[test]
    fn test_human_eof_is_error() {
        let mut agent = human("");
        let err = agent.select_action(&Board::new()).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_human_on_finished_board() {
        let board = Board::from_string("XXXOO....").unwrap();
        let mut agent = human("2 2\n");
        assert!(matches!(
            agent.select_action(&board),
            Err(Error::NoValidMoves)
        ));
    }
}
