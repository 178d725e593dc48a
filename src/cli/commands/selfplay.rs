//! Self-play command - minimax against another agent over a series of games

use std::{fs::File, io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        commands::parse_player_token,
        config::{AgentKind, CommonConfig, OrderArg},
        output::{format_number, print_kv, print_section},
    },
    config::SearchConfig,
    pipeline::{BoardPrinter, MatchRunner, MinimaxAgent, ProgressObserver, SeriesResult},
    tictactoe::{Game, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play minimax against an opponent agent")]
pub struct SelfPlayArgs {
    /// Opponent agent
    #[arg(long, value_enum, default_value_t = AgentKind::Minimax)]
    pub opponent: AgentKind,

    /// Side played by the minimax agent (x or o)
    #[arg(long, default_value = "x")]
    pub minimax_side: String,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 1)]
    pub games: usize,

    /// Random seed for the opponent and shuffled orders
    #[arg(long)]
    pub seed: Option<u64>,

    /// Action order used by the minimax search
    #[arg(long, value_enum, default_value_t = OrderArg::RowMajor)]
    pub order: OrderArg,

    /// Write game transcripts as JSON to this file
    #[arg(long)]
    pub record: Option<PathBuf>,

    /// Suppress the progress bar
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Print every board as the games are played
    #[arg(long)]
    pub show: bool,
}

#[derive(Debug, Serialize)]
struct SeriesRecord<'a> {
    minimax_side: Player,
    opponent: AgentKind,
    search: &'a SearchConfig,
    common: &'a CommonConfig,
    x_wins: usize,
    o_wins: usize,
    draws: usize,
    games: &'a [Game],
}

pub fn execute(args: SelfPlayArgs) -> Result<()> {
    let minimax_side = parse_player_token(&args.minimax_side, "--minimax-side")?;
    let common = CommonConfig {
        seed: args.seed,
        progress: !args.quiet && !args.show,
    };
    let search = args.order.search_config(common.seed);

    let mut minimax = MinimaxAgent::with_config("Minimax", search);
    let mut opponent = args.opponent.build("Opponent", search, common.seed);

    let mut runner = MatchRunner::new();
    if common.progress {
        runner = runner.with_observer(ProgressObserver::new());
    }
    if args.show {
        runner = runner.with_observer(BoardPrinter::new(io::stdout()));
    }

    let result = match minimax_side {
        Player::X => runner.run(args.games, &mut minimax, &mut opponent)?,
        Player::O => runner.run(args.games, &mut opponent, &mut minimax)?,
    };

    print_summary(&result, minimax_side, args.opponent);

    if let Some(path) = &args.record {
        let record = SeriesRecord {
            minimax_side,
            opponent: args.opponent,
            search: &search,
            common: &common,
            x_wins: result.x_wins,
            o_wins: result.o_wins,
            draws: result.draws,
            games: &result.games,
        };
        let file = File::create(path)
            .with_context(|| format!("Failed to create record file {}", path.display()))?;
        serde_json::to_writer_pretty(file, &record)?;
        println!("\nGame transcripts written to {}", path.display());
    }

    Ok(())
}

fn print_summary(result: &SeriesResult, minimax_side: Player, opponent: AgentKind) {
    print_section("Self-play Summary");
    print_kv("Minimax plays", &minimax_side.to_string());
    print_kv("Opponent", &format!("{opponent:?}"));
    print_kv("Games", &format_number(result.total_games()));
    print_kv("X wins", &format_number(result.x_wins));
    print_kv("O wins", &format_number(result.o_wins));
    print_kv("Draws", &format_number(result.draws));
}
