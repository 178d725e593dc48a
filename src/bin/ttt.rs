//! ttt - play and analyze Tic-Tac-Toe with an exhaustive minimax agent
//!
//! This CLI provides a unified interface for:
//! - Playing against the minimax agent on the terminal
//! - Running minimax against itself or a random agent
//! - Analyzing the value of every move on a board
//! - Exporting values and optimal moves for every reachable board

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use ttt_minimax::cli::{commands, output::init_logging};

#[derive(Parser)]
#[command(name = "ttt")]
#[command(version, about = "Tic-Tac-Toe with an exhaustive minimax agent", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the minimax agent
    Play(commands::play::PlayArgs),

    /// Run minimax against another agent over a series of games
    Selfplay(commands::selfplay::SelfPlayArgs),

    /// Analyze a board
    Analyze(commands::analyze::AnalyzeArgs),

    /// Export values for every reachable board
    Export(commands::export::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Play(args) => commands::play::execute(args),
        Commands::Selfplay(args) => commands::selfplay::execute(args),
        Commands::Analyze(args) => commands::analyze::execute(args),
        Commands::Export(args) => commands::export::execute(args),
    }
}
