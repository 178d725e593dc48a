//! Analyze command - minimax values for a board and reachable-tree statistics

use anyhow::Result;
use clap::Parser;

use crate::{
    analysis::{StateSummary, TreeStats, enumerate_reachable, summarize},
    cli::{
        commands::parse_board_arg,
        output::{
            create_spinner, describe_value, format_number, print_kv, print_section,
            print_subsection,
        },
    },
    search::Minimax,
    tictactoe::{Action, Board},
};

#[derive(Parser, Debug)]
#[command(about = "Analyze a board with exhaustive minimax")]
pub struct AnalyzeArgs {
    /// Board to analyze as nine characters (X, O, '.'); empty board if omitted
    #[arg(long)]
    pub state: Option<String>,

    /// Also enumerate every board reachable from the state
    #[arg(long)]
    pub all: bool,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = parse_board_arg(args.state.as_deref(), "--state")?;

    print_section("Board Analysis");
    println!("{board}");
    analyze_board(&board);

    if args.all {
        analyze_tree(board)?;
    }
    Ok(())
}

fn format_actions(actions: &[Action]) -> String {
    if actions.is_empty() {
        return "none".to_string();
    }
    actions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn analyze_board(board: &Board) -> StateSummary {
    let mut search = Minimax::default();
    let summary = summarize(board, &mut search);

    print_kv("Encoding", &summary.board);
    print_kv("Player to move", &summary.to_move.to_string());
    print_kv("Terminal", &summary.terminal.to_string());
    if summary.terminal {
        let winner = summary
            .winner
            .map_or_else(|| "none (tie)".to_string(), |p| p.to_string());
        print_kv("Winner", &winner);
        print_kv("Utility", &summary.value.to_string());
        return summary;
    }

    print_kv(
        "Value",
        &format!("{} ({})", summary.value, describe_value(summary.value)),
    );
    print_kv("Legal actions", &format_actions(&board.actions()));

    print_subsection("Action values");
    for (action, value) in search.evaluate_actions(board) {
        let marker = if summary.best_actions.contains(&action) {
            "*"
        } else {
            " "
        };
        println!("  {marker} {action}  {value:>2}  {}", describe_value(value));
    }

    print_subsection("Recommendation");
    print_kv("Optimal actions", &format_actions(&summary.best_actions));
    print_kv("Immediate wins", &format_actions(&summary.immediate_wins));
    if let Some(action) = search.choose(board) {
        print_kv("Minimax plays", &action.to_string());
    }
    print_kv("Nodes searched", &format_number(search.stats().nodes));
    summary
}

fn analyze_tree(root: Board) -> Result<TreeStats> {
    let spinner = create_spinner("Enumerating reachable boards...")?;
    let boards = enumerate_reachable(root);
    let stats = TreeStats::from_boards(&boards);
    spinner.finish_and_clear();

    print_section("Reachable Boards");
    print_kv("Total", &format_number(stats.total));
    print_kv("Terminal", &format_number(stats.terminal));
    print_kv("X wins", &format_number(stats.x_wins));
    print_kv("O wins", &format_number(stats.o_wins));
    print_kv("Draws", &format_number(stats.draws));

    print_subsection("Boards by marks placed");
    for (depth, count) in &stats.by_depth {
        println!("  {depth}: {}", format_number(*count));
    }
    Ok(stats)
}
