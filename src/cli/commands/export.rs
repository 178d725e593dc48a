//! Export command - minimax values for every reachable board as CSV or JSON

use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::{
    analysis::{StateSummary, enumerate_reachable, summarize},
    cli::{
        commands::parse_board_arg,
        output::{create_state_progress, format_number},
    },
    export::{export_csv, export_json},
    search::Minimax,
};

#[derive(Parser, Debug)]
#[command(about = "Export minimax values for every reachable board")]
pub struct ExportArgs {
    /// Output file path
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Export format
    #[arg(long, short = 'f', value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Root board as nine characters (X, O, '.'); empty board if omitted
    #[arg(long)]
    pub state: Option<String>,

    /// Suppress the progress bar
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format, one row per board
    Csv,
    /// JSON document with metadata
    Json,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let root = parse_board_arg(args.state.as_deref(), "--state")?;
    let boards = enumerate_reachable(root);

    let progress = if args.quiet {
        None
    } else {
        Some(create_state_progress(boards.len() as u64)?)
    };
    let mut search = Minimax::default();
    let mut rows: Vec<StateSummary> = Vec::with_capacity(boards.len());
    for board in &boards {
        rows.push(summarize(board, &mut search));
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }
    if let Some(pb) = &progress {
        pb.finish_with_message("done");
    }

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    let writer = BufWriter::new(file);
    match args.format {
        ExportFormat::Csv => export_csv(&rows, writer)?,
        ExportFormat::Json => export_json(&rows, &root.encode(), writer)?,
    }

    println!(
        "Exported {} boards to {}",
        format_number(rows.len()),
        args.output.display()
    );
    Ok(())
}
