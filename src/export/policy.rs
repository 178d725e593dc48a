//! CSV and JSON export of minimax summaries

use std::io::Write;

use serde::Serialize;

use crate::{Result, analysis::StateSummary, tictactoe::Action};

/// A single row of the CSV export
///
/// CSV cannot hold nested lists, so action lists are flattened to
/// `row,col` pairs joined by `;`.
#[derive(Debug, Clone, Serialize)]
struct PolicyRecord<'a> {
    board: &'a str,
    depth: usize,
    to_move: char,
    terminal: bool,
    winner: Option<char>,
    value: i32,
    best_actions: String,
    immediate_wins: String,
}

fn join_actions(actions: &[Action]) -> String {
    actions
        .iter()
        .map(|a| format!("{},{}", a.row, a.col))
        .collect::<Vec<_>>()
        .join(";")
}

impl<'a> From<&'a StateSummary> for PolicyRecord<'a> {
    fn from(summary: &'a StateSummary) -> Self {
        PolicyRecord {
            board: &summary.board,
            depth: summary.depth,
            to_move: summary.to_move.to_cell().to_char(),
            terminal: summary.terminal,
            winner: summary.winner.map(|p| p.to_cell().to_char()),
            value: summary.value,
            best_actions: join_actions(&summary.best_actions),
            immediate_wins: join_actions(&summary.immediate_wins),
        }
    }
}

/// Write summaries as CSV with a header row.
pub fn export_csv<W: Write>(rows: &[StateSummary], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(PolicyRecord::from(row))?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct PolicyExport<'a> {
    description: &'static str,
    root: &'a str,
    total_states: usize,
    states: &'a [StateSummary],
}

/// Write summaries as a pretty-printed JSON document.
pub fn export_json<W: Write>(rows: &[StateSummary], root: &str, writer: W) -> Result<()> {
    let export = PolicyExport {
        description: "Minimax values and optimal actions for Tic-Tac-Toe",
        root,
        total_states: rows.len(),
        states: rows,
    };
    serde_json::to_writer_pretty(writer, &export)?;
    Ok(())
}
