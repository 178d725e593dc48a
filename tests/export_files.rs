//! Export of reachable-board summaries to files on disk

use std::fs::{self, File};

use tempfile::tempdir;
use ttt_minimax::{
    analysis::{StateSummary, TreeStats, enumerate_reachable, summarize},
    export::{export_csv, export_json},
    search::Minimax,
    tictactoe::Board,
};

fn summaries(root: &Board) -> Vec<StateSummary> {
    let mut search = Minimax::default();
    enumerate_reachable(*root)
        .iter()
        .map(|board| summarize(board, &mut search))
        .collect()
}

#[test]
fn test_csv_file_has_one_row_per_board() {
    let root = Board::from_string("XO..X...O").unwrap();
    let rows = summaries(&root);
    let stats = TreeStats::from_boards(&enumerate_reachable(root));

    let dir = tempdir().unwrap();
    let path = dir.path().join("policy.csv");
    export_csv(&rows, File::create(&path).unwrap()).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), stats.total);

    let first = &records[0];
    assert_eq!(&first[0], "XO..X...O");
    assert_eq!(&first[2], "X");
    assert_eq!(&first[5], "1");

    let terminal = records.iter().filter(|r| &r[3] == "true").count();
    assert_eq!(terminal, stats.terminal);
}

#[test]
fn test_json_file_roundtrips_summaries() {
    let root = Board::from_string("XOXXOO.X.").unwrap();
    let rows = summaries(&root);

    let dir = tempdir().unwrap();
    let path = dir.path().join("policy.json");
    export_json(&rows, &root.encode(), File::create(&path).unwrap()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let states: Vec<StateSummary> = serde_json::from_value(value["states"].clone()).unwrap();
    assert_eq!(states, rows);
    assert_eq!(value["total_states"], rows.len());
}
