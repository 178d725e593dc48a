//! Per-board minimax summaries

use serde::{Deserialize, Serialize};

use crate::{
    search::Minimax,
    tictactoe::{Action, Board, LineAnalyzer, Player},
};

/// Minimax facts about a single board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSummary {
    /// Nine-character encoding
    pub board: String,
    /// Marks already placed
    pub depth: usize,
    pub to_move: Player,
    pub terminal: bool,
    pub winner: Option<Player>,
    /// Value under optimal play, from X's perspective
    pub value: i32,
    /// Every action achieving `value`, row-major; empty when terminal
    pub best_actions: Vec<Action>,
    /// Actions completing a line for the player to move
    pub immediate_wins: Vec<Action>,
}

/// Summarize a board with a full minimax search below it.
pub fn summarize(board: &Board, search: &mut Minimax) -> StateSummary {
    let to_move = board.player();
    let terminal = board.is_terminal();

    let (value, best_actions) = search.optimal(board);

    let immediate_wins = if terminal {
        Vec::new()
    } else {
        LineAnalyzer::winning_actions(board.cells(), to_move)
    };

    StateSummary {
        board: board.encode(),
        depth: board.occupied_count(),
        to_move,
        terminal,
        winner: board.winner(),
        value,
        best_actions,
        immediate_wins,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_decision_board() {
        let board = Board::from_string("XOXXOO.X.").unwrap();
        let summary = summarize(&board, &mut Minimax::default());

        assert_eq!(summary.board, "XOXXOO.X.");
        assert_eq!(summary.depth, 7);
        assert_eq!(summary.to_move, Player::O);
        assert!(!summary.terminal);
        assert_eq!(summary.value, 0);
        assert_eq!(summary.best_actions, vec![Action::new(2, 0)]);
        assert!(summary.immediate_wins.is_empty());
    }

    #[test]
    fn test_summary_lists_all_optimal_actions() {
        let board = Board::from_string("XOX.O.OX.").unwrap();
        let summary = summarize(&board, &mut Minimax::default());
        assert_eq!(summary.value, 0);
        assert_eq!(
            summary.best_actions,
            vec![Action::new(1, 0), Action::new(1, 2), Action::new(2, 2)]
        );
    }

    #[test]
    fn test_summary_of_terminal_board() {
        let board = Board::from_string("XOXOOXOXX").unwrap();
        let summary = summarize(&board, &mut Minimax::default());
        assert!(summary.terminal);
        assert_eq!(summary.winner, Some(Player::X));
        assert_eq!(summary.value, 1);
        assert!(summary.best_actions.is_empty());
    }

    #[test]
    fn test_summary_reports_immediate_wins() {
        let board = Board::from_string("XX.OO....").unwrap();
        let summary = summarize(&board, &mut Minimax::default());
        assert_eq!(summary.value, 1);
        assert_eq!(summary.immediate_wins, vec![Action::new(0, 2)]);
        assert_eq!(summary.best_actions, vec![Action::new(0, 2)]);
    }
}
