//! Enumeration of the boards reachable by legal play

use std::collections::{BTreeMap, HashSet, VecDeque};

use crate::tictactoe::{Board, Player};

/// Every distinct board reachable from `root` by legal play, root included.
///
/// Boards are returned in breadth-first order, so depth never decreases.
/// Terminal boards are included but not expanded.
pub fn enumerate_reachable(root: Board) -> Vec<Board> {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    let mut boards = Vec::new();

    visited.insert(root);
    queue.push_back(root);

    while let Some(board) = queue.pop_front() {
        boards.push(board);
        if board.is_terminal() {
            continue;
        }

        for (_, next) in board.successors() {
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    boards
}

/// Summary counts over a set of boards
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub total: usize,
    pub terminal: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    /// Number of boards per count of placed marks
    pub by_depth: BTreeMap<usize, usize>,
}

impl TreeStats {
    pub fn from_boards(boards: &[Board]) -> Self {
        let mut stats = TreeStats {
            total: boards.len(),
            ..TreeStats::default()
        };

        for board in boards {
            *stats.by_depth.entry(board.occupied_count()).or_insert(0) += 1;
            if !board.is_terminal() {
                continue;
            }
            stats.terminal += 1;
            match board.winner() {
                Some(Player::X) => stats.x_wins += 1,
                Some(Player::O) => stats.o_wins += 1,
                None => stats.draws += 1,
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_tree_counts() {
        let boards = enumerate_reachable(Board::new());
        let stats = TreeStats::from_boards(&boards);

        assert_eq!(stats.total, 5478);
        assert_eq!(stats.terminal, 958);
        assert_eq!(stats.x_wins, 626);
        assert_eq!(stats.o_wins, 316);
        assert_eq!(stats.draws, 16);

        let depths: Vec<usize> = stats.by_depth.values().copied().collect();
        assert_eq!(
            depths,
            vec![1, 9, 72, 252, 756, 1260, 1520, 1140, 390, 78]
        );
    }

    #[test]
    fn test_breadth_first_order() {
        let boards = enumerate_reachable(Board::new());
        assert_eq!(boards[0], Board::new());
        assert!(
            boards
                .windows(2)
                .all(|w| w[0].occupied_count() <= w[1].occupied_count())
        );
    }

    #[test]
    fn test_terminal_root() {
        let root = Board::from_string("XXXOO....").unwrap();
        assert_eq!(enumerate_reachable(root), vec![root]);
    }

    #[test]
    fn test_small_subtree() {
        let root = Board::from_string("XOXXOO.X.").unwrap();
        let boards = enumerate_reachable(root);
        let stats = TreeStats::from_boards(&boards);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.terminal, 2);
        assert_eq!(stats.x_wins, 1);
        assert_eq!(stats.draws, 1);
    }
}
