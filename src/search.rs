//! Exhaustive minimax search.
//!
//! [`Minimax::choose`], [`Minimax::max_value`] and [`Minimax::min_value`] are
//! mutually recursive and walk the whole game tree below a board: there is no
//! pruning and no caching. Recursion depth is bounded by the number of empty
//! cells, so every search terminates.
//!
//! X maximizes and O minimizes the terminal [`utility`](Board::utility).
//! Among equally valued actions the first one in enumeration order wins,
//! which makes the choice depend on [`MoveOrder`]; the value never does.

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use tracing::debug;

use crate::{
    config::{MoveOrder, SearchConfig},
    tictactoe::{Action, Board},
};

/// Counters collected during the most recent top-level search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Boards handed to `max_value` or `min_value`
    pub nodes: usize,
    /// Terminal boards reached
    pub leaves: usize,
}

/// Minimax searcher
#[derive(Debug, Clone)]
pub struct Minimax {
    config: SearchConfig,
    rng: Option<StdRng>,
    stats: SearchStats,
}

impl Minimax {
    pub fn new(config: SearchConfig) -> Self {
        let rng = match config.move_order {
            MoveOrder::RowMajor => None,
            MoveOrder::Shuffled { seed } => Some(StdRng::seed_from_u64(seed)),
        };
        Self {
            config,
            rng,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Counters from the last call to [`choose`](Self::choose),
    /// [`value`](Self::value) or [`evaluate_actions`](Self::evaluate_actions)
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Optimal action for the player to move, `None` on a terminal board.
    pub fn choose(&mut self, board: &Board) -> Option<Action> {
        if board.is_terminal() {
            return None;
        }
        self.stats = SearchStats::default();

        let maximizing = board.player().is_maximizing();
        let mut best: Option<(Action, i32)> = None;

        for (action, next) in self.ordered_successors(board) {
            let value = if maximizing {
                self.min_value(&next)
            } else {
                self.max_value(&next)
            };

            let improves = match best {
                None => true,
                Some((_, best_value)) if maximizing => value > best_value,
                Some((_, best_value)) => value < best_value,
            };
            if improves {
                best = Some((action, value));
            }
        }

        if let Some((action, value)) = best {
            debug!(
                board = %board.encode(),
                player = %board.player(),
                %action,
                value,
                nodes = self.stats.nodes,
                "minimax chose action"
            );
        }
        best.map(|(action, _)| action)
    }

    /// Value of a board where the maximizing player (X) is to move.
    pub fn max_value(&mut self, board: &Board) -> i32 {
        self.stats.nodes += 1;
        if board.is_terminal() {
            self.stats.leaves += 1;
            return board.utility();
        }

        let mut value = i32::MIN;
        for (_, next) in self.ordered_successors(board) {
            value = value.max(self.min_value(&next));
        }
        value
    }

    /// Value of a board where the minimizing player (O) is to move.
    pub fn min_value(&mut self, board: &Board) -> i32 {
        self.stats.nodes += 1;
        if board.is_terminal() {
            self.stats.leaves += 1;
            return board.utility();
        }

        let mut value = i32::MAX;
        for (_, next) in self.ordered_successors(board) {
            value = value.min(self.max_value(&next));
        }
        value
    }

    /// Game-theoretic value of a board under optimal play by both sides.
    pub fn value(&mut self, board: &Board) -> i32 {
        self.stats = SearchStats::default();
        if board.player().is_maximizing() {
            self.max_value(board)
        } else {
            self.min_value(board)
        }
    }

    /// Every legal action paired with the value it leads to.
    ///
    /// Returned in row-major order regardless of the configured move order.
    /// Empty for terminal boards.
    pub fn evaluate_actions(&mut self, board: &Board) -> Vec<(Action, i32)> {
        self.stats = SearchStats::default();
        if board.is_terminal() {
            return Vec::new();
        }

        let maximizing = board.player().is_maximizing();
        board
            .successors()
            .into_iter()
            .map(|(action, next)| {
                let value = if maximizing {
                    self.min_value(&next)
                } else {
                    self.max_value(&next)
                };
                (action, value)
            })
            .collect()
    }

    /// Value of the board together with every action achieving it, in
    /// row-major order.
    ///
    /// A terminal board yields its utility and no actions.
    pub fn optimal(&mut self, board: &Board) -> (i32, Vec<Action>) {
        let evaluated = self.evaluate_actions(board);
        let values = evaluated.iter().map(|&(_, value)| value);
        let best = if board.player().is_maximizing() {
            values.max()
        } else {
            values.min()
        };
        let Some(best) = best else {
            return (board.utility(), Vec::new());
        };

        let actions = evaluated
            .into_iter()
            .filter(|&(_, value)| value == best)
            .map(|(action, _)| action)
            .collect();
        (best, actions)
    }

    /// All actions achieving the optimal value, in row-major order.
    pub fn optimal_actions(&mut self, board: &Board) -> Vec<Action> {
        self.optimal(board).1
    }

    fn ordered_successors(&mut self, board: &Board) -> Vec<(Action, Board)> {
        let mut successors = board.successors();
        if let Some(rng) = self.rng.as_mut() {
            successors.shuffle(rng);
        }
        successors
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

/// Optimal action for the player to move, `None` if the board is terminal.
///
/// # Examples
///
/// ```
/// use ttt_minimax::{search::minimax, tictactoe::{Action, Board}};
///
/// // X to move and win on the top row.
/// let board = Board::from_string("XX.OO....").unwrap();
/// assert_eq!(minimax(&board), Some(Action::new(0, 2)));
/// ```
pub fn minimax(board: &Board) -> Option<Action> {
    Minimax::default().choose(board)
}

/// Value of `board` with X to move, using row-major ordering.
pub fn max_value(board: &Board) -> i32 {
    Minimax::default().max_value(board)
}

/// Value of `board` with O to move, using row-major ordering.
pub fn min_value(board: &Board) -> i32 {
    Minimax::default().min_value(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Player;

    #[test]
    fn test_terminal_board_has_no_action() {
        let won = Board::from_string("XXXOO....").unwrap();
        assert_eq!(minimax(&won), None);

        let full = Board::from_string("XOXXOOOXX").unwrap();
        assert_eq!(minimax(&full), None);
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = Board::from_string("XX.OO....").unwrap();
        assert_eq!(minimax(&board), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_o_takes_immediate_win() {
        // X X .
        // O O .
        // X . .
        let board = Board::from_string("XX.OO.X..").unwrap();
        assert_eq!(board.player(), Player::O);
        assert_eq!(minimax(&board), Some(Action::new(1, 2)));
    }

    #[test]
    fn test_blocks_opponent_win() {
        // X X .
        // . O .
        // . . .
        let board = Board::from_string("XX..O....").unwrap();
        assert_eq!(board.player(), Player::O);
        assert_eq!(minimax(&board), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_value_functions_on_terminal_boards() {
        let x_won = Board::from_string("XXXOO....").unwrap();
        assert_eq!(max_value(&x_won), 1);
        assert_eq!(min_value(&x_won), 1);

        let draw = Board::from_string("XOXXOOOXX").unwrap();
        assert_eq!(max_value(&draw), 0);
    }

    #[test]
    fn test_forced_win_value() {
        // X O .
        // . X .
        // . . O
        // X to move forks with (2, 0) or (1, 0); O has no counter-threat.
        let board = Board::from_string("XO..X...O").unwrap();
        let mut search = Minimax::default();
        assert_eq!(board.player(), Player::X);
        assert_eq!(search.value(&board), 1);
    }

    #[test]
    fn test_chosen_action_has_optimal_value() {
        let boards = ["X........", "....X....", "X...O....", "XO.......", "X.O.X.O.."];
        for label in boards {
            let board = Board::from_string(label).unwrap();
            let mut search = Minimax::default();
            let evaluated = search.evaluate_actions(&board);
            let chosen = search.choose(&board).unwrap();
            let chosen_value = evaluated
                .iter()
                .find(|(action, _)| *action == chosen)
                .map(|&(_, value)| value)
                .unwrap();
            let best = if board.player() == Player::X {
                evaluated.iter().map(|&(_, v)| v).max().unwrap()
            } else {
                evaluated.iter().map(|&(_, v)| v).min().unwrap()
            };
            assert_eq!(chosen_value, best, "suboptimal choice on {label}");
        }
    }

    #[test]
    fn test_row_major_tie_break_picks_first_optimal() {
        let board = Board::from_string("....X....").unwrap();
        let mut search = Minimax::default();
        let optimal = search.optimal_actions(&board);
        assert_eq!(search.choose(&board), optimal.first().copied());
    }

    #[test]
    fn test_shuffled_order_is_reproducible_and_optimal() {
        let board = Board::from_string("....X....").unwrap();
        let config = SearchConfig::new().with_move_order(MoveOrder::Shuffled { seed: 11 });

        let first = Minimax::new(config).choose(&board).unwrap();
        let second = Minimax::new(config).choose(&board).unwrap();
        assert_eq!(first, second);

        let optimal = Minimax::default().optimal_actions(&board);
        assert!(optimal.contains(&first));
    }

    #[test]
    fn test_stats_count_nodes() {
        // One empty cell: X fills it, a single terminal leaf.
        let board = Board::from_string("XOXXOOOX.").unwrap();
        let mut search = Minimax::default();
        assert_eq!(search.choose(&board), Some(Action::new(2, 2)));
        assert_eq!(search.stats(), SearchStats { nodes: 1, leaves: 1 });
    }

    #[test]
    fn test_optimal_reports_value_and_actions() {
        // O to move must block the top row; anything else loses.
        let board = Board::from_string("XX..O....").unwrap();
        let mut search = Minimax::default();
        assert_eq!(search.optimal(&board), (0, vec![Action::new(0, 2)]));

        let won = Board::from_string("XXXOO....").unwrap();
        assert_eq!(search.optimal(&won), (1, Vec::new()));
    }

    #[test]
    fn test_evaluate_actions_empty_on_terminal() {
        let board = Board::from_string("XXXOO....").unwrap();
        assert!(Minimax::default().evaluate_actions(&board).is_empty());
        assert!(Minimax::default().optimal_actions(&board).is_empty());
    }
}
