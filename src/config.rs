//! Configuration types for the search.

use serde::{Deserialize, Serialize};

/// Order in which the search enumerates legal actions.
///
/// Only the tie-break between equally valued actions depends on it; the
/// value found by the search is the same under every order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveOrder {
    /// Row-major order: the first optimal action in reading order wins ties
    #[default]
    RowMajor,
    /// Reproducible pseudo-random order drawn from the seed at every node
    Shuffled { seed: u64 },
}

/// Configuration for a [`Minimax`](crate::search::Minimax) searcher.
///
/// # Examples
///
/// ```
/// use ttt_minimax::config::{MoveOrder, SearchConfig};
///
/// let config = SearchConfig::new().with_move_order(MoveOrder::Shuffled { seed: 7 });
/// assert_eq!(config.move_order, MoveOrder::Shuffled { seed: 7 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Action enumeration order
    pub move_order: MoveOrder,
}

impl SearchConfig {
    /// Create a configuration with row-major ordering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the action enumeration order.
    pub fn with_move_order(mut self, order: MoveOrder) -> Self {
        self.move_order = order;
        self
    }
}
