//! Game-tree analysis built on the minimax search

pub mod game_tree;
pub mod summary;

pub use game_tree::{TreeStats, enumerate_reachable};
pub use summary::{StateSummary, summarize};
