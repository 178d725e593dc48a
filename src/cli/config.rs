//! Shared configuration types for CLI commands

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    config::{MoveOrder, SearchConfig},
    pipeline::{MinimaxAgent, RandomAgent},
    ports::Agent,
};

/// Common configuration shared across commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Whether to show progress bars
    pub progress: bool,
}

/// Action enumeration order as a command-line value
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum, Serialize, Deserialize)]
pub enum OrderArg {
    /// Row-major order, deterministic tie-breaks
    #[default]
    RowMajor,
    /// Seeded pseudo-random order
    Shuffled,
}

impl OrderArg {
    /// Resolve to a search configuration, seeding shuffled orders.
    ///
    /// Without an explicit seed the shuffled order draws one at random.
    pub fn search_config(self, seed: Option<u64>) -> SearchConfig {
        let order = match self {
            OrderArg::RowMajor => MoveOrder::RowMajor,
            OrderArg::Shuffled => MoveOrder::Shuffled {
                seed: seed.unwrap_or_else(rand::random),
            },
        };
        SearchConfig::new().with_move_order(order)
    }
}

/// Kind of computer agent selectable from the command line
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum, Serialize, Deserialize)]
pub enum AgentKind {
    /// Exhaustive minimax
    #[default]
    Minimax,
    /// Uniformly random legal moves
    Random,
}

impl AgentKind {
    /// Build the agent; `seed` feeds the random agent or a shuffled search.
    pub fn build(self, name: &str, search: SearchConfig, seed: Option<u64>) -> Box<dyn Agent> {
        match self {
            AgentKind::Minimax => Box::new(MinimaxAgent::with_config(name, search)),
            AgentKind::Random => match seed {
                Some(seed) => Box::new(RandomAgent::with_seed(name, seed)),
                None => Box::new(RandomAgent::new(name)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_arg_resolution() {
        assert_eq!(
            OrderArg::RowMajor.search_config(Some(5)).move_order,
            MoveOrder::RowMajor
        );
        assert_eq!(
            OrderArg::Shuffled.search_config(Some(5)).move_order,
            MoveOrder::Shuffled { seed: 5 }
        );
    }

    #[test]
    fn test_agent_kind_names() {
        let agent = AgentKind::Random.build("R", SearchConfig::default(), Some(1));
        assert_eq!(agent.name(), "R");
        let agent = AgentKind::Minimax.build("M", SearchConfig::default(), None);
        assert_eq!(agent.name(), "M");
    }
}
