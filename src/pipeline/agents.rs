//! Agent implementations: the minimax player and a random baseline

use rand::{SeedableRng, random, rngs::StdRng, seq::IndexedRandom};

use crate::{
    Result,
    config::SearchConfig,
    ports::Agent,
    search::Minimax,
    tictactoe::{Action, Board},
};

/// Agent that always plays the minimax-optimal action
#[derive(Debug, Clone)]
pub struct MinimaxAgent {
    name: String,
    search: Minimax,
}

impl MinimaxAgent {
    /// Create a minimax agent with row-major tie-breaking
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, SearchConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: SearchConfig) -> Self {
        Self {
            name: name.into(),
            search: Minimax::new(config),
        }
    }

    /// Searcher used by this agent, e.g. to read its last statistics
    pub fn search(&self) -> &Minimax {
        &self.search
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, board: &Board) -> Result<Action> {
        self.search
            .choose(board)
            .ok_or(crate::Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Agent that plays a uniformly random legal action
#[derive(Debug, Clone)]
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a random agent seeded from the thread RNG
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_seed(name, random())
    }

    /// Create a random agent with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, board: &Board) -> Result<Action> {
        if board.is_terminal() {
            return Err(crate::Error::NoValidMoves);
        }
        board
            .actions()
            .choose(&mut self.rng)
            .copied()
            .ok_or(crate::Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimax_agent_rejects_terminal_board() {
        let board = Board::from_string("XXXOO....").unwrap();
        let mut agent = MinimaxAgent::new("Minimax");
        assert!(matches!(
            agent.select_action(&board),
            Err(crate::Error::NoValidMoves)
        ));
    }

    #[test]
    fn test_minimax_agent_records_stats() {
        let board = Board::from_string("XOXXOOOX.").unwrap();
        let mut agent = MinimaxAgent::new("Minimax");
        assert_eq!(agent.select_action(&board).unwrap(), Action::new(2, 2));
        assert_eq!(agent.search().stats().nodes, 1);
        assert_eq!(agent.name(), "Minimax");
    }

    #[test]
    fn test_random_agent_picks_legal_actions() {
        let board = Board::from_string("XO.XO....").unwrap();
        let mut agent = RandomAgent::with_seed("Random", 42);
        for _ in 0..50 {
            let action = agent.select_action(&board).unwrap();
            assert!(board.actions().contains(&action));
        }
    }

    #[test]
    fn test_random_agent_is_reproducible() {
        let board = Board::new();
        let mut a = RandomAgent::with_seed("A", 7);
        let mut b = RandomAgent::new("B");
        b.set_rng_seed(7);
        for _ in 0..10 {
            assert_eq!(
                a.select_action(&board).unwrap(),
                b.select_action(&board).unwrap()
            );
        }
    }

    #[test]
    fn test_random_agent_rejects_terminal_board() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        let mut agent = RandomAgent::with_seed("Random", 1);
        assert!(agent.select_action(&board).is_err());
    }
}
