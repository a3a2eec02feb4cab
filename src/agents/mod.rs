use std::fmt;
use std::str::FromStr;

use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

mod alphabeta;
pub use alphabeta::*;
mod expectimax;
pub use expectimax::*;
mod ghost;
pub use ghost::*;
mod minimax;
pub use minimax::*;
mod reflex;
pub use reflex::*;

use crate::error::{Error, Result};
use crate::eval::{Evaluation, GridState};
use crate::search::GameState;

/// Decision function of the maximizing agent (id 0).
pub trait Strategy<G: GameState> {
    /// Chooses the next action, `None` if there is no legal action.
    /// The state must not be terminal.
    fn choose_action(&mut self, game: &G) -> Option<G::Action>;
}

/// Configuration shared by the tree search agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Evaluation of the states at the search horizon.
    pub evaluation: Evaluation,
    /// Number of plies, one ply is a move of every agent.
    pub depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            evaluation: Evaluation::Score,
            depth: 2,
        }
    }
}

impl SearchConfig {
    pub fn new(evaluation: Evaluation, depth: usize) -> Result<SearchConfig> {
        let config = SearchConfig { evaluation, depth };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            return Err(Error::InvalidDepth(self.depth));
        }
        Ok(())
    }
}

/// Agent configurations for the command line tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Agent {
    Reflex,
    Minimax(SearchConfig),
    AlphaBeta(SearchConfig),
    Expectimax(SearchConfig),
}

impl Default for Agent {
    fn default() -> Self {
        Self::AlphaBeta(SearchConfig::default())
    }
}

impl Agent {
    /// Creates the configured strategy, the `rng` is used for random tie
    /// breaking where necessary.
    pub fn build<G: GridState + 'static>(&self, rng: SmallRng) -> Result<Box<dyn Strategy<G>>> {
        Ok(match *self {
            Agent::Reflex => Box::new(ReflexAgent::new(rng)),
            Agent::Minimax(config) => Box::new(MinimaxAgent::new(config)?),
            Agent::AlphaBeta(config) => Box::new(AlphaBetaAgent::new(config)?),
            Agent::Expectimax(config) => Box::new(ExpectimaxAgent::new(config)?),
        })
    }
}

impl FromStr for Agent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", json)
    }
}
