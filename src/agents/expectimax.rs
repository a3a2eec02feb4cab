use std::time::Instant;

use log::debug;

use super::{SearchConfig, Strategy};
use crate::env::Direction;
use crate::error::Result;
use crate::eval::GridState;
use crate::search;

/// Assumes the adversaries choose uniformly at random.
#[derive(Debug, Clone, Default)]
pub struct ExpectimaxAgent {
    config: SearchConfig,
}

impl ExpectimaxAgent {
    pub fn new(config: SearchConfig) -> Result<ExpectimaxAgent> {
        config.validate()?;
        Ok(ExpectimaxAgent { config })
    }
}

impl<G: GridState> Strategy<G> for ExpectimaxAgent {
    fn choose_action(&mut self, game: &G) -> Option<Direction> {
        let start = Instant::now();
        let result = search::expectimax(game, self.config.depth, &self.config.evaluation);
        debug!(
            ">>> expectimax {} {:?}ms {:?}",
            self.config.depth,
            start.elapsed().as_millis(),
            result
        );
        result.map(|(dir, _)| dir)
    }
}
