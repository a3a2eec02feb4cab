use std::time::Instant;

use log::debug;

use super::{SearchConfig, Strategy};
use crate::env::Direction;
use crate::error::Result;
use crate::eval::GridState;
use crate::search;

/// Exhaustive minimax search against all adversaries.
#[derive(Debug, Clone, Default)]
pub struct MinimaxAgent {
    config: SearchConfig,
}

impl MinimaxAgent {
    pub fn new(config: SearchConfig) -> Result<MinimaxAgent> {
        config.validate()?;
        Ok(MinimaxAgent { config })
    }
}

impl<G: GridState> Strategy<G> for MinimaxAgent {
    fn choose_action(&mut self, game: &G) -> Option<Direction> {
        let start = Instant::now();
        let result = search::minimax(game, self.config.depth, &self.config.evaluation);
        debug!(
            ">>> minimax {} {:?}ms {:?}",
            self.config.depth,
            start.elapsed().as_millis(),
            result
        );
        result.map(|(dir, _)| dir)
    }
}
