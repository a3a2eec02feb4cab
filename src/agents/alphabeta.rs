use std::time::Instant;

use log::debug;

use super::{SearchConfig, Strategy};
use crate::env::Direction;
use crate::error::Result;
use crate::eval::GridState;
use crate::search;

/// Minimax with alpha-beta pruning, chooses the same actions as
/// [super::MinimaxAgent] while expanding fewer states.
#[derive(Debug, Clone, Default)]
pub struct AlphaBetaAgent {
    config: SearchConfig,
}

impl AlphaBetaAgent {
    pub fn new(config: SearchConfig) -> Result<AlphaBetaAgent> {
        config.validate()?;
        Ok(AlphaBetaAgent { config })
    }
}

impl<G: GridState> Strategy<G> for AlphaBetaAgent {
    fn choose_action(&mut self, game: &G) -> Option<Direction> {
        let start = Instant::now();
        let result = search::alphabeta(game, self.config.depth, &self.config.evaluation);
        debug!(
            ">>> alphabeta {} {:?}ms {:?}",
            self.config.depth,
            start.elapsed().as_millis(),
            result
        );
        result.map(|(dir, _)| dir)
    }
}
