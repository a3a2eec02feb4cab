use log::debug;
use rand::Rng;

use super::Strategy;
use crate::env::Direction;
use crate::eval::{GridState, ReflexHeuristic};
use crate::search;

/// Greedy one step agent, ties are broken randomly.
#[derive(Debug, Clone)]
pub struct ReflexAgent<R: Rng> {
    heuristic: ReflexHeuristic,
    rng: R,
}

impl<R: Rng> ReflexAgent<R> {
    pub fn new(rng: R) -> ReflexAgent<R> {
        ReflexAgent {
            heuristic: ReflexHeuristic,
            rng,
        }
    }
}

impl<G: GridState, R: Rng> Strategy<G> for ReflexAgent<R> {
    fn choose_action(&mut self, game: &G) -> Option<Direction> {
        let dir = search::reflex(game, &self.heuristic, &mut self.rng);
        debug!(">>> reflex {:?}", dir);
        dir
    }
}
