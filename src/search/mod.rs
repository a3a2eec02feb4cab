//! Game agnostic tree search.
//!
//! Agent 0 is always the maximizing player, the agents `1..n` are its
//! adversaries and act in increasing order. One ply is a move of every
//! agent, after which the depth counter increments.

mod alphabeta;
pub use alphabeta::*;
mod expectimax;
pub use expectimax::*;
mod minimax;
pub use minimax::*;
mod reflex;
pub use reflex::*;

#[cfg(test)]
pub(crate) mod tree;

use std::fmt::Debug;

/// Sentinel returned by heuristics for a won state.
pub const WIN: f64 = 99999.0;
/// Sentinel returned by heuristics for a lost or forbidden state.
pub const LOSS: f64 = -99999.0;

/// Snapshot of a turn based multi agent game.
///
/// Implementations are never mutated by the search, every transition
/// creates a new state.
pub trait GameState: Sized {
    type Action: Copy + PartialEq + Debug;

    /// Legal actions of the given agent. Terminal states may return none.
    fn legal_actions(&self, agent: usize) -> Vec<Self::Action>;

    /// The state after `agent` executed `action`.
    /// The action has to be one of `legal_actions(agent)`.
    fn successor(&self, agent: usize, action: Self::Action) -> Self;

    fn is_win(&self) -> bool;
    fn is_lose(&self) -> bool;

    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }

    /// Number of agents including the maximizing one.
    fn num_agents(&self) -> usize;

    fn score(&self) -> f64;
}

/// A heuristic that evaluates the game state at the leafs of a tree search.
pub trait Heuristic<G: GameState>: Debug {
    fn eval(&self, game: &G) -> f64;
}

/// A heuristic that rates an action of the maximizing agent in the given state.
pub trait ActionHeuristic<G: GameState>: Debug {
    fn eval(&self, game: &G, action: G::Action) -> f64;
}

/// Uses the score of the state as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Score;

impl<G: GameState> Heuristic<G> for Score {
    fn eval(&self, game: &G) -> f64 {
        game.score()
    }
}

/// Keeps the first action with the strictly highest value.
fn keep_best<A>(best: &mut Option<(A, f64)>, action: A, value: f64) {
    if best.as_ref().map_or(true, |&(_, max)| value > max) {
        *best = Some((action, value));
    }
}
