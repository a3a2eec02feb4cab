//! Evaluation functions for grid based chase games.

use serde::{Deserialize, Serialize};

use crate::env::{Direction, Vec2D};
use crate::search::{ActionHeuristic, GameState, Heuristic, LOSS, WIN};

/// Position and neutralized timer of an adversary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adversary {
    pub pos: Vec2D,
    /// Number of turns this adversary remains harmless.
    pub scared: u16,
}

/// A game on a grid where agent 0 collects targets and is chased by the
/// other agents.
pub trait GridState: GameState<Action = Direction> {
    /// Position of the maximizing agent.
    fn agent_position(&self) -> Vec2D;
    /// Remaining consumable targets.
    fn targets(&self) -> Vec<Vec2D>;
    /// All adversaries in agent order (agent `i` is `adversaries()[i - 1]`).
    fn adversaries(&self) -> Vec<Adversary>;
}

fn nearest(from: Vec2D, points: impl IntoIterator<Item = Vec2D>) -> Option<u64> {
    points.into_iter().map(|p| from.dist(p)).min()
}

/// Inverse distance, 0 if there is nothing.
fn closeness(distance: Option<u64>) -> f64 {
    distance.map_or(0.0, |d| 1.0 / (1.0 + d as f64))
}

/// Named leaf evaluations for the tree searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Evaluation {
    /// The score of the state.
    #[default]
    Score,
    /// The score adjusted by the distance to the nearest target and the
    /// nearest adversary.
    Proximity,
}

impl<G: GridState> Heuristic<G> for Evaluation {
    fn eval(&self, game: &G) -> f64 {
        match self {
            Evaluation::Score => game.score(),
            Evaluation::Proximity => proximity(game),
        }
    }
}

fn proximity<G: GridState>(game: &G) -> f64 {
    let pos = game.agent_position();
    let food = closeness(nearest(pos, game.targets()));
    let ghost = game
        .adversaries()
        .into_iter()
        .min_by_key(|a| pos.dist(a.pos))
        .map_or(0.0, |a| {
            let value = closeness(Some(pos.dist(a.pos)));
            if a.scared > 0 {
                value
            } else {
                -value
            }
        });
    game.score() + food + ghost
}

/// Rates a move of the maximizing agent by its immediate consequences.
///
/// - Standing still is never an option
/// - Winning moves are always taken
/// - Running into a dangerous adversary is avoided
/// - Otherwise the successor score is adjusted by getting closer to food and
///   away from adversaries, or towards them if they just became harmless.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReflexHeuristic;

impl<G: GridState> ActionHeuristic<G> for ReflexHeuristic {
    fn eval(&self, game: &G, action: Direction) -> f64 {
        if action == Direction::Stop {
            return LOSS;
        }

        let next = game.successor(0, action);
        if next.is_win() {
            return WIN;
        }

        let prior = game.agent_position();
        let adversaries = next.adversaries();
        if adversaries.iter().any(|a| a.pos == prior && a.scared == 0) {
            return LOSS;
        }

        let pos = next.agent_position();
        let food = closeness(nearest(pos, next.targets()));
        let ghost = closeness(nearest(pos, adversaries.iter().map(|a| a.pos)));

        // a capsule was eaten
        let scared = game
            .adversaries()
            .iter()
            .zip(&adversaries)
            .any(|(before, after)| after.scared > before.scared);

        next.score() + food + if scared { ghost } else { -ghost }
    }
}
