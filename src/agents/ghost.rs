use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::env::Direction;
use crate::eval::GridState;

/// Probability of a directional ghost to take one of its best moves.
pub const ATTACK_PROBABILITY: f64 = 0.8;

/// Policies of the adversaries in simulated games.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum GhostAgent {
    /// Uniformly random legal moves.
    #[default]
    Random,
    /// Mostly chases pacman or flees while scared.
    Directional,
}

impl GhostAgent {
    /// Chooses the move of the adversary `agent` (`agent >= 1`).
    pub fn act<G: GridState, R: Rng + ?Sized>(&self, game: &G, agent: usize, rng: &mut R) -> Direction {
        let moves = game.legal_actions(agent);
        match self {
            GhostAgent::Random => moves.choose(rng).copied().unwrap_or_default(),
            GhostAgent::Directional => directional(game, agent, &moves, rng),
        }
    }
}

fn directional<G: GridState, R: Rng + ?Sized>(
    game: &G,
    agent: usize,
    moves: &[Direction],
    rng: &mut R,
) -> Direction {
    let Some(ghost) = game.adversaries().get(agent - 1).copied() else {
        return moves.first().copied().unwrap_or_default();
    };
    let target = game.agent_position();
    let distances: Vec<u64> = moves
        .iter()
        .map(|&dir| ghost.pos.apply(dir).dist(target))
        .collect();

    let best = if ghost.scared > 0 {
        distances.iter().max()
    } else {
        distances.iter().min()
    };
    let Some(&best) = best else {
        return Direction::Stop;
    };

    let best_count = distances.iter().filter(|&&d| d == best).count() as f64;
    let weights = distances.iter().map(|&d| {
        let mut w = (1.0 - ATTACK_PROBABILITY) / moves.len() as f64;
        if d == best {
            w += ATTACK_PROBABILITY / best_count;
        }
        w
    });
    match WeightedIndex::new(weights) {
        Ok(dist) => moves[dist.sample(rng)],
        Err(_) => moves[0],
    }
}
