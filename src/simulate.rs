//! Plays complete games with a pacman strategy against ghost policies.

use log::info;
use rand::Rng;

use crate::agents::{GhostAgent, Strategy};
use crate::env::Direction;
use crate::error::Result;
use crate::game::{Game, Outcome};

/// Result of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub outcome: Outcome,
    pub score: i64,
    pub turns: usize,
}

/// Plays until the game ends or `max_turns` rounds were played.
///
/// Every round pacman moves first, followed by each ghost in order.
pub fn play<R: Rng + ?Sized>(
    mut game: Game,
    pacman: &mut dyn Strategy<Game>,
    ghosts: GhostAgent,
    rng: &mut R,
    max_turns: usize,
    verbose: bool,
) -> Result<Summary> {
    if verbose {
        info!("init: {:?}", game);
    }

    for turn in 0..max_turns {
        for agent in 0..game.num_agents() {
            if game.outcome != Outcome::None {
                break;
            }
            let dir = if agent == 0 {
                pacman.choose_action(&game).unwrap_or(Direction::Stop)
            } else {
                ghosts.act(&game, agent, rng)
            };
            game.try_step(agent, dir)?;
        }

        if verbose {
            info!("{}: {:?}", turn, game);
        }

        if game.outcome != Outcome::None {
            return Ok(Summary {
                outcome: game.outcome,
                score: game.score,
                turns: turn + 1,
            });
        }
    }

    Ok(Summary {
        outcome: game.outcome,
        score: game.score,
        turns: max_turns,
    })
}

#[cfg(test)]
mod test {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;
    use crate::agents::{Agent, SearchConfig};
    use crate::game::layouts;

    #[test]
    fn win_corridor() {
        let mut rng = SmallRng::seed_from_u64(0);
        for agent in [Agent::Reflex, Agent::AlphaBeta(SearchConfig::default())] {
            let game = layouts::load("corridor").unwrap();
            let mut pacman = agent.build::<Game>(SmallRng::seed_from_u64(1)).unwrap();
            let summary = play(game, pacman.as_mut(), GhostAgent::Random, &mut rng, 10, true).unwrap();
            assert_eq!(
                summary,
                Summary {
                    outcome: Outcome::Win,
                    score: 509,
                    turns: 1
                }
            );
        }
    }

    #[test]
    fn turn_limit() {
        // pacman is walled in and can only stop
        let game = Game::parse(
            r#"
            %%%%%%
            %P%.G%
            %%%%%%"#,
        )
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(0);
        let mut pacman = Agent::Reflex.build::<Game>(SmallRng::seed_from_u64(0)).unwrap();
        let summary = play(game, pacman.as_mut(), GhostAgent::Directional, &mut rng, 10, false).unwrap();
        assert_eq!(summary.outcome, Outcome::None);
        assert_eq!(summary.turns, 10);
        assert_eq!(summary.score, -10);
    }

    #[test]
    fn complete_games() {
        let mut rng = SmallRng::seed_from_u64(3);
        for name in ["testClassic", "trappedClassic", "minimaxClassic"] {
            for ghosts in [GhostAgent::Random, GhostAgent::Directional] {
                let game = layouts::load(name).unwrap();
                let mut pacman = Agent::Expectimax(SearchConfig::default())
                    .build::<Game>(SmallRng::seed_from_u64(0))
                    .unwrap();
                let summary = play(game, pacman.as_mut(), ghosts, &mut rng, 100, false).unwrap();
                assert!(summary.turns >= 1 && summary.turns <= 100);
                if summary.outcome == Outcome::Win {
                    assert!(summary.score > 0);
                }
            }
        }
    }
}
