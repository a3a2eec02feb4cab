use rand::seq::SliceRandom;
use rand::Rng;

use super::{ActionHeuristic, GameState};

/// Rates every legal action of agent 0 and picks one of the best.
///
/// Equally rated actions are chosen uniformly with the provided `rng`.
pub fn reflex<G, H, R>(game: &G, heuristic: &H, rng: &mut R) -> Option<G::Action>
where
    G: GameState,
    H: ActionHeuristic<G> + ?Sized,
    R: Rng + ?Sized,
{
    let actions = game.legal_actions(0);
    let scores: Vec<f64> = actions
        .iter()
        .map(|&action| heuristic.eval(game, action))
        .collect();
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let best: Vec<G::Action> = actions
        .iter()
        .zip(&scores)
        .filter(|&(_, &score)| score == max)
        .map(|(&action, _)| action)
        .collect();
    best.choose(rng).copied()
}

#[cfg(test)]
mod test {
    use rand::rngs::mock::StepRng;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;
    use crate::search::tree::*;

    /// Rates an action by the value of the child node.
    #[derive(Debug)]
    struct ChildValue;
    impl ActionHeuristic<TreeGame> for ChildValue {
        fn eval(&self, game: &TreeGame, action: usize) -> f64 {
            game.successor(0, action).score()
        }
    }

    #[test]
    fn single_action() {
        let game = TreeGame::new(leaves(&[-4.0]), 2);
        for seed in 0..8 {
            let mut rng = SmallRng::seed_from_u64(seed);
            assert_eq!(reflex(&game, &ChildValue, &mut rng), Some(0));
        }
    }

    #[test]
    fn best_action() {
        let game = TreeGame::new(leaves(&[1.0, 5.0, 2.0]), 2);
        let mut rng = StepRng::new(0, 0);
        assert_eq!(reflex(&game, &ChildValue, &mut rng), Some(1));
    }

    #[test]
    fn tie_break() {
        let game = TreeGame::new(leaves(&[3.0, 1.0, 3.0, 3.0]), 2);

        // A constant zero source always picks the first of the tied actions
        let mut rng = StepRng::new(0, 0);
        assert_eq!(reflex(&game, &ChildValue, &mut rng), Some(0));

        let mut rng = SmallRng::seed_from_u64(42);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let action = reflex(&game, &ChildValue, &mut rng).unwrap();
            seen[action] = true;
        }
        assert_eq!(seen, [true, false, true, true]);
    }

    #[test]
    fn no_actions() {
        let game = TreeGame::new(leaf(0.0), 2);
        let mut rng = StepRng::new(0, 0);
        assert_eq!(reflex(&game, &ChildValue, &mut rng), None);
    }
}
