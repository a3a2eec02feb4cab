use super::{keep_best, GameState, Heuristic};

/// Expectimax tree search.
///
/// The adversaries are modeled as choosing uniformly at random from their
/// legal actions, so their nodes are the average of their children.
/// Cutoffs are not possible here.
///
/// The state must not be terminal and `depth` has to be at least 1.
pub fn expectimax<G, H>(game: &G, depth: usize, heuristic: &H) -> Option<(G::Action, f64)>
where
    G: GameState,
    H: Heuristic<G> + ?Sized,
{
    assert!(depth > 0, "search depth has to be at least 1");
    assert!(!game.is_terminal(), "search started on a terminal state");

    let mut best = None;
    for action in game.legal_actions(0) {
        let value = expectimax_next(&game.successor(0, action), depth, 0, 0, heuristic);
        keep_best(&mut best, action, value);
    }
    best
}

/// Continues the search after `agent` has moved.
/// The depth increments after the last adversary.
fn expectimax_next<G, H>(game: &G, limit: usize, depth: usize, agent: usize, heuristic: &H) -> f64
where
    G: GameState,
    H: Heuristic<G> + ?Sized,
{
    if agent + 1 < game.num_agents() {
        expected_value(game, limit, depth, agent + 1, heuristic)
    } else {
        max_value(game, limit, depth + 1, heuristic)
    }
}

fn max_value<G, H>(game: &G, limit: usize, depth: usize, heuristic: &H) -> f64
where
    G: GameState,
    H: Heuristic<G> + ?Sized,
{
    if depth == limit || game.is_terminal() {
        return heuristic.eval(game);
    }

    let actions = game.legal_actions(0);
    if actions.is_empty() {
        return heuristic.eval(game);
    }

    actions
        .into_iter()
        .map(|action| expectimax_next(&game.successor(0, action), limit, depth, 0, heuristic))
        .fold(f64::NEG_INFINITY, f64::max)
}

fn expected_value<G, H>(game: &G, limit: usize, depth: usize, agent: usize, heuristic: &H) -> f64
where
    G: GameState,
    H: Heuristic<G> + ?Sized,
{
    if game.is_terminal() {
        return heuristic.eval(game);
    }

    let actions = game.legal_actions(agent);
    if actions.is_empty() {
        return heuristic.eval(game);
    }

    let probability = 1.0 / actions.len() as f64;
    actions
        .into_iter()
        .map(|action| {
            probability
                * expectimax_next(&game.successor(agent, action), limit, depth, agent, heuristic)
        })
        .sum()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::search::tree::*;
    use crate::search::{minimax, Score};

    #[test]
    fn average() {
        let game = TreeGame::new(
            branch(vec![leaves(&[3.0, 13.0]), leaves(&[2.0, 6.0])]),
            2,
        );
        assert_eq!(expectimax(&game, 2, &Score), Some((0, 8.0)));
    }

    #[test]
    fn single_action_adversary() {
        // The first adversary has only one action, so the root value is the
        // mean of all leafs reachable by the second one.
        let values = [1.0, 2.0, 6.0, 7.0];
        let game = TreeGame::new(branch(vec![branch(vec![leaves(&values)])]), 3);

        let mean = values.iter().sum::<f64>() / values.len() as f64;
        assert_eq!(expectimax(&game, 2, &Score), Some((0, mean)));
    }

    #[test]
    fn nested_average() {
        // (mean(4, 8) + mean(2)) / 2 = 4 beats min based 2
        let game = TreeGame::new(
            branch(vec![
                branch(vec![leaves(&[4.0, 8.0]), leaves(&[2.0])]),
                branch(vec![leaves(&[3.0, 3.0]), leaves(&[3.5])]),
            ]),
            3,
        );
        assert_eq!(expectimax(&game, 2, &Score), Some((0, 4.0)));
        assert_eq!(minimax(&game, 2, &Score), Some((1, 3.0)));
    }

    #[test]
    fn depth_limit() {
        let mut inner = leaves(&[-10.0, 20.0]);
        inner.value = 7.0;
        let game = TreeGame::new(branch(vec![branch(vec![inner])]), 2);

        // one ply: the inner max node is evaluated by its score
        assert_eq!(expectimax(&game, 1, &Score), Some((0, 7.0)));
        // two plies: the maximizer picks 20 after the forced adversary move
        assert_eq!(expectimax(&game, 2, &Score), Some((0, 20.0)));
    }
}
