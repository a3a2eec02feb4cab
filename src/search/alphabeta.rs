use super::{keep_best, GameState, Heuristic};

/// Alpha-Beta tree search.
///
/// @see https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning
/// - Assumes the maximizing agent has id 0, all others are minimizing
/// - Cutoffs are strict, so it chooses the same action with the same value
///   as [`minimax`](super::minimax), only fewer nodes are expanded
///
/// The state must not be terminal and `depth` has to be at least 1.
pub fn alphabeta<G, H>(game: &G, depth: usize, heuristic: &H) -> Option<(G::Action, f64)>
where
    G: GameState,
    H: Heuristic<G> + ?Sized,
{
    assert!(depth > 0, "search depth has to be at least 1");
    assert!(!game.is_terminal(), "search started on a terminal state");

    let mut alpha = f64::NEG_INFINITY;
    let beta = f64::INFINITY;

    let mut best = None;
    for action in game.legal_actions(0) {
        let value = alphabeta_next(
            &game.successor(0, action),
            depth,
            0,
            0,
            alpha,
            beta,
            heuristic,
        );
        keep_best(&mut best, action, value);
        if value > beta {
            return best;
        }
        alpha = alpha.max(value);
    }
    best
}

/// Continues the search after `agent` has moved.
fn alphabeta_next<G, H>(
    game: &G,
    limit: usize,
    depth: usize,
    agent: usize,
    alpha: f64,
    beta: f64,
    heuristic: &H,
) -> f64
where
    G: GameState,
    H: Heuristic<G> + ?Sized,
{
    if agent + 1 < game.num_agents() {
        min_value(game, limit, depth, agent + 1, alpha, beta, heuristic)
    } else {
        max_value(game, limit, depth, alpha, beta, heuristic)
    }
}

fn max_value<G, H>(
    game: &G,
    limit: usize,
    depth: usize,
    mut alpha: f64,
    beta: f64,
    heuristic: &H,
) -> f64
where
    G: GameState,
    H: Heuristic<G> + ?Sized,
{
    let depth = depth + 1;
    if depth == limit || game.is_terminal() {
        return heuristic.eval(game);
    }

    let actions = game.legal_actions(0);
    if actions.is_empty() {
        return heuristic.eval(game);
    }

    let mut max = f64::NEG_INFINITY;
    for action in actions {
        let value = alphabeta_next(
            &game.successor(0, action),
            limit,
            depth,
            0,
            alpha,
            beta,
            heuristic,
        );
        max = max.max(value);
        // fail high
        if max > beta {
            return max;
        }
        alpha = alpha.max(max);
    }
    max
}

fn min_value<G, H>(
    game: &G,
    limit: usize,
    depth: usize,
    agent: usize,
    alpha: f64,
    mut beta: f64,
    heuristic: &H,
) -> f64
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

    let mut min = f64::INFINITY;
    for action in actions {
        let value = alphabeta_next(
            &game.successor(agent, action),
            limit,
            depth,
            agent,
            alpha,
            beta,
            heuristic,
        );
        min = min.min(value);
        // fail low
        if min < alpha {
            return min;
        }
        beta = beta.min(min);
    }
    min
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::search::tree::*;
    use crate::search::{minimax, Score};

    /// Runs both searches on separate copies and returns their results and
    /// expanded node counts.
    fn compare(root: Node, agents: usize, depth: usize) -> (Option<(usize, f64)>, usize, usize) {
        let full = TreeGame::new(root.clone(), agents);
        let pruned = TreeGame::new(root, agents);

        let expected = minimax(&full, depth, &Score);
        let result = alphabeta(&pruned, depth, &Score);
        assert_eq!(result, expected);
        assert!(pruned.expanded() <= full.expanded());
        (result, full.expanded(), pruned.expanded())
    }

    #[test]
    fn fail_low() {
        // The first leaf of the second min node is below alpha = 3
        let (result, full, pruned) = compare(
            branch(vec![leaves(&[3.0, 5.0]), leaves(&[2.0, 9.0])]),
            2,
            2,
        );
        assert_eq!(result, Some((0, 3.0)));
        assert_eq!(full, 6);
        assert_eq!(pruned, 5);
    }

    #[test]
    fn textbook() {
        let (result, full, pruned) = compare(
            branch(vec![
                leaves(&[3.0, 12.0, 8.0]),
                leaves(&[2.0, 4.0, 6.0]),
                leaves(&[14.0, 5.0, 2.0]),
            ]),
            2,
            3,
        );
        assert_eq!(result, Some((0, 3.0)));
        assert_eq!(full, 12);
        // 4 and 6 are skipped
        assert_eq!(pruned, 10);
    }

    #[test]
    fn fail_high() {
        // Two plies: the inner max node exceeds beta of its min parent
        let root = branch(vec![branch(vec![
            branch(vec![leaves(&[5.0]), leaves(&[1.0])]),
            branch(vec![leaves(&[8.0]), leaves(&[2.0])]),
        ])]);
        let (result, full, pruned) = compare(root, 2, 3);
        assert_eq!(result, Some((0, 5.0)));
        assert!(pruned < full);
    }

    #[test]
    fn same_as_minimax() {
        let trees = [
            (leaves(&[1.0, -1.0, 4.0]), 1, 1),
            (
                branch(vec![leaves(&[1.0, 1.0]), leaves(&[1.0, 0.0]), leaves(&[1.0])]),
                2,
                1,
            ),
            (
                branch(vec![
                    branch(vec![leaves(&[4.0, 9.0]), leaves(&[7.0, 6.0])]),
                    branch(vec![leaves(&[5.0, 8.0]), leaves(&[6.0, 10.0])]),
                    branch(vec![leaves(&[5.0, 1.0]), leaves(&[3.0, 2.0])]),
                ]),
                3,
                2,
            ),
            (
                branch(vec![
                    branch(vec![
                        branch(vec![leaves(&[3.0, 7.0]), leaves(&[-2.0, 4.0])]),
                        branch(vec![leaves(&[6.0, 1.0]), leaves(&[0.0])]),
                    ]),
                    branch(vec![
                        branch(vec![leaves(&[8.0]), leaves(&[5.0, 9.0])]),
                        branch(vec![leaves(&[2.0, 2.0]), leaves(&[7.0, -3.0])]),
                    ]),
                    branch(vec![branch(vec![leaves(&[1.0, 2.0, 3.0])])]),
                ]),
                2,
                3,
            ),
        ];
        for (root, agents, depth) in trees {
            compare(root, agents, depth);
        }
    }

    #[test]
    fn ties_keep_first() {
        let (result, ..) = compare(
            branch(vec![leaves(&[2.0, 4.0]), leaves(&[2.0, 3.0]), leaves(&[1.0])]),
            2,
            2,
        );
        assert_eq!(result, Some((0, 2.0)));
    }
}
