use super::{keep_best, GameState, Heuristic};

/// Minimax tree search with one maximizing agent (id 0) and any number of
/// minimizing agents.
///
/// Returns the first action with the highest backed up value and this value,
/// or `None` if the maximizing agent has no legal actions.
///
/// The state must not be terminal and `depth` has to be at least 1.
pub fn minimax<G, H>(game: &G, depth: usize, heuristic: &H) -> Option<(G::Action, f64)>
where
    G: GameState,
    H: Heuristic<G> + ?Sized,
{
    assert!(depth > 0, "search depth has to be at least 1");
    assert!(!game.is_terminal(), "search started on a terminal state");

    let mut best = None;
    for action in game.legal_actions(0) {
        let value = minimax_next(&game.successor(0, action), depth, 0, 0, heuristic);
        keep_best(&mut best, action, value);
    }
    best
}

/// Continues the search after `agent` has moved.
fn minimax_next<G, H>(game: &G, limit: usize, depth: usize, agent: usize, heuristic: &H) -> f64
where
    G: GameState,
    H: Heuristic<G> + ?Sized,
{
    if agent + 1 < game.num_agents() {
        min_value(game, limit, depth, agent + 1, heuristic)
    } else {
        max_value(game, limit, depth, heuristic)
    }
}

fn max_value<G, H>(game: &G, limit: usize, depth: usize, heuristic: &H) -> f64
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

    actions
        .into_iter()
        .map(|action| minimax_next(&game.successor(0, action), limit, depth, 0, heuristic))
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Adversaries do not consume depth.
fn min_value<G, H>(game: &G, limit: usize, depth: usize, agent: usize, heuristic: &H) -> f64
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

    actions
        .into_iter()
        .map(|action| {
            minimax_next(&game.successor(agent, action), limit, depth, agent, heuristic)
        })
        .fold(f64::INFINITY, f64::min)
}
