//! Synthetic game trees with fixed leaf values for testing the searches.

use std::cell::Cell;
use std::rc::Rc;

use super::GameState;

#[derive(Debug, Clone)]
pub struct Node {
    pub value: f64,
    pub children: Vec<Node>,
}

pub fn leaf(value: f64) -> Node {
    Node {
        value,
        children: Vec::new(),
    }
}

pub fn branch(children: Vec<Node>) -> Node {
    Node {
        value: 0.0,
        children,
    }
}

/// Builds a branch from leaf values.
pub fn leaves(values: &[f64]) -> Node {
    branch(values.iter().copied().map(leaf).collect())
}

/// A position in a tree, the action is the index of the child.
///
/// Leafs are terminal (won) states whose score is their value.
/// Every generated successor is counted.
#[derive(Debug, Clone)]
pub struct TreeGame {
    node: Rc<Node>,
    path: Vec<usize>,
    agents: usize,
    expanded: Rc<Cell<usize>>,
}

impl TreeGame {
    pub fn new(root: Node, agents: usize) -> TreeGame {
        TreeGame {
            node: Rc::new(root),
            path: Vec::new(),
            agents,
            expanded: Rc::new(Cell::new(0)),
        }
    }

    fn current(&self) -> &Node {
        let mut node = &*self.node;
        for &i in &self.path {
            node = &node.children[i];
        }
        node
    }

    /// Number of successors generated from this tree so far.
    pub fn expanded(&self) -> usize {
        self.expanded.get()
    }
}

impl GameState for TreeGame {
    type Action = usize;

    fn legal_actions(&self, _agent: usize) -> Vec<usize> {
        (0..self.current().children.len()).collect()
    }

    fn successor(&self, _agent: usize, action: usize) -> TreeGame {
        assert!(action < self.current().children.len(), "illegal action");
        self.expanded.set(self.expanded.get() + 1);
        let mut path = self.path.clone();
        path.push(action);
        TreeGame {
            node: self.node.clone(),
            path,
            agents: self.agents,
            expanded: self.expanded.clone(),
        }
    }

    fn is_win(&self) -> bool {
        self.current().children.is_empty()
    }

    fn is_lose(&self) -> bool {
        false
    }

    fn num_agents(&self) -> usize {
        self.agents
    }

    fn score(&self) -> f64 {
        self.current().value
    }
}
