//! Search nodes and path reconstruction.
//!
//! Nodes form a tree through shared parent links: many children may point
//! at the same parent, and a node lives as long as a frontier entry or a
//! descendant still references it.

use std::rc::Rc;

/// A state together with the context in which it was discovered.
#[derive(Debug)]
pub struct Node<S, A> {
    state: S,
    parent: Option<Rc<Node<S, A>>>,
    action: Option<A>,
    g: f64,
    h: f64,
    depth: usize,
}

impl<S, A> Node<S, A> {
    /// Creates the root node (no parent, `g = 0`).
    pub fn root(state: S, h: f64) -> Self {
        Self {
            state,
            parent: None,
            action: None,
            g: 0.0,
            h,
            depth: 0,
        }
    }

    /// Creates a child of `parent` reached via `action` at `step_cost`.
    pub fn child(parent: &Rc<Self>, action: A, state: S, step_cost: f64, h: f64) -> Self {
        Self {
            state,
            parent: Some(Rc::clone(parent)),
            action: Some(action),
            g: parent.g + step_cost,
            h,
            depth: parent.depth + 1,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn parent(&self) -> Option<&Rc<Self>> {
        self.parent.as_ref()
    }

    /// The action that produced this node (`None` for the root).
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    /// Accumulated path cost from the root.
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Heuristic estimate recorded at creation.
    pub fn h(&self) -> f64 {
        self.h
    }

    /// `g + h`, the A* ordering key.
    pub fn f(&self) -> f64 {
        self.g + self.h
    }

    /// Number of actions between the root and this node.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Iterates from this node up to the root.
    pub fn ancestors(&self) -> Ancestors<'_, S, A> {
        Ancestors { next: Some(self) }
    }
}

// Unlinks the parent chain iteratively so that dropping a very deep path
// does not recurse once per ancestor.
impl<S, A> Drop for Node<S, A> {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(rc) = next {
            match Rc::try_unwrap(rc) {
                Ok(mut node) => next = node.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// Iterator over a node and its ancestors, leaf first.
pub struct Ancestors<'a, S, A> {
    next: Option<&'a Node<S, A>>,
}

impl<'a, S, A> Iterator for Ancestors<'a, S, A> {
    type Item = &'a Node<S, A>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent.as_deref();
        Some(current)
    }
}

/// Returns the actions leading from the root to `node`, in start-to-goal order.
pub fn reconstruct<S, A: Clone>(node: &Node<S, A>) -> Vec<A> {
    let mut actions: Vec<A> = node.ancestors().filter_map(|n| n.action.clone()).collect();
    actions.reverse();
    actions
}

/// Returns the states from the root to `node` inclusive, in start-to-goal order.
pub fn reconstruct_states<S: Clone, A>(node: &Node<S, A>) -> Vec<S> {
    let mut states: Vec<S> = node.ancestors().map(|n| n.state.clone()).collect();
    states.reverse();
    states
}
