//! Graph search execution loop.
//!
//! # Algorithm
//!
//! 1. Push the root node (`g = 0`) and register the start state
//! 2. Pop the next node per strategy; stop if none is left
//! 3. Goal-test the popped node and return its path on success
//! 4. Otherwise generate successors, drop duplicates, push the rest
//!
//! Duplicates are dropped at generation time. BFS, DFS and Greedy use a
//! once-only explored-set; UCS and A* keep the best known `g` per state and
//! only queue a successor when it improves on it.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use super::config::GraphSearchConfig;
use super::frontier::Frontier;
use super::node::{reconstruct, reconstruct_states, Node};
use super::types::GraphProblem;

/// Why a graph search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// A goal state was popped from the frontier.
    GoalReached,
    /// The frontier ran empty without reaching a goal.
    FrontierExhausted,
    /// The expansion budget was spent.
    BudgetExhausted,
    /// Cancelled externally.
    Cancelled,
}

/// Result of a graph search run.
#[derive(Debug, Clone)]
pub struct GraphResult<S, A> {
    /// Whether a goal was reached.
    pub found: bool,

    /// Actions from the start state to the goal. Empty when not found.
    pub path: Vec<A>,

    /// States from the start state to the goal inclusive. Empty when not found.
    pub states: Vec<S>,

    /// The goal state reached.
    pub final_state: Option<S>,

    /// Total step cost of `path`. Infinite when not found.
    pub cost: f64,

    /// Number of nodes popped and goal-tested.
    pub nodes_expanded: usize,

    /// Number of nodes created, root included.
    pub nodes_generated: usize,

    /// Largest frontier size observed.
    pub max_frontier: usize,

    /// Why the search stopped.
    pub termination: Termination,
}

impl<S, A> GraphResult<S, A> {
    /// Number of actions on the returned path.
    pub fn path_len(&self) -> usize {
        self.path.len()
    }
}

/// Executes graph search.
pub struct GraphSearchRunner;

impl GraphSearchRunner {
    /// Runs a graph search.
    pub fn run<P: GraphProblem>(
        problem: &P,
        config: &GraphSearchConfig,
    ) -> GraphResult<P::State, P::Action> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs a graph search with an optional cancellation token.
    ///
    /// A cancelled run reports `found == false` with
    /// [`Termination::Cancelled`].
    pub fn run_with_cancel<P: GraphProblem>(
        problem: &P,
        config: &GraphSearchConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> GraphResult<P::State, P::Action> {
        let strategy = config.strategy;
        debug!(
            event = "search_start",
            strategy = %strategy,
            max_expansions = config.max_expansions,
        );

        let start = problem.initial_state();
        let root_h = if strategy.uses_heuristic() {
            problem.heuristic(&start)
        } else {
            0.0
        };

        let mut explored: HashSet<P::State> = HashSet::new();
        let mut best_g: HashMap<P::State, f64> = HashMap::new();
        if strategy.tracks_best_cost() {
            best_g.insert(start.clone(), 0.0);
        } else {
            explored.insert(start.clone());
        }

        let root = Rc::new(Node::root(start, root_h));
        let mut frontier = Frontier::for_strategy(strategy);
        frontier.push(root, strategy.priority(0.0, root_h));

        let mut nodes_expanded = 0usize;
        let mut nodes_generated = 1usize;
        let mut max_frontier = 1usize;
        let mut goal = None;

        let termination = loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    break Termination::Cancelled;
                }
            }

            if config.max_expansions > 0 && nodes_expanded >= config.max_expansions {
                break Termination::BudgetExhausted;
            }

            let Some(node) = frontier.pop() else {
                break Termination::FrontierExhausted;
            };

            // Superseded by a cheaper path found after this entry was queued.
            if strategy.tracks_best_cost() {
                if let Some(&g) = best_g.get(node.state()) {
                    if node.g() > g {
                        continue;
                    }
                }
            }

            nodes_expanded += 1;

            if problem.is_goal(node.state()) {
                goal = Some(node);
                break Termination::GoalReached;
            }

            for successor in problem.successors(node.state()) {
                let g = node.g() + successor.cost;

                if strategy.tracks_best_cost() {
                    let known = best_g.get(&successor.state).copied().unwrap_or(f64::INFINITY);
                    if g >= known {
                        continue;
                    }
                    best_g.insert(successor.state.clone(), g);
                } else {
                    if explored.contains(&successor.state) {
                        continue;
                    }
                    explored.insert(successor.state.clone());
                }

                let h = if strategy.uses_heuristic() {
                    problem.heuristic(&successor.state)
                } else {
                    0.0
                };

                let child = Node::child(
                    &node,
                    successor.action,
                    successor.state,
                    successor.cost,
                    h,
                );
                let key = strategy.priority(child.g(), child.h());
                frontier.push(Rc::new(child), key);
                nodes_generated += 1;
            }

            max_frontier = max_frontier.max(frontier.len());
        };

        let result = match goal {
            Some(node) => GraphResult {
                found: true,
                path: reconstruct(&node),
                states: reconstruct_states(&node),
                final_state: Some(node.state().clone()),
                cost: node.g(),
                nodes_expanded,
                nodes_generated,
                max_frontier,
                termination,
            },
            None => GraphResult {
                found: false,
                path: Vec::new(),
                states: Vec::new(),
                final_state: None,
                cost: f64::INFINITY,
                nodes_expanded,
                nodes_generated,
                max_frontier,
                termination,
            },
        };

        debug!(
            event = "search_end",
            strategy = %strategy,
            found = result.found,
            cost = result.cost,
            path_len = result.path.len(),
            nodes_expanded,
            nodes_generated,
            max_frontier,
            termination = ?termination,
        );

        result
    }

    /// Runs one independent search per problem instance in parallel.
    ///
    /// Each search owns its frontier and explored-set; nothing is shared
    /// between instances. Results are returned in input order.
    #[cfg(feature = "parallel")]
    pub fn run_batch<P>(
        problems: &[P],
        config: &GraphSearchConfig,
    ) -> Vec<GraphResult<P::State, P::Action>>
    where
        P: GraphProblem + Sync,
        P::State: Send,
        P::Action: Send,
    {
        use rayon::prelude::*;

        problems
            .par_iter()
            .map(|problem| Self::run(problem, config))
            .collect()
    }
}
