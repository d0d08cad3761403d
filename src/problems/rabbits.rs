//! Rabbit leap: east-bound and west-bound rabbits swap sides on a line of
//! stones.
//!
//! `n` east-facing rabbits start on the left, `n` west-facing rabbits on the
//! right, with one empty stone between them. A rabbit may only move forward,
//! either sliding onto the adjacent empty stone or jumping over exactly one
//! rabbit onto it. The goal mirrors the start.

use std::fmt;

use crate::graph::{GraphProblem, Successor};

/// Contents of one stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    /// Rabbit moving right.
    East,
    /// Rabbit moving left.
    West,
    Empty,
}

impl Stone {
    fn symbol(self) -> char {
        match self {
            Stone::East => 'E',
            Stone::West => 'W',
            Stone::Empty => '_',
        }
    }
}

/// A rabbit move, identified by the stone it leaves and the stone it lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hop {
    Slide { from: usize, to: usize },
    Jump { from: usize, to: usize },
}

/// A line of stones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line(Vec<Stone>);

impl Line {
    /// Index of the empty stone.
    pub fn gap(&self) -> Option<usize> {
        self.0.iter().position(|&s| s == Stone::Empty)
    }

    pub fn stones(&self) -> &[Stone] {
        &self.0
    }

    fn moved(&self, from: usize, to: usize) -> Self {
        let mut next = self.0.clone();
        next.swap(from, to);
        Line(next)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stone) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", stone.symbol())?;
        }
        Ok(())
    }
}

/// The rabbit leap puzzle with `per_side` rabbits on each side.
#[derive(Debug, Clone, Copy)]
pub struct RabbitLeap {
    per_side: usize,
}

impl RabbitLeap {
    pub fn new(per_side: usize) -> Self {
        Self { per_side }
    }

    fn arrange(&self, left: Stone, right: Stone) -> Line {
        let mut stones = vec![left; self.per_side];
        stones.push(Stone::Empty);
        stones.extend(std::iter::repeat_n(right, self.per_side));
        Line(stones)
    }

    /// East rabbits left, west rabbits right.
    pub fn start(&self) -> Line {
        self.arrange(Stone::East, Stone::West)
    }

    /// West rabbits left, east rabbits right.
    pub fn goal(&self) -> Line {
        self.arrange(Stone::West, Stone::East)
    }
}

impl GraphProblem for RabbitLeap {
    type State = Line;
    type Action = Hop;

    fn initial_state(&self) -> Line {
        self.start()
    }

    fn is_goal(&self, state: &Line) -> bool {
        *state == self.goal()
    }

    /// Order: east slide, west slide, east jump, west jump.
    fn successors(&self, state: &Line) -> Vec<Successor<Line, Hop>> {
        let Some(gap) = state.gap() else {
            return Vec::new();
        };
        let stones = state.stones();
        let mut out = Vec::with_capacity(4);

        if gap >= 1 && stones[gap - 1] == Stone::East {
            let hop = Hop::Slide { from: gap - 1, to: gap };
            out.push(Successor::unit(hop, state.moved(gap - 1, gap)));
        }
        if gap + 1 < stones.len() && stones[gap + 1] == Stone::West {
            let hop = Hop::Slide { from: gap + 1, to: gap };
            out.push(Successor::unit(hop, state.moved(gap + 1, gap)));
        }
        if gap >= 2 && stones[gap - 2] == Stone::East {
            let hop = Hop::Jump { from: gap - 2, to: gap };
            out.push(Successor::unit(hop, state.moved(gap - 2, gap)));
        }
        if gap + 2 < stones.len() && stones[gap + 2] == Stone::West {
            let hop = Hop::Jump { from: gap + 2, to: gap };
            out.push(Successor::unit(hop, state.moved(gap + 2, gap)));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphSearchConfig, GraphSearchRunner, Strategy};

    #[test]
    fn test_start_and_goal_layout() {
        let puzzle = RabbitLeap::new(3);
        assert_eq!(puzzle.start().to_string(), "E E E _ W W W");
        assert_eq!(puzzle.goal().to_string(), "W W W _ E E E");
    }

    #[test]
    fn test_opening_moves() {
        let puzzle = RabbitLeap::new(3);
        let moves: Vec<Hop> = puzzle
            .successors(&puzzle.start())
            .into_iter()
            .map(|s| s.action)
            .collect();
        assert_eq!(
            moves,
            vec![
                Hop::Slide { from: 2, to: 3 },
                Hop::Slide { from: 4, to: 3 },
                Hop::Jump { from: 1, to: 3 },
                Hop::Jump { from: 5, to: 3 },
            ]
        );
    }

    #[test]
    fn test_bfs_finds_fifteen_move_solution() {
        let puzzle = RabbitLeap::new(3);
        let result = GraphSearchRunner::run(&puzzle, &GraphSearchConfig::new(Strategy::BreadthFirst));

        assert!(result.found);
        assert_eq!(result.path_len(), 15);
        assert_eq!(result.states.first(), Some(&puzzle.start()));
        assert_eq!(result.final_state, Some(puzzle.goal()));
    }

    #[test]
    fn test_dfs_path_is_legal() {
        let puzzle = RabbitLeap::new(3);
        let result = GraphSearchRunner::run(&puzzle, &GraphSearchConfig::new(Strategy::DepthFirst));

        assert!(result.found);
        assert!(result.path_len() >= 15);
        for pair in result.states.windows(2) {
            let legal = puzzle
                .successors(&pair[0])
                .into_iter()
                .any(|s| s.state == pair[1]);
            assert!(legal, "illegal move {} -> {}", pair[0], pair[1]);
        }
        assert_eq!(result.states.last(), Some(&puzzle.goal()));
    }

    #[test]
    fn test_bfs_move_count_is_n_times_n_plus_two() {
        for n in 1..=4 {
            let result =
                GraphSearchRunner::run(&RabbitLeap::new(n), &GraphSearchConfig::default());
            assert_eq!(result.path_len(), n * (n + 2));
        }
    }

    #[test]
    fn test_empty_line_is_already_solved() {
        let result = GraphSearchRunner::run(&RabbitLeap::new(0), &GraphSearchConfig::default());
        assert!(result.found);
        assert!(result.path.is_empty());
        assert_eq!(result.nodes_expanded, 1);
    }
}
