//! Peg solitaire on the English 33-hole cross board.
//!
//! The board lives on a 7×7 grid; the four 2×2 corners are not holes. A move
//! jumps a marble horizontally or vertically over an adjacent marble into an
//! empty hole two cells away, removing the jumped marble. The goal is a
//! single marble left in the centre hole.

use std::fmt;

use crate::error::{Result, SearchError};
use crate::graph::{GraphProblem, Successor};

const SIDE: usize = 7;
const CENTRE: (usize, usize) = (3, 3);

/// Directions as (row delta, column delta) of the landing hole: up, down,
/// left, right.
const DIRECTIONS: [(isize, isize); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];

const fn bit(row: usize, col: usize) -> u64 {
    1u64 << (row * SIDE + col)
}

const fn is_hole(row: usize, col: usize) -> bool {
    row < SIDE && col < SIDE && !((row < 2 || row > 4) && (col < 2 || col > 4))
}

const fn hole_mask() -> u64 {
    let mut mask = 0u64;
    let mut row = 0;
    while row < SIDE {
        let mut col = 0;
        while col < SIDE {
            if is_hole(row, col) {
                mask |= bit(row, col);
            }
            col += 1;
        }
        row += 1;
    }
    mask
}

/// Every hole of the cross board.
const HOLES: u64 = hole_mask();

/// Marble positions, one bit per grid cell (`row * 7 + col`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board(u64);

impl Board {
    /// A board with marbles at the given `(row, col)` holes.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidProblem`] if a position is not a hole.
    pub fn from_marbles(marbles: &[(usize, usize)]) -> Result<Self> {
        let mut bits = 0u64;
        for &(row, col) in marbles {
            if !is_hole(row, col) {
                return Err(SearchError::InvalidProblem(format!(
                    "({row}, {col}) is not a hole on the cross board"
                )));
            }
            bits |= bit(row, col);
        }
        Ok(Board(bits))
    }

    /// The standard opening: every hole filled except the centre.
    pub fn english() -> Self {
        Board(HOLES & !bit(CENTRE.0, CENTRE.1))
    }

    pub fn bits(self) -> u64 {
        self.0
    }

    pub fn marbles(self) -> u32 {
        self.0.count_ones()
    }

    pub fn has_marble(self, row: usize, col: usize) -> bool {
        is_hole(row, col) && self.0 & bit(row, col) != 0
    }

    fn is_empty_hole(self, row: usize, col: usize) -> bool {
        is_hole(row, col) && self.0 & bit(row, col) == 0
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            let line: Vec<&str> = (0..SIDE)
                .map(|col| match (is_hole(row, col), self.has_marble(row, col)) {
                    (false, _) => " ",
                    (true, true) => "o",
                    (true, false) => ".",
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// A marble jump from one hole to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jump {
    pub from: (usize, usize),
    pub to: (usize, usize),
}

/// Peg solitaire from a given opening position.
///
/// The heuristic is the number of marbles left, intended for
/// [`Strategy::Greedy`](crate::graph::Strategy::Greedy). Every move removes
/// exactly one marble, so it carries no optimality guarantee and only
/// orders the search.
#[derive(Debug, Clone, Copy)]
pub struct PegSolitaire {
    start: Board,
}

impl PegSolitaire {
    pub fn new(start: Board) -> Self {
        Self { start }
    }

    /// The classic 32-marble game.
    pub fn english() -> Self {
        Self::new(Board::english())
    }

    pub fn goal() -> Board {
        Board(bit(CENTRE.0, CENTRE.1))
    }
}

impl GraphProblem for PegSolitaire {
    type State = Board;
    type Action = Jump;

    fn initial_state(&self) -> Board {
        self.start
    }

    fn is_goal(&self, state: &Board) -> bool {
        *state == Self::goal()
    }

    /// Scans marbles row by row, trying up, down, left and right.
    fn successors(&self, state: &Board) -> Vec<Successor<Board, Jump>> {
        let board = *state;
        let mut out = Vec::new();

        for row in 0..SIDE {
            for col in 0..SIDE {
                if !board.has_marble(row, col) {
                    continue;
                }
                for (dr, dc) in DIRECTIONS {
                    let (Some(to_row), Some(to_col)) =
                        (row.checked_add_signed(dr), col.checked_add_signed(dc))
                    else {
                        continue;
                    };
                    let (mid_row, mid_col) = ((row + to_row) / 2, (col + to_col) / 2);
                    if board.has_marble(mid_row, mid_col) && board.is_empty_hole(to_row, to_col) {
                        let bits = (board.0 & !bit(row, col) & !bit(mid_row, mid_col))
                            | bit(to_row, to_col);
                        let jump = Jump {
                            from: (row, col),
                            to: (to_row, to_col),
                        };
                        out.push(Successor::unit(jump, Board(bits)));
                    }
                }
            }
        }
        out
    }

    fn heuristic(&self, state: &Board) -> f64 {
        f64::from(state.marbles())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphSearchConfig, GraphSearchRunner, Strategy};

    #[test]
    fn test_board_has_33_holes() {
        assert_eq!(HOLES.count_ones(), 33);
        assert_eq!(Board::english().marbles(), 32);
        assert!(!Board::english().has_marble(3, 3));
        assert!(!Board::english().has_marble(0, 0));
    }

    #[test]
    fn test_corner_is_rejected() {
        assert!(matches!(
            Board::from_marbles(&[(0, 1)]),
            Err(SearchError::InvalidProblem(_))
        ));
    }

    #[test]
    fn test_english_opening_moves() {
        let moves = PegSolitaire::english().successors(&Board::english());
        let jumps: Vec<Jump> = moves.iter().map(|s| s.action).collect();
        assert_eq!(
            jumps,
            vec![
                Jump { from: (1, 3), to: (3, 3) },
                Jump { from: (3, 1), to: (3, 3) },
                Jump { from: (3, 5), to: (3, 3) },
                Jump { from: (5, 3), to: (3, 3) },
            ]
        );
        for s in &moves {
            assert_eq!(s.state.marbles(), 31);
            assert!(s.state.has_marble(3, 3));
        }
    }

    #[test]
    fn test_display() {
        let board = Board::from_marbles(&[(3, 3)]).unwrap();
        let text = board.to_string();
        assert_eq!(text.lines().nth(3), Some(". . . o . . ."));
        assert_eq!(text.lines().next(), Some("    . . .    "));
    }

    fn replay_checks(problem: &PegSolitaire, config: &GraphSearchConfig) {
        let result = GraphSearchRunner::run(problem, config);
        assert!(result.found);
        assert_eq!(result.final_state, Some(PegSolitaire::goal()));

        let start = problem.initial_state().marbles() as usize;
        assert_eq!(result.path_len(), start - 1);
        for (k, state) in result.states.iter().enumerate() {
            assert_eq!(state.marbles() as usize, start - k);
        }
        for (jump, pair) in result.path.iter().zip(result.states.windows(2)) {
            assert!(pair[0].has_marble(jump.from.0, jump.from.1));
            assert!(!pair[1].has_marble(jump.from.0, jump.from.1));
            assert!(pair[1].has_marble(jump.to.0, jump.to.1));
        }
        let last = result.states.last().copied().unwrap();
        assert_eq!(last.marbles(), 1);
        assert!(last.has_marble(3, 3));
    }

    #[test]
    fn test_greedy_solves_small_position() {
        // (1,4) over (1,3), (1,2) over (2,2), (3,1) over (3,2).
        let board = Board::from_marbles(&[(3, 1), (2, 2), (1, 3), (1, 4)]).unwrap();
        replay_checks(
            &PegSolitaire::new(board),
            &GraphSearchConfig::new(Strategy::Greedy),
        );
    }

    #[test]
    fn test_unsolvable_position_exhausts() {
        let board = Board::from_marbles(&[(0, 2), (6, 4)]).unwrap();
        let result = GraphSearchRunner::run(
            &PegSolitaire::new(board),
            &GraphSearchConfig::new(Strategy::Greedy),
        );
        assert!(!result.found);
        assert_eq!(result.nodes_expanded, 1);
    }

    #[test]
    fn test_greedy_solves_english_board() {
        // Solves in roughly 11k expansions; the budget only bounds a regression.
        replay_checks(
            &PegSolitaire::english(),
            &GraphSearchConfig::new(Strategy::Greedy).with_max_expansions(100_000),
        );
    }
}
