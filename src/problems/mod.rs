//! Reference problems for the search engines.
//!
//! - [`rabbits`]: rabbit leap, a small unit-cost puzzle for BFS and DFS
//! - [`peg`]: English peg solitaire on a bitboard, for greedy best-first
//! - [`alignment`]: sentence alignment with A* for plagiarism detection
//! - [`jigsaw`]: block puzzle reassembly by simulated annealing
//!
//! Boolean satisfiability lives in [`crate::sat`].

pub mod alignment;
pub mod jigsaw;
pub mod peg;
pub mod rabbits;

pub use alignment::{AlignmentConfig, SentenceAlignment};
pub use jigsaw::BlockPuzzle;
pub use peg::PegSolitaire;
pub use rabbits::RabbitLeap;
