//! Block puzzle: reassemble a square grayscale image cut into square blocks.
//!
//! The image is stored row-major. Cost counts the absolute pixel differences
//! across every block boundary, so a correctly assembled smooth image scores
//! low. The perturbation swaps two distinct blocks.

use rand::seq::index;
use rand::Rng;

use crate::error::{Result, SearchError};
use crate::sa::SaProblem;

/// A square image of `side × side` pixels cut into
/// `blocks_per_side × blocks_per_side` blocks.
#[derive(Debug, Clone, Copy)]
pub struct BlockPuzzle {
    side: usize,
    blocks_per_side: usize,
    block: usize,
}

impl BlockPuzzle {
    /// # Errors
    ///
    /// [`SearchError::InvalidProblem`] unless `blocks_per_side` is at least 2
    /// and divides `side`.
    pub fn new(side: usize, blocks_per_side: usize) -> Result<Self> {
        if blocks_per_side < 2 {
            return Err(SearchError::InvalidProblem(
                "need at least two blocks per side".into(),
            ));
        }
        if side == 0 || side % blocks_per_side != 0 {
            return Err(SearchError::InvalidProblem(format!(
                "image side {side} is not a multiple of {blocks_per_side} blocks"
            )));
        }
        Ok(Self {
            side,
            blocks_per_side,
            block: side / blocks_per_side,
        })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn block_size(&self) -> usize {
        self.block
    }

    pub fn num_blocks(&self) -> usize {
        self.blocks_per_side * self.blocks_per_side
    }

    /// Checks that `image` holds exactly `side × side` pixels.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidProblem`] on a length mismatch.
    pub fn check_image(&self, image: &[u8]) -> Result<()> {
        if image.len() != self.side * self.side {
            return Err(SearchError::InvalidProblem(format!(
                "image has {} pixels, expected {}",
                image.len(),
                self.side * self.side
            )));
        }
        Ok(())
    }

    /// Returns a copy of `image` with blocks `a` and `b` exchanged. Blocks
    /// are numbered row-major.
    ///
    /// `image` must pass [`check_image`](Self::check_image) and both blocks
    /// must be below [`num_blocks`](Self::num_blocks).
    pub fn swap_blocks(&self, image: &[u8], a: usize, b: usize) -> Vec<u8> {
        debug_assert_eq!(image.len(), self.side * self.side);
        let mut out = image.to_vec();
        let (ra, ca) = (a / self.blocks_per_side * self.block, a % self.blocks_per_side * self.block);
        let (rb, cb) = (b / self.blocks_per_side * self.block, b % self.blocks_per_side * self.block);
        for x in 0..self.block {
            let row_a = (ra + x) * self.side + ca;
            let row_b = (rb + x) * self.side + cb;
            out[row_a..row_a + self.block].copy_from_slice(&image[row_b..row_b + self.block]);
            out[row_b..row_b + self.block].copy_from_slice(&image[row_a..row_a + self.block]);
        }
        out
    }
}

impl SaProblem for BlockPuzzle {
    type Solution = Vec<u8>;

    fn cost(&self, image: &Vec<u8>) -> f64 {
        debug_assert_eq!(image.len(), self.side * self.side);
        let n = self.side;
        let px = |i: usize, j: usize| i64::from(image[i * n + j]);
        let mut total = 0i64;
        for i in 0..n {
            for j in 0..n {
                if j + 1 != n && (j + 1) % self.block == 0 {
                    total += (px(i, j) - px(i, j + 1)).abs();
                }
                if i + 1 != n && (i + 1) % self.block == 0 {
                    total += (px(i, j) - px(i + 1, j)).abs();
                }
            }
        }
        total as f64
    }

    fn neighbor<R: Rng>(&self, image: &Vec<u8>, rng: &mut R) -> Vec<u8> {
        let picked = index::sample(rng, self.num_blocks(), 2);
        self.swap_blocks(image, picked.index(0), picked.index(1))
    }
}
