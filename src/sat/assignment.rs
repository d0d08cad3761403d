//! Boolean assignments and literals.

use std::fmt;

use rand::Rng;

/// A variable or its negation. Variables are 0-based indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Literal {
    pub var: usize,
    pub negated: bool,
}

impl Literal {
    /// The positive literal of `var`.
    pub fn pos(var: usize) -> Self {
        Self {
            var,
            negated: false,
        }
    }

    /// The negative literal of `var`.
    pub fn neg(var: usize) -> Self {
        Self { var, negated: true }
    }

    /// Parses a signed, 1-based literal (`3` is variable 2, `-3` its
    /// negation). Returns `None` for 0.
    pub fn from_signed(value: i64) -> Option<Self> {
        if value == 0 {
            return None;
        }
        let var = (value.unsigned_abs() - 1) as usize;
        Some(Self {
            var,
            negated: value < 0,
        })
    }

    /// The signed, 1-based form of this literal.
    pub fn to_signed(self) -> i64 {
        let v = self.var as i64 + 1;
        if self.negated {
            -v
        } else {
            v
        }
    }

    /// The complementary literal.
    pub fn complement(self) -> Self {
        Self {
            var: self.var,
            negated: !self.negated,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_signed())
    }
}

/// A truth value for each variable.
///
/// Only the variables are stored; a negative literal reads as the negation
/// of its variable, so a literal and its complement can never disagree and
/// flipping a variable flips both at once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    values: Vec<bool>,
}

impl Assignment {
    pub fn new(values: Vec<bool>) -> Self {
        Self { values }
    }

    /// All `n` variables false.
    pub fn all_false(n: usize) -> Self {
        Self {
            values: vec![false; n],
        }
    }

    /// Each of the `n` variables independently true with probability ½.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        Self {
            values: (0..n).map(|_| rng.random_bool(0.5)).collect(),
        }
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of variable `var`.
    ///
    /// # Panics
    ///
    /// Panics if `var` is out of range.
    pub fn get(&self, var: usize) -> bool {
        self.values[var]
    }

    /// Value of a literal. Out-of-range variables read as false.
    pub fn literal(&self, literal: Literal) -> bool {
        self.values
            .get(literal.var)
            .is_some_and(|&v| v != literal.negated)
    }

    /// Flips variable `var` (and hence its negation) in place.
    ///
    /// # Panics
    ///
    /// Panics if `var` is out of range.
    pub fn flip(&mut self, var: usize) {
        self.values[var] = !self.values[var];
    }

    /// A copy with variable `var` flipped.
    pub fn flipped(&self, var: usize) -> Self {
        let mut next = self.clone();
        next.flip(var);
        next
    }

    /// All single-variable flips, in variable order.
    pub fn flip_neighbors(&self) -> Vec<Self> {
        (0..self.len()).map(|var| self.flipped(var)).collect()
    }

    /// Number of variables set to true.
    pub fn count_true(&self) -> usize {
        self.values.iter().filter(|&&v| v).count()
    }

    pub fn values(&self) -> &[bool] {
        &self.values
    }
}

impl From<Vec<bool>> for Assignment {
    fn from(values: Vec<bool>) -> Self {
        Self::new(values)
    }
}
