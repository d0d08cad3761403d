//! Sentence alignment between two documents, for plagiarism detection.
//!
//! Each document is a list of sentences. An alignment walks a grid of
//! `(i, j)` positions from `(0, 0)` to `(len1, len2)`: a diagonal step pairs
//! sentence `i` with sentence `j` at their edit distance, a horizontal or
//! vertical step skips one sentence at the gap penalty. The cheapest
//! alignment is found with A*; aligned pairs whose normalized similarity
//! clears a threshold are reported.

use crate::error::{Result, SearchError};
use crate::graph::{GraphProblem, GraphResult, GraphSearchConfig, GraphSearchRunner, Strategy, Successor};

/// Lowercases `text` and strips everything except word characters and
/// whitespace.
pub fn clean_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|&c| c.is_alphanumeric() || c == '_' || c.is_whitespace())
        .collect()
}

/// Character-level Levenshtein distance.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// `1 - distance / longer length`, or `None` when both are empty.
pub fn similarity(a: &str, b: &str) -> Option<f64> {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return None;
    }
    Some(1.0 - levenshtein(a, b) as f64 / longest as f64)
}

/// Alignment parameters.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignmentConfig {
    /// Cost of leaving one sentence unpaired.
    pub gap_penalty: f64,

    /// Minimum similarity in `[0, 1]` for an aligned pair to be reported.
    pub similarity_threshold: f64,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            gap_penalty: 50.0,
            similarity_threshold: 0.8,
        }
    }
}

impl AlignmentConfig {
    pub fn with_gap_penalty(mut self, penalty: f64) -> Self {
        self.gap_penalty = penalty;
        self
    }

    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.gap_penalty.is_finite() || self.gap_penalty < 0.0 {
            return Err(SearchError::InvalidConfig(format!(
                "gap_penalty must be finite and non-negative, got {}",
                self.gap_penalty
            )));
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(SearchError::InvalidConfig(format!(
                "similarity_threshold must be in [0, 1], got {}",
                self.similarity_threshold
            )));
        }
        Ok(())
    }
}

/// A step through the alignment grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Pair the next sentence of each document.
    Align,
    /// Leave the next sentence of the first document unpaired.
    SkipFirst,
    /// Leave the next sentence of the second document unpaired.
    SkipSecond,
}

/// Two aligned sentences and how similar they are.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarPair {
    pub first: usize,
    pub second: usize,
    pub similarity: f64,
}

/// Alignment of two cleaned documents.
#[derive(Debug, Clone)]
pub struct SentenceAlignment {
    first: Vec<String>,
    second: Vec<String>,
    config: AlignmentConfig,
}

impl SentenceAlignment {
    /// Cleans both documents with [`clean_text`] and validates `config`.
    pub fn new<I, J>(first: I, second: J, config: AlignmentConfig) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        J: IntoIterator,
        J::Item: AsRef<str>,
    {
        config.validate()?;
        Ok(Self {
            first: first.into_iter().map(|s| clean_text(s.as_ref())).collect(),
            second: second.into_iter().map(|s| clean_text(s.as_ref())).collect(),
            config,
        })
    }

    pub fn first(&self) -> &[String] {
        &self.first
    }

    pub fn second(&self) -> &[String] {
        &self.second
    }

    /// Finds the cheapest alignment with A*.
    pub fn align(&self) -> GraphResult<(usize, usize), Step> {
        GraphSearchRunner::run(self, &GraphSearchConfig::new(Strategy::AStar))
    }

    /// Aligned pairs along `states` at or above the similarity threshold,
    /// in alignment order.
    pub fn similar_pairs(&self, states: &[(usize, usize)]) -> Vec<SimilarPair> {
        states
            .windows(2)
            .filter_map(|pair| {
                let ((i, j), (ni, nj)) = (pair[0], pair[1]);
                if ni <= i || nj <= j {
                    return None;
                }
                let score = similarity(&self.first[i], &self.second[j])?;
                (score >= self.config.similarity_threshold).then_some(SimilarPair {
                    first: i,
                    second: j,
                    similarity: score,
                })
            })
            .collect()
    }

    /// Aligns the documents and reports the similar pairs.
    pub fn detect(&self) -> Vec<SimilarPair> {
        let result = self.align();
        self.similar_pairs(&result.states)
    }
}

impl GraphProblem for SentenceAlignment {
    type State = (usize, usize);
    type Action = Step;

    fn initial_state(&self) -> (usize, usize) {
        (0, 0)
    }

    fn is_goal(&self, &(i, j): &(usize, usize)) -> bool {
        i == self.first.len() && j == self.second.len()
    }

    fn successors(&self, &(i, j): &(usize, usize)) -> Vec<Successor<(usize, usize), Step>> {
        let gap = self.config.gap_penalty;
        let mut out = Vec::with_capacity(3);
        if i < self.first.len() && j < self.second.len() {
            let cost = levenshtein(&self.first[i], &self.second[j]) as f64;
            out.push(Successor::new(Step::Align, (i + 1, j + 1), cost));
        }
        if i < self.first.len() {
            out.push(Successor::new(Step::SkipFirst, (i + 1, j), gap));
        }
        if j < self.second.len() {
            out.push(Successor::new(Step::SkipSecond, (i, j + 1), gap));
        }
        out
    }

    /// Unpaired sentences left over from the length difference each cost a
    /// gap.
    fn heuristic(&self, &(i, j): &(usize, usize)) -> f64 {
        let rem1 = self.first.len() - i;
        let rem2 = self.second.len() - j;
        rem1.abs_diff(rem2) as f64 * self.config.gap_penalty
    }
}
