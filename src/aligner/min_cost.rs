//! Minimum alignment cost in linear space.
//!
//! The classic edit distance recurrence only ever looks one column back, so instead of the
//! full `(len1 + 1) x (len2 + 1)` matrix we keep two columns of length `len1 + 1` and swap
//! them after every symbol of the second sequence.

use std::mem;

use crate::aligner::scoring::{AlignmentCosts, Cost};

/// Order in which the symbols of both sequences are visited.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,

    /// Visit both sequences back to front. The final column then holds the costs of aligning
    /// suffixes instead of prefixes.
    Reverse,
}

impl Direction {
    #[inline(always)]
    fn symbol(self, seq: &[u8], i: usize) -> u8 {
        match self {
            Self::Forward => seq[i],
            Self::Reverse => seq[seq.len() - 1 - i],
        }
    }
}

/// The two live columns of the DP matrix.
pub struct RollingColumns {
    prev: Vec<Cost>,
    curr: Vec<Cost>,
}

impl RollingColumns {
    /// Allocate columns for a first sequence of length `len1`.
    pub fn new(len1: usize) -> Self {
        Self {
            prev: vec![0; len1 + 1],
            curr: vec![0; len1 + 1],
        }
    }

    /// Number of cells in a single column.
    fn column_len(&self) -> usize {
        self.prev.len()
    }

    /// Run the recurrence for `s1` (rows) against `s2` (columns), and return the last column.
    ///
    /// Entry `i` of the returned column is the minimum cost of aligning the first `i` symbols
    /// of `s1` with all of `s2`, where "first" follows `direction`.
    pub fn fill<C: AlignmentCosts>(&mut self, costs: &C, s1: &[u8], s2: &[u8], direction: Direction) -> &[Cost] {
        let len1 = s1.len();
        assert_eq!(self.column_len(), len1 + 1, "Rolling columns were allocated for a different sequence length!");

        let gap = costs.gap();
        for (i, cell) in self.prev.iter_mut().enumerate() {
            *cell = costs.gap_cost(i);
        }

        for j in 0..s2.len() {
            let c2 = direction.symbol(s2, j);
            self.curr[0] = costs.gap_cost(j + 1);

            for i in 1..=len1 {
                let c1 = direction.symbol(s1, i - 1);
                let diag = self.prev[i - 1] + costs.substitution(c1, c2);
                let gap_in_s2 = self.curr[i - 1] + gap;
                let gap_in_s1 = self.prev[i] + gap;

                self.curr[i] = diag.min(gap_in_s2).min(gap_in_s1);
            }

            mem::swap(&mut self.prev, &mut self.curr);
        }

        &self.prev
    }

    fn into_last_column(self) -> Vec<Cost> {
        self.prev
    }
}

/// Minimum cost of a global alignment of `s1` and `s2`.
///
/// The columns are sized after the shorter of the two sequences, which is valid because the
/// cost model is symmetric.
pub fn min_cost<C: AlignmentCosts>(costs: &C, s1: &[u8], s2: &[u8]) -> Cost {
    let (shorter, longer) = if s1.len() <= s2.len() { (s1, s2) } else { (s2, s1) };

    let mut columns = RollingColumns::new(shorter.len());
    let last = columns.fill(costs, shorter, longer, Direction::Forward);

    last[shorter.len()]
}

/// Costs of aligning every prefix (or suffix, for [`Direction::Reverse`]) of `s1` with `s2`.
///
/// The result has `s1.len() + 1` entries, indexed by the length of the prefix or suffix.
pub fn last_column<C: AlignmentCosts>(costs: &C, s1: &[u8], s2: &[u8], direction: Direction) -> Vec<Cost> {
    let mut columns = RollingColumns::new(s1.len());
    columns.fill(costs, s1, s2, direction);

    columns.into_last_column()
}
