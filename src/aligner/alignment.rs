use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::aligner::scoring::{AlignmentCosts, Cost};
use crate::sequence::GAP;

/// A global alignment of two sequences, stored as two gapped rows of equal length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PairwiseAlignment {
    /// Row of the first sequence, with gaps
    aligned_x: Vec<u8>,

    /// Row of the second sequence, with gaps
    aligned_y: Vec<u8>,
}

impl PairwiseAlignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            aligned_x: Vec::with_capacity(capacity),
            aligned_y: Vec::with_capacity(capacity),
        }
    }

    /// Build an alignment from two rows.
    ///
    /// Panics if the rows differ in length.
    pub fn from_rows(aligned_x: Vec<u8>, aligned_y: Vec<u8>) -> Self {
        assert_eq!(aligned_x.len(), aligned_y.len(), "Aligned rows must have equal length!");

        Self { aligned_x, aligned_y }
    }

    #[inline]
    pub fn push(&mut self, x: u8, y: u8) {
        self.aligned_x.push(x);
        self.aligned_y.push(y);
    }

    /// Append all of `x`, aligned against gaps.
    pub fn push_deletions(&mut self, x: &[u8]) {
        self.aligned_x.extend_from_slice(x);
        self.aligned_y.extend(itertools::repeat_n(GAP, x.len()));
    }

    /// Append all of `y`, aligned against gaps.
    pub fn push_insertions(&mut self, y: &[u8]) {
        self.aligned_x.extend(itertools::repeat_n(GAP, y.len()));
        self.aligned_y.extend_from_slice(y);
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.aligned_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_x.is_empty()
    }

    pub fn aligned_x(&self) -> &[u8] {
        &self.aligned_x
    }

    pub fn aligned_y(&self) -> &[u8] {
        &self.aligned_y
    }

    pub fn columns(&self) -> impl Iterator<Item=(u8, u8)> + '_ {
        self.aligned_x.iter().copied().zip_eq(self.aligned_y.iter().copied())
    }

    /// Total cost of this alignment, summed column by column.
    pub fn cost<C: AlignmentCosts>(&self, costs: &C) -> Cost {
        self.columns()
            .map(|(x, y)| costs.column_cost(x, y))
            .sum()
    }

    /// The first sequence, with gaps removed.
    pub fn x(&self) -> Vec<u8> {
        self.aligned_x.iter().copied().filter(|&c| c != GAP).collect()
    }

    /// The second sequence, with gaps removed.
    pub fn y(&self) -> Vec<u8> {
        self.aligned_y.iter().copied().filter(|&c| c != GAP).collect()
    }
}

impl Display for PairwiseAlignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", String::from_utf8_lossy(&self.aligned_x))?;
        write!(f, "{}", String::from_utf8_lossy(&self.aligned_y))
    }
}

/// Render an alignment as three lines: the first row, a match line (`|` for matches, `*`
/// for mismatches), and the second row.
pub fn print_alignment(alignment: &PairwiseAlignment) -> String {
    let aln_chars: Vec<u8> = alignment.columns()
        .map(|(x, y)| match (x, y) {
            (GAP, _) | (_, GAP) => b' ',
            (x, y) if x == y => b'|',
            _ => b'*'
        })
        .collect();

    format!(
        "{}\n{}\n{}",
        String::from_utf8_lossy(alignment.aligned_x()),
        String::from_utf8_lossy(&aln_chars),
        String::from_utf8_lossy(alignment.aligned_y()),
    )
}
