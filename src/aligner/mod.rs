pub mod alignment;
pub mod base_case;
pub mod min_cost;
pub mod scoring;

use std::mem;

use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, debug_span, trace};

pub use alignment::{print_alignment, PairwiseAlignment};
use crate::aligner::base_case::align_one_char;
use crate::aligner::min_cost::{last_column, Direction};
use crate::aligner::scoring::{AlignmentCosts, Cost, GapLinear, DNA_COSTS};

/// How the reconstructor finds the split point of the first sequence.
///
/// Both strategies select the same split: the leftmost position with the minimum combined
/// cost.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SplitSearch {
    /// Evaluate the minimum cost of both halves from scratch for every candidate position.
    Exhaustive,

    /// Compute all prefix costs against the left half and all suffix costs against the right
    /// half once, and combine them.
    #[default]
    ForwardBackward,
}

/// Bookkeeping for a single top-level alignment.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AlignStats {
    /// Number of linear-space cost evaluations
    pub min_cost_calls: usize,

    /// Number of DP cells computed over all evaluations
    pub dp_cells: u64,

    /// Deepest level of the recursion, the top-level call is depth 0
    pub max_depth: usize,

    /// Longest rolling column allocated by any evaluation
    pub peak_column_len: usize,
}

impl AlignStats {
    fn record_evaluation(&mut self, len1: usize, len2: usize) {
        self.min_cost_calls += 1;
        self.dp_cells += (len1 * len2) as u64;
        self.peak_column_len = self.peak_column_len.max(len1 + 1);
    }

    /// Peak memory held by the two rolling columns, in bytes.
    pub fn peak_aux_bytes(&self) -> usize {
        2 * self.peak_column_len * mem::size_of::<Cost>()
    }
}

#[derive(Clone, Debug)]
pub struct AlignmentResult {
    /// Cost of the alignment, summed over its columns
    pub cost: Cost,
    pub alignment: PairwiseAlignment,
    pub stats: AlignStats,
}

/// Global aligner that never stores more than two columns of the DP matrix.
///
/// The second sequence is split in half, the first sequence is cut where the combined cost of
/// both halves is minimal, and both sub-problems are solved recursively. Recursion depth is
/// logarithmic in the length of the second sequence.
pub struct LinearSpaceAligner<C>
where
    C: AlignmentCosts
{
    costs: C,
    split_search: SplitSearch,
}

impl<C> LinearSpaceAligner<C>
where
    C: AlignmentCosts
{
    pub fn new(costs: C) -> Self {
        Self {
            costs,
            split_search: SplitSearch::default(),
        }
    }

    pub fn new_with_split_search(costs: C, split_search: SplitSearch) -> Self {
        Self {
            costs,
            split_search,
        }
    }

    /// Minimum cost of a global alignment of `s1` and `s2`.
    pub fn min_cost<Seq: AsRef<[u8]> + ?Sized>(&self, s1: &Seq, s2: &Seq) -> Cost {
        min_cost::min_cost(&self.costs, s1.as_ref(), s2.as_ref())
    }

    /// Compute one optimal global alignment of `x` and `y`.
    pub fn align<Seq: AsRef<[u8]> + ?Sized>(&self, x: &Seq, y: &Seq) -> AlignmentResult {
        self.align_u8(x.as_ref(), y.as_ref())
    }

    fn align_u8(&self, x: &[u8], y: &[u8]) -> AlignmentResult {
        let span = debug_span!("linear_space_align", x_len = x.len(), y_len = y.len());
        let _enter = span.enter();

        let mut stats = AlignStats::default();
        let mut alignment = PairwiseAlignment::with_capacity(x.len() + y.len());

        self.align_recursive(x, y, 0, &mut alignment, &mut stats);

        let cost = alignment.cost(&self.costs);
        debug!(
            x_len = x.len(),
            y_len = y.len(),
            cost,
            min_cost_calls = stats.min_cost_calls,
            dp_cells = stats.dp_cells,
            max_depth = stats.max_depth,
            "Alignment done."
        );

        AlignmentResult { cost, alignment, stats }
    }

    fn align_recursive(&self, x: &[u8], y: &[u8], depth: usize, out: &mut PairwiseAlignment, stats: &mut AlignStats) {
        stats.max_depth = stats.max_depth.max(depth);

        if x.is_empty() {
            out.push_insertions(y);
            return;
        }

        if y.is_empty() {
            out.push_deletions(x);
            return;
        }

        if y.len() == 1 {
            align_one_char(&self.costs, x, y[0], out);
            return;
        }

        let (y_left, y_right) = y.split_at(y.len() / 2);
        let cut = self.find_split(x, y_left, y_right, stats);
        trace!(depth, x_len = x.len(), y_len = y.len(), cut, "Split");

        let (x_left, x_right) = x.split_at(cut);
        self.align_recursive(x_left, y_left, depth + 1, out, stats);
        self.align_recursive(x_right, y_right, depth + 1, out, stats);
    }

    /// Position `i` in `x` minimizing `cost(x[..i], y_left) + cost(x[i..], y_right)`.
    fn find_split(&self, x: &[u8], y_left: &[u8], y_right: &[u8], stats: &mut AlignStats) -> usize {
        let n = x.len();

        // position_min() returns the first of equal minima
        let split = match self.split_search {
            SplitSearch::Exhaustive => (0..=n)
                .map(|i| {
                    self.counted_min_cost(&x[..i], y_left, stats)
                        + self.counted_min_cost(&x[i..], y_right, stats)
                })
                .position_min(),
            SplitSearch::ForwardBackward => {
                let prefix_costs = last_column(&self.costs, x, y_left, Direction::Forward);
                let suffix_costs = last_column(&self.costs, x, y_right, Direction::Reverse);
                stats.record_evaluation(n, y_left.len());
                stats.record_evaluation(n, y_right.len());

                (0..=n)
                    .map(|i| prefix_costs[i] + suffix_costs[n - i])
                    .position_min()
            }
        };

        split.unwrap_or(0)
    }

    fn counted_min_cost(&self, s1: &[u8], s2: &[u8], stats: &mut AlignStats) -> Cost {
        stats.record_evaluation(s1.len().min(s2.len()), s1.len().max(s2.len()));

        min_cost::min_cost(&self.costs, s1, s2)
    }
}

impl Default for LinearSpaceAligner<GapLinear> {
    fn default() -> Self {
        Self::new(DNA_COSTS)
    }
}

/// Minimum cost of a global alignment of `s1` and `s2` under the DNA cost model.
pub fn min_cost(s1: &[u8], s2: &[u8]) -> Cost {
    min_cost::min_cost(&DNA_COSTS, s1, s2)
}

/// One optimal global alignment of `x` and `y` under the DNA cost model.
pub fn align(x: &[u8], y: &[u8]) -> PairwiseAlignment {
    LinearSpaceAligner::new(DNA_COSTS)
        .align(x, y)
        .alignment
}


#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use super::{align, min_cost, LinearSpaceAligner, SplitSearch};
    use crate::aligner::min_cost::tests::{full_matrix_cost, random_dna};
    use crate::aligner::scoring::DNA_COSTS;

    #[test]
    fn test_concrete_alignment() {
        let aln = align(b"AC", b"AG");
        assert_eq!(aln.aligned_x(), b"AC_");
        assert_eq!(aln.aligned_y(), b"A_G");
        assert_eq!(aln.cost(&DNA_COSTS), 60);
        assert_eq!(min_cost(b"AC", b"AG"), 60);
    }

    #[test]
    fn test_empty_inputs() {
        let aln = align(b"", b"");
        assert!(aln.is_empty());

        let aln = align(b"", b"ACG");
        assert_eq!(aln.aligned_x(), b"___");
        assert_eq!(aln.aligned_y(), b"ACG");

        let aln = align(b"ACGT", b"");
        assert_eq!(aln.aligned_x(), b"ACGT");
        assert_eq!(aln.aligned_y(), b"____");
        assert_eq!(aln.cost(&DNA_COSTS), 120);
    }

    #[test]
    fn test_single_symbol_second_sequence() {
        let aln = align(b"TTAT", b"A");
        assert_eq!(aln.aligned_x(), b"TTAT");
        assert_eq!(aln.aligned_y(), b"__A_");
    }

    #[test]
    fn test_identical_sequences() {
        let seq = b"ACACTGACTACTGACTGGTGACTACTGACTGG";
        let aln = align(seq, seq);
        assert_eq!(aln.aligned_x(), seq);
        assert_eq!(aln.aligned_y(), seq);
        assert_eq!(aln.cost(&DNA_COSTS), 0);
    }

    #[test]
    fn test_random_alignments_are_optimal() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let aligner = LinearSpaceAligner::new(DNA_COSTS);

        for _ in 0..150 {
            let len_x = rng.gen_range(0..40);
            let len_y = rng.gen_range(0..40);
            let x = random_dna(&mut rng, len_x);
            let y = random_dna(&mut rng, len_y);

            let result = aligner.align(&x, &y);
            let aln = &result.alignment;

            assert_eq!(aln.aligned_x().len(), aln.aligned_y().len());
            assert_eq!(aln.x(), x);
            assert_eq!(aln.y(), y);
            assert_eq!(result.cost, aln.cost(&DNA_COSTS));
            assert_eq!(result.cost, aligner.min_cost(&x, &y));
            assert_eq!(result.cost, full_matrix_cost(&DNA_COSTS, &x, &y));

            // No column may align two gaps
            assert!(aln.columns().all(|(a, b)| a != b'_' || b != b'_'));
        }
    }

    #[test]
    fn test_split_strategies_agree() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let exhaustive = LinearSpaceAligner::new_with_split_search(DNA_COSTS, SplitSearch::Exhaustive);
        let fwd_bwd = LinearSpaceAligner::new_with_split_search(DNA_COSTS, SplitSearch::ForwardBackward);

        for _ in 0..100 {
            let len_x = rng.gen_range(0..30);
            let len_y = rng.gen_range(0..30);
            let x = random_dna(&mut rng, len_x);
            let y = random_dna(&mut rng, len_y);

            let a = exhaustive.align(&x, &y);
            let b = fwd_bwd.align(&x, &y);
            assert_eq!(a.alignment, b.alignment);
            assert_eq!(a.stats.max_depth, b.stats.max_depth);
            assert!(a.stats.min_cost_calls >= b.stats.min_cost_calls);
        }

        let a = exhaustive.align(b"AC", b"AG");
        assert_eq!(a.alignment.aligned_x(), b"AC_");
    }

    #[test]
    fn test_linear_space_bound() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let x = random_dna(&mut rng, 200);
        let y = random_dna(&mut rng, 256);

        for split_search in [SplitSearch::Exhaustive, SplitSearch::ForwardBackward] {
            let aligner = LinearSpaceAligner::new_with_split_search(DNA_COSTS, split_search);
            let result = aligner.align(&x, &y);

            assert!(result.stats.peak_column_len <= x.len() + 1);
            assert_eq!(result.stats.max_depth, 8);
            assert_eq!(result.stats.peak_aux_bytes(), 2 * result.stats.peak_column_len * 4);
        }
    }

    #[test]
    fn test_non_power_of_two_lengths() {
        let x: &[u8] = b"GATTACAGATTACA";
        let y: &[u8] = b"GCATGCTTAGC";

        let result = LinearSpaceAligner::default().align(x, y);
        assert_eq!(result.cost, min_cost(x, y));
        assert_eq!(result.alignment.x(), x.to_vec());
        assert_eq!(result.alignment.y(), y.to_vec());
    }
}
