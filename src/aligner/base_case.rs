use crate::aligner::alignment::PairwiseAlignment;
use crate::aligner::scoring::{AlignmentCosts, Cost};
use crate::sequence::GAP;

/// Align a non-empty sequence `s` with a single symbol `c`, appending the columns to `out`.
///
/// `c` is substituted at the cheapest position of `s` if that is strictly cheaper than two gap
/// penalties, otherwise it becomes a column of its own after all of `s`. Ties between
/// positions go to the leftmost one.
pub fn align_one_char<C: AlignmentCosts>(costs: &C, s: &[u8], c: u8, out: &mut PairwiseAlignment) {
    assert!(!s.is_empty(), "Can't align a symbol against an empty sequence!");

    let insertion_cost = 2 * costs.gap();

    let mut best: Option<(usize, Cost)> = None;
    for (pos, &sc) in s.iter().enumerate() {
        let cost = costs.substitution(c, sc);
        if cost < best.map_or(insertion_cost, |(_, min)| min) {
            best = Some((pos, cost));
        }
    }

    match best {
        Some((pos, _)) => {
            for (i, &sc) in s.iter().enumerate() {
                out.push(sc, if i == pos { c } else { GAP });
            }
        },
        None => {
            out.push_deletions(s);
            out.push(GAP, c);
        }
    }
}
