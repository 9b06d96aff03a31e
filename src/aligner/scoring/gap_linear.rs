use crate::aligner::scoring::{AlignmentCosts, Cost};

/// Linear gap penalty with a symmetric substitution table over `A`, `C`, `G` and `T`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GapLinear {
    cost_gap: Cost,
    cost_substitution: [[Cost; 4]; 4],
}

/// The fixed DNA cost model.
pub const DNA_COSTS: GapLinear = GapLinear::new(30, [
    //  A    C    G    T
    [   0, 110,  48,  94],  // A
    [ 110,   0, 118,  48],  // C
    [  48, 118,   0, 110],  // G
    [  94,  48, 110,   0],  // T
]);

impl GapLinear {
    pub const fn new(cost_gap: Cost, cost_substitution: [[Cost; 4]; 4]) -> Self {
        Self { cost_gap, cost_substitution }
    }
}

impl Default for GapLinear {
    fn default() -> Self {
        DNA_COSTS
    }
}

/// Row/column of a nucleotide in the substitution table.
///
/// Panics on symbols outside the alphabet, input is validated before it reaches the aligner.
#[inline(always)]
fn nt_index(nt: u8) -> usize {
    match nt {
        b'A' => 0,
        b'C' => 1,
        b'G' => 2,
        b'T' => 3,
        _ => panic!("Invalid nucleotide {:?} passed to the cost model!", nt as char)
    }
}

impl AlignmentCosts for GapLinear {
    #[inline(always)]
    fn gap(&self) -> Cost {
        self.cost_gap
    }

    #[inline(always)]
    fn substitution(&self, a: u8, b: u8) -> Cost {
        self.cost_substitution[nt_index(a)][nt_index(b)]
    }
}


#[cfg(test)]
mod tests {
    use super::DNA_COSTS;
    use crate::aligner::scoring::AlignmentCosts;

    const ALPHABET: &[u8] = b"ACGT";

    #[test]
    fn test_dna_costs_symmetric() {
        for &a in ALPHABET {
            assert_eq!(DNA_COSTS.substitution(a, a), 0);

            for &b in ALPHABET {
                assert_eq!(DNA_COSTS.substitution(a, b), DNA_COSTS.substitution(b, a));
            }
        }
    }

    #[test]
    fn test_dna_cost_values() {
        assert_eq!(DNA_COSTS.gap(), 30);
        assert_eq!(DNA_COSTS.substitution(b'A', b'C'), 110);
        assert_eq!(DNA_COSTS.substitution(b'A', b'G'), 48);
        assert_eq!(DNA_COSTS.substitution(b'A', b'T'), 94);
        assert_eq!(DNA_COSTS.substitution(b'C', b'G'), 118);
        assert_eq!(DNA_COSTS.substitution(b'C', b'T'), 48);
        assert_eq!(DNA_COSTS.substitution(b'G', b'T'), 110);
    }

    #[test]
    fn test_column_cost() {
        assert_eq!(DNA_COSTS.column_cost(b'_', b'A'), 30);
        assert_eq!(DNA_COSTS.column_cost(b'T', b'_'), 30);
        assert_eq!(DNA_COSTS.column_cost(b'T', b'C'), 48);
        assert_eq!(DNA_COSTS.gap_cost(0), 0);
        assert_eq!(DNA_COSTS.gap_cost(4), 120);
    }

    #[test]
    #[should_panic]
    fn test_invalid_symbol_panics() {
        DNA_COSTS.substitution(b'N', b'A');
    }
}
