pub mod gap_linear;

pub use gap_linear::{GapLinear, DNA_COSTS};

use crate::sequence::GAP;

/// Type for storing alignment costs.
pub type Cost = u32;

/// A linear gap cost model over a fixed alphabet.
///
/// Implementations must be symmetric (`substitution(a, b) == substitution(b, a)`) and charge
/// nothing for identical symbols, the linear-space evaluator relies on both when it swaps or
/// reverses its inputs.
pub trait AlignmentCosts: Copy {
    /// Cost of aligning a symbol against a gap.
    fn gap(&self) -> Cost;

    /// Cost of aligning two (non-gap) symbols with each other.
    fn substitution(&self, a: u8, b: u8) -> Cost;

    /// Cost of a single column of a finished alignment.
    #[inline]
    fn column_cost(&self, a: u8, b: u8) -> Cost {
        if a == GAP || b == GAP {
            self.gap()
        } else {
            self.substitution(a, b)
        }
    }

    /// Cost of aligning `length` symbols against gaps.
    #[inline]
    fn gap_cost(&self, length: usize) -> Cost {
        length as Cost * self.gap()
    }
}
