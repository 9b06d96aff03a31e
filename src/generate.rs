//! Input sequence generation by repeated self-insertion.
//!
//! A generated sequence is described by a base string and a list of indices. For every index
//! `k`, a copy of the current string is inserted right after its `k`-th symbol, doubling its
//! length.

use tracing::trace;

use crate::errors::LsAlignError;
use crate::sequence;

/// Base string and insertion indices for one generated sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceRecipe {
    pub base: Vec<u8>,
    pub indices: Vec<usize>,
}

impl SequenceRecipe {
    pub fn new(base: Vec<u8>, indices: Vec<usize>) -> Self {
        Self { base, indices }
    }

    pub fn generate(&self) -> Vec<u8> {
        generate_string(&self.base, &self.indices)
    }
}

/// Expand `base` by inserting a copy of the current string after position `k` for every
/// index `k`. Indices past the end of the string append the copy.
pub fn generate_string(base: &[u8], indices: &[usize]) -> Vec<u8> {
    let mut seq = base.to_vec();

    for &k in indices {
        let insert_at = k.saturating_add(1).min(seq.len());
        let copy = seq.clone();

        seq.splice(insert_at..insert_at, copy);
        trace!(index = k, len = seq.len(), "Inserted copy");
    }

    seq
}

/// Generate all sequences of a generator input, checking them against the alphabet.
pub fn generate_all(recipes: &[SequenceRecipe]) -> Result<Vec<Vec<u8>>, LsAlignError> {
    recipes.iter()
        .map(|recipe| {
            let seq = recipe.generate();
            sequence::validate(&seq)?;

            Ok(seq)
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::{generate_all, generate_string, SequenceRecipe};

    #[test]
    fn test_generate_string() {
        assert_eq!(generate_string(b"ACTG", &[]), b"ACTG".to_vec());
        assert_eq!(generate_string(b"ACTG", &[3]), b"ACTGACTG".to_vec());
        assert_eq!(generate_string(b"ACTG", &[3, 6]), b"ACTGACTACTGACTGG".to_vec());
        assert_eq!(generate_string(b"ACTG", &[3, 6, 1]), b"ACACTGACTACTGACTGGTGACTACTGACTGG".to_vec());
        assert_eq!(generate_string(b"TACG", &[1, 2, 9]), b"TATTATACGCTATTATACGCGACGCGGACGCG".to_vec());
    }

    #[test]
    fn test_index_past_end_appends() {
        assert_eq!(generate_string(b"AC", &[10]), b"ACAC".to_vec());
        assert_eq!(generate_string(b"", &[0]), b"".to_vec());
    }

    #[test]
    fn test_recipe_doubles_length() {
        let recipe = SequenceRecipe::new(b"TACG".to_vec(), vec![1, 2, 9]);
        assert_eq!(recipe.generate().len(), 32);
    }

    #[test]
    fn test_generate_all() {
        let recipes = vec![
            SequenceRecipe::new(b"AC".to_vec(), vec![0]),
            SequenceRecipe::new(b"G".to_vec(), vec![]),
        ];
        assert_eq!(generate_all(&recipes).unwrap(), vec![b"AACC".to_vec(), b"G".to_vec()]);
    }
}
