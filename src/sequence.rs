//! Nucleotide alphabet handling.
//!
//! The aligner itself assumes every symbol is one of `A`, `C`, `G` or `T`. Sequences coming
//! from files are upper-cased with [`normalize`] and checked with [`validate`] before they
//! are handed to it.

use crate::errors::LsAlignError;

/// Symbol used for gaps in aligned rows.
pub const GAP: u8 = b'_';

/// The four symbols accepted by the cost model.
pub const ALPHABET: [u8; 4] = [b'A', b'C', b'G', b'T'];

#[inline]
pub fn is_nucleotide(symbol: u8) -> bool {
    ALPHABET.contains(&symbol)
}

/// Upper-case a sequence in place.
pub fn normalize(seq: &mut [u8]) {
    seq.make_ascii_uppercase();
}

/// Check that every symbol of `seq` is part of the alphabet.
pub fn validate(seq: &[u8]) -> Result<(), LsAlignError> {
    match seq.iter().position(|&c| !is_nucleotide(c)) {
        Some(position) => Err(LsAlignError::InvalidSymbol { symbol: seq[position], position }),
        None => Ok(())
    }
}

/// Normalize and validate a sequence read from user input.
pub fn prepare(mut seq: Vec<u8>) -> Result<Vec<u8>, LsAlignError> {
    normalize(&mut seq);
    validate(&seq)?;

    Ok(seq)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(validate(b"").is_ok());
        assert!(validate(b"ACGTTGCA").is_ok());

        match validate(b"ACNT") {
            Err(LsAlignError::InvalidSymbol { symbol, position }) => {
                assert_eq!(symbol, b'N');
                assert_eq!(position, 2);
            },
            other => panic!("Unexpected result {:?}", other)
        }

        // Gaps are not valid input symbols
        assert!(validate(b"AC_T").is_err());
    }

    #[test]
    fn test_prepare_uppercases() {
        assert_eq!(prepare(b"acgT".to_vec()).unwrap(), b"ACGT".to_vec());
        assert!(prepare(b"acgu".to_vec()).is_err());
    }
}
