//! Generator input files.
//!
//! ```text
//! ACTG
//! 3
//! 6
//! 1
//! TACG
//! 1
//! 2
//! 9
//! ```
//!
//! Each line of letters starts a new base string, each line of digits adds an insertion index
//! to the most recent base string. Blank lines are ignored.

use std::io::BufRead;

use crate::errors::LsAlignError;
use crate::generate::SequenceRecipe;
use crate::sequence;

pub fn parse_generator_input<R: BufRead>(reader: R) -> Result<Vec<SequenceRecipe>, LsAlignError> {
    let mut recipes: Vec<SequenceRecipe> = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        let content = line.trim();

        if content.is_empty() {
            continue;
        }

        if content.bytes().all(|c| c.is_ascii_digit()) {
            let index: usize = content.parse()
                .map_err(|_| LsAlignError::InvalidInputLine { line: line_no, content: content.to_string() })?;

            let Some(recipe) = recipes.last_mut() else {
                return Err(LsAlignError::IndexBeforeBase { line: line_no });
            };
            recipe.indices.push(index);
        } else if content.bytes().all(|c| c.is_ascii_alphabetic()) {
            let base = sequence::prepare(content.as_bytes().to_vec())?;
            recipes.push(SequenceRecipe::new(base, Vec::new()));
        } else {
            return Err(LsAlignError::InvalidInputLine { line: line_no, content: content.to_string() });
        }
    }

    Ok(recipes)
}


#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::parse_generator_input;
    use crate::errors::LsAlignError;
    use crate::generate::SequenceRecipe;

    #[test]
    fn test_parse_input() {
        let input = "ACTG\n3\n6\n1\nTACG\n1\n2\n9\n";
        let recipes = parse_generator_input(Cursor::new(input)).unwrap();

        assert_eq!(recipes, vec![
            SequenceRecipe::new(b"ACTG".to_vec(), vec![3, 6, 1]),
            SequenceRecipe::new(b"TACG".to_vec(), vec![1, 2, 9]),
        ]);
    }

    #[test]
    fn test_parse_whitespace_and_case() {
        let input = "  acgt  \r\n\n 0 \nT\n";
        let recipes = parse_generator_input(Cursor::new(input)).unwrap();

        assert_eq!(recipes, vec![
            SequenceRecipe::new(b"ACGT".to_vec(), vec![0]),
            SequenceRecipe::new(b"T".to_vec(), vec![]),
        ]);
    }

    #[test]
    fn test_index_before_base() {
        let result = parse_generator_input(Cursor::new("3\nACGT\n"));
        assert!(matches!(result, Err(LsAlignError::IndexBeforeBase { line: 1 })));
    }

    #[test]
    fn test_invalid_lines() {
        let result = parse_generator_input(Cursor::new("ACGT\n-3\n"));
        assert!(matches!(result, Err(LsAlignError::InvalidInputLine { line: 2, .. })));

        let result = parse_generator_input(Cursor::new("ACGT\n99999999999999999999999999\n"));
        assert!(matches!(result, Err(LsAlignError::InvalidInputLine { line: 2, .. })));

        let result = parse_generator_input(Cursor::new("ACXT\n"));
        assert!(matches!(result, Err(LsAlignError::InvalidSymbol { symbol: b'X', position: 2 })));
    }
}
