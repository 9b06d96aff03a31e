pub mod fasta;
pub mod input;
pub mod report;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::debug;

use crate::errors::LsAlignError;
use crate::generate::generate_all;

pub use fasta::{read_fasta_sequences, write_alignment_fasta, write_sequences_fasta};
pub use input::parse_generator_input;
pub use report::AlignmentReport;

const FASTA_EXTENSIONS: [&str; 6] = [".fa", ".fa.gz", ".fna", ".fna.gz", ".fasta", ".fasta.gz"];

/// Whether a path looks like a (possibly gzipped) FASTA file.
pub fn is_fasta_path(path: &Path) -> bool {
    let path_as_str = path.to_string_lossy();

    FASTA_EXTENSIONS.iter().any(|ext| path_as_str.ends_with(ext))
}

/// Open a file for reading, transparently decompressing it if the name ends in `.gz`.
pub fn open_reader(path: &Path) -> Result<Box<dyn BufRead>, LsAlignError> {
    let is_gzipped = path
        .file_name()
        .map(|v| v.to_string_lossy().ends_with(".gz"))
        .unwrap_or(false);

    let reader: Box<dyn BufRead> = if is_gzipped {
        Box::new(
            File::open(path)
                .map(MultiGzDecoder::new)
                .map(BufReader::new)?,
        )
    } else {
        Box::new(File::open(path).map(BufReader::new)?)
    };

    Ok(reader)
}

/// A named sequence ready for alignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedSequence {
    pub name: String,
    pub seq: Vec<u8>,
}

/// Load the sequences described by `path`.
///
/// FASTA files are read as is, any other file is treated as generator input and expanded.
/// Generator input must describe exactly two sequences.
pub fn load_sequences(path: &Path) -> Result<Vec<NamedSequence>, LsAlignError> {
    let reader = open_reader(path)?;

    let sequences = if is_fasta_path(path) {
        debug!(?path, "Reading FASTA input");
        read_fasta_sequences(reader)?
    } else {
        debug!(?path, "Reading generator input");
        let recipes = parse_generator_input(reader)?;
        if recipes.len() != 2 {
            return Err(LsAlignError::SequenceCount { expected: 2, found: recipes.len() });
        }

        generate_all(&recipes)?
            .into_iter()
            .enumerate()
            .map(|(i, seq)| NamedSequence { name: format!("seq{}", i + 1), seq })
            .collect()
    };

    Ok(sequences)
}

/// Load exactly the two sequences to align from `path`.
///
/// For FASTA input, the first two records are used.
pub fn load_sequence_pair(path: &Path) -> Result<(NamedSequence, NamedSequence), LsAlignError> {
    let sequences = load_sequences(path)?;
    let found = sequences.len();
    let is_fasta = is_fasta_path(path);

    let mut iter = sequences.into_iter();
    match (iter.next(), iter.next(), iter.next()) {
        (Some(x), Some(y), None) => Ok((x, y)),
        (Some(x), Some(y), Some(_)) if is_fasta => Ok((x, y)),
        _ => Err(LsAlignError::SequenceCount { expected: 2, found })
    }
}
