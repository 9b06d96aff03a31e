use std::io::{BufRead, Write};

use noodles::fasta::{self as fasta, record::{Definition, Sequence}, Record};

use crate::aligner::PairwiseAlignment;
use crate::errors::LsAlignError;
use crate::io::NamedSequence;
use crate::sequence::{self, GAP};

/// Gap symbol used in FASTA output, the usual MSA convention.
const FASTA_GAP: u8 = b'-';

/// Read all records from a FASTA file, normalizing and validating their sequences.
pub fn read_fasta_sequences<R: BufRead>(reader: R) -> Result<Vec<NamedSequence>, LsAlignError> {
    let mut reader = fasta::io::Reader::new(reader);

    let mut sequences = Vec::new();
    for result in reader.records() {
        let record = result?;

        let name = String::from_utf8_lossy(record.name()).into_owned();
        let seq = sequence::prepare(record.sequence().as_ref().to_vec())?;

        sequences.push(NamedSequence { name, seq });
    }

    Ok(sequences)
}

fn write_record<W: Write>(writer: &mut fasta::io::Writer<W>, name: &str, seq: Vec<u8>) -> Result<(), LsAlignError> {
    let header = Definition::new(name, None);
    let record = Record::new(header, Sequence::from_iter(seq));

    writer.write_record(&record)?;

    Ok(())
}

pub fn write_sequences_fasta<W: Write>(sequences: &[NamedSequence], output: W) -> Result<(), LsAlignError> {
    let mut writer = fasta::io::Writer::new(output);

    for named in sequences {
        write_record(&mut writer, &named.name, named.seq.clone())?;
    }

    Ok(())
}

/// Write both rows of an alignment as FASTA records, with gaps as `-`.
pub fn write_alignment_fasta<W: Write>(
    alignment: &PairwiseAlignment,
    name_x: &str,
    name_y: &str,
    output: W
) -> Result<(), LsAlignError> {
    let mut writer = fasta::io::Writer::new(output);

    let to_fasta_row = |row: &[u8]| -> Vec<u8> {
        row.iter()
            .map(|&c| if c == GAP { FASTA_GAP } else { c })
            .collect()
    };

    write_record(&mut writer, name_x, to_fasta_row(alignment.aligned_x()))?;
    write_record(&mut writer, name_y, to_fasta_row(alignment.aligned_y()))?;

    Ok(())
}
