use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

#[derive(Debug)]
pub enum LsAlignError {
    /// A sequence contained a symbol outside of the nucleotide alphabet
    InvalidSymbol { symbol: u8, position: usize },

    /// The input did not provide the expected number of sequences
    SequenceCount { expected: usize, found: usize },

    /// A line in a generator input file could not be parsed
    InvalidInputLine { line: usize, content: String },

    /// A generator input file listed an insertion index before any base string
    IndexBeforeBase { line: usize },

    /// Error variant when we could not serialize an alignment report
    SerializationError { source: serde_json::Error },

    /// Other IO errors
    IOError(io::Error),

    /// Other miscellaneous lsalign errors
    Other,
}

impl Error for LsAlignError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            Self::SerializationError { ref source } => Some(source),
            Self::IOError(ref source) => Some(source),
            _ => None
        }
    }
}

impl From<io::Error> for LsAlignError {
    fn from(value: io::Error) -> Self {
        Self::IOError(value)
    }
}

impl From<serde_json::Error> for LsAlignError {
    fn from(value: serde_json::Error) -> Self {
        Self::SerializationError {
            source: value
        }
    }
}

impl Display for LsAlignError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::InvalidSymbol { symbol, position } =>
                write!(f, "Invalid symbol {:?} at position {position}, only A, C, G and T are allowed!", symbol as char),
            Self::SequenceCount { expected, found } =>
                write!(f, "Expected {expected} sequences in the input, but found {found}!"),
            Self::InvalidInputLine { line, ref content } =>
                write!(f, "Could not parse line {line} of the input: {content:?}"),
            Self::IndexBeforeBase { line } =>
                write!(f, "Line {line} lists an insertion index before any base string!"),
            Self::SerializationError { source: _ } =>
                write!(f, "Could not serialize the alignment report!"),
            Self::IOError(ref err) =>
                err.fmt(f),
            Self::Other =>
                write!(f, "lsalign error!")
        }
    }
}
