use std::io::Write;
use std::time::Duration;

use serde::Serialize;

use crate::aligner::scoring::Cost;
use crate::aligner::{AlignStats, PairwiseAlignment};
use crate::errors::LsAlignError;

/// Outcome of a single alignment run, as written by the `align` subcommand.
#[derive(Clone, Debug, Serialize)]
pub struct AlignmentReport {
    pub cost: Cost,
    pub aligned_x: String,
    pub aligned_y: String,
    pub elapsed_ms: f64,
    pub stats: AlignStats,
}

impl AlignmentReport {
    pub fn new(cost: Cost, alignment: &PairwiseAlignment, elapsed: Duration, stats: AlignStats) -> Self {
        Self {
            cost,
            aligned_x: String::from_utf8_lossy(alignment.aligned_x()).into_owned(),
            aligned_y: String::from_utf8_lossy(alignment.aligned_y()).into_owned(),
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            stats,
        }
    }

    /// Peak memory used by the DP columns, in kilobytes.
    pub fn peak_aux_kb(&self) -> f64 {
        self.stats.peak_aux_bytes() as f64 / 1024.0
    }

    /// Five lines: cost, both aligned rows, elapsed milliseconds and peak DP memory in KB.
    pub fn write_text<W: Write>(&self, mut output: W) -> Result<(), LsAlignError> {
        writeln!(output, "{}", self.cost)?;
        writeln!(output, "{}", self.aligned_x)?;
        writeln!(output, "{}", self.aligned_y)?;
        writeln!(output, "{:.3}", self.elapsed_ms)?;
        writeln!(output, "{:.3}", self.peak_aux_kb())?;

        Ok(())
    }

    pub fn write_json<W: Write>(&self, mut output: W) -> Result<(), LsAlignError> {
        serde_json::to_writer_pretty(&mut output, self)?;
        writeln!(output)?;

        Ok(())
    }
}
