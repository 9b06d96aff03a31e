use std::fs;
use std::fs::File;
use std::io::{self, stdout, BufWriter, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, info, span, warn, Level};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry};

use lsalign::aligner::scoring::DNA_COSTS;
use lsalign::aligner::{print_alignment, LinearSpaceAligner, SplitSearch};
use lsalign::errors::LsAlignError;
use lsalign::io::{load_sequence_pair, load_sequences, write_alignment_fasta, write_sequences_fasta, AlignmentReport};

/// The various output formats supported by lsalign
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputType {
    /// Cost, both aligned rows, time in ms and DP memory in KB, one per line
    Text,

    /// The same report as JSON
    Json,

    /// Both aligned rows as FASTA records
    Fasta,
}

/// Strategy to locate the split point of the first sequence
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum SplitStrategy {
    /// Recompute both half costs from scratch for every candidate split
    Exhaustive,

    /// Compute prefix and suffix cost columns once per recursion level
    ForwardBackward,
}

impl From<SplitStrategy> for SplitSearch {
    fn from(value: SplitStrategy) -> Self {
        match value {
            SplitStrategy::Exhaustive => SplitSearch::Exhaustive,
            SplitStrategy::ForwardBackward => SplitSearch::ForwardBackward,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct CliArgs {
    /// Set verbosity level. Use multiple times to increase the verbosity level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<LsAlignSubcommand>,
}

#[derive(Subcommand, Debug)]
enum LsAlignSubcommand {
    /// Compute an optimal global alignment of two sequences
    Align(AlignArgs),

    /// Only compute the minimum alignment cost of two sequences
    Cost(CostArgs),

    /// Expand a generator input file and write the sequences as FASTA
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct AlignArgs {
    /// Generator input file, or a FASTA file whose first two records are aligned.
    #[clap(help_heading = "Inputs")]
    input: PathBuf,

    /// Output filename. If not given, defaults to stdout
    #[arg(short, long)]
    #[clap(help_heading = "Outputs")]
    output: Option<PathBuf>,

    /// Output file type.
    #[arg(value_enum, short = 'O', long, default_value = "text")]
    #[clap(help_heading = "Outputs")]
    output_type: OutputType,

    /// How to search for the split point at each recursion level.
    #[arg(value_enum, short = 's', long, default_value = "forward-backward")]
    #[clap(help_heading = "Alignment configuration")]
    split_search: SplitStrategy,
}

#[derive(Args, Debug)]
struct CostArgs {
    /// Generator input file, or a FASTA file whose first two records are compared.
    input: PathBuf,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Generator input file
    input: PathBuf,

    /// Output filename. If not given, defaults to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_filter(filter_layer);

    Registry::default().with(stderr_log).init();
}

/// Determine where to write output to
fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = if let Some(path) = path {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?
        }

        let file = File::create(path)
            .with_context(|| format!("Could not create output file {path:?}"))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(stdout())
    };

    Ok(writer)
}

fn align_subcommand(align_args: &AlignArgs) -> Result<()> {
    let span = span!(Level::INFO, "align_subcommand");
    let _enter = span.enter();

    let (x, y) = load_sequence_pair(&align_args.input)
        .with_context(|| format!("Could not load sequences from {:?}", align_args.input))?;
    info!("Aligning {} ({} bp) with {} ({} bp)...", x.name, x.seq.len(), y.name, y.seq.len());

    let aligner = LinearSpaceAligner::new_with_split_search(DNA_COSTS, align_args.split_search.into());

    let start = Instant::now();
    let cost = aligner.min_cost(&x.seq, &y.seq);
    let result = aligner.align(&x.seq, &y.seq);
    let elapsed = start.elapsed();

    info!("Done. Alignment cost: {} ({:.3} ms)", cost, elapsed.as_secs_f64() * 1000.0);
    if result.cost != cost {
        warn!("Alignment cost {} differs from minimum cost {}!", result.cost, cost);
    }

    if result.alignment.len() <= 200 {
        debug!("\n{}", print_alignment(&result.alignment));
    }

    let mut writer = open_output(align_args.output.as_deref())?;
    match align_args.output_type {
        OutputType::Text => AlignmentReport::new(cost, &result.alignment, elapsed, result.stats)
            .write_text(&mut writer)?,
        OutputType::Json => AlignmentReport::new(cost, &result.alignment, elapsed, result.stats)
            .write_json(&mut writer)?,
        OutputType::Fasta => write_alignment_fasta(&result.alignment, &x.name, &y.name, &mut writer)?,
    }

    writer.flush()?;

    Ok(())
}

fn cost_subcommand(cost_args: &CostArgs) -> Result<()> {
    let (x, y) = load_sequence_pair(&cost_args.input)
        .with_context(|| format!("Could not load sequences from {:?}", cost_args.input))?;

    let aligner = LinearSpaceAligner::new(DNA_COSTS);
    let cost = aligner.min_cost(&x.seq, &y.seq);
    debug!("{} vs {}: {}", x.name, y.name, cost);

    println!("{cost}");

    Ok(())
}

fn generate_subcommand(generate_args: &GenerateArgs) -> Result<()> {
    let sequences = load_sequences(&generate_args.input)
        .with_context(|| format!("Could not load sequences from {:?}", generate_args.input))?;

    for named in &sequences {
        info!("Generated {} ({} bp)", named.name, named.seq.len());
    }

    let mut writer = open_output(generate_args.output.as_deref())?;
    write_sequences_fasta(&sequences, &mut writer)?;
    writer.flush()?;

    Ok(())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    match &args.command {
        Some(LsAlignSubcommand::Align(v)) => align_subcommand(v)?,
        Some(LsAlignSubcommand::Cost(v)) => cost_subcommand(v)?,
        Some(LsAlignSubcommand::Generate(v)) => generate_subcommand(v)?,
        None => return Err(LsAlignError::Other).with_context(|| "No subcommand given.".to_string()),
    };

    Ok(())
}
