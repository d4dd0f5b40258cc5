use anyhow::{Context, Result};
use clap::Args;
use needle_bio::alignment::{NeedlemanWunsch, SubstitutionMatrix};
use needle_bio::formats::fasta::read_fasta;
use needle_core::{Config, OutputFormat};
use std::path::PathBuf;

use crate::cli::output::{emit, AlignmentReport};

#[derive(Args)]
pub struct AlignArgs {
    /// FASTA file holding the first sequence
    #[arg(value_name = "SEQ_A")]
    pub seq_a: PathBuf,

    /// FASTA file holding the second sequence
    #[arg(value_name = "SEQ_B")]
    pub seq_b: PathBuf,

    /// Builtin matrix name (BLOSUM62, NUC) or path to a matrix file
    #[arg(short, long, value_name = "NAME|PATH")]
    pub matrix: Option<String>,

    /// Gap opening penalty (<= 0)
    #[arg(long, allow_negative_numbers = true)]
    pub gap_open: Option<f64>,

    /// Gap extension penalty (<= 0)
    #[arg(long, allow_negative_numbers = true)]
    pub gap_extend: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Wrap alignment rows at this many columns (0 = no wrap)
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Write the result to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: AlignArgs, config: &Config) -> Result<()> {
    let matrix_name = args
        .matrix
        .as_deref()
        .unwrap_or(&config.alignment.matrix);
    let gap_open = args.gap_open.unwrap_or(config.alignment.gap_open);
    let gap_extend = args.gap_extend.unwrap_or(config.alignment.gap_extend);
    let format = args.format.unwrap_or(config.output.format);
    let width = args.width.unwrap_or(config.output.line_width);

    let matrix = SubstitutionMatrix::resolve(matrix_name)
        .with_context(|| format!("Failed to load substitution matrix '{}'", matrix_name))?;
    let aligner = NeedlemanWunsch::new(matrix, gap_open, gap_extend)?;

    let (seq_a, header_a) = read_fasta(&args.seq_a)
        .with_context(|| format!("Failed to read {}", args.seq_a.display()))?;
    let (seq_b, header_b) = read_fasta(&args.seq_b)
        .with_context(|| format!("Failed to read {}", args.seq_b.display()))?;

    tracing::info!(
        a = %header_a,
        b = %header_b,
        len_a = seq_a.len(),
        len_b = seq_b.len(),
        matrix = matrix_name,
        gap_open,
        gap_extend,
        "aligning"
    );

    let alignment = aligner.align(&seq_a, &seq_b)?;
    let report = AlignmentReport::new(alignment, header_a, header_b);

    emit(args.output.as_deref(), &report.render(format, width)?)
}
