use anyhow::Result;
use clap::Args;
use colored::*;
use needle_bio::alignment::{ScoringMatrix, SubstitutionMatrix};

#[derive(Args)]
pub struct MatrixArgs {
    /// Builtin matrix name (BLOSUM62, NUC) or path to a matrix file
    #[arg(value_name = "NAME|PATH")]
    pub matrix: String,

    /// Also print the full score table
    #[arg(long)]
    pub show: bool,
}

pub fn run(args: MatrixArgs) -> Result<()> {
    let matrix = SubstitutionMatrix::resolve(&args.matrix)?;

    println!("{} {}", "Matrix:".bold(), matrix.name());
    println!("{} {}", "Symbols:".bold(), matrix.len());
    println!(
        "{} {}",
        "Alphabet:".bold(),
        String::from_utf8_lossy(matrix.alphabet())
    );
    println!(
        "{} {}",
        "Symmetric:".bold(),
        if matrix.is_symmetric() {
            "yes".green()
        } else {
            "no".yellow()
        }
    );

    if args.show {
        println!();
        print!("{}", matrix);
    }

    Ok(())
}
