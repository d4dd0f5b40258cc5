//! Types shared across Needle crates

use crate::error::{NeedleError, NeedleResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type of biological sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SequenceType {
    /// Protein/amino acid sequence
    Protein,
    /// Generic nucleotide (DNA or RNA)
    Nucleotide,
}

impl SequenceType {
    pub fn is_protein(&self) -> bool {
        matches!(self, Self::Protein)
    }

    pub fn is_nucleotide(&self) -> bool {
        matches!(self, Self::Nucleotide)
    }
}

impl fmt::Display for SequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Protein => write!(f, "protein"),
            Self::Nucleotide => write!(f, "nucleotide"),
        }
    }
}

/// How an alignment is rendered by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Fasta,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Fasta => write!(f, "fasta"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "fasta" | "fa" => Ok(Self::Fasta),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Gap penalties must be finite and not positive
pub fn check_gap_penalty(name: &str, value: f64) -> NeedleResult<()> {
    if !value.is_finite() {
        return Err(NeedleError::InvalidPenalty(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    if value > 0.0 {
        return Err(NeedleError::InvalidPenalty(format!(
            "{} must be <= 0, got {}",
            name, value
        )));
    }
    Ok(())
}
