//! Sequence handling and global pairwise alignment for Needle

pub mod alignment;
pub mod formats;
pub mod sequence;

// Re-export commonly used types
pub use alignment::{
    Alignment, GapPenalties, GlobalAlignment, NeedlemanWunsch, SubstitutionMatrix,
};
pub use formats::fasta::{parse_fasta, read_fasta, write_fasta};
pub use sequence::{Sequence, SequenceType};
