pub mod fasta;

pub use fasta::{
    parse_fasta, parse_fasta_from_bytes, read_fasta, write_fasta, write_fasta_to_writer,
    FASTA_LINE_WIDTH,
};
