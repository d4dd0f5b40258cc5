//! Test fixtures and data generators

use needle_core::SequenceType;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

const AMINO_ACIDS: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";
const NUCLEOTIDES: &[u8] = b"ACGT";

/// FASTA record used to build input files
#[derive(Debug, Clone)]
pub struct TestSequence {
    pub id: String,
    pub description: String,
    pub sequence: String,
}

impl TestSequence {
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            sequence: sequence.into(),
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn to_fasta(&self) -> String {
        if self.description.is_empty() {
            format!(">{}\n{}\n", self.id, self.sequence)
        } else {
            format!(">{} {}\n{}\n", self.id, self.description, self.sequence)
        }
    }
}

fn alphabet_for(kind: SequenceType) -> &'static [u8] {
    match kind {
        SequenceType::Protein => AMINO_ACIDS,
        SequenceType::Nucleotide => NUCLEOTIDES,
    }
}

/// Path to a file under the workspace `data/` directory
pub fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("data")
        .join(name)
}

/// Deterministic random sequence over the 20 amino acids or ACGT
pub fn random_sequence(kind: SequenceType, length: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let alphabet = alphabet_for(kind);

    (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

/// Point substitutions plus occasional single-residue deletions
pub fn mutate(kind: SequenceType, sequence: &[u8], rate: f64, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let alphabet = alphabet_for(kind);
    let mut mutated = Vec::with_capacity(sequence.len());

    for &residue in sequence {
        let roll: f64 = rng.gen();
        if roll < rate / 2.0 {
            continue;
        }
        if roll < rate {
            mutated.push(alphabet[rng.gen_range(0..alphabet.len())]);
        } else {
            mutated.push(residue);
        }
    }

    mutated
}
