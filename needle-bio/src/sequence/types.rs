use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Import SequenceType from needle-core
pub use needle_core::SequenceType;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sequence {
    pub id: String,
    pub description: Option<String>,
    pub sequence: Vec<u8>,
}

impl Sequence {
    pub fn new(id: String, sequence: Vec<u8>) -> Self {
        Self {
            id,
            description: None,
            sequence,
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Nucleotide when every residue is one of `ACGTUN`, protein otherwise
    pub fn detect_type(&self) -> SequenceType {
        if self.sequence.iter().all(|&c| is_nucleotide_code(c)) {
            SequenceType::Nucleotide
        } else {
            SequenceType::Protein
        }
    }

    pub fn as_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.sequence)
    }

    /// Header line without the leading '>'
    pub fn header(&self) -> String {
        match &self.description {
            Some(desc) => format!("{} {}", self.id, desc),
            None => self.id.clone(),
        }
    }
}

fn is_nucleotide_code(c: u8) -> bool {
    matches!(c.to_ascii_uppercase(), b'A' | b'C' | b'G' | b'T' | b'U' | b'N')
}
