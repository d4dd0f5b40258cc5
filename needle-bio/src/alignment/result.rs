use crate::alignment::traceback::GAP;
use serde::{Serialize, Serializer};

/// One optimal global alignment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalAlignment {
    pub score: f64,
    #[serde(serialize_with = "as_text")]
    pub aligned_a: Vec<u8>,
    #[serde(serialize_with = "as_text")]
    pub aligned_b: Vec<u8>,
}

/// Substitution column, `position` counted on sequence A
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delta {
    pub position: usize,
    pub a: u8,
    pub b: u8,
}

fn as_text<S: Serializer>(row: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(row))
}

impl GlobalAlignment {
    pub fn new(score: f64, aligned_a: Vec<u8>, aligned_b: Vec<u8>) -> Self {
        debug_assert_eq!(aligned_a.len(), aligned_b.len());
        Self {
            score,
            aligned_a,
            aligned_b,
        }
    }

    /// `(score, aligned_a, aligned_b)` with the rows as strings
    pub fn into_tuple(self) -> (f64, String, String) {
        (
            self.score,
            String::from_utf8_lossy(&self.aligned_a).into_owned(),
            String::from_utf8_lossy(&self.aligned_b).into_owned(),
        )
    }

    /// Number of alignment columns
    pub fn len(&self) -> usize {
        self.aligned_a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_a.is_empty()
    }

    fn columns(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.aligned_a
            .iter()
            .copied()
            .zip(self.aligned_b.iter().copied())
    }

    /// Fraction of columns with identical residues (0.0 when empty)
    pub fn identity(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let matches = self.columns().filter(|&(a, b)| a == b && a != GAP).count();
        matches as f64 / self.len() as f64
    }

    /// Columns holding a gap in either row
    pub fn gap_count(&self) -> usize {
        self.columns().filter(|&(a, b)| a == GAP || b == GAP).count()
    }

    /// Maximal runs of consecutive gaps, counted per row
    pub fn gap_runs(&self) -> usize {
        fn runs(row: &[u8]) -> usize {
            row.iter()
                .enumerate()
                .filter(|&(k, &c)| c == GAP && (k == 0 || row[k - 1] != GAP))
                .count()
        }
        runs(&self.aligned_a) + runs(&self.aligned_b)
    }

    /// '|' for identical residues, '.' for substitutions, ' ' for gap columns
    pub fn match_line(&self) -> Vec<u8> {
        self.columns()
            .map(|(a, b)| {
                if a == GAP || b == GAP {
                    b' '
                } else if a == b {
                    b'|'
                } else {
                    b'.'
                }
            })
            .collect()
    }

    pub fn substitutions(&self) -> Vec<Delta> {
        let mut deltas = Vec::new();
        let mut pos_a = 0;

        for (a, b) in self.columns() {
            if a != GAP {
                if b != GAP && a != b {
                    deltas.push(Delta {
                        position: pos_a,
                        a,
                        b,
                    });
                }
                pos_a += 1;
            }
        }

        deltas
    }

    /// Three-line blocks (row A, match line, row B) wrapped at `width` columns (0 = no wrap)
    pub fn display(&self, width: usize) -> String {
        let width = if width == 0 { self.len().max(1) } else { width };
        let match_line = self.match_line();
        let mut out = String::new();

        let blocks = self
            .aligned_a
            .chunks(width)
            .zip(match_line.chunks(width))
            .zip(self.aligned_b.chunks(width));

        for (k, ((a, mid), b)) in blocks.enumerate() {
            if k > 0 {
                out.push('\n');
            }
            out.push_str(&String::from_utf8_lossy(a));
            out.push('\n');
            out.push_str(&String::from_utf8_lossy(mid));
            out.push('\n');
            out.push_str(&String::from_utf8_lossy(b));
            out.push('\n');
        }

        out
    }
}
