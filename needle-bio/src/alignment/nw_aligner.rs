//! Needleman-Wunsch global alignment with affine gaps
use crate::alignment::matrix::{best_of, DpMatrices};
use crate::alignment::result::GlobalAlignment;
use crate::alignment::scoring::{ScoringMatrix, SubstitutionMatrix};
use crate::sequence::{Sequence, SequenceType};
use needle_core::error::{NeedleError, NeedleResult};
use needle_core::types::check_gap_penalty;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Affine gap model: a run of `k` gaps scores `open + k * extend`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGapPenalties")]
pub struct GapPenalties {
    open: f64,
    extend: f64,
}

/// Unchecked wire form; deserialization goes through `GapPenalties::new`
#[derive(Deserialize)]
struct RawGapPenalties {
    open: f64,
    extend: f64,
}

impl TryFrom<RawGapPenalties> for GapPenalties {
    type Error = NeedleError;

    fn try_from(raw: RawGapPenalties) -> NeedleResult<Self> {
        Self::new(raw.open, raw.extend)
    }
}

impl GapPenalties {
    /// Both penalties must be finite and not positive
    pub fn new(open: f64, extend: f64) -> NeedleResult<Self> {
        check_gap_penalty("gap_open", open)?;
        check_gap_penalty("gap_extend", extend)?;
        Ok(Self { open, extend })
    }

    pub fn open(&self) -> f64 {
        self.open
    }

    pub fn extend(&self) -> f64 {
        self.extend
    }

    /// Cost of a gap run of length `len` (0 for an empty run)
    pub fn run_cost(&self, len: usize) -> f64 {
        if len == 0 {
            0.0
        } else {
            self.open + len as f64 * self.extend
        }
    }
}

impl Default for GapPenalties {
    fn default() -> Self {
        Self {
            open: -10.0,
            extend: -1.0,
        }
    }
}

pub struct NeedlemanWunsch<S: ScoringMatrix = SubstitutionMatrix> {
    scoring: S,
    penalties: GapPenalties,
}

/// Convenience entry point choosing a builtin matrix from the sequence type
pub struct Alignment;

impl Alignment {
    /// Nucleotide table only when both sequences are nucleotide, BLOSUM62 otherwise
    pub fn global(seq_a: &Sequence, seq_b: &Sequence) -> NeedleResult<GlobalAlignment> {
        let scoring = match (seq_a.detect_type(), seq_b.detect_type()) {
            (SequenceType::Nucleotide, SequenceType::Nucleotide) => {
                SubstitutionMatrix::nucleotide_default()
            }
            _ => SubstitutionMatrix::blosum62(),
        };
        NeedlemanWunsch::with_penalties(scoring, GapPenalties::default())
            .align_sequences(seq_a, seq_b)
    }
}

impl NeedlemanWunsch<SubstitutionMatrix> {
    /// Aligner over a substitution table read from `path`
    pub fn from_matrix_file<P: AsRef<Path>>(
        path: P,
        gap_open: f64,
        gap_extend: f64,
    ) -> NeedleResult<Self> {
        let penalties = GapPenalties::new(gap_open, gap_extend)?;
        let scoring = SubstitutionMatrix::load(path)?;
        Ok(Self::with_penalties(scoring, penalties))
    }
}

impl<S: ScoringMatrix> NeedlemanWunsch<S> {
    pub fn new(scoring: S, gap_open: f64, gap_extend: f64) -> NeedleResult<Self> {
        let penalties = GapPenalties::new(gap_open, gap_extend)?;
        Ok(Self::with_penalties(scoring, penalties))
    }

    pub fn with_penalties(scoring: S, penalties: GapPenalties) -> Self {
        Self { scoring, penalties }
    }

    pub fn scoring(&self) -> &S {
        &self.scoring
    }

    pub fn penalties(&self) -> GapPenalties {
        self.penalties
    }

    pub fn gap_open(&self) -> f64 {
        self.penalties.open()
    }

    pub fn gap_extend(&self) -> f64 {
        self.penalties.extend()
    }

    /// Optimal global alignment of `seq_a` against `seq_b`
    pub fn align(&self, seq_a: &[u8], seq_b: &[u8]) -> NeedleResult<GlobalAlignment> {
        let matrices = self.fill(seq_a, seq_b)?;
        let (score, _) = matrices.optimal();
        let (aligned_a, aligned_b) = matrices.backtrace(seq_a, seq_b)?;

        tracing::debug!(
            score,
            len_a = seq_a.len(),
            len_b = seq_b.len(),
            columns = aligned_a.len(),
            "global alignment complete"
        );

        Ok(GlobalAlignment::new(score, aligned_a, aligned_b))
    }

    pub fn align_sequences(&self, seq_a: &Sequence, seq_b: &Sequence) -> NeedleResult<GlobalAlignment> {
        self.align(&seq_a.sequence, &seq_b.sequence)
    }

    /// Fill fresh M, X and Y matrices for the pair
    pub fn fill(&self, seq_a: &[u8], seq_b: &[u8]) -> NeedleResult<DpMatrices> {
        let codes_a = self.encode(seq_a)?;
        let codes_b = self.encode(seq_b)?;

        let (n, m) = (seq_a.len(), seq_b.len());
        let open = self.penalties.open();
        let extend = self.penalties.extend();
        let opening = open + extend;

        tracing::debug!(rows = n + 1, cols = m + 1, "filling affine-gap matrices");

        let mut dp = DpMatrices::new(n + 1, m + 1, self.penalties);

        dp.align[(0, 0)] = 0.0;
        dp.gap_a[(0, 0)] = open;
        dp.gap_b[(0, 0)] = open;

        // Boundary gap runs; every other boundary cell stays at -inf
        for j in 1..=m {
            dp.gap_a[(0, j)] = open + j as f64 * extend;
        }
        for i in 1..=n {
            dp.gap_b[(i, 0)] = open + i as f64 * extend;
        }

        for i in 1..=n {
            let a = codes_a[i - 1];
            for j in 1..=m {
                let sub = self.scoring.score_by_index(a, codes_b[j - 1]);

                let (diag, _) = best_of(
                    dp.align[(i - 1, j - 1)],
                    dp.gap_a[(i - 1, j - 1)],
                    dp.gap_b[(i - 1, j - 1)],
                );
                dp.align[(i, j)] = sub + diag;

                let (left, _) = best_of(
                    dp.align[(i, j - 1)] + opening,
                    dp.gap_a[(i, j - 1)] + extend,
                    dp.gap_b[(i, j - 1)] + opening,
                );
                dp.gap_a[(i, j)] = left;

                let (up, _) = best_of(
                    dp.align[(i - 1, j)] + opening,
                    dp.gap_a[(i - 1, j)] + opening,
                    dp.gap_b[(i - 1, j)] + extend,
                );
                dp.gap_b[(i, j)] = up;
            }
        }

        Ok(dp)
    }

    fn encode(&self, seq: &[u8]) -> NeedleResult<Vec<usize>> {
        seq.iter()
            .enumerate()
            .map(|(position, &symbol)| {
                self.scoring
                    .index_of(symbol)
                    .ok_or_else(|| NeedleError::unknown_symbol(symbol, position))
            })
            .collect()
    }
}
