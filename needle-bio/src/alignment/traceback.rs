//! Backtrace over filled affine-gap matrices

use crate::alignment::matrix::{best_of, DpMatrices, DpState};
use needle_core::error::{NeedleError, NeedleResult};

pub const GAP: u8 = b'-';

impl DpMatrices {
    /// Walk from `(len(a), len(b))` back to the origin, returning the gapped rows.
    ///
    /// The start state and every predecessor choice prefer Align, then GapA,
    /// then GapB when scores tie.
    pub fn backtrace(&self, seq_a: &[u8], seq_b: &[u8]) -> NeedleResult<(Vec<u8>, Vec<u8>)> {
        let (rows, cols) = self.shape();
        if seq_a.len() + 1 != rows || seq_b.len() + 1 != cols {
            return Err(NeedleError::Other(format!(
                "sequences of length {} and {} do not match a {}x{} matrix",
                seq_a.len(),
                seq_b.len(),
                rows,
                cols
            )));
        }

        let opening = self.penalties.open() + self.penalties.extend();
        let extend = self.penalties.extend();

        let (mut i, mut j) = (seq_a.len(), seq_b.len());
        let (_, mut state) = self.optimal();
        tracing::trace!(?state, i, j, "starting backtrace");

        let mut rev_a = Vec::with_capacity(i + j);
        let mut rev_b = Vec::with_capacity(i + j);

        while i > 0 || j > 0 {
            // On an edge only a pure gap run leads home
            if i == 0 {
                state = DpState::GapA;
            } else if j == 0 {
                state = DpState::GapB;
            }

            match state {
                DpState::Align => {
                    rev_a.push(seq_a[i - 1]);
                    rev_b.push(seq_b[j - 1]);
                    i -= 1;
                    j -= 1;
                    state = best_of(
                        self.align[(i, j)],
                        self.gap_a[(i, j)],
                        self.gap_b[(i, j)],
                    )
                    .1;
                }
                DpState::GapA => {
                    rev_a.push(GAP);
                    rev_b.push(seq_b[j - 1]);
                    j -= 1;
                    state = best_of(
                        self.align[(i, j)] + opening,
                        self.gap_a[(i, j)] + extend,
                        self.gap_b[(i, j)] + opening,
                    )
                    .1;
                }
                DpState::GapB => {
                    rev_a.push(seq_a[i - 1]);
                    rev_b.push(GAP);
                    i -= 1;
                    state = best_of(
                        self.align[(i, j)] + opening,
                        self.gap_a[(i, j)] + opening,
                        self.gap_b[(i, j)] + extend,
                    )
                    .1;
                }
            }
        }

        rev_a.reverse();
        rev_b.reverse();
        Ok((rev_a, rev_b))
    }
}
