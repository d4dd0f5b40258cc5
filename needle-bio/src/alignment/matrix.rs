//! Dense score grids for the affine-gap recurrence

use std::ops::{Index, IndexMut};

use super::nw_aligner::GapPenalties;

/// Row-major `rows x cols` grid of scores
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreGrid {
    rows: usize,
    cols: usize,
    cells: Vec<f64>,
}

impl ScoreGrid {
    pub fn new(rows: usize, cols: usize, fill: f64) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }
}

impl Index<(usize, usize)> for ScoreGrid {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        debug_assert!(i < self.rows && j < self.cols);
        &self.cells[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for ScoreGrid {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        debug_assert!(i < self.rows && j < self.cols);
        &mut self.cells[i * self.cols + j]
    }
}

/// Which of the three matrices an alignment path is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DpState {
    /// Residue against residue (M)
    Align,
    /// Gap in sequence A, residue of B consumed (X)
    GapA,
    /// Gap in sequence B, residue of A consumed (Y)
    GapB,
}

/// Best of the three candidates, ties resolved Align > GapA > GapB
#[inline]
pub(crate) fn best_of(align: f64, gap_a: f64, gap_b: f64) -> (f64, DpState) {
    if align >= gap_a && align >= gap_b {
        (align, DpState::Align)
    } else if gap_a >= gap_b {
        (gap_a, DpState::GapA)
    } else {
        (gap_b, DpState::GapB)
    }
}

/// The three filled matrices of one alignment, all shaped `(len(a)+1) x (len(b)+1)`
#[derive(Debug, Clone)]
pub struct DpMatrices {
    pub(crate) align: ScoreGrid,
    pub(crate) gap_a: ScoreGrid,
    pub(crate) gap_b: ScoreGrid,
    pub(crate) penalties: GapPenalties,
}

impl DpMatrices {
    pub(crate) fn new(rows: usize, cols: usize, penalties: GapPenalties) -> Self {
        Self {
            align: ScoreGrid::new(rows, cols, f64::NEG_INFINITY),
            gap_a: ScoreGrid::new(rows, cols, f64::NEG_INFINITY),
            gap_b: ScoreGrid::new(rows, cols, f64::NEG_INFINITY),
            penalties,
        }
    }

    /// `(len(a) + 1, len(b) + 1)`
    pub fn shape(&self) -> (usize, usize) {
        self.align.shape()
    }

    /// M: best score ending with `a[i-1]` against `b[j-1]`
    pub fn align_score(&self, i: usize, j: usize) -> f64 {
        self.align[(i, j)]
    }

    /// X: best score ending with `b[j-1]` against a gap
    pub fn gap_a_score(&self, i: usize, j: usize) -> f64 {
        self.gap_a[(i, j)]
    }

    /// Y: best score ending with `a[i-1]` against a gap
    pub fn gap_b_score(&self, i: usize, j: usize) -> f64 {
        self.gap_b[(i, j)]
    }

    pub fn align_matrix(&self) -> &ScoreGrid {
        &self.align
    }

    pub fn gap_a_matrix(&self) -> &ScoreGrid {
        &self.gap_a
    }

    pub fn gap_b_matrix(&self) -> &ScoreGrid {
        &self.gap_b
    }

    pub fn penalties(&self) -> GapPenalties {
        self.penalties
    }

    /// Optimal global score and the matrix it ends in
    pub fn optimal(&self) -> (f64, DpState) {
        let (n, m) = (self.align.rows() - 1, self.align.cols() - 1);
        best_of(self.align[(n, m)], self.gap_a[(n, m)], self.gap_b[(n, m)])
    }

    pub fn optimal_score(&self) -> f64 {
        self.optimal().0
    }
}
