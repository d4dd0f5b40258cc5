pub mod matrix;
pub mod nw_aligner;
pub mod result;
pub mod scoring;
pub mod traceback;

pub use matrix::{DpMatrices, DpState, ScoreGrid};
pub use nw_aligner::{Alignment, GapPenalties, NeedlemanWunsch};
pub use result::{Delta, GlobalAlignment};
pub use scoring::{ScoringMatrix, SubstitutionMatrix};
pub use traceback::GAP;
