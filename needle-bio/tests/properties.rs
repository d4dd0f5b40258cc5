//! Property tests for global alignment

use needle_bio::alignment::{
    GapPenalties, GlobalAlignment, NeedlemanWunsch, ScoringMatrix, SubstitutionMatrix, GAP,
};
use needle_test::assert_alignment_consistent;
use proptest::prelude::*;

const AMINO_ACIDS: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";

fn protein_seq(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(proptest::sample::select(AMINO_ACIDS), 0..=max_len)
}

fn dna_seq(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(
        prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')],
        0..=max_len,
    )
}

fn penalties() -> impl Strategy<Value = (f64, f64)> {
    (-20i32..=-1, -5i32..=-1).prop_map(|(open, extend)| (open as f64, extend as f64))
}

/// Score of an alignment recomputed column by column
fn rescore<S: ScoringMatrix>(scoring: &S, gaps: GapPenalties, aln: &GlobalAlignment) -> f64 {
    let mut total = 0.0;
    let mut run_a = 0;
    let mut run_b = 0;

    for (&a, &b) in aln.aligned_a.iter().zip(&aln.aligned_b) {
        if a == GAP {
            total += gaps.run_cost(run_b);
            run_b = 0;
            run_a += 1;
        } else if b == GAP {
            total += gaps.run_cost(run_a);
            run_a = 0;
            run_b += 1;
        } else {
            total += gaps.run_cost(run_a) + gaps.run_cost(run_b);
            run_a = 0;
            run_b = 0;
            total += scoring.score(a, b).unwrap();
        }
    }

    total + gaps.run_cost(run_a) + gaps.run_cost(run_b)
}

proptest! {
    #[test]
    fn gaps_removed_restore_inputs(a in protein_seq(30), b in protein_seq(30)) {
        let aligner = NeedlemanWunsch::new(SubstitutionMatrix::blosum62(), -10.0, -1.0).unwrap();
        let aln = aligner.align(&a, &b).unwrap();
        assert_alignment_consistent(&a, &b, &aln.aligned_a, &aln.aligned_b);
    }

    #[test]
    fn score_is_symmetric(a in protein_seq(25), b in protein_seq(25), (open, extend) in penalties()) {
        let aligner = NeedlemanWunsch::new(SubstitutionMatrix::blosum62(), open, extend).unwrap();
        let forward = aligner.align(&a, &b).unwrap();
        let reverse = aligner.align(&b, &a).unwrap();
        prop_assert_eq!(forward.score, reverse.score);
    }

    #[test]
    fn reported_score_matches_columns(a in protein_seq(25), b in protein_seq(25), (open, extend) in penalties()) {
        let scoring = SubstitutionMatrix::blosum62();
        let gaps = GapPenalties::new(open, extend).unwrap();
        let aligner = NeedlemanWunsch::with_penalties(scoring.clone(), gaps);

        let aln = aligner.align(&a, &b).unwrap();
        prop_assert_eq!(rescore(&scoring, gaps, &aln), aln.score);
    }

    #[test]
    fn self_alignment_has_no_gaps(seq in protein_seq(40), (open, extend) in penalties()) {
        let aligner = NeedlemanWunsch::new(SubstitutionMatrix::blosum62(), open, extend).unwrap();
        let aln = aligner.align(&seq, &seq).unwrap();

        prop_assert_eq!(&aln.aligned_a, &seq);
        prop_assert_eq!(&aln.aligned_b, &seq);
        prop_assert_eq!(aln.gap_count(), 0);
    }

    #[test]
    fn dna_alignment_is_consistent(a in dna_seq(40), b in dna_seq(40)) {
        let aligner = NeedlemanWunsch::new(SubstitutionMatrix::nucleotide_default(), -10.0, -1.0).unwrap();
        let aln = aligner.align(&a, &b).unwrap();

        assert_alignment_consistent(&a, &b, &aln.aligned_a, &aln.aligned_b);
        let id = aln.identity();
        prop_assert!((0.0..=1.0).contains(&id), "identity={} out of [0,1]", id);
    }

    #[test]
    fn empty_against_sequence_is_one_gap_run(b in protein_seq(30).prop_filter("non-empty", |s| !s.is_empty())) {
        let aligner = NeedlemanWunsch::new(SubstitutionMatrix::blosum62(), -10.0, -1.0).unwrap();
        let aln = aligner.align(b"", &b).unwrap();

        prop_assert_eq!(aln.score, aligner.penalties().run_cost(b.len()));
        prop_assert!(aln.aligned_a.iter().all(|&c| c == GAP));
        prop_assert_eq!(&aln.aligned_b, &b);
    }
}
