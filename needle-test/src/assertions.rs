//! Custom assertions for testing
//!
//! Structural checks every global alignment must pass regardless of scoring.

/// Strip gap characters from an aligned row
pub fn degap(aligned: &[u8]) -> Vec<u8> {
    aligned.iter().copied().filter(|&c| c != b'-').collect()
}

/// Assert that an aligned pair is a valid global alignment of `seq_a` and `seq_b`
pub fn assert_alignment_consistent(seq_a: &[u8], seq_b: &[u8], aligned_a: &[u8], aligned_b: &[u8]) {
    assert_eq!(
        aligned_a.len(),
        aligned_b.len(),
        "Aligned rows differ in length: {:?} vs {:?}",
        String::from_utf8_lossy(aligned_a),
        String::from_utf8_lossy(aligned_b)
    );

    assert_eq!(
        degap(aligned_a),
        seq_a,
        "Row A does not reproduce its input once gaps are removed"
    );
    assert_eq!(
        degap(aligned_b),
        seq_b,
        "Row B does not reproduce its input once gaps are removed"
    );

    for (column, (&a, &b)) in aligned_a.iter().zip(aligned_b).enumerate() {
        assert!(
            !(a == b'-' && b == b'-'),
            "Column {} pairs a gap with a gap",
            column
        );
    }
}

/// Assert that a FASTA content is well formed (gapped rows allowed)
pub fn assert_valid_fasta(content: &str) {
    let lines: Vec<&str> = content.lines().collect();
    assert!(!lines.is_empty(), "FASTA content is empty");

    let mut has_header = false;
    let mut has_sequence = false;

    for line in lines {
        if let Some(header) = line.strip_prefix('>') {
            assert!(!header.trim().is_empty(), "Empty FASTA header found");
            has_header = true;
        } else if !line.is_empty() {
            assert!(
                line.chars().all(|c| c.is_ascii_alphabetic() || c == '-' || c == '*'),
                "Invalid sequence character found: {}",
                line
            );
            has_sequence = true;
        }
    }

    assert!(has_header, "No FASTA headers found");
    assert!(has_sequence, "No sequences found");
}
