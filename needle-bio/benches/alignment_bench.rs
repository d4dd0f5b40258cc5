use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use needle_bio::alignment::{Alignment, NeedlemanWunsch, SubstitutionMatrix};
use needle_bio::sequence::Sequence;

fn create_dna_sequence(length: usize) -> Vec<u8> {
    let bases = b"ATGC";
    (0..length).map(|i| bases[i % 4]).collect()
}

fn create_protein_sequence(length: usize) -> Vec<u8> {
    let amino_acids = b"ACDEFGHIKLMNPQRSTVWY";
    (0..length).map(|i| amino_acids[i % 20]).collect()
}

fn create_sequences_with_mutations(base: &[u8], alphabet: &[u8], mutation_rate: f64) -> Vec<u8> {
    base.iter()
        .map(|&b| {
            if rand::random::<f64>() < mutation_rate {
                alphabet[rand::random::<usize>() % alphabet.len()]
            } else {
                b
            }
        })
        .collect()
}

fn bench_dna_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("dna_alignment");
    let aligner =
        NeedlemanWunsch::new(SubstitutionMatrix::nucleotide_default(), -10.0, -1.0).unwrap();

    for length in &[50, 100, 500, 1000] {
        let ref_seq = create_dna_sequence(*length);
        let query_seq = create_sequences_with_mutations(&ref_seq, b"ACGT", 0.05);

        group.throughput(Throughput::Elements(*length as u64));

        group.bench_with_input(
            BenchmarkId::new("needleman_wunsch", length),
            &(ref_seq.clone(), query_seq.clone()),
            |b, (ref_seq, query_seq)| {
                b.iter(|| aligner.align(black_box(ref_seq), black_box(query_seq)));
            },
        );

        let ref_sequence = Sequence::new("ref".to_string(), ref_seq);
        let query_sequence = Sequence::new("query".to_string(), query_seq);

        group.bench_with_input(
            BenchmarkId::new("global_alignment", length),
            &(ref_sequence, query_sequence),
            |b, (ref_seq, query_seq)| {
                b.iter(|| Alignment::global(black_box(ref_seq), black_box(query_seq)));
            },
        );
    }

    group.finish();
}

fn bench_protein_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("protein_alignment");
    let aligner = NeedlemanWunsch::new(SubstitutionMatrix::blosum62(), -10.0, -1.0).unwrap();

    for length in &[20, 50, 100, 200] {
        let ref_seq = create_protein_sequence(*length);
        let query_seq =
            create_sequences_with_mutations(&ref_seq, b"ACDEFGHIKLMNPQRSTVWY", 0.1);

        group.throughput(Throughput::Elements(*length as u64));

        group.bench_with_input(
            BenchmarkId::new("blosum62", length),
            &(ref_seq, query_seq),
            |b, (ref_seq, query_seq)| {
                b.iter(|| aligner.align(black_box(ref_seq), black_box(query_seq)));
            },
        );
    }

    group.finish();
}

fn bench_gap_heavy_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("gap_alignment");
    let aligner =
        NeedlemanWunsch::new(SubstitutionMatrix::nucleotide_default(), -10.0, -1.0).unwrap();

    for length in &[50, 100, 200] {
        let ref_seq = create_dna_sequence(*length);

        // Drop every 10th base
        let query_seq: Vec<u8> = ref_seq
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| if i % 10 != 0 { Some(b) } else { None })
            .collect();

        group.throughput(Throughput::Elements(*length as u64));

        group.bench_with_input(
            BenchmarkId::new("with_gaps", length),
            &(ref_seq, query_seq),
            |b, (ref_seq, query_seq)| {
                b.iter(|| aligner.align(black_box(ref_seq), black_box(query_seq)));
            },
        );
    }

    group.finish();
}

fn bench_matrix_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_fill");
    let aligner = NeedlemanWunsch::new(SubstitutionMatrix::blosum62(), -10.0, -1.0).unwrap();

    for length in &[100, 300] {
        let seq = create_protein_sequence(*length);

        group.bench_with_input(BenchmarkId::new("fill_only", length), &seq, |b, seq| {
            b.iter(|| aligner.fill(black_box(seq), black_box(seq)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_dna_alignment,
    bench_protein_alignment,
    bench_gap_heavy_alignment,
    bench_matrix_fill
);
criterion_main!(benches);
