use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::{ArrayD, IxDyn};
use num_complex::Complex64;
use qumodes_core::Program;
use qumodes_extract::{extract_unitary, unvectorize, vectorize};
use qumodes_fock::FockBackend;

fn dense_tensor(shape: &[usize]) -> ArrayD<Complex64> {
    let len: usize = shape.iter().product();
    let data: Vec<Complex64> = (0..len)
        .map(|i| Complex64::new((i % 13) as f64, (i % 7) as f64))
        .collect();
    ArrayD::from_shape_vec(IxDyn(shape), data).unwrap()
}

fn bench_vectorize(c: &mut Criterion) {
    let mut group = c.benchmark_group("vectorize");

    for (num_modes, d) in [(1usize, 8usize), (2, 4)] {
        let t = dense_tensor(&vec![d; 4 * num_modes]);
        group.bench_function(format!("vectorize_n{}_d{}", num_modes, d), |b| {
            b.iter(|| vectorize(black_box(&t)).unwrap())
        });

        let v = vectorize(&t).unwrap();
        group.bench_function(format!("unvectorize_n{}_d{}", num_modes, d), |b| {
            b.iter(|| unvectorize(black_box(&v), num_modes).unwrap())
        });
    }

    group.finish();
}

fn bench_extract_unitary(c: &mut Criterion) {
    let backend = FockBackend::new();
    let program = Program::new(1);

    c.bench_function("extract_unitary_identity_d8", |b| {
        b.iter(|| extract_unitary(black_box(&backend), black_box(&program), 8, true).unwrap())
    });
}

criterion_group!(benches, bench_vectorize, bench_extract_unitary);
criterion_main!(benches);
