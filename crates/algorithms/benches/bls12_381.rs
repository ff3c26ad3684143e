// Benchmarks for the BLS12-381 backend, tower, pairing and target group

use bls12381_algorithms::ec::bls12_381::{
    backend::{Backend, CpuFeatures},
    pairing, Fp, Fp12, G1Affine, G1Projective, G2Affine, G2Prepared, G2Projective, Gt,
    multi_miller_loop,
};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use num_bigint::BigUint;
use rand::rngs::OsRng;

/// Fp multiplication and squaring on every backend this CPU can run
fn bench_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("bls12_381-fp");

    for backend in Backend::available(CpuFeatures::detect()) {
        group.bench_function(format!("mul/{}", backend.name()), |b| {
            b.iter_batched(
                || (Fp::random(OsRng), Fp::random(OsRng)),
                |(x, y)| black_box(backend.mul(&x, &y)),
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("square/{}", backend.name()), |b| {
            b.iter_batched(
                || Fp::random(OsRng),
                |x| black_box(backend.square(&x)),
                BatchSize::SmallInput,
            )
        });
    }

    group.bench_function("inverse", |b| {
        b.iter_batched(
            || Fp::random(OsRng),
            |x| black_box(x.inverse()),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_fp12(c: &mut Criterion) {
    let mut group = c.benchmark_group("bls12_381-fp12");

    group.bench_function("mul", |b| {
        b.iter_batched(
            || (Fp12::random(OsRng), Fp12::random(OsRng)),
            |(x, y)| black_box(x * y),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("square", |b| {
        b.iter_batched(
            || Fp12::random(OsRng),
            |x| black_box(x.square()),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("cyclotomic_square", |b| {
        let g = *Gt::generator().as_fp12();
        b.iter(|| black_box(g.cyclotomic_square()))
    });
    group.bench_function("inverse", |b| {
        b.iter_batched(
            || Fp12::random(OsRng),
            |x| black_box(x.inverse()),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_gt(c: &mut Criterion) {
    let mut group = c.benchmark_group("bls12_381-gt");
    let g = Gt::generator();
    let e = Gt::q() - 1u32;
    let mut e_bytes = [0u8; 32];
    e_bytes.copy_from_slice(&e.to_bytes_be());

    group.bench_function("exp", |b| b.iter(|| black_box(g.exp(&e))));
    group.bench_function("exp_ct", |b| b.iter(|| black_box(g.exp_ct(&e_bytes))));
    group.bench_function("is_valid", |b| {
        b.iter(|| black_box(Gt::is_valid(g.as_fp12())))
    });

    let bytes = g.to_bytes();
    group.bench_function("from_bytes", |b| {
        b.iter(|| black_box(Gt::from_bytes(&bytes)))
    });

    group.finish();
}

fn bench_pairing(c: &mut Criterion) {
    let mut group = c.benchmark_group("bls12_381-pairing");
    let p = G1Affine::from(G1Projective::random(OsRng));
    let q = G2Affine::from(G2Projective::random(OsRng));
    let prepared = G2Prepared::from(q);

    group.bench_function("pairing", |b| b.iter(|| black_box(pairing(&p, &q))));
    group.bench_function("g2_prepare", |b| b.iter(|| black_box(G2Prepared::from(q))));
    group.bench_function("miller_loop", |b| {
        b.iter(|| black_box(multi_miller_loop(&[(&p, &prepared)])))
    });
    let f = multi_miller_loop(&[(&p, &prepared)]);
    group.bench_function("final_exponentiation", |b| {
        b.iter(|| black_box(f.final_exponentiation()))
    });

    group.finish();
}

fn bench_groups(c: &mut Criterion) {
    let mut group = c.benchmark_group("bls12_381-groups");
    let k = Gt::q() - BigUint::from(12345u32);
    let g1 = G1Projective::generator();
    let g2 = G2Projective::generator();

    group.bench_function("g1_mul", |b| b.iter(|| black_box(g1 * &k)));
    group.bench_function("g2_mul", |b| b.iter(|| black_box(g2 * &k)));

    let p = G1Affine::from(g1 * &k).to_compressed();
    group.bench_function("g1_decompress", |b| {
        b.iter(|| black_box(G1Affine::from_compressed(&p)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_backends,
    bench_fp12,
    bench_gt,
    bench_pairing,
    bench_groups
);
criterion_main!(benches);
