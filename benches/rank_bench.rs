use criterion::{black_box, criterion_group, criterion_main, Criterion};
use unrank::{MultisetPermutations, Permutations};

fn bench_arrangements(c: &mut Criterion) {
    let mut group = c.benchmark_group("arrangements");

    group.bench_function("permutation_successor_cycle", |b| {
        let mut gen = Permutations::new(8, 5).unwrap();
        let total = gen.total_count();
        b.iter(|| {
            for _ in 0..total {
                black_box(gen.successor());
            }
        })
    });

    group.bench_function("permutation_unrank", |b| {
        let gen = Permutations::new(8, 5).unwrap();
        let total = gen.total_count();
        b.iter(|| {
            for k in 0..total {
                black_box(gen.unrank(k));
            }
        })
    });

    group.bench_function("multiset_successor_cycle", |b| {
        let mut gen = MultisetPermutations::new(&[3, 3, 2, 2, 1], 6).unwrap();
        let total = gen.total_count();
        b.iter(|| {
            for _ in 0..total {
                black_box(gen.successor());
            }
        })
    });

    group.bench_function("multiset_unrank", |b| {
        let gen = MultisetPermutations::new(&[3, 3, 2, 2, 1], 6).unwrap();
        let total = gen.total_count();
        b.iter(|| {
            for k in (0..total).step_by(7) {
                black_box(gen.unrank(k));
            }
        })
    });
}

criterion_group!(benches, bench_arrangements);
criterion_main!(benches);
