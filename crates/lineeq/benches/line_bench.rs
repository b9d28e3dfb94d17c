//! Criterion benchmarks for line construction and queries.
//! Batches of n in {16, 256, 4096} sampled lines.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use lineeq::line2::rand::{draw_lines, SamplerCfg};
use lineeq::LineEquation;
use nalgebra::Vector2;

fn bench_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("line2");
    for &n in &[16usize, 256, 4096] {
        let draws = draw_lines(SamplerCfg::default(), 43, n);

        group.bench_with_input(BenchmarkId::new("from_points", n), &draws, |b, draws| {
            b.iter(|| {
                draws
                    .iter()
                    .map(|(_, [p1, p2])| LineEquation::from_points(*p1, *p2).slope())
                    .sum::<f64>()
            })
        });

        group.bench_with_input(BenchmarkId::new("distance_to", n), &draws, |b, draws| {
            b.iter(|| {
                draws
                    .iter()
                    .map(|(l, _)| l.distance_to(0.5, -0.25))
                    .sum::<f64>()
            })
        });

        group.bench_with_input(BenchmarkId::new("shift_to", n), &n, |b, &n| {
            let target = Vector2::new(0.3, -0.2);
            b.iter_batched(
                || draw_lines(SamplerCfg::default(), 44, n),
                |draws| {
                    for (l, _) in draws {
                        let _s = l.shift_to(target);
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lines);
criterion_main!(benches);
