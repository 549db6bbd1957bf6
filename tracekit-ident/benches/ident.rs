use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tracekit_ident::Factory;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("ident");
    for factory in [Factory::EightBytes, Factory::SixteenBytes] {
        group.bench_function(BenchmarkId::new("generate", factory.width()), |b| {
            b.iter(|| factory.generate())
        });

        let id = factory.generate();
        group.bench_function(BenchmarkId::new("from_hex", factory.width()), |b| {
            b.iter(|| factory.from_hex(id.as_str()))
        });
        group.bench_function(BenchmarkId::new("from_bytes", factory.width()), |b| {
            b.iter(|| factory.from_bytes(id.as_bytes()))
        });
    }
    group.bench_function("from_hex_malformed", |b| {
        b.iter(|| Factory::SixteenBytes.from_hex("not-a-trace-identifier"))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
