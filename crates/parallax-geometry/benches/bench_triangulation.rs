use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use parallax_geometry::{NormalizedPoint, RigConfig, Triangulator};

fn generate_correspondences() -> Vec<(NormalizedPoint, NormalizedPoint)> {
    // Grid over the overlap region: disparity shrinks with depth, vertical
    // coordinate sweeps the frame.
    let mut pairs = Vec::new();
    for i in 1..20 {
        for j in 1..20 {
            let disparity = 0.02 * i as f64;
            let y = 0.05 * j as f64;
            pairs.push((
                NormalizedPoint::new(0.5 + disparity / 2.0, y),
                NormalizedPoint::new(0.5 - disparity / 2.0, y),
            ));
        }
    }
    pairs
}

fn bench_triangulate(c: &mut Criterion) {
    let rig = Triangulator::new(RigConfig::new(120.0, 70.3)).expect("valid rig");
    let pairs = generate_correspondences();

    let mut group = c.benchmark_group("triangulate");
    group.throughput(Throughput::Elements(pairs.len() as u64));
    group.bench_function("grid", |b| {
        b.iter(|| {
            for (left, right) in &pairs {
                let _ = std::hint::black_box(rig.triangulate(*left, *right));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_triangulate);
criterion_main!(benches);
