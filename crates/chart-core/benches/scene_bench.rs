use chart_core::{ChartSize, Reading, Scene};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn readings(n: usize) -> Vec<Reading> {
    const LABELS: [&str; 3] = ["low", "medium", "high"];
    (0..n)
        .map(|i| {
            let secs = i * 2;
            Reading::from_raw(
                format!("2024-03-01T{:02}:{:02}:{:02}.000Z", (secs / 3600) % 24, (secs / 60) % 60, secs % 60),
                LABELS[(i * 7 + i / 3) % 3],
            )
        })
        .collect()
}

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_build");
    let size = ChartSize::default();
    for &n in &[100usize, 1_000, 10_000] {
        let data = readings(n);
        group.bench_function(format!("readings_{n}"), |b| {
            b.iter(|| black_box(Scene::build(black_box(&data), size)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scene);
criterion_main!(benches);
