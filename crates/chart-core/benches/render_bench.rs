use anyhow::Result;
use chart_core::{ChartSize, RealtimeChart, Reading, RenderOptions};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart(n: usize) -> RealtimeChart {
    const LABELS: [&str; 3] = ["high", "low", "medium"];
    let data: Vec<Reading> = (0..n)
        .map(|i| Reading::from_raw(format!("2024-03-01T14:{:02}:{:02}Z", (i * 2 / 60) % 60, (i * 2) % 60), LABELS[i % 3]))
        .collect();
    let mut ch = RealtimeChart::new(ChartSize::default());
    ch.set_readings(&data);
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[100usize, 5_000usize] {
        group.bench_function(format!("readings_{n}"), |b| {
            let ch = build_chart(n);
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
