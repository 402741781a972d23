// File: crates/demo/src/main.rs
// Summary: Demo activates the status feed and renders each chart update to PNG + SVG frames.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chart_core::{ChartSize, RealtimeChart, RenderOptions, Snapshot};
use clap::Parser;
use status_feed::{FeedConfig, FeedHandle, FeedSummary, StatusFeed};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "status-chart-demo")]
#[command(about = "Render a realtime status chart as it receives simulated readings")]
struct Args {
    /// Widget width in pixels
    #[arg(long, default_value_t = 900)]
    width: u32,

    /// Plot height in pixels
    #[arg(long, default_value_t = 200)]
    height: u32,

    /// Milliseconds between new readings
    #[arg(long, default_value_t = 2000)]
    interval_ms: u64,

    /// Number of appended readings to wait for before exiting
    #[arg(long, default_value_t = 3)]
    ticks: usize,

    /// RNG seed for a reproducible label sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory for rendered frames
    #[arg(long, default_value = "target/out")]
    out: PathBuf,

    /// Simulate the user scrolling back to the start before this frame
    #[arg(long)]
    detach_after: Option<usize>,

    /// Write the final readings as JSON
    #[arg(long)]
    dump_json: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let size = ChartSize::new(args.width, args.height).context("invalid chart size")?;

    let mut config = FeedConfig::default().with_interval(Duration::from_millis(args.interval_ms));
    if let Some(seed) = args.seed {
        config = config.with_rng_seed(seed);
    }
    let feed = StatusFeed::from_config(config).context("invalid feed configuration")?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run(&args, size, feed))
}

async fn run(args: &Args, size: ChartSize, feed: StatusFeed) -> Result<()> {
    let interval = feed.config().interval;
    let mut chart = RealtimeChart::new(size);
    let opts = RenderOptions::default();

    let (handle, mut rx) = FeedHandle::activate(feed);
    let mut latest: Snapshot = rx.borrow_and_update().clone();
    render_frame(&mut chart, &latest, 0, &args.out, &opts)?;

    for frame in 1..=args.ticks {
        rx.changed().await.context("status feed stopped unexpectedly")?;
        latest = rx.borrow_and_update().clone();
        if args.detach_after == Some(frame) {
            let follow = chart.on_scroll(0.0);
            tracing::info!(frame, ?follow, "simulated scroll back to the start");
        }
        render_frame(&mut chart, &latest, frame, &args.out, &opts)?;
    }
    handle.stop().await;

    let summary = FeedSummary::of(&latest);
    println!("Realtime Status Chart");
    println!("  \u{2022} New data points added every {} seconds", interval.as_secs_f64());
    println!("  \u{2022} Current data points: {}", summary.count);
    println!("  \u{2022} Last status: {}", summary.last_status.as_deref().unwrap_or("none"));

    if let Some(path) = &args.dump_json {
        let json = serde_json::to_string_pretty(&*latest)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn render_frame(chart: &mut RealtimeChart, readings: &Snapshot, frame: usize, out: &Path, opts: &RenderOptions) -> Result<()> {
    let followed = chart.set_readings(readings);
    let png = out.join(format!("frame_{frame:03}.png"));
    chart.render_to_png(opts, &png).with_context(|| format!("rendering {}", png.display()))?;
    let svg = png.with_extension("svg");
    chart.render_to_svg(&svg).with_context(|| format!("writing {}", svg.display()))?;
    tracing::info!(
        frame,
        readings = readings.len(),
        scroll_left = chart.view().scroll_left(),
        following = chart.is_following(),
        followed,
        "wrote {}",
        png.display()
    );
    Ok(())
}
