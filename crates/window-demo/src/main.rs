// File: crates/window-demo/src/main.rs
// Summary: Windowed status chart fed live by the status feed; RGBA blit (CPU) via winit + softbuffer.
// Controls: mouse wheel / trackpad scrolls horizontally, Home jumps to the start, End to the newest reading.

use std::num::NonZeroU32;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use chart_core::{ChartSize, RealtimeChart, RenderOptions};
use clap::Parser;
use status_feed::{FeedConfig, FeedHandle, FeedSummary, StatusFeed};
use tracing_subscriber::EnvFilter;
use winit::event::{ElementState, Event, KeyboardInput, MouseScrollDelta, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Pixels scrolled per wheel notch.
const LINE_PX: f64 = 40.0;
/// Poll period for new snapshots and animation frames.
const FRAME: Duration = Duration::from_millis(16);

#[derive(Parser, Debug)]
#[command(name = "status-chart-window")]
#[command(about = "Live realtime status chart window")]
struct Args {
    /// Widget width in logical pixels
    #[arg(long, default_value_t = 900)]
    width: u32,

    /// Plot height in logical pixels
    #[arg(long, default_value_t = 200)]
    height: u32,

    /// Milliseconds between new readings
    #[arg(long, default_value_t = 2000)]
    interval_ms: u64,

    /// RNG seed for a reproducible label sequence
    #[arg(long)]
    seed: Option<u64>,
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

    // The feed task runs on a background runtime; the window thread only polls its snapshots.
    let rt = tokio::runtime::Runtime::new()?;
    let (handle, mut rx) = {
        let _guard = rt.enter();
        FeedHandle::activate(feed)
    };

    let mut chart = RealtimeChart::new(size);
    let first = rx.borrow_and_update().clone();
    chart.set_readings(&first);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(title(&FeedSummary::of(&first)))
        .with_inner_size(winit::dpi::LogicalSize::new(f64::from(size.width()), size.widget_height()))
        .with_resizable(false)
        .build(&event_loop)
        .context("creating window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut handle = Some(handle);
    let mut last_frame = Instant::now();

    event_loop.run(move |event, _, cf| {
        // Keep the runtime (and the feed task on it) alive for the life of the loop
        let _rt = &rt;
        *cf = ControlFlow::WaitUntil(Instant::now() + FRAME);

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    // Dropping the handle cancels the feed timer
                    handle.take();
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    let dx = match delta {
                        MouseScrollDelta::LineDelta(x, y) => -f64::from(if x != 0.0 { x } else { y }) * LINE_PX,
                        MouseScrollDelta::PixelDelta(p) => -(if p.x != 0.0 { p.x } else { p.y }),
                    };
                    let follow = chart.view_mut().scroll_by(dx);
                    tracing::trace!(dx, ?follow, left = chart.view().scroll_left(), "wheel scroll");
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => {
                    match key {
                        VirtualKeyCode::Home => { chart.on_scroll(0.0); }
                        VirtualKeyCode::End => { chart.on_scroll(chart.view().max_scroll_left()); }
                        _ => {}
                    }
                    window.request_redraw();
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if rx.has_changed().unwrap_or(false) {
                    let snapshot = rx.borrow_and_update().clone();
                    chart.set_readings(&snapshot);
                    window.set_title(&title(&FeedSummary::of(&snapshot)));
                    window.request_redraw();
                }
                let now = Instant::now();
                if chart.view().is_animating() {
                    chart.view_mut().advance(now - last_frame);
                    window.request_redraw();
                }
                last_frame = now;
            }
            Event::RedrawRequested(_) => {
                let opts = RenderOptions { dpr: window.scale_factor() as f32, draw_labels: true, animated: true };
                if let Err(e) = draw(&chart, &mut surface, &opts) {
                    tracing::error!("draw failed: {e:#}");
                }
            }
            _ => {}
        }
    });
}

fn title(summary: &FeedSummary) -> String {
    format!(
        "Realtime Status Chart - {} data points, last status: {}",
        summary.count,
        summary.last_status.as_deref().unwrap_or("none")
    )
}

/// Render to RGBA and convert to 0RGB u32 for softbuffer.
fn draw(chart: &RealtimeChart, surface: &mut softbuffer::Surface, opts: &RenderOptions) -> Result<()> {
    let (rgba, w, h, _) = chart.render_to_rgba8(opts)?;
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w as u32), NonZeroU32::new(h as u32)) else {
        return Ok(());
    };
    surface.resize(nw, nh).map_err(|e| anyhow!("resize surface: {e}"))?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("frame buffer: {e}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = (u32::from(px[0]) << 16) | (u32::from(px[1]) << 8) | u32::from(px[2]);
    }
    frame.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}
