// File: crates/chart-core/src/chart.rs
// Summary: RealtimeChart: scene + scroll view state, with Skia raster and SVG output.

use skia_safe as skia;

use crate::error::ChartError;
use crate::path::{PathCommand, SmoothPath};
use crate::scene::Scene;
use crate::series::Reading;
use crate::svg::scene_to_svg;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{ChartSize, LABEL_WIDTH};
use crate::view::{Follow, ScrollView};

pub struct RenderOptions {
    /// Device pixel ratio applied to the raster surface.
    pub dpr: f32,
    pub draw_labels: bool,
    /// Draw at the in-flight smooth-scroll offset instead of the settled one.
    pub animated: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { dpr: 1.0, draw_labels: true, animated: false }
    }
}

/// Scrolling status chart. Owns the derived scene and the viewport; readings are
/// supplied from outside on every change and never retained.
pub struct RealtimeChart {
    size: ChartSize,
    pub theme: Theme,
    scene: Scene,
    view: ScrollView,
}

impl RealtimeChart {
    pub fn new(size: ChartSize) -> Self {
        let scene = Scene::empty(size);
        let view = ScrollView::new(size.client_width(), scene.total_width);
        Self { size, theme: Theme::dark(), scene, view }
    }

    pub fn size(&self) -> ChartSize { self.size }
    pub fn scene(&self) -> &Scene { &self.scene }
    pub fn view(&self) -> &ScrollView { &self.view }
    pub fn view_mut(&mut self) -> &mut ScrollView { &mut self.view }
    pub fn is_following(&self) -> bool { self.view.is_following() }

    /// Rebuild the scene for the new sequence and apply auto-scroll.
    /// Returns whether the viewport followed to the new end.
    pub fn set_readings(&mut self, readings: &[Reading]) -> bool {
        self.scene = Scene::build(readings, self.size);
        if readings.is_empty() {
            return false;
        }
        let followed = self.view.on_content_resized(self.scene.total_width);
        tracing::trace!(
            readings = readings.len(),
            total_width = self.scene.total_width,
            scroll_left = self.view.scroll_left(),
            followed,
            "chart updated"
        );
        followed
    }

    /// A user scroll of the scroll region to `left`.
    pub fn on_scroll(&mut self, left: f64) -> Follow {
        self.view.on_user_scroll(left)
    }

    pub fn to_svg_string(&self) -> String {
        scene_to_svg(&self.scene, self.view.scroll_left(), &self.theme)
    }

    pub fn render_to_svg(&self, output_svg_path: impl AsRef<std::path::Path>) -> Result<(), ChartError> {
        write_creating_parent(output_svg_path.as_ref(), self.to_svg_string().as_bytes())
    }

    /// Rasterize the widget and return unpremultiplied RGBA rows:
    /// `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize), ChartError> {
        let mut surface = self.raster(opts)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(ChartError::Encode("RGBA pixels"));
        }
        Ok((pixels, w, h, row_bytes))
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, ChartError> {
        let mut surface = self.raster(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode("PNG"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the widget to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<(), ChartError> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_creating_parent(output_png_path.as_ref(), &bytes)
    }

    fn raster(&self, opts: &RenderOptions) -> Result<skia::Surface, ChartError> {
        let dpr = opts.dpr.max(0.1);
        let w = (self.size.width() as f32 * dpr).round() as i32;
        let h = (self.size.widget_height() as f32 * dpr).round() as i32;
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(ChartError::Surface { width: w, height: h })?;
        let canvas = surface.canvas();
        canvas.scale((dpr, dpr));
        let shaper = opts.draw_labels.then(TextShaper::new);
        let left = if opts.animated { self.view.displayed_left() } else { self.view.scroll_left() };
        self.paint(canvas, left as f32, shaper.as_ref());
        Ok(surface)
    }

    fn paint(&self, canvas: &skia::Canvas, scroll_left: f32, shaper: Option<&TextShaper>) {
        let theme = &self.theme;
        let width = self.size.width() as f32;
        let height = self.size.height() as f32;
        let widget_h = self.size.widget_height() as f32;
        let gutter = LABEL_WIDTH as f32;

        canvas.clear(theme.background);

        // Scroll region
        canvas.save();
        canvas.clip_rect(skia::Rect::from_ltrb(gutter, 0.0, width, widget_h), skia::ClipOp::Intersect, true);
        canvas.translate((gutter - scroll_left, 0.0));
        draw_grid(canvas, &self.scene, theme);
        if let Some(shaper) = shaper {
            draw_ticks(canvas, shaper, &self.scene, scroll_left as f64, theme);
        }
        draw_path(canvas, &self.scene.path, theme);
        canvas.restore();

        // Gutter
        let mut fill = skia::Paint::default();
        fill.set_color(theme.background);
        canvas.draw_rect(skia::Rect::from_ltrb(0.0, 0.0, gutter, height), &fill);
        if let Some(shaper) = shaper {
            for label in &self.scene.gutter {
                shaper.draw_middle(canvas, label.text(), label.x as f32, label.y as f32, theme.status_font_size, theme.status_label, false);
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, scene: &Scene, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(theme.grid_width);

    for line in &scene.grid {
        let s = line.segment;
        canvas.draw_line((s.from.x as f32, s.from.y as f32), (s.to.x as f32, s.to.y as f32), &paint);
    }
}

fn draw_ticks(canvas: &skia::Canvas, shaper: &TextShaper, scene: &Scene, scroll_left: f64, theme: &Theme) {
    let visible = scene.scale.visible_range(scroll_left, scene.size.client_width(), scene.ticks.len());
    for tick in &scene.ticks[visible] {
        shaper.draw_centered(canvas, &tick.label, tick.x as f32, tick.y as f32, theme.time_font_size, theme.time_label, true);
    }
}

fn draw_path(canvas: &skia::Canvas, path: &SmoothPath, theme: &Theme) {
    if path.is_empty() {
        return;
    }
    let mut sk = skia::PathBuilder::new();
    for cmd in path.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => {
                sk.move_to((p.x as f32, p.y as f32));
            }
            PathCommand::CubicTo { c1, c2, to } => {
                sk.cubic_to((c1.x as f32, c1.y as f32), (c2.x as f32, c2.y as f32), (to.x as f32, to.y as f32));
            }
        }
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(theme.line_width);
    stroke.set_stroke_cap(skia::paint::Cap::Round);
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_color(theme.line_stroke);

    canvas.draw_path(&sk.snapshot(), &stroke);
}

fn write_creating_parent(path: &std::path::Path, bytes: &[u8]) -> Result<(), ChartError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
