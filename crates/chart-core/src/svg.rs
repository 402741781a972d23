// File: crates/chart-core/src/svg.rs
// Summary: Standalone SVG output for a scene: scrolled content viewport plus the fixed label gutter.

use std::fmt::Write as _;

use crate::scene::Scene;
use crate::theme::{css_hex, Theme};
use crate::types::LABEL_WIDTH;

/// Render `scene` as an SVG document with the scroll region offset by `scroll_left`.
/// The nested `<svg>` viewport clips the content the way the scroll container does.
pub fn scene_to_svg(scene: &Scene, scroll_left: f64, theme: &Theme) -> String {
    let width = f64::from(scene.size.width());
    let height = f64::from(scene.size.height());
    let widget_h = scene.size.widget_height();
    let client_w = scene.size.client_width();
    let bg = css_hex(theme.background);

    let mut out = String::with_capacity(512 + scene.ticks.len() * 96);
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{widget_h}" viewBox="0 0 {width} {widget_h}">"#
    );
    let _ = writeln!(out, r#"  <rect x="0" y="0" width="{width}" height="{widget_h}" rx="5" fill="{bg}"/>"#);

    // Scroll region
    let _ = writeln!(
        out,
        r#"  <svg x="{LABEL_WIDTH}" y="0" width="{client_w}" height="{h}" viewBox="{scroll_left} 0 {client_w} {h}">"#,
        h = scene.svg_height,
    );
    let grid = css_hex(theme.grid);
    for line in &scene.grid {
        let s = line.segment;
        let _ = writeln!(
            out,
            r#"    <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{grid}" stroke-width="{}"/>"#,
            s.from.x, s.from.y, s.to.x, s.to.y, theme.grid_width
        );
    }
    let time_fill = css_hex(theme.time_label);
    for tick in &scene.ticks {
        let _ = writeln!(
            out,
            r#"    <text x="{}" y="{}" fill="{time_fill}" font-size="{}" text-anchor="middle">{}</text>"#,
            tick.x, tick.y, theme.time_font_size, tick.label
        );
    }
    let _ = writeln!(
        out,
        r#"    <path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
        scene.path.to_svg_d(),
        css_hex(theme.line_stroke),
        theme.line_width
    );
    let _ = writeln!(out, "  </svg>");

    // Fixed gutter, drawn last so it stays on top
    let status_fill = css_hex(theme.status_label);
    let _ = writeln!(out, r#"  <svg x="0" y="0" width="{LABEL_WIDTH}" height="{}">"#, scene.svg_height);
    let _ = writeln!(out, r#"    <rect x="0" y="0" width="{LABEL_WIDTH}" height="{height}" fill="{bg}"/>"#);
    for label in &scene.gutter {
        let _ = writeln!(
            out,
            r#"    <text x="{}" y="{}" fill="{status_fill}" font-size="{}" dominant-baseline="middle">{}</text>"#,
            label.x, label.y, theme.status_font_size, label.text()
        );
    }
    let _ = writeln!(out, "  </svg>");
    let _ = writeln!(out, "</svg>");
    out
}
