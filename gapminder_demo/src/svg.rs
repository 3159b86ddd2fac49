// Copyright 2025 the Gapminder Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG writer for chart frames.

use gapminder_layout::{AnnotationPlacement, AxisTick, ChartFrame, Trail};
use kurbo::{BezPath, Circle};
use peniko::Color;
use peniko::color::palette::css;

/// Gridlines drawn behind everything else.
const GRID_LINES: i32 = -50;
/// Trail polyline.
const SERIES_STROKE: i32 = 10;
/// Circles.
const SERIES_POINTS: i32 = 20;
/// Axis tick marks.
const AXIS_RULES: i32 = 30;
/// Axis tick labels.
const AXIS_LABELS: i32 = 40;
/// Marker decorations and labels.
const ANNOTATIONS: i32 = 80;

const CIRCLE_FILL_OPACITY: f64 = 0.3;

/// SVG elements in plot space, painted in z order.
#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    elements: Vec<(i32, String)>,
}

impl SvgScene {
    fn push(&mut self, z: i32, element: String) {
        self.elements.push((z, element));
    }

    fn circle(&mut self, z: i32, circle: Circle, stroke: Color, fill: Option<Color>) {
        if !(circle.center.x.is_finite() && circle.center.y.is_finite()) {
            return;
        }
        let mut el = format!(
            r#"<circle cx="{}" cy="{}" r="{}""#,
            circle.center.x, circle.center.y, circle.radius
        );
        write_paint_attr(&mut el, "stroke", stroke, None);
        match fill {
            Some(fill) => write_paint_attr(&mut el, "fill", fill, Some(CIRCLE_FILL_OPACITY)),
            None => el.push_str(r#" fill="none""#),
        }
        el.push_str("/>");
        self.push(z, el);
    }

    fn path(&mut self, z: i32, path: &BezPath, stroke: Color, stroke_width: f64) {
        let mut el = format!(r#"<path d="{}" fill="none""#, path.to_svg());
        write_paint_attr(&mut el, "stroke", stroke, None);
        el.push_str(&format!(r#" stroke-width="{stroke_width}"/>"#));
        self.push(z, el);
    }

    fn text(&mut self, z: i32, placement: &AnnotationPlacement, text: &str, bold: bool) {
        let origin = placement.text_origin();
        let weight = if bold { r#" font-weight="bold""# } else { "" };
        self.push(
            z,
            format!(
                r#"<text x="{}" y="{}" text-anchor="{}"{weight}>{}</text>"#,
                origin.x,
                origin.y,
                placement.text_anchor.as_str(),
                escape_xml(text),
            ),
        );
    }

    fn line(&mut self, z: i32, (x0, y0): (f64, f64), (x1, y1): (f64, f64), stroke: Color) {
        let mut el = format!(r#"<line x1="{x0}" y1="{y0}" x2="{x1}" y2="{y1}""#);
        write_paint_attr(&mut el, "stroke", stroke, None);
        el.push_str("/>");
        self.push(z, el);
    }

    fn label(&mut self, z: i32, (x, y): (f64, f64), anchor: &str, text: &str) {
        self.push(
            z,
            format!(
                r##"<text x="{x}" y="{y}" text-anchor="{anchor}" fill="#666">{}</text>"##,
                escape_xml(text)
            ),
        );
    }

    fn to_svg_string(&self, width: f64, height: f64, origin: (f64, f64), font_size: f64) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}""#
        ));
        out.push_str(&format!(
            r#" viewBox="0 0 {width} {height}" font-family="sans-serif" font-size="{font_size}">"#
        ));
        out.push('\n');
        out.push_str(&format!(r#"<g transform="translate({}, {})">"#, origin.0, origin.1));
        out.push('\n');

        let mut order: Vec<usize> = (0..self.elements.len()).collect();
        order.sort_by_key(|&i| self.elements[i].0);
        for i in order {
            out.push_str(&self.elements[i].1);
            out.push('\n');
        }

        out.push_str("</g>\n</svg>\n");
        out
    }
}

/// Renders a frame to a standalone SVG document.
pub(crate) fn render_frame(frame: &ChartFrame<'_>, font_size: f64) -> String {
    let dims = frame.dimensions;
    let mut scene = SvgScene::default();

    axis_y(&mut scene, &frame.y_ticks, -dims.margins.left, dims.bounded_width);
    axis_x(&mut scene, &frame.x_ticks, dims.bounded_height, font_size);

    for glyph in &frame.circles {
        scene.circle(SERIES_POINTS, glyph.circle, glyph.color, Some(glyph.color));
    }
    for annotation in &frame.annotations {
        scene.text(ANNOTATIONS, &annotation.placement, annotation.text, false);
    }
    if let Some(trail) = &frame.trail {
        history(&mut scene, trail);
    }

    let plot = frame.plot_rect();
    scene.to_svg_string(dims.width, dims.height, (plot.x0, plot.y0), font_size)
}

fn axis_y(scene: &mut SvgScene, ticks: &[AxisTick], label_x: f64, width: f64) {
    for tick in ticks {
        scene.line(GRID_LINES, (label_x, tick.position), (width, tick.position), css::GAINSBORO);
        if let Some(label) = &tick.label {
            scene.label(AXIS_LABELS, (label_x, tick.position - 4.0), "start", label);
        }
    }
}

fn axis_x(scene: &mut SvgScene, ticks: &[AxisTick], y: f64, font_size: f64) {
    for tick in ticks {
        let length = if tick.is_major() { 6.0 } else { 3.0 };
        scene.line(AXIS_RULES, (tick.position, y), (tick.position, y + length), css::GRAY);
        if let Some(label) = &tick.label {
            scene.label(AXIS_LABELS, (tick.position, y + length + font_size), "middle", label);
        }
    }
}

fn history(scene: &mut SvgScene, trail: &Trail<'_>) {
    let geometry = &trail.geometry;
    if let Some(line) = &geometry.line {
        scene.path(SERIES_STROKE, line, trail.color, 2.0);
    }
    if let Some(first) = &geometry.first {
        scene.circle(SERIES_POINTS, first.point.circle, trail.color, Some(trail.color));
        scene.text(ANNOTATIONS, &first.placement, &first.year_label, true);
    }
    if let Some(last) = &geometry.last {
        scene.circle(SERIES_POINTS, last.circle, trail.color, Some(trail.color));
    }
    for marker in &geometry.markers {
        scene.circle(ANNOTATIONS, marker.indicator, css::BLACK, None);
        scene.path(ANNOTATIONS, &marker.arrow, css::BLACK, 1.0);
        scene.text(ANNOTATIONS, &marker.label_placement, marker.label, false);
    }
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (value, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color, opacity: Option<f64>) {
    let (value, own_opacity) = svg_paint(color);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity.or(own_opacity) {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
