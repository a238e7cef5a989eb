// Copyright 2025 the Thinlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thinlens_svg --heading-base-level=0

//! SVG export for Thinlens scenes.
//!
//! [`render_svg`] draws a [`Scene`] into a standalone SVG document: grid,
//! optical axis and lens plane, lens outline, focal and radius markers, the
//! object and image textures, construction rays, and a legend.
//!
//! - World coordinates are mapped onto the `width × height` canvas with `+y`
//!   up (see [`world_to_view`]); everything outside the scene viewport is
//!   clipped.
//! - Rays are drawn in the [`RayStyle`] chosen by the caller: dashed lines,
//!   one dot per rasterizer sample, or both.
//! - Textures are caller-supplied SVG markup ([`Texture`]). Without one, the
//!   object and image are drawn as outlined placeholders.
//!
//! ```rust
//! use thinlens_scene::SceneParams;
//! use thinlens_svg::{SvgOptions, render_svg};
//!
//! let scene = SceneParams::default().compose()?;
//! let svg = render_svg(&scene, &SvgOptions::default());
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("Focal Point"));
//! # Ok::<(), thinlens_optics::InvalidParameter>(())
//! ```

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt::Write as _;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `ceil`
use kurbo::{Affine, BezPath, Line, PathEl, Point, Rect, Size, Vec2};
use peniko::Color;
use thinlens_dda::rasterize_line;
use thinlens_optics::{MarkerKind, RaySegment};
use thinlens_scene::{LegendItem, Palette, Placement, PlacementRole, Scene};

const DASH_PATTERN: &str = "6 4";
const RAY_WIDTH: f64 = 1.0;
const SAMPLE_RADIUS: f64 = 0.8;
const MARKER_RADIUS: f64 = 4.0;
const LEGEND_ROW: f64 = 18.0;
const LEGEND_PADDING: f64 = 8.0;
const LEGEND_SWATCH: f64 = 22.0;
const LEGEND_WIDTH: f64 = 130.0;

/// How construction rays are drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum RayStyle {
    /// One dashed line per segment.
    #[default]
    Solid,
    /// One dot per rasterizer sample along each segment.
    Sampled,
    /// Dashed lines with the samples on top.
    Both,
}

/// SVG markup drawn in place of the object and the image.
///
/// `markup` is inserted verbatim and drawn in its own coordinate system
/// spanning `0..size.width` left to right and `0..size.height` top to bottom;
/// the renderer stretches it over each placement's extent.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    /// Extent of the markup's coordinate system.
    pub size: Size,
    /// SVG elements, without an enclosing `<svg>`.
    pub markup: String,
}

impl Texture {
    /// Width/height ratio, as expected by [`thinlens_scene::SceneParams::aspect_ratio`].
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.size.width / self.size.height
    }
}

/// Rendering options for [`render_svg`].
#[derive(Clone, Debug, PartialEq)]
pub struct SvgOptions {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Ray drawing style.
    pub ray_style: RayStyle,
    /// Object/image texture; placeholders are drawn when `None`.
    pub texture: Option<Texture>,
    /// Item colors.
    pub palette: Palette,
    /// Whether to draw the legend.
    pub legend: bool,
    /// Grid line spacing in world units; `None` disables the grid.
    pub grid: Option<Vec2>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 400,
            ray_style: RayStyle::default(),
            texture: None,
            palette: Palette::default(),
            legend: true,
            grid: Some(Vec2::new(100.0, 50.0)),
        }
    }
}

/// Affine map from the world-space `viewport` onto a `width × height` canvas.
///
/// The viewport's top-left corner (`x0`, `y1`) lands on the canvas origin and
/// world `+y` points up the canvas.
#[must_use]
pub fn world_to_view(viewport: Rect, width: f64, height: f64) -> Affine {
    let sx = width / viewport.width();
    let sy = -height / viewport.height();
    Affine::new([sx, 0.0, 0.0, sy, -viewport.x0 * sx, -viewport.y1 * sy])
}

/// Renders `scene` as a standalone SVG document.
#[must_use]
pub fn render_svg(scene: &Scene, options: &SvgOptions) -> String {
    let width = f64::from(options.width);
    let height = f64::from(options.height);
    let xf = world_to_view(scene.viewport, width, height);
    let palette = &options.palette;

    let mut out = String::new();
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = options.width,
        h = options.height,
    );
    let _ = write!(
        out,
        "<defs><clipPath id=\"viewport\"><rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\"/></clipPath></defs>",
        options.width, options.height,
    );
    let _ = write!(
        out,
        "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"#ffffff\"/>",
        options.width, options.height,
    );
    out.push_str("<g clip-path=\"url(#viewport)\">");

    if let Some(spacing) = options.grid {
        write_grid(&mut out, scene.viewport, spacing, xf, palette.grid);
    }

    let (axis, axis_alpha) = color_to_svg(palette.axis);
    write_line(
        &mut out,
        xf * scene.horizontal_axis,
        &format!("stroke=\"{axis}\"{}", opacity_attr("stroke-opacity", axis_alpha)),
    );
    write_line(
        &mut out,
        xf * scene.vertical_axis,
        &format!("stroke=\"{axis}\"{}", opacity_attr("stroke-opacity", axis_alpha)),
    );

    write_lens(&mut out, scene, xf, palette.lens);

    for marker in &scene.markers {
        write_marker(&mut out, marker.kind, xf * marker.position, palette.marker(marker.kind));
    }

    write_placement(&mut out, &scene.object, xf, options.texture.as_ref());
    if let Some(image) = &scene.image {
        write_placement(&mut out, image, xf, options.texture.as_ref());
    }

    for segment in &scene.rays {
        write_ray(
            &mut out,
            segment,
            scene.viewport,
            xf,
            options.ray_style,
            palette.ray(segment.kind),
        );
    }

    out.push_str("</g>");

    if options.legend {
        write_legend(&mut out, scene, width, palette);
    }

    out.push_str("</svg>");
    out
}

fn write_grid(out: &mut String, viewport: Rect, spacing: Vec2, xf: Affine, color: Color) {
    let (stroke, alpha) = color_to_svg(color);
    let attrs = format!(
        "stroke=\"{stroke}\" stroke-width=\"0.5\"{}",
        opacity_attr("stroke-opacity", alpha)
    );
    out.push_str("<g class=\"grid\">");
    if spacing.x > 0.0 && spacing.x.is_finite() {
        let mut x = (viewport.x0 / spacing.x).ceil() * spacing.x;
        while x <= viewport.x1 {
            write_line(out, xf * Line::new((x, viewport.y0), (x, viewport.y1)), &attrs);
            x += spacing.x;
        }
    }
    if spacing.y > 0.0 && spacing.y.is_finite() {
        let mut y = (viewport.y0 / spacing.y).ceil() * spacing.y;
        while y <= viewport.y1 {
            write_line(out, xf * Line::new((viewport.x0, y), (viewport.x1, y)), &attrs);
            y += spacing.y;
        }
    }
    out.push_str("</g>");
}

fn write_lens(out: &mut String, scene: &Scene, xf: Affine, color: Color) {
    let (fill, alpha) = color_to_svg(color);
    let path = xf * scene.lens.to_path();
    let _ = write!(
        out,
        "<path class=\"lens\" d=\"{}\" fill=\"{fill}\" fill-opacity=\"{}\" stroke=\"{fill}\" stroke-width=\"1.5\"{}/>",
        path_to_svg_d(&path),
        fmt_num(0.25 * f64::from(alpha)),
        opacity_attr("stroke-opacity", alpha),
    );
}

fn write_marker(out: &mut String, kind: MarkerKind, at: Point, color: Color) {
    let (c, alpha) = color_to_svg(color);
    match kind {
        MarkerKind::FocalPoint => {
            let _ = write!(
                out,
                "<circle class=\"focal-point\" cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{c}\"{}/>",
                fmt_num(at.x),
                fmt_num(at.y),
                fmt_num(MARKER_RADIUS),
                opacity_attr("fill-opacity", alpha),
            );
        }
        MarkerKind::RadiusPoint => {
            let _ = write!(out, "<g class=\"radius-point\">");
            let attrs = format!(
                "stroke=\"{c}\" stroke-width=\"1.5\"{}",
                opacity_attr("stroke-opacity", alpha)
            );
            write_cross(out, at, MARKER_RADIUS, &attrs);
            out.push_str("</g>");
        }
    }
}

fn write_cross(out: &mut String, at: Point, r: f64, attrs: &str) {
    write_line(out, Line::new(at + Vec2::new(-r, -r), at + Vec2::new(r, r)), attrs);
    write_line(out, Line::new(at + Vec2::new(-r, r), at + Vec2::new(r, -r)), attrs);
}

fn write_placement(out: &mut String, placement: &Placement, xf: Affine, texture: Option<&Texture>) {
    let role = match placement.role {
        PlacementRole::Object => "object",
        PlacementRole::Image => "image",
    };
    let opacity = opacity_attr("opacity", placement.opacity);

    let extent = placement.extent;
    // Texture top-left sits at the tip edge, bottom-right on the axis.
    let top_left = xf * Point::new(extent.x0, extent.y1);
    let bottom_right = xf * Point::new(extent.x1, extent.y0);

    match texture {
        Some(texture) if texture.size.width > 0.0 && texture.size.height > 0.0 => {
            let sx = (bottom_right.x - top_left.x) / texture.size.width;
            let sy = (bottom_right.y - top_left.y) / texture.size.height;
            let map = Affine::new([sx, 0.0, 0.0, sy, top_left.x, top_left.y]);
            let _ = write!(
                out,
                "<g class=\"{role}\" transform=\"{}\"{opacity}>{}</g>",
                affine_to_svg_matrix(map),
                texture.markup,
            );
        }
        _ => {
            let r = Rect::from_points(top_left, bottom_right);
            let _ = write!(
                out,
                "<rect class=\"{role}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#d0d0d0\" stroke=\"#404040\" stroke-dasharray=\"2 2\"{opacity}/>",
                fmt_num(r.x0),
                fmt_num(r.y0),
                fmt_num(r.width()),
                fmt_num(r.height()),
            );
        }
    }
}

fn write_ray(
    out: &mut String,
    segment: &RaySegment,
    viewport: Rect,
    xf: Affine,
    style: RayStyle,
    color: Color,
) {
    let (c, alpha) = color_to_svg(color);
    if matches!(style, RayStyle::Solid | RayStyle::Both) {
        let attrs = format!(
            "class=\"ray-{}\" stroke=\"{c}\" stroke-width=\"{}\" stroke-dasharray=\"{DASH_PATTERN}\"{}",
            segment.kind.number(),
            fmt_num(RAY_WIDTH),
            opacity_attr("stroke-opacity", alpha),
        );
        write_line(out, xf * segment.line, &attrs);
    }
    if matches!(style, RayStyle::Sampled | RayStyle::Both) {
        // Only the visible part is sampled; near the focal point the image
        // tip can be arbitrarily far away.
        let Some(visible) = clip_line(segment.line, viewport) else {
            return;
        };
        let _ = write!(
            out,
            "<g class=\"ray-{}-samples\" fill=\"{c}\"{}>",
            segment.kind.number(),
            opacity_attr("fill-opacity", alpha),
        );
        // Samples are taken in world units so their density does not depend
        // on the canvas size.
        for pt in rasterize_line(visible) {
            let pt = xf * pt;
            let _ = write!(
                out,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"/>",
                fmt_num(pt.x),
                fmt_num(pt.y),
                fmt_num(SAMPLE_RADIUS),
            );
        }
        out.push_str("</g>");
    }
}

/// Clips `line` to `rect` (Liang–Barsky), keeping its direction.
///
/// Returns `None` when the line misses `rect`.
fn clip_line(line: Line, rect: Rect) -> Option<Line> {
    let d = line.p1 - line.p0;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [
        (-d.x, line.p0.x - rect.x0),
        (d.x, rect.x1 - line.p0.x),
        (-d.y, line.p0.y - rect.y0),
        (d.y, rect.y1 - line.p0.y),
    ] {
        if p == 0.0 {
            // Parallel to this edge.
            if q < 0.0 {
                return None;
            }
        } else {
            let t = q / p;
            if p < 0.0 {
                if t > t1 {
                    return None;
                }
                t0 = t0.max(t);
            } else {
                if t < t0 {
                    return None;
                }
                t1 = t1.min(t);
            }
        }
    }
    Some(Line::new(line.p0 + d * t0, line.p0 + d * t1))
}

fn write_legend(out: &mut String, scene: &Scene, canvas_width: f64, palette: &Palette) {
    if scene.legend.is_empty() {
        return;
    }
    #[allow(
        clippy::cast_precision_loss,
        reason = "legends have a handful of entries"
    )]
    let rows = scene.legend.len() as f64;
    let x0 = canvas_width - LEGEND_WIDTH - LEGEND_PADDING;
    let y0 = LEGEND_PADDING;
    let _ = write!(
        out,
        "<g class=\"legend\"><rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#ffffff\" fill-opacity=\"0.8\" stroke=\"#cccccc\"/>",
        fmt_num(x0),
        fmt_num(y0),
        fmt_num(LEGEND_WIDTH),
        fmt_num(rows * LEGEND_ROW + LEGEND_PADDING),
    );

    let mut y = y0 + LEGEND_PADDING / 2.0 + LEGEND_ROW / 2.0;
    for item in &scene.legend {
        let swatch = Point::new(x0 + LEGEND_PADDING + LEGEND_SWATCH / 2.0, y);
        let (c, alpha) = color_to_svg(palette.legend(*item));
        match item {
            LegendItem::Marker(kind) => {
                write_marker(out, *kind, swatch, palette.marker(*kind));
            }
            LegendItem::Lens => {
                let attrs = format!(
                    "stroke=\"{c}\" stroke-width=\"3\"{}",
                    opacity_attr("stroke-opacity", alpha)
                );
                write_line(
                    out,
                    Line::new(
                        swatch - Vec2::new(LEGEND_SWATCH / 2.0, 0.0),
                        swatch + Vec2::new(LEGEND_SWATCH / 2.0, 0.0),
                    ),
                    &attrs,
                );
            }
            LegendItem::Ray(_) => {
                let attrs = format!(
                    "stroke=\"{c}\" stroke-dasharray=\"{DASH_PATTERN}\"{}",
                    opacity_attr("stroke-opacity", alpha)
                );
                write_line(
                    out,
                    Line::new(
                        swatch - Vec2::new(LEGEND_SWATCH / 2.0, 0.0),
                        swatch + Vec2::new(LEGEND_SWATCH / 2.0, 0.0),
                    ),
                    &attrs,
                );
            }
        }
        let _ = write!(
            out,
            "<text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"12\" dominant-baseline=\"middle\">{}</text>",
            fmt_num(x0 + 2.0 * LEGEND_PADDING + LEGEND_SWATCH),
            fmt_num(y),
            item.label(),
        );
        y += LEGEND_ROW;
    }
    out.push_str("</g>");
}

fn path_to_svg_d(path: &BezPath) -> String {
    let mut d = String::new();
    for el in path.iter() {
        match el {
            PathEl::MoveTo(p) => {
                let _ = write!(d, "M{} {}", fmt_num(p.x), fmt_num(p.y));
            }
            PathEl::LineTo(p) => {
                let _ = write!(d, "L{} {}", fmt_num(p.x), fmt_num(p.y));
            }
            PathEl::QuadTo(p1, p2) => {
                let _ = write!(
                    d,
                    "Q{} {} {} {}",
                    fmt_num(p1.x),
                    fmt_num(p1.y),
                    fmt_num(p2.x),
                    fmt_num(p2.y)
                );
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let _ = write!(
                    d,
                    "C{} {} {} {} {} {}",
                    fmt_num(p1.x),
                    fmt_num(p1.y),
                    fmt_num(p2.x),
                    fmt_num(p2.y),
                    fmt_num(p3.x),
                    fmt_num(p3.y)
                );
            }
            PathEl::ClosePath => d.push('Z'),
        }
    }
    d
}

fn write_line(out: &mut String, line: Line, attrs: &str) {
    let _ = write!(
        out,
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {attrs}/>",
        fmt_num(line.p0.x),
        fmt_num(line.p0.y),
        fmt_num(line.p1.x),
        fmt_num(line.p1.y),
    );
}

fn opacity_attr(name: &str, alpha: f32) -> String {
    let alpha = alpha.clamp(0.0, 1.0);
    if alpha < 1.0 {
        format!(" {name}=\"{}\"", fmt_num(f64::from(alpha)))
    } else {
        String::new()
    }
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn affine_to_svg_matrix(xf: Affine) -> String {
    // kurbo::Affine stores [a, b, c, d, e, f] corresponding to:
    // [ a c e ]
    // [ b d f ]
    // [ 0 0 1 ]
    let c = xf.as_coeffs();
    format!(
        "matrix({} {} {} {} {} {})",
        fmt_num(c[0]),
        fmt_num(c[1]),
        fmt_num(c[2]),
        fmt_num(c[3]),
        fmt_num(c[4]),
        fmt_num(c[5]),
    )
}

fn fmt_num(v: f64) -> String {
    // Keep output readable and stable enough for diffing.
    if !v.is_finite() {
        return format!("{v}");
    }
    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}
