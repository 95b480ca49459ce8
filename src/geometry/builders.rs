//! Pure guide-geometry builders.
//!
//! Every builder is a referentially transparent function of the preview-space
//! dimensions and its own parameters: no pixels, no hidden state. Degenerate
//! dimensions (zero or one pixel) produce well-defined, possibly zero-length
//! segments rather than errors; the rasterizer treats those as no-ops.

use crate::config::params::{GoldenTriangleSet, GuideConfig, PyramidMode};
use crate::foundation::core::{LineSegment, Point, Rgba8, Vec2};

/// Reciprocal golden ratio, `1 / ((1 + sqrt(5)) / 2)` ≈ 0.618034.
pub const INV_PHI: f64 = 0.618033988749895;

/// An ordered stroke batch: segments plus the stroke attributes they share.
///
/// Built fresh per invocation and never mutated afterwards. Segment order is
/// the fixed guide order (grid, diagonals, phi grid, pyramid, golden
/// triangles, perspective); overlapping strokes composite in this order.
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    /// Line segments in emission order.
    pub segments: Vec<LineSegment>,
    /// Stroke color (straight alpha).
    pub color: Rgba8,
    /// Stroke thickness in preview pixels.
    pub thickness: f64,
    /// Per-pixel compositing mode.
    pub blend_mode: crate::config::params::BlendMode,
}

/// Rule-of-thirds style grid: interior lines only.
///
/// `nx`/`ny` are cell counts, so `nx - 1` vertical and `ny - 1` horizontal
/// lines are emitted. The `k = 0` and `k = n` lines coincide with the image
/// border and are never drawn.
pub fn grid(w: f64, h: f64, nx: u32, ny: u32) -> Vec<LineSegment> {
    let mut out = Vec::with_capacity((nx + ny).saturating_sub(2) as usize);
    for k in 1..nx {
        let x = w * f64::from(k) / f64::from(nx);
        out.push(LineSegment::new((x, 0.0), (x, h)));
    }
    for k in 1..ny {
        let y = h * f64::from(k) / f64::from(ny);
        out.push(LineSegment::new((0.0, y), (w, y)));
    }
    out
}

/// The two full-extent corner diagonals.
pub fn diagonals(w: f64, h: f64) -> Vec<LineSegment> {
    vec![
        LineSegment::new((0.0, 0.0), (w, h)),
        LineSegment::new((w, 0.0), (0.0, h)),
    ]
}

/// Golden-ratio grid: four lines at the phi divisions of each axis.
pub fn phi_grid(w: f64, h: f64) -> Vec<LineSegment> {
    let x1 = w * (1.0 - INV_PHI);
    let x2 = w * INV_PHI;
    let y1 = h * (1.0 - INV_PHI);
    let y2 = h * INV_PHI;
    vec![
        LineSegment::new((x1, 0.0), (x1, h)),
        LineSegment::new((x2, 0.0), (x2, h)),
        LineSegment::new((0.0, y1), (w, y1)),
        LineSegment::new((0.0, y2), (w, y2)),
    ]
}

/// Pyramid guides: triangles with apexes at edge midpoints.
///
/// Up/Down pairs an apex at `(w/2, 0)` with the bottom corners and an apex at
/// `(w/2, h)` with the top corners; Left/Right is the same construction
/// rotated a quarter turn. `Both` emits Up/Down first, then Left/Right.
pub fn pyramid(w: f64, h: f64, mode: PyramidMode) -> Vec<LineSegment> {
    let mut out = Vec::new();
    if matches!(mode, PyramidMode::UpDown | PyramidMode::Both) {
        let top_apex = Point::new(w / 2.0, 0.0);
        let bottom_apex = Point::new(w / 2.0, h);
        out.push(LineSegment::new((0.0, h), top_apex));
        out.push(LineSegment::new(top_apex, (w, h)));
        out.push(LineSegment::new((0.0, 0.0), bottom_apex));
        out.push(LineSegment::new(bottom_apex, (w, 0.0)));
    }
    if matches!(mode, PyramidMode::LeftRight | PyramidMode::Both) {
        let left_apex = Point::new(0.0, h / 2.0);
        let right_apex = Point::new(w, h / 2.0);
        out.push(LineSegment::new((w, 0.0), left_apex));
        out.push(LineSegment::new(left_apex, (w, h)));
        out.push(LineSegment::new((0.0, 0.0), right_apex));
        out.push(LineSegment::new(right_apex, (0.0, h)));
    }
    out
}

/// Golden triangles: a main diagonal plus perpendiculars dropped from the two
/// remaining corners, meeting the diagonal at right angles.
///
/// Set 1 uses the top-left→bottom-right diagonal with feet from the top-right
/// and bottom-left corners; Set 2 is the mirrored construction. `Both` emits
/// Set 1 then Set 2 (six segments).
pub fn golden_triangles(w: f64, h: f64, set: GoldenTriangleSet) -> Vec<LineSegment> {
    let mut out = Vec::new();
    if matches!(set, GoldenTriangleSet::Set1 | GoldenTriangleSet::Both) {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(w, h);
        out.push(LineSegment::new(a, b));
        out.push(LineSegment::new((w, 0.0), foot_of_perpendicular((w, 0.0), a, b)));
        out.push(LineSegment::new((0.0, h), foot_of_perpendicular((0.0, h), a, b)));
    }
    if matches!(set, GoldenTriangleSet::Set2 | GoldenTriangleSet::Both) {
        let a = Point::new(w, 0.0);
        let b = Point::new(0.0, h);
        out.push(LineSegment::new(a, b));
        out.push(LineSegment::new((0.0, 0.0), foot_of_perpendicular((0.0, 0.0), a, b)));
        out.push(LineSegment::new((w, h), foot_of_perpendicular((w, h), a, b)));
    }
    out
}

/// Perspective fan from the vanishing point to equally spaced border points.
///
/// The border is parameterized by perimeter arc length (not angle) so spacing
/// looks uniform on non-square images: `count` points at arc positions
/// `(i + 0.5) * perimeter / count`, walking the rectangle clockwise from the
/// top-left corner. The half-interval offset keeps the construction symmetric,
/// so four lines on a square land on the edge midpoints.
pub fn perspective(w: f64, h: f64, count: u32, vanish_x: f64, vanish_y: f64) -> Vec<LineSegment> {
    let vanish = Point::new(vanish_x.clamp(0.0, 1.0) * w, vanish_y.clamp(0.0, 1.0) * h);
    let perimeter = 2.0 * (w + h);
    if count == 0 || perimeter <= 0.0 {
        return Vec::new();
    }

    (0..count)
        .map(|i| {
            let arc = (f64::from(i) + 0.5) * perimeter / f64::from(count);
            LineSegment::new(vanish, perimeter_point(w, h, arc))
        })
        .collect()
}

/// Build the complete overlay for one invocation.
///
/// Disabled guide types contribute nothing (they are skipped, not emitted and
/// discarded). Output depends only on `(w, h, config)`.
pub fn build_overlay(w: f64, h: f64, config: &GuideConfig) -> Overlay {
    let mut segments = Vec::new();
    if let Some(g) = config.grid {
        segments.extend(grid(w, h, g.lines_x, g.lines_y));
    }
    if config.diagonals {
        segments.extend(diagonals(w, h));
    }
    if config.phi_grid {
        segments.extend(phi_grid(w, h));
    }
    if config.pyramid != PyramidMode::Off {
        segments.extend(pyramid(w, h, config.pyramid));
    }
    if config.golden_triangles != GoldenTriangleSet::Off {
        segments.extend(golden_triangles(w, h, config.golden_triangles));
    }
    if let Some(p) = config.perspective {
        segments.extend(perspective(w, h, p.lines, p.vanish_x, p.vanish_y));
    }
    Overlay {
        segments,
        color: config.color,
        thickness: config.thickness,
        blend_mode: config.blend_mode,
    }
}

/// Project `p` onto the infinite line through `a` and `b`.
///
/// A degenerate line (`a == b`) projects everything onto `a`.
fn foot_of_perpendicular(p: impl Into<Point>, a: Point, b: Point) -> Point {
    let p = p.into();
    let d: Vec2 = b - a;
    let len2 = d.dot(d);
    if len2 <= 0.0 {
        return a;
    }
    let t = (p - a).dot(d) / len2;
    a + d * t
}

/// Map a clockwise arc-length position on the rectangle border to a point.
///
/// Arc 0 is the top-left corner; the walk goes top, right, bottom, left.
fn perimeter_point(w: f64, h: f64, arc: f64) -> Point {
    let perimeter = 2.0 * (w + h);
    let mut s = arc.rem_euclid(perimeter);

    if s < w {
        return Point::new(s, 0.0);
    }
    s -= w;
    if s < h {
        return Point::new(w, s);
    }
    s -= h;
    if s < w {
        return Point::new(w - s, h);
    }
    s -= w;
    Point::new(0.0, h - s)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/builders.rs"]
mod tests;
