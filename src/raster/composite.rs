//! Stroke rasterization onto a preview buffer.
//!
//! The compositor copies its input and rasterizes each overlay segment in
//! emission order. Coverage is a linear ramp of the distance from the pixel
//! center to the stroke centerline, so it is monotonic in proximity; the
//! covered fraction scales the stroke alpha before the blend-mode composite.

use crate::foundation::core::{LineSegment, Point, PreviewBuffer, Vec2};
use crate::geometry::builders::Overlay;
use crate::raster::blend::composite_pixel;

/// Half-pixel apron around the stroke edge for the anti-alias ramp.
const AA_RAMP: f64 = 0.5;

/// Rasterize `overlay` onto a copy of `preview`.
///
/// The input buffer is never mutated; the returned buffer is a distinct
/// allocation. Segment coordinates outside the buffer clamp to its edges
/// rather than being rejected; zero-length segments rasterize as nothing.
pub fn composite(preview: &PreviewBuffer, overlay: &Overlay) -> PreviewBuffer {
    let mut out = preview.clone();
    let thickness = overlay.thickness.clamp(0.1, 32.0);
    for segment in &overlay.segments {
        stroke_segment(&mut out, *segment, overlay, thickness);
    }
    out
}

fn stroke_segment(buf: &mut PreviewBuffer, segment: LineSegment, overlay: &Overlay, thickness: f64) {
    let w = f64::from(buf.width);
    let h = f64::from(buf.height);
    let clamp_pt = |p: Point| Point::new(p.x.clamp(0.0, w), p.y.clamp(0.0, h));
    let a = clamp_pt(segment.a);
    let b = clamp_pt(segment.b);

    let d: Vec2 = b - a;
    let len2 = d.dot(d);
    if len2 <= 0.0 {
        return;
    }

    let half = thickness / 2.0;
    let reach = half + AA_RAMP;

    let x0 = ((a.x.min(b.x) - reach).floor().max(0.0)) as u32;
    let y0 = ((a.y.min(b.y) - reach).floor().max(0.0)) as u32;
    let x1 = ((a.x.max(b.x) + reach).ceil() as i64).min(i64::from(buf.width)) as u32;
    let y1 = ((a.y.max(b.y) + reach).ceil() as i64).min(i64::from(buf.height)) as u32;

    let stroke_alpha = f32::from(overlay.color.a) / 255.0;

    for y in y0..y1 {
        for x in x0..x1 {
            let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            let dist = distance_to_segment(center, a, d, len2);
            let coverage = ((half + AA_RAMP - dist) / (2.0 * AA_RAMP)).clamp(0.0, 1.0);
            if coverage <= 0.0 {
                continue;
            }
            let src_alpha = stroke_alpha * coverage as f32;
            let dst = buf.pixel(x, y);
            buf.put_pixel(x, y, composite_pixel(overlay.blend_mode, dst, overlay.color, src_alpha));
        }
    }
}

/// Distance from `p` to the closed segment starting at `a` with direction `d`.
fn distance_to_segment(p: Point, a: Point, d: Vec2, len2: f64) -> f64 {
    let t = ((p - a).dot(d) / len2).clamp(0.0, 1.0);
    let nearest = a + d * t;
    (p - nearest).hypot()
}

#[cfg(test)]
#[path = "../../tests/unit/raster/composite.rs"]
mod tests;
