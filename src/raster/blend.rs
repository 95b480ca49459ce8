//! Per-pixel blend formulas for overlay strokes.
//!
//! Implements the W3C compositing-and-blending model on straight-alpha
//! channels: the source color is first blended against the backdrop with the
//! mode's `B(Cb, Cs)` function, then composited source-over. `lighter` is the
//! plus-lighter composite and bypasses the blend step entirely.

use crate::config::params::BlendMode;
use crate::foundation::core::Rgba8;
use crate::foundation::math::{u8_from_unit, unit_from_u8};

/// Composite one stroke sample over a backdrop pixel.
///
/// `src_alpha` is the effective source alpha (stroke alpha already scaled by
/// raster coverage), in `[0, 1]`. Both pixels are straight alpha.
pub(crate) fn composite_pixel(mode: BlendMode, dst: Rgba8, src: Rgba8, src_alpha: f32) -> Rgba8 {
    let sa = src_alpha.clamp(0.0, 1.0);
    if sa <= 0.0 {
        return dst;
    }

    let cs = [unit_from_u8(src.r), unit_from_u8(src.g), unit_from_u8(src.b)];
    let cb = [unit_from_u8(dst.r), unit_from_u8(dst.g), unit_from_u8(dst.b)];
    let ab = unit_from_u8(dst.a);

    if mode == BlendMode::Lighter {
        // Plus-lighter: additive in premultiplied space, no blend step.
        let ao = (sa + ab).min(1.0);
        let co = |i: usize| sa * cs[i] + ab * cb[i];
        let out = |i: usize| if ao > 0.0 { co(i) / ao } else { 0.0 };
        return Rgba8::new(
            u8_from_unit(out(0)),
            u8_from_unit(out(1)),
            u8_from_unit(out(2)),
            u8_from_unit(ao),
        );
    }

    let blended = blend_channels(mode, cb, cs);
    let ao = sa + ab * (1.0 - sa);
    if ao <= 0.0 {
        return Rgba8::new(0, 0, 0, 0);
    }

    let out = |i: usize| {
        // Source regions not covered by the backdrop keep the raw source
        // color; covered regions take the blend result.
        let cm = (1.0 - ab) * cs[i] + ab * blended[i];
        (sa * cm + ab * cb[i] * (1.0 - sa)) / ao
    };
    Rgba8::new(
        u8_from_unit(out(0)),
        u8_from_unit(out(1)),
        u8_from_unit(out(2)),
        u8_from_unit(ao),
    )
}

/// The mode's `B(Cb, Cs)` function over straight-color triples.
fn blend_channels(mode: BlendMode, cb: [f32; 3], cs: [f32; 3]) -> [f32; 3] {
    let separable = |f: fn(f32, f32) -> f32| {
        [f(cb[0], cs[0]), f(cb[1], cs[1]), f(cb[2], cs[2])]
    };

    match mode {
        BlendMode::SourceOver | BlendMode::Lighter => cs,
        BlendMode::Multiply => separable(|b, s| b * s),
        BlendMode::Screen => separable(screen),
        BlendMode::Overlay => separable(|b, s| hard_light(s, b)),
        BlendMode::Darken => separable(f32::min),
        BlendMode::Lighten => separable(f32::max),
        BlendMode::ColorDodge => separable(color_dodge),
        BlendMode::ColorBurn => separable(color_burn),
        BlendMode::HardLight => separable(hard_light),
        BlendMode::SoftLight => separable(soft_light),
        BlendMode::Difference => separable(|b, s| (b - s).abs()),
        BlendMode::Exclusion => separable(|b, s| b + s - 2.0 * b * s),
        BlendMode::Hue => set_lum(set_sat(cs, sat(cb)), lum(cb)),
        BlendMode::Saturation => set_lum(set_sat(cb, sat(cs)), lum(cb)),
        BlendMode::Color => set_lum(cs, lum(cb)),
        BlendMode::Luminosity => set_lum(cb, lum(cs)),
    }
}

fn screen(b: f32, s: f32) -> f32 {
    b + s - b * s
}

fn hard_light(b: f32, s: f32) -> f32 {
    if s <= 0.5 {
        b * (2.0 * s)
    } else {
        screen(b, 2.0 * s - 1.0)
    }
}

fn color_dodge(b: f32, s: f32) -> f32 {
    if b <= 0.0 {
        0.0
    } else if s >= 1.0 {
        1.0
    } else {
        (b / (1.0 - s)).min(1.0)
    }
}

fn color_burn(b: f32, s: f32) -> f32 {
    if b >= 1.0 {
        1.0
    } else if s <= 0.0 {
        0.0
    } else {
        1.0 - ((1.0 - b) / s).min(1.0)
    }
}

fn soft_light(b: f32, s: f32) -> f32 {
    if s <= 0.5 {
        b - (1.0 - 2.0 * s) * b * (1.0 - b)
    } else {
        let d = if b <= 0.25 {
            ((16.0 * b - 12.0) * b + 4.0) * b
        } else {
            b.sqrt()
        };
        b + (2.0 * s - 1.0) * (d - b)
    }
}

fn lum(c: [f32; 3]) -> f32 {
    0.3 * c[0] + 0.59 * c[1] + 0.11 * c[2]
}

fn sat(c: [f32; 3]) -> f32 {
    c[0].max(c[1]).max(c[2]) - c[0].min(c[1]).min(c[2])
}

fn clip_color(c: [f32; 3]) -> [f32; 3] {
    let l = lum(c);
    let n = c[0].min(c[1]).min(c[2]);
    let x = c[0].max(c[1]).max(c[2]);
    let mut out = c;
    if n < 0.0 {
        for v in &mut out {
            *v = l + (*v - l) * l / (l - n);
        }
    }
    if x > 1.0 {
        for v in &mut out {
            *v = l + (*v - l) * (1.0 - l) / (x - l);
        }
    }
    out
}

fn set_lum(c: [f32; 3], l: f32) -> [f32; 3] {
    let d = l - lum(c);
    clip_color([c[0] + d, c[1] + d, c[2] + d])
}

fn set_sat(c: [f32; 3], s: f32) -> [f32; 3] {
    // Order the channels, scale the middle, floor the minimum.
    let mut idx = [0usize, 1, 2];
    idx.sort_by(|&i, &j| c[i].partial_cmp(&c[j]).unwrap_or(std::cmp::Ordering::Equal));
    let [min_i, mid_i, max_i] = idx;

    let mut out = [0.0f32; 3];
    if c[max_i] > c[min_i] {
        out[mid_i] = (c[mid_i] - c[min_i]) * s / (c[max_i] - c[min_i]);
        out[max_i] = s;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/raster/blend.rs"]
mod tests;
