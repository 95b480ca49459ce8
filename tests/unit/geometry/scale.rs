use super::*;

fn canvas(width: u32, height: u32) -> Canvas {
    Canvas { width, height }
}

#[test]
fn small_images_pass_through_untouched() {
    let s = fit_within(canvas(640, 480), 1024);
    assert_eq!((s.width, s.height), (640, 480));
    assert_eq!(s.factor, 1.0);

    // Exactly at the limit is still identity.
    let s = fit_within(canvas(1024, 512), 1024);
    assert_eq!((s.width, s.height), (1024, 512));
    assert_eq!(s.factor, 1.0);
}

#[test]
fn landscape_scales_width_to_limit() {
    let s = fit_within(canvas(2048, 1536), 1024);
    assert_eq!((s.width, s.height), (1024, 768));
    assert!((s.factor - 0.5).abs() < 1e-12);
}

#[test]
fn portrait_scales_height_to_limit() {
    let s = fit_within(canvas(1536, 2048), 1024);
    assert_eq!((s.width, s.height), (768, 1024));
}

#[test]
fn smaller_dimension_rounds_not_truncates() {
    // 1000 * 256 / 3000 = 85.33 -> 85; 1000 * 256 / 1500 = 170.67 -> 171.
    let s = fit_within(canvas(3000, 1000), 256);
    assert_eq!((s.width, s.height), (256, 85));
    let s = fit_within(canvas(1500, 1000), 256);
    assert_eq!((s.width, s.height), (256, 171));
}

#[test]
fn extreme_aspect_ratio_never_collapses_to_zero() {
    let s = fit_within(canvas(100_000, 10), 256);
    assert_eq!(s.width, 256);
    assert_eq!(s.height, 1);
}

#[test]
fn square_halves_both_axes() {
    let s = fit_within(canvas(512, 512), 256);
    assert_eq!((s.width, s.height), (256, 256));
    assert!((s.factor - 0.5).abs() < 1e-12);
}
