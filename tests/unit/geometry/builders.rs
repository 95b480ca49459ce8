use super::*;
use crate::config::params::{GuideConfig, GuideParams};

fn assert_near(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() <= tol, "{a} !~ {b} (tol {tol})");
}

#[test]
fn grid_3x3_is_the_rule_of_thirds() {
    let segs = grid(300.0, 150.0, 3, 3);
    assert_eq!(segs.len(), 4);

    // Two verticals at w/3 and 2w/3, full height.
    assert_eq!(segs[0], LineSegment::new((100.0, 0.0), (100.0, 150.0)));
    assert_eq!(segs[1], LineSegment::new((200.0, 0.0), (200.0, 150.0)));
    // Two horizontals at h/3 and 2h/3, full width.
    assert_eq!(segs[2], LineSegment::new((0.0, 50.0), (300.0, 50.0)));
    assert_eq!(segs[3], LineSegment::new((0.0, 100.0), (300.0, 100.0)));
}

#[test]
fn grid_never_emits_border_lines() {
    for (nx, ny) in [(2u32, 2u32), (5, 2), (64, 64)] {
        let segs = grid(640.0, 480.0, nx, ny);
        assert_eq!(segs.len() as u32, (nx - 1) + (ny - 1));
        for s in segs {
            for p in [s.a, s.b] {
                let on_vertical_border = p.x == 0.0 || p.x == 640.0;
                let on_horizontal_border = p.y == 0.0 || p.y == 480.0;
                // Endpoints touch the border, but no segment lies along it.
                assert!(!(on_vertical_border && s.a.x == s.b.x));
                assert!(!(on_horizontal_border && s.a.y == s.b.y));
            }
        }
    }
}

#[test]
fn diagonals_connect_opposite_corners() {
    let segs = diagonals(640.0, 480.0);
    assert_eq!(segs.len(), 2);
    assert_eq!(segs[0], LineSegment::new((0.0, 0.0), (640.0, 480.0)));
    assert_eq!(segs[1], LineSegment::new((640.0, 0.0), (0.0, 480.0)));
}

#[test]
fn phi_grid_divides_at_golden_ratio() {
    let (w, h) = (1000.0, 500.0);
    let segs = phi_grid(w, h);
    assert_eq!(segs.len(), 4);

    assert_near(segs[0].a.x / w, 0.382, 1e-3);
    assert_near(segs[1].a.x / w, 0.618, 1e-3);
    assert_near(segs[2].a.y / h, 0.382, 1e-3);
    assert_near(segs[3].a.y / h, 0.618, 1e-3);

    // The two divisions mirror each other around the axis midpoint.
    assert_near(segs[0].a.x + segs[1].a.x, w, 1e-9);
}

#[test]
fn pyramid_both_is_the_disjoint_union_of_the_pairs() {
    let (w, h) = (640.0, 480.0);
    let up_down = pyramid(w, h, PyramidMode::UpDown);
    let left_right = pyramid(w, h, PyramidMode::LeftRight);
    let both = pyramid(w, h, PyramidMode::Both);

    assert_eq!(up_down.len(), 4);
    assert_eq!(left_right.len(), 4);
    assert_eq!(both.len(), 8);
    assert_eq!(pyramid(w, h, PyramidMode::Off).len(), 0);

    for s in up_down.iter().chain(left_right.iter()) {
        assert_eq!(both.iter().filter(|b| *b == s).count(), 1);
    }
}

#[test]
fn pyramid_apexes_sit_on_edge_midpoints() {
    let segs = pyramid(640.0, 480.0, PyramidMode::UpDown);
    assert_eq!(segs[0].b, Point::new(320.0, 0.0));
    assert_eq!(segs[1].a, Point::new(320.0, 0.0));
    assert_eq!(segs[2].b, Point::new(320.0, 480.0));

    let segs = pyramid(640.0, 480.0, PyramidMode::LeftRight);
    assert_eq!(segs[0].b, Point::new(0.0, 240.0));
    assert_eq!(segs[2].b, Point::new(640.0, 240.0));
}

#[test]
fn golden_triangle_feet_lie_on_the_diagonal_at_right_angles() {
    let (w, h) = (640.0, 480.0);
    let segs = golden_triangles(w, h, GoldenTriangleSet::Both);
    assert_eq!(segs.len(), 6);

    for (diag_idx, perp_range) in [(0usize, 1..3usize), (3, 4..6)] {
        let diag = segs[diag_idx];
        let d = diag.b - diag.a;
        for perp in &segs[perp_range] {
            let foot = perp.b;
            // Foot on the diagonal line: cross product vanishes.
            let cross = (foot - diag.a).cross(d);
            assert_near(cross, 0.0, 1e-9 * d.hypot2());
            // Perpendicular meets the diagonal at a right angle.
            assert_near((foot - perp.a).dot(d), 0.0, 1e-6);
        }
    }
}

#[test]
fn golden_triangle_sets_select_their_diagonal() {
    let (w, h) = (640.0, 480.0);
    let set1 = golden_triangles(w, h, GoldenTriangleSet::Set1);
    assert_eq!(set1.len(), 3);
    assert_eq!(set1[0], LineSegment::new((0.0, 0.0), (w, h)));
    assert_eq!(set1[1].a, Point::new(w, 0.0));
    assert_eq!(set1[2].a, Point::new(0.0, h));

    let set2 = golden_triangles(w, h, GoldenTriangleSet::Set2);
    assert_eq!(set2.len(), 3);
    assert_eq!(set2[0], LineSegment::new((w, 0.0), (0.0, h)));

    let both = golden_triangles(w, h, GoldenTriangleSet::Both);
    assert_eq!(&both[..3], &set1[..]);
    assert_eq!(&both[3..], &set2[..]);
}

#[test]
fn perspective_centered_on_square_hits_edge_midpoints() {
    let segs = perspective(100.0, 100.0, 4, 0.5, 0.5);
    assert_eq!(segs.len(), 4);

    let expected = [
        Point::new(50.0, 0.0),
        Point::new(100.0, 50.0),
        Point::new(50.0, 100.0),
        Point::new(0.0, 50.0),
    ];
    for (seg, want) in segs.iter().zip(expected) {
        assert_eq!(seg.a, Point::new(50.0, 50.0));
        assert_near(seg.b.x, want.x, 1e-9);
        assert_near(seg.b.y, want.y, 1e-9);
    }
}

#[test]
fn perspective_spacing_is_uniform_in_perimeter_not_angle() {
    let (w, h) = (300.0, 100.0);
    let count = 8u32;
    let segs = perspective(w, h, count, 0.25, 0.75);
    assert_eq!(segs.len(), 8);

    // Consecutive far points are one perimeter interval apart along the
    // border walk, so the gap along a straight edge equals P/count.
    let interval = 2.0 * (w + h) / f64::from(count);
    let top: Vec<_> = segs.iter().filter(|s| s.b.y == 0.0).collect();
    assert!(top.len() >= 2);
    for pair in top.windows(2) {
        assert_near(pair[1].b.x - pair[0].b.x, interval, 1e-9);
    }

    for s in &segs {
        assert_eq!(s.a, Point::new(0.25 * w, 0.75 * h));
        let on_border = s.b.x == 0.0 || s.b.x == w || s.b.y == 0.0 || s.b.y == h;
        assert!(on_border, "far endpoint {:?} not on border", s.b);
    }
}

#[test]
fn perspective_vanishing_point_clamps_to_the_image() {
    let segs = perspective(200.0, 100.0, 2, 1.5, -0.5);
    assert_eq!(segs[0].a, Point::new(200.0, 0.0));
}

#[test]
fn degenerate_dimensions_yield_well_defined_segments() {
    // Zero-size image: every construction collapses without panicking.
    for segs in [
        grid(0.0, 0.0, 3, 3),
        diagonals(0.0, 0.0),
        phi_grid(0.0, 0.0),
        pyramid(0.0, 0.0, PyramidMode::Both),
        golden_triangles(0.0, 0.0, GoldenTriangleSet::Both),
    ] {
        for s in segs {
            assert_eq!(s.length(), 0.0);
        }
    }
    assert!(perspective(0.0, 0.0, 8, 0.5, 0.5).is_empty());

    // Single-pixel image still produces finite geometry.
    for s in golden_triangles(1.0, 1.0, GoldenTriangleSet::Both) {
        assert!(s.a.x.is_finite() && s.b.y.is_finite());
    }
}

#[test]
fn overlay_concatenates_in_fixed_guide_order() {
    let params = GuideParams {
        diagonals: true,
        phi_grid: true,
        pyramid: PyramidMode::Both,
        golden_triangles: GoldenTriangleSet::Both,
        perspective: true,
        perspective_lines: 4,
        ..GuideParams::default()
    };
    let config = GuideConfig::from_params(&params);
    let overlay = build_overlay(600.0, 400.0, &config);

    // grid(4) + diagonals(2) + phi(4) + pyramid(8) + golden(6) + perspective(4)
    assert_eq!(overlay.segments.len(), 28);
    assert_eq!(&overlay.segments[..4], &grid(600.0, 400.0, 3, 3)[..]);
    assert_eq!(&overlay.segments[4..6], &diagonals(600.0, 400.0)[..]);
    assert_eq!(&overlay.segments[6..10], &phi_grid(600.0, 400.0)[..]);
    assert_eq!(
        &overlay.segments[10..18],
        &pyramid(600.0, 400.0, PyramidMode::Both)[..]
    );
    assert_eq!(
        &overlay.segments[18..24],
        &golden_triangles(600.0, 400.0, GoldenTriangleSet::Both)[..]
    );
    assert_eq!(
        &overlay.segments[24..],
        &perspective(600.0, 400.0, 4, 0.5, 0.5)[..]
    );
}

#[test]
fn disabled_guides_emit_nothing() {
    let params = GuideParams {
        grid: false,
        ..GuideParams::default()
    };
    let config = GuideConfig::from_params(&params);
    let overlay = build_overlay(600.0, 400.0, &config);
    assert!(overlay.segments.is_empty());
}

#[test]
fn builders_are_deterministic() {
    let params = GuideParams {
        perspective: true,
        ..GuideParams::default()
    };
    let config = GuideConfig::from_params(&params);
    assert_eq!(
        build_overlay(611.0, 419.0, &config),
        build_overlay(611.0, 419.0, &config)
    );
}
