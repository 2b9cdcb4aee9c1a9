// Host-side tests for pointer-avoidance geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}

use geometry::*;
use glam::DVec2;

const VIEWPORT: DVec2 = DVec2::new(1000.0, 800.0);

fn params() -> AvoidParams {
    AvoidParams {
        radius: 120.0,
        jump: 80.0,
        padding: 16.0,
    }
}

fn centered_at(center: DVec2, width: f64, height: f64) -> Rect {
    Rect::new(center.x - width * 0.5, center.y - height * 0.5, width, height)
}

fn with_top_left(rect: &Rect, top_left: DVec2) -> Rect {
    Rect::new(top_left.x, top_left.y, rect.width, rect.height)
}

fn assert_inside(rect: &Rect, viewport: DVec2, padding: f64) {
    let eps = 1e-9;
    assert!(rect.left >= padding - eps, "left {} < padding", rect.left);
    assert!(rect.top >= padding - eps, "top {} < padding", rect.top);
    assert!(
        rect.left + rect.width <= viewport.x - padding + eps,
        "right edge {} past viewport",
        rect.left + rect.width
    );
    assert!(
        rect.top + rect.height <= viewport.y - padding + eps,
        "bottom edge {} past viewport",
        rect.top + rect.height
    );
}

#[test]
fn default_params_match_constants() {
    let p = AvoidParams::default();
    assert_eq!(p, params());
}

#[test]
fn far_pointer_leaves_target_alone() {
    let target = centered_at(DVec2::new(500.0, 400.0), 100.0, 50.0);
    let center = target.center();
    for step in 0..72 {
        let angle = (step as f64 * 5.0).to_radians();
        for dist in [120.0, 121.0, 200.0, 600.0] {
            let pointer = center + DVec2::new(angle.cos(), angle.sin()) * dist;
            if pointer.distance(center) < 120.0 {
                // cos/sin rounding can land a hair inside the radius
                continue;
            }
            assert_eq!(evaluate(pointer, &target, VIEWPORT, &params()), None);
        }
    }
}

#[test]
fn pointer_exactly_on_radius_is_ignored() {
    let target = centered_at(DVec2::new(500.0, 400.0), 100.0, 50.0);
    let pointer = DVec2::new(620.0, 400.0);
    assert_eq!(evaluate(pointer, &target, VIEWPORT, &params()), None);
}

#[test]
fn near_pointer_keeps_target_inside_viewport() {
    let p = params();
    let centers = [
        DVec2::new(500.0, 400.0),
        DVec2::new(70.0, 45.0),
        DVec2::new(930.0, 755.0),
        DVec2::new(66.0, 700.0),
        DVec2::new(934.0, 41.0),
    ];
    for c in centers {
        let target = centered_at(c, 100.0, 50.0);
        for step in 0..36 {
            let angle = (step as f64 * 10.0).to_radians();
            for dist in [0.0, 1.0, 30.0, 119.0] {
                let pointer = c + DVec2::new(angle.cos(), angle.sin()) * dist;
                let top_left = evaluate(pointer, &target, VIEWPORT, &p)
                    .expect("pointer inside radius must move the target");
                let moved = with_top_left(&target, top_left);
                assert_inside(&moved, VIEWPORT, p.padding);
            }
        }
    }
}

#[test]
fn jumps_stay_inside_viewport_across_grid() {
    let p = params();
    for cx in (66..=934).step_by(62) {
        for cy in (41..=759).step_by(59) {
            let c = DVec2::new(cx as f64, cy as f64);
            let target = centered_at(c, 100.0, 50.0);
            for (ox, oy) in [(-40.0, 0.0), (0.0, 40.0), (25.0, -25.0), (3.0, 1.0)] {
                let pointer = c + DVec2::new(ox, oy);
                let top_left = evaluate(pointer, &target, VIEWPORT, &p).unwrap();
                assert_inside(&with_top_left(&target, top_left), VIEWPORT, p.padding);
            }
        }
    }
}

#[test]
fn jump_has_fixed_length_and_points_away() {
    let center = DVec2::new(300.0, 200.0);
    for (px, py) in [(301.0, 200.0), (250.0, 260.0), (300.0, 80.5), (390.0, 111.0)] {
        let pointer = DVec2::new(px, py);
        let moved = jump_center(pointer, center, 80.0);
        let displacement = moved - center;
        assert!((displacement.length() - 80.0).abs() < 1e-9);
        assert!(displacement.dot(center - pointer) > 0.0);
    }
}

#[test]
fn coincident_pointer_uses_fallback_direction() {
    let center = DVec2::new(500.0, 400.0);
    let moved = jump_center(center, center, 80.0);
    assert_eq!(moved, center + FALLBACK_DIRECTION * 80.0);

    let target = centered_at(center, 100.0, 50.0);
    let top_left = evaluate(center, &target, VIEWPORT, &params()).unwrap();
    let new_center = with_top_left(&target, top_left).center();
    assert!((new_center.distance(center) - 80.0).abs() < 1e-9);
}

#[test]
fn reference_scenario_moves_up_and_left() {
    let target = centered_at(DVec2::new(500.0, 400.0), 100.0, 50.0);
    let pointer = DVec2::new(510.0, 405.0);
    assert!(pointer.distance(target.center()) < 120.0);

    let top_left = evaluate(pointer, &target, VIEWPORT, &params()).unwrap();
    let moved = with_top_left(&target, top_left);
    let new_center = moved.center();

    let expected = DVec2::new(500.0, 400.0) + DVec2::new(-10.0, -5.0).normalize() * 80.0;
    assert!(new_center.distance(expected) < 1e-9);
    assert!(new_center.distance(pointer) > target.center().distance(pointer));
    assert_inside(&moved, VIEWPORT, 16.0);
}

#[test]
fn jump_toward_edge_is_clamped() {
    // Pointer on the left pushes the target right, into the right edge.
    let target = Rect::new(870.0, 300.0, 100.0, 50.0);
    let pointer = DVec2::new(900.0, 325.0);
    let top_left = evaluate(pointer, &target, VIEWPORT, &params()).unwrap();
    assert!((top_left.x - (1000.0 - 16.0 - 100.0)).abs() < 1e-9);
    assert!((top_left.y - 300.0).abs() < 1e-9);
}

#[test]
fn inverted_clamp_range_collapses_to_midpoint() {
    assert_eq!(clamp_axis(5.0, 10.0, 20.0), 10.0);
    assert_eq!(clamp_axis(25.0, 10.0, 20.0), 20.0);
    assert_eq!(clamp_axis(15.0, 10.0, 20.0), 15.0);
    assert_eq!(clamp_axis(0.0, 80.0, 20.0), 50.0);

    // 100px-wide button in a 120px-wide viewport with 16px padding
    let tiny = DVec2::new(120.0, 800.0);
    let target = centered_at(DVec2::new(60.0, 400.0), 100.0, 50.0);
    let top_left = evaluate(DVec2::new(50.0, 400.0), &target, tiny, &params()).unwrap();
    let c = with_top_left(&target, top_left).center();
    assert!((c.x - 60.0).abs() < 1e-9);
}

#[test]
fn empty_target_is_a_no_op() {
    let hidden = Rect::new(500.0, 400.0, 0.0, 0.0);
    assert_eq!(evaluate(DVec2::new(500.0, 400.0), &hidden, VIEWPORT, &params()), None);
    let broken = Rect::new(500.0, 400.0, f64::NAN, 20.0);
    assert!(broken.is_empty());
}

#[test]
fn sync_centers_over_anchor_top() {
    let anchor = Rect::new(400.0, 500.0, 160.0, 48.0);
    let target = Rect::new(0.0, 0.0, 100.0, 40.0);
    let top_left = sync_position(&anchor, &target).unwrap();
    assert_eq!(top_left, DVec2::new(430.0, 500.0));
}

#[test]
fn sync_is_idempotent() {
    let anchor = Rect::new(400.0, 500.0, 160.0, 48.0);
    let target = Rect::new(12.0, 7.0, 100.0, 40.0);
    let first = sync_position(&anchor, &target).unwrap();
    let placed = with_top_left(&target, first);
    let second = sync_position(&anchor, &placed).unwrap();
    assert_eq!(first, second);
}

#[test]
fn sync_without_anchor_layout_is_skipped() {
    let anchor = Rect::new(400.0, 500.0, 0.0, 0.0);
    let target = Rect::new(0.0, 0.0, 100.0, 40.0);
    assert_eq!(sync_position(&anchor, &target), None);
}
