#![allow(clippy::float_cmp)]

use super::*;
use crate::shape::{Anchor, SourceShape, flag};

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn pinhole() -> Point {
    Point::new(400.0, 250.0)
}

const SCREEN_X: f64 = 700.0;

// =============================================================
// Point
// =============================================================

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_offset() {
    assert_eq!(Point::new(1.0, 2.0).offset(10.0, -5.0), Point::new(11.0, -3.0));
}

#[test]
fn point_distance() {
    assert!(approx_eq(Point::new(0.0, 0.0).distance_to(Point::new(3.0, 4.0)), 5.0));
}

#[test]
fn point_is_finite() {
    assert!(Point::new(1.0, 2.0).is_finite());
    assert!(!Point::new(f64::NAN, 2.0).is_finite());
    assert!(!Point::new(1.0, f64::INFINITY).is_finite());
}

// =============================================================
// ratio / project_point
// =============================================================

#[test]
fn ratio_equal_distances_is_one() {
    assert!(approx_eq(ratio(100.0, pinhole(), SCREEN_X), 1.0));
}

#[test]
fn project_point_unit_ratio_example() {
    let p = project_point(Point::new(100.0, 150.0), pinhole(), SCREEN_X);
    assert!(approx_eq(p.x, 700.0));
    assert!(approx_eq(p.y, 350.0));
}

#[test]
fn project_point_near_pinhole_magnifies() {
    assert!(approx_eq(ratio(350.0, pinhole(), SCREEN_X), 6.0));
    let p = project_point(Point::new(350.0, 200.0), pinhole(), SCREEN_X);
    assert!(approx_eq(p.x, 700.0));
    assert!(approx_eq(p.y, 550.0));
}

#[test]
fn project_point_always_lands_on_screen_plane() {
    for x in [0.0, 120.0, 333.3, 399.0] {
        for y in [-50.0, 0.0, 250.0, 480.0] {
            assert_eq!(project_point(Point::new(x, y), pinhole(), SCREEN_X).x, SCREEN_X);
        }
    }
}

#[test]
fn project_point_inverts_about_pinhole_y() {
    for x in [50.0, 200.0, 349.0] {
        for y in [10.0, 100.0, 249.0, 251.0, 400.0, 900.0] {
            let p = Point::new(x, y);
            let q = project_point(p, pinhole(), SCREEN_X);
            let before = (p.y - pinhole().y).signum();
            let after = (q.y - pinhole().y).signum();
            assert_eq!(after, -before, "no inversion for {p:?} -> {q:?}");
        }
    }
}

#[test]
fn project_point_closer_source_projects_larger() {
    let near = project_point(Point::new(300.0, 150.0), pinhole(), SCREEN_X);
    let far = project_point(Point::new(100.0, 150.0), pinhole(), SCREEN_X);
    assert!((near.y - pinhole().y).abs() > (far.y - pinhole().y).abs());
}

#[test]
fn project_point_on_axis_stays_on_axis() {
    for eps in [300.0, 10.0, 1e-3, 1e-9] {
        let q = project_point(Point::new(pinhole().x - eps, pinhole().y), pinhole(), SCREEN_X);
        assert_eq!(q.y, pinhole().y);
    }
}

#[test]
fn project_point_at_pinhole_is_not_finite() {
    let q = project_point(Point::new(400.0, 200.0), pinhole(), SCREEN_X);
    assert!(!q.is_finite());
}

#[test]
fn project_point_past_pinhole_lands_on_wrong_side() {
    // Past the pinhole the ray no longer passes through it; the sign flip is gone.
    let q = project_point(Point::new(500.0, 200.0), pinhole(), SCREEN_X);
    assert!(q.y < pinhole().y);
}

// =============================================================
// project_shape / trace_rays
// =============================================================

#[test]
fn project_shape_preserves_cardinality_and_labels() {
    let shape = SourceShape::flag(Point::new(100.0, 250.0));
    let projected = project_shape(&shape, pinhole(), SCREEN_X);
    assert_eq!(projected.len(), shape.len());
    let labels: Vec<&str> = projected.anchors.iter().map(|a| a.label.as_str()).collect();
    assert_eq!(labels, [flag::TOP, flag::TOP_TIP, flag::BASE, flag::MIDDLE, flag::MIDDLE_TIP]);
}

#[test]
fn project_shape_empty_shape() {
    let shape = SourceShape::new(Point::new(100.0, 250.0), Vec::new(), Vec::new()).unwrap();
    let projected = project_shape(&shape, pinhole(), SCREEN_X);
    assert!(projected.is_empty());
    assert_eq!(projected.height(), 0.0);
    assert!(trace_rays(&shape, pinhole(), SCREEN_X).is_empty());
}

#[test]
fn project_shape_is_idempotent() {
    let shape = SourceShape::flag(Point::new(180.0, 300.0));
    let a = project_shape(&shape, pinhole(), SCREEN_X);
    let b = project_shape(&shape, pinhole(), SCREEN_X);
    assert_eq!(a, b);
}

#[test]
fn project_shape_projects_each_anchor_independently() {
    let shape = SourceShape::flag(Point::new(100.0, 250.0));
    let projected = project_shape(&shape, pinhole(), SCREEN_X);
    for (source, image) in shape.points().zip(projected.points()) {
        assert_eq!(image, project_point(source, pinhole(), SCREEN_X));
    }
}

#[test]
fn project_shape_tips_magnify_more_than_pole() {
    // Tips sit 40 units closer to the pinhole, so their ratio is larger.
    let shape = SourceShape::flag(Point::new(100.0, 250.0));
    let projected = project_shape(&shape, pinhole(), SCREEN_X);
    let base = projected.get(flag::BASE).unwrap();
    let top = projected.get(flag::TOP).unwrap();
    let tip = projected.get(flag::TOP_TIP).unwrap();
    assert!(approx_eq(base.y, 250.0));
    assert!(approx_eq(top.y, 350.0));
    // (700-400)/(400-140) * (250-130) + 250
    assert!(approx_eq(tip.y, 250.0 + 120.0 * 300.0 / 260.0));
}

#[test]
fn projected_height_spans_extremes() {
    let shape = SourceShape::flag(Point::new(100.0, 250.0));
    let projected = project_shape(&shape, pinhole(), SCREEN_X);
    let tip = projected.get(flag::TOP_TIP).unwrap();
    assert!(approx_eq(projected.height(), tip.y - 250.0));
}

#[test]
fn projected_get_unknown_label_is_none() {
    let shape = SourceShape::flag(Point::new(100.0, 250.0));
    assert!(project_shape(&shape, pinhole(), SCREEN_X).get("nope").is_none());
}

#[test]
fn trace_rays_zip_anchors_with_projections() {
    let shape = SourceShape::flag(Point::new(120.0, 200.0));
    let rays = trace_rays(&shape, pinhole(), SCREEN_X);
    let projected = project_shape(&shape, pinhole(), SCREEN_X);
    assert_eq!(rays.len(), shape.len());
    for ((ray, from), to) in rays.iter().zip(shape.points()).zip(projected.points()) {
        assert_eq!(ray.from, from);
        assert_eq!(ray.to, to);
    }
}

#[test]
fn trace_rays_pass_through_pinhole() {
    let shape = SourceShape::flag(Point::new(150.0, 320.0));
    for ray in trace_rays(&shape, pinhole(), SCREEN_X) {
        let t = (pinhole().x - ray.from.x) / (ray.to.x - ray.from.x);
        let y = ray.from.y + t * (ray.to.y - ray.from.y);
        assert!(approx_eq(y, pinhole().y), "ray {ray:?} misses the pinhole");
    }
}

#[test]
fn trace_rays_custom_shape_order() {
    let anchors = vec![Anchor::new("b", 10.0, 0.0), Anchor::new("a", 0.0, 0.0)];
    let shape = SourceShape::new(Point::new(100.0, 100.0), anchors, vec![(0, 1)]).unwrap();
    let rays = trace_rays(&shape, pinhole(), SCREEN_X);
    assert_eq!(rays[0].from, Point::new(110.0, 100.0));
    assert_eq!(rays[1].from, Point::new(100.0, 100.0));
}

#[test]
fn projection_compute_matches_parts() {
    let shape = SourceShape::flag(Point::new(210.0, 180.0));
    let projection = Projection::compute(&shape, pinhole(), SCREEN_X);
    assert_eq!(projection.rays, trace_rays(&shape, pinhole(), SCREEN_X));
    assert_eq!(projection.projected, project_shape(&shape, pinhole(), SCREEN_X));
}

#[test]
fn projection_serializes_to_json() {
    let shape = SourceShape::flag(Point::new(100.0, 250.0));
    let projection = Projection::compute(&shape, pinhole(), SCREEN_X);
    let json = serde_json::to_value(&projection).unwrap();
    assert_eq!(json["rays"].as_array().unwrap().len(), 5);
    assert_eq!(json["projected"]["anchors"][2]["label"], "base");
    assert_eq!(json["projected"]["anchors"][2]["point"]["x"], 700.0);
}
