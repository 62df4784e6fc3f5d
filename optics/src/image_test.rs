#![allow(clippy::float_cmp)]

use super::*;
use crate::geometry::project_shape;
use crate::shape::flag;

const EPSILON: f64 = 1e-9;

fn point_approx_eq(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
}

fn image_at(x: f64, y: f64) -> ScreenImage {
    ScreenImage::new(&Scene::default(), &SourceShape::flag(Point::new(x, y)))
}

fn get(image: &ScreenImage, label: &str) -> Point {
    image
        .anchors
        .iter()
        .find(|a| a.label == label)
        .map(|a| a.point)
        .unwrap()
}

#[test]
fn unit_magnification_rotates_flag_half_turn() {
    let image = image_at(100.0, 250.0);
    assert_eq!(image.magnification, 1.0);
    assert!(point_approx_eq(get(&image, flag::BASE), Point::new(700.0, 250.0)));
    assert!(point_approx_eq(get(&image, flag::TOP), Point::new(700.0, 350.0)));
    assert!(point_approx_eq(get(&image, flag::TOP_TIP), Point::new(660.0, 370.0)));
    assert!(point_approx_eq(get(&image, flag::MIDDLE), Point::new(700.0, 300.0)));
    assert!(point_approx_eq(get(&image, flag::MIDDLE_TIP), Point::new(660.0, 320.0)));
}

#[test]
fn image_scales_with_origin_magnification() {
    // Origin 50 units from the pinhole: ratio 6.
    let image = image_at(350.0, 200.0);
    assert_eq!(image.magnification, 6.0);
    let base = get(&image, flag::BASE);
    assert!(point_approx_eq(base, Point::new(700.0, 550.0)));
    assert!(point_approx_eq(get(&image, flag::TOP), Point::new(700.0, 1150.0)));
    assert!(point_approx_eq(get(&image, flag::TOP_TIP), Point::new(460.0, 1270.0)));
}

#[test]
fn image_pole_matches_projected_pole() {
    // Pole anchors share the origin's x, so their outline position equals the
    // true projection.
    let scene = Scene::default();
    let shape = SourceShape::flag(Point::new(180.0, 310.0));
    let image = ScreenImage::new(&scene, &shape);
    let projected = project_shape(&shape, scene.pinhole, scene.screen_x);
    for label in [flag::TOP, flag::BASE, flag::MIDDLE] {
        assert!(point_approx_eq(get(&image, label), projected.get(label).unwrap()));
    }
}

#[test]
fn image_mirrors_tips_away_from_source_side() {
    let image = image_at(200.0, 250.0);
    let base = get(&image, flag::BASE);
    for label in [flag::TOP_TIP, flag::MIDDLE_TIP] {
        assert!(get(&image, label).x < base.x);
    }
}

#[test]
fn image_preserves_anchor_order() {
    let image = image_at(100.0, 250.0);
    assert_eq!(image.points().count(), 5);
    assert_eq!(image.anchors[2].label, flag::BASE);
}
