//! Draw list: the scene as renderer-neutral primitives.
//!
//! [`build`] reads scene state and a computed [`Frame`] and returns what to
//! draw, bottom layer first. It does no projection math of its own. The SVG
//! and Canvas2D back ends consume the same list.

#[cfg(test)]
#[path = "draw_test.rs"]
mod draw_test;

use crate::consts::{
    BARRIER_HEIGHT, BARRIER_WIDTH, SCREEN_FACE_BOTTOM, SCREEN_FACE_LEFT, SCREEN_FACE_RIGHT, SCREEN_FACE_SKEW,
    SCREEN_FACE_TOP,
};
use crate::engine::Frame;
use crate::geometry::Point;
use crate::scene::Scene;
use crate::shape::SourceShape;

const BACKGROUND: &str = "#2a2a2a";
const FURNITURE_FILL: &str = "#333333";
const FURNITURE_STROKE: &str = "#444444";
const FLAG_STROKE: &str = "#ffffff";
const RAY_STROKE: &str = "#FFD700";
const MARKER_FILL: &str = "#ffffff";

const FURNITURE_STROKE_WIDTH: f64 = 2.0;
const FLAG_STROKE_WIDTH: f64 = 4.0;
const RAY_STROKE_WIDTH: f64 = 1.0;
const RAY_OPACITY: f64 = 0.6;
const PINHOLE_RADIUS: f64 = 3.0;
const SCREEN_CENTER_RADIUS: f64 = 1.0;

/// Stroke paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f64,
    pub opacity: f64,
}

/// One drawable element in scene coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Axis-aligned filled rectangle.
    Rect { origin: Point, width: f64, height: f64, fill: &'static str },
    /// Closed filled and outlined polygon.
    Polygon { points: Vec<Point>, fill: &'static str, stroke: Stroke },
    /// Unconnected line segments sharing one stroke.
    Segments { segments: Vec<(Point, Point)>, stroke: Stroke },
    /// Filled circle.
    Circle { center: Point, radius: f64, fill: &'static str },
}

/// Build the draw list for the current state.
///
/// Layers: background, barrier, source flag, pinhole, screen center, screen
/// face, rays, image.
#[must_use]
pub fn build(scene: &Scene, shape: &SourceShape, frame: &Frame) -> Vec<Primitive> {
    let flag_stroke = Stroke { color: FLAG_STROKE, width: FLAG_STROKE_WIDTH, opacity: 1.0 };
    let furniture_stroke = Stroke { color: FURNITURE_STROKE, width: FURNITURE_STROKE_WIDTH, opacity: 1.0 };
    let ray_stroke = Stroke { color: RAY_STROKE, width: RAY_STROKE_WIDTH, opacity: RAY_OPACITY };

    let source_points: Vec<Point> = shape.points().collect();
    let image_points: Vec<Point> = frame.image.points().collect();

    vec![
        Primitive::Rect {
            origin: Point::new(0.0, 0.0),
            width: scene.bounds.width,
            height: scene.bounds.height,
            fill: BACKGROUND,
        },
        Primitive::Polygon { points: barrier(scene), fill: FURNITURE_FILL, stroke: furniture_stroke },
        Primitive::Segments { segments: stroke_segments(shape, &source_points), stroke: flag_stroke },
        Primitive::Circle { center: scene.pinhole, radius: PINHOLE_RADIUS, fill: MARKER_FILL },
        Primitive::Circle {
            center: Point::new(scene.screen_x, scene.pinhole.y),
            radius: SCREEN_CENTER_RADIUS,
            fill: MARKER_FILL,
        },
        Primitive::Polygon { points: screen_face(scene), fill: FURNITURE_FILL, stroke: furniture_stroke },
        Primitive::Segments {
            segments: frame.projection.rays.iter().map(|r| (r.from, r.to)).collect(),
            stroke: ray_stroke,
        },
        Primitive::Segments { segments: stroke_segments(shape, &image_points), stroke: flag_stroke },
    ]
}

fn stroke_segments(shape: &SourceShape, points: &[Point]) -> Vec<(Point, Point)> {
    shape
        .strokes()
        .iter()
        .filter_map(|&(a, b)| Some((*points.get(a)?, *points.get(b)?)))
        .collect()
}

/// Opaque barrier around the pinhole, drawn as a slanted slab.
fn barrier(scene: &Scene) -> Vec<Point> {
    let c = scene.pinhole;
    let hw = BARRIER_WIDTH / 2.0;
    let hh = BARRIER_HEIGHT / 2.0;
    vec![
        Point::new(c.x - hw, c.y - hh + hw),
        Point::new(c.x + hw, c.y - hh),
        Point::new(c.x + hw, c.y + hh - hw),
        Point::new(c.x - hw, c.y + hh),
    ]
}

/// Screen face in oblique view, leaning back from the screen plane.
fn screen_face(scene: &Scene) -> Vec<Point> {
    let x = scene.screen_x;
    vec![
        Point::new(x - SCREEN_FACE_LEFT, SCREEN_FACE_TOP + SCREEN_FACE_SKEW),
        Point::new(x + SCREEN_FACE_RIGHT, SCREEN_FACE_TOP),
        Point::new(x + SCREEN_FACE_RIGHT, SCREEN_FACE_BOTTOM - SCREEN_FACE_SKEW),
        Point::new(x - SCREEN_FACE_LEFT, SCREEN_FACE_BOTTOM),
    ]
}
