#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::HANDLE_RADIUS_PX;
use crate::geometry::Point;
use crate::shape::SourceShape;
use crate::viewport::Viewport;

/// Which part of the source was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    /// An anchor point, by index.
    Anchor(usize),
    /// A stroke between two anchors, by stroke index.
    Stroke(usize),
}

/// Test whether `scene_pt` grabs the source.
///
/// Anchors win over strokes. The slop is a fixed screen-pixel radius, so it
/// shrinks in scene units as the viewport zooms in.
#[must_use]
pub fn hit_source(scene_pt: Point, shape: &SourceShape, viewport: &Viewport) -> Option<HitPart> {
    let slop = viewport.screen_dist_to_scene(HANDLE_RADIUS_PX);
    let points: Vec<Point> = shape.points().collect();

    if let Some(index) = points.iter().position(|p| p.distance_to(scene_pt) <= slop) {
        return Some(HitPart::Anchor(index));
    }

    shape
        .strokes()
        .iter()
        .position(|&(a, b)| distance_to_segment(scene_pt, points[a], points[b]) <= slop)
        .map(HitPart::Stroke)
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq <= f64::EPSILON {
        return p.distance_to(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance_to(Point::new(a.x + t * dx, a.y + t * dy))
}
