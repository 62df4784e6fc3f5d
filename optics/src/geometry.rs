//! Pinhole projection by similar triangles.
//!
//! A ray leaves each source anchor, passes through the pinhole, and lands on
//! the vertical screen plane at `screen_x`. With the pinhole between source
//! and screen, the landing point is inverted about `pinhole.y` and scaled by
//! `distance_to_screen / distance_to_pinhole`.
//!
//! Everything here is pure. When an anchor sits at or past the pinhole
//! (`pinhole.x - p.x <= 0`) the result is non-finite or lands on the wrong
//! side; callers keep the source clamped, or use
//! [`crate::scene::Scene::try_project`] to reject such input.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::shape::SourceShape;

/// A point in scene space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// This point shifted by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A traced light ray from a source anchor to where it meets the screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub from: Point,
    pub to: Point,
}

/// Magnification for a point at horizontal position `x`.
///
/// This is the only place the similar-triangles ratio is computed.
#[must_use]
pub fn ratio(x: f64, pinhole: Point, screen_x: f64) -> f64 {
    let distance_to_screen = screen_x - pinhole.x;
    let distance_to_pinhole = pinhole.x - x;
    distance_to_screen / distance_to_pinhole
}

/// Where the ray from `p` through `pinhole` crosses the plane `x = screen_x`.
#[must_use]
pub fn project_point(p: Point, pinhole: Point, screen_x: f64) -> Point {
    let ratio = ratio(p.x, pinhole, screen_x);
    Point { x: screen_x, y: pinhole.y + (pinhole.y - p.y) * ratio }
}

/// One projected anchor, carrying the label of the source anchor it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedAnchor {
    pub label: String,
    pub point: Point,
}

/// The source shape as it lands on the screen. Same order and cardinality as
/// the source anchors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectedShape {
    pub anchors: Vec<ProjectedAnchor>,
}

impl ProjectedShape {
    #[must_use]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.anchors.iter().map(|a| a.point)
    }

    /// Projected position of the anchor with the given label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<Point> {
        self.anchors.iter().find(|a| a.label == label).map(|a| a.point)
    }

    /// Vertical extent of the projected anchors; `0.0` when empty.
    #[must_use]
    pub fn height(&self) -> f64 {
        let mut ys = self.points().map(|p| p.y);
        let Some(first) = ys.next() else {
            return 0.0;
        };
        let (lo, hi) = ys.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
        hi - lo
    }
}

/// Project every anchor of `shape` independently.
///
/// Anchors at different `x` get different ratios, so this is not an affine
/// map of the whole shape.
#[must_use]
pub fn project_shape(shape: &SourceShape, pinhole: Point, screen_x: f64) -> ProjectedShape {
    let anchors = shape
        .labeled_points()
        .map(|(label, p)| ProjectedAnchor { label: label.to_owned(), point: project_point(p, pinhole, screen_x) })
        .collect();
    ProjectedShape { anchors }
}

/// One ray per anchor, from the anchor to its own projection, in anchor order.
#[must_use]
pub fn trace_rays(shape: &SourceShape, pinhole: Point, screen_x: f64) -> Vec<Ray> {
    Projection::compute(shape, pinhole, screen_x).rays
}

/// Rays and projected shape for one source position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub rays: Vec<Ray>,
    pub projected: ProjectedShape,
}

impl Projection {
    /// Compute both outputs in one pass over the anchors.
    #[must_use]
    pub fn compute(shape: &SourceShape, pinhole: Point, screen_x: f64) -> Self {
        let projected = project_shape(shape, pinhole, screen_x);
        let rays = shape
            .points()
            .zip(projected.points())
            .map(|(from, to)| Ray { from, to })
            .collect();
        Self { rays, projected }
    }
}
