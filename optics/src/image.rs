//! The image as drawn on the screen face.
//!
//! On the screen plane every projected anchor has `x == screen_x`, so the
//! projected shape alone is a vertical sliver. For display, the flag is drawn
//! on the screen face as the source silhouette rotated by 180° (flipped and
//! mirrored) and scaled by the magnification at the source origin, hung from
//! the projected origin.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use serde::Serialize;

use crate::geometry::{Point, ProjectedAnchor, project_point};
use crate::scene::Scene;
use crate::shape::SourceShape;

/// Screen-face outline of the projected image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenImage {
    /// Outline anchors, in source anchor order.
    pub anchors: Vec<ProjectedAnchor>,
    /// Magnification at the source origin.
    pub magnification: f64,
}

impl ScreenImage {
    #[must_use]
    pub fn new(scene: &Scene, shape: &SourceShape) -> Self {
        let origin = shape.origin();
        let magnification = scene.ratio_at(origin.x);
        let hang = project_point(origin, scene.pinhole, scene.screen_x);
        let anchors = shape
            .anchors()
            .iter()
            .map(|a| ProjectedAnchor {
                label: a.label.clone(),
                point: Point::new(hang.x - a.dx * magnification, hang.y - a.dy * magnification),
            })
            .collect();
        Self { anchors, magnification }
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.anchors.iter().map(|a| a.point)
    }
}
