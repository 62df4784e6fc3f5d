//! Source shape: labeled anchors at fixed offsets from a draggable origin.
//!
//! The origin is the drag handle. Moving the shape moves the origin; anchor
//! offsets never change. Strokes index into the anchor list and only matter
//! for drawing.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use serde::{Deserialize, Serialize};

use crate::consts::{FLAG_HEIGHT, FLAG_WIDTH};
use crate::geometry::Point;

/// Anchor labels of the reference flag.
pub mod flag {
    pub const TOP: &str = "top";
    pub const TOP_TIP: &str = "top_tip";
    pub const BASE: &str = "base";
    pub const MIDDLE: &str = "middle";
    pub const MIDDLE_TIP: &str = "middle_tip";
}

/// Error returned by [`SourceShape::new`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    /// A stroke refers to an anchor that does not exist.
    #[error("stroke {stroke} references anchor {index}, but the shape has {len} anchors")]
    StrokeOutOfRange { stroke: usize, index: usize, len: usize },
    /// An anchor offset is NaN or infinite.
    #[error("anchor '{label}' has a non-finite offset")]
    NonFiniteOffset { label: String },
}

/// A named point of the source, stored as an offset from the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub label: String,
    pub dx: f64,
    pub dy: f64,
}

impl Anchor {
    #[must_use]
    pub fn new(label: impl Into<String>, dx: f64, dy: f64) -> Self {
        Self { label: label.into(), dx, dy }
    }
}

/// The light source silhouette.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceShape {
    origin: Point,
    anchors: Vec<Anchor>,
    strokes: Vec<(usize, usize)>,
}

impl SourceShape {
    /// Build a shape, checking that every stroke names a real anchor.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::StrokeOutOfRange`] for a dangling stroke index
    /// and [`ShapeError::NonFiniteOffset`] for a NaN or infinite offset.
    pub fn new(origin: Point, anchors: Vec<Anchor>, strokes: Vec<(usize, usize)>) -> Result<Self, ShapeError> {
        if let Some(anchor) = anchors.iter().find(|a| !a.dx.is_finite() || !a.dy.is_finite()) {
            return Err(ShapeError::NonFiniteOffset { label: anchor.label.clone() });
        }
        for (stroke, &(a, b)) in strokes.iter().enumerate() {
            for index in [a, b] {
                if index >= anchors.len() {
                    return Err(ShapeError::StrokeOutOfRange { stroke, index, len: anchors.len() });
                }
            }
        }
        Ok(Self { origin, anchors, strokes })
    }

    /// The "F" flag: a pole with two bars of different heights, each bar
    /// tilted up and to the right so that flips and mirrors are visible.
    #[must_use]
    pub fn flag(origin: Point) -> Self {
        let half_w = FLAG_WIDTH / 2.0;
        let anchors = vec![
            Anchor::new(flag::TOP, 0.0, -FLAG_HEIGHT),
            Anchor::new(flag::TOP_TIP, FLAG_WIDTH, -FLAG_HEIGHT - half_w),
            Anchor::new(flag::BASE, 0.0, 0.0),
            Anchor::new(flag::MIDDLE, 0.0, -FLAG_HEIGHT / 2.0),
            Anchor::new(flag::MIDDLE_TIP, FLAG_WIDTH, -FLAG_HEIGHT / 2.0 - half_w),
        ];
        Self { origin, anchors, strokes: vec![(0, 1), (0, 2), (3, 4)] }
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Move the drag handle; anchors follow.
    pub fn move_to(&mut self, origin: Point) {
        self.origin = origin;
    }

    #[must_use]
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    #[must_use]
    pub fn strokes(&self) -> &[(usize, usize)] {
        &self.strokes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// How far the shape extends right of its origin. Zero when no anchor
    /// sits right of the origin.
    #[must_use]
    pub fn reach(&self) -> f64 {
        self.anchors.iter().map(|a| a.dx).fold(0.0, f64::max)
    }

    /// Absolute anchor positions in anchor order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.anchors.iter().map(|a| self.origin.offset(a.dx, a.dy))
    }

    pub fn labeled_points(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.anchors
            .iter()
            .map(|a| (a.label.as_str(), self.origin.offset(a.dx, a.dy)))
    }
}
