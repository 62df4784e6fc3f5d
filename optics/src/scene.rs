//! Scene constants: pinhole, screen plane, and the bounds the source may move in.
//!
//! A `Scene` is fixed for the lifetime of a session. The geometry functions
//! take its pinhole and screen plane; the interaction layer uses its bounds to
//! keep the source origin where projection is well defined.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    PINHOLE_X, PINHOLE_Y, SCENE_HEIGHT, SCENE_WIDTH, SCREEN_X, SOURCE_MARGIN_Y, SOURCE_MIN_ANCHOR_GAP, SOURCE_MIN_GAP,
    SOURCE_MIN_X,
};
use crate::geometry::{self, Point, Projection};
use crate::shape::SourceShape;

/// Error returned when scene constants are inconsistent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    /// A constant is NaN or infinite.
    #[error("scene field `{0}` is not finite")]
    NonFinite(&'static str),
    /// The screen must sit to the right of the pinhole.
    #[error("screen plane x={screen_x} must be right of pinhole x={pinhole_x}")]
    ScreenNotBehindPinhole { pinhole_x: f64, screen_x: f64 },
    /// The gap must be positive or projection can blow up at the clamp limit.
    #[error("minimum pinhole gap must be positive, got {0}")]
    NonPositiveGap(f64),
    /// Same as `NonPositiveGap`, for the gap kept by every anchor.
    #[error("minimum anchor gap must be positive, got {0}")]
    NonPositiveAnchorGap(f64),
    /// The pinhole or screen plane lies outside the viewbox.
    #[error("{field}={value} is outside the scene [0, {limit}]")]
    OutOfView { field: &'static str, value: f64, limit: f64 },
    /// No x satisfies both the left boundary and the pinhole gap.
    #[error("empty horizontal source range [{min}, {max}]")]
    EmptyHorizontalRange { min: f64, max: f64 },
    /// The vertical margins overlap.
    #[error("empty vertical source range [{min}, {max}]")]
    EmptyVerticalRange { min: f64, max: f64 },
}

/// Error returned by [`Scene::try_project`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectionError {
    /// The anchor is at or past the pinhole plane.
    #[error("anchor '{label}' is {distance} units from the pinhole plane; projection needs a positive distance")]
    Degenerate { label: String, distance: f64 },
    /// The anchor position is NaN or infinite.
    #[error("anchor '{label}' has a non-finite position")]
    NonFinite { label: String },
}

/// Where the source origin is allowed to go.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneBounds {
    /// Viewbox width.
    pub width: f64,
    /// Viewbox height.
    pub height: f64,
    /// Leftmost origin x.
    pub min_x: f64,
    /// Minimum `pinhole.x - origin.x`.
    pub min_gap: f64,
    /// Minimum `pinhole.x - anchor.x` over every anchor of the source.
    pub min_anchor_gap: f64,
    /// Distance kept from the top and bottom edges.
    pub margin_y: f64,
}

impl Default for SceneBounds {
    fn default() -> Self {
        Self {
            width: SCENE_WIDTH,
            height: SCENE_HEIGHT,
            min_x: SOURCE_MIN_X,
            min_gap: SOURCE_MIN_GAP,
            min_anchor_gap: SOURCE_MIN_ANCHOR_GAP,
            margin_y: SOURCE_MARGIN_Y,
        }
    }
}

/// Fixed scene layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub pinhole: Point,
    pub screen_x: f64,
    pub bounds: SceneBounds,
}

impl Default for Scene {
    fn default() -> Self {
        Self { pinhole: Point::new(PINHOLE_X, PINHOLE_Y), screen_x: SCREEN_X, bounds: SceneBounds::default() }
    }
}

impl Scene {
    /// Build and validate a scene.
    ///
    /// # Errors
    ///
    /// Returns a [`SceneError`] when [`Scene::validate`] fails.
    pub fn new(pinhole: Point, screen_x: f64, bounds: SceneBounds) -> Result<Self, SceneError> {
        let scene = Self { pinhole, screen_x, bounds };
        scene.validate()?;
        Ok(scene)
    }

    /// Check that the constants describe a usable scene.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn validate(&self) -> Result<(), SceneError> {
        let fields = [
            ("pinhole.x", self.pinhole.x),
            ("pinhole.y", self.pinhole.y),
            ("screen_x", self.screen_x),
            ("bounds.width", self.bounds.width),
            ("bounds.height", self.bounds.height),
            ("bounds.min_x", self.bounds.min_x),
            ("bounds.min_gap", self.bounds.min_gap),
            ("bounds.min_anchor_gap", self.bounds.min_anchor_gap),
            ("bounds.margin_y", self.bounds.margin_y),
        ];
        if let Some((name, _)) = fields.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(SceneError::NonFinite(name));
        }
        if self.screen_x <= self.pinhole.x {
            return Err(SceneError::ScreenNotBehindPinhole { pinhole_x: self.pinhole.x, screen_x: self.screen_x });
        }
        if self.bounds.min_gap <= 0.0 {
            return Err(SceneError::NonPositiveGap(self.bounds.min_gap));
        }
        if self.bounds.min_anchor_gap <= 0.0 {
            return Err(SceneError::NonPositiveAnchorGap(self.bounds.min_anchor_gap));
        }
        let placed = [
            ("pinhole.x", self.pinhole.x, self.bounds.width),
            ("pinhole.y", self.pinhole.y, self.bounds.height),
            ("screen_x", self.screen_x, self.bounds.width),
        ];
        if let Some((field, value, limit)) = placed.into_iter().find(|&(_, v, limit)| v < 0.0 || v > limit) {
            return Err(SceneError::OutOfView { field, value, limit });
        }
        let (min, max) = self.source_x_range();
        if min > max {
            return Err(SceneError::EmptyHorizontalRange { min, max });
        }
        let (min, max) = self.source_y_range();
        if min > max {
            return Err(SceneError::EmptyVerticalRange { min, max });
        }
        Ok(())
    }

    #[must_use]
    pub fn distance_to_screen(&self) -> f64 {
        self.screen_x - self.pinhole.x
    }

    /// Inclusive range of allowed origin x.
    #[must_use]
    pub fn source_x_range(&self) -> (f64, f64) {
        (self.bounds.min_x, self.pinhole.x - self.bounds.min_gap)
    }

    /// Inclusive range of allowed origin y.
    #[must_use]
    pub fn source_y_range(&self) -> (f64, f64) {
        (self.bounds.margin_y, self.bounds.height - self.bounds.margin_y)
    }

    /// Allowed origin x for `shape`: the origin range narrowed so every
    /// anchor stays at least `min_anchor_gap` left of the pinhole.
    #[must_use]
    pub fn source_x_range_for(&self, shape: &SourceShape) -> (f64, f64) {
        let (min, max) = self.source_x_range();
        let anchor_max = self.pinhole.x - self.bounds.min_anchor_gap - shape.reach();
        (min, max.min(anchor_max))
    }

    /// Clamp a requested origin for `shape` into the allowed source range.
    ///
    /// If the shape is too wide for the range, the pinhole-side limit wins
    /// so every anchor stays projectable.
    #[must_use]
    pub fn clamp_origin(&self, shape: &SourceShape, requested: Point) -> Point {
        let (min_x, max_x) = self.source_x_range_for(shape);
        let (min_y, max_y) = self.source_y_range();
        let clamped = Point::new(requested.x.max(min_x).min(max_x), requested.y.min(max_y).max(min_y));
        if clamped != requested {
            tracing::trace!(
                requested_x = requested.x,
                requested_y = requested.y,
                x = clamped.x,
                y = clamped.y,
                "source origin clamped"
            );
        }
        clamped
    }

    /// Rays and projected shape for `shape` in this scene. Never fails; see
    /// [`Scene::try_project`] for the checked variant.
    #[must_use]
    pub fn project(&self, shape: &SourceShape) -> Projection {
        Projection::compute(shape, self.pinhole, self.screen_x)
    }

    /// Like [`Scene::project`], but rejects any anchor that is not strictly
    /// left of the pinhole or is not finite.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError`] naming the first offending anchor.
    pub fn try_project(&self, shape: &SourceShape) -> Result<Projection, ProjectionError> {
        for (label, p) in shape.labeled_points() {
            if !p.is_finite() {
                tracing::debug!(label, "rejecting non-finite anchor");
                return Err(ProjectionError::NonFinite { label: label.to_owned() });
            }
            let distance = self.pinhole.x - p.x;
            if distance <= 0.0 {
                tracing::debug!(label, distance, "rejecting anchor at or past the pinhole");
                return Err(ProjectionError::Degenerate { label: label.to_owned(), distance });
            }
        }
        Ok(self.project(shape))
    }

    /// Magnification at horizontal position `x`.
    #[must_use]
    pub fn ratio_at(&self, x: f64) -> f64 {
        geometry::ratio(x, self.pinhole, self.screen_x)
    }
}
