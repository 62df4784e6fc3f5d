#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::geometry::Point;

/// Maps CSS pixels on the host element to scene coordinates.
///
/// `pan_x` / `pan_y` are in CSS pixels.
/// `zoom` is CSS pixels per scene unit (1.0 = scene drawn at native size).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Viewport {
    /// Fit a `scene_w` x `scene_h` scene inside a `css_w` x `css_h` element,
    /// preserving aspect ratio and centering the slack (SVG `xMidYMid meet`).
    ///
    /// Degenerate sizes fall back to the identity mapping.
    #[must_use]
    pub fn fit(css_w: f64, css_h: f64, scene_w: f64, scene_h: f64) -> Self {
        if css_w <= 0.0 || css_h <= 0.0 || scene_w <= 0.0 || scene_h <= 0.0 {
            return Self::default();
        }
        let zoom = (css_w / scene_w).min(css_h / scene_h);
        Self { pan_x: (css_w - scene_w * zoom) / 2.0, pan_y: (css_h - scene_h * zoom) / 2.0, zoom }
    }

    /// Convert a screen-space point (CSS pixels) to scene coordinates.
    #[must_use]
    pub fn screen_to_scene(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a scene point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn scene_to_screen(&self, scene: Point) -> Point {
        Point {
            x: scene.x * self.zoom + self.pan_x,
            y: scene.y * self.zoom + self.pan_y,
        }
    }

    /// Convert a screen-space distance (pixels) to a scene distance.
    #[must_use]
    pub fn screen_dist_to_scene(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }
}
