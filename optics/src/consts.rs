//! Default layout constants for the pinhole scene, in scene units.

// ── Scene ───────────────────────────────────────────────────────

/// Width of the scene viewbox.
pub const SCENE_WIDTH: f64 = 800.0;

/// Height of the scene viewbox.
pub const SCENE_HEIGHT: f64 = 500.0;

/// Default pinhole position.
pub const PINHOLE_X: f64 = 400.0;
pub const PINHOLE_Y: f64 = 250.0;

/// Default horizontal plane of the projection screen.
pub const SCREEN_X: f64 = 700.0;

// ── Source bounds ───────────────────────────────────────────────

/// Leftmost x the source origin may be dragged to.
pub const SOURCE_MIN_X: f64 = 50.0;

/// Minimum horizontal gap kept between the source origin and the pinhole.
pub const SOURCE_MIN_GAP: f64 = 50.0;

/// Minimum horizontal gap kept between every source anchor and the pinhole.
/// With the reference flag this limit coincides with `SOURCE_MIN_GAP`.
pub const SOURCE_MIN_ANCHOR_GAP: f64 = 10.0;

/// Vertical margin kept between the source origin and the scene edges.
pub const SOURCE_MARGIN_Y: f64 = 100.0;

/// Initial source origin.
pub const SOURCE_START_X: f64 = 100.0;
pub const SOURCE_START_Y: f64 = 250.0;

// ── Flag shape ──────────────────────────────────────────────────

/// Height of the flag pole.
pub const FLAG_HEIGHT: f64 = 100.0;

/// Horizontal reach of each flag bar.
pub const FLAG_WIDTH: f64 = 40.0;

// ── Furniture ───────────────────────────────────────────────────

/// Barrier thickness and height, centered on the pinhole.
pub const BARRIER_WIDTH: f64 = 60.0;
pub const BARRIER_HEIGHT: f64 = 200.0;

/// Screen face extents relative to the screen plane.
pub const SCREEN_FACE_LEFT: f64 = 100.0;
pub const SCREEN_FACE_RIGHT: f64 = 40.0;
pub const SCREEN_FACE_TOP: f64 = 50.0;
pub const SCREEN_FACE_BOTTOM: f64 = 450.0;
pub const SCREEN_FACE_SKEW: f64 = 70.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels around the source strokes.
pub const HANDLE_RADIUS_PX: f64 = 8.0;
